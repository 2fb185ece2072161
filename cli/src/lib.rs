//! # NewsFeed CLI
//!
//! Command-line front end over the NewsFeed session: sign up, log in and
//! out, inspect the current user and read the news feed.

mod args;
mod commands;
pub mod logging;

pub use args::{Cli, Command};
pub use commands::run;

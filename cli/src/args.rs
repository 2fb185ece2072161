//! Command line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use nf_shared::{ClientConfig, SessionStoreConfig};

#[derive(Parser, Debug)]
#[command(name = "newsfeed")]
#[command(version)]
#[command(about = "NewsFeed command-line client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API base URL (default: API_BASE_URL or API_BASE)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Path of the session file (default: SESSION_FILE or the data directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub session_file: Option<PathBuf>,

    /// Keep tokens in memory only; nothing is written to disk
    #[arg(long, global = true, conflicts_with = "session_file")]
    pub ephemeral: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create an account and log in
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },
    /// Log in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log out and forget the stored tokens
    Logout,
    /// Show the current user
    Me,
    /// Show whether a user is logged in
    Status,
    /// Exchange the stored refresh token for new tokens
    Refresh,
    /// List the news feed
    News {
        /// Show a single item
        #[arg(long, conflicts_with = "watch")]
        id: Option<String>,

        /// Keep polling and print every update
        #[arg(long)]
        watch: bool,

        /// Poll period in seconds (default: NEWS_REFETCH_INTERVAL_SECS)
        #[arg(
            long,
            value_name = "SECS",
            requires = "watch",
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        interval: Option<u64>,
    },
}

impl Cli {
    /// Apply command line overrides on top of the environment configuration
    pub fn apply_overrides(&self, config: &mut ClientConfig) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if self.ephemeral {
            config.session = SessionStoreConfig::memory();
        } else if let Some(path) = &self.session_file {
            config.session = SessionStoreConfig::file(path.clone());
        }
    }
}

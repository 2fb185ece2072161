//! REST API client

mod client;
mod response;

#[cfg(test)]
mod tests;

pub use client::HttpApiClient;
pub use response::{decode_body, extract_server_message};

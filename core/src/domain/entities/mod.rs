//! Domain entities exchanged with the NewsFeed API.

pub mod credentials;
pub mod news;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use credentials::{LoginRequest, SignupRequest, MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH};
pub use news::{NewsItem, NewsList};
pub use token::{AuthResponse, RefreshRequest, RefreshResponse, SessionTokens, TokenKind};
pub use user::User;

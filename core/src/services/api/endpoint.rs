//! Fixed REST endpoints consumed by the client

use crate::errors::Operation;

/// HTTP method of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Every endpoint the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Signup,
    Login,
    Logout,
    CurrentUser,
    Refresh,
    News,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::Signup,
        Endpoint::Login,
        Endpoint::Logout,
        Endpoint::CurrentUser,
        Endpoint::Refresh,
        Endpoint::News,
    ];

    /// Path relative to the configured base URL
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Signup => "/auth/signup",
            Endpoint::Login => "/auth/login",
            Endpoint::Logout => "/auth/logout",
            Endpoint::CurrentUser => "/auth/me",
            Endpoint::Refresh => "/auth/refresh",
            Endpoint::News => "/news",
        }
    }

    pub fn method(self) -> HttpMethod {
        match self {
            Endpoint::CurrentUser | Endpoint::News => HttpMethod::Get,
            Endpoint::Signup | Endpoint::Login | Endpoint::Logout | Endpoint::Refresh => {
                HttpMethod::Post
            }
        }
    }

    /// Operation whose failures this endpoint reports
    pub fn operation(self) -> Operation {
        match self {
            Endpoint::Signup => Operation::Signup,
            Endpoint::Login => Operation::Login,
            Endpoint::Logout => Operation::Logout,
            Endpoint::CurrentUser => Operation::CurrentUser,
            Endpoint::Refresh => Operation::RefreshToken,
            Endpoint::News => Operation::FetchNews,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method().as_str(), self.path())
    }
}

//! REST API contract
//!
//! The endpoint table and the client traits the services call through.
//! Concrete HTTP clients live in the infrastructure crate.

mod endpoint;
mod traits;

pub use endpoint::{Endpoint, HttpMethod};
pub use traits::{AuthApi, NewsApi};

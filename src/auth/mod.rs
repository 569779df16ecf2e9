//! # Auth Module
//!
//! Credential verification and token issuance:
//! - `AuthService` checks a username/password pair against the identity store
//! - `TokenIssuer` mints and verifies signed JWT access tokens
//! - `AuthedUser` extractor guards mutating routes

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod token;

#[cfg(test)]
mod tests;

pub use extractors::AuthedUser;
pub use routes::auth_routes;
pub use service::AuthService;
pub use token::TokenIssuer;

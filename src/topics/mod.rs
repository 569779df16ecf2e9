//! # Topics Module
//!
//! CRUD surface over topics. Topic reads eager-load the related Articles so
//! callers receive the full aggregate in one round trip.

pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;

#[cfg(test)]
mod tests;

pub use models::Topic;
pub use repository::TopicRepository;
pub use routes::topics_routes;

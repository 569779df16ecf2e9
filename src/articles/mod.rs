//! # Articles Module
//!
//! CRUD surface over news articles. Articles reference their Topic and their
//! Author by id and are fetched as flat records.

pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;

#[cfg(test)]
mod tests;

pub use models::Article;
pub use repository::ArticleRepository;
pub use routes::articles_routes;

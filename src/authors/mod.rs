//! # Authors Module
//!
//! CRUD surface over authors. Authors share a table with login identities;
//! this module never reads or writes credential material — that stays in the
//! auth module.

pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;


pub use models::Author;
pub use repository::AuthorRepository;
pub use routes::authors_routes;

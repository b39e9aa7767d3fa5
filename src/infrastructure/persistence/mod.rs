//! Registry implementations.
//!
//! # Repositories
//!
//! - [`InMemoryUrlRepository`] - Process-local identifier/URL registry

pub mod memory_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;

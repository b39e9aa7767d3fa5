//! Domain layer containing the registry model and its contracts.
//!
//! Nothing in here knows about HTTP, DNS libraries or locking strategy; the
//! infrastructure layer provides the implementations.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Registry contract ([`repositories::UrlRepository`])
//! - [`resolver`] - Hostname existence check contract ([`resolver::HostResolver`])

pub mod entities;
pub mod repositories;
pub mod resolver;

//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`dns`] - Hostname existence check via the system resolver
//! - [`persistence`] - In-memory registry

pub mod dns;
pub mod persistence;

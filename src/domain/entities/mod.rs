//! Core domain entities.
//!
//! - [`UrlRecord`] - A registered URL and its numeric identifier

pub mod url_record;

pub use url_record::UrlRecord;

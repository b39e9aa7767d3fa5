//! Utility functions shared across layers.
//!
//! - [`url_validator`] - Validation of submitted URLs

pub mod url_validator;

//! Hostname existence check backed by the system resolver.
//!
//! Provides [`SystemResolver`], the production [`crate::domain::resolver::HostResolver`].

mod system_resolver;

pub use system_resolver::SystemResolver;

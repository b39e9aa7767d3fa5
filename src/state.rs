//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortUrlService;
use crate::domain::repositories::UrlRepository;
use crate::domain::resolver::HostResolver;

/// Service type held by the state, erased over its backends.
pub type DynShortUrlService = ShortUrlService<dyn UrlRepository, dyn HostResolver>;

#[derive(Clone)]
pub struct AppState {
    pub short_url_service: Arc<DynShortUrlService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn UrlRepository>, resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            short_url_service: Arc::new(ShortUrlService::new(repository, resolver)),
        }
    }
}

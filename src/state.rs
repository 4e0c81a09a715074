//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService};
use crate::domain::repositories::LinkRepository;
use crate::utils::url_rewriter::UrlRewriter;

/// Name reported by `/health` and `/api/config`.
pub const SERVICE_NAME: &str = "link-cloner";

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub redirect_service: Arc<RedirectService<dyn LinkRepository>>,
}

impl AppState {
    /// Wires both services to one link store.
    pub fn new(link_repository: Arc<dyn LinkRepository>, rewriter: UrlRewriter) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone(), rewriter)),
            redirect_service: Arc::new(RedirectService::new(link_repository)),
        }
    }

    /// Alternate domain rewriter configuration.
    pub fn rewriter(&self) -> &UrlRewriter {
        self.link_service.rewriter()
    }
}

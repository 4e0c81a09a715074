#![allow(dead_code)]

use axum_test::TestServer;
use link_cloner::domain::entities::NewLink;
use link_cloner::domain::repositories::LinkRepository;
use link_cloner::infrastructure::persistence::InMemoryLinkRepository;
use link_cloner::routes::build_router;
use link_cloner::state::AppState;
use link_cloner::utils::url_rewriter::UrlRewriter;
use std::sync::Arc;

pub const TEST_HOST: &str = "short.test";
pub const TEST_ORIGIN: &str = "http://short.test";

pub fn create_test_state(repo: InMemoryLinkRepository, alt_domain: Option<&str>) -> AppState {
    AppState::new(
        Arc::new(repo),
        UrlRewriter::new(alt_domain.map(str::to_string)),
    )
}

/// Full application router over an in-memory store.
pub fn test_server(alt_domain: Option<&str>) -> (TestServer, InMemoryLinkRepository) {
    let repo = InMemoryLinkRepository::new();
    let state = create_test_state(repo.clone(), alt_domain);

    let server = TestServer::new(build_router(state, "static")).unwrap();

    (server, repo)
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, id: &str, target: &str, mask: bool) {
    repo.save(NewLink {
        id: id.to_string(),
        target: target.to_string(),
        tracking_id: None,
        use_alt_domain: false,
        add_utm: false,
        apply_mask: mask,
    })
    .await
    .unwrap();
}

//! Short id resolution.

use std::sync::Arc;

use crate::domain::RedirectOutcome;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::id_generator::is_valid_id;

/// Decides between direct redirect and masking page for a short id.
///
/// Read-only: resolving the same id twice yields the same outcome.
pub struct RedirectService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> RedirectService<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Resolves `id` to a [`RedirectOutcome`].
    ///
    /// Ids that cannot have been generated resolve to
    /// [`RedirectOutcome::NotFound`] without a store lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors; unknown ids are an
    /// outcome, not an error.
    pub async fn resolve(&self, id: &str) -> Result<RedirectOutcome, AppError> {
        if !is_valid_id(id) {
            tracing::debug!("Id {:?} is not a short id", id);
            return Ok(RedirectOutcome::NotFound);
        }

        let outcome = match self.link_repository.find_by_id(id).await? {
            None => RedirectOutcome::NotFound,
            Some(link) if link.apply_mask => RedirectOutcome::MaskedPage {
                target: link.target,
                id: link.id,
            },
            Some(link) => RedirectOutcome::DirectRedirect {
                target: link.target,
            },
        };

        tracing::debug!("Resolved {}: {:?}", id, outcome);

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn create_test_link(id: &str, target: &str, apply_mask: bool) -> Link {
        Link::new(
            id.to_string(),
            target.to_string(),
            None,
            false,
            false,
            apply_mask,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = RedirectService::new(Arc::new(mock_link_repo));

        let outcome = service.resolve("abcd1234").await.unwrap();
        assert_eq!(outcome, RedirectOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_direct_redirect() {
        let mut mock_link_repo = MockLinkRepository::new();

        let link = create_test_link("abcd1234", "https://example.com/x", false);
        mock_link_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        let service = RedirectService::new(Arc::new(mock_link_repo));

        let outcome = service.resolve("abcd1234").await.unwrap();
        assert_eq!(
            outcome,
            RedirectOutcome::DirectRedirect {
                target: "https://example.com/x".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_masked_page() {
        let mut mock_link_repo = MockLinkRepository::new();

        let link = create_test_link("abcd1234", "https://example.com/<b>", true);
        mock_link_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        let service = RedirectService::new(Arc::new(mock_link_repo));

        let outcome = service.resolve("abcd1234").await.unwrap();
        assert_eq!(
            outcome,
            RedirectOutcome::MaskedPage {
                target: "https://example.com/<b>".to_string(),
                id: "abcd1234".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let mut mock_link_repo = MockLinkRepository::new();

        let link = create_test_link("abcd1234", "https://example.com", true);
        mock_link_repo
            .expect_find_by_id()
            .times(2)
            .returning(move |_| Ok(Some(link.clone())));

        let service = RedirectService::new(Arc::new(mock_link_repo));

        let first = service.resolve("abcd1234").await.unwrap();
        let second = service.resolve("abcd1234").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_resolve_foreign_path_skips_store() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_find_by_id().times(0);

        let service = RedirectService::new(Arc::new(mock_link_repo));

        let outcome = service.resolve("favicon.ico").await.unwrap();
        assert_eq!(outcome, RedirectOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_propagates_store_error() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error")));

        let service = RedirectService::new(Arc::new(mock_link_repo));

        let result = service.resolve("abcd1234").await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}

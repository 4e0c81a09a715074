//! Link creation and lookup service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkOptions, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_unique_id;
use crate::utils::url_rewriter::{ExternalLink, UrlRewriter, validate_url};

/// Outcome of a plain shorten request.
#[derive(Debug, Clone)]
pub struct ShortenedLink {
    pub link: Link,
    pub short_url: String,
}

/// Outcome of a clone request, carrying everything the API reports back.
#[derive(Debug, Clone)]
pub struct ClonedLink {
    pub link: Link,
    /// Trimmed URL as submitted, before rewriting.
    pub original_url: String,
    pub external: ExternalLink,
    /// The custom domain from the request, set only when it produced the external link.
    pub custom_domain: Option<String>,
}

/// Service for creating and retrieving short links.
///
/// Runs the write path: validate once, rewrite the target, allocate a
/// collision-checked id, then upsert the record.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    rewriter: UrlRewriter,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, rewriter: UrlRewriter) -> Self {
        Self {
            link_repository,
            rewriter,
        }
    }

    /// Rewriter holding the alternate domain configuration.
    pub fn rewriter(&self) -> &UrlRewriter {
        &self.rewriter
    }

    /// Creates a short link with default options on the request origin.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] for missing or non-http(s) URLs and
    /// [`AppError::IdGenerationExhausted`] if no free id was found.
    pub async fn shorten(&self, url: &str, origin: &str) -> Result<ShortenedLink, AppError> {
        let cloned = self.clone_link(url, LinkOptions::default(), origin).await?;

        Ok(ShortenedLink {
            link: cloned.link,
            short_url: cloned.external.url,
        })
    }

    /// Creates a link with presentation options.
    ///
    /// # Flow
    ///
    /// 1. Validate the URL (only http/https)
    /// 2. Merge UTM parameters if requested
    /// 3. Allocate a unique id (bounded retries)
    /// 4. Upsert the record
    /// 5. Build the external short link from the domain priority chain
    ///
    /// # Errors
    ///
    /// See [`Self::shorten`]; storage failures surface as [`AppError::Internal`].
    pub async fn clone_link(
        &self,
        url: &str,
        options: LinkOptions,
        origin: &str,
    ) -> Result<ClonedLink, AppError> {
        validate_url(url)?;
        let original_url = url.trim().to_string();

        let target = self.rewriter.build_target(&original_url, &options);

        let id = self.allocate_id().await?;

        let new_link = NewLink {
            id,
            target,
            tracking_id: options.tracking_id.clone(),
            use_alt_domain: options.use_alt_domain,
            add_utm: options.add_utm,
            apply_mask: options.apply_mask,
        };

        let link = self.link_repository.save(new_link).await?;

        let external = self
            .rewriter
            .build_external_link(&link.id, &options, origin);

        let custom_domain = if external.custom_domain_used() {
            options.custom_domain
        } else {
            None
        };

        tracing::info!(
            id = %link.id,
            add_utm = link.add_utm,
            masked = link.apply_mask,
            domain = ?external.source,
            "Link created"
        );

        Ok(ClonedLink {
            link,
            original_url,
            external,
            custom_domain,
        })
    }

    /// Retrieves a link by its short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn find_link(&self, id: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found"))
    }

    /// Number of stored links.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Returns true if the link store is reachable.
    pub async fn health_check(&self) -> bool {
        self.link_repository.health_check().await
    }

    async fn allocate_id(&self) -> Result<String, AppError> {
        let repository = Arc::clone(&self.link_repository);

        generate_unique_id(|candidate| {
            let repository = Arc::clone(&repository);
            async move { repository.exists(&candidate).await }
        })
        .await
    }
}

//! Link entity representing a short id → destination mapping.

use chrono::{DateTime, Utc};

/// A stored link with the presentation flags chosen at creation time.
///
/// `target` is the final destination after any rewriting (UTM merge), not the
/// URL the caller originally submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: String,
    pub target: String,
    pub tracking_id: Option<String>,
    pub use_alt_domain: bool,
    pub add_utm: bool,
    pub apply_mask: bool,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        target: String,
        tracking_id: Option<String>,
        use_alt_domain: bool,
        add_utm: bool,
        apply_mask: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            target,
            tracking_id,
            use_alt_domain,
            add_utm,
            apply_mask,
            created_at,
        }
    }
}

/// Input data for storing a link.
///
/// `created_at` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub id: String,
    pub target: String,
    pub tracking_id: Option<String>,
    pub use_alt_domain: bool,
    pub add_utm: bool,
    pub apply_mask: bool,
}

impl NewLink {
    /// Materializes the record as the store would persist it.
    pub fn into_link(self, created_at: DateTime<Utc>) -> Link {
        Link::new(
            self.id,
            self.target,
            self.tracking_id,
            self.use_alt_domain,
            self.add_utm,
            self.apply_mask,
            created_at,
        )
    }
}

/// Presentation options supplied when cloning a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOptions {
    pub use_alt_domain: bool,
    /// Per-request domain for the external link; only consulted with `use_alt_domain`.
    pub custom_domain: Option<String>,
    pub add_utm: bool,
    pub tracking_id: Option<String>,
    pub apply_mask: bool,
}

impl LinkOptions {
    /// Builds options from raw request values.
    ///
    /// Blank `custom_domain` and `tracking_id` are trimmed and treated as absent.
    pub fn new(
        use_alt_domain: bool,
        custom_domain: Option<String>,
        add_utm: bool,
        tracking_id: Option<String>,
        apply_mask: bool,
    ) -> Self {
        Self {
            use_alt_domain,
            custom_domain: non_blank(custom_domain),
            add_utm,
            tracking_id: non_blank(tracking_id),
            apply_mask,
        }
    }
}

impl Default for LinkOptions {
    /// Plain short link: no UTM tagging, home origin, masking page on.
    fn default() -> Self {
        Self {
            use_alt_domain: false,
            custom_domain: None,
            add_utm: false,
            tracking_id: None,
            apply_mask: true,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

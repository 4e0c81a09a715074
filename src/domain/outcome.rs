//! Result of resolving a short id.

/// What the HTTP layer should do for a short id.
///
/// For [`RedirectOutcome::MaskedPage`] the caller must HTML-escape `target`
/// before embedding it in markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// No record for the id.
    NotFound,
    /// Immediate 302 to `target`.
    DirectRedirect { target: String },
    /// Interstitial page for `target`, continuing through `/go/{id}`.
    MaskedPage { target: String, id: String },
}

impl RedirectOutcome {
    /// Destination regardless of masking, `None` when not found.
    pub fn target(&self) -> Option<&str> {
        match self {
            RedirectOutcome::NotFound => None,
            RedirectOutcome::DirectRedirect { target }
            | RedirectOutcome::MaskedPage { target, .. } => Some(target),
        }
    }
}

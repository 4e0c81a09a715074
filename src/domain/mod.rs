//! Domain layer containing business entities and contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`outcome`] - Result of resolving a short id
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; services in [`crate::application::services`] tie it together.

pub mod entities;
pub mod outcome;
pub mod repositories;

pub use outcome::RedirectOutcome;

//! Core domain entities.
//!
//! - [`Link`] - A stored short link
//! - [`NewLink`] - Values for storing a link (id already allocated)
//! - [`LinkOptions`] - Presentation options requested by the caller

pub mod link;

pub use link::{Link, LinkOptions, NewLink};

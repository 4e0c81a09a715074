//! Browser-facing layer.
//!
//! Serves the cloning form and the masking page with Askama templates
//! rendered on the server.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;

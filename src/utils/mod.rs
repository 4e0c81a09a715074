//! Utility functions for id generation, URL rewriting, and request handling.
//!
//! - [`id_generator`] - Short id generation with bounded collision retry
//! - [`url_rewriter`] - URL validation, UTM merge and external link domains
//! - [`extract_origin`] - Request origin extraction from HTTP headers

pub mod extract_origin;
pub mod id_generator;
pub mod url_rewriter;

//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link and clone creation
//! - [`services::redirect_service::RedirectService`] - Short id resolution

pub mod services;

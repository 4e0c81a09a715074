//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod clone;
pub mod config;
pub mod health;
pub mod redirect;
pub mod shorten;

pub use clone::clone_handler;
pub use config::config_handler;
pub use health::health_handler;
pub use redirect::{continue_handler, redirect_handler};
pub use shorten::shorten_handler;

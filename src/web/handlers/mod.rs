//! HTML template rendering handlers.

mod home;
mod mask;

pub use home::{HomeTemplate, home_handler};
pub use mask::{COUNTDOWN_SECONDS, MaskTemplate};

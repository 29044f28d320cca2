//! HTML template rendering handlers for site pages.

mod home;
mod not_found;

pub use home::home_handler;
pub use not_found::not_found_handler;

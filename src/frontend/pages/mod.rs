//! Page components for the site

mod home;
mod not_found;

pub use home::{HomePage, SITE_TAGLINE, SITE_TITLE};
pub use not_found::NotFound;

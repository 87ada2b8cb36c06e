use std::path::PathBuf;

use crate::common::SiteConfig;
use crate::frontend::styles::Styles;

#[derive(Clone, Debug)]
pub struct AppState {
    pub styles: Styles,
    /// Directory mounted at `/static`.
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            styles: Styles::for_theme(config.theme),
            static_dir: config.static_dir.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

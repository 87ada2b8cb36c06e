use std::env::{self, VarError};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;
use std::str::FromStr;

use crate::common::ConfigError;

pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));
const DEFAULT_STATIC_DIR: &str = "./static";

/// Which class-name contract the rendered markup targets.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum ThemeKind {
    #[default]
    Infima,
    Tailwind,
}

impl ThemeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Infima => "infima",
            Self::Tailwind => "tailwind",
        }
    }
}

impl std::fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThemeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "infima" => Ok(Self::Infima),
            "tailwind" => Ok(Self::Tailwind),
            _ => Err(ConfigError::UnknownTheme(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind_addr: SocketAddr,
    pub theme: ThemeKind,
    pub static_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            theme: ThemeKind::default(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl SiteConfig {
    /// Reads `BIND_ADDR`, `SITE_THEME` and `STATIC_DIR` from the process
    /// environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key)),
        })
    }

    /// Same as [`SiteConfig::from_env`] with a caller supplied lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<Option<String>, ConfigError>,
    {
        let non_empty = |key: &'static str| -> Result<Option<String>, ConfigError> {
            Ok(lookup(key)?
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()))
        };

        let bind_addr = match non_empty("BIND_ADDR")? {
            Some(raw) => raw
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr(raw.clone()))?,
            None => DEFAULT_BIND_ADDR,
        };

        let theme = match non_empty("SITE_THEME")? {
            Some(raw) => raw.parse()?,
            None => ThemeKind::default(),
        };

        let static_dir = non_empty("STATIC_DIR")?
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            bind_addr,
            theme,
            static_dir,
        })
    }
}

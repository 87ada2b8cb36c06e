use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown site theme {0:?} (expected \"infima\" or \"tailwind\")")]
    UnknownTheme(String),

    #[error("Invalid bind address {0:?}")]
    InvalidBindAddr(String),

    #[error("Environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

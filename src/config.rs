use std::net::SocketAddr;
use std::path::PathBuf;

use common::{ClientSettings, DisplayLocale};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

/// Host configuration, filled from CLI arguments and the environment
#[derive(Debug, Clone, Validate)]
pub struct HostConfig {
    pub bind_address: String,
    pub static_dir: PathBuf,
    #[validate(custom(function = "validate_api_base_url"))]
    pub api_base_url: String,
    #[validate(length(min = 2, max = 10))]
    pub locale: String,
    #[validate(length(equal = 3))]
    pub currency: String,
    #[validate(range(min = 1, max = 365))]
    pub history_days: u32,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address '{0}'")]
    BindAddress(String),

    #[error("Static directory {0} does not contain index.html")]
    StaticDir(PathBuf),

    #[error("Invalid settings: {0}")]
    Invalid(#[from] ValidationErrors),
}

fn validate_api_base_url(url: &str) -> Result<(), ValidationError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::new("api_base_url_scheme"))
    }
}

impl HostConfig {
    /// Validate everything needed to start serving and return the socket to bind
    pub fn check(&self) -> Result<SocketAddr, ConfigError> {
        self.validate()?;

        if !self.static_dir.join("index.html").is_file() {
            return Err(ConfigError::StaticDir(self.static_dir.clone()));
        }

        self.bind_address
            .parse()
            .map_err(|_| ConfigError::BindAddress(self.bind_address.clone()))
    }

    /// Settings handed to the browser, normalized the way the client renders them
    pub fn client_settings(&self) -> ClientSettings {
        let locale = DisplayLocale::from_tag(&self.locale).with_currency(&self.currency);
        ClientSettings {
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            locale: locale.tag.to_string(),
            currency_code: locale.currency_code,
            history_days: self.history_days,
        }
    }
}

use std::num::NonZeroU16;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: NonZeroU16,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT invalid: {0}")]
    InvalidPort(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
        let port = port_str
            .parse::<u16>()
            .ok()
            .and_then(NonZeroU16::new)
            .ok_or(ConfigError::InvalidPort(port_str))?;

        Ok(Self { port })
    }
}

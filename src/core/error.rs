

use thiserror::Error;


#[derive(Error, Debug)]
pub enum PhayaoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Navigation error: {0}")]
    Navigation(String),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("API error: {message}")]
    Api { message: String, status: Option<u16> },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PhayaoError {
    pub fn api(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Api {
            message: message.into(),
            status,
        }
    }
}


pub type Result<T> = std::result::Result<T, PhayaoError>;

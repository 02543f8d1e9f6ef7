use thiserror::Error;

/// Failure of a single outbound call to the ERP gateway.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The upstream answered, but with a non-2xx status.
    #[error("upstream responded with {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        body: serde_json::Value,
    },

    /// No response was received (connect, TLS handshake, timeout).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not decode upstream response: {message}")]
    Decode { message: String },
}

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AdapterError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Upstream(UpstreamError::Decode {
            message: message.into(),
        })
    }

    /// True for failures caused by the caller rather than by upstream or setup.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::BadRequest { .. } | Self::NotFound { .. } | Self::Unauthorized { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;

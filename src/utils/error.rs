use serde::{Serialize, Serializer};
use thiserror::Error;

/// Prefix of the localization keys consumed by the checkout templates.
pub const TRANSLATION_PREFIX: &str = "mondial_relay.pickup.list.error";

/// Failures of a pickup resolution. These are returned as data to the
/// caller, never raised as infrastructure errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickupError {
    #[error("MAX_SIZE_EXCEEDED")]
    MaxSizeExceeded,

    #[error("DIRECTORY_ERROR:{0}")]
    Directory(String),

    #[error("EMPTY_RESULT")]
    EmptyResult,

    #[error("MALFORMED_ID")]
    MalformedId(String),
}

impl PickupError {
    /// Stable error code exposed in the result envelope.
    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn translation_key(&self) -> String {
        let suffix = match self {
            PickupError::MaxSizeExceeded => "max_size",
            PickupError::Directory(code) => code.as_str(),
            PickupError::EmptyResult => "empty",
            PickupError::MalformedId(_) => "malformed_id",
        };
        format!("{}.{}", TRANSLATION_PREFIX, suffix)
    }

    /// JSON body printed for a failed lookup, list or address alike.
    pub fn to_output(&self) -> serde_json::Value {
        serde_json::json!({
            "errorCode": self.code(),
            "translationKey": self.translation_key(),
        })
    }
}

impl Serialize for PickupError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code())
    }
}

/// Error raised by the directory collaborator, carrying the carrier code
/// verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("directory failure: {code}")]
pub struct DirectoryError {
    pub code: String,
}

impl DirectoryError {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl From<DirectoryError> for PickupError {
    fn from(err: DirectoryError) -> Self {
        PickupError::Directory(err.code)
    }
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, RelayError>;

//! Error types for hook generation.

use std::path::PathBuf;

/// Errors raised before any syntax tree is built.
#[derive(Debug, thiserror::Error)]
pub enum HookgenError {
    /// The endpoint document is not a JSON object of endpoint objects.
    #[error("Failed to parse endpoint definitions: {0}")]
    Input(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigIo {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The configuration document is not valid TOML for `CodegenConfig`.
    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    /// `requestType` or `responseType` is absent or null.
    #[error("Endpoint '{key}' is missing required field '{field}'")]
    MissingField {
        /// Endpoint key
        key: String,
        /// Input field name
        field: &'static str,
    },

    /// `requestType` or `responseType` is present but not a string.
    #[error("Endpoint '{key}' has a non-string value for '{field}': {value}")]
    NonStringField {
        /// Endpoint key
        key: String,
        /// Input field name
        field: &'static str,
        /// JSON text of the offending value
        value: String,
    },

    /// The endpoint key or a type name cannot be used as a TypeScript identifier.
    #[error("Endpoint '{key}' has an invalid identifier in '{field}': {value:?}")]
    InvalidIdentifier {
        /// Endpoint key
        key: String,
        /// `key`, `requestType` or `responseType`
        field: &'static str,
        /// Offending value
        value: String,
    },

    /// Two endpoints derive the same hook name.
    #[error("Endpoint '{key}' reuses hook name '{hook_name}'")]
    DuplicateKey {
        /// Endpoint key of the later entry
        key: String,
        /// Colliding hook name
        hook_name: String,
    },
}

/// Result alias for hook generation.
pub type Result<T, E = HookgenError> = std::result::Result<T, E>;

use thiserror::Error;

/// Internal issues indicating unexpected data or possible bugs.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored numbers column could not be decoded as a JSON array of numbers.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to decode numbers of volante {id} from '{value}': {source}")]
    MalformedNumbers {
        /// ID of the row that failed to decode
        id: i64,
        /// The raw stored value
        value: String,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Numbers could not be encoded for storage.
    #[error("Failed to encode volante numbers: {0}")]
    EncodeNumbers(#[source] serde_json::Error),

    /// A configuration row holds a value of the wrong type.
    #[error("Invalid value '{value}' stored for config key '{key}'")]
    InvalidConfigValue {
        /// Configuration key
        key: String,
        /// The stored value
        value: String,
    },

    /// The JWT library failed to sign a token.
    #[error("Failed to sign admin token: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),
}

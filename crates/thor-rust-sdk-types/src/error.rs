//! Error types for the THORChain SDK.
//!
//! Local encoding failures ([`ThorError::MalformedVarint`],
//! [`ThorError::AddressFormat`], [`ThorError::EncodingInvariantViolation`],
//! [`ThorError::Transaction`]) are raised while a transaction is being
//! assembled and always happen before any network call. Everything else comes
//! from the transport.
//!
//! A transaction that the chain accepts as well-formed but rejects on its own
//! rules (insufficient funds, unknown message type) is *not* an error. It is
//! returned as a [`crate::api_types::broadcast::BroadcastTxResult`].

use thiserror::Error;

/// A specialized Result type for THORChain SDK operations.
pub type ThorResult<T> = Result<T, ThorError>;

/// The main error type for the THORChain SDK.
#[derive(Error, Debug)]
pub enum ThorError {
    /// A varint ran past ten groups or past the end of the buffer.
    #[error("Malformed varint: {0}")]
    MalformedVarint(String),

    /// An address string could not be turned into a 20-byte account id.
    #[error("Invalid address format: {0}")]
    AddressFormat(String),

    /// A field number or field order that the wire format cannot represent.
    #[error("Encoding invariant violated: {0}")]
    EncodingInvariantViolation(String),

    /// The transaction could not be assembled from the supplied parts.
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// Error occurred during HTTP communication
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error occurred during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error occurred during URL parsing
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// A header name supplied to the client builder was invalid
    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),

    /// A header value supplied to the client builder was invalid
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    /// The RPC endpoint answered with a non-success HTTP status
    #[error("API error ({status_code}): {message}")]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Response body, or a placeholder if it could not be read
        message: String,
    },

    /// The RPC endpoint answered with a JSON-RPC error object
    #[error("RPC error ({code}): {message}")]
    Rpc {
        /// JSON-RPC error code
        code: i64,
        /// JSON-RPC error message
        message: String,
        /// Optional free-form error detail
        data: Option<String>,
    },

    /// Any other error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl ThorError {
    /// Creates a new malformed varint error
    pub fn malformed_varint<S: Into<String>>(msg: S) -> Self {
        Self::MalformedVarint(msg.into())
    }

    /// Creates a new address format error
    pub fn address_format<S: Into<String>>(msg: S) -> Self {
        Self::AddressFormat(msg.into())
    }

    /// Creates a new encoding invariant error
    pub fn encoding<S: Into<String>>(msg: S) -> Self {
        Self::EncodingInvariantViolation(msg.into())
    }

    /// Creates a new transaction error
    pub fn transaction<S: Into<String>>(msg: S) -> Self {
        Self::Transaction(msg.into())
    }

    /// Creates a new API error from a status code and body
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
        }
    }

    /// Returns true if the error was raised while building the transaction,
    /// i.e. before anything was sent over the network.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MalformedVarint(_)
                | Self::AddressFormat(_)
                | Self::EncodingInvariantViolation(_)
                | Self::Transaction(_)
        )
    }
}

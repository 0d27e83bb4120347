//! JSON-RPC types for `broadcast_tx_sync`.

use crate::error::ThorError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";
pub const BROADCAST_TX_SYNC_METHOD: &str = "broadcast_tx_sync";

/// A JSON-RPC 2.0 request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest<P> {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: P,
}

impl<P> JsonRpcRequest<P> {
    pub fn new(id: u64, method: impl Into<String>, params: P) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastTxParams {
    /// Base64 encoded transaction envelope.
    pub tx: String,
}

/// Builds the request the node expects for a base64 transaction.
pub fn broadcast_tx_sync_request(id: u64, tx: impl Into<String>) -> JsonRpcRequest<BroadcastTxParams> {
    JsonRpcRequest::new(id, BROADCAST_TX_SYNC_METHOD, BroadcastTxParams { tx: tx.into() })
}

/// A JSON-RPC 2.0 response. Exactly one of `result` and `error` is set by a
/// conforming server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse<R> {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    pub result: Option<R>,
    pub error: Option<JsonRpcError>,
}

impl<R> JsonRpcResponse<R> {
    /// Returns the result, or the error object converted to [`ThorError::Rpc`].
    pub fn into_result(self) -> Result<R, ThorError> {
        match (self.result, self.error) {
            (_, Some(error)) => Err(error.into()),
            (Some(result), None) => Ok(result),
            (None, None) => Err(ThorError::Rpc {
                code: 0,
                message: "response has neither result nor error".to_string(),
                data: None,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

impl From<JsonRpcError> for ThorError {
    fn from(error: JsonRpcError) -> Self {
        ThorError::Rpc {
            code: error.code,
            message: error.message,
            data: error.data.map(|data| match data {
                Value::String(s) => s,
                other => other.to_string(),
            }),
        }
    }
}

/// Outcome of `broadcast_tx_sync`.
///
/// A non-zero `code` means the node parsed the transaction and turned it down
/// (e.g. code 5, insufficient funds). That is a successful broadcast from the
/// client's point of view; the code is reported as-is and never interpreted
/// here. Codes are only meaningful together with `codespace`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastTxResult {
    pub code: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub log: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hash: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub codespace: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: String,
}

/// Nodes send `null` for empty string fields on some code paths.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl BroadcastTxResult {
    /// The node accepted the transaction into its mempool.
    pub fn is_accepted(&self) -> bool {
        self.code == 0
    }

    /// The rejection details, if the node turned the transaction down.
    pub fn rejection(&self) -> Option<ProtocolRejection> {
        if self.is_accepted() {
            None
        } else {
            Some(ProtocolRejection {
                code: self.code,
                codespace: self.codespace.clone(),
                log: self.log.clone(),
                hash: self.hash.clone(),
            })
        }
    }
}

/// A well-formed transaction the node refused on its own rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolRejection {
    pub code: u32,
    pub codespace: String,
    pub log: String,
    pub hash: String,
}

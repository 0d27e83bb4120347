//! Settings for the `send_transaction` example.

use thor_rust_sdk::client::config::ThorNetwork;
use thor_rust_sdk_types::transaction::TransactionAssembler;
use thor_rust_sdk_types::ThorResult;

/// Address used when `THOR_FROM` / `THOR_TO` are not set.
pub const DEFAULT_ADDRESS: &str = "thor1a3eb9d2cbea51896c33209f2bb5ff979a44201a2";

/// What to send and where, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleSettings {
    pub rpc_url: Option<String>,
    pub from: String,
    pub to: String,
    pub memo: String,
}

impl ExampleSettings {
    /// Reads `THOR_RPC_URL`, `THOR_FROM`, `THOR_TO` and `THOR_MEMO`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let from = lookup("THOR_FROM").unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        Self {
            rpc_url: lookup("THOR_RPC_URL"),
            to: lookup("THOR_TO").unwrap_or_else(|| from.clone()),
            memo: lookup("THOR_MEMO").unwrap_or_else(|| format!("TRADE+:{}", from)),
            from,
        }
    }

    /// Stagenet unless `THOR_RPC_URL` points elsewhere.
    pub fn network(&self) -> ThorResult<ThorNetwork> {
        match &self.rpc_url {
            Some(url) => ThorNetwork::custom(url),
            None => Ok(ThorNetwork::stagenet()),
        }
    }

    pub fn assembler(&self) -> TransactionAssembler {
        TransactionAssembler::new()
            .sender(self.from.as_str())
            .recipient(self.to.as_str())
            .memo(self.memo.as_str())
    }
}

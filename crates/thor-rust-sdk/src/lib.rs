//! # THORChain Rust SDK
//!
//! Transport for transactions built with [`thor_rust_sdk_types`]: network
//! presets, a configurable HTTP client and the `broadcast_tx_sync` JSON-RPC
//! call.
//!
//! ```rust,no_run
//! use thor_rust_sdk::client::config::ThorNetwork;
//! use thor_rust_sdk::client::rpc::{Broadcaster, ThorRpcClient};
//! use thor_rust_sdk_types::transaction::TransactionAssembler;
//!
//! # async fn run() -> thor_rust_sdk_types::ThorResult<()> {
//! let tx = TransactionAssembler::new()
//!     .sender("thor1a3eb9d2cbea51896c33209f2bb5ff979a44201a2")
//!     .recipient("thor1a3eb9d2cbea51896c33209f2bb5ff979a44201a2")
//!     .memo("TEST")
//!     .build()?;
//!
//! let client = ThorRpcClient::builder(ThorNetwork::stagenet()).build()?;
//! let result = client.broadcast_envelope(&tx).await?;
//! if let Some(rejection) = result.rejection() {
//!     println!("rejected with code {}: {}", rejection.code, rejection.log);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use thor_rust_sdk_types as types;

#[cfg(test)]
mod tests;

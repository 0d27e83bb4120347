//! # THORChain Rust SDK types
//!
//! Hand-written protobuf encoding of Cosmos SDK transaction envelopes for
//! THORChain, without any code generation.
//!
//! ```rust
//! use thor_rust_sdk_types::transaction::{assemble, TypeUrl};
//!
//! let addr = "thor1a3eb9d2cbea51896c33209f2bb5ff979a44201a2";
//! let tx = assemble(addr, addr, "TEST", 0, 200_000, TypeUrl::msg_send(), &[0u8; 64])?;
//! // `tx` is ready for `broadcast_tx_sync`.
//! # Ok::<(), thor_rust_sdk_types::ThorError>(())
//! ```
//!
//! ## Modules
//!
//! - [`wire`] - varints, tagged fields and message composition
//! - [`address`] - `thor1` address strings to 20-byte account ids
//! - [`transaction`] - message layers and the transaction assembler
//! - [`api_types`] - JSON-RPC request and response types
//!
//! The produced transactions carry a placeholder signature and no public key.
//! They are structurally valid, but they are not signed.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations, rust_2018_idioms)]

pub mod address;
pub mod api_types;
pub mod error;
pub mod headers;
pub mod transaction;
pub mod wire;

pub use address::{AccountAddress, ADDRESS_LENGTH};
pub use error::{ThorError, ThorResult};

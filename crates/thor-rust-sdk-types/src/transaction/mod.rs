//! Transaction building.
//!
//! The envelope is built inside out:
//!
//! ```text
//! MsgSend ─▶ Any ─▶ TxBody ─┐
//!       SignerInfo + Fee ─▶ AuthInfo ─┼─▶ TxRaw ─▶ base64
//!                         signatures ─┘
//! ```
//!
//! [`TransactionAssembler`] runs the whole pipeline; the individual layers in
//! [`types`] can be encoded on their own.

pub mod assembler;
pub mod types;

pub use assembler::{assemble, TransactionAssembler, DEFAULT_GAS_LIMIT};
pub use types::{
    Any, AuthInfo, Fee, MsgSend, SignerInfo, TxBody, TxRaw, TypeUrl,
    PLACEHOLDER_SIGNATURE_LENGTH,
};

use crate::error::ThorResult;
use crate::wire::EncodedMessage;

/// A message that can be written in protobuf wire format.
pub trait ProtoEncode {
    /// Encodes the message. Fields are emitted in ascending field-number order.
    fn encode(&self) -> ThorResult<EncodedMessage>;
}

//! Transaction message layers.
//!
//! Each struct is one protobuf message of the Cosmos SDK transaction format,
//! restricted to the fields this SDK fills in. Field numbers match the
//! upstream `.proto` definitions.

use crate::address::AccountAddress;
use crate::error::ThorResult;
use crate::transaction::ProtoEncode;
use crate::wire::{EncodedMessage, MessageBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the placeholder signature used until real signing exists.
pub const PLACEHOLDER_SIGNATURE_LENGTH: usize = 64;

/// Identifies the message kind carried inside an [`Any`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeUrl(String);

impl TypeUrl {
    /// THORChain bank send. The chain rejects `/cosmos.bank.v1beta1.MsgSend`.
    pub const MSG_SEND: &'static str = "/types.MsgSend";
    /// THORChain deposit; swaps, withdrawals and other memo-driven actions go through it.
    pub const MSG_DEPOSIT: &'static str = "/types.MsgDeposit";

    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn msg_send() -> Self {
        Self::new(Self::MSG_SEND)
    }

    pub fn msg_deposit() -> Self {
        Self::new(Self::MSG_DEPOSIT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TypeUrl {
    fn default() -> Self {
        Self::msg_send()
    }
}

impl fmt::Debug for TypeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeUrl({})", self.0)
    }
}

impl fmt::Display for TypeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeUrl {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for TypeUrl {
    fn from(url: String) -> Self {
        Self(url)
    }
}

/// Sender and recipient of a transfer.
///
/// The coin amount (field 3) is not encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSend {
    pub from_address: AccountAddress,
    pub to_address: AccountAddress,
}

impl MsgSend {
    pub fn new(from_address: AccountAddress, to_address: AccountAddress) -> Self {
        Self {
            from_address,
            to_address,
        }
    }
}

impl ProtoEncode for MsgSend {
    fn encode(&self) -> ThorResult<EncodedMessage> {
        Ok(MessageBuilder::new()
            .bytes(1, self.from_address.as_bytes())?
            .bytes(2, self.to_address.as_bytes())?
            .finalize())
    }
}

/// A type-tagged message: lets one container field hold any message kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Any {
    pub type_url: TypeUrl,
    pub value: EncodedMessage,
}

impl Any {
    pub fn new(type_url: impl Into<TypeUrl>, value: EncodedMessage) -> Self {
        Self {
            type_url: type_url.into(),
            value,
        }
    }

    /// Encodes `message` and wraps it under `type_url`.
    pub fn pack<M: ProtoEncode>(type_url: impl Into<TypeUrl>, message: &M) -> ThorResult<Self> {
        Ok(Self::new(type_url, message.encode()?))
    }
}

impl ProtoEncode for Any {
    fn encode(&self) -> ThorResult<EncodedMessage> {
        Ok(MessageBuilder::new()
            .string(1, self.type_url.as_str())?
            .message(2, &self.value)?
            .finalize())
    }
}

/// The signed-over part of a transaction: its messages and memo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxBody {
    pub messages: Vec<Any>,
    pub memo: String,
    pub timeout_height: u64,
}

impl ProtoEncode for TxBody {
    /// Memo and timeout height are always written, even when empty or zero.
    fn encode(&self) -> ThorResult<EncodedMessage> {
        let messages = self
            .messages
            .iter()
            .map(ProtoEncode::encode)
            .collect::<ThorResult<Vec<_>>>()?;

        Ok(MessageBuilder::new()
            .repeated_bytes(1, &messages)?
            .string(2, &self.memo)?
            .varint(3, self.timeout_height)?
            .finalize())
    }
}

/// Per-signer data. Only the sequence is encoded.
///
/// Public key (field 1) and mode info (field 2) are left out. Nodes that check
/// the balance before the signature still accept the transaction as
/// well-formed; anything else will reject it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerInfo {
    pub sequence: u64,
}

impl ProtoEncode for SignerInfo {
    fn encode(&self) -> ThorResult<EncodedMessage> {
        Ok(MessageBuilder::new().varint(3, self.sequence)?.finalize())
    }
}

/// Fee. Only the gas limit is encoded; the fee amount (field 1) is left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    pub gas_limit: u64,
}

impl ProtoEncode for Fee {
    fn encode(&self) -> ThorResult<EncodedMessage> {
        Ok(MessageBuilder::new().varint(2, self.gas_limit)?.finalize())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthInfo {
    pub signer_infos: Vec<SignerInfo>,
    pub fee: Fee,
}

impl ProtoEncode for AuthInfo {
    fn encode(&self) -> ThorResult<EncodedMessage> {
        let signer_infos = self
            .signer_infos
            .iter()
            .map(ProtoEncode::encode)
            .collect::<ThorResult<Vec<_>>>()?;

        Ok(MessageBuilder::new()
            .repeated_bytes(1, &signer_infos)?
            .message(2, &self.fee.encode()?)?
            .finalize())
    }
}

/// The transaction envelope as broadcast: encoded body, encoded auth info and
/// the raw signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxRaw {
    pub body_bytes: EncodedMessage,
    pub auth_info_bytes: EncodedMessage,
    pub signatures: Vec<Vec<u8>>,
}

impl TxRaw {
    /// Standard base64 of the encoded envelope, without line breaks.
    pub fn to_base64(&self) -> ThorResult<String> {
        Ok(base64::encode(self.encode()?.as_bytes()))
    }
}

impl ProtoEncode for TxRaw {
    fn encode(&self) -> ThorResult<EncodedMessage> {
        Ok(MessageBuilder::new()
            .message(1, &self.body_bytes)?
            .message(2, &self.auth_info_bytes)?
            .repeated_bytes(3, &self.signatures)?
            .finalize())
    }
}

//! Transaction assembler.

use crate::address::decode_address;
use crate::error::{ThorError, ThorResult};
use crate::transaction::types::{
    Any, AuthInfo, Fee, MsgSend, SignerInfo, TxBody, TxRaw, TypeUrl,
    PLACEHOLDER_SIGNATURE_LENGTH,
};
use crate::transaction::ProtoEncode;
use tracing::debug;

/// Default gas limit.
pub const DEFAULT_GAS_LIMIT: u64 = 200_000;

/// Builds a [`TxRaw`] envelope from address strings and transaction
/// parameters.
///
/// Every call to [`build`](Self::build) starts from scratch and the builder
/// holds no state besides its inputs, so the same inputs always give the same
/// bytes.
///
/// The signature defaults to [`PLACEHOLDER_SIGNATURE_LENGTH`] zero bytes. The
/// result is well-formed but unsigned; it will only get past nodes that check
/// balances before signatures.
///
/// # Example
///
/// ```rust
/// use thor_rust_sdk_types::transaction::{TransactionAssembler, TypeUrl};
///
/// let encoded = TransactionAssembler::new()
///     .sender("thor1a3eb9d2cbea51896c33209f2bb5ff979a44201a2")
///     .recipient("thor1a3eb9d2cbea51896c33209f2bb5ff979a44201a2")
///     .memo("TEST")
///     .sequence(0)
///     .gas_limit(200_000)
///     .type_url(TypeUrl::msg_send())
///     .assemble()?;
/// assert!(encoded.starts_with("Ckg"));
/// # Ok::<(), thor_rust_sdk_types::ThorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TransactionAssembler {
    sender: Option<String>,
    recipient: Option<String>,
    memo: String,
    sequence: u64,
    gas_limit: u64,
    timeout_height: u64,
    type_url: TypeUrl,
    signatures: Vec<Vec<u8>>,
    extra_messages: Vec<Any>,
}

impl Default for TransactionAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sender: None,
            recipient: None,
            memo: String::new(),
            sequence: 0,
            gas_limit: DEFAULT_GAS_LIMIT,
            timeout_height: 0,
            type_url: TypeUrl::default(),
            signatures: vec![vec![0u8; PLACEHOLDER_SIGNATURE_LENGTH]],
            extra_messages: Vec::new(),
        }
    }

    /// Sets the sender address (`thor1<hex>`).
    #[must_use]
    pub fn sender(mut self, address: impl Into<String>) -> Self {
        self.sender = Some(address.into());
        self
    }

    /// Sets the recipient address (`thor1<hex>`).
    #[must_use]
    pub fn recipient(mut self, address: impl Into<String>) -> Self {
        self.recipient = Some(address.into());
        self
    }

    #[must_use]
    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Sets the sender's account sequence.
    #[must_use]
    pub fn sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    #[must_use]
    pub fn gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    /// Sets the block height after which the transaction is invalid. 0 disables it.
    #[must_use]
    pub fn timeout_height(mut self, timeout_height: u64) -> Self {
        self.timeout_height = timeout_height;
        self
    }

    /// Sets the type URL the transfer message is wrapped under.
    #[must_use]
    pub fn type_url(mut self, type_url: impl Into<TypeUrl>) -> Self {
        self.type_url = type_url.into();
        self
    }

    /// Replaces the signatures with a single one.
    #[must_use]
    pub fn signature(mut self, signature: impl Into<Vec<u8>>) -> Self {
        self.signatures = vec![signature.into()];
        self
    }

    /// Replaces the signatures.
    #[must_use]
    pub fn signatures(mut self, signatures: Vec<Vec<u8>>) -> Self {
        self.signatures = signatures;
        self
    }

    /// Adds a message after the transfer message.
    #[must_use]
    pub fn message(mut self, message: Any) -> Self {
        self.extra_messages.push(message);
        self
    }

    /// Builds the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ThorError::Transaction`] if the sender or recipient is
    /// missing, and [`ThorError::AddressFormat`] if either does not decode.
    pub fn build(&self) -> ThorResult<TxRaw> {
        let sender = self
            .sender
            .as_deref()
            .ok_or_else(|| ThorError::transaction("sender is required"))?;
        let recipient = self
            .recipient
            .as_deref()
            .ok_or_else(|| ThorError::transaction("recipient is required"))?;

        let msg_send = MsgSend::new(decode_address(sender)?, decode_address(recipient)?);
        let inner = msg_send.encode()?;
        debug!(size = inner.len(), "Encoded MsgSend");

        let wrapped = Any::new(self.type_url.clone(), inner);
        let wrapped_len = wrapped.encode()?.len();
        debug!(type_url = %self.type_url, size = wrapped_len, "Wrapped message");

        let mut messages = Vec::with_capacity(1 + self.extra_messages.len());
        messages.push(wrapped);
        messages.extend(self.extra_messages.iter().cloned());

        let body_bytes = TxBody {
            messages,
            memo: self.memo.clone(),
            timeout_height: self.timeout_height,
        }
        .encode()?;
        debug!(size = body_bytes.len(), "Encoded TxBody");

        let auth_info_bytes = AuthInfo {
            signer_infos: vec![SignerInfo {
                sequence: self.sequence,
            }],
            fee: Fee {
                gas_limit: self.gas_limit,
            },
        }
        .encode()?;
        debug!(size = auth_info_bytes.len(), "Encoded AuthInfo");

        Ok(TxRaw {
            body_bytes,
            auth_info_bytes,
            signatures: self.signatures.clone(),
        })
    }

    /// Builds the envelope and returns its base64 transport encoding.
    pub fn assemble(&self) -> ThorResult<String> {
        let tx = self.build()?;
        let encoded = tx.to_base64()?;
        debug!(
            signatures = tx.signatures.len(),
            size = encoded.len(),
            "Assembled transaction"
        );
        Ok(encoded)
    }
}

/// Assembles a single-message transfer and returns it base64 encoded.
///
/// Shorthand for [`TransactionAssembler`] with every parameter given.
pub fn assemble(
    from_addr: &str,
    to_addr: &str,
    memo: &str,
    sequence: u64,
    gas_limit: u64,
    type_url: impl Into<TypeUrl>,
    signature: &[u8],
) -> ThorResult<String> {
    TransactionAssembler::new()
        .sender(from_addr)
        .recipient(to_addr)
        .memo(memo)
        .sequence(sequence)
        .gas_limit(gas_limit)
        .type_url(type_url)
        .signature(signature)
        .assemble()
}

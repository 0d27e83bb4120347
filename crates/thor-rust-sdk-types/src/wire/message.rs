//! Composing fields into messages.

use crate::error::{ThorError, ThorResult};
use crate::wire::field::WireField;
use bytes::Bytes;
use std::fmt;

/// An encoded message: the concatenation of its fields.
///
/// The bytes are opaque to callers. A message is usually either the final
/// output or the payload of a length-delimited field in an enclosing message,
/// see [`MessageBuilder::message`].
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct EncodedMessage(Bytes);

impl EncodedMessage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl AsRef<[u8]> for EncodedMessage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<EncodedMessage> for Vec<u8> {
    fn from(message: EncodedMessage) -> Self {
        message.0.to_vec()
    }
}

impl fmt::Debug for EncodedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedMessage(0x{})", hex::encode(&self.0))
    }
}

/// Accumulates fields in order and produces an [`EncodedMessage`].
///
/// Fields must be appended in ascending field-number order. Appending the same
/// number again is allowed (repeated fields); going backwards is an
/// [`ThorError::EncodingInvariantViolation`].
///
/// ```rust
/// use thor_rust_sdk_types::wire::MessageBuilder;
///
/// let inner = MessageBuilder::new().varint(3, 7)?.finalize();
/// let outer = MessageBuilder::new()
///     .message(1, &inner)?
///     .string(2, "memo")?
///     .finalize();
/// assert_eq!(&outer.as_bytes()[..4], &[0x0au8, 0x02, 0x18, 0x07]);
/// # Ok::<(), thor_rust_sdk_types::ThorError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    buf: Vec<u8>,
    last_field: Option<u32>,
}

impl MessageBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an already constructed field.
    ///
    /// # Errors
    ///
    /// Returns [`ThorError::EncodingInvariantViolation`] if the field number is
    /// lower than the one appended before it.
    pub fn append(&mut self, field: WireField) -> ThorResult<&mut Self> {
        if let Some(last) = self.last_field {
            if field.number() < last {
                return Err(ThorError::encoding(format!(
                    "field {} appended after field {}; fields must be in ascending order",
                    field.number(),
                    last
                )));
            }
        }
        field.encode_into(&mut self.buf);
        self.last_field = Some(field.number());
        Ok(self)
    }

    /// Appends a varint field.
    pub fn varint(mut self, field_number: u32, value: u64) -> ThorResult<Self> {
        self.append(WireField::varint(field_number, value)?)?;
        Ok(self)
    }

    /// Appends a length-delimited field.
    pub fn bytes(mut self, field_number: u32, payload: &[u8]) -> ThorResult<Self> {
        self.append(WireField::bytes(field_number, payload)?)?;
        Ok(self)
    }

    /// Appends a UTF-8 string field.
    pub fn string(self, field_number: u32, text: &str) -> ThorResult<Self> {
        self.bytes(field_number, text.as_bytes())
    }

    /// Embeds a nested message as a length-delimited field.
    pub fn message(self, field_number: u32, message: &EncodedMessage) -> ThorResult<Self> {
        self.bytes(field_number, message.as_bytes())
    }

    /// Appends one length-delimited field per item, all under the same number.
    pub fn repeated_bytes<I, B>(mut self, field_number: u32, items: I) -> ThorResult<Self>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        for item in items {
            self.append(WireField::bytes(field_number, item.as_ref())?)?;
        }
        Ok(self)
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finalize(self) -> EncodedMessage {
        EncodedMessage(Bytes::from(self.buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::field::{bytes_field, varint_field};

    #[test]
    fn test_empty_message() {
        let message = MessageBuilder::new().finalize();
        assert!(message.is_empty());
        assert_eq!(message.as_bytes(), &[] as &[u8]);
    }

    #[test]
    fn test_concatenates_in_append_order() {
        let message = MessageBuilder::new()
            .bytes(1, b"ab")
            .unwrap()
            .string(2, "c")
            .unwrap()
            .varint(3, 0)
            .unwrap()
            .finalize();

        let mut expected = bytes_field(1, b"ab").unwrap();
        expected.extend(bytes_field(2, b"c").unwrap());
        expected.extend(varint_field(3, 0).unwrap());
        assert_eq!(message.to_vec(), expected);
    }

    #[test]
    fn test_nested_message_length_prefix() {
        let inner = MessageBuilder::new()
            .bytes(1, &[0u8; 20])
            .unwrap()
            .bytes(2, &[1u8; 20])
            .unwrap()
            .finalize();
        assert_eq!(inner.len(), 44);

        let outer = MessageBuilder::new().message(2, &inner).unwrap().finalize();
        assert_eq!(outer.as_bytes()[0], 0x12);
        assert_eq!(outer.as_bytes()[1] as usize, inner.len());
        assert_eq!(&outer.as_bytes()[2..], inner.as_bytes());
    }

    #[test]
    fn test_repeated_fields_allowed() {
        let message = MessageBuilder::new()
            .repeated_bytes(1, [b"a".as_slice(), b"b".as_slice()])
            .unwrap()
            .varint(2, 1)
            .unwrap()
            .finalize();
        assert_eq!(
            message.to_vec(),
            vec![0x0a, 0x01, b'a', 0x0a, 0x01, b'b', 0x10, 0x01]
        );
    }

    #[test]
    fn test_descending_order_rejected() {
        let err = MessageBuilder::new()
            .varint(2, 1)
            .unwrap()
            .bytes(1, b"x")
            .unwrap_err();
        assert!(matches!(err, ThorError::EncodingInvariantViolation(_)));
        assert!(err.to_string().contains("ascending"));
    }

    #[test]
    fn test_append_returns_builder_for_chaining() {
        let mut builder = MessageBuilder::new();
        builder
            .append(WireField::varint(1, 1).unwrap())
            .unwrap()
            .append(WireField::varint(2, 2).unwrap())
            .unwrap();
        assert_eq!(builder.len(), 4);
        assert_eq!(builder.finalize().to_vec(), vec![0x08, 0x01, 0x10, 0x02]);
    }

    #[test]
    fn test_debug_is_hex() {
        let message = MessageBuilder::new().varint(1, 1).unwrap().finalize();
        assert_eq!(format!("{:?}", message), "EncodedMessage(0x0801)");
    }
}

//! Tagged fields.
//!
//! A field on the wire is a tag, `(field_number << 3) | wire_type`, written as
//! a varint and followed by the payload. Only two wire types are produced:
//! varints and length-delimited byte strings.

use crate::error::{ThorError, ThorResult};
use crate::wire::varint::{varint_len, write_varint};

/// Largest field number the protobuf wire format can carry (29 bits).
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// How the payload following a tag is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireType {
    /// A single varint.
    Varint = 0,
    /// A varint length followed by that many bytes.
    LengthDelimited = 2,
}

impl WireType {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Payload of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Varint(u64),
    LengthDelimited(Vec<u8>),
}

impl FieldValue {
    pub fn wire_type(&self) -> WireType {
        match self {
            FieldValue::Varint(_) => WireType::Varint,
            FieldValue::LengthDelimited(_) => WireType::LengthDelimited,
        }
    }
}

/// A field number paired with its payload, ready to be appended to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireField {
    number: u32,
    value: FieldValue,
}

impl WireField {
    /// Creates a varint field.
    ///
    /// # Errors
    ///
    /// Returns [`ThorError::EncodingInvariantViolation`] if `number` is 0 or
    /// larger than [`MAX_FIELD_NUMBER`].
    pub fn varint(number: u32, value: u64) -> ThorResult<Self> {
        check_field_number(number)?;
        Ok(Self {
            number,
            value: FieldValue::Varint(value),
        })
    }

    /// Creates a length-delimited field.
    ///
    /// # Errors
    ///
    /// Returns [`ThorError::EncodingInvariantViolation`] if `number` is 0 or
    /// larger than [`MAX_FIELD_NUMBER`].
    pub fn bytes(number: u32, payload: impl Into<Vec<u8>>) -> ThorResult<Self> {
        check_field_number(number)?;
        Ok(Self {
            number,
            value: FieldValue::LengthDelimited(payload.into()),
        })
    }

    /// Creates a length-delimited field holding UTF-8 text.
    pub fn string(number: u32, text: &str) -> ThorResult<Self> {
        Self::bytes(number, text.as_bytes())
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn wire_type(&self) -> WireType {
        self.value.wire_type()
    }

    /// Size of the field once encoded, tag included.
    pub fn encoded_len(&self) -> usize {
        let tag_len = varint_len(tag(self.number, self.wire_type()));
        match &self.value {
            FieldValue::Varint(value) => tag_len + varint_len(*value),
            FieldValue::LengthDelimited(payload) => {
                tag_len + varint_len(payload.len() as u64) + payload.len()
            }
        }
    }

    /// Appends the encoded field to `buf`.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        write_varint(buf, tag(self.number, self.wire_type()));
        match &self.value {
            FieldValue::Varint(value) => write_varint(buf, *value),
            FieldValue::LengthDelimited(payload) => {
                write_varint(buf, payload.len() as u64);
                buf.extend_from_slice(payload);
            }
        }
    }

    /// Returns the encoded field.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut buf);
        buf
    }
}

/// Encodes a varint field: tag with wire type 0, then the value.
pub fn varint_field(field_number: u32, value: u64) -> ThorResult<Vec<u8>> {
    Ok(WireField::varint(field_number, value)?.encode())
}

/// Encodes a length-delimited field: tag with wire type 2, the payload length,
/// then the payload.
pub fn bytes_field(field_number: u32, payload: &[u8]) -> ThorResult<Vec<u8>> {
    Ok(WireField::bytes(field_number, payload)?.encode())
}

/// Encodes a UTF-8 string as a length-delimited field.
pub fn string_field(field_number: u32, text: &str) -> ThorResult<Vec<u8>> {
    bytes_field(field_number, text.as_bytes())
}

fn tag(field_number: u32, wire_type: WireType) -> u64 {
    (u64::from(field_number) << 3) | u64::from(wire_type.as_u8())
}

fn check_field_number(number: u32) -> ThorResult<()> {
    if number == 0 || number > MAX_FIELD_NUMBER {
        return Err(ThorError::encoding(format!(
            "field number {} outside 1..={}",
            number, MAX_FIELD_NUMBER
        )));
    }
    Ok(())
}

//! Minimal protobuf wire-format encoder.
//!
//! Only what a transaction envelope needs: unsigned varints and
//! length-delimited fields, composed into nested messages. There is no schema
//! and no general decoder.

pub mod field;
pub mod message;
pub mod varint;

pub use field::{bytes_field, string_field, varint_field, FieldValue, WireField, WireType};
pub use message::{EncodedMessage, MessageBuilder};
pub use varint::{decode_varint, encode_varint, varint_len};

//! Unsigned base-128 varints.
//!
//! A value is split into 7-bit groups, least-significant group first. Every
//! byte except the last has its high bit set. The encoding of a value is
//! always the shortest one, so it is unique.

use crate::error::{ThorError, ThorResult};

/// A u64 never needs more than ten 7-bit groups.
pub const MAX_VARINT_LEN: usize = 10;

const CONTINUATION_BIT: u8 = 0x80;
const PAYLOAD_MASK: u8 = 0x7f;

/// Encodes `value` as a varint.
pub fn encode_varint(value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(varint_len(value));
    write_varint(&mut buf, value);
    buf
}

/// Appends the varint encoding of `value` to `buf`.
pub fn write_varint(buf: &mut Vec<u8>, mut value: u64) {
    while value > u64::from(PAYLOAD_MASK) {
        buf.push((value as u8 & PAYLOAD_MASK) | CONTINUATION_BIT);
        value >>= 7;
    }
    buf.push(value as u8);
}

/// Number of bytes `encode_varint(value)` produces.
pub fn varint_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.max(1).div_ceil(7)
}

/// Decodes a varint from the front of `buf`.
///
/// Returns the value and the number of bytes consumed. Trailing bytes are
/// left alone.
///
/// # Errors
///
/// Returns [`ThorError::MalformedVarint`] if the buffer ends before a
/// terminating byte, if more than [`MAX_VARINT_LEN`] groups are read, or if the
/// tenth group carries bits beyond the 64th.
pub fn decode_varint(buf: &[u8]) -> ThorResult<(u64, usize)> {
    let mut value = 0u64;

    for (index, &byte) in buf.iter().enumerate() {
        if index == MAX_VARINT_LEN {
            break;
        }

        let group = u64::from(byte & PAYLOAD_MASK);
        // Only the lowest bit of the tenth group still fits in a u64.
        if index == MAX_VARINT_LEN - 1 && group > 1 {
            return Err(ThorError::malformed_varint(
                "varint overflows 64 bits".to_string(),
            ));
        }
        value |= group << (7 * index);

        if byte & CONTINUATION_BIT == 0 {
            return Ok((value, index + 1));
        }
    }

    if buf.len() >= MAX_VARINT_LEN {
        Err(ThorError::malformed_varint(format!(
            "no terminating byte within {} groups",
            MAX_VARINT_LEN
        )))
    } else {
        Err(ThorError::malformed_varint(format!(
            "buffer ended after {} bytes in the middle of a varint",
            buf.len()
        )))
    }
}

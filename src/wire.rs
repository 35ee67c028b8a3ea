//! The six on-wire value encodings defined by the Protocol Buffers spec, and
//! the tag codec built on top of them.

use crate::error::{DecodeError, EncodeError};
use crate::varint::encoded_len_varint;
use crate::writer::Writer;
use std::io::Write;

/// One of the six wire types a field key can carry.
///
/// `StartGroup`/`EndGroup` are recognized so that [`WireType::try_from`]
/// produces a precise error, but no value of this crate ever decodes or
/// encodes them: groups are a deprecated proto2 feature and out of scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum WireType {
    Varint = 0,
    I64 = 1,
    Len = 2,
    StartGroup = 3,
    EndGroup = 4,
    I32 = 5,
}

impl TryFrom<u64> for WireType {
    type Error = DecodeError;

    #[inline]
    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::I64),
            2 => Ok(WireType::Len),
            3 => Ok(WireType::StartGroup),
            4 => Ok(WireType::EndGroup),
            5 => Ok(WireType::I32),
            _ => Err(DecodeError::InvalidWireType { value }),
        }
    }
}

/// The largest field number the wire format can carry in a tag. Unlike the
/// canonical Protocol Buffers spec (which reserves field number 0), this
/// crate treats pid 0 as a valid, if unusual, field number: it decodes like
/// any other unrecognized pid into the `unknown` bag, and schema
/// construction only rejects negative pids, never zero.
pub const MAX_PID: u32 = (1 << 29) - 1;

/// Checks that the wire type found on the stream matches what the schema
/// expected for a non-multiple field.
#[inline]
pub fn check_wire_type(
    name: &'static str,
    expected: WireType,
    actual: WireType,
) -> Result<(), DecodeError> {
    if expected != actual {
        return Err(DecodeError::UnexpectedWireType {
            name,
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        });
    }
    Ok(())
}

/// Rejects the deprecated group wire types outright, wherever they surface.
#[inline]
pub fn reject_group(wire_type: WireType) -> Result<(), DecodeError> {
    match wire_type {
        WireType::StartGroup | WireType::EndGroup => {
            Err(DecodeError::DeprecatedGroupWireType { wire_type })
        }
        _ => Ok(()),
    }
}

/// Encodes a field key: `(pid << 3) | wire_type`, as a varint.
#[inline]
pub fn encode_key<W: Write>(
    pid: u32,
    wire_type: WireType,
    writer: &mut Writer<W>,
) -> Result<usize, EncodeError> {
    let key = (u64::from(pid) << 3) | wire_type as u64;
    writer.write_varint(key)
}

/// Width in bytes of an encoded key for the given pid, used for size
/// estimation during two-pass sizing of packed runs.
#[inline]
pub fn key_len(pid: u32) -> usize {
    encoded_len_varint(u64::from(pid) << 3)
}

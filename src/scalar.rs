//! Encode/decode/size functions for every non-Embed [`ProtoType`](crate::descriptor::ProtoType),
//! one module per type. Mirrors the shape of `prost`'s `varint!`/`fixed_width!`
//! macro-generated submodules in `encoding.rs`, written out by hand since this
//! crate drives a `Reader`/`Writer` byte-stream pair rather than a `bytes::Buf`.
//!
//! Every module exposes the same four functions so `Message::merge_field` and
//! `Message::write_fields` implementations read uniformly field to field:
//! `encode_raw` (value only, no tag — used inside packed runs too),
//! `decode` (value only, wire type already checked by the caller),
//! `encoded_len` (byte length `encode_raw` will produce).
//!
//! `Bool`/`Int32`/`Int64`/`UInt32`/`UInt64`/`SInt32`/`SInt64` all share the
//! `Varint` wire type; `Fixed32`/`SFixed32`/`Float` share `I32`;
//! `Fixed64`/`SFixed64`/`Double` share `I64`; `String`/`Bytes` share `Len`.

use crate::error::{DecodeError, EncodeError};
use crate::reader::Reader;
use crate::varint::{
    encoded_len_varint, int32_to_varint_u64, signed_to_zigzag32, signed_to_zigzag64,
    zigzag_to_signed32, zigzag_to_signed64,
};
use crate::writer::Writer;
use bytes::Bytes;
use std::io::{Read, Write};

pub mod int32 {
    use super::*;

    pub fn encoded_len(value: i32) -> usize {
        encoded_len_varint(int32_to_varint_u64(value))
    }

    pub fn encode_raw<W: Write>(value: i32, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_varint(int32_to_varint_u64(value))
    }

    pub fn decode<R: Read>(reader: &mut Reader<R>) -> Result<i32, DecodeError> {
        Ok(reader.read_varint()? as i32)
    }
}

pub mod int64 {
    use super::*;

    pub fn encoded_len(value: i64) -> usize {
        encoded_len_varint(value as u64)
    }

    pub fn encode_raw<W: Write>(value: i64, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_varint(value as u64)
    }

    pub fn decode<R: Read>(reader: &mut Reader<R>) -> Result<i64, DecodeError> {
        Ok(reader.read_varint()? as i64)
    }
}

pub mod uint32 {
    use super::*;

    pub fn encoded_len(value: u32) -> usize {
        encoded_len_varint(u64::from(value))
    }

    pub fn encode_raw<W: Write>(value: u32, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_varint(u64::from(value))
    }

    pub fn decode<R: Read>(reader: &mut Reader<R>) -> Result<u32, DecodeError> {
        Ok(reader.read_varint()? as u32)
    }
}

pub mod uint64 {
    use super::*;

    pub fn encoded_len(value: u64) -> usize {
        encoded_len_varint(value)
    }

    pub fn encode_raw<W: Write>(value: u64, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_varint(value)
    }

    pub fn decode<R: Read>(reader: &mut Reader<R>) -> Result<u64, DecodeError> {
        reader.read_varint()
    }
}

pub mod sint32 {
    use super::*;

    pub fn encoded_len(value: i32) -> usize {
        encoded_len_varint(u64::from(signed_to_zigzag32(value)))
    }

    pub fn encode_raw<W: Write>(value: i32, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_varint(u64::from(signed_to_zigzag32(value)))
    }

    pub fn decode<R: Read>(reader: &mut Reader<R>) -> Result<i32, DecodeError> {
        Ok(zigzag_to_signed32(reader.read_varint()? as u32))
    }
}

pub mod sint64 {
    use super::*;

    pub fn encoded_len(value: i64) -> usize {
        encoded_len_varint(signed_to_zigzag64(value))
    }

    pub fn encode_raw<W: Write>(value: i64, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_varint(signed_to_zigzag64(value))
    }

    pub fn decode<R: Read>(reader: &mut Reader<R>) -> Result<i64, DecodeError> {
        Ok(zigzag_to_signed64(reader.read_varint()?))
    }
}

pub mod bool_ {
    use super::*;

    pub fn encoded_len(_value: bool) -> usize {
        1
    }

    pub fn encode_raw<W: Write>(value: bool, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_varint(value as u64)
    }

    pub fn decode<R: Read>(reader: &mut Reader<R>) -> Result<bool, DecodeError> {
        Ok(reader.read_varint()? != 0)
    }
}

/// Unsigned, fixed-width 32-bit. Read and write agree on the unsigned
/// interpretation (see DESIGN.md for the rationale).
pub mod fixed32 {
    use super::*;

    pub fn encoded_len(_value: u32) -> usize {
        4
    }

    pub fn encode_raw<W: Write>(value: u32, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_fixed32(value)
    }

    pub fn decode<R: Read>(reader: &mut Reader<R>) -> Result<u32, DecodeError> {
        reader.read_fixed32()
    }
}

pub mod sfixed32 {
    use super::*;

    pub fn encoded_len(_value: i32) -> usize {
        4
    }

    pub fn encode_raw<W: Write>(value: i32, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_fixed32(value as u32)
    }

    pub fn decode<R: Read>(reader: &mut Reader<R>) -> Result<i32, DecodeError> {
        Ok(reader.read_fixed32()? as i32)
    }
}

pub mod float32 {
    use super::*;

    pub fn encoded_len(_value: f32) -> usize {
        4
    }

    pub fn encode_raw<W: Write>(value: f32, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_fixed32(value.to_bits())
    }

    pub fn decode<R: Read>(reader: &mut Reader<R>) -> Result<f32, DecodeError> {
        Ok(f32::from_bits(reader.read_fixed32()?))
    }
}

pub mod fixed64 {
    use super::*;

    pub fn encoded_len(_value: u64) -> usize {
        8
    }

    pub fn encode_raw<W: Write>(value: u64, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_fixed64(value)
    }

    pub fn decode<R: Read>(reader: &mut Reader<R>) -> Result<u64, DecodeError> {
        reader.read_fixed64()
    }
}

pub mod sfixed64 {
    use super::*;

    pub fn encoded_len(_value: i64) -> usize {
        8
    }

    pub fn encode_raw<W: Write>(value: i64, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_fixed64(value as u64)
    }

    pub fn decode<R: Read>(reader: &mut Reader<R>) -> Result<i64, DecodeError> {
        Ok(reader.read_fixed64()? as i64)
    }
}

pub mod float64 {
    use super::*;

    pub fn encoded_len(_value: f64) -> usize {
        8
    }

    pub fn encode_raw<W: Write>(value: f64, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_fixed64(value.to_bits())
    }

    pub fn decode<R: Read>(reader: &mut Reader<R>) -> Result<f64, DecodeError> {
        Ok(f64::from_bits(reader.read_fixed64()?))
    }
}

pub mod string_ {
    use super::*;

    pub fn encoded_len(value: &str) -> usize {
        let len = value.len();
        encoded_len_varint(len as u64) + len
    }

    pub fn encode_raw<W: Write>(value: &str, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_length_delimited(value.as_bytes())
    }

    pub fn decode<R: Read>(reader: &mut Reader<R>) -> Result<String, DecodeError> {
        let bytes = reader.read_length_delimited()?;
        String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidUtf8)
    }
}

pub mod bytes_ {
    use super::*;

    pub fn encoded_len(value: &[u8]) -> usize {
        let len = value.len();
        encoded_len_varint(len as u64) + len
    }

    pub fn encode_raw<W: Write>(value: &[u8], writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_length_delimited(value)
    }

    pub fn decode<R: Read>(reader: &mut Reader<R>) -> Result<Bytes, DecodeError> {
        reader.read_length_delimited()
    }
}

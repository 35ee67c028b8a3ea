//! Generic support for `dict<K, V>` fields, synthesized internally as a
//! `MapEntry` submessage: `key` at pid 1, `value` at pid 2, both `Optional`.
//!
//! Rather than generating a real `Message` impl per `(K, V)` pair the way
//! the schema compiler conceptually does, this mirrors `prost`'s `map`
//! module in `encoding.rs`: plain generic functions parameterized by
//! caller-supplied encode/decode closures for `K` and `V`, so every map
//! field in a hand-written `merge_field`/`write_fields` body calls the same
//! two functions regardless of what `K`/`V` are.

use crate::error::{DecodeError, EncodeError};
use crate::reader::Reader;
use crate::wire::WireType;
use crate::writer::Writer;
use std::io::{Read, Write};

/// Reads one `MapEntry` body (the bytes after the entry's own length
/// prefix) and returns the decoded `(key, value)` pair. Fields are
/// `Optional`: an absent key or value takes its type's default.
pub fn read_entry<R, K, V>(
    reader: &mut Reader<R>,
    key_wire_type: WireType,
    mut decode_key: impl FnMut(&mut Reader<R>) -> Result<K, DecodeError>,
    value_wire_type: WireType,
    mut decode_value: impl FnMut(&mut Reader<R>) -> Result<V, DecodeError>,
) -> Result<(K, V), DecodeError>
where
    R: Read,
    K: Default,
    V: Default,
{
    let len = reader.read_varint()?;
    let begin = reader.position();
    let expected_position = begin + len;

    let mut key = None;
    let mut value = None;

    while reader.position() < expected_position {
        let Some((pid, wire_type)) = reader.read_tag()? else {
            break;
        };
        match pid {
            1 => {
                crate::wire::check_wire_type("key", key_wire_type, wire_type)?;
                key = Some(decode_key(reader)?);
            }
            2 => {
                crate::wire::check_wire_type("value", value_wire_type, wire_type)?;
                value = Some(decode_value(reader)?);
            }
            _ => {
                reader.read_raw_value(wire_type)?;
            }
        }
    }

    if reader.position() != expected_position {
        return Err(DecodeError::NonMatchingDataLength {
            expected: expected_position - begin,
            actual: reader.position() - begin,
        });
    }

    Ok((key.unwrap_or_default(), value.unwrap_or_default()))
}

/// Writes one `(key, value)` pair as a length-prefixed `MapEntry`, skipping
/// whichever half is equal to its default — each `Optional` field of the
/// entry is elided independently.
#[allow(clippy::too_many_arguments)]
pub fn write_entry<W, K, V>(
    writer: &mut Writer<W>,
    key: &K,
    key_wire_type: WireType,
    key_is_default: impl Fn(&K) -> bool,
    encode_key: impl FnOnce(&K, &mut Writer<W>) -> Result<usize, EncodeError>,
    key_encoded_len: impl FnOnce(&K) -> usize,
    value: &V,
    value_wire_type: WireType,
    value_is_default: impl Fn(&V) -> bool,
    encode_value: impl FnOnce(&V, &mut Writer<W>) -> Result<usize, EncodeError>,
    value_encoded_len: impl FnOnce(&V) -> usize,
) -> Result<usize, EncodeError>
where
    W: Write,
{
    let skip_key = key_is_default(key);
    let skip_value = value_is_default(value);

    let body_len = (if skip_key {
        0
    } else {
        crate::wire::key_len(1) + key_encoded_len(key)
    }) + (if skip_value {
        0
    } else {
        crate::wire::key_len(2) + value_encoded_len(value)
    });

    let mut written = writer.write_varint(body_len as u64)?;
    if !skip_key {
        written += writer.write_tag(1, key_wire_type)?;
        written += encode_key(key, writer)?;
    }
    if !skip_value {
        written += writer.write_tag(2, value_wire_type)?;
        written += encode_value(value, writer)?;
    }
    Ok(written)
}

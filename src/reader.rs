//! The schema-aware decoder.
//!
//! `Reader<R>` wraps any [`std::io::Read`] byte-stream collaborator and
//! tracks a running byte position. The per-record dispatch is split between
//! this file (framing, varint/tag reads, the packed-vs-repeated decision,
//! unknown field capture) and each message type's hand-written
//! `Message::merge_field` (the per-field type decode, analogous to
//! `prost`'s derive-generated `merge_field` bodies).

use crate::descriptor::{FieldDescriptor, ProtoMode, RawValue, UnknownFields};
use crate::error::DecodeError;
use crate::message::Message;
use crate::wire::{self, WireType};
use bytes::Bytes;
use std::io::Read;

/// Reads protobuf wire format from an underlying byte stream.
///
/// Not safe to share across threads: like its Python counterpart, a
/// `Reader` owns a mutable position counter and a mutable stream.
pub struct Reader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> Reader<R> {
    pub fn new(inner: R) -> Self {
        Reader { inner, position: 0 }
    }

    /// Bytes consumed from the stream so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    fn read_exact_counted(&mut self, len: usize) -> Result<Bytes, DecodeError> {
        let mut buf = vec![0u8; len];
        let mut filled = 0;
        while filled < len {
            let n = self.inner.read(&mut buf[filled..])?;
            if n == 0 {
                // Short read: fewer bytes arrived than the length delimiter
                // promised.
                return Err(DecodeError::NotEnoughData {
                    expected: len,
                    actual: filled,
                });
            }
            filled += n;
        }
        self.position += len as u64;
        Ok(Bytes::from(buf))
    }

    /// Reads a single byte, distinguishing "the stream has nothing left"
    /// from an actual byte, without treating the former as an error. Used
    /// only to detect a clean end-of-message at a tag boundary.
    fn try_read_byte(&mut self) -> Result<Option<u8>, DecodeError> {
        let mut byte = [0u8; 1];
        let n = self.inner.read(&mut byte)?;
        if n == 0 {
            return Ok(None);
        }
        self.position += 1;
        Ok(Some(byte[0]))
    }

    /// Decodes a varint. EOF at any point here is a hard error: this is only
    /// ever called once the caller already knows more data is expected
    /// (reading a tag's value, a length prefix, or a packed element).
    pub fn read_varint(&mut self) -> Result<u64, DecodeError> {
        let mut result: u64 = 0;
        let mut shift = 0u32;
        loop {
            let byte = self
                .try_read_byte()?
                .ok_or(DecodeError::UnexpectedEof)?;
            result |= u64::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return Ok(result);
            }
            shift += 7;
            if shift >= 70 {
                return Err(DecodeError::InvalidVarint);
            }
        }
    }

    /// Reads the next field's tag, or `None` if the stream ended cleanly
    /// before the tag's first byte.
    pub fn read_tag(&mut self) -> Result<Option<(u32, WireType)>, DecodeError> {
        let first = match self.try_read_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };
        let mut result: u64 = u64::from(first & 0x7F);
        let mut shift = 7u32;
        let mut byte = first;
        while byte & 0x80 != 0 {
            byte = self
                .try_read_byte()?
                .ok_or(DecodeError::UnexpectedEof)?;
            result |= u64::from(byte & 0x7F) << shift;
            shift += 7;
        }

        if result > u64::from(u32::MAX) {
            return Err(DecodeError::InvalidKey { key: result });
        }
        let wire_type = WireType::try_from(result & 0b111)?;
        let pid = (result >> 3) as u32;
        wire::reject_group(wire_type)?;
        Ok(Some((pid, wire_type)))
    }

    pub fn read_fixed32(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.read_exact_counted(4)?;
        Ok(u32::from_le_bytes(bytes.as_ref().try_into().unwrap()))
    }

    pub fn read_fixed64(&mut self) -> Result<u64, DecodeError> {
        let bytes = self.read_exact_counted(8)?;
        Ok(u64::from_le_bytes(bytes.as_ref().try_into().unwrap()))
    }

    /// Reads a varint length prefix followed by that many bytes.
    pub fn read_length_delimited(&mut self) -> Result<Bytes, DecodeError> {
        let len = self.read_varint()?;
        self.read_exact_counted(len as usize)
    }

    /// Reads one value of the given wire type without any schema
    /// knowledge, for the unknown-field path and for fully schemaless
    /// parsing.
    pub fn read_raw_value(&mut self, wire_type: WireType) -> Result<RawValue, DecodeError> {
        match wire_type {
            WireType::Varint => Ok(RawValue::Varint(self.read_varint()?)),
            WireType::I64 => Ok(RawValue::Fixed64(self.read_fixed64()?)),
            WireType::I32 => Ok(RawValue::Fixed32(self.read_fixed32()?)),
            WireType::Len => Ok(RawValue::LengthDelimited(self.read_length_delimited()?)),
            WireType::StartGroup | WireType::EndGroup => {
                Err(DecodeError::DeprecatedGroupWireType { wire_type })
            }
        }
    }

    /// Reads a length-prefixed embedded message, recursing into its schema.
    pub fn read_embedded<M: Message + Default>(&mut self) -> Result<M, DecodeError> {
        let len = self.read_varint()?;
        self.read(Some(len))
    }

    /// Core multi-mode dispatch: given the wire type that actually arrived
    /// for a `Packed`/`Repeated` field, either decode one element (wire type
    /// matches the element's native type) or treat the payload as a packed
    /// run (wire type is `Len` and the element's native type is not).
    pub fn read_packed_or_single<T>(
        &mut self,
        name: &'static str,
        wire_type: WireType,
        native: WireType,
        out: &mut Vec<T>,
        mut decode_one: impl FnMut(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<(), DecodeError> {
        if wire_type == native {
            out.push(decode_one(self)?);
            return Ok(());
        }

        if wire_type != WireType::Len {
            let expected = if native == WireType::Len {
                format!("{native:?}")
            } else {
                format!("{native:?} or Len")
            };
            return Err(DecodeError::UnexpectedWireType {
                name,
                expected,
                actual: format!("{wire_type:?}"),
            });
        }

        let len = self.read_varint()?;
        let begin = self.position;
        let expected_position = begin + len;
        while self.position < expected_position {
            out.push(decode_one(self)?);
        }
        if self.position != expected_position {
            return Err(DecodeError::NonMatchingPackedLength {
                expected: len,
                actual: self.position - begin,
            });
        }
        Ok(())
    }

    /// Reads one `MapEntry` body for a field declared through
    /// [`FieldDescriptor::map_entry`]. `descriptor` must be the field the
    /// caller is decoding; this is the one place `is_map_entry` is actually
    /// consulted rather than just carried as metadata, so a message that
    /// calls this with the wrong descriptor finds out immediately instead
    /// of silently decoding a non-map field as a map entry.
    pub fn read_map_entry<K, V>(
        &mut self,
        descriptor: &FieldDescriptor,
        key_wire_type: WireType,
        decode_key: impl FnMut(&mut Self) -> Result<K, DecodeError>,
        value_wire_type: WireType,
        decode_value: impl FnMut(&mut Self) -> Result<V, DecodeError>,
    ) -> Result<(K, V), DecodeError>
    where
        K: Default,
        V: Default,
    {
        if !descriptor.is_map_entry() {
            return Err(DecodeError::InconsistentMapEntry);
        }
        crate::map_entry::read_entry(self, key_wire_type, decode_key, value_wire_type, decode_value)
    }

    /// Decodes one schema-aware message body, honoring `length` framing:
    /// when given, exactly that many bytes must be consumed.
    pub fn read<M: Message + Default>(&mut self, length: Option<u64>) -> Result<M, DecodeError> {
        let mut message = M::default();
        let begin = self.position;
        let expected_position = length.map(|len| begin + len);

        loop {
            if let Some(expected) = expected_position {
                if self.position >= expected {
                    break;
                }
            }
            let Some((pid, wire_type)) = self.read_tag()? else {
                break;
            };

            match M::schema().by_pid(pid) {
                Some(descriptor) => {
                    log::trace!("decoding field {} (pid {})", descriptor.name(), pid);
                    message.merge_field(pid, wire_type, self)?;
                }
                None => {
                    log::debug!("unknown field pid {pid}, wire type {wire_type:?}");
                    let raw = self.read_raw_value(wire_type)?;
                    message.unknown_mut().entry(pid).or_default().push(raw);
                }
            }
        }

        if let Some(expected) = expected_position {
            if self.position != expected {
                return Err(DecodeError::NonMatchingDataLength {
                    expected: expected - begin,
                    actual: self.position - begin,
                });
            }
        }

        Ok(message)
    }

    /// Decodes a message body with no schema at all, producing
    /// `{pid -> [raw values in arrival order]}`.
    pub fn read_unknown(&mut self, length: Option<u64>) -> Result<UnknownFields, DecodeError> {
        let mut fields = UnknownFields::new();
        let begin = self.position;
        let expected_position = length.map(|len| begin + len);

        loop {
            if let Some(expected) = expected_position {
                if self.position >= expected {
                    break;
                }
            }
            let Some((pid, wire_type)) = self.read_tag()? else {
                break;
            };
            let raw = self.read_raw_value(wire_type)?;
            fields.entry(pid).or_default().push(raw);
        }

        if let Some(expected) = expected_position {
            if self.position != expected {
                return Err(DecodeError::NonMatchingDataLength {
                    expected: expected - begin,
                    actual: self.position - begin,
                });
            }
        }

        Ok(fields)
    }
}

impl Reader<std::io::Cursor<Vec<u8>>> {
    /// Convenience constructor for decoding an in-memory buffer, backing
    /// the crate-level `loads` function.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Reader::new(std::io::Cursor::new(data.into()))
    }
}

/// `ProtoMode::is_multiple` fields that encode a scalar share this helper
/// for picking the `Vec` push behavior vs. the map-entry collapse; kept
/// here rather than in `descriptor.rs` since it is reader-side behavior.
pub(crate) fn is_multiple(mode: ProtoMode) -> bool {
    mode.is_multiple()
}

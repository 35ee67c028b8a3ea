//! The schema-aware encoder.
//!
//! `Writer<W>` wraps any [`std::io::Write`] byte-stream collaborator.
//! Embedded messages are sized with a two-pass approach
//! (`Message::encoded_len` computes the body length before the length
//! prefix is emitted), the same strategy `prost` uses in `encoding.rs`'s
//! `message::encode`.

use crate::error::EncodeError;
use crate::message::Message;
use crate::wire::{self, WireType};
use std::io::Write;

pub struct Writer<W> {
    inner: W,
}

impl<W: Write> Writer<W> {
    pub fn new(inner: W) -> Self {
        Writer { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Writes raw bytes straight through, returning the count written.
    fn write_raw(&mut self, bytes: &[u8]) -> Result<usize, EncodeError> {
        self.inner.write_all(bytes)?;
        Ok(bytes.len())
    }

    pub fn write_varint(&mut self, value: u64) -> Result<usize, EncodeError> {
        let mut buf = Vec::with_capacity(10);
        crate::varint::encode_varint(value, &mut buf);
        self.write_raw(&buf)
    }

    pub fn write_tag(&mut self, pid: u32, wire_type: WireType) -> Result<usize, EncodeError> {
        wire::encode_key(pid, wire_type, self)
    }

    pub fn write_fixed32(&mut self, value: u32) -> Result<usize, EncodeError> {
        self.write_raw(&value.to_le_bytes())
    }

    pub fn write_fixed64(&mut self, value: u64) -> Result<usize, EncodeError> {
        self.write_raw(&value.to_le_bytes())
    }

    /// Writes a varint length prefix followed by `bytes`.
    pub fn write_length_delimited(&mut self, bytes: &[u8]) -> Result<usize, EncodeError> {
        let mut written = self.write_varint(bytes.len() as u64)?;
        written += self.write_raw(bytes)?;
        Ok(written)
    }

    /// Writes a length-prefixed embedded message body, sizing it first via
    /// `Message::encoded_len` so the length prefix precedes the bytes it
    /// describes without buffering the whole stream in memory.
    pub fn write_embedded<M: Message>(&mut self, message: &M) -> Result<usize, EncodeError> {
        let len = message.encoded_len();
        let mut written = self.write_varint(len as u64)?;
        let before = written;
        written += message.write_fields(self)?;
        debug_assert_eq!(written - before, len, "encoded_len must match write_fields");
        Ok(written)
    }

    /// Encodes a full schema-aware message: its known fields in ascending
    /// pid order, then its unknown fields verbatim, in the order they were
    /// captured on decode.
    pub fn write<M: Message>(&mut self, message: &M) -> Result<usize, EncodeError> {
        let mut written = message.write_fields(self)?;
        for (&pid, values) in message.unknown() {
            for value in values {
                written += self.write_tag(pid, value.wire_type())?;
                written += self.write_raw_value(value)?;
            }
        }
        Ok(written)
    }

    fn write_raw_value(&mut self, value: &crate::descriptor::RawValue) -> Result<usize, EncodeError> {
        use crate::descriptor::RawValue;
        match value {
            RawValue::Varint(v) => self.write_varint(*v),
            RawValue::Fixed64(v) => self.write_fixed64(*v),
            RawValue::Fixed32(v) => self.write_fixed32(*v),
            RawValue::LengthDelimited(bytes) => self.write_raw(bytes),
        }
    }

    /// Writes a `Packed` field: one tag, one length prefix, then each
    /// element's raw bytes back-to-back with no per-element tag.
    pub fn write_packed<T>(
        &mut self,
        pid: u32,
        values: &[T],
        mut encode_raw: impl FnMut(&T, &mut Self) -> Result<usize, EncodeError>,
        mut encoded_len_one: impl FnMut(&T) -> usize,
    ) -> Result<usize, EncodeError> {
        if values.is_empty() {
            return Ok(0);
        }
        let body_len: usize = values.iter().map(|v| encoded_len_one(v)).sum();
        let mut written = self.write_tag(pid, WireType::Len)?;
        written += self.write_varint(body_len as u64)?;
        let before = written;
        for value in values {
            written += encode_raw(value, self)?;
        }
        debug_assert_eq!(written - before, body_len);
        Ok(written)
    }

    /// Writes an `Optional` field: elided entirely when `value` is equal to
    /// its declared default, so a default value re-encodes to zero bytes.
    /// The reader side of this needs no matching helper: a pid absent from
    /// the stream simply never calls `merge_field`, leaving the struct
    /// field at whatever `Default` gave it, which is the default-on-absent
    /// behavior this is meant to mirror.
    pub fn write_optional<T>(
        &mut self,
        pid: u32,
        wire_type: WireType,
        value: &T,
        is_default: impl Fn(&T) -> bool,
        encode_raw: impl FnOnce(&T, &mut Self) -> Result<usize, EncodeError>,
    ) -> Result<usize, EncodeError> {
        if is_default(value) {
            return Ok(0);
        }
        let mut written = self.write_tag(pid, wire_type)?;
        written += encode_raw(value, self)?;
        Ok(written)
    }

    /// Writes a `Repeated` field: one tag plus one value per element.
    pub fn write_repeated<T>(
        &mut self,
        pid: u32,
        wire_type: WireType,
        values: &[T],
        mut encode_one: impl FnMut(&T, &mut Self) -> Result<usize, EncodeError>,
    ) -> Result<usize, EncodeError> {
        let mut written = 0;
        for value in values {
            written += self.write_tag(pid, wire_type)?;
            written += encode_one(value, self)?;
        }
        Ok(written)
    }
}

impl Writer<Vec<u8>> {
    /// Convenience constructor for encoding to an in-memory buffer, backing
    /// the crate-level `dumps` function.
    pub fn to_bytes() -> Self {
        Writer::new(Vec::new())
    }
}

//! The [`Message`] trait: the seam between a schema, a Rust struct, and the
//! reader/writer. Analogous to `prost::Message`, but the per-field decode
//! dispatch (`merge_field`) and encode dispatch (`write_fields`) are plain
//! hand-written bodies rather than macro-generated ones, since this crate
//! has no derive macro of its own.

use crate::descriptor::{MessageSchema, UnknownFields};
use crate::error::{DecodeError, EncodeError};
use crate::reader::Reader;
use crate::wire::WireType;
use crate::writer::Writer;
use std::io::{Read, Write};

/// A typed protobuf message: a Rust struct paired with a [`MessageSchema`]
/// and the code to move between the two.
///
/// Implementors are ordinary structs with one field per schema field plus
/// an `UnknownFields` bag; see `tests/wire_format.rs` for worked examples
/// against known-good wire bytes.
pub trait Message: Sized {
    /// The compiled field table for this message type. Expected to be built
    /// once behind a `OnceLock` and returned by reference on every call.
    fn schema() -> &'static MessageSchema;

    /// Decodes one field already identified by pid/wire_type from `reader`
    /// into `self`. Only called with a pid present in `Self::schema()`.
    fn merge_field<R: Read>(
        &mut self,
        pid: u32,
        wire_type: WireType,
        reader: &mut Reader<R>,
    ) -> Result<(), DecodeError>;

    /// Encodes every present field known to the schema, in ascending pid
    /// order, and returns the byte count written.
    fn write_fields<W: Write>(&self, writer: &mut Writer<W>) -> Result<usize, EncodeError>;

    /// The exact byte length `write_fields` will produce, without actually
    /// writing anything — used by [`Writer::write_embedded`] to emit a
    /// length prefix before the body it describes.
    fn encoded_len(&self) -> usize;

    fn unknown(&self) -> &UnknownFields;
    fn unknown_mut(&mut self) -> &mut UnknownFields;

    /// Resets every field to its default and drops all unknown data.
    fn clear(&mut self);
}

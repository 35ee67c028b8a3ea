//! A Protocol Buffers wire-format codec whose schemas are declared directly
//! as typed Rust records rather than compiled from `.proto` text.
//!
//! The three pieces are tightly coupled by a shared descriptor model:
//!
//! - [`descriptor`] — [`descriptor::ProtoType`], [`descriptor::ProtoMode`],
//!   [`descriptor::FieldDescriptor`], and [`descriptor::MessageSchema`], the
//!   tables a message type's [`message::Message::schema`] builds once.
//! - [`reader`] — [`reader::Reader`], a schema-driven decoder over any
//!   [`std::io::Read`] stream.
//! - [`writer`] — [`writer::Writer`], a schema-driven encoder over any
//!   [`std::io::Write`] stream.
//!
//! `wire`/`varint`/`scalar` hold the primitives both codecs are built from;
//! `enum_value` and `map_entry` hold the two generic field kinds (open/strict
//! enums and `dict<K, V>`) that aren't plain scalars or embeds.
//!
//! Out of scope: proto2 required-field semantics, `.proto` text parsing and
//! code generation, reflection-based dynamic messages, JSON mapping, gRPC,
//! and the deprecated group wire types (rejected outright at decode).

pub mod descriptor;
pub mod enum_value;
pub mod error;
pub mod map_entry;
pub mod message;
pub mod reader;
pub mod scalar;
pub mod varint;
pub mod wire;
pub mod writer;

pub use bytes;

pub use crate::descriptor::{FieldDescriptor, MessageSchema, ProtoMode, ProtoType, RawValue, UnknownFields};
pub use crate::enum_value::{OpenEnum, ProtoEnum};
pub use crate::error::{DecodeError, EncodeError, SchemaError};
pub use crate::message::Message;
pub use crate::reader::Reader;
pub use crate::writer::Writer;

use std::io::{Read, Write};

/// Decodes a message from an in-memory buffer.
pub fn loads<M: Message + Default>(data: impl Into<Vec<u8>>) -> Result<M, DecodeError> {
    Reader::from_bytes(data).read(None)
}

/// Decodes a message from any byte-stream collaborator.
pub fn load<M: Message + Default, R: Read>(stream: R) -> Result<M, DecodeError> {
    Reader::new(stream).read(None)
}

/// Encodes a message to an in-memory buffer.
pub fn dumps<M: Message>(message: &M) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::to_bytes();
    writer.write(message)?;
    Ok(writer.into_inner())
}

/// Encodes a message to any byte-stream collaborator.
pub fn dump<M: Message, W: Write>(message: &M, stream: W) -> Result<usize, EncodeError> {
    Writer::new(stream).write(message)
}

/// Decodes a message with no schema at all, producing `{pid -> [raw values]}`
/// in wire arrival order — useful for inspecting bytes whose schema isn't
/// known up front.
pub fn loads_unknown(data: impl Into<Vec<u8>>) -> Result<UnknownFields, DecodeError> {
    Reader::from_bytes(data).read_unknown(None)
}

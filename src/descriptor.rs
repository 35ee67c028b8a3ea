//! The descriptor model: [`ProtoType`], [`ProtoMode`], [`FieldDescriptor`],
//! and [`MessageSchema`] — the tables the reader and writer are driven by.
//!
//! There is no runtime reflection or code generation here: a message type
//! builds its [`MessageSchema`] once, behind a `OnceLock`, by listing
//! [`FieldDescriptor`] values explicitly. See `src/message.rs` for the
//! trait that ties a Rust struct to its schema.

use crate::error::SchemaError;
use crate::wire::WireType;
use bytes::Bytes;
use std::collections::BTreeMap;

/// The logical type of a field. Maps onto exactly one [`WireType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProtoType {
    Int32,
    Int64,
    UInt32,
    UInt64,
    SInt32,
    SInt64,
    Enum,
    Bool,
    Fixed32,
    SFixed32,
    Float,
    Fixed64,
    SFixed64,
    Double,
    String,
    Bytes,
    Embed,
}

impl ProtoType {
    /// The wire type this proto type is always encoded with. Total and
    /// fixed: every `ProtoType` maps to exactly one `WireType`.
    pub const fn wire_type(self) -> WireType {
        match self {
            ProtoType::Int32
            | ProtoType::Int64
            | ProtoType::UInt32
            | ProtoType::UInt64
            | ProtoType::SInt32
            | ProtoType::SInt64
            | ProtoType::Enum
            | ProtoType::Bool => WireType::Varint,
            ProtoType::Fixed32 | ProtoType::SFixed32 | ProtoType::Float => WireType::I32,
            ProtoType::Fixed64 | ProtoType::SFixed64 | ProtoType::Double => WireType::I64,
            ProtoType::String | ProtoType::Bytes | ProtoType::Embed => WireType::Len,
        }
    }

    /// Whether a `list<Self>` field is allowed to use [`ProtoMode::Packed`].
    /// String, Bytes, and Embed are never packable: each element needs its
    /// own length delimiter, so they stay `Repeated`.
    pub const fn is_packable(self) -> bool {
        !matches!(self, ProtoType::String | ProtoType::Bytes | ProtoType::Embed)
    }
}

/// Presence/repetition mode of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProtoMode {
    /// No default; always present in the typed record.
    Single,
    /// Has a default (or is the null sentinel); elided from the wire when
    /// equal to it.
    Optional,
    /// A `list<T>` of a packable `T`, encoded as one length-delimited run.
    Packed,
    /// A `list<T>` of a non-packable `T` (or any repeated field emitted one
    /// tag per element).
    Repeated,
}

impl ProtoMode {
    /// `Packed` and `Repeated` are collectively "multiple": both decode
    /// into a `Vec` rather than a single scalar slot.
    pub const fn is_multiple(self) -> bool {
        matches!(self, ProtoMode::Packed | ProtoMode::Repeated)
    }
}

/// One compiled field: `(pid, name, proto_type, proto_mode)`, immutable
/// once built. `is_map_entry` flags the synthetic two-field submessage
/// generated for a `dict<K, V>` field; [`crate::reader::Reader::read_map_entry`]
/// checks the flag before decoding a field as a map entry, so a message
/// author who passes the wrong descriptor gets an error instead of a
/// silent misdecode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pid: u32,
    name: &'static str,
    proto_type: ProtoType,
    proto_mode: ProtoMode,
    is_map_entry: bool,
}

impl FieldDescriptor {
    pub const fn new(
        pid: u32,
        name: &'static str,
        proto_type: ProtoType,
        proto_mode: ProtoMode,
    ) -> Self {
        FieldDescriptor {
            pid,
            name,
            proto_type,
            proto_mode,
            is_map_entry: false,
        }
    }

    /// A `dict<K, V>` field: always `Embed`/`Repeated`, flagged so
    /// [`crate::reader::Reader::read_map_entry`] will accept it.
    pub const fn map_entry(pid: u32, name: &'static str) -> Self {
        FieldDescriptor {
            pid,
            name,
            proto_type: ProtoType::Embed,
            proto_mode: ProtoMode::Repeated,
            is_map_entry: true,
        }
    }

    pub const fn pid(&self) -> u32 {
        self.pid
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn proto_type(&self) -> ProtoType {
        self.proto_type
    }

    pub const fn proto_mode(&self) -> ProtoMode {
        self.proto_mode
    }

    pub const fn is_map_entry(&self) -> bool {
        self.is_map_entry
    }
}

/// The compiled schema of a message type: two lookup tables derived from
/// the same descriptor list, attached to the host type as process-lifetime
/// metadata (see `Message::schema`).
#[derive(Debug)]
pub struct MessageSchema {
    name: &'static str,
    by_pid: BTreeMap<u32, FieldDescriptor>,
    by_name: BTreeMap<&'static str, u32>,
}

impl MessageSchema {
    pub fn builder(name: &'static str) -> MessageSchemaBuilder {
        MessageSchemaBuilder {
            name,
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn by_pid(&self, pid: u32) -> Option<&FieldDescriptor> {
        self.by_pid.get(&pid)
    }

    pub fn by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        self.by_name.get(name).and_then(|pid| self.by_pid.get(pid))
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.by_pid.values()
    }
}

/// Builds a [`MessageSchema`], validating each field as it's added:
/// duplicate pid, duplicate name, and packed mode applied to a non-packable
/// type are all rejected here rather than left for the reader/writer to
/// trip over later.
pub struct MessageSchemaBuilder {
    name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl MessageSchemaBuilder {
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(self) -> Result<MessageSchema, SchemaError> {
        let mut by_pid = BTreeMap::new();
        let mut by_name = BTreeMap::new();

        for field in self.fields {
            if field.proto_mode == ProtoMode::Packed && !field.proto_type.is_packable() {
                return Err(SchemaError::NotPackable {
                    message_name: self.name,
                    field_name: field.name,
                    proto_type: field.proto_type,
                });
            }
            if by_pid.insert(field.pid, field).is_some() {
                return Err(SchemaError::DuplicatePid {
                    message_name: self.name,
                    field_name: field.name,
                    pid: field.pid,
                });
            }
            if by_name.insert(field.name, field.pid).is_some() {
                return Err(SchemaError::DuplicateName {
                    message_name: self.name,
                    field_name: field.name,
                });
            }
        }

        Ok(MessageSchema {
            name: self.name,
            by_pid,
            by_name,
        })
    }
}

/// A raw, wire-type-tagged value, exactly as it arrived. Used both for
/// fields not present in a schema (preserved losslessly in
/// [`UnknownFields`]) and as the result of a fully schemaless parse.
///
/// There is deliberately no `Group` variant: `SGROUP`/`EGROUP` are rejected
/// at parse time rather than preserved.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    Varint(u64),
    Fixed64(u64),
    Fixed32(u32),
    LengthDelimited(Bytes),
}

impl RawValue {
    pub fn wire_type(&self) -> WireType {
        match self {
            RawValue::Varint(_) => WireType::Varint,
            RawValue::Fixed64(_) => WireType::I64,
            RawValue::Fixed32(_) => WireType::I32,
            RawValue::LengthDelimited(_) => WireType::Len,
        }
    }
}

/// `pid -> [raw values in arrival order]`, carried by every typed record
/// for fields whose pid is absent from its schema, and the whole result of
/// a fully schemaless parse.
pub type UnknownFields = BTreeMap<u32, Vec<RawValue>>;

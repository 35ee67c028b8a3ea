//! Errors surfaced by schema compilation, decoding, and encoding.
//!
//! Three kinds: [`SchemaError`] (fatal at schema-build time), [`DecodeError`]
//! (fatal at the enclosing read), and [`EncodeError`] (fatal at the
//! enclosing write). Unknown fields are *not* an error case — see
//! [`crate::descriptor::UnknownFields`].

use crate::wire::WireType;
use thiserror::Error;

/// A field declaration that the schema compiler refused to accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{message_name}.{field_name}: negative id not allowed: -{pid}")]
    NegativePid {
        message_name: &'static str,
        field_name: &'static str,
        pid: i64,
    },

    #[error("{message_name}.{field_name}: duplicate id: {pid}")]
    DuplicatePid {
        message_name: &'static str,
        field_name: &'static str,
        pid: u32,
    },

    #[error("{message_name}.{field_name}: duplicate name")]
    DuplicateName {
        message_name: &'static str,
        field_name: &'static str,
    },

    #[error("{message_name}.{field_name}: not annotated as protobuf field")]
    MissingAnnotation {
        message_name: &'static str,
        field_name: &'static str,
    },

    #[error("{message_name}.{field_name}: packed mode is not valid for {proto_type:?}")]
    NotPackable {
        message_name: &'static str,
        field_name: &'static str,
        proto_type: crate::descriptor::ProtoType,
    },

    #[error("{message_name}.{field_name}: invalid field type: {type_name}")]
    InvalidFieldType {
        message_name: &'static str,
        field_name: &'static str,
        type_name: &'static str,
    },

    #[error("{message_name}.{field_name}: missing specialization for {type_name}")]
    MissingSpecialization {
        message_name: &'static str,
        field_name: &'static str,
        type_name: &'static str,
    },

    #[error(
        "{message_name}.{field_name}: found optional {type_name}, remove the optional annotation"
    )]
    OptionalOverCollection {
        message_name: &'static str,
        field_name: &'static str,
        type_name: &'static str,
    },

    #[error("{message_name}.{field_name}: cannot handle non optional union type annotation")]
    NonOptionalUnion {
        message_name: &'static str,
        field_name: &'static str,
    },
}

/// A decode-structural or decode-semantic error.
///
/// Decoding a message aborts the moment one of these is raised: no partial
/// record is returned, and the stream position is not rewound.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected another byte but reached EOF")]
    UnexpectedEof,

    #[error("not enough data: expected {expected}, got {actual}")]
    NotEnoughData { expected: usize, actual: usize },

    #[error("non matching data length: expected {expected}, got {actual}")]
    NonMatchingDataLength { expected: u64, actual: u64 },

    #[error("non-matching packed length: expected {expected}, got {actual}")]
    NonMatchingPackedLength { expected: u64, actual: u64 },

    #[error("unexpected value type for {name}: expected {expected}, got {actual}")]
    UnexpectedWireType {
        name: &'static str,
        expected: String,
        actual: String,
    },

    #[error("invalid wire type value: {value}")]
    InvalidWireType { value: u64 },

    #[error("invalid key value: {key}")]
    InvalidKey { key: u64 },

    #[error("invalid varint")]
    InvalidVarint,

    #[error("{wire_type:?} is deprecated and not implemented")]
    DeprecatedGroupWireType { wire_type: WireType },

    #[error("invalid string value: data is not UTF-8 encoded")]
    InvalidUtf8,

    #[error("inconsistent value types: expected map entry, got something else")]
    InconsistentMapEntry,

    #[error("unknown enumeration value {value} for {enum_name}")]
    UnknownEnumValue { enum_name: &'static str, value: i32 },

    #[error("not a valid protobuf type: {type_name}")]
    NotAProtobufType { type_name: &'static str },
}

/// An encode-time error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("not a valid protobuf type: {type_name}")]
    NotAProtobufType { type_name: &'static str },

    #[error(transparent)]
    Io(#[from] IoErrorWrapper),
}

/// `std::io::Error` doesn't implement `Eq`/`Clone`, which the rest of this
/// crate's error types derive for ease of testing; wrap just its message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct IoErrorWrapper(pub String);

impl From<std::io::Error> for EncodeError {
    fn from(err: std::io::Error) -> Self {
        EncodeError::Io(IoErrorWrapper(err.to_string()))
    }
}

impl From<std::io::Error> for DecodeError {
    fn from(_err: std::io::Error) -> Self {
        // A failing read from the underlying stream is, from the spec's
        // point of view, indistinguishable from the stream ending early.
        DecodeError::UnexpectedEof
    }
}

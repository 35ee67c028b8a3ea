//! Enum field support.
//!
//! An open enum field is represented as a plain `Known(E) | Unknown(i32)`
//! value: unlike a dynamically typed host, Rust's enums have no room to
//! intern an unrecognized value as a new variant at runtime, so the
//! fallback integer is carried alongside instead.

use crate::error::DecodeError;

/// A host enum type that can be read from and written to the wire as a
/// plain `i32` (proto3's enum representation is always a 32-bit varint).
pub trait ProtoEnum: Sized + Copy + PartialEq {
    /// Name used in [`DecodeError::UnknownEnumValue`] for a strict enum.
    const NAME: &'static str;

    fn from_i32(value: i32) -> Option<Self>;
    fn to_i32(self) -> i32;
}

/// The value of a field declared as an open enum: either one of the type's
/// known variants, or the raw integer of a value the schema didn't name.
/// Equality and the integer value survive a decode→encode round trip even
/// when the variant is unrecognized — open enums never reject unknown
/// input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpenEnum<E> {
    Known(E),
    Unknown(i32),
}

impl<E: ProtoEnum> OpenEnum<E> {
    pub fn from_i32(value: i32) -> Self {
        match E::from_i32(value) {
            Some(known) => OpenEnum::Known(known),
            None => OpenEnum::Unknown(value),
        }
    }

    pub fn to_i32(self) -> i32 {
        match self {
            OpenEnum::Known(known) => known.to_i32(),
            OpenEnum::Unknown(value) => value,
        }
    }
}

/// Decodes a strict enum field: an integer not matching any declared
/// variant is a hard decode error rather than being preserved.
pub fn decode_strict<E: ProtoEnum>(value: i32) -> Result<E, DecodeError> {
    E::from_i32(value).ok_or(DecodeError::UnknownEnumValue {
        enum_name: E::NAME,
        value,
    })
}

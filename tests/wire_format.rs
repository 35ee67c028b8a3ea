//! Integration tests driving the public `loads`/`dumps` surface against
//! known-good wire bytes. Each message type below is a hand-written
//! `Message` impl — no derive macro, just the same shape `prost-derive`
//! would expand to (see `prost/src/types.rs` for the pattern this mirrors).

use std::collections::BTreeMap;
use std::sync::OnceLock;

use wireform::descriptor::{FieldDescriptor, MessageSchema, ProtoMode, ProtoType, UnknownFields};
use wireform::error::{DecodeError, EncodeError};
use wireform::reader::Reader;
use wireform::scalar;
use wireform::wire::WireType;
use wireform::writer::Writer;
use wireform::{dumps, loads, loads_unknown, Message};

// ---------------------------------------------------------------------
// Message1 { a: int32 @1 }
// ---------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
struct Message1 {
    a: i32,
    unknown: UnknownFields,
}

impl Message for Message1 {
    fn schema() -> &'static MessageSchema {
        static SCHEMA: OnceLock<MessageSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            MessageSchema::builder("Message1")
                .field(FieldDescriptor::new(1, "a", ProtoType::Int32, ProtoMode::Single))
                .build()
                .expect("Message1 schema is valid")
        })
    }

    fn merge_field<R: std::io::Read>(
        &mut self,
        pid: u32,
        wire_type: WireType,
        reader: &mut Reader<R>,
    ) -> Result<(), DecodeError> {
        match pid {
            1 => {
                wireform::wire::check_wire_type("a", WireType::Varint, wire_type)?;
                self.a = scalar::int32::decode(reader)?;
                Ok(())
            }
            _ => unreachable!("merge_field only called for pids in Self::schema()"),
        }
    }

    fn write_fields<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        let mut written = writer.write_tag(1, WireType::Varint)?;
        written += scalar::int32::encode_raw(self.a, writer)?;
        Ok(written)
    }

    fn encoded_len(&self) -> usize {
        wireform::wire::key_len(1) + scalar::int32::encoded_len(self.a)
    }

    fn unknown(&self) -> &UnknownFields {
        &self.unknown
    }

    fn unknown_mut(&mut self) -> &mut UnknownFields {
        &mut self.unknown
    }

    fn clear(&mut self) {
        self.a = 0;
        self.unknown.clear();
    }
}

// ---------------------------------------------------------------------
// Message2 { b: string @2 }
// ---------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
struct Message2 {
    b: String,
    unknown: UnknownFields,
}

impl Message for Message2 {
    fn schema() -> &'static MessageSchema {
        static SCHEMA: OnceLock<MessageSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            MessageSchema::builder("Message2")
                .field(FieldDescriptor::new(2, "b", ProtoType::String, ProtoMode::Single))
                .build()
                .expect("Message2 schema is valid")
        })
    }

    fn merge_field<R: std::io::Read>(
        &mut self,
        pid: u32,
        wire_type: WireType,
        reader: &mut Reader<R>,
    ) -> Result<(), DecodeError> {
        match pid {
            2 => {
                wireform::wire::check_wire_type("b", WireType::Len, wire_type)?;
                self.b = scalar::string_::decode(reader)?;
                Ok(())
            }
            _ => unreachable!("merge_field only called for pids in Self::schema()"),
        }
    }

    fn write_fields<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        let mut written = writer.write_tag(2, WireType::Len)?;
        written += scalar::string_::encode_raw(&self.b, writer)?;
        Ok(written)
    }

    fn encoded_len(&self) -> usize {
        wireform::wire::key_len(2) + scalar::string_::encoded_len(&self.b)
    }

    fn unknown(&self) -> &UnknownFields {
        &self.unknown
    }

    fn unknown_mut(&mut self) -> &mut UnknownFields {
        &mut self.unknown
    }

    fn clear(&mut self) {
        self.b.clear();
        self.unknown.clear();
    }
}

// ---------------------------------------------------------------------
// Message3 { c: Message1 @3 }  — embedded message
// ---------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
struct Message3 {
    c: Message1,
    unknown: UnknownFields,
}

impl Message for Message3 {
    fn schema() -> &'static MessageSchema {
        static SCHEMA: OnceLock<MessageSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            MessageSchema::builder("Message3")
                .field(FieldDescriptor::new(3, "c", ProtoType::Embed, ProtoMode::Single))
                .build()
                .expect("Message3 schema is valid")
        })
    }

    fn merge_field<R: std::io::Read>(
        &mut self,
        pid: u32,
        wire_type: WireType,
        reader: &mut Reader<R>,
    ) -> Result<(), DecodeError> {
        match pid {
            3 => {
                wireform::wire::check_wire_type("c", WireType::Len, wire_type)?;
                self.c = reader.read_embedded::<Message1>()?;
                Ok(())
            }
            _ => unreachable!("merge_field only called for pids in Self::schema()"),
        }
    }

    fn write_fields<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        let mut written = writer.write_tag(3, WireType::Len)?;
        written += writer.write_embedded(&self.c)?;
        Ok(written)
    }

    fn encoded_len(&self) -> usize {
        let body = self.c.encoded_len();
        wireform::wire::key_len(3) + wireform::varint::encoded_len_varint(body as u64) + body
    }

    fn unknown(&self) -> &UnknownFields {
        &self.unknown
    }

    fn unknown_mut(&mut self) -> &mut UnknownFields {
        &mut self.unknown
    }

    fn clear(&mut self) {
        self.c.clear();
        self.unknown.clear();
    }
}

// ---------------------------------------------------------------------
// Message4 { d: int32 @4, optional, default 0 }  — elided when default
// ---------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
struct Message4 {
    d: i32,
    unknown: UnknownFields,
}

impl Message for Message4 {
    fn schema() -> &'static MessageSchema {
        static SCHEMA: OnceLock<MessageSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            MessageSchema::builder("Message4")
                .field(FieldDescriptor::new(4, "d", ProtoType::Int32, ProtoMode::Optional))
                .build()
                .expect("Message4 schema is valid")
        })
    }

    fn merge_field<R: std::io::Read>(
        &mut self,
        pid: u32,
        wire_type: WireType,
        reader: &mut Reader<R>,
    ) -> Result<(), DecodeError> {
        match pid {
            4 => {
                wireform::wire::check_wire_type("d", WireType::Varint, wire_type)?;
                self.d = scalar::int32::decode(reader)?;
                Ok(())
            }
            _ => unreachable!("merge_field only called for pids in Self::schema()"),
        }
    }

    fn write_fields<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        writer.write_optional(
            4,
            WireType::Varint,
            &self.d,
            |v: &i32| *v == 0,
            |v, w| scalar::int32::encode_raw(*v, w),
        )
    }

    fn encoded_len(&self) -> usize {
        if self.d == 0 {
            0
        } else {
            wireform::wire::key_len(4) + scalar::int32::encoded_len(self.d)
        }
    }

    fn unknown(&self) -> &UnknownFields {
        &self.unknown
    }

    fn unknown_mut(&mut self) -> &mut UnknownFields {
        &mut self.unknown
    }

    fn clear(&mut self) {
        self.d = 0;
        self.unknown.clear();
    }
}

// ---------------------------------------------------------------------
// Message5 { f: list<int32> @6 }  — packed vs repeated, threshold > 2 elements
// ---------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
struct Message5 {
    f: Vec<i32>,
    unknown: UnknownFields,
}

impl Message for Message5 {
    fn schema() -> &'static MessageSchema {
        static SCHEMA: OnceLock<MessageSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            MessageSchema::builder("Message5")
                .field(FieldDescriptor::new(6, "f", ProtoType::Int32, ProtoMode::Packed))
                .build()
                .expect("Message5 schema is valid")
        })
    }

    fn merge_field<R: std::io::Read>(
        &mut self,
        pid: u32,
        wire_type: WireType,
        reader: &mut Reader<R>,
    ) -> Result<(), DecodeError> {
        match pid {
            6 => reader.read_packed_or_single(
                "f",
                wire_type,
                WireType::Varint,
                &mut self.f,
                |r| scalar::int32::decode(r),
            ),
            _ => unreachable!("merge_field only called for pids in Self::schema()"),
        }
    }

    fn write_fields<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        // Packed only once the list holds more than two elements;
        // otherwise each element gets its own tag.
        if self.f.len() > 2 {
            writer.write_packed(
                6,
                &self.f,
                |v, w| scalar::int32::encode_raw(*v, w),
                |v| scalar::int32::encoded_len(*v),
            )
        } else {
            writer.write_repeated(6, WireType::Varint, &self.f, |v, w| {
                scalar::int32::encode_raw(*v, w)
            })
        }
    }

    fn encoded_len(&self) -> usize {
        if self.f.is_empty() {
            return 0;
        }
        if self.f.len() > 2 {
            let body: usize = self.f.iter().map(|v| scalar::int32::encoded_len(*v)).sum();
            wireform::wire::key_len(6) + wireform::varint::encoded_len_varint(body as u64) + body
        } else {
            self.f
                .iter()
                .map(|v| wireform::wire::key_len(6) + scalar::int32::encoded_len(*v))
                .sum()
        }
    }

    fn unknown(&self) -> &UnknownFields {
        &self.unknown
    }

    fn unknown_mut(&mut self) -> &mut UnknownFields {
        &mut self.unknown
    }

    fn clear(&mut self) {
        self.f.clear();
        self.unknown.clear();
    }
}

// ---------------------------------------------------------------------
// Message6 { g: dict<string, int32> @7 }  — map field
// ---------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
struct Message6 {
    g: BTreeMap<String, i32>,
    unknown: UnknownFields,
}

impl Message for Message6 {
    fn schema() -> &'static MessageSchema {
        static SCHEMA: OnceLock<MessageSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            MessageSchema::builder("Message6")
                .field(FieldDescriptor::map_entry(7, "g"))
                .build()
                .expect("Message6 schema is valid")
        })
    }

    fn merge_field<R: std::io::Read>(
        &mut self,
        pid: u32,
        wire_type: WireType,
        reader: &mut Reader<R>,
    ) -> Result<(), DecodeError> {
        match pid {
            7 => {
                wireform::wire::check_wire_type("g", WireType::Len, wire_type)?;
                let descriptor = Self::schema().by_pid(7).expect("pid 7 is declared above");
                let (key, value) = reader.read_map_entry(
                    descriptor,
                    WireType::Len,
                    scalar::string_::decode,
                    WireType::Varint,
                    scalar::int32::decode,
                )?;
                self.g.insert(key, value);
                Ok(())
            }
            _ => unreachable!("merge_field only called for pids in Self::schema()"),
        }
    }

    fn write_fields<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        let mut written = 0;
        for (k, v) in &self.g {
            written += writer.write_tag(7, WireType::Len)?;
            written += wireform::map_entry::write_entry(
                writer,
                k,
                WireType::Len,
                |k: &String| k.is_empty(),
                |k, w| scalar::string_::encode_raw(k, w),
                |k| scalar::string_::encoded_len(k),
                v,
                WireType::Varint,
                |v: &i32| *v == 0,
                |v, w| scalar::int32::encode_raw(*v, w),
                |v| scalar::int32::encoded_len(*v),
            )?;
        }
        Ok(written)
    }

    fn encoded_len(&self) -> usize {
        self.g
            .iter()
            .map(|(k, v)| {
                let body = (if k.is_empty() {
                    0
                } else {
                    wireform::wire::key_len(1) + scalar::string_::encoded_len(k)
                }) + (if *v == 0 {
                    0
                } else {
                    wireform::wire::key_len(2) + scalar::int32::encoded_len(*v)
                });
                wireform::wire::key_len(7) + wireform::varint::encoded_len_varint(body as u64) + body
            })
            .sum()
    }

    fn unknown(&self) -> &UnknownFields {
        &self.unknown
    }

    fn unknown_mut(&mut self) -> &mut UnknownFields {
        &mut self.unknown
    }

    fn clear(&mut self) {
        self.g.clear();
        self.unknown.clear();
    }
}

// ---------------------------------------------------------------------
// Message7 { h: Status @10 }  — open enum, unknown variants preserved
// ---------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Pending,
    Active,
    Closed,
}

impl wireform::enum_value::ProtoEnum for Status {
    const NAME: &'static str = "Status";

    fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Status::Pending),
            1 => Some(Status::Active),
            2 => Some(Status::Closed),
            _ => None,
        }
    }

    fn to_i32(self) -> i32 {
        match self {
            Status::Pending => 0,
            Status::Active => 1,
            Status::Closed => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Message7 {
    h: wireform::enum_value::OpenEnum<Status>,
    unknown: UnknownFields,
}

impl Default for Message7 {
    fn default() -> Self {
        Message7 {
            h: wireform::enum_value::OpenEnum::Known(Status::Pending),
            unknown: UnknownFields::new(),
        }
    }
}

impl Message for Message7 {
    fn schema() -> &'static MessageSchema {
        static SCHEMA: OnceLock<MessageSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            MessageSchema::builder("Message7")
                .field(FieldDescriptor::new(10, "h", ProtoType::Enum, ProtoMode::Single))
                .build()
                .expect("Message7 schema is valid")
        })
    }

    fn merge_field<R: std::io::Read>(
        &mut self,
        pid: u32,
        wire_type: WireType,
        reader: &mut Reader<R>,
    ) -> Result<(), DecodeError> {
        match pid {
            10 => {
                wireform::wire::check_wire_type("h", WireType::Varint, wire_type)?;
                let raw = scalar::int32::decode(reader)?;
                self.h = wireform::enum_value::OpenEnum::from_i32(raw);
                Ok(())
            }
            _ => unreachable!("merge_field only called for pids in Self::schema()"),
        }
    }

    fn write_fields<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        let mut written = writer.write_tag(10, WireType::Varint)?;
        written += scalar::int32::encode_raw(self.h.to_i32(), writer)?;
        Ok(written)
    }

    fn encoded_len(&self) -> usize {
        wireform::wire::key_len(10) + scalar::int32::encoded_len(self.h.to_i32())
    }

    fn unknown(&self) -> &UnknownFields {
        &self.unknown
    }

    fn unknown_mut(&mut self) -> &mut UnknownFields {
        &mut self.unknown
    }

    fn clear(&mut self) {
        self.h = wireform::enum_value::OpenEnum::Known(Status::Pending);
        self.unknown.clear();
    }
}

// ---------------------------------------------------------------------
// Message8 { i: float @9 }
// ---------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
struct Message8 {
    i: f32,
    unknown: UnknownFields,
}

impl Message for Message8 {
    fn schema() -> &'static MessageSchema {
        static SCHEMA: OnceLock<MessageSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            MessageSchema::builder("Message8")
                .field(FieldDescriptor::new(9, "i", ProtoType::Float, ProtoMode::Single))
                .build()
                .expect("Message8 schema is valid")
        })
    }

    fn merge_field<R: std::io::Read>(
        &mut self,
        pid: u32,
        wire_type: WireType,
        reader: &mut Reader<R>,
    ) -> Result<(), DecodeError> {
        match pid {
            9 => {
                wireform::wire::check_wire_type("i", WireType::I32, wire_type)?;
                self.i = scalar::float32::decode(reader)?;
                Ok(())
            }
            _ => unreachable!("merge_field only called for pids in Self::schema()"),
        }
    }

    fn write_fields<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<usize, EncodeError> {
        let mut written = writer.write_tag(9, WireType::I32)?;
        written += scalar::float32::encode_raw(self.i, writer)?;
        Ok(written)
    }

    fn encoded_len(&self) -> usize {
        wireform::wire::key_len(9) + scalar::float32::encoded_len(self.i)
    }

    fn unknown(&self) -> &UnknownFields {
        &self.unknown
    }

    fn unknown_mut(&mut self) -> &mut UnknownFields {
        &mut self.unknown
    }

    fn clear(&mut self) {
        self.i = 0.0;
        self.unknown.clear();
    }
}

// ---------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------

#[test]
fn single_int32_field_roundtrips() {
    let msg = Message1 { a: 150, unknown: UnknownFields::new() };
    assert_eq!(dumps(&msg).unwrap(), vec![0x08, 0x96, 0x01]);
    assert_eq!(loads::<Message1>(vec![0x08, 0x96, 0x01]).unwrap(), msg);
}

#[test]
fn single_string_field_roundtrips() {
    let msg = Message2 { b: "testing".to_string(), unknown: UnknownFields::new() };
    let expected = vec![0x12, 0x07, 0x74, 0x65, 0x73, 0x74, 0x69, 0x6e, 0x67];
    assert_eq!(dumps(&msg).unwrap(), expected);
    assert_eq!(loads::<Message2>(expected).unwrap(), msg);
}

#[test]
fn embedded_message_roundtrips() {
    let msg = Message3 {
        c: Message1 { a: 150, unknown: UnknownFields::new() },
        unknown: UnknownFields::new(),
    };
    let expected = vec![0x1a, 0x03, 0x08, 0x96, 0x01];
    assert_eq!(dumps(&msg).unwrap(), expected);
    assert_eq!(loads::<Message3>(expected).unwrap(), msg);
}

#[test]
fn packed_list_of_three_roundtrips() {
    let msg = Message5 { f: vec![3, 270, 86942], unknown: UnknownFields::new() };
    let expected = vec![0x32, 0x06, 0x03, 0x8e, 0x02, 0x9e, 0xa7, 0x05];
    assert_eq!(dumps(&msg).unwrap(), expected);
    assert_eq!(loads::<Message5>(expected).unwrap(), msg);
}

#[test]
fn repeated_list_of_two_roundtrips() {
    let msg = Message5 { f: vec![3, 270], unknown: UnknownFields::new() };
    let expected = vec![0x30, 0x03, 0x30, 0x8e, 0x02];
    assert_eq!(dumps(&msg).unwrap(), expected);
    assert_eq!(loads::<Message5>(expected).unwrap(), msg);
}

#[test]
fn packed_field_also_decodes_individually_tagged_elements() {
    // A schema declares the field Packed, but a producer may still emit a
    // short list as individually-tagged elements; the reader must accept
    // both encodings for the same field: native wire type on the wire or a
    // Len-framed packed run are both legal for a `Packed`/`Repeated`
    // descriptor.
    let bytes = vec![0x30, 0x03, 0x30, 0x8e, 0x02];
    let msg: Message5 = loads(bytes).unwrap();
    assert_eq!(msg.f, vec![3, 270]);
}

#[test]
fn map_field_roundtrips() {
    let mut g = BTreeMap::new();
    g.insert("a".to_string(), 1);
    g.insert("b".to_string(), 2);
    g.insert("c".to_string(), 3);
    let msg = Message6 { g, unknown: UnknownFields::new() };
    let expected = vec![
        0x3a, 0x05, 0x0a, 0x01, 0x61, 0x10, 0x01, 0x3a, 0x05, 0x0a, 0x01, 0x62, 0x10, 0x02, 0x3a,
        0x05, 0x0a, 0x01, 0x63, 0x10, 0x03,
    ];
    assert_eq!(dumps(&msg).unwrap(), expected);
    assert_eq!(loads::<Message6>(expected).unwrap(), msg);
}

#[test]
fn single_float_field_roundtrips() {
    let msg = Message8 { i: 1.0, unknown: UnknownFields::new() };
    let expected = vec![0x4d, 0x00, 0x00, 0x80, 0x3f];
    assert_eq!(dumps(&msg).unwrap(), expected);
    assert_eq!(loads::<Message8>(expected).unwrap(), msg);
}

#[test]
fn eof_mid_record_is_hard_error() {
    let err = loads::<Message1>(vec![0x00, 0xff]).unwrap_err();
    assert_eq!(err, DecodeError::UnexpectedEof);
}

#[test]
fn truncated_embed_is_hard_error() {
    // `3a 05 0a` declares a 5-byte map-entry body but supplies only one
    // more byte before the stream ends.
    let err = loads::<Message6>(vec![0x3a, 0x05, 0x0a]).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::NotEnoughData { .. } | DecodeError::NonMatchingDataLength { .. }
    ));
}

#[test]
fn unknown_fields_at_pid_zero_are_preserved() {
    let bytes = vec![0x00, 0x00, 0x08, 0x96, 0x01, 0x00, 0x00];
    let msg: Message1 = loads(bytes).unwrap();
    assert_eq!(msg.a, 150);
    let mut expected_unknown = UnknownFields::new();
    expected_unknown.insert(
        0,
        vec![
            wireform::descriptor::RawValue::Varint(0),
            wireform::descriptor::RawValue::Varint(0),
        ],
    );
    assert_eq!(msg.unknown, expected_unknown);
}

#[test]
fn empty_bytes_decode_to_all_defaults() {
    let msg: Message1 = loads(Vec::<u8>::new()).unwrap();
    assert_eq!(msg, Message1::default());
}

#[test]
fn schemaless_parse_collects_every_pid_in_arrival_order() {
    let bytes = vec![0x08, 0x01, 0x08, 0x02, 0x12, 0x01, 0x78];
    let fields = loads_unknown(bytes).unwrap();
    assert_eq!(
        fields.get(&1).unwrap(),
        &vec![
            wireform::descriptor::RawValue::Varint(1),
            wireform::descriptor::RawValue::Varint(2),
        ]
    );
    assert_eq!(
        fields.get(&2).unwrap(),
        &vec![wireform::descriptor::RawValue::LengthDelimited(
            wireform::bytes::Bytes::from_static(b"x")
        )]
    );
}

#[test]
fn optional_field_at_default_value_encodes_to_empty_bytes() {
    let msg = Message4 { d: 0, unknown: UnknownFields::new() };
    assert_eq!(dumps(&msg).unwrap(), Vec::<u8>::new());
    assert_eq!(loads::<Message4>(Vec::new()).unwrap(), msg);
}

#[test]
fn optional_field_away_from_default_roundtrips() {
    let msg = Message4 { d: 5, unknown: UnknownFields::new() };
    let expected = vec![0x20, 0x05];
    assert_eq!(dumps(&msg).unwrap(), expected);
    assert_eq!(loads::<Message4>(expected).unwrap(), msg);
}

#[test]
fn enum_field_resolves_known_variant_roundtrip() {
    let msg = Message7 {
        h: wireform::enum_value::OpenEnum::Known(Status::Active),
        unknown: UnknownFields::new(),
    };
    let expected = vec![0x50, 0x01];
    assert_eq!(dumps(&msg).unwrap(), expected);
    assert_eq!(loads::<Message7>(expected).unwrap(), msg);
}

#[test]
fn enum_field_preserves_unknown_variant_roundtrip() {
    let msg = Message7 {
        h: wireform::enum_value::OpenEnum::Unknown(99),
        unknown: UnknownFields::new(),
    };
    let expected = vec![0x50, 0x63];
    assert_eq!(dumps(&msg).unwrap(), expected);
    assert_eq!(loads::<Message7>(expected).unwrap(), msg);
}

#[test]
fn strict_enum_decode_rejects_value_outside_schema() {
    assert_eq!(
        wireform::enum_value::decode_strict::<Status>(99),
        Err(DecodeError::UnknownEnumValue { enum_name: "Status", value: 99 })
    );
}

#[test]
fn negative_int32_encodes_as_ten_byte_varint() {
    // 1-byte tag + 10-byte two's-complement-expanded varint: negative
    // Int32/Int64 values always expand to the full 10-byte varint.
    let msg = Message1 { a: -1, unknown: UnknownFields::new() };
    assert_eq!(dumps(&msg).unwrap().len(), 11);
}

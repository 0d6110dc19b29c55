//! Serde serializer that flattens a typed settings struct into ordered
//! `(dotted_key, SettingValue)` pairs.
//!
//! Field declaration order is kept, nested structs and string-keyed maps
//! become dotted keys, and `None` becomes an empty text value (the unset
//! sentinel). Sequences and byte strings have no flat string form and are
//! rejected.

use serde::ser::{self, Impossible, Serialize};

use crate::error::PrefsError;
use crate::value::SettingValue;

/// Flatten `source` into dotted key-value pairs, in serialization order.
///
/// `Outer { compile: Inner { typesetter: "pdflatex" } }` →
/// `[("compile.typesetter", Text("pdflatex"))]`
pub fn flatten<S: Serialize>(source: &S) -> Result<Vec<(String, SettingValue)>, PrefsError> {
    let mut out = Vec::new();
    source.serialize(FlattenSerializer {
        prefix: String::new(),
        out: &mut out,
    })?;
    Ok(out)
}

impl ser::Error for PrefsError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        PrefsError::Flatten(msg.to_string())
    }
}

fn unsupported(what: &str) -> PrefsError {
    PrefsError::Flatten(format!("{what} have no flat string form"))
}

fn dotted(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

struct FlattenSerializer<'a> {
    prefix: String,
    out: &'a mut Vec<(String, SettingValue)>,
}

impl FlattenSerializer<'_> {
    fn emit(self, value: SettingValue) -> Result<(), PrefsError> {
        self.out.push((self.prefix, value));
        Ok(())
    }
}

impl<'a> ser::Serializer for FlattenSerializer<'a> {
    type Ok = ();
    type Error = PrefsError;
    type SerializeSeq = Impossible<(), PrefsError>;
    type SerializeTuple = Impossible<(), PrefsError>;
    type SerializeTupleStruct = Impossible<(), PrefsError>;
    type SerializeTupleVariant = Impossible<(), PrefsError>;
    type SerializeMap = FlattenMapSerializer<'a>;
    type SerializeStruct = FlattenStructSerializer<'a>;
    type SerializeStructVariant = FlattenStructSerializer<'a>;

    fn serialize_bool(self, v: bool) -> Result<(), PrefsError> {
        self.emit(SettingValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<(), PrefsError> {
        self.serialize_i64(v.into())
    }

    fn serialize_i16(self, v: i16) -> Result<(), PrefsError> {
        self.serialize_i64(v.into())
    }

    fn serialize_i32(self, v: i32) -> Result<(), PrefsError> {
        self.serialize_i64(v.into())
    }

    fn serialize_i64(self, v: i64) -> Result<(), PrefsError> {
        self.emit(SettingValue::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<(), PrefsError> {
        self.serialize_i64(v.into())
    }

    fn serialize_u16(self, v: u16) -> Result<(), PrefsError> {
        self.serialize_i64(v.into())
    }

    fn serialize_u32(self, v: u32) -> Result<(), PrefsError> {
        self.serialize_i64(v.into())
    }

    fn serialize_u64(self, v: u64) -> Result<(), PrefsError> {
        match i64::try_from(v) {
            Ok(n) => self.serialize_i64(n),
            Err(_) => self.emit(SettingValue::Text(v.to_string())),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<(), PrefsError> {
        self.serialize_f64(v.into())
    }

    fn serialize_f64(self, v: f64) -> Result<(), PrefsError> {
        self.emit(SettingValue::Text(v.to_string()))
    }

    fn serialize_char(self, v: char) -> Result<(), PrefsError> {
        self.emit(SettingValue::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<(), PrefsError> {
        self.emit(SettingValue::Text(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<(), PrefsError> {
        Err(unsupported("byte strings"))
    }

    fn serialize_none(self) -> Result<(), PrefsError> {
        self.emit(SettingValue::Text(String::new()))
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<(), PrefsError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), PrefsError> {
        self.serialize_none()
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), PrefsError> {
        self.serialize_none()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<(), PrefsError> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<(), PrefsError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<(), PrefsError> {
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, PrefsError> {
        Err(unsupported("sequences"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, PrefsError> {
        Err(unsupported("tuples"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, PrefsError> {
        Err(unsupported("tuple structs"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, PrefsError> {
        Err(unsupported("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, PrefsError> {
        Ok(FlattenMapSerializer {
            prefix: self.prefix,
            out: self.out,
            current_key: None,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, PrefsError> {
        Ok(FlattenStructSerializer {
            prefix: self.prefix,
            out: self.out,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, PrefsError> {
        Ok(FlattenStructSerializer {
            prefix: self.prefix,
            out: self.out,
        })
    }
}

struct FlattenStructSerializer<'a> {
    prefix: String,
    out: &'a mut Vec<(String, SettingValue)>,
}

impl ser::SerializeStruct for FlattenStructSerializer<'_> {
    type Ok = ();
    type Error = PrefsError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), PrefsError> {
        value.serialize(FlattenSerializer {
            prefix: dotted(&self.prefix, key),
            out: &mut *self.out,
        })
    }

    fn end(self) -> Result<(), PrefsError> {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FlattenStructSerializer<'_> {
    type Ok = ();
    type Error = PrefsError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), PrefsError> {
        ser::SerializeStruct::serialize_field(self, key, value)
    }

    fn end(self) -> Result<(), PrefsError> {
        Ok(())
    }
}

struct FlattenMapSerializer<'a> {
    prefix: String,
    out: &'a mut Vec<(String, SettingValue)>,
    current_key: Option<String>,
}

impl ser::SerializeMap for FlattenMapSerializer<'_> {
    type Ok = ();
    type Error = PrefsError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), PrefsError> {
        // A key is acceptable when it flattens to exactly one text value.
        let mut scratch = Vec::new();
        key.serialize(FlattenSerializer {
            prefix: String::new(),
            out: &mut scratch,
        })?;
        match (scratch.pop(), scratch.is_empty()) {
            (Some((_, SettingValue::Text(k))), true) => {
                self.current_key = Some(k);
                Ok(())
            }
            _ => Err(PrefsError::Flatten("map keys must be strings".into())),
        }
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), PrefsError> {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| PrefsError::Flatten("map value without a key".into()))?;
        value.serialize(FlattenSerializer {
            prefix: dotted(&self.prefix, &key),
            out: &mut *self.out,
        })
    }

    fn end(self) -> Result<(), PrefsError> {
        Ok(())
    }
}

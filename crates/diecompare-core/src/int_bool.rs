//! Serde adapter for the `is_public` flag.
//!
//! The flag is a `bool` in Rust but travels as the integer `0` or `1`, both in
//! JSON bodies and in query strings. Input also accepts `true`/`false`.
//!
//! ```rust,ignore
//! #[serde(with = "diecompare_core::int_bool")]
//! pub is_public: bool,
//! ```

use std::fmt;

use serde::{
  Deserializer, Serializer,
  de::{self, Visitor},
};

/// Default for an absent flag: records are visible unless stated otherwise.
pub fn visible() -> bool { true }

pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_u8(u8::from(*value))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
  deserializer.deserialize_any(IntBoolVisitor)
}

struct IntBoolVisitor;

impl Visitor<'_> for IntBoolVisitor {
  type Value = bool;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("0, 1, true or false")
  }

  fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> { Ok(v) }

  fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
    match v {
      0 => Ok(false),
      1 => Ok(true),
      other => Err(E::invalid_value(de::Unexpected::Unsigned(other), &self)),
    }
  }

  fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
    match v {
      0 => Ok(false),
      1 => Ok(true),
      other => Err(E::invalid_value(de::Unexpected::Signed(other), &self)),
    }
  }

  // Query strings hand every value over as text.
  fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
    match v {
      "0" | "false" => Ok(false),
      "1" | "true" => Ok(true),
      other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
    }
  }
}

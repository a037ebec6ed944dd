//! Deserialization of the line/column keyed `messages` table.
//!
//! JSON object keys are strings, and serde cannot turn `"11"` into a `u32`
//! once a struct with flattened fields has buffered its input. Keys are
//! therefore read through [`NumKey`], which accepts both forms. An empty
//! JSON array is accepted as an empty table (PHP encodes empty maps as `[]`).
//!
//! Incoming `errors`/`warnings` counts are always recomputed, so any value
//! is accepted for them.

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use super::types::{Issue, Messages};

struct NumKey(u32);

impl<'de> Deserialize<'de> for NumKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NumKeyVisitor;

        impl Visitor<'_> for NumKeyVisitor {
            type Value = NumKey;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a non-negative integer or integer string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<NumKey, E> {
                u32::try_from(v)
                    .map(NumKey)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<NumKey, E> {
                u32::try_from(v)
                    .map(NumKey)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<NumKey, E> {
                v.trim()
                    .parse()
                    .map(NumKey)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(NumKeyVisitor)
    }
}

/// A map keyed by [`NumKey`], or an empty sequence.
struct NumMap<V>(BTreeMap<u32, V>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for NumMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NumMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for NumMapVisitor<V> {
            type Value = NumMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object keyed by line or column number")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<NumMap<V>, A::Error> {
                let mut map = BTreeMap::new();
                while let Some((NumKey(key), value)) = access.next_entry::<NumKey, V>()? {
                    map.insert(key, value);
                }
                Ok(NumMap(map))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<NumMap<V>, A::Error> {
                if access.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_type(de::Unexpected::Seq, &self));
                }
                Ok(NumMap(BTreeMap::new()))
            }
        }

        deserializer.deserialize_any(NumMapVisitor(PhantomData))
    }
}

pub(super) fn deserialize_messages<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Messages, D::Error> {
    let NumMap(lines) = NumMap::<NumMap<Vec<Issue>>>::deserialize(deserializer)?;
    Ok(lines
        .into_iter()
        .map(|(line, NumMap(columns))| (line, columns))
        .collect())
}

/// Read an error/warning count, yielding 0 for anything that is not a
/// non-negative integer within `u32` range.
pub(super) fn deserialize_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .and_then(|count| u32::try_from(count).ok())
        .unwrap_or(0))
}

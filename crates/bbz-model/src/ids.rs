use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ModelError;

/// Key of a row in one of the editor maps (aliases, identifiers,
/// relationships).
///
/// Rows loaded from storage carry their database id. Rows created in the
/// editor, including bootstrapped relationships, carry a dense local index
/// rendered as `n<index>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RowKey {
    Persisted(i64),
    New(u32),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Persisted(id) => write!(f, "{id}"),
            RowKey::New(index) => write!(f, "n{index}"),
        }
    }
}

impl FromStr for RowKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(index) = trimmed.strip_prefix('n') {
            return index
                .parse()
                .map(RowKey::New)
                .map_err(|_| ModelError::InvalidRowKey(s.to_string()));
        }
        trimmed
            .parse()
            .map(RowKey::Persisted)
            .map_err(|_| ModelError::InvalidRowKey(s.to_string()))
    }
}

impl Serialize for RowKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct RowKeyVisitor;

impl Visitor<'_> for RowKeyVisitor {
    type Value = RowKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer id or a string such as \"42\" or \"n0\"")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<RowKey, E> {
        Ok(RowKey::Persisted(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<RowKey, E> {
        i64::try_from(value)
            .map(RowKey::Persisted)
            .map_err(|_| E::custom(format!("row id {value} is out of range")))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RowKey, E> {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for RowKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RowKeyVisitor)
    }
}

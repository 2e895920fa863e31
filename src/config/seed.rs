//! Serde adapter for optional RNG seeds.
//!
//! A seed is written as an integer, or as `"random"` to draw from entropy, so
//! an unseeded setting survives a save/load cycle and can be set from a file or
//! the environment:
//!
//! ```toml
//! [catalog]
//! catalog_seed = "random"
//!
//! [evolution]
//! evolution_seed = 42
//! ```

use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use std::fmt;

pub const RANDOM_SEED: &str = "random";

pub fn serialize<S: Serializer>(seed: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
    match seed {
        Some(seed) => serializer.serialize_u64(*seed),
        None => serializer.serialize_str(RANDOM_SEED),
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    deserializer.deserialize_any(SeedVisitor)
}

struct SeedVisitor;

impl<'de> Visitor<'de> for SeedVisitor {
    type Value = Option<u64>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a non-negative integer seed or \"{}\"", RANDOM_SEED)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(Some)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.eq_ignore_ascii_case(RANDOM_SEED) {
            return Ok(None);
        }
        v.trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserialize(deserializer)
    }
}

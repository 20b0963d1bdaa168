//! Deserialization of BigDouble.

use core::fmt::Formatter;
use core::str::FromStr;

use crate::BigDouble;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

pub struct BigDoubleVisitor {}

impl<'de> Deserialize<'de> for BigDouble {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BigDoubleVisitor {})
    }
}

impl<'de> Visitor<'de> for BigDoubleVisitor {
    type Value = BigDouble;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "expect `String` or `Number`")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BigDouble::from_i64(v))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BigDouble::from_u64(v))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(BigDouble::from_f64(v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        BigDouble::from_str(v).map_err(|e| Error::custom(format!("{e}")))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}

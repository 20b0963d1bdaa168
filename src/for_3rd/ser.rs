//! Serialization of BigDouble.
//! Serialization to a string uses the decimal form.

use crate::BigDouble;
use serde::{Serialize, Serializer};

impl Serialize for BigDouble {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::to_string;

    use crate::BigDouble;

    #[test]
    fn to_json() {
        assert_eq!(to_string(&crate::ZERO).unwrap(), "\"0\"");
        assert_eq!(
            to_string(&BigDouble::from_parts(1.5, 300)).unwrap(),
            "\"1.5e+300\""
        );
        assert_eq!(to_string(&BigDouble::from_f64(0.25)).unwrap(), "\"0.25\"");
        assert_eq!(to_string(&crate::NAN).unwrap(), "\"NaN\"");
        assert_eq!(to_string(&crate::INF_NEG).unwrap(), "\"-Infinity\"");
    }
}

//! Astro-double implements extended-range floating point numbers with fixed double precision.
//!
//! A number is a double mantissa paired with a separate decimal exponent.
//! This widens the representable range of magnitudes far beyond the double
//! while the arithmetic stays native-double fast, and suits workloads that
//! grow values through repeated multiplication and exponentiation.
//!
//! Characteristics:
//!
//! | Name                          | Value      |
//! |:------------------------------|-----------:|
//! | Decimal digits in mantissa    |        ~17 |
//! | Exponent minimum value        | -9.007e+15 |
//! | Exponent maximum value        |  9.007e+15 |
//!
//! NaN and signed infinity are representable values: mathematically invalid
//! operations return NaN rather than an error, and exponent overflow
//! saturates to infinity. The transcendental operations are approximations
//! bounded by the accuracy of the underlying double arithmetic.

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod common;
mod conv;
mod defs;
mod ext;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Sign;

pub use crate::num::BigDouble;
pub use crate::num::INF_NEG;
pub use crate::num::INF_POS;
pub use crate::num::NAN;
pub use crate::num::ONE;
pub use crate::num::ZERO;

pub use crate::defs::DOUBLE_EXP_MAX;
pub use crate::defs::DOUBLE_EXP_MIN;
pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::EXPONENT_MIN;
pub use crate::defs::MAX_SIGNIFICANT_DIGITS;

#[cfg(test)]
mod tests {

    #[test]
    fn test_bigdouble() {
        use crate::BigDouble;

        // Grow a value far past the double range through squaring.
        let mut d1 = BigDouble::from_f64(2.0);
        for _ in 0..10 {
            d1 = d1.sqr();
        }

        // 2^1024 does not fit a double anymore
        assert!(d1.to_f64().is_infinite());
        assert_eq!(d1.exponent(), 308);
        assert_eq!(d1.log2().to_f64(), 1024.0);

        // arithmetic in the extended range
        let d2 = d1.mul(&d1);
        assert_eq!(d2.log2().to_f64(), 2048.0);
        let eps = BigDouble::from_parts(1.0, -12);
        assert!(d2.sqrt().eq_tolerance(&d1, &eps));

        // text round trip
        let d3 = BigDouble::parse(&d2.to_string()).unwrap();
        assert!(d3.eq_tolerance(&d2, &eps));

        // an integer power far beyond the double range
        let d4 = BigDouble::from_f64(1.5).powf(100_000.0);
        assert_eq!(d4.exponent(), 17609);
        assert!((d4.log10().to_f64() - 100_000.0 * 1.5f64.log10()).abs() < 1e-6);
    }
}

//! Static constants.

use crate::defs::{Exponent, DOUBLE_EXP_MAX, DOUBLE_EXP_MIN};
use lazy_static::lazy_static;

const TABLE_LEN: usize = (DOUBLE_EXP_MAX - DOUBLE_EXP_MIN) as usize;

lazy_static! {

    /// Powers of ten from 1e-323 to 1e308. `f64::powi` drifts by several ulp
    /// at large exponents; parsing the literal gives the correctly rounded
    /// value for every entry.
    pub(crate) static ref POWERS_OF_10: [f64; TABLE_LEN] = {
        let mut table = [0.0; TABLE_LEN];
        for (i, v) in table.iter_mut().enumerate() {
            let n = i as Exponent + DOUBLE_EXP_MIN + 1;
            *v = format!("1e{}", n).parse().expect("Power of ten table initialization.");
        }
        table
    };
}

/// Looks up 10^`power`. `power` must lie in (DOUBLE_EXP_MIN, DOUBLE_EXP_MAX].
pub(crate) fn pow10_lookup(power: Exponent) -> f64 {
    debug_assert!(power > DOUBLE_EXP_MIN && power <= DOUBLE_EXP_MAX);
    POWERS_OF_10[(power - DOUBLE_EXP_MIN - 1) as usize]
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_pow10_lookup() {
        assert_eq!(pow10_lookup(0), 1.0);
        assert_eq!(pow10_lookup(1), 10.0);
        assert_eq!(pow10_lookup(-1), 0.1);
        assert_eq!(pow10_lookup(308), 1e308);
        assert_eq!(pow10_lookup(-323), 1e-323);

        // every entry is exact, not an accumulation of multiplications
        assert_eq!(pow10_lookup(23), 1e23);
        assert_eq!(pow10_lookup(-145), 1e-145);
    }
}

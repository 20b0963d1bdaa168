//! Logarithms.

use crate::num::BigDouble;
use crate::num::INF_POS;
use crate::num::NAN;
use core::f64::consts::LN_10;
use core::f64::consts::LOG2_10;

impl BigDouble {
    // log10 of a positive finite value; the exponent contributes linearly
    fn log10_value(&self) -> f64 {
        self.e as f64 + self.m.log10()
    }

    /// Returns the base-10 logarithm of `self`.
    /// Zero and negative values give NaN, positive infinity gives positive
    /// infinity.
    pub fn log10(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }

        if self.is_inf() {
            return if self.m > 0.0 { INF_POS } else { NAN };
        }

        if self.m <= 0.0 {
            return NAN;
        }

        Self::from_f64(self.log10_value())
    }

    /// Returns the base-10 logarithm of the absolute value of `self` as a
    /// double. Returns negative infinity for zero, and NaN for NaN.
    pub fn abs_log10(&self) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }

        if self.m == 0.0 {
            return f64::NEG_INFINITY;
        }

        if self.is_inf() {
            return f64::INFINITY;
        }

        self.e as f64 + self.m.abs().log10()
    }

    /// Returns the natural logarithm of `self`.
    /// Zero and negative values give NaN, positive infinity gives positive
    /// infinity.
    pub fn ln(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }

        if self.is_inf() {
            return if self.m > 0.0 { INF_POS } else { NAN };
        }

        if self.m <= 0.0 {
            return NAN;
        }

        Self::from_f64(self.log10_value() * LN_10)
    }

    /// Returns the base-2 logarithm of `self`.
    /// Zero and negative values give NaN, positive infinity gives positive
    /// infinity.
    pub fn log2(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }

        if self.is_inf() {
            return if self.m > 0.0 { INF_POS } else { NAN };
        }

        if self.m <= 0.0 {
            return NAN;
        }

        Self::from_f64(self.log10_value() * LOG2_10)
    }

    /// Returns the logarithm of `self` with the given `base`.
    /// Zero and negative values, as well as invalid bases, give NaN.
    pub fn log(&self, base: f64) -> Self {
        if self.is_nan() {
            return NAN;
        }

        if self.is_inf() {
            return if self.m > 0.0 && base > 1.0 { INF_POS } else { NAN };
        }

        if self.m <= 0.0 {
            return NAN;
        }

        Self::from_f64(self.log10_value() * LN_10 / base.ln())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::num::ONE;
    use crate::num::ZERO;
    use rand::random;

    #[test]
    fn test_log10() {
        let d1 = BigDouble::from_parts(1.0, 100).log10();
        assert_eq!(d1.to_f64(), 100.0);

        assert_eq!(BigDouble::from_f64(1000.0).log10().to_f64(), 3.0);
        assert!(ONE.log10().is_zero());

        let d1 = BigDouble::from_parts(2.5, 50).log10();
        assert!((d1.to_f64() - (50.0 + 2.5f64.log10())).abs() < 1e-12);

        // the exponent dominates for huge magnitudes
        let d1 = BigDouble::from_parts(1.0, 1_000_000_000_000).log10();
        assert_eq!(d1.to_f64(), 1e12);

        assert!(ZERO.log10().is_nan());
        assert!(BigDouble::from_f64(-5.0).log10().is_nan());
        assert!(crate::INF_POS.log10().is_inf_pos());
        assert!(crate::INF_NEG.log10().is_nan());
        assert!(crate::NAN.log10().is_nan());
    }

    #[test]
    fn test_abs_log10() {
        assert!((BigDouble::from_parts(-2.5, 50).abs_log10() - (50.0 + 2.5f64.log10())).abs() < 1e-12);
        assert_eq!(ZERO.abs_log10(), f64::NEG_INFINITY);
        assert_eq!(crate::INF_NEG.abs_log10(), f64::INFINITY);
        assert!(crate::NAN.abs_log10().is_nan());
    }

    #[test]
    fn test_ln() {
        assert!(ONE.ln().is_zero());

        let d1 = BigDouble::from_f64(core::f64::consts::E).ln();
        assert!((d1.to_f64() - 1.0).abs() < 1e-12);

        let d1 = BigDouble::from_parts(1.0, 100).ln();
        assert!((d1.to_f64() - 100.0 * LN_10).abs() < 1e-10);

        assert!(ZERO.ln().is_nan());
        assert!(BigDouble::from_f64(-1.0).ln().is_nan());
        assert!(crate::INF_POS.ln().is_inf_pos());
        assert!(crate::NAN.ln().is_nan());

        // ln is the inverse of exp
        let eps = BigDouble::from_parts(1.0, -10);
        for _ in 0..1000 {
            let x = (0.1 + random::<f64>() * 99.9) * if random::<bool>() { 1.0 } else { -1.0 };
            let d1 = BigDouble::from_f64(x).exp().ln();
            assert!(d1.eq_tolerance(&BigDouble::from_f64(x), &eps), "x = {}", x);
        }
    }

    #[test]
    fn test_log2() {
        assert_eq!(BigDouble::from_f64(8.0).log2().to_f64(), 3.0);
        assert!(ONE.log2().is_zero());
        assert!(ZERO.log2().is_nan());
        assert!(crate::INF_POS.log2().is_inf_pos());
    }

    #[test]
    fn test_log() {
        assert_eq!(BigDouble::from_f64(100.0).log(10.0).to_f64(), 2.0);
        assert_eq!(BigDouble::from_f64(27.0).log(3.0).to_f64(), 3.0);

        let d1 = BigDouble::from_parts(1.0, 100).log(2.0);
        assert!((d1.to_f64() - 100.0 * LOG2_10).abs() < 1e-9);

        assert!(BigDouble::from_f64(100.0).log(-2.0).is_nan());
        assert!(ZERO.log(10.0).is_nan());
        assert!(crate::INF_POS.log(10.0).is_inf_pos());
        assert!(crate::NAN.log(10.0).is_nan());
    }
}

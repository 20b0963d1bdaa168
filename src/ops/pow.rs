//! Power and exponential.

use crate::defs::Exponent;
use crate::defs::EXPONENT_MAX;
use crate::defs::ROUND_TOLERANCE;
use crate::num::BigDouble;
use crate::num::INF_NEG;
use crate::num::INF_POS;
use crate::num::NAN;
use crate::num::ONE;
use crate::num::ZERO;
use core::cmp::Ordering;

// Largest integer power taken through repeated squaring; larger powers go
// through the logarithmic estimation.
const INT_POW_MAX: f64 = 4_294_967_296.0;

impl BigDouble {
    /// Returns `self` to the power of `power`.
    /// Powers beyond the double range act as infinities.
    pub fn pow(&self, power: &Self) -> Self {
        self.powf(power.to_f64())
    }

    /// Returns `self` to the power of `power`.
    ///
    /// A negative base with a non-integer power gives NaN. Zero to the power
    /// of zero is one by convention; zero to a negative power is positive
    /// infinity. The accuracy of the result is bounded by the accuracy of
    /// the underlying double operations.
    pub fn powf(&self, power: f64) -> Self {
        if self.is_nan() || power.is_nan() {
            return NAN;
        }

        if self.is_zero() {
            return if power == 0.0 {
                ONE
            } else if power > 0.0 {
                ZERO
            } else {
                INF_POS
            };
        }

        if power.is_infinite() {
            // the magnitude of the base decides the limit
            return match self.abs().cmp(&ONE) {
                Some(Ordering::Greater) => {
                    if power > 0.0 {
                        INF_POS
                    } else {
                        ZERO
                    }
                }
                Some(Ordering::Less) => {
                    if power > 0.0 {
                        ZERO
                    } else {
                        INF_POS
                    }
                }
                _ => ONE,
            };
        }

        let power_is_integer = power.fract() == 0.0;

        if self.is_negative() && !power_is_integer {
            return NAN;
        }

        if self.is_inf() {
            return if power == 0.0 {
                ONE
            } else if power > 0.0 {
                if self.m < 0.0 && (power % 2.0).abs() == 1.0 {
                    INF_NEG
                } else {
                    INF_POS
                }
            } else {
                ZERO
            };
        }

        // powers of ten have an exact representation
        if self.m == 1.0 && self.e == 1 {
            return Self::pow10(power);
        }

        if power_is_integer && (0.0..=INT_POW_MAX).contains(&power) {
            return self.powi(power as i64);
        }

        self.pow_internal(power)
    }

    /// Returns `self` to the power of the integer `n` computed by repeated
    /// squaring. A negative `n` takes the reciprocal of the base first.
    pub fn powi(&self, n: i64) -> Self {
        if self.is_nan() {
            return NAN;
        }

        if n < 0 {
            self.recip().powi_abs(n.unsigned_abs())
        } else {
            self.powi_abs(n as u64)
        }
    }

    fn powi_abs(&self, mut n: u64) -> Self {
        let mut result = ONE;
        let mut base = *self;

        while n > 0 {
            if n & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            n >>= 1;
        }

        result
    }

    // Estimation in three stages: direct mantissa power when the target
    // exponent is an integer, then mantissa logarithm with the exponent
    // residue, then a pure base-10 estimate for the cases where the double
    // arithmetic of the first two over- or underflows.
    fn pow_internal(&self, power: f64) -> Self {
        let temp = self.e as f64 * power;

        if temp.fract() == 0.0 && temp.abs() < EXPONENT_MAX as f64 {
            let new_m = self.m.powf(power);
            if new_m.is_finite() && new_m != 0.0 {
                return Self::normalized(new_m, temp as Exponent);
            }
        }

        let new_e = temp.trunc();
        let residue = temp - new_e;
        let new_m = 10f64.powf(power * self.m.log10() + residue);
        if new_m.is_finite() && new_m != 0.0 {
            return Self::normalized(new_m, new_e as Exponent);
        }

        let result = Self::pow10(power * self.abs_log10());
        if self.m < 0.0 && (power % 2.0).abs() == 1.0 {
            return result.neg();
        }

        result
    }

    /// Returns 10 to the power of `value`. Values within a small tolerance
    /// of an integer produce the exact power of ten.
    pub fn pow10(value: f64) -> Self {
        if value.is_nan() {
            return NAN;
        }

        if value.is_infinite() {
            return if value > 0.0 { INF_POS } else { ZERO };
        }

        let whole = value.trunc();
        let residual = value - whole;

        if residual.abs() < ROUND_TOLERANCE {
            return Self::from_parts(1.0, whole as Exponent);
        }

        Self::normalized(10f64.powf(residual), whole as Exponent)
    }

    /// Returns e to the power of `self`.
    pub fn exp(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }

        if self.is_inf() {
            return if self.m > 0.0 { INF_POS } else { ZERO };
        }

        let x = self.to_f64();
        if -706.0 < x && x < 709.0 {
            // inside this window the native exponent does not overflow
            return Self::from_f64(x.exp());
        }

        Self::pow10(x * core::f64::consts::LOG10_E)
    }
}

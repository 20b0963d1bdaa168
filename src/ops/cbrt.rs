//! Cube, cube root, and the general root.

use crate::num::BigDouble;
use crate::num::NAN;

// 10^(1/3) and 10^(2/3), for the exponents that do not divide by three
const CBRT_10: f64 = 2.154434690031883;
const CBRT_100: f64 = 4.641588833612778;

impl BigDouble {
    /// Returns `self` cubed.
    pub fn cube(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }

        Self::normalized(self.m * self.m * self.m, self.e.saturating_mul(3))
    }

    /// Returns the cube root of `self`. The sign of the value is preserved.
    pub fn cbrt(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }

        if self.is_inf() {
            return *self;
        }

        let new_m = self.m.cbrt();

        match self.e % 3 {
            1 | -2 => Self::normalized(new_m * CBRT_10, self.e.div_euclid(3)),
            2 | -1 => Self::normalized(new_m * CBRT_100, self.e.div_euclid(3)),
            _ => Self::normalized(new_m, self.e / 3),
        }
    }

    /// Returns the `n`-th root of `self`.
    /// An even root of a negative value and a root of index zero give NaN.
    pub fn root(&self, n: f64) -> Self {
        if self.is_nan() || n.is_nan() || n == 0.0 {
            return NAN;
        }

        if self.is_negative() {
            return if n.fract() == 0.0 && (n % 2.0).abs() == 1.0 {
                self.neg().root(n).neg()
            } else {
                NAN
            };
        }

        self.powf(1.0 / n)
    }
}

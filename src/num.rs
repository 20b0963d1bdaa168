//! BigDouble definition and basic arithmetic, comparison, and rounding operations.

use crate::common::consts::pow10_lookup;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::DOUBLE_EXP_MIN;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use crate::defs::MAX_SIGNIFICANT_DIGITS;
use core::cmp::Ordering;

#[cfg(feature = "random")]
use crate::defs::Error;

/// An extended-range floating point number: a double mantissa scaled by a
/// power of ten held in a separate integer exponent.
///
/// For finite non-zero values the mantissa is kept normalized so that
/// `1 <= |mantissa| < 10`, and every value has exactly one representation.
/// Zero is `(0, 0)`. NaN is encoded as a NaN mantissa, and infinity as a
/// mantissa of `1` or `-1` paired with the maximum exponent.
#[derive(Copy, Clone, Debug)]
pub struct BigDouble {
    pub(crate) m: f64,
    pub(crate) e: Exponent,
}

/// Not a number.
pub const NAN: BigDouble = BigDouble::from_raw(f64::NAN, 0);

/// Positive infinity.
pub const INF_POS: BigDouble = BigDouble::from_raw(1.0, EXPONENT_MAX);

/// Negative infinity.
pub const INF_NEG: BigDouble = BigDouble::from_raw(-1.0, EXPONENT_MAX);

/// Zero.
pub const ZERO: BigDouble = BigDouble::from_raw(0.0, 0);

/// One.
pub const ONE: BigDouble = BigDouble::from_raw(1.0, 0);

pub(crate) const TWO: BigDouble = BigDouble::from_raw(2.0, 0);

impl BigDouble {
    pub(crate) const fn from_raw(m: f64, e: Exponent) -> Self {
        BigDouble { m, e }
    }

    /// Creates a BigDouble from a mantissa and a power-of-ten exponent.
    /// The input does not need to be normalized: any finite mantissa is
    /// brought to canonical form, a zero mantissa gives zero regardless of
    /// the exponent, a NaN mantissa gives NaN, and an infinite mantissa
    /// gives infinity of the same sign.
    pub fn from_parts(mantissa: f64, exponent: Exponent) -> Self {
        Self::normalized(mantissa, exponent)
    }

    /// Returns the mantissa of `self`.
    pub fn mantissa(&self) -> f64 {
        self.m
    }

    /// Returns the exponent of `self`.
    pub fn exponent(&self) -> Exponent {
        self.e
    }

    // Brings an arbitrary finite (mantissa, exponent) pair to canonical form.
    // Single normalization point for all construction paths.
    pub(crate) fn normalized(mantissa: f64, exponent: Exponent) -> Self {
        if mantissa.is_nan() {
            return NAN;
        }

        if mantissa.is_infinite() {
            return if mantissa > 0.0 { INF_POS } else { INF_NEG };
        }

        if mantissa == 0.0 {
            return ZERO;
        }

        if (1.0..10.0).contains(&mantissa) {
            return Self::bounded(mantissa, exponent);
        }

        let shift = mantissa.abs().log10().floor() as Exponent;
        let m = if shift == DOUBLE_EXP_MIN {
            // below 1e-323 the mantissa is subnormal and the table ends
            mantissa * 10.0 / 1e-323
        } else {
            mantissa / pow10_lookup(shift)
        };

        Self::bounded(m, exponent.saturating_add(shift))
    }

    // Applies the exponent range limits: overflow saturates to infinity,
    // underflow collapses to zero.
    fn bounded(m: f64, e: Exponent) -> Self {
        if e >= EXPONENT_MAX {
            if m < 0.0 {
                INF_NEG
            } else {
                INF_POS
            }
        } else if e <= EXPONENT_MIN {
            ZERO
        } else {
            BigDouble { m, e }
        }
    }

    /// Returns true if `self` is not a number.
    pub fn is_nan(&self) -> bool {
        self.m.is_nan()
    }

    /// Returns true if `self` is infinite.
    pub fn is_inf(&self) -> bool {
        self.e == EXPONENT_MAX
    }

    /// Returns true if `self` is positive infinity.
    pub fn is_inf_pos(&self) -> bool {
        self.is_inf() && self.m > 0.0
    }

    /// Returns true if `self` is negative infinity.
    pub fn is_inf_neg(&self) -> bool {
        self.is_inf() && self.m < 0.0
    }

    /// Returns true if `self` is neither infinite nor NaN.
    pub fn is_finite(&self) -> bool {
        !self.is_inf() && !self.is_nan()
    }

    /// Returns true if `self` is zero.
    pub fn is_zero(&self) -> bool {
        self.m == 0.0
    }

    /// Returns true if `self` is positive.
    /// The function returns false if `self` is zero or NaN.
    pub fn is_positive(&self) -> bool {
        self.m > 0.0
    }

    /// Returns true if `self` is negative.
    /// The function returns false if `self` is zero or NaN.
    pub fn is_negative(&self) -> bool {
        self.m < 0.0
    }

    /// Returns a copy of `self` with the sign reversed.
    pub fn neg(&self) -> Self {
        if self.m == 0.0 {
            return ZERO;
        }
        Self::from_raw(-self.m, self.e)
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        Self::from_raw(self.m.abs(), self.e)
    }

    /// Returns `1` for positive values, `-1` for negative values, `0` for
    /// zero, and NaN for NaN.
    pub fn signum(&self) -> f64 {
        if self.m == 0.0 {
            0.0
        } else {
            self.m.signum()
        }
    }

    /// Returns the sign of `self`, or None for zero and NaN which carry no
    /// sign.
    pub fn sign(&self) -> Option<Sign> {
        if self.m > 0.0 {
            Some(Sign::Pos)
        } else if self.m < 0.0 {
            Some(Sign::Neg)
        } else {
            None
        }
    }

    /// Adds `d2` to `self` and returns the result of the addition.
    pub fn add(&self, d2: &Self) -> Self {
        if self.is_nan() || d2.is_nan() {
            return NAN;
        }

        if self.is_inf() {
            return if d2.is_inf() && (self.m < 0.0) != (d2.m < 0.0) {
                NAN
            } else {
                *self
            };
        }

        if d2.is_inf() {
            return *d2;
        }

        if self.m == 0.0 {
            return *d2;
        }

        if d2.m == 0.0 {
            return *self;
        }

        let (bigger, smaller) = if self.e >= d2.e { (self, d2) } else { (d2, self) };

        if bigger.e - smaller.e > MAX_SIGNIFICANT_DIGITS {
            return *bigger;
        }

        // Both addends are scaled to integers near 1e14 before summing, so
        // values that started out as integers keep exact integer sums.
        let m = (1e14 * bigger.m + 1e14 * smaller.m * pow10_lookup(smaller.e - bigger.e)).round();

        Self::normalized(m, bigger.e - 14)
    }

    /// Subtracts `d2` from `self` and returns the result of the subtraction.
    pub fn sub(&self, d2: &Self) -> Self {
        self.add(&d2.neg())
    }

    /// Multiplies `self` by `d2` and returns the result of the multiplication.
    pub fn mul(&self, d2: &Self) -> Self {
        if self.is_nan() || d2.is_nan() {
            return NAN;
        }

        if self.is_inf() || d2.is_inf() {
            if self.m == 0.0 || d2.m == 0.0 {
                return NAN;
            }
            return if (self.m < 0.0) == (d2.m < 0.0) {
                INF_POS
            } else {
                INF_NEG
            };
        }

        Self::normalized(self.m * d2.m, self.e + d2.e)
    }

    /// Divides `self` by `d2` and returns the result of the division.
    /// Division by zero gives infinity of the dividend's sign, and zero
    /// divided by zero gives NaN.
    pub fn div(&self, d2: &Self) -> Self {
        self.mul(&d2.recip())
    }

    /// Returns the reciprocal of `self`.
    pub fn recip(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }
        Self::normalized(1.0 / self.m, -self.e)
    }

    /// Compares `self` to `d2`.
    /// Returns None if `self` or `d2` is NaN.
    pub fn cmp(&self, d2: &Self) -> Option<Ordering> {
        if self.is_nan() || d2.is_nan() {
            return None;
        }

        if self.m == 0.0 {
            return Some(if d2.m == 0.0 {
                Ordering::Equal
            } else if d2.m < 0.0 {
                Ordering::Greater
            } else {
                Ordering::Less
            });
        }

        if d2.m == 0.0 {
            return Some(if self.m < 0.0 {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        }

        if self.m > 0.0 {
            if d2.m < 0.0 {
                return Some(Ordering::Greater);
            }
            if self.e != d2.e {
                return Some(self.e.cmp(&d2.e));
            }
            self.m.partial_cmp(&d2.m)
        } else {
            if d2.m > 0.0 {
                return Some(Ordering::Less);
            }
            // for negative values the larger exponent means the smaller value
            if self.e != d2.e {
                return Some(d2.e.cmp(&self.e));
            }
            self.m.partial_cmp(&d2.m)
        }
    }

    /// Compares `self` to `d2` treating values within the relative
    /// `tolerance` as equal.
    /// Returns None if any of the arguments is NaN.
    pub fn cmp_tolerance(&self, d2: &Self, tolerance: &Self) -> Option<Ordering> {
        if self.is_nan() || d2.is_nan() || tolerance.is_nan() {
            return None;
        }
        if self.eq_tolerance(d2, tolerance) {
            Some(Ordering::Equal)
        } else {
            self.cmp(d2)
        }
    }

    /// Returns true if `self` and `d2` are equal within the relative
    /// `tolerance`: |self - d2| <= max(|self|, |d2|) * tolerance.
    pub fn eq_tolerance(&self, d2: &Self, tolerance: &Self) -> bool {
        matches!(
            self.sub(d2)
                .abs()
                .cmp(&self.abs().max(&d2.abs()).mul(tolerance)),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    /// Returns true if `self` is less than `d2` beyond the relative `tolerance`.
    pub fn lt_tolerance(&self, d2: &Self, tolerance: &Self) -> bool {
        !self.eq_tolerance(d2, tolerance) && self.cmp(d2) == Some(Ordering::Less)
    }

    /// Returns true if `self` is less than or equal to `d2` within the relative `tolerance`.
    pub fn lte_tolerance(&self, d2: &Self, tolerance: &Self) -> bool {
        self.eq_tolerance(d2, tolerance) || self.cmp(d2) == Some(Ordering::Less)
    }

    /// Returns true if `self` is greater than `d2` beyond the relative `tolerance`.
    pub fn gt_tolerance(&self, d2: &Self, tolerance: &Self) -> bool {
        !self.eq_tolerance(d2, tolerance) && self.cmp(d2) == Some(Ordering::Greater)
    }

    /// Returns true if `self` is greater than or equal to `d2` within the relative `tolerance`.
    pub fn gte_tolerance(&self, d2: &Self, tolerance: &Self) -> bool {
        self.eq_tolerance(d2, tolerance) || self.cmp(d2) == Some(Ordering::Greater)
    }

    /// Returns the value of `d2` if `d2` is greater than `self`, or the value of `self` otherwise.
    /// If either argument is NaN, the function returns NaN.
    pub fn max(&self, d2: &Self) -> Self {
        if self.is_nan() || d2.is_nan() {
            NAN
        } else if self.cmp(d2) == Some(Ordering::Less) {
            *d2
        } else {
            *self
        }
    }

    /// Returns the value of `d2` if `d2` is less than `self`, or the value of `self` otherwise.
    /// If either argument is NaN, the function returns NaN.
    pub fn min(&self, d2: &Self) -> Self {
        if self.is_nan() || d2.is_nan() {
            NAN
        } else if self.cmp(d2) == Some(Ordering::Greater) {
            *d2
        } else {
            *self
        }
    }

    /// Restricts the value of `self` to an interval determined by the values of `min` and `max`.
    /// If either bound is NaN, or `min` is greater than `max`, the function returns NaN.
    pub fn clamp(&self, min: &Self, max: &Self) -> Self {
        if min.is_nan() || max.is_nan() || min.cmp(max) == Some(Ordering::Greater) {
            return NAN;
        }
        self.max(min).min(max)
    }

    /// Returns the largest integer less than or equal to `self`.
    /// Values with exponents at or above the precision limit have no
    /// fractional part and are returned unchanged.
    pub fn floor(&self) -> Self {
        if self.e < -1 {
            return if self.m >= 0.0 { ZERO } else { ONE.neg() };
        }
        if self.e < MAX_SIGNIFICANT_DIGITS {
            Self::from_f64(self.to_f64().floor())
        } else {
            *self
        }
    }

    /// Returns the smallest integer greater than or equal to `self`.
    /// Values with exponents at or above the precision limit have no
    /// fractional part and are returned unchanged.
    pub fn ceil(&self) -> Self {
        if self.e < -1 {
            return if self.m > 0.0 { ONE } else { ZERO };
        }
        if self.e < MAX_SIGNIFICANT_DIGITS {
            Self::from_f64(self.to_f64().ceil())
        } else {
            *self
        }
    }

    /// Returns `self` rounded to the nearest integer.
    /// Values with exponents at or above the precision limit have no
    /// fractional part and are returned unchanged.
    pub fn round(&self) -> Self {
        if self.e < -1 {
            return ZERO;
        }
        if self.e < MAX_SIGNIFICANT_DIGITS {
            Self::from_f64(self.to_f64().round())
        } else {
            *self
        }
    }

    /// Returns the integer part of `self`.
    /// Values with exponents at or above the precision limit have no
    /// fractional part and are returned unchanged.
    pub fn trunc(&self) -> Self {
        if self.e < 0 {
            return ZERO;
        }
        if self.e < MAX_SIGNIFICANT_DIGITS {
            Self::from_f64(self.to_f64().trunc())
        } else {
            *self
        }
    }

    /// Returns a random normalized BigDouble with the exponent in the range
    /// from `exp_from` to `exp_to` inclusive. The sign can be positive and
    /// negative. Zero is excluded.
    /// Function does not follow any specific distribution law.
    /// The intended use of this function is for testing.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `exp_from` is greater than `exp_to`.
    #[cfg(feature = "random")]
    pub fn random_normal(exp_from: Exponent, exp_to: Exponent) -> Result<Self, Error> {
        if exp_from > exp_to {
            return Err(Error::InvalidArgument);
        }

        let m = 1.0 + rand::random::<f64>() * 9.0;
        let m = if rand::random::<bool>() { m } else { -m };

        let span = exp_to - exp_from;
        let e = exp_from
            + if span > 0 {
                rand::random::<Exponent>().rem_euclid(span.saturating_add(1))
            } else {
                0
            };

        Ok(Self::from_raw(m, e))
    }
}

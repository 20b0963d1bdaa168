//! Hyperbolic functions.

use crate::num::BigDouble;
use crate::num::NAN;
use crate::num::ONE;
use crate::num::TWO;
use core::cmp::Ordering;

impl BigDouble {
    /// Returns the hyperbolic sine of `self`.
    pub fn sinh(&self) -> Self {
        self.exp().sub(&self.neg().exp()).div(&TWO)
    }

    /// Returns the hyperbolic cosine of `self`.
    pub fn cosh(&self) -> Self {
        self.exp().add(&self.neg().exp()).div(&TWO)
    }

    /// Returns the hyperbolic tangent of `self`.
    pub fn tanh(&self) -> Self {
        if self.is_inf() {
            return if self.m > 0.0 { ONE } else { ONE.neg() };
        }

        self.sinh().div(&self.cosh())
    }

    /// Returns the inverse hyperbolic sine of `self`.
    pub fn asinh(&self) -> Self {
        if self.is_inf() {
            return *self;
        }

        self.add(&self.sqr().add(&ONE).sqrt()).ln()
    }

    /// Returns the inverse hyperbolic cosine of `self`.
    /// Values less than one give NaN.
    pub fn acosh(&self) -> Self {
        self.add(&self.sqr().sub(&ONE).sqrt()).ln()
    }

    /// Returns the inverse hyperbolic tangent of `self`.
    /// Values of magnitude one and above give NaN.
    pub fn atanh(&self) -> Self {
        if matches!(
            self.abs().cmp(&ONE),
            Some(Ordering::Greater | Ordering::Equal)
        ) {
            return NAN;
        }

        self.add(&ONE).div(&ONE.sub(self)).ln().div(&TWO)
    }
}

//! Square and square root.

use crate::num::BigDouble;
use crate::num::INF_POS;
use crate::num::NAN;

// sqrt(10), used when the exponent does not halve evenly
const SQRT_10: f64 = 3.16227766016838;

impl BigDouble {
    /// Returns `self` squared.
    pub fn sqr(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }

        Self::normalized(self.m * self.m, self.e.saturating_mul(2))
    }

    /// Returns the square root of `self`. Negative values give NaN.
    pub fn sqrt(&self) -> Self {
        if self.is_nan() || self.m < 0.0 {
            return NAN;
        }

        if self.is_inf() {
            return INF_POS;
        }

        if self.e % 2 != 0 {
            // the remainder carries the sign of the exponent, so this covers
            // both the positive and the negative odd case
            Self::normalized(self.m.sqrt() * SQRT_10, (self.e - 1) / 2)
        } else {
            Self::normalized(self.m.sqrt(), self.e / 2)
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Exponent;
    use crate::num::ZERO;
    use rand::random;

    #[test]
    fn test_sqr() {
        let d1 = BigDouble::from_f64(3.0).sqr();
        assert_eq!(d1.to_f64(), 9.0);

        let d1 = BigDouble::from_parts(3.0, 10).sqr();
        assert_eq!(d1.mantissa(), 9.0);
        assert_eq!(d1.exponent(), 20);

        let d1 = BigDouble::from_parts(-5.0, 7).sqr();
        assert_eq!(d1.mantissa(), 2.5);
        assert_eq!(d1.exponent(), 15);

        assert!(ZERO.sqr().is_zero());
        assert!(crate::INF_POS.sqr().is_inf_pos());
        assert!(crate::INF_NEG.sqr().is_inf_pos());
        assert!(crate::NAN.sqr().is_nan());
    }

    #[test]
    fn test_sqrt() {
        let d1 = BigDouble::from_f64(9.0).sqrt();
        assert_eq!(d1.to_f64(), 3.0);

        // even exponent halves exactly
        let d1 = BigDouble::from_parts(4.0, 10).sqrt();
        assert_eq!(d1.mantissa(), 2.0);
        assert_eq!(d1.exponent(), 5);

        assert!(ZERO.sqrt().is_zero());
        assert!(BigDouble::from_f64(-1.0).sqrt().is_nan());
        assert!(crate::INF_POS.sqrt().is_inf_pos());
        assert!(crate::INF_NEG.sqrt().is_nan());
        assert!(crate::NAN.sqrt().is_nan());

        // square root then square restores the value, odd exponents included
        let eps = BigDouble::from_parts(1.0, -12);
        for _ in 0..1000 {
            let d1 = BigDouble::from_parts(1.0 + random::<f64>() * 9.0, random::<i32>() as Exponent);
            let d2 = d1.sqrt().sqr();
            assert!(d2.eq_tolerance(&d1, &eps), "{} vs {}", d1, d2);
        }
    }
}

//! Standard library trait implementations for BigDouble.

use crate::defs::Error;
use crate::num::BigDouble;
use crate::num::ONE;
use crate::num::ZERO;

use core::cmp::Ordering;
use core::cmp::PartialEq;
use core::cmp::PartialOrd;
use core::fmt::Display;
use core::fmt::Formatter;
use core::iter::Product;
use core::iter::Sum;
use core::ops::Add;
use core::ops::AddAssign;
use core::ops::Div;
use core::ops::DivAssign;
use core::ops::Mul;
use core::ops::MulAssign;
use core::ops::Neg;
use core::ops::Sub;
use core::ops::SubAssign;
use core::str::FromStr;

//
// ops traits
//

impl Add for BigDouble {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        BigDouble::add(&self, &rhs)
    }
}

impl AddAssign for BigDouble {
    fn add_assign(&mut self, rhs: Self) {
        *self = BigDouble::add(self, &rhs)
    }
}

impl Sub for BigDouble {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        BigDouble::sub(&self, &rhs)
    }
}

impl SubAssign for BigDouble {
    fn sub_assign(&mut self, rhs: Self) {
        *self = BigDouble::sub(self, &rhs)
    }
}

impl Mul for BigDouble {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        BigDouble::mul(&self, &rhs)
    }
}

impl MulAssign for BigDouble {
    fn mul_assign(&mut self, rhs: Self) {
        *self = BigDouble::mul(self, &rhs)
    }
}

impl Div for BigDouble {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        BigDouble::div(&self, &rhs)
    }
}

impl DivAssign for BigDouble {
    fn div_assign(&mut self, rhs: Self) {
        *self = BigDouble::div(self, &rhs)
    }
}

impl Neg for BigDouble {
    type Output = Self;
    fn neg(self) -> Self::Output {
        BigDouble::neg(&self)
    }
}

impl Neg for &BigDouble {
    type Output = BigDouble;
    fn neg(self) -> Self::Output {
        BigDouble::neg(self)
    }
}

impl Add<&BigDouble> for BigDouble {
    type Output = Self;
    fn add(self, rhs: &BigDouble) -> Self::Output {
        BigDouble::add(&self, rhs)
    }
}

impl AddAssign<&BigDouble> for BigDouble {
    fn add_assign(&mut self, rhs: &BigDouble) {
        *self = BigDouble::add(self, rhs)
    }
}

impl Sub<&BigDouble> for BigDouble {
    type Output = Self;
    fn sub(self, rhs: &BigDouble) -> Self::Output {
        BigDouble::sub(&self, rhs)
    }
}

impl SubAssign<&BigDouble> for BigDouble {
    fn sub_assign(&mut self, rhs: &BigDouble) {
        *self = BigDouble::sub(self, rhs)
    }
}

impl Mul<&BigDouble> for BigDouble {
    type Output = Self;
    fn mul(self, rhs: &BigDouble) -> Self::Output {
        BigDouble::mul(&self, rhs)
    }
}

impl MulAssign<&BigDouble> for BigDouble {
    fn mul_assign(&mut self, rhs: &BigDouble) {
        *self = BigDouble::mul(self, rhs)
    }
}

impl Div<&BigDouble> for BigDouble {
    type Output = Self;
    fn div(self, rhs: &BigDouble) -> Self::Output {
        BigDouble::div(&self, rhs)
    }
}

impl DivAssign<&BigDouble> for BigDouble {
    fn div_assign(&mut self, rhs: &BigDouble) {
        *self = BigDouble::div(self, rhs)
    }
}

//
// ordering traits
//

impl PartialEq for BigDouble {
    fn eq(&self, other: &Self) -> bool {
        matches!(BigDouble::cmp(self, other), Some(Ordering::Equal))
    }
}

// NaN is not equal to itself, so there is no Eq.

impl PartialOrd for BigDouble {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        BigDouble::cmp(self, other)
    }
}

//
// conversion traits
//

impl From<f64> for BigDouble {
    fn from(f: f64) -> Self {
        BigDouble::from_f64(f)
    }
}

impl From<f32> for BigDouble {
    fn from(f: f32) -> Self {
        BigDouble::from_f32(f)
    }
}

impl Display for BigDouble {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        self.write_str(f)
    }
}

impl Default for BigDouble {
    fn default() -> BigDouble {
        ZERO
    }
}

impl FromStr for BigDouble {
    type Err = Error;

    fn from_str(src: &str) -> Result<BigDouble, Self::Err> {
        BigDouble::parse(src)
    }
}

impl Sum for BigDouble {
    fn sum<I: Iterator<Item = BigDouble>>(iter: I) -> Self {
        let mut acc = ZERO;
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl Product for BigDouble {
    fn product<I: Iterator<Item = BigDouble>>(iter: I) -> Self {
        let mut acc = ONE;
        for v in iter {
            acc *= v;
        }
        acc
    }
}

impl<'a> Sum<&'a BigDouble> for BigDouble {
    fn sum<I: Iterator<Item = &'a BigDouble>>(iter: I) -> Self {
        let mut acc = ZERO;
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl<'a> Product<&'a BigDouble> for BigDouble {
    fn product<I: Iterator<Item = &'a BigDouble>>(iter: I) -> Self {
        let mut acc = ONE;
        for v in iter {
            acc *= v;
        }
        acc
    }
}

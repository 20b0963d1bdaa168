//! BigDouble formatting and string parsing.

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::MAX_SIGNIFICANT_DIGITS;
use crate::num::BigDouble;
use crate::num::INF_NEG;
use crate::num::INF_POS;
use crate::num::NAN;
use core::fmt::Write;

impl BigDouble {
    /// Parses a number from the string `s`.
    /// The function expects `s` to be a number in decimal or scientific
    /// format, or `Infinity`/`Inf`, or `NaN`, case-insensitive, with
    /// optional surrounding whitespace.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `s` is not a valid representation of a number.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let ps = crate::parser::parse(s.trim())?;

        if ps.is_nan() {
            return Ok(NAN);
        }

        if ps.is_inf() {
            return Ok(if ps.sign().is_positive() {
                INF_POS
            } else {
                INF_NEG
            });
        }

        let (digits, sign, e) = ps.raw_parts();

        // Leading zeroes only shift the exponent. Of the rest, one digit
        // past the precision window is enough; further digits cannot
        // influence the mantissa.
        let zeroes = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());
        let mut m = 0f64;
        let mut consumed = zeroes as Exponent;
        for &d in digits[zeroes..]
            .iter()
            .take(MAX_SIGNIFICANT_DIGITS as usize + 1)
        {
            m = m * 10.0 + d as f64;
            consumed += 1;
        }

        if sign.is_negative() {
            m = -m;
        }

        Ok(Self::from_parts(m, e.saturating_sub(consumed)))
    }

    pub(crate) fn write_str<T: Write>(&self, w: &mut T) -> Result<(), core::fmt::Error> {
        if self.is_nan() {
            return w.write_str("NaN");
        }

        if self.is_inf() {
            return w.write_str(if self.m < 0.0 { "-Infinity" } else { "Infinity" });
        }

        if self.e > -7 && self.e < 21 {
            return write!(w, "{}", self.to_f64());
        }

        write!(
            w,
            "{}e{}{}",
            self.m,
            if self.e >= 0 { "+" } else { "" },
            self.e
        )
    }

    /// Formats `self` in scientific notation with `places` digits after the
    /// decimal point of the mantissa.
    pub fn to_exponential(&self, places: usize) -> String {
        if self.is_nan() {
            return "NaN".into();
        }

        if self.is_inf() {
            return if self.m < 0.0 { "-Infinity" } else { "Infinity" }.into();
        }

        if self.m == 0.0 {
            return format!("{:.*}e+0", places, 0.0);
        }

        format!(
            "{:.*}e{}{}",
            places,
            self.m,
            if self.e >= 0 { "+" } else { "" },
            self.e
        )
    }

    /// Formats `self` in decimal notation with `places` digits after the
    /// decimal point.
    pub fn to_fixed(&self, places: usize) -> String {
        if self.is_nan() {
            return "NaN".into();
        }

        if self.is_inf() {
            return if self.m < 0.0 { "-Infinity" } else { "Infinity" }.into();
        }

        if self.m == 0.0 {
            return format!("{:.*}", places, 0.0);
        }

        if self.e >= MAX_SIGNIFICANT_DIGITS {
            // the whole mantissa sits in the integer part: print its digits
            // and pad with zeroes up to the decimal point
            let digits = self.m.abs().to_string().replace('.', "");
            let width = self.e as usize + 1;

            let mut out = String::new();
            if self.m < 0.0 {
                out.push('-');
            }
            out.push_str(&digits);
            for _ in digits.len()..width {
                out.push('0');
            }
            if places > 0 {
                out.push('.');
                for _ in 0..places {
                    out.push('0');
                }
            }
            return out;
        }

        format!("{:.*}", places, self.to_f64())
    }

    /// Formats `self` with `places` significant digits, choosing decimal or
    /// scientific notation by the magnitude of the value.
    pub fn to_precision(&self, places: usize) -> String {
        if self.e <= -7 {
            return self.to_exponential(places.saturating_sub(1));
        }

        if (places as Exponent) > self.e {
            return self.to_fixed((places as Exponent - self.e - 1) as usize);
        }

        self.to_exponential(places.saturating_sub(1))
    }

    /// Returns the mantissa rounded to `places` decimal places.
    pub fn mantissa_with_decimal_places(&self, places: usize) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }

        if self.is_inf() {
            return if self.m < 0.0 {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }

        if self.m == 0.0 {
            return 0.0;
        }

        // formatting a finite double with a fixed number of decimal places
        // always yields a parseable number, hence unwrap
        format!("{:.*}", places, self.m).parse().unwrap()
    }
}

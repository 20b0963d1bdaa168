//! Parser for numbers represented in decimal or scientific format.

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Sign;
use core::str::Chars;
use smallvec::SmallVec;

pub(crate) struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    mantissa_bytes: SmallVec<[u8; 64]>,
    e: Exponent,
    inf: bool,
    nan: bool,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            mantissa_bytes: SmallVec::new(),
            e: 0,
            inf: false,
            nan: false,
        }
    }

    // Returns the next character of the string in lower case,
    // or None if the end of the string is reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next().map(|c| c.to_ascii_lowercase());
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    pub fn is_inf(&self) -> bool {
        self.inf
    }

    pub fn is_nan(&self) -> bool {
        self.nan
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the mantissa digits, the sign, and the exponent, such that
    /// the parsed number is `0.<digits> * 10^exponent`.
    pub fn raw_parts(&self) -> (&[u8], Sign, Exponent) {
        (&self.mantissa_bytes, self.sign, self.e)
    }
}

/// Parses a number from `s`. The whole input must form a number: trailing
/// characters are an error, not an end of parsing.
pub(crate) fn parse(s: &str) -> Result<ParserState<'_>, Error> {
    let mut parser_state = ParserState::new(s);
    let mut ch = parser_state.next_char();

    // sign
    if let Some(c) = ch {
        match c {
            '+' => ch = parser_state.next_char(),
            '-' => {
                parser_state.sign = Sign::Neg;
                ch = parser_state.next_char()
            }
            _ => {}
        };
    }

    match ch {
        Some('i') => parse_inf(&mut parser_state)?,
        Some('n') => parse_nan(&mut parser_state)?,
        Some('.' | '0'..='9') => parse_num(&mut parser_state)?,
        _ => return Err(Error::InvalidArgument),
    };

    if parser_state.cur_char().is_some() {
        return Err(Error::InvalidArgument);
    }

    Ok(parser_state)
}

// "inf" or "infinity", case-insensitive
fn parse_inf(parser_state: &mut ParserState) -> Result<(), Error> {
    for c in "nf".chars() {
        if parser_state.next_char() != Some(c) {
            return Err(Error::InvalidArgument);
        }
    }

    if parser_state.next_char().is_some() {
        for c in "inity".chars() {
            if parser_state.cur_char() != Some(c) {
                return Err(Error::InvalidArgument);
            }
            parser_state.next_char();
        }
    }

    parser_state.inf = true;
    Ok(())
}

// "nan", case-insensitive
fn parse_nan(parser_state: &mut ParserState) -> Result<(), Error> {
    for c in "an".chars() {
        if parser_state.next_char() != Some(c) {
            return Err(Error::InvalidArgument);
        }
    }

    parser_state.next_char();
    parser_state.nan = true;
    Ok(())
}

fn parse_num(parser_state: &mut ParserState) -> Result<(), Error> {
    let (int_len, skip_cnt) = parse_digits(parser_state, true);

    let frac_len = if Some('.') == parser_state.cur_char() {
        parser_state.next_char();
        parse_digits(parser_state, false).0
    } else {
        0
    };

    if int_len == 0 && frac_len == 0 && skip_cnt == 0 {
        return Err(Error::InvalidArgument);
    }

    if Some('e') == parser_state.cur_char() {
        parser_state.next_char();
        parse_exp(parser_state)?;
    }

    if int_len != 0 {
        parser_state.e = parser_state.e.saturating_add(int_len as Exponent);
    }

    Ok(())
}

fn parse_digits(parser_state: &mut ParserState, skip_zeroes: bool) -> (usize, usize) {
    let mut ch = parser_state.cur_char();
    let mut len = 0;
    let mut skip_cnt = 0;

    if skip_zeroes {
        // skip leading zeroes
        while let Some('0') = ch {
            skip_cnt += 1;
            ch = parser_state.next_char();
        }
    }

    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            parser_state.mantissa_bytes.push(d as u8);
            len += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    (len, skip_cnt)
}

fn parse_exp(parser_state: &mut ParserState) -> Result<(), Error> {
    let mut neg = false;
    let mut ch = parser_state.cur_char();

    if let Some(c) = ch {
        match c {
            '+' => {
                ch = parser_state.next_char();
            }
            '-' => {
                neg = true;
                ch = parser_state.next_char();
            }
            _ => {}
        };
    }

    let mut digit_cnt = 0;
    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            // saturation is enough: the normalizing constructor turns
            // out-of-range exponents into infinity or zero
            parser_state.e = parser_state
                .e
                .saturating_mul(10)
                .saturating_add(d as Exponent);
            digit_cnt += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    if digit_cnt == 0 {
        return Err(Error::InvalidArgument);
    }

    if neg {
        parser_state.e = -parser_state.e;
    }

    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_parser() {
        // combinations of possible valid components of a number and expected resulting characteristics.
        let mantissas = ["0.0", "0", ".000", "00.", "000123", "456.", "789.012", ".3456", "0.0078"];
        let expected_mantissas: [&[u8]; 9] = [
            &[0],
            &[],
            &[0, 0, 0],
            &[],
            &[1, 2, 3],
            &[4, 5, 6],
            &[7, 8, 9, 0, 1, 2],
            &[3, 4, 5, 6],
            &[0, 0, 7, 8],
        ];
        let expected_exp_shifts = [0, 0, 0, 0, 3, 3, 3, 0, 0];

        let signs = ["", "+", "-"];
        let expected_signs = [Sign::Pos, Sign::Pos, Sign::Neg];

        let exponents = ["", "e123", "e+345", "e-678", "e901", "E+234", "E-567"];
        let expected_exponents = [0, 123, 345, -678, 901, 234, -567];

        for i in 0..signs.len() {
            for j in 0..mantissas.len() {
                for k in 0..exponents.len() {
                    let numstr = String::from(signs[i]) + mantissas[j] + exponents[k];

                    let ps = parse(&numstr).unwrap();

                    assert!(!ps.is_inf());
                    assert!(!ps.is_nan());

                    let (m, s, e) = ps.raw_parts();
                    assert!(s == expected_signs[i]);
                    assert!(m == expected_mantissas[j]);
                    assert!(e == expected_exponents[k] + expected_exp_shifts[j]);
                }
            }
        }

        // inf
        for i in 0..signs.len() {
            for inf in ["inf", "INF", "Inf", "infinity", "Infinity", "INFINITY"] {
                let numstr = String::from(signs[i]) + inf;

                let ps = parse(&numstr).unwrap();

                assert!(ps.is_inf());
                assert!(!ps.is_nan());
                assert!(ps.sign() == expected_signs[i]);
            }
        }

        // nan
        for nan in ["nan", "NaN", "NAN"] {
            let ps = parse(nan).unwrap();
            assert!(!ps.is_inf());
            assert!(ps.is_nan());
        }

        // malformed input is an error, not a prefix parse
        for bad in [
            "", "+", "-", ".", "e10", "x", "12x", "1.2.3", "1e", "1e+", "1e-", "1e5x", "infi",
            "infinit", "infinityy", "na", "nanx", "--1", "+-1", "1 2", "NaN ", "0..1",
        ] {
            assert!(
                matches!(parse(bad), Err(Error::InvalidArgument)),
                "input: {:?}",
                bad
            );
        }

        // huge exponents saturate instead of overflowing
        let ps = parse("1.2e99999999999999999999999999999").unwrap();
        let (_, _, e) = ps.raw_parts();
        assert!(e > 0);
        let ps = parse("1.2e-99999999999999999999999999999").unwrap();
        let (_, _, e) = ps.raw_parts();
        assert!(e < 0);
    }
}

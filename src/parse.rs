// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Text parsing for `Rational`.
//!
//! Accepted forms, with surrounding whitespace ignored:
//!
//! * `n` an optionally signed integer,
//! * `n/d` with an unsigned non-zero denominator,
//! * `w n/d` a mixed number whose sign is taken from `w`.
//!
//! Both `/` and U+2044 FRACTION SLASH separate numerator and denominator.

use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, Zero};

use crate::error::ParseRationalError;
use crate::rational::Rational;

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Parses `numer/denom`, `whole numer/denom` or just `numer`.
    fn from_str(s: &str) -> Result<Rational, ParseRationalError> {
        from_str_radix(s, 10)
    }
}

pub(crate) fn from_str_radix(s: &str, radix: u32) -> Result<Rational, ParseRationalError> {
    if radix < 2 || radix > 36 {
        return Err(ParseRationalError::invalid());
    }

    let mut tokens = s.split_whitespace();
    let first = tokens.next().ok_or_else(ParseRationalError::invalid)?;
    match (tokens.next(), tokens.next()) {
        (None, _) => parse_single(first, radix),
        (Some(fraction), None) => parse_mixed(first, fraction, radix),
        (Some(_), Some(_)) => Err(ParseRationalError::invalid()),
    }
}

fn parse_single(token: &str, radix: u32) -> Result<Rational, ParseRationalError> {
    match split_fraction(token) {
        None => Ok(Rational::from_integer(parse_signed(token, radix)?)),
        Some((numer, denom)) => {
            let numer = parse_signed(numer, radix)?;
            let denom = parse_denom(denom, radix)?;
            Ok(Rational::new(numer, denom))
        }
    }
}

fn parse_mixed(whole: &str, fraction: &str, radix: u32) -> Result<Rational, ParseRationalError> {
    let (numer, denom) = split_fraction(fraction).ok_or_else(ParseRationalError::invalid)?;
    // Keep the textual sign so that `-0 1/2` still reads as negative.
    let negative = whole.starts_with('-');
    let whole = parse_signed(whole, radix)?;
    let numer = parse_unsigned(numer, radix)?;
    let denom = parse_denom(denom, radix)?;

    let magnitude = Rational::from_integer(whole.magnitude().clone()) +
                    Rational::new(BigInt::from(numer), denom);
    Ok(if negative { -magnitude } else { magnitude })
}

fn split_fraction(token: &str) -> Option<(&str, &str)> {
    token.split_once(|c: char| c == '/' || c == '\u{2044}')
}

fn parse_denom(s: &str, radix: u32) -> Result<BigInt, ParseRationalError> {
    let denom = parse_unsigned(s, radix)?;
    if denom.is_zero() {
        return Err(ParseRationalError::zero_denominator());
    }
    Ok(BigInt::from(denom))
}

fn parse_signed(s: &str, radix: u32) -> Result<BigInt, ParseRationalError> {
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &s[1..]),
        Some(b'+') => (Sign::Plus, &s[1..]),
        _ => (Sign::Plus, s),
    };
    Ok(BigInt::from_biguint(sign, parse_unsigned(digits, radix)?))
}

/// Digits only: no sign, no separators.
fn parse_unsigned(s: &str, radix: u32) -> Result<BigUint, ParseRationalError> {
    if s.is_empty() || !s.chars().all(|c| c.is_digit(radix)) {
        return Err(ParseRationalError::invalid());
    }
    BigUint::from_str_radix(s, radix).map_err(|_| ParseRationalError::invalid())
}

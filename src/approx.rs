// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rational approximation of floating-point values by continued fractions.

use std::mem;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use tracing::{debug, trace};

use crate::error::RationalError;
use crate::rational::{ratio_to_f64, Rational};

/// Iteration budget used by the conversions that do not take one explicitly.
pub const DEFAULT_MAX_ITERATIONS: usize = 64;

/// A numeric value of either kind accepted by [`Rational::from_numeric`].
#[derive(Clone, Debug, PartialEq)]
pub enum NumericInput {
    Integer(BigInt),
    Real(f64),
}

macro_rules! integer_input_impl {
    ($($t:ty)*) => ($(
        impl From<$t> for NumericInput {
            #[inline]
            fn from(x: $t) -> NumericInput {
                NumericInput::Integer(BigInt::from(x))
            }
        }
    )*)
}

integer_input_impl!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize BigInt);

impl From<f32> for NumericInput {
    #[inline]
    fn from(x: f32) -> NumericInput {
        NumericInput::Real(f64::from(x))
    }
}

impl From<f64> for NumericInput {
    #[inline]
    fn from(x: f64) -> NumericInput {
        NumericInput::Real(x)
    }
}

impl Rational {
    /// Converts any integer or float into a `Rational`.
    ///
    /// Integers convert exactly; floats go through [`Rational::approximate`]
    /// with [`DEFAULT_MAX_ITERATIONS`].
    pub fn from_numeric<T: Into<NumericInput>>(value: T) -> Result<Rational, RationalError> {
        match value.into() {
            NumericInput::Integer(i) => Ok(Rational::from_integer(i)),
            NumericInput::Real(x) => Rational::approximate(x, DEFAULT_MAX_ITERATIONS),
        }
    }

    /// Finds the best rational approximation of `value` reachable within
    /// `max_iterations` continued-fraction terms.
    ///
    /// The expansion stops early once a convergent converts back to exactly
    /// `value`, or when the next convergent would no longer fit in an `f64`.
    ///
    /// ```
    /// use bigratio::Rational;
    ///
    /// assert_eq!(Rational::approximate(0.5, 10).unwrap(), Rational::new(1, 2));
    /// assert_eq!(Rational::approximate(-2.75, 10).unwrap(), Rational::new(-11, 4));
    /// ```
    pub fn approximate(value: f64, max_iterations: usize) -> Result<Rational, RationalError> {
        if !value.is_finite() {
            return Err(RationalError::NotFinite);
        }
        if value == 0.0 {
            return Ok(Rational::zero());
        }

        // Reduce to (-1, 1); `value - whole` is exact in binary floating point.
        let whole = value.trunc();
        let whole_int = BigInt::from_f64(whole).ok_or(RationalError::NotFinite)?;
        let fraction = approximate_fraction(value - whole, value, &whole_int, max_iterations);
        Ok(fraction + whole_int)
    }
}

/// The convergent recurrence over `fraction`, with `|fraction| < 1`.
///
/// `target` and `whole` are only used to detect a convergent that already
/// reproduces the original input.
fn approximate_fraction(fraction: f64, target: f64, whole: &BigInt, max_iterations: usize)
                        -> Rational {
    let (mut numer, mut numer_prev) = (BigInt::zero(), BigInt::one());
    let (mut denom, mut denom_prev) = (BigInt::one(), BigInt::zero());
    let mut x = fraction;

    for iteration in 0..max_iterations {
        if x == 0.0 {
            trace!(iteration, "continued fraction terminated");
            break;
        }
        let reciprocal = 1.0 / x;
        let term = match BigInt::from_f64(reciprocal.round()) {
            Some(term) if reciprocal.is_finite() => term,
            _ => {
                debug!(iteration, x, "continued fraction term is not finite");
                break;
            }
        };

        let numer_next = &numer_prev + &term * &numer;
        let denom_next = &denom_prev + &term * &denom;
        if overflows_f64(&numer_next) || overflows_f64(&denom_next) {
            debug!(iteration, "convergent overflows f64, keeping the previous one");
            break;
        }
        numer_prev = mem::replace(&mut numer, numer_next);
        denom_prev = mem::replace(&mut denom, denom_next);
        x = reciprocal - reciprocal.round();

        if ratio_to_f64(&(whole * &denom + &numer), &denom) == target {
            trace!(iteration, "convergent reproduces the input");
            break;
        }
    }

    // Consecutive convergents satisfy p_k q_(k-1) - p_(k-1) q_k = ±1, so the
    // pair is already coprime and only its sign needs adjusting.
    Rational::new_signed(numer, denom)
}

fn overflows_f64(value: &BigInt) -> bool {
    value.to_f64().map_or(true, |v| !v.is_finite())
}

impl FromPrimitive for Rational {
    fn from_i64(n: i64) -> Option<Rational> {
        Some(Rational::from_integer(n))
    }

    fn from_i128(n: i128) -> Option<Rational> {
        Some(Rational::from_integer(n))
    }

    fn from_u64(n: u64) -> Option<Rational> {
        Some(Rational::from_integer(n))
    }

    fn from_u128(n: u128) -> Option<Rational> {
        Some(Rational::from_integer(n))
    }

    fn from_f32(n: f32) -> Option<Rational> {
        Rational::from_numeric(n).ok()
    }

    fn from_f64(n: f64) -> Option<Rational> {
        Rational::from_numeric(n).ok()
    }
}

#[cfg(test)]
mod test {
    use super::{NumericInput, DEFAULT_MAX_ITERATIONS};
    use crate::error::RationalError;
    use crate::Rational;

    use num_bigint::BigInt;
    use num_traits::{FromPrimitive, Signed, ToPrimitive};
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn test_approximate_exact() {
        fn test(given: f64, (numer, denom): (i64, i64)) {
            assert_eq!(Rational::approximate(given, 10), Ok(Rational::new(numer, denom)));
        }

        test(0.5, (1, 2));
        test(0.0, (0, 1));
        test(-0.0, (0, 1));
        test(0.75, (3, 4));
        test(-0.4, (-2, 5));
        test(0.1, (1, 10));
        test(1.0 / 3.0, (1, 3));
        test(2.0 / 7.0, (2, 7));
        test(3.0, (3, 1));
        test(-2.75, (-11, 4));
        test(1000.0 / 3.0, (1000, 3));
        test(-22.0 / 7.0, (-22, 7));
    }

    #[test]
    fn test_approximate_budget() {
        let pi = std::f64::consts::PI;
        assert_eq!(Rational::approximate(pi, 0), Ok(Rational::from_integer(3)));
        assert_eq!(Rational::approximate(pi, 1), Ok(Rational::new(22, 7)));
        assert_eq!(Rational::approximate(pi, 2), Ok(Rational::new(355, 113)));

        let mut last_error = f64::INFINITY;
        for budget in 0..8 {
            let approx = Rational::approximate(pi, budget).unwrap();
            let error = (approx.to_f64().unwrap() - pi).abs();
            assert!(error <= last_error);
            last_error = error;
        }
        assert!(last_error < 1e-12);
    }

    #[test]
    fn test_approximate_tiny_and_huge() {
        let tiny = Rational::approximate(1e-300, DEFAULT_MAX_ITERATIONS).unwrap();
        assert!(tiny.is_unit_fraction());
        let relative = (tiny.to_f64().unwrap() - 1e-300).abs() / 1e-300;
        assert!(relative < 1e-15);

        let huge = Rational::approximate(1e300, DEFAULT_MAX_ITERATIONS).unwrap();
        assert!(huge.is_integer());
        assert_eq!(huge.numer(), &BigInt::from_f64(1e300).unwrap());
    }

    #[test]
    fn test_approximate_non_finite() {
        assert_eq!(Rational::approximate(f64::NAN, 10), Err(RationalError::NotFinite));
        assert_eq!(Rational::approximate(f64::INFINITY, 10), Err(RationalError::NotFinite));
        assert_eq!(Rational::approximate(f64::NEG_INFINITY, 10), Err(RationalError::NotFinite));
        assert_eq!(Rational::from_f64(f64::NAN), None);
    }

    #[test]
    fn test_from_numeric() {
        assert_eq!(Rational::from_numeric(7u8), Ok(Rational::from_integer(7)));
        assert_eq!(Rational::from_numeric(BigInt::from(-3)), Ok(Rational::from_integer(-3)));
        assert_eq!(Rational::from_numeric(0.25f32), Ok(Rational::new(1, 4)));
        assert_eq!(Rational::from_numeric(-1.5), Ok(Rational::new(-3, 2)));
        assert_eq!(NumericInput::from(2i64), NumericInput::Integer(BigInt::from(2)));
        assert_eq!(Rational::from_i64(-9), Some(Rational::from_integer(-9)));
        assert_eq!(Rational::from_f64(0.125), Some(Rational::new(1, 8)));
    }

    #[test]
    fn prop_recovers_small_fractions() {
        fn prop(numer: i16, denom: u8) -> TestResult {
            if denom == 0 {
                return TestResult::discard();
            }
            let x = f64::from(numer) / f64::from(denom);
            let approx = Rational::approximate(x, 32);
            TestResult::from_bool(approx == Ok(Rational::new(numer, denom)))
        }
        quickcheck(prop as fn(i16, u8) -> TestResult);
    }

    #[test]
    fn prop_converges() {
        fn prop(x: f64) -> TestResult {
            if !x.is_finite() || x.abs() > 1e15 {
                return TestResult::discard();
            }
            let approx = Rational::approximate(x, DEFAULT_MAX_ITERATIONS).unwrap();
            let error = (approx.to_f64().unwrap() - x).abs();
            TestResult::from_bool(error <= 1e-9 * x.abs().max(1.0))
        }
        quickcheck(prop as fn(f64) -> TestResult);
    }

    #[test]
    fn prop_result_is_canonical() {
        fn prop(x: f64) -> TestResult {
            match Rational::approximate(x, 16) {
                Ok(r) => TestResult::from_bool(r.is_reduced() && r.denom().is_positive()),
                Err(_) => TestResult::from_bool(!x.is_finite()),
            }
        }
        quickcheck(prop as fn(f64) -> TestResult);
    }
}

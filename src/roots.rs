// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integer and rational powers and roots.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use tracing::{debug, trace};

use crate::error::RationalError;
use crate::rational::Rational;

/// The integer nth root of a value together with whether it is exact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerRoot {
    /// The exact root, or the closer of the two integers bracketing it.
    pub root: BigInt,
    pub exact: bool,
}

/// Finds the integer nth root of `value` by bisection.
///
/// The upper bound is doubled until `upper^n >= value`, then the bracket is
/// halved until it hits the root exactly or closes on two adjacent integers,
/// in which case the closer one is returned (the lower one on a tie).
///
/// ```
/// use bigratio::roots::integer_nth_root;
/// use num_bigint::BigInt;
///
/// let cube = integer_nth_root(&BigInt::from(27), 3).unwrap();
/// assert_eq!((cube.root, cube.exact), (BigInt::from(3), true));
///
/// let near = integer_nth_root(&BigInt::from(10), 2).unwrap();
/// assert_eq!((near.root, near.exact), (BigInt::from(3), false));
/// ```
pub fn integer_nth_root(value: &BigInt, n: u32) -> Result<IntegerRoot, RationalError> {
    if n == 0 {
        return Err(RationalError::DivideByZero);
    }
    if value.is_negative() {
        if n.is_even() {
            return Err(RationalError::Domain { reason: "even root of a negative value" });
        }
        let positive = integer_nth_root(&-value, n)?;
        return Ok(IntegerRoot {
            root: -positive.root,
            exact: positive.exact,
        });
    }
    if value.is_zero() || value.is_one() || n == 1 {
        return Ok(IntegerRoot {
            root: value.clone(),
            exact: true,
        });
    }

    let exact = |root: BigInt| -> Result<IntegerRoot, RationalError> {
        Ok(IntegerRoot {
            root: root,
            exact: true,
        })
    };

    // lower^n < value holds throughout.
    let mut lower = BigInt::one();
    let mut upper = BigInt::from(2);
    loop {
        match upper.pow(n).cmp(value) {
            Ordering::Less => {
                lower = upper.clone();
                upper = &upper << 1usize;
            }
            Ordering::Equal => return exact(upper),
            Ordering::Greater => break,
        }
    }

    while &upper - &lower > BigInt::one() {
        let mid: BigInt = (&lower + &upper) >> 1usize;
        match mid.pow(n).cmp(value) {
            Ordering::Less => lower = mid,
            Ordering::Equal => return exact(mid),
            Ordering::Greater => upper = mid,
        }
    }

    let below = value - lower.pow(n);
    let above = upper.pow(n) - value;
    Ok(IntegerRoot {
        root: if above < below { upper } else { lower },
        exact: false,
    })
}

impl Rational {
    /// Raises the `Rational` to an integer power.
    ///
    /// Negative exponents raise the reciprocal, so zero to a negative power
    /// fails with [`RationalError::DivideByZero`]. `i32::MIN` cannot be
    /// negated and fails with [`RationalError::Overflow`].
    pub fn pow(&self, exponent: i32) -> Result<Rational, RationalError> {
        match exponent.cmp(&0) {
            Ordering::Equal => Ok(Rational::one()),
            Ordering::Greater => Ok(self.pow_u32(exponent as u32)),
            Ordering::Less => {
                let positive = exponent.checked_neg()
                    .ok_or(RationalError::Overflow { reason: "exponent cannot be negated" })?;
                Ok(self.try_recip()?.pow_u32(positive as u32))
            }
        }
    }

    /// Approximates the `n`th root of the value.
    ///
    /// Perfect powers are returned exactly. Otherwise the integer roots of
    /// the numerator and denominator seed Newton's method on `x^n - self`,
    /// which runs until a correction is smaller than `max_error`. Every
    /// iterate is rounded up onto a binary grid finer than `max_error / n`, so
    /// the size of the result depends on `max_error` and not on the number
    /// of steps taken. The result never undershoots the true root.
    ///
    /// ```
    /// use bigratio::Rational;
    /// use num_traits::Signed;
    ///
    /// let eps = Rational::new(1, 1_000_000);
    /// assert_eq!(Rational::new(8, 27).nth_root(3, &eps).unwrap(), Rational::new(2, 3));
    ///
    /// let sqrt2 = Rational::from_integer(2).nth_root(2, &eps).unwrap();
    /// assert!((sqrt2.pow(2).unwrap() - 2i32).abs() < Rational::new(1, 100_000));
    /// ```
    pub fn nth_root(&self, n: i32, max_error: &Rational) -> Result<Rational, RationalError> {
        if n == 0 {
            return Err(RationalError::DivideByZero);
        }
        if n < 0 {
            let positive = n.checked_neg()
                .ok_or(RationalError::Overflow { reason: "root degree cannot be negated" })?;
            return self.try_recip()?.nth_root(positive, max_error);
        }
        if !max_error.is_positive() {
            return Err(RationalError::ArgumentOutOfRange {
                name: "max_error",
                reason: "must be greater than zero",
            });
        }
        if self.is_negative() {
            if n % 2 == 0 {
                return Err(RationalError::Domain { reason: "even root of a negative value" });
            }
            return Ok(-self.abs().nth_root(n, max_error)?);
        }
        if self.is_zero() || self.is_one() || n == 1 {
            return Ok(self.clone());
        }

        let degree = n as u32;
        let numer_root = integer_nth_root(self.numer(), degree)?;
        let denom_root = integer_nth_root(self.denom(), degree)?;
        let seed = Rational::new(numer_root.root, denom_root.root);
        if numer_root.exact && denom_root.exact {
            debug!(degree, "perfect power, root is exact");
            return Ok(seed);
        }
        Ok(self.newton_root(seed, degree, max_error))
    }

    /// Raises the value to a rational power `p/q` as the `q`th root raised to
    /// the `p`th power.
    pub fn pow_ratio(&self, exponent: &Rational, max_error: &Rational)
                     -> Result<Rational, RationalError> {
        let degree = exponent.denom()
            .to_i32()
            .ok_or(RationalError::Overflow { reason: "root degree does not fit in i32" })?;
        let power = exponent.numer()
            .to_i32()
            .ok_or(RationalError::Overflow { reason: "exponent does not fit in i32" })?;
        self.nth_root(degree, max_error)?.pow(power)
    }

    // x' = x + (self / x^(n-1) - x) / n
    //
    // x^n - self is convex for x > 0, so every step from a positive x lands
    // on or above the root and rounding up keeps it there. From then on the
    // iterates decrease by at least max_error - 1/scale per step.
    fn newton_root(&self, seed: Rational, degree: u32, max_error: &Rational) -> Rational {
        let n = Rational::from_integer(degree);
        let grid_bits = (&n / max_error).ceil().to_integer().bits() + 2;
        let scale = BigInt::one() << grid_bits;
        let mut x = seed;
        let mut iterations = 0usize;
        loop {
            let correction = (self / x.pow_u32(degree - 1) - &x) / &n;
            x = ceil_to_grid(&(x + &correction), &scale);
            iterations += 1;
            if correction.abs() < *max_error {
                trace!(degree, iterations, grid_bits, "newton refinement converged");
                return x;
            }
        }
    }
}

/// The smallest multiple of `1/scale` that is not below `x`.
fn ceil_to_grid(x: &Rational, scale: &BigInt) -> Rational {
    let scaled = (x * scale.clone()).ceil();
    Rational::new(scaled.to_integer(), scale.clone())
}

// Unsigned exponents cannot fail. Not imported here so that `.pow` on a
// `Rational` resolves to the inherent, signed version.
impl num_traits::Pow<u32> for Rational {
    type Output = Rational;

    #[inline]
    fn pow(self, exponent: u32) -> Rational {
        self.pow_u32(exponent)
    }
}

impl<'a> num_traits::Pow<u32> for &'a Rational {
    type Output = Rational;

    #[inline]
    fn pow(self, exponent: u32) -> Rational {
        self.pow_u32(exponent)
    }
}

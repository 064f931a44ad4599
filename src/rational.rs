// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `Rational` value type, its canonical form and its operators.

use std::borrow::Cow;
use std::cmp::{self, Ordering};
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
               SubAssign};

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub, Num, One, Signed,
                 ToPrimitive, Zero};

use crate::error::{ParseRationalError, RationalError};

/// An exact fraction of two arbitrary-precision integers.
///
/// Every value obtained through the public API is canonical: the denominator
/// is strictly positive and shares no factor with the numerator. The only
/// exception is [`Rational::mediant`], which deliberately keeps its sum
/// unreduced; comparison, hashing and formatting treat it by value all the
/// same. The structural predicates (`is_integer`, `is_proper`,
/// `is_unit_fraction`, `is_mixed`) and the accessors read the stored pair, so
/// call [`Rational::reduced`] on a mediant first.
#[derive(Clone, Debug)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Creates a new canonical `Rational`.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero. Use [`Rational::try_new`] to get an error
    /// instead.
    #[inline]
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(numer: N, denom: D) -> Rational {
        match Rational::try_new(numer, denom) {
            Ok(value) => value,
            Err(_) => panic!("denominator == 0"),
        }
    }

    /// Creates a new canonical `Rational`, failing with
    /// [`RationalError::DivideByZero`] if `denom` is zero.
    pub fn try_new<N: Into<BigInt>, D: Into<BigInt>>(numer: N,
                                                       denom: D)
                                                       -> Result<Rational, RationalError> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(RationalError::DivideByZero);
        }
        Ok(Rational::reduce_from(numer.into(), denom))
    }

    /// Creates a `Rational` representing the integer `t`.
    #[inline]
    pub fn from_integer<T: Into<BigInt>>(t: T) -> Rational {
        Rational::new_raw(t.into(), BigInt::one())
    }

    /// Creates a `Rational` from a mixed number `whole numer/denom`.
    ///
    /// The sign comes from `whole` and the fraction is added away from zero,
    /// so `from_mixed(-1, 1, 2)` is `-3/2`. With a zero `whole` the fraction
    /// keeps its own sign.
    pub fn from_mixed<W, N, D>(whole: W, numer: N, denom: D) -> Result<Rational, RationalError>
        where W: Into<BigInt>,
              N: Into<BigInt>,
              D: Into<BigInt>
    {
        let whole = Rational::from_integer(whole);
        let fraction = Rational::try_new(numer, denom)?;
        Ok(match whole.numer.sign() {
            Sign::NoSign => fraction,
            Sign::Plus => whole + fraction.abs(),
            Sign::Minus => whole - fraction.abs(),
        })
    }

    /// Creates a `Rational` without checking for `denom == 0` or reducing.
    #[inline]
    pub(crate) fn new_raw(numer: BigInt, denom: BigInt) -> Rational {
        Rational {
            numer: numer,
            denom: denom,
        }
    }

    /// Restores a positive denominator without reducing. For pairs that are
    /// coprime by construction.
    pub(crate) fn new_signed(numer: BigInt, denom: BigInt) -> Rational {
        debug_assert!(!denom.is_zero());
        if denom.is_negative() {
            Rational::new_raw(-numer, -denom)
        } else {
            Rational::new_raw(numer, denom)
        }
    }

    /// Sign adjustment followed by GCD reduction; `denom` must be non-zero.
    fn reduce_from(numer: BigInt, denom: BigInt) -> Rational {
        debug_assert!(!denom.is_zero());
        let mut ret = Rational::new_signed(numer, denom);
        ret.reduce();
        ret
    }

    /// Puts self into lowest terms. The denominator is already positive.
    fn reduce(&mut self) {
        if self.numer.is_zero() {
            self.denom = BigInt::one();
            return;
        }
        let g = self.numer.gcd(&self.denom);
        if !g.is_one() {
            self.numer = &self.numer / &g;
            self.denom = &self.denom / &g;
        }
    }

    /// Returns a reduced copy of self.
    ///
    /// Only [`Rational::mediant`] can produce a value that needs this.
    pub fn reduced(&self) -> Rational {
        let mut ret = self.clone();
        ret.reduce();
        ret
    }

    /// Returns true if the numerator and denominator are coprime.
    pub fn is_reduced(&self) -> bool {
        self.numer.gcd(&self.denom).is_one()
    }

    /// Borrows self if it is already in lowest terms, otherwise reduces a copy.
    ///
    /// Integers skip the GCD; any other value pays for one.
    pub(crate) fn canonical(&self) -> Cow<'_, Rational> {
        if self.denom.is_one() || self.is_reduced() {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(self.reduced())
        }
    }

    /// Gets an immutable reference to the numerator.
    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Gets an immutable reference to the denominator.
    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Consumes the value, returning `(numerator, denominator)`.
    #[inline]
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    /// Returns true if the rational number is an integer (denominator is 1).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Returns true if `|self| < 1`.
    #[inline]
    pub fn is_proper(&self) -> bool {
        self.numer.magnitude() < self.denom.magnitude()
    }

    /// Returns true if the numerator is exactly one.
    #[inline]
    pub fn is_unit_fraction(&self) -> bool {
        self.numer.is_one()
    }

    /// Returns true if the value has both a whole part and a fractional part.
    #[inline]
    pub fn is_mixed(&self) -> bool {
        !self.denom.is_one() && self.numer.magnitude() > self.denom.magnitude()
    }

    /// The sign of the value, carried by the numerator.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.numer.sign()
    }

    /// Returns the reciprocal.
    ///
    /// # Panics
    ///
    /// Panics if the `Rational` is zero.
    #[inline]
    pub fn recip(&self) -> Rational {
        match self.try_recip() {
            Ok(value) => value,
            Err(_) => panic!("numerator == 0"),
        }
    }

    /// Returns the reciprocal, or [`RationalError::DivideByZero`] for zero.
    pub fn try_recip(&self) -> Result<Rational, RationalError> {
        match self.numer.sign() {
            Sign::NoSign => Err(RationalError::DivideByZero),
            Sign::Plus => Ok(Rational::new_raw(self.denom.clone(), self.numer.clone())),
            Sign::Minus => Ok(Rational::new_raw(-&self.denom, -&self.numer)),
        }
    }

    /// Divides, failing with [`RationalError::DivideByZero`] instead of
    /// panicking when `rhs` is zero.
    pub fn try_div(&self, rhs: &Rational) -> Result<Rational, RationalError> {
        if rhs.is_zero() {
            return Err(RationalError::DivideByZero);
        }
        Ok(self / rhs)
    }

    /// Remainder, failing with [`RationalError::DivideByZero`] instead of
    /// panicking when `rhs` is zero.
    pub fn try_rem(&self, rhs: &Rational) -> Result<Rational, RationalError> {
        if rhs.is_zero() {
            return Err(RationalError::DivideByZero);
        }
        Ok(self % rhs)
    }

    /// Converts to an integer, rounding towards zero.
    #[inline]
    pub fn to_integer(&self) -> BigInt {
        &self.numer / &self.denom
    }

    /// Rounds towards minus infinity.
    #[inline]
    pub fn floor(&self) -> Rational {
        Rational::from_integer(self.numer.div_floor(&self.denom))
    }

    /// Rounds towards plus infinity.
    #[inline]
    pub fn ceil(&self) -> Rational {
        Rational::from_integer(-(-&self.numer).div_floor(&self.denom))
    }

    /// Rounds to the nearest integer. Rounds half-way cases away from zero.
    pub fn round(&self) -> Rational {
        let (quotient, remainder) = self.numer.div_rem(&self.denom);
        // |r| / d >= 1/2  <=>  2|r| >= d
        if (remainder.abs() << 1usize) >= self.denom {
            Rational::from_integer(quotient + self.numer.signum())
        } else {
            Rational::from_integer(quotient)
        }
    }

    /// Rounds towards zero.
    #[inline]
    pub fn trunc(&self) -> Rational {
        Rational::from_integer(self.to_integer())
    }

    /// Returns the fractional part of a number, with division rounded towards zero.
    ///
    /// Satisfies `self == self.trunc() + self.fract()`.
    #[inline]
    pub fn fract(&self) -> Rational {
        Rational::reduce_from(&self.numer % &self.denom, self.denom.clone())
    }

    /// Greatest common divisor of two rationals: the largest rational `g`
    /// such that both `a / g` and `b / g` are integers.
    ///
    /// If either operand is zero the absolute value of the other is returned.
    pub fn gcd(a: &Rational, b: &Rational) -> Rational {
        if a.is_zero() {
            return b.abs();
        }
        if b.is_zero() {
            return a.abs();
        }
        Rational::reduce_from(a.numer.gcd(&b.numer), a.denom.lcm(&b.denom))
    }

    /// Least common multiple of two rationals. Zero if either operand is zero.
    pub fn lcm(a: &Rational, b: &Rational) -> Rational {
        if a.is_zero() || b.is_zero() {
            return Rational::zero();
        }
        Rational::reduce_from(a.numer.lcm(&b.numer), a.denom.gcd(&b.denom))
    }

    /// The mediant `(a.numer + b.numer) / (a.denom + b.denom)`.
    ///
    /// The result is left unreduced, as Farey and Stern-Brocot constructions
    /// expect.
    pub fn mediant(a: &Rational, b: &Rational) -> Rational {
        Rational::new_raw(&a.numer + &b.numer, &a.denom + &b.denom)
    }

    /// `self^exponent` for a non-negative exponent. Powers of coprime
    /// integers stay coprime, so no reduction is needed.
    pub(crate) fn pow_u32(&self, exponent: u32) -> Rational {
        Rational::new_raw(self.numer.pow(exponent), self.denom.pow(exponent))
    }
}

/// Converts `numer / denom` to the nearest `f64` without overflowing in the
/// intermediate conversions.
pub(crate) fn ratio_to_f64(numer: &BigInt, denom: &BigInt) -> f64 {
    if numer.is_zero() {
        return 0.0;
    }
    let negative = numer.is_negative() != denom.is_negative();
    let (n, d) = (numer.magnitude(), denom.magnitude());

    // Scale so the integer quotient lands in [2^62, 2^64); a sticky low bit
    // keeps the final rounding to 53 bits correct.
    let shift = 63 + d.bits() as i64 - n.bits() as i64;
    let (n, d): (BigUint, BigUint) = if shift >= 0 {
        (n << shift as usize, d.clone())
    } else {
        (n.clone(), d << (-shift) as usize)
    };
    let (quotient, remainder) = n.div_rem(&d);
    let mut bits = quotient.to_u64().unwrap_or(u64::MAX);
    if !remainder.is_zero() {
        bits |= 1;
    }
    let magnitude = scale_by_power_of_two(bits as f64, -shift);
    if negative { -magnitude } else { magnitude }
}

fn scale_by_power_of_two(mut x: f64, mut exponent: i64) -> f64 {
    while exponent > 1000 {
        x *= 2f64.powi(1000);
        exponent -= 1000;
    }
    while exponent < -1000 {
        x *= 2f64.powi(-1000);
        exponent += 1000;
    }
    x * 2f64.powi(exponent as i32)
}

macro_rules! from_integer_impl {
    ($($t:ty)*) => ($(
        impl From<$t> for Rational {
            #[inline]
            fn from(x: $t) -> Rational {
                Rational::from_integer(x)
            }
        }
    )*)
}

from_integer_impl!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize BigInt);

// From pair (through the reducing constructor)
impl TryFrom<(BigInt, BigInt)> for Rational {
    type Error = RationalError;

    fn try_from(pair: (BigInt, BigInt)) -> Result<Rational, RationalError> {
        Rational::try_new(pair.0, pair.1)
    }
}

impl From<Rational> for (BigInt, BigInt) {
    fn from(value: Rational) -> (BigInt, BigInt) {
        value.into_parts()
    }
}

// Comparisons

// Both denominators are positive, so after the sign shortcut a/b and c/d
// order the same way as a*d and c*b.
impl Ord for Rational {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        let (self_sign, other_sign) = (self.numer.sign(), other.numer.sign());
        if self_sign != other_sign {
            return self_sign.cmp(&other_sign);
        }

        // With equal denominators, the numerators can be directly compared
        if self.denom == other.denom {
            return self.numer.cmp(&other.numer);
        }

        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl PartialOrd for Rational {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Rational {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if self.denom == other.denom {
            return self.numer == other.numer;
        }
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rational {}

// Equal values must hash alike, so an unreduced mediant hashes its reduced
// form. Telling the two apart costs a GCD for every non-integer.
impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let canonical = self.canonical();
        canonical.numer.hash(state);
        canonical.denom.hash(state);
    }
}

macro_rules! forward_val_val_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp<Rational> for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, other: Rational) -> Rational {
                (&self).$method(&other)
            }
        }
    }
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a> $imp<Rational> for &'a Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, other: Rational) -> Rational {
                self.$method(&other)
            }
        }
    }
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a> $imp<&'a Rational> for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, other: &Rational) -> Rational {
                (&self).$method(other)
            }
        }
    }
}

// Integer operands are lifted to `x/1`.
macro_rules! forward_integer_binop {
    (impl $imp:ident, $method:ident) => {
        forward_integer_binop!(impl $imp, $method for
                               i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize BigInt);
    };
    (impl $imp:ident, $method:ident for $($t:ty)*) => ($(
        impl $imp<$t> for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, other: $t) -> Rational {
                (&self).$method(&Rational::from(other))
            }
        }

        impl<'a> $imp<$t> for &'a Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, other: $t) -> Rational {
                self.$method(&Rational::from(other))
            }
        }
    )*)
}

macro_rules! forward_assign_op {
    (impl $imp:ident, $method:ident, $op:ident) => {
        impl $imp<Rational> for Rational {
            #[inline]
            fn $method(&mut self, other: Rational) {
                *self = (&*self).$op(&other);
            }
        }

        impl<'a> $imp<&'a Rational> for Rational {
            #[inline]
            fn $method(&mut self, other: &Rational) {
                *self = (&*self).$op(other);
            }
        }
    }
}

macro_rules! forward_all_binop {
    (impl $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        forward_val_val_binop!(impl $imp, $method);
        forward_ref_val_binop!(impl $imp, $method);
        forward_val_ref_binop!(impl $imp, $method);
        forward_integer_binop!(impl $imp, $method);
        forward_assign_op!(impl $assign_imp, $assign_method, $method);
    };
}

// Arithmetic
forward_all_binop!(impl Mul, mul, MulAssign, mul_assign);
// a/b * c/d = (a*c)/(b*d)
impl<'a, 'b> Mul<&'b Rational> for &'a Rational {
    type Output = Rational;

    #[inline]
    fn mul(self, rhs: &Rational) -> Rational {
        Rational::reduce_from(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

forward_all_binop!(impl Div, div, DivAssign, div_assign);
// (a/b) / (c/d) = (a*d)/(b*c)
impl<'a, 'b> Div<&'b Rational> for &'a Rational {
    type Output = Rational;

    #[inline]
    fn div(self, rhs: &Rational) -> Rational {
        if rhs.is_zero() {
            panic!("attempt to divide by zero");
        }
        Rational::reduce_from(&self.numer * &rhs.denom, &self.denom * &rhs.numer)
    }
}

forward_all_binop!(impl Rem, rem, RemAssign, rem_assign);
// a/b % c/d = (a*d % b*c)/(b*d)
impl<'a, 'b> Rem<&'b Rational> for &'a Rational {
    type Output = Rational;

    #[inline]
    fn rem(self, rhs: &Rational) -> Rational {
        if rhs.is_zero() {
            panic!("attempt to calculate the remainder with a divisor of zero");
        }
        Rational::reduce_from((&self.numer * &rhs.denom) % (&self.denom * &rhs.numer),
                              &self.denom * &rhs.denom)
    }
}

// Abstracts the a/b `op` c/d = (a*d `op` b*c) / (b*d) pattern
macro_rules! arith_impl {
    (impl $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        forward_all_binop!(impl $imp, $method, $assign_imp, $assign_method);
        impl<'a, 'b> $imp<&'b Rational> for &'a Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: &Rational) -> Rational {
                if self.denom == rhs.denom {
                    return Rational::reduce_from((&self.numer).$method(&rhs.numer),
                                                 self.denom.clone());
                }
                Rational::reduce_from((&self.numer * &rhs.denom).$method(&self.denom * &rhs.numer),
                                      &self.denom * &rhs.denom)
            }
        }
    }
}

// a/b + c/d = (a*d + b*c)/(b*d)
arith_impl!(impl Add, add, AddAssign, add_assign);

// a/b - c/d = (a*d - b*c)/(b*d)
arith_impl!(impl Sub, sub, SubAssign, sub_assign);

impl Neg for Rational {
    type Output = Rational;

    #[inline]
    fn neg(self) -> Rational {
        Rational::new_raw(-self.numer, self.denom)
    }
}

impl<'a> Neg for &'a Rational {
    type Output = Rational;

    #[inline]
    fn neg(self) -> Rational {
        Rational::new_raw(-&self.numer, self.denom.clone())
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::one(), |acc, x| acc * x)
    }
}

// Constants
impl Zero for Rational {
    #[inline]
    fn zero() -> Rational {
        Rational::new_raw(BigInt::zero(), BigInt::one())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    #[inline]
    fn one() -> Rational {
        Rational::new_raw(BigInt::one(), BigInt::one())
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.numer == self.denom
    }
}

impl Num for Rational {
    type FromStrRadixErr = ParseRationalError;

    /// Parses `numer/denom`, `whole numer/denom` or `numer` where the numbers
    /// are in base `radix`.
    fn from_str_radix(s: &str, radix: u32) -> Result<Rational, ParseRationalError> {
        crate::parse::from_str_radix(s, radix)
    }
}

impl Signed for Rational {
    #[inline]
    fn abs(&self) -> Rational {
        Rational::new_raw(self.numer.abs(), self.denom.clone())
    }

    #[inline]
    fn abs_sub(&self, other: &Rational) -> Rational {
        if *self <= *other {
            Zero::zero()
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> Rational {
        Rational::from_integer(self.numer.signum())
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }
}

macro_rules! checked_impl {
    ($imp:ident, $method:ident, $op:ident) => {
        impl $imp for Rational {
            #[inline]
            fn $method(&self, v: &Rational) -> Option<Rational> {
                Some(self.$op(v))
            }
        }
    }
}

checked_impl!(CheckedAdd, checked_add, add);
checked_impl!(CheckedSub, checked_sub, sub);
checked_impl!(CheckedMul, checked_mul, mul);

impl CheckedDiv for Rational {
    #[inline]
    fn checked_div(&self, v: &Rational) -> Option<Rational> {
        self.try_div(v).ok()
    }
}

impl CheckedRem for Rational {
    #[inline]
    fn checked_rem(&self, v: &Rational) -> Option<Rational> {
        self.try_rem(v).ok()
    }
}

// Integer conversions truncate towards zero.
impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        self.to_integer().to_i64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_integer().to_i128()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_integer().to_u64()
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_integer().to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(ratio_to_f64(&self.numer, &self.denom))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: serde::Serializer
    {
        (&self.numer, &self.denom).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: serde::Deserializer<'de>
    {
        let (numer, denom): (BigInt, BigInt) = serde::Deserialize::deserialize(deserializer)?;
        Rational::try_new(numer, denom).map_err(serde::de::Error::custom)
    }
}

/// Returns the smaller of two values by the rational order.
#[inline]
pub fn min(a: Rational, b: Rational) -> Rational {
    cmp::min(a, b)
}

/// Returns the larger of two values by the rational order.
#[inline]
pub fn max(a: Rational, b: Rational) -> Rational {
    cmp::max(a, b)
}

// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A capability trait for totally ordered, signed numeric types, and the
//! generic algorithms written against it.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;

use crate::error::RationalError;
use crate::rational::Rational;

/// A signed number with a total order and identity elements.
///
/// Implemented for `Rational`, `BigInt` and the primitive signed integers so
/// that [`sum`], [`product`] and [`clamp`] work uniformly across them.
pub trait OrderedField: Clone + Ord + Signed {
    /// Returns true if the value has no fractional part.
    fn is_integer(&self) -> bool;

    fn is_even_integer(&self) -> bool;

    fn is_odd_integer(&self) -> bool;

    /// Returns true if the value is in its unique canonical representation.
    #[inline]
    fn is_canonical(&self) -> bool {
        true
    }

    /// Returns the magnitude of `self` with the sign of `sign`. A zero `sign`
    /// counts as non-negative.
    fn copy_sign(&self, sign: &Self) -> Self {
        if sign.is_negative() {
            -self.abs()
        } else {
            self.abs()
        }
    }

    /// Returns whichever argument has the larger magnitude, preferring the
    /// non-negative one on a tie.
    fn max_magnitude(a: Self, b: Self) -> Self {
        match a.abs().cmp(&b.abs()) {
            std::cmp::Ordering::Greater => a,
            std::cmp::Ordering::Less => b,
            std::cmp::Ordering::Equal => std::cmp::max(a, b),
        }
    }

    /// Returns whichever argument has the smaller magnitude, preferring the
    /// negative one on a tie.
    fn min_magnitude(a: Self, b: Self) -> Self {
        match a.abs().cmp(&b.abs()) {
            std::cmp::Ordering::Less => a,
            std::cmp::Ordering::Greater => b,
            std::cmp::Ordering::Equal => std::cmp::min(a, b),
        }
    }
}

impl OrderedField for Rational {
    #[inline]
    fn is_integer(&self) -> bool {
        Rational::is_integer(self)
    }

    fn is_even_integer(&self) -> bool {
        Rational::is_integer(self) && self.numer().is_even()
    }

    fn is_odd_integer(&self) -> bool {
        Rational::is_integer(self) && self.numer().is_odd()
    }

    #[inline]
    fn is_canonical(&self) -> bool {
        self.is_reduced()
    }
}

macro_rules! integer_field_impl {
    ($($t:ty)*) => ($(
        impl OrderedField for $t {
            #[inline]
            fn is_integer(&self) -> bool {
                true
            }

            #[inline]
            fn is_even_integer(&self) -> bool {
                Integer::is_even(self)
            }

            #[inline]
            fn is_odd_integer(&self) -> bool {
                Integer::is_odd(self)
            }
        }
    )*)
}

integer_field_impl!(i8 i16 i32 i64 i128 isize BigInt);

/// Adds up every item, starting from zero.
pub fn sum<T, I>(values: I) -> T
    where T: OrderedField,
          I: IntoIterator<Item = T>
{
    values.into_iter().fold(T::zero(), |acc, x| acc + x)
}

/// Multiplies every item, starting from one.
pub fn product<T, I>(values: I) -> T
    where T: OrderedField,
          I: IntoIterator<Item = T>
{
    values.into_iter().fold(T::one(), |acc, x| acc * x)
}

/// Restricts `value` to the closed interval `[min, max]`.
///
/// Fails with [`RationalError::ArgumentOutOfRange`] when `min > max`.
///
/// ```
/// use bigratio::{clamp, Rational};
///
/// let half = Rational::new(1, 2);
/// let r = clamp(Rational::new(3, 2), Rational::from_integer(0), half.clone());
/// assert_eq!(r, Ok(half));
/// assert!(clamp(1, 2, 1).is_err());
/// ```
pub fn clamp<T: OrderedField>(value: T, min: T, max: T) -> Result<T, RationalError> {
    if min > max {
        return Err(RationalError::ArgumentOutOfRange {
            name: "min",
            reason: "lower bound is greater than the upper bound",
        });
    }
    Ok(if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    })
}

#[cfg(test)]
mod test {
    use super::{clamp, product, sum, OrderedField};
    use crate::error::RationalError;
    use crate::Rational;

    use num_bigint::BigInt;

    fn ratio(n: i64, d: i64) -> Rational {
        Rational::new(n, d)
    }

    #[test]
    fn test_integer_predicates() {
        assert!(OrderedField::is_integer(&ratio(4, 2)));
        assert!(!OrderedField::is_integer(&ratio(1, 2)));
        assert!(ratio(-4, 1).is_even_integer());
        assert!(!ratio(-3, 1).is_even_integer());
        assert!(ratio(-3, 1).is_odd_integer());
        assert!(!ratio(3, 2).is_odd_integer());
        assert!(!ratio(3, 2).is_even_integer());
        assert!(ratio(0, 1).is_even_integer());

        assert!(OrderedField::is_integer(&7i32));
        assert!(6i64.is_even_integer());
        assert!(BigInt::from(-9).is_odd_integer());
    }

    #[test]
    fn test_is_canonical() {
        assert!(ratio(2, 4).is_canonical());
        assert!(!Rational::mediant(&ratio(1, 2), &ratio(1, 2)).is_canonical());
        assert!(5i8.is_canonical());
    }

    #[test]
    fn test_copy_sign() {
        assert_eq!(ratio(3, 4).copy_sign(&ratio(-1, 9)), ratio(-3, 4));
        assert_eq!(ratio(-3, 4).copy_sign(&ratio(1, 9)), ratio(3, 4));
        assert_eq!(ratio(-3, 4).copy_sign(&ratio(0, 1)), ratio(3, 4));
        assert_eq!(5i32.copy_sign(&-2), -5);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Rational::max_magnitude(ratio(-3, 2), ratio(1, 2)), ratio(-3, 2));
        assert_eq!(Rational::max_magnitude(ratio(-1, 2), ratio(1, 2)), ratio(1, 2));
        assert_eq!(Rational::max_magnitude(ratio(1, 2), ratio(-1, 2)), ratio(1, 2));
        assert_eq!(Rational::min_magnitude(ratio(-3, 2), ratio(1, 2)), ratio(1, 2));
        assert_eq!(Rational::min_magnitude(ratio(1, 2), ratio(-1, 2)), ratio(-1, 2));
        assert_eq!(i32::max_magnitude(-4, 4), 4);
        assert_eq!(i32::min_magnitude(4, -4), -4);
    }

    #[test]
    fn test_sum_product() {
        let xs = vec![ratio(1, 2), ratio(1, 3), ratio(1, 6)];
        assert_eq!(sum(xs.clone()), ratio(1, 1));
        assert_eq!(product(xs), ratio(1, 36));
        assert_eq!(sum(Vec::<Rational>::new()), ratio(0, 1));
        assert_eq!(product(Vec::<Rational>::new()), ratio(1, 1));
        assert_eq!(sum(vec![1i64, 2, 3]), 6);
        assert_eq!(product(vec![BigInt::from(2), BigInt::from(5)]), BigInt::from(10));
    }

    #[test]
    fn test_clamp() {
        fn test(value: Rational, expected: Rational) {
            assert_eq!(clamp(value, ratio(-1, 2), ratio(3, 2)), Ok(expected));
        }

        test(ratio(0, 1), ratio(0, 1));
        test(ratio(-1, 1), ratio(-1, 2));
        test(ratio(2, 1), ratio(3, 2));
        test(ratio(3, 2), ratio(3, 2));
        assert_eq!(clamp(ratio(1, 1), ratio(1, 1), ratio(1, 1)), Ok(ratio(1, 1)));

        match clamp(ratio(0, 1), ratio(1, 1), ratio(0, 1)) {
            Err(RationalError::ArgumentOutOfRange { name, .. }) => assert_eq!(name, "min"),
            other => panic!("unexpected {:?}", other),
        }
    }
}

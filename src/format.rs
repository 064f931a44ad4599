// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Mixed-number decomposition and string rendering.
//!
//! Whole numbers render as a bare integer, proper fractions as
//! `numer/denom` and mixed numbers as `whole numer/denom`:
//!
//! ```
//! use bigratio::Rational;
//! use bigratio::format::{FormatOptions, FractionSlash, Notation};
//!
//! let r = Rational::new(-7, 2);
//! assert_eq!(r.to_string(), "-3 1/2");
//! assert_eq!(format!("{:#}", r), "-3 1\u{2044}2");
//!
//! let improper = FormatOptions {
//!     slash: FractionSlash::Ascii,
//!     notation: Notation::Improper,
//! };
//! assert_eq!(r.format(improper).to_string(), "-7/2");
//! ```

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;

use crate::rational::Rational;

/// The character written between numerator and denominator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FractionSlash {
    /// `/`
    Ascii,
    /// U+2044 FRACTION SLASH.
    Unicode,
}

impl FractionSlash {
    pub fn as_char(self) -> char {
        match self {
            FractionSlash::Ascii => '/',
            FractionSlash::Unicode => '\u{2044}',
        }
    }
}

/// How values larger than one in magnitude are written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `whole numer/denom`
    Mixed,
    /// `numer/denom`
    Improper,
}

/// Rendering configuration for [`Rational::format`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FormatOptions {
    pub slash: FractionSlash,
    pub notation: Notation,
}

impl Default for FormatOptions {
    fn default() -> FormatOptions {
        FormatOptions {
            slash: FractionSlash::Ascii,
            notation: Notation::Mixed,
        }
    }
}

/// The parts of a mixed number: `whole` carries the sign and
/// `numer/denom` is a positive proper fraction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MixedParts {
    pub whole: BigInt,
    pub numer: BigInt,
    pub denom: BigInt,
}

impl Rational {
    /// Splits a mixed number into its whole part and proper fraction.
    ///
    /// Returns `None` unless, in lowest terms, the denominator is greater than
    /// one and the magnitude of the numerator exceeds it.
    ///
    /// ```
    /// use bigratio::Rational;
    /// use num_bigint::BigInt;
    ///
    /// let parts = Rational::new(7, 2).mixed_parts().unwrap();
    /// assert_eq!(parts.whole, BigInt::from(3));
    /// assert_eq!(parts.numer, BigInt::from(1));
    /// assert!(Rational::new(2, 2).mixed_parts().is_none());
    /// ```
    pub fn mixed_parts(&self) -> Option<MixedParts> {
        split_mixed(&self.canonical())
    }

    /// Returns a `Display` adapter rendering the value with `options`.
    pub fn format(&self, options: FormatOptions) -> Formatted {
        Formatted {
            value: self,
            options: options,
        }
    }
}

// `value` must be in lowest terms.
fn split_mixed(value: &Rational) -> Option<MixedParts> {
    if !value.is_mixed() {
        return None;
    }
    let (whole, remainder) = value.numer().div_rem(value.denom());
    Some(MixedParts {
        whole: whole,
        numer: remainder.abs(),
        denom: value.denom().clone(),
    })
}

/// A `Rational` paired with its rendering options.
#[derive(Copy, Clone, Debug)]
pub struct Formatted<'a> {
    value: &'a Rational,
    options: FormatOptions,
}

impl<'a> fmt::Display for Formatted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = self.value.canonical();
        let slash = self.options.slash.as_char();
        if value.is_integer() {
            return write!(f, "{}", value.numer());
        }
        if let (Notation::Mixed, Some(parts)) = (self.options.notation, split_mixed(&value)) {
            return write!(f, "{} {}{}{}", parts.whole, parts.numer, slash, parts.denom);
        }
        write!(f, "{}{}{}", value.numer(), slash, value.denom())
    }
}

/// Renders in mixed notation with an ASCII slash; the alternate flag (`{:#}`)
/// switches to the Unicode fraction slash.
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let slash = if f.alternate() {
            FractionSlash::Unicode
        } else {
            FractionSlash::Ascii
        };
        let options = FormatOptions {
            slash: slash,
            notation: Notation::Mixed,
        };
        fmt::Display::fmt(&self.format(options), f)
    }
}

#[cfg(test)]
mod test {
    use super::{FormatOptions, FractionSlash, MixedParts, Notation};
    use crate::Rational;

    use num_bigint::BigInt;

    fn ratio(n: i64, d: i64) -> Rational {
        Rational::new(n, d)
    }

    #[test]
    fn test_mixed_parts() {
        fn test(r: Rational, parts: Option<(i64, i64, i64)>) {
            let expected = parts.map(|(whole, numer, denom)| {
                MixedParts {
                    whole: BigInt::from(whole),
                    numer: BigInt::from(numer),
                    denom: BigInt::from(denom),
                }
            });
            assert_eq!(r.mixed_parts(), expected);
        }

        test(ratio(7, 2), Some((3, 1, 2)));
        test(ratio(-7, 2), Some((-3, 1, 2)));
        test(ratio(22, 7), Some((3, 1, 7)));
        test(ratio(2, 2), None);
        test(ratio(1, 2), None);
        test(ratio(-5, 1), None);
        test(ratio(0, 1), None);
    }

    #[test]
    fn test_mixed_parts_round_trip() {
        for r in &[ratio(7, 2), ratio(-7, 2), ratio(100, 9), ratio(-31, 4)] {
            let parts = r.mixed_parts().unwrap();
            assert_eq!(Rational::from_mixed(parts.whole, parts.numer, parts.denom).as_ref(),
                       Ok(r));
        }
    }

    #[test]
    fn test_show() {
        assert_eq!(format!("{}", ratio(2, 1)), "2");
        assert_eq!(format!("{}", ratio(1, 2)), "1/2");
        assert_eq!(format!("{}", ratio(0, 1)), "0");
        assert_eq!(format!("{}", ratio(-2, 1)), "-2");
        assert_eq!(format!("{}", ratio(-1, 2)), "-1/2");
        assert_eq!(format!("{}", ratio(7, 2)), "3 1/2");
        assert_eq!(format!("{}", ratio(-7, 2)), "-3 1/2");
        assert_eq!(format!("{:#}", ratio(3, 4)), "3\u{2044}4");
        assert_eq!(format!("{:#}", ratio(9, 4)), "2 1\u{2044}4");
    }

    #[test]
    fn test_unreduced_mediant() {
        let whole = Rational::mediant(&ratio(3, 1), &ratio(1, 1));
        assert_eq!(whole.to_string(), "2");
        assert_eq!(whole.mixed_parts(), None);

        let six_halves = Rational::mediant(&ratio(5, 1), &ratio(1, 1));
        assert_eq!(six_halves.to_string(), "3");

        // 6/4 stored, 3/2 rendered
        let m = Rational::mediant(&ratio(5, 3), &ratio(1, 1));
        assert_eq!(m.to_string(), "1 1/2");
        assert_eq!(m.mixed_parts(),
                   Some(MixedParts {
                       whole: BigInt::from(1),
                       numer: BigInt::from(1),
                       denom: BigInt::from(2),
                   }));
        let improper = FormatOptions {
            slash: FractionSlash::Ascii,
            notation: Notation::Improper,
        };
        assert_eq!(m.format(improper).to_string(), "3/2");
    }

    #[test]
    fn test_format_options() {
        let improper = FormatOptions {
            slash: FractionSlash::Unicode,
            notation: Notation::Improper,
        };
        assert_eq!(ratio(9, 4).format(improper).to_string(), "9\u{2044}4");
        assert_eq!(ratio(-9, 1).format(improper).to_string(), "-9");
        assert_eq!(ratio(9, 4).format(FormatOptions::default()).to_string(), "2 1/4");
        assert_eq!(FractionSlash::Ascii.as_char(), '/');
    }
}

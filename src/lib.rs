// Copyright 2014-2016 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exact rational arithmetic over arbitrary-precision integers.
//!
//! [`Rational`] is always kept in lowest terms with a positive denominator,
//! so equal values have equal representations. Besides the field operations
//! it offers rational approximation of floats, integer powers, Newton's-method
//! roots, mixed-number formatting and parsing, and a length-prefixed binary
//! codec.
//!
//! ## Example
//!
//! This example approximates a square root to within a chosen error and
//! prints it as a mixed number:
//!
//! ```
//! use bigratio::Rational;
//!
//! let two = Rational::from_integer(2);
//! let eps = Rational::new(1, 1_000_000);
//! let root = two.nth_root(2, &eps).unwrap();
//!
//! let square = root.pow(2).unwrap();
//! assert!(square >= two && &square - &two <= eps * 3);
//! assert!(root.to_string().starts_with("1 "));
//!
//! assert_eq!("-1 2/3".parse::<Rational>().unwrap(), Rational::new(-5, 3));
//! assert_eq!(Rational::approximate(0.75, 16).unwrap(), Rational::new(3, 4));
//! ```
#![doc(html_root_url = "https://docs.rs/bigratio/0.1")]

mod approx;
pub mod codec;
mod error;
pub mod format;
mod parse;
mod rational;
pub mod roots;
pub mod traits;

#[cfg(test)]
mod quickcheck_impls;

pub use crate::approx::{NumericInput, DEFAULT_MAX_ITERATIONS};
pub use crate::codec::{ByteOrder, Encoding, Signedness};
pub use crate::error::{CodecError, Field, ParseRationalError, RationalError};
pub use crate::format::{FormatOptions, FractionSlash, MixedParts, Notation};
pub use crate::rational::{max, min, Rational};
pub use crate::roots::{integer_nth_root, IntegerRoot};
pub use crate::traits::{clamp, product, sum, OrderedField};

pub use num_bigint::{BigInt, Sign};

// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types shared by every fallible rational operation.

use std::fmt;

use thiserror::Error;

/// The ways a rational operation can fail.
///
/// Every variant is raised at the point of violation; no operation clamps,
/// retries or substitutes a default value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// Zero denominator, division by zero, reciprocal of zero or a zeroth root.
    #[error("attempt to divide by zero")]
    DivideByZero,

    /// The operation has no rational result for this input.
    #[error("argument outside the domain of the operation: {reason}")]
    Domain { reason: &'static str },

    /// An exponent or root degree cannot be represented after negation or
    /// narrowing.
    #[error("arithmetic overflow: {reason}")]
    Overflow { reason: &'static str },

    /// A parameter violates the closed interval the operation requires.
    #[error("argument `{name}` out of range: {reason}")]
    ArgumentOutOfRange {
        name: &'static str,
        reason: &'static str,
    },

    /// A NaN or infinite float was handed to the approximation.
    #[error("cannot approximate a non-finite value")]
    NotFinite,

    #[error("binary encoding failed: {0}")]
    Codec(#[from] CodecError),
}

/// Which half of an encoded rational a codec failure refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Numerator,
    Denominator,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Field::Numerator => f.write_str("numerator"),
            Field::Denominator => f.write_str("denominator"),
        }
    }
}

/// Failure to read or write the binary form of a rational.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("{field} length prefix needs 4 bytes, {available} available")]
    TruncatedPrefix { field: Field, available: usize },

    #[error("{field} payload needs {expected} bytes, {available} available")]
    TruncatedPayload {
        field: Field,
        expected: usize,
        available: usize,
    },

    #[error("{count} trailing bytes after a complete value")]
    TrailingBytes { count: usize },

    #[error("{field} payload of {len} bytes does not fit a 4-byte length prefix")]
    PayloadTooLong { field: Field, len: usize },

    #[error("negative {field} cannot be written with an unsigned encoding")]
    NegativeUnsigned { field: Field },
}

/// Error returned when text does not follow the rational grammar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("{}", .kind.description())]
pub struct ParseRationalError {
    kind: RationalErrorKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum RationalErrorKind {
    Invalid,
    ZeroDenominator,
}

impl ParseRationalError {
    pub(crate) fn invalid() -> ParseRationalError {
        ParseRationalError { kind: RationalErrorKind::Invalid }
    }

    pub(crate) fn zero_denominator() -> ParseRationalError {
        ParseRationalError { kind: RationalErrorKind::ZeroDenominator }
    }

    /// Returns true if the text was well formed but named a zero denominator.
    pub fn is_zero_denominator(&self) -> bool {
        self.kind == RationalErrorKind::ZeroDenominator
    }
}

impl RationalErrorKind {
    fn description(&self) -> &'static str {
        match *self {
            RationalErrorKind::Invalid => "invalid rational literal",
            RationalErrorKind::ZeroDenominator => "zero value denominator",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(RationalError::DivideByZero.to_string(), "attempt to divide by zero");
        let e = RationalError::from(CodecError::TruncatedPrefix {
            field: Field::Denominator,
            available: 2,
        });
        assert_eq!(e.to_string(),
                   "binary encoding failed: denominator length prefix needs 4 bytes, \
                    2 available");
        assert_eq!(ParseRationalError::zero_denominator().to_string(), "zero value denominator");
        assert!(!ParseRationalError::invalid().is_zero_denominator());
    }
}

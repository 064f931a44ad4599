// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Length-prefixed binary form of a `Rational`.
//!
//! A value is written as
//!
//! ```text
//! [u32 BE numerator length][numerator bytes][u32 BE denominator length][denominator bytes]
//! ```
//!
//! The length prefixes are always big-endian. The integer payloads use the
//! byte order and signedness chosen by the caller through [`Encoding`], so both
//! sides of a channel must agree on it.

use num_bigint::{BigInt, Sign};

use crate::error::{CodecError, Field, RationalError};
use crate::rational::Rational;

const PREFIX_LEN: usize = 4;

/// Byte order of the integer payloads.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

impl Default for ByteOrder {
    fn default() -> ByteOrder {
        ByteOrder::BigEndian
    }
}

/// Whether payloads are two's complement or plain magnitudes.
///
/// An unsigned encoding cannot represent a negative numerator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
}

impl Default for Signedness {
    fn default() -> Signedness {
        Signedness::Signed
    }
}

/// Payload format for [`Rational::to_bytes`] and [`Rational::from_bytes`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Encoding {
    pub signedness: Signedness,
    pub order: ByteOrder,
}

impl Encoding {
    pub const fn new(signedness: Signedness, order: ByteOrder) -> Encoding {
        Encoding {
            signedness: signedness,
            order: order,
        }
    }

    fn encode(self, value: &BigInt, field: Field) -> Result<Vec<u8>, CodecError> {
        let bytes = match (self.signedness, self.order) {
            (Signedness::Signed, ByteOrder::BigEndian) => value.to_signed_bytes_be(),
            (Signedness::Signed, ByteOrder::LittleEndian) => value.to_signed_bytes_le(),
            (Signedness::Unsigned, _) if value.sign() == Sign::Minus => {
                return Err(CodecError::NegativeUnsigned { field: field });
            }
            (Signedness::Unsigned, ByteOrder::BigEndian) => value.to_bytes_be().1,
            (Signedness::Unsigned, ByteOrder::LittleEndian) => value.to_bytes_le().1,
        };
        if bytes.len() > u32::MAX as usize {
            return Err(CodecError::PayloadTooLong {
                field: field,
                len: bytes.len(),
            });
        }
        Ok(bytes)
    }

    fn decode(self, bytes: &[u8]) -> BigInt {
        match (self.signedness, self.order) {
            (Signedness::Signed, ByteOrder::BigEndian) => BigInt::from_signed_bytes_be(bytes),
            (Signedness::Signed, ByteOrder::LittleEndian) => BigInt::from_signed_bytes_le(bytes),
            (Signedness::Unsigned, ByteOrder::BigEndian) => BigInt::from_bytes_be(Sign::Plus, bytes),
            (Signedness::Unsigned, ByteOrder::LittleEndian) => {
                BigInt::from_bytes_le(Sign::Plus, bytes)
            }
        }
    }
}

impl Rational {
    /// Encodes `self` into a fresh buffer.
    ///
    /// ```
    /// use bigratio::Rational;
    /// use bigratio::codec::Encoding;
    ///
    /// let bytes = Rational::new(1, 2).to_bytes(Encoding::default()).unwrap();
    /// assert_eq!(bytes, [0, 0, 0, 1, 1, 0, 0, 0, 1, 2]);
    /// assert_eq!(Rational::from_bytes(&bytes, Encoding::default()).unwrap(),
    ///            Rational::new(1, 2));
    /// ```
    pub fn to_bytes(&self, encoding: Encoding) -> Result<Vec<u8>, RationalError> {
        let mut out = Vec::new();
        self.write_to(&mut out, encoding)?;
        Ok(out)
    }

    /// Appends the encoding of `self` to `out`. Nothing is written on error.
    pub fn write_to(&self, out: &mut Vec<u8>, encoding: Encoding) -> Result<(), RationalError> {
        let numer = encoding.encode(self.numer(), Field::Numerator)?;
        let denom = encoding.encode(self.denom(), Field::Denominator)?;
        out.reserve(2 * PREFIX_LEN + numer.len() + denom.len());
        for payload in &[numer, denom] {
            out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
            out.extend_from_slice(payload);
        }
        Ok(())
    }

    /// Number of bytes [`Rational::to_bytes`] produces for `self`.
    pub fn encoded_len(&self, encoding: Encoding) -> Result<usize, RationalError> {
        let numer = encoding.encode(self.numer(), Field::Numerator)?;
        let denom = encoding.encode(self.denom(), Field::Denominator)?;
        Ok(2 * PREFIX_LEN + numer.len() + denom.len())
    }

    /// Decodes exactly one value from `bytes`, which must hold nothing else.
    ///
    /// The decoded pair goes through [`Rational::try_new`], so the result is
    /// canonical and a zero denominator is reported as
    /// [`RationalError::DivideByZero`].
    pub fn from_bytes(bytes: &[u8], encoding: Encoding) -> Result<Rational, RationalError> {
        let (value, rest) = Rational::read_from(bytes, encoding)?;
        if !rest.is_empty() {
            return Err(CodecError::TrailingBytes { count: rest.len() }.into());
        }
        Ok(value)
    }

    /// Decodes one value from the front of `bytes` and returns it together
    /// with the unread remainder.
    pub fn read_from(bytes: &[u8], encoding: Encoding)
                     -> Result<(Rational, &[u8]), RationalError> {
        let (numer, rest) = read_field(bytes, Field::Numerator)?;
        let (denom, rest) = read_field(rest, Field::Denominator)?;
        let value = Rational::try_new(encoding.decode(numer), encoding.decode(denom))?;
        Ok((value, rest))
    }
}

/// Splits one length-prefixed payload off the front of `bytes`.
fn read_field(bytes: &[u8], field: Field) -> Result<(&[u8], &[u8]), CodecError> {
    if bytes.len() < PREFIX_LEN {
        return Err(CodecError::TruncatedPrefix {
            field: field,
            available: bytes.len(),
        });
    }
    let (prefix, rest) = bytes.split_at(PREFIX_LEN);
    let len = u32::from_be_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize;
    if rest.len() < len {
        return Err(CodecError::TruncatedPayload {
            field: field,
            expected: len,
            available: rest.len(),
        });
    }
    Ok(rest.split_at(len))
}

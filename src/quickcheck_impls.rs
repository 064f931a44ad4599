// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use quickcheck::{Arbitrary, Gen};

use crate::rational::Rational;

impl Arbitrary for Rational {
    fn arbitrary(g: &mut Gen) -> Rational {
        let numer = i64::arbitrary(g);
        let denom = loop {
            let d = i64::arbitrary(g);
            if d != 0 {
                break d;
            }
        };
        Rational::new(numer, denom)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Rational>> {
        match (self.numer().try_into(), self.denom().try_into()) {
            (Ok(numer), Ok(denom)) => Box::new(Shrinker::new(numer, denom)),
            _ => Box::new(std::iter::empty()),
        }
    }
}

/// Shrinks the numerator first, then the denominator for each remaining
/// numerator. Zero denominators are skipped.
struct Shrinker {
    shrinking_numer: bool,
    numer: i64,
    denom: i64,
    numer_iter: Box<dyn Iterator<Item = i64>>,
    denom_iter: Option<Box<dyn Iterator<Item = i64>>>,
}

impl Shrinker {
    fn new(numer: i64, denom: i64) -> Shrinker {
        Shrinker {
            shrinking_numer: true,
            numer: numer,
            denom: denom,
            numer_iter: numer.shrink(),
            denom_iter: None,
        }
    }
}

impl Iterator for Shrinker {
    type Item = Rational;

    fn next(&mut self) -> Option<Rational> {
        loop {
            if self.shrinking_numer {
                if let Some(numer) = self.numer_iter.next() {
                    return Some(Rational::new(numer, self.denom));
                }
                self.shrinking_numer = false;
                self.numer_iter = self.numer.shrink();
                self.denom_iter = Some(self.denom.shrink());
                continue;
            }

            let next_denom = self.denom_iter.as_mut().and_then(|it| it.next());
            match next_denom {
                Some(0) => continue,
                Some(denom) => return Some(Rational::new(self.numer, denom)),
                None => {
                    self.numer = self.numer_iter.next()?;
                    self.denom_iter = Some(self.denom.shrink());
                }
            }
        }
    }
}

use num_bigint::BigInt;

use std::fmt;

/// ECDSA signature, both components taken modulo the curve order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub r: BigInt,
    pub s: BigInt,
}

impl Signature {
    pub fn new(r: BigInt, s: BigInt) -> Self {
        Self { r, s }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "r: {:#066x}", self.r)?;
        write!(f, "s: {:#066x}", self.s)
    }
}

use crate::arithmetic::{reduce, Point};
use crate::Error;

use num_bigint::BigInt;
use num_traits::{Num, Zero};

/// Parameters of a short-Weierstrass curve `y^2 = x^3 + a*x + b (mod p)`.
///
/// A `Curve` is an ordinary value: every point borrows the curve it was
/// constructed on, and nothing in the crate reads curve parameters from
/// global state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    pub prime_modulus: BigInt,
    pub order: BigInt,
    pub generator_x: BigInt,
    pub generator_y: BigInt,
    pub coeff_a: BigInt,
    pub coeff_b: BigInt,
}

impl Curve {
    pub fn secp256k1() -> Self {
        Self {
            prime_modulus: from_be_hex(
                "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
            ),
            order: from_be_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
            generator_x: from_be_hex(
                "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            ),
            generator_y: from_be_hex(
                "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
            ),
            coeff_a: BigInt::zero(),
            coeff_b: BigInt::from(7u8),
        }
    }

    /// Checks `x^3 + a*x + b - y^2 = 0 (mod p)`.
    pub fn contains(&self, x: &BigInt, y: &BigInt) -> bool {
        let rhs = x * x * x + &self.coeff_a * x + &self.coeff_b;
        reduce(&(rhs - y * y), &self.prime_modulus).is_zero()
    }

    pub fn generator(&self) -> Result<Point<'_>, Error> {
        Point::new(self, self.generator_x.clone(), self.generator_y.clone())
    }
}

fn from_be_hex(hex: &str) -> BigInt {
    // NOTE unwrap is fine because only hardcoded, valid hex constants
    // are passed to this function
    BigInt::from_str_radix(hex, 16).unwrap()
}

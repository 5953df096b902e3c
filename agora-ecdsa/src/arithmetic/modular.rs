use crate::Error;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Reduces `value` into `[0, modulus)`.
///
/// Unlike the `%` operator on [`BigInt`], which truncates and keeps the sign
/// of the dividend, negative values are mapped onto their nonnegative
/// residue. `modulus` must be positive.
pub fn reduce(value: &BigInt, modulus: &BigInt) -> BigInt {
    debug_assert!(modulus.is_positive());
    value.mod_floor(modulus)
}

/// Extended Euclidean algorithm with floored division.
///
/// Returns `(g, x, y)` such that `a * x + b * y = g`, where `g` is the last
/// nonzero remainder of the sequence started from `(a, b)`.
pub fn xgcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut old_r = a.clone();
    let mut r = b.clone();
    let mut old_x = BigInt::one();
    let mut x = BigInt::zero();
    let mut old_y = BigInt::zero();
    let mut y = BigInt::one();

    while !r.is_zero() {
        let q = old_r.div_floor(&r);

        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_x = &old_x - &q * &x;
        old_x = std::mem::replace(&mut x, next_x);

        let next_y = &old_y - &q * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }

    (old_r, old_x, old_y)
}

/// Computes the multiplicative inverse of `value` modulo `modulus`.
///
/// The result lies in `[0, modulus)`. Fails with [`Error::NotInvertible`]
/// when `value` and `modulus` share a nontrivial factor, which includes
/// every `value` congruent to zero.
pub fn inverse(value: &BigInt, modulus: &BigInt) -> Result<BigInt, Error> {
    let (gcd, x, _) = xgcd(value, modulus);
    if !gcd.is_one() {
        return Err(Error::NotInvertible);
    }
    Ok(reduce(&x, modulus))
}

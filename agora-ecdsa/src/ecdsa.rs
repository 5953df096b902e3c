use crate::arithmetic::{inverse, reduce, Point};
use crate::curve::Curve;
use crate::rng::NonceSource;
use crate::signature::Signature;
use crate::Error;

use num_bigint::BigInt;
use num_traits::Zero;

/// Signing and verification over the subgroup generated by a curve's
/// generator point.
///
/// Neither the private key nor the signature components are range checked.
/// Degenerate inputs (for example `s = 0`) surface as errors from the
/// underlying arithmetic instead of as a rejected signature.
#[derive(Clone, Debug)]
pub struct Ecdsa<'c> {
    curve: &'c Curve,
    generator: Point<'c>,
}

impl<'c> Ecdsa<'c> {
    pub fn new(curve: &'c Curve) -> Result<Self, Error> {
        Ok(Self {
            curve,
            generator: curve.generator()?,
        })
    }

    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    pub fn generator(&self) -> &Point<'c> {
        &self.generator
    }

    pub fn derive_public_key(&self, private_key: &BigInt) -> Result<Point<'c>, Error> {
        self.generator.multiply(private_key)
    }

    pub fn sign<N: NonceSource>(
        &self,
        digest: &BigInt,
        private_key: &BigInt,
        nonces: &mut N,
    ) -> Result<Signature, Error> {
        let order = &self.curve.order;

        let (k, r) = loop {
            let k = nonces.draw(order);
            let r_point = self.generator.multiply(&k)?;
            let r = reduce(r_point.x(), order);
            if !r.is_zero() {
                break (k, r);
            }
            log::debug!("nonce yielded r = 0, drawing another one");
        };

        let k_inv = inverse(&k, order)?;
        let s = reduce(&(k_inv * (digest + &r * private_key)), order);

        Ok(Signature { r, s })
    }

    pub fn verify(
        &self,
        digest: &BigInt,
        signature: &Signature,
        public_key: &Point<'c>,
    ) -> Result<bool, Error> {
        let order = &self.curve.order;

        let s_inv = inverse(&signature.s, order)?;
        let u1 = reduce(&(digest * &s_inv), order);
        let u2 = reduce(&(&signature.r * &s_inv), order);

        // a zero coefficient contributes the point at infinity, which
        // leaves the other term unchanged
        let c = if u1.is_zero() {
            public_key.multiply(&u2)?
        } else if u2.is_zero() {
            self.generator.multiply(&u1)?
        } else {
            self.generator
                .multiply(&u1)?
                .add(&public_key.multiply(&u2)?)?
        };

        let valid = reduce(&(&signature.r - c.x()), order).is_zero();
        log::debug!("signature verification result: {}", valid);
        Ok(valid)
    }
}

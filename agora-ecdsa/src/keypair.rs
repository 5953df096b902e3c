use crate::arithmetic::Point;
use crate::ecdsa::Ecdsa;
use crate::hasher::HashAlgorithm;
use crate::rng::{random_scalar, NonceSource};
use crate::signature::Signature;
use crate::Error;

use num_bigint::BigInt;
use rand_core::{CryptoRng, RngCore};

pub struct Keypair<'c> {
    privkey: BigInt,
    pubkey: Point<'c>,
}

impl<'c> Keypair<'c> {
    pub fn new(ecdsa: &Ecdsa<'c>, privkey: BigInt) -> Result<Self, Error> {
        let pubkey = ecdsa.derive_public_key(&privkey)?;
        Ok(Self { privkey, pubkey })
    }

    pub fn new_checked(
        ecdsa: &Ecdsa<'c>,
        privkey: BigInt,
        pubkey: Point<'c>,
    ) -> Result<Self, Error> {
        if ecdsa.derive_public_key(&privkey)? != pubkey {
            Err(Error::InvalidKeypair)
        } else {
            Ok(Self { privkey, pubkey })
        }
    }

    pub fn random<R: RngCore + CryptoRng>(ecdsa: &Ecdsa<'c>, rng: &mut R) -> Result<Self, Error> {
        let privkey = random_scalar(rng, &ecdsa.curve().order);
        Self::new(ecdsa, privkey)
    }

    pub fn pubkey(&self) -> &Point<'c> {
        &self.pubkey
    }

    pub fn privkey(&self) -> &BigInt {
        &self.privkey
    }

    pub fn sign_message<N: NonceSource>(
        &self,
        ecdsa: &Ecdsa<'c>,
        hash: HashAlgorithm,
        msg: &[u8],
        nonces: &mut N,
    ) -> Result<Signature, Error> {
        ecdsa.sign(&hash.digest(msg), &self.privkey, nonces)
    }

    pub fn verify_message(
        &self,
        ecdsa: &Ecdsa<'c>,
        hash: HashAlgorithm,
        msg: &[u8],
        signature: &Signature,
    ) -> Result<bool, Error> {
        ecdsa.verify(&hash.digest(msg), signature, &self.pubkey)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::Curve;
    use crate::rng::RandomNonce;
    use rand::rngs::OsRng;

    #[test]
    fn signature() {
        let curve = Curve::secp256k1();
        let ecdsa = Ecdsa::new(&curve).unwrap();
        let mut nonces = RandomNonce::os();

        let keypair = Keypair::random(&ecdsa, &mut OsRng).unwrap();
        let msg = b"message to be signed";
        let signature = keypair
            .sign_message(&ecdsa, HashAlgorithm::Keccak256, msg, &mut nonces)
            .unwrap();
        assert!(keypair
            .verify_message(&ecdsa, HashAlgorithm::Keccak256, msg, &signature)
            .unwrap());
        // wrong message
        assert!(!keypair
            .verify_message(&ecdsa, HashAlgorithm::Keccak256, &[23; 32], &signature)
            .unwrap());
        // wrong hash
        assert!(!keypair
            .verify_message(&ecdsa, HashAlgorithm::Sha256, msg, &signature)
            .unwrap());
        // wrong verifying key
        let other_keypair = Keypair::random(&ecdsa, &mut OsRng).unwrap();
        assert!(!other_keypair
            .verify_message(&ecdsa, HashAlgorithm::Keccak256, msg, &signature)
            .unwrap());
    }

    #[test]
    fn checked_keypair() {
        let curve = Curve::secp256k1();
        let ecdsa = Ecdsa::new(&curve).unwrap();
        let keypair = Keypair::new(&ecdsa, BigInt::from(1u8)).unwrap();
        assert_eq!(keypair.pubkey(), ecdsa.generator());

        let g2 = keypair.pubkey().double().unwrap();
        assert!(Keypair::new_checked(&ecdsa, BigInt::from(2u8), g2).is_ok());

        let mismatched = Keypair::new_checked(&ecdsa, BigInt::from(3u8), keypair.pubkey().clone());
        assert_eq!(mismatched.err(), Some(Error::InvalidKeypair));
    }
}

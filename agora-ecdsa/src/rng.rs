use num_bigint::{BigInt, RandBigInt};
use num_traits::One;
use rand::rngs::{OsRng, StdRng};
use rand_core::{CryptoRng, RngCore, SeedableRng};

/// Source of the per-signature secret `k`.
///
/// Every draw must be fresh and unpredictable: reusing a nonce across two
/// signatures with the same key reveals the private key.
pub trait NonceSource {
    /// Draws a nonce for a curve whose group has the given order.
    fn draw(&mut self, order: &BigInt) -> BigInt;
}

/// Draws nonces uniformly from `[1, order)` with a cryptographic rng.
pub struct RandomNonce<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RandomNonce<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomNonce<OsRng> {
    pub fn os() -> Self {
        Self::new(OsRng)
    }
}

impl RandomNonce<StdRng> {
    /// Reproducible nonces for tests and benchmarks. Never sign real
    /// messages with a seeded source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomNonce<OsRng> {
    fn default() -> Self {
        Self::os()
    }
}

impl<R: RngCore + CryptoRng> NonceSource for RandomNonce<R> {
    fn draw(&mut self, order: &BigInt) -> BigInt {
        random_scalar(&mut self.rng, order)
    }
}

/// Uniform scalar in `[1, order)`.
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R, order: &BigInt) -> BigInt {
    rng.gen_bigint_range(&BigInt::one(), order)
}

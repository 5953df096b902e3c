#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod arithmetic;
pub mod curve;
pub mod ecdsa;
pub mod hasher;
pub mod keypair;
pub mod parse;
pub mod rng;
pub mod signature;

pub use arithmetic::Point;
pub use curve::Curve;
pub use ecdsa::Ecdsa;
pub use keypair::Keypair;
pub use num_bigint::BigInt;
pub use signature::Signature;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("point not on curve")]
    NotOnCurve,
    #[error("value is not invertible modulo the given modulus")]
    NotInvertible,
    #[error("operation would produce the point at infinity")]
    PointAtInfinity,
    #[error("points belong to different curves")]
    CurveMismatch,
    #[error("pubkey-privkey mismatch")]
    InvalidKeypair,
    #[error("invalid integer: {0}")]
    InvalidInteger(String),
}

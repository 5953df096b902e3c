use num_bigint::{BigInt, Sign};
use serde::Deserialize;
use sha2::Sha256;
use sha3::{Digest, Keccak256};

use std::str::FromStr;

/// Incremental message hasher whose output is read as a big-endian,
/// nonnegative integer digest.
pub struct MessageHasher<D: Digest> {
    hasher: D,
}

impl<D: Digest> MessageHasher<D> {
    pub fn new() -> Self {
        Self { hasher: D::new() }
    }

    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        self.hasher.update(data);
    }

    pub fn finalize(self) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, &self.hasher.finalize())
    }
}

impl<D: Digest> Default for MessageHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn digest<D: Digest>(msg: &[u8]) -> BigInt {
    let mut hasher = MessageHasher::<D>::new();
    hasher.update(msg);
    hasher.finalize()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Keccak256,
}

impl HashAlgorithm {
    pub fn digest(&self, msg: &[u8]) -> BigInt {
        match self {
            Self::Sha256 => digest::<Sha256>(msg),
            Self::Keccak256 => digest::<Keccak256>(msg),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "keccak256" => Ok(Self::Keccak256),
            other => Err(format!("unknown hash algorithm: {}", other)),
        }
    }
}

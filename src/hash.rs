//! Hash primitives used by consensus and the wire codec. The algorithms
//! themselves are assumed bit-exact per their standards; this module
//! only wires them to the crate's `Hash` type.

use sha2::{Digest, Sha256};
use sha3::Keccak256;

pub type Hash = [u8; 32];

/// Double SHA-256, the legacy block/transaction hashing function.
pub fn sha256d(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    out
}

/// Single Keccak-256, used by the new proof-of-work version.
pub fn keccak256(data: &[u8]) -> Hash {
    let digest = Keccak256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Single SHA-256, used for the wire protocol's 4-byte message checksum.
pub fn sha256(data: &[u8]) -> Hash {
    let digest = Sha256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256d_is_sha256_of_sha256() {
        let data = b"creativecoin";
        let once: Hash = sha256(data);
        let twice = sha256d(data);
        assert_eq!(twice, sha256(&once));
        assert_ne!(once, twice);
    }

    #[test]
    fn test_sha256d_differs_from_single_sha256() {
        let data = b"creativecoin";
        assert_ne!(sha256d(data), sha256(data));
    }

    #[test]
    fn test_keccak256_differs_from_sha256d() {
        let data = b"creativecoin";
        assert_ne!(keccak256(data), sha256d(data));
    }

    #[test]
    fn test_hash_functions_are_deterministic() {
        let data = b"deterministic input";
        assert_eq!(sha256d(data), sha256d(data));
        assert_eq!(keccak256(data), keccak256(data));
    }
}

//! Message hashing for ECDSA
//!
//! Messages are hashed with SHA-256 and the digest is read as an unsigned
//! big-endian integer. The integer is NOT reduced modulo the group order:
//! signing and verification reduce the products they form, so a digest
//! above n behaves exactly like the same digest minus n.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

/// Size of a SHA-256 digest in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// SHA-256 of `data`
pub fn sha256(data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
    Sha256::digest(data).into()
}

/// SHA-256 of raw bytes as an unsigned integer
pub fn hash_bytes(data: &[u8]) -> BigUint {
    BigUint::from_bytes_be(&sha256(data))
}

/// SHA-256 of the UTF-8 bytes of `message` as an unsigned integer
pub fn hash_message(message: &str) -> BigUint {
    hash_bytes(message.as_bytes())
}

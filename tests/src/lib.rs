//! Known-answer vectors and shared fixtures for the k1curve test suite
pub mod vectors;

use k1curve_algorithms::{secp256k1, Point};
use num_bigint::BigUint;

/// Parse an uppercase or lowercase hex string into a `BigUint`
pub fn biguint(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("test vector is valid hex")
}

/// Build a secp256k1 point from hex coordinates
pub fn secp256k1_point(x: &str, y: &str) -> Point {
    secp256k1::curve()
        .point(biguint(x), biguint(y))
        .expect("test vector lies on secp256k1")
}

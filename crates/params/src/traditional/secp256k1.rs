//! Constants for the secp256k1 (Koblitz) curve
//!
//! Curve equation: y² = x³ + 7 over F_p with p = 2^256 - 2^32 - 977.
//! All values are big-endian hexadecimal without a prefix.

/// Field modulus p
pub const P_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";

/// Curve coefficient a
pub const A: u32 = 0;

/// Curve coefficient b
pub const B: u32 = 7;

/// x-coordinate of the generator G
pub const GX_HEX: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";

/// y-coordinate of the generator G
pub const GY_HEX: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";

/// Order n of the generator G
pub const N_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";

/// Cofactor h
pub const H: u32 = 1;

/// Size of a field element or scalar in bytes
pub const FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an uncompressed SEC1 point: 0x04 || x || y
pub const POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * FIELD_ELEMENT_SIZE;

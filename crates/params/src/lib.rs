//! Constant values for the k1curve library
//!
//! Curve constants are stored as big-endian hexadecimal strings (or small
//! integers for toy curves) so that this crate stays dependency-free; the
//! arithmetic crates parse them into big integers once.

pub mod traditional;

pub use traditional::secp256k1;
pub use traditional::toy;

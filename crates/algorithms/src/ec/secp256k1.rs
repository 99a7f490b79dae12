//! The secp256k1 domain, y² = x³ + 7 over F_p with p = 2^256 - 2^32 - 977
//!
//! The parameters are parsed once on first use and shared for the life of
//! the process.

use super::curve::Curve;
use super::domain::DomainParameters;
use super::point::Point;
use crate::error::{Error, KeyResult, Result};
use k1curve_params::secp256k1 as constants;
use num_bigint::{BigInt, BigUint};
use once_cell::sync::Lazy;

pub use constants::{FIELD_ELEMENT_SIZE, POINT_UNCOMPRESSED_SIZE};

static SECP256K1: Lazy<DomainParameters> =
    Lazy::new(|| build().expect("secp256k1 constants are valid"));

fn parse_hex(name: &'static str, hex: &str) -> Result<BigUint> {
    BigUint::parse_bytes(hex.as_bytes(), 16)
        .ok_or_else(|| Error::param("secp256k1", format!("malformed constant {}", name)))
}

fn build() -> Result<DomainParameters> {
    let p = parse_hex("p", constants::P_HEX)?;
    let curve = Curve::new(&BigInt::from(constants::A), &BigInt::from(constants::B), p)?;
    let g = curve.point(
        parse_hex("Gx", constants::GX_HEX)?,
        parse_hex("Gy", constants::GY_HEX)?,
    )?;
    let n = parse_hex("n", constants::N_HEX)?;
    DomainParameters::new(curve, g, n, BigUint::from(constants::H))
}

/// The process-wide secp256k1 domain parameters
pub fn params() -> &'static DomainParameters {
    &SECP256K1
}

/// The secp256k1 curve
pub fn curve() -> &'static Curve {
    SECP256K1.curve()
}

/// The standard generator G
pub fn generator() -> &'static Point {
    SECP256K1.generator()
}

/// The order n of G
pub fn order() -> &'static BigUint {
    SECP256K1.order()
}

/// Derive Q = d·G, failing with `OutOfRangeScalar` unless d is in `[1, n-1]`
pub fn get_public_key(d: &BigUint) -> KeyResult<Point> {
    SECP256K1.public_key(d)
}

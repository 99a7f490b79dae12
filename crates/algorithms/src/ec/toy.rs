//! Small curves for working the group law by hand

use super::curve::Curve;
use super::domain::DomainParameters;
use super::point::Point;
use crate::error::CurveResult;
use k1curve_params::toy::{f131, f17};
use num_bigint::BigUint;

/// y² = x³ + 7 over F_17
pub fn f17_curve() -> CurveResult<Curve> {
    Curve::from_u64(f17::A, f17::B, f17::P)
}

/// The point (15, 13) of [`f17_curve`], of order 18
pub fn f17_generator() -> CurveResult<Point> {
    f17_curve()?.point(f17::GX, f17::GY)
}

/// y² = x³ + 7 over F_131 with G = (42, 39) of prime order 11
pub fn f131_domain() -> CurveResult<DomainParameters> {
    let curve = Curve::from_u64(f131::A, f131::B, f131::P)?;
    let g = curve.point(f131::GX, f131::GY)?;
    DomainParameters::new(curve, g, BigUint::from(f131::N), BigUint::from(f131::H))
}

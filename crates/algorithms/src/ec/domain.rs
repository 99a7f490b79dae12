//! Domain parameters: a curve with a generator of known order

use super::curve::Curve;
use super::point::Point;
use crate::error::{validate, CurveResult, Error, KeyResult, Result, ResultExt};
use k1curve_common::is_probable_prime;
use num_bigint::BigUint;

/// Miller-Rabin rounds used by [`DomainParameters::validate`]
const PRIMALITY_ROUNDS: usize = 20;

/// A curve together with a generator G of order n and cofactor h
///
/// Built once and never mutated. Construction checks that G lies on the
/// curve and that n is at least 2; the more expensive checks live in
/// [`DomainParameters::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainParameters {
    curve: Curve,
    g: Point,
    n: BigUint,
    h: BigUint,
}

impl DomainParameters {
    /// Assemble domain parameters.
    pub fn new(curve: Curve, g: Point, n: BigUint, h: BigUint) -> CurveResult<Self> {
        validate::parameter(
            n >= BigUint::from(2u32),
            "DomainParameters",
            "generator order must be at least 2",
        )?;
        validate::parameter(
            !g.is_infinity(),
            "DomainParameters",
            "generator must be a finite point",
        )?;
        curve.check_point(&g).with_context("DomainParameters")?;
        Ok(DomainParameters { curve, g, n, h })
    }

    /// The underlying curve
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The generator G
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// The order n of G
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// The cofactor h
    pub fn cofactor(&self) -> &BigUint {
        &self.h
    }

    /// floor(n / 2), the Low-S bound
    pub fn half_order(&self) -> BigUint {
        &self.n >> 1u32
    }

    /// Check that a scalar lies in `[1, n-1]`.
    pub fn check_scalar(&self, context: &'static str, k: &BigUint) -> Result<()> {
        validate::scalar_range(context, k, &self.n)
    }

    /// k·G for any k; k = 0 gives infinity
    pub fn multiply_generator(&self, k: &BigUint) -> CurveResult<Point> {
        self.curve.multiply_unchecked(k, &self.g)
    }

    /// Derive the public point Q = d·G, requiring d in `[1, n-1]`.
    pub fn public_key(&self, d: &BigUint) -> KeyResult<Point> {
        self.check_scalar("public key derivation", d)?;
        self.multiply_generator(d)
    }

    /// Explicit consistency check of the parameters.
    ///
    /// Verifies that p and n are probable primes, that G lies on the curve
    /// and that n·G is the point at infinity.
    pub fn validate(&self) -> Result<()> {
        if !is_probable_prime(self.curve.p(), PRIMALITY_ROUNDS) {
            return Err(Error::param(
                "DomainParameters::validate",
                "field modulus is not prime",
            ));
        }
        if !is_probable_prime(&self.n, PRIMALITY_ROUNDS) {
            return Err(Error::param(
                "DomainParameters::validate",
                "generator order is not prime",
            ));
        }
        self.curve
            .check_point(&self.g)
            .with_context("DomainParameters::validate")?;
        if !self.multiply_generator(&self.n)?.is_infinity() {
            return Err(Error::param(
                "DomainParameters::validate",
                "n·G is not the point at infinity",
            ));
        }
        Ok(())
    }
}

//! Group law of a short Weierstrass curve y² = x³ + ax + b over F_p

use super::point::{Point, INFINITY_TAG, UNCOMPRESSED_TAG};
use crate::error::{validate, CurveResult, Error, ResultExt};
use crate::field::FieldElement;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A short Weierstrass curve over a prime field
///
/// The field modulus is taken on trust; [`crate::DomainParameters::validate`]
/// offers an explicit probable-prime check.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCurve"))]
pub struct Curve {
    a: FieldElement,
    b: FieldElement,
}

/// Wire form of a [`Curve`], validated like [`Curve::new`] on the way in
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCurve {
    a: FieldElement,
    b: FieldElement,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCurve> for Curve {
    type Error = Error;

    fn try_from(raw: RawCurve) -> CurveResult<Self> {
        Curve::from_coefficients(raw.a, raw.b)
    }
}

impl Curve {
    /// Create the curve y² = x³ + ax + b over F_p.
    ///
    /// Rejects moduli below 5 and singular curves (4a³ + 27b² ≡ 0).
    pub fn new(a: &BigInt, b: &BigInt, p: BigUint) -> CurveResult<Self> {
        let a = FieldElement::from_bigint(a, p.clone())?;
        let b = FieldElement::from_bigint(b, p)?;
        Self::from_coefficients(a, b)
    }

    /// Create a curve from coefficients that are already field elements.
    ///
    /// Both must share one modulus, and the same checks as [`Curve::new`]
    /// apply.
    pub fn from_coefficients(a: FieldElement, b: FieldElement) -> CurveResult<Self> {
        validate::same_field(a.modulus(), b.modulus())?;
        validate::parameter(
            a.modulus() >= &BigUint::from(5u32),
            "Curve",
            "field modulus must be at least 5",
        )?;
        let curve = Curve { a, b };

        let four_a3 = curve.a.square().mul(&curve.a)?.mul(&curve.element(4u32))?;
        let twenty_seven_b2 = curve.b.square().mul(&curve.element(27u32))?;
        validate::parameter(
            !four_a3.add(&twenty_seven_b2)?.is_zero(),
            "Curve",
            "discriminant is zero, the curve is singular",
        )?;

        Ok(curve)
    }

    /// Create a curve from machine-sized coefficients and modulus.
    pub fn from_u64(a: u64, b: u64, p: u64) -> CurveResult<Self> {
        Self::new(&BigInt::from(a), &BigInt::from(b), BigUint::from(p))
    }

    /// Coefficient a
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Coefficient b
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Field modulus p
    pub fn p(&self) -> &BigUint {
        self.a.modulus()
    }

    /// Reduce an integer into this curve's field.
    pub fn element<V: Into<BigUint>>(&self, value: V) -> FieldElement {
        FieldElement::reduced(value.into(), self.p().clone())
    }

    /// Build an affine point, checking that it lies on the curve.
    pub fn point<X: Into<BigUint>, Y: Into<BigUint>>(&self, x: X, y: Y) -> CurveResult<Point> {
        let point = Point::Affine {
            x: self.element(x),
            y: self.element(y),
        };
        self.check_point(&point)?;
        Ok(point)
    }

    /// Check curve membership.
    ///
    /// Infinity is always on the curve. An affine point whose coordinates
    /// belong to another field is not.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        self.check_point(point).is_ok()
    }

    /// Check curve membership, reporting why a point is rejected.
    ///
    /// Coordinates from a different field yield [`Error::CrossField`];
    /// coordinates that miss the equation yield [`Error::InvalidPoint`].
    pub fn check_point(&self, point: &Point) -> CurveResult<()> {
        match point {
            Point::Infinity => Ok(()),
            Point::Affine { x, y } => {
                validate::same_field(self.p(), x.modulus())?;
                validate::same_field(self.p(), y.modulus())?;

                // y² = x³ + ax + b
                let lhs = y.square();
                let rhs = x.square().mul(x)?.add(&self.a.mul(x)?)?.add(&self.b)?;
                if lhs != rhs {
                    return Err(Error::point(
                        "Curve",
                        "coordinates do not satisfy the curve equation",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Point addition P + Q
    pub fn add(&self, p: &Point, q: &Point) -> CurveResult<Point> {
        self.check_point(p)?;
        self.check_point(q)?;
        self.add_unchecked(p, q)
    }

    /// Point doubling 2P
    pub fn double(&self, p: &Point) -> CurveResult<Point> {
        self.check_point(p)?;
        self.add_unchecked(p, p)
    }

    /// Point negation: (x, y) -> (x, p - y)
    pub fn negate(&self, p: &Point) -> Point {
        match p {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: y.negate(),
            },
        }
    }

    /// Scalar multiplication k·P by double-and-add
    pub fn multiply(&self, k: &BigUint, p: &Point) -> CurveResult<Point> {
        self.check_point(p)?;
        self.multiply_unchecked(k, p)
    }

    /// Scalar multiplication by a signed scalar: a negative k multiplies
    /// -P by |k|.
    pub fn multiply_signed(&self, k: &BigInt, p: &Point) -> CurveResult<Point> {
        match k.sign() {
            Sign::Minus => self.multiply(k.magnitude(), &self.negate(p)),
            _ => self.multiply(k.magnitude(), p),
        }
    }

    /// Order of P found by repeated addition, or `None` past `limit`.
    ///
    /// Only practical on toy curves.
    pub fn order_of(&self, p: &Point, limit: u64) -> CurveResult<Option<u64>> {
        self.check_point(p)?;

        let mut acc = p.clone();
        for order in 1..=limit {
            if acc.is_infinity() {
                return Ok(Some(order));
            }
            acc = self.add_unchecked(&acc, p)?;
        }
        Ok(None)
    }

    /// Parse a SEC1 uncompressed point (0x04 || x || y) with `width`-byte
    /// coordinates, or the single byte 0x00 for infinity.
    pub fn point_from_uncompressed(&self, bytes: &[u8], width: usize) -> CurveResult<Point> {
        if bytes.len() == 1 && bytes[0] == INFINITY_TAG {
            return Ok(Point::Infinity);
        }
        validate::length("Curve::point_from_uncompressed", bytes.len(), 1 + 2 * width)?;
        if bytes[0] != UNCOMPRESSED_TAG {
            return Err(Error::encoding(
                "Curve::point_from_uncompressed",
                format!("unsupported tag 0x{:02X}", bytes[0]),
            ));
        }

        let x = BigUint::from_bytes_be(&bytes[1..1 + width]);
        let y = BigUint::from_bytes_be(&bytes[1 + width..]);
        if &x >= self.p() || &y >= self.p() {
            return Err(Error::encoding(
                "Curve::point_from_uncompressed",
                "coordinate is not reduced modulo p",
            ));
        }
        self.point(x, y).with_context("Curve::point_from_uncompressed")
    }

    /// Addition for operands already known to lie on this curve.
    pub(crate) fn add_unchecked(&self, p: &Point, q: &Point) -> CurveResult<Point> {
        let (x1, y1, x2, y2) = match (p, q) {
            (Point::Infinity, _) => return Ok(q.clone()),
            (_, Point::Infinity) => return Ok(p.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        // Q = -P
        if x1 == x2 && y1.add(y2)?.is_zero() {
            return Ok(Point::Infinity);
        }

        let lambda = if p == q {
            // λ = (3x² + a) / 2y
            let numerator = x1.square().mul(&self.element(3u32))?.add(&self.a)?;
            numerator.div(&y1.mul(&self.element(2u32))?)?
        } else {
            // λ = (y2 - y1) / (x2 - x1)
            y2.sub(y1)?.div(&x2.sub(x1)?)?
        };

        let x3 = lambda.square().sub(x1)?.sub(x2)?;
        let y3 = lambda.mul(&x1.sub(&x3)?)?.sub(y1)?;
        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// Double-and-add from the least significant bit, for an operand
    /// already known to lie on this curve.
    pub(crate) fn multiply_unchecked(&self, k: &BigUint, p: &Point) -> CurveResult<Point> {
        if k.is_zero() || p.is_infinity() {
            return Ok(Point::Infinity);
        }

        let mut result = Point::Infinity;
        let mut addend = p.clone();
        for position in 0..k.bits() {
            if k.bit(position) {
                result = self.add_unchecked(&result, &addend)?;
            }
            addend = self.add_unchecked(&addend, &addend)?;
        }
        Ok(result)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y^2 = x^3 + {:X}x + {:X} (mod {:X})",
            self.a,
            self.b,
            self.p()
        )
    }
}

//! Prime field arithmetic
//!
//! A [`FieldElement`] pairs a value with the modulus of its field. The value
//! is always held reduced into `[0, p)`, and every operation returns a new
//! element. Combining elements of different fields is a programming error
//! that surfaces as [`Error::CrossField`].

mod generators;

pub use generators::{find_generators, is_generator};

use crate::error::{validate, Error, FieldResult};
use k1curve_common::mod_sub;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An element of the prime field F_p
///
/// Equality and hashing are structural over the reduced value and the
/// modulus, so `3 mod 7` and `3 mod 11` are different elements.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFieldElement"))]
pub struct FieldElement {
    value: BigUint,
    modulus: BigUint,
}

/// Wire form of a [`FieldElement`], checked and reduced through
/// [`FieldElement::new`] on the way in
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawFieldElement {
    value: BigUint,
    modulus: BigUint,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFieldElement> for FieldElement {
    type Error = Error;

    fn try_from(raw: RawFieldElement) -> FieldResult<Self> {
        FieldElement::new(raw.value, raw.modulus)
    }
}

impl FieldElement {
    /// Create a field element, reducing `value` modulo `modulus`.
    ///
    /// The modulus must be at least 2. Its primality is not checked.
    pub fn new(value: BigUint, modulus: BigUint) -> FieldResult<Self> {
        validate::parameter(
            modulus > BigUint::one(),
            "FieldElement",
            "modulus must be at least 2",
        )?;
        Ok(Self::reduced(value, modulus))
    }

    /// Create a field element from machine integers.
    pub fn from_u64(value: u64, modulus: u64) -> FieldResult<Self> {
        Self::new(BigUint::from(value), BigUint::from(modulus))
    }

    /// Create a field element from a signed machine integer.
    pub fn from_i64(value: i64, modulus: u64) -> FieldResult<Self> {
        Self::from_bigint(&BigInt::from(value), BigUint::from(modulus))
    }

    /// Create a field element from a signed integer, reducing into `[0, p)`.
    pub fn from_bigint(value: &BigInt, modulus: BigUint) -> FieldResult<Self> {
        validate::parameter(
            modulus > BigUint::one(),
            "FieldElement",
            "modulus must be at least 2",
        )?;
        let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
        let value = value
            .mod_floor(&m)
            .to_biguint()
            .ok_or_else(|| Error::param("FieldElement", "reduction produced a negative value"))?;
        Ok(FieldElement { value, modulus })
    }

    /// Build an element whose modulus is already known to be valid.
    pub(crate) fn reduced(value: BigUint, modulus: BigUint) -> Self {
        let value = if value < modulus {
            value
        } else {
            value % &modulus
        };
        FieldElement { value, modulus }
    }

    /// The reduced value in `[0, p)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The field modulus p.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Check if this element is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Check if this element is one.
    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    /// Addition: (a + b) mod p
    pub fn add(&self, other: &Self) -> FieldResult<Self> {
        self.check_same_field(other)?;
        Ok(self.with_value(&self.value + &other.value))
    }

    /// Subtraction: (a - b) mod p
    pub fn sub(&self, other: &Self) -> FieldResult<Self> {
        self.check_same_field(other)?;
        Ok(self.with_value(mod_sub(&self.value, &other.value, &self.modulus)))
    }

    /// Multiplication: (a · b) mod p
    pub fn mul(&self, other: &Self) -> FieldResult<Self> {
        self.check_same_field(other)?;
        Ok(self.with_value(&self.value * &other.value))
    }

    /// Square: a² mod p
    pub fn square(&self) -> Self {
        self.with_value(&self.value * &self.value)
    }

    /// Additive inverse: (p - a) mod p
    pub fn negate(&self) -> Self {
        self.with_value(mod_sub(&BigUint::zero(), &self.value, &self.modulus))
    }

    /// Exponentiation: a^e mod p, for any signed exponent.
    ///
    /// The exponent is first reduced modulo p - 1 (Fermat's little theorem)
    /// and the result computed by square-and-multiply. The reduction is only
    /// sound for a nonzero base, so zero is handled separately: 0^0 = 1,
    /// 0^e = 0 for e > 0, and a negative exponent of zero is a
    /// [`Error::ZeroInverse`].
    pub fn pow<E: Into<BigInt>>(&self, exponent: E) -> FieldResult<Self> {
        let exponent: BigInt = exponent.into();

        if self.is_zero() {
            return match exponent.sign() {
                Sign::NoSign => Ok(self.with_value(BigUint::one())),
                Sign::Plus => Ok(self.clone()),
                Sign::Minus => Err(Error::ZeroInverse {
                    context: "FieldElement::pow",
                }),
            };
        }

        let order = BigInt::from_biguint(Sign::Plus, &self.modulus - 1u32);
        let reduced = exponent
            .mod_floor(&order)
            .to_biguint()
            .ok_or_else(|| Error::param("FieldElement::pow", "exponent reduction failed"))?;
        Ok(self.with_value(self.value.modpow(&reduced, &self.modulus)))
    }

    /// Multiplicative inverse: a^(p-2) mod p (Fermat's little theorem)
    pub fn inverse(&self) -> FieldResult<Self> {
        if self.is_zero() {
            return Err(Error::ZeroInverse {
                context: "FieldElement::inverse",
            });
        }
        let exponent = &self.modulus - 2u32;
        Ok(self.with_value(self.value.modpow(&exponent, &self.modulus)))
    }

    /// Division: a · b^(-1) mod p
    pub fn div(&self, other: &Self) -> FieldResult<Self> {
        self.check_same_field(other)?;
        self.mul(&other.inverse()?)
    }

    fn with_value(&self, value: BigUint) -> Self {
        Self::reduced(value, self.modulus.clone())
    }

    fn check_same_field(&self, other: &Self) -> FieldResult<()> {
        validate::same_field(&self.modulus, &other.modulus)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.value)
    }
}

impl fmt::UpperHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.value, f)
    }
}

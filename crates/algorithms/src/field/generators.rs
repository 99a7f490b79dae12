//! Generators of the multiplicative group F_p*
//!
//! These helpers enumerate powers one by one and are only meant for small
//! fields such as F_7 or F_11.

use super::FieldElement;
use crate::error::{validate, FieldResult};

/// Check whether `g` generates F_p*, i.e. whether its order is p - 1.
///
/// Returns `false` for `g ≡ 0 (mod p)`.
pub fn is_generator(g: u64, p: u64) -> FieldResult<bool> {
    let element = FieldElement::from_u64(g, p)?;
    if element.is_zero() {
        return Ok(false);
    }

    let order = p - 1;
    let mut power = element.clone();
    for _ in 1..order {
        if power.is_one() {
            return Ok(false);
        }
        power = power.mul(&element)?;
    }
    Ok(power.is_one())
}

/// List every generator of F_p* in increasing order.
pub fn find_generators(p: u64) -> FieldResult<Vec<u64>> {
    validate::parameter(p > 2, "find_generators", "modulus must be larger than 2")?;

    let mut generators = Vec::new();
    for g in 2..p {
        if is_generator(g, p)? {
            generators.push(g);
        }
    }
    Ok(generators)
}

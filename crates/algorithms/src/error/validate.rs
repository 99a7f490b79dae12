//! Validation utilities for field and curve arithmetic

use super::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate that two operands belong to the same prime field
#[inline(always)]
pub fn same_field(left: &BigUint, right: &BigUint) -> Result<()> {
    if left != right {
        return Err(Error::CrossField {
            left: left.clone(),
            right: right.clone(),
        });
    }
    Ok(())
}

/// Validate that a scalar lies in `[1, n-1]`
#[inline(always)]
pub fn scalar_range(context: &'static str, scalar: &BigUint, n: &BigUint) -> Result<()> {
    if scalar.is_zero() || scalar >= n {
        return Err(Error::OutOfRangeScalar { context });
    }
    Ok(())
}

/// Validate an encoded length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::encoding(
            context,
            format!("expected {} bytes, got {}", expected, actual),
        ));
    }
    Ok(())
}

//! Elliptic curve points in affine coordinates

use crate::error::{Error, Result};
use crate::field::FieldElement;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag byte of the SEC1 uncompressed encoding
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// Tag byte of the SEC1 encoding of the point at infinity
pub const INFINITY_TAG: u8 = 0x00;

/// A point of a short Weierstrass curve
///
/// A point does not know which curve it belongs to. Curve operations check
/// that affine operands lie on the curve they are applied to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Point {
    /// The point at infinity (identity element)
    Infinity,
    /// A finite point with coordinates in the curve's field
    Affine {
        /// x-coordinate
        x: FieldElement,
        /// y-coordinate
        y: FieldElement,
    },
}

impl Point {
    /// Check if this is the point at infinity.
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// The x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&FieldElement> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// The y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&FieldElement> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// Serialize as SEC1 uncompressed bytes: 0x04 || x || y
    ///
    /// Each coordinate is left-padded to `width` bytes. The point at
    /// infinity encodes as the single byte 0x00.
    pub fn to_uncompressed(&self, width: usize) -> Result<Vec<u8>> {
        match self {
            Point::Infinity => Ok(vec![INFINITY_TAG]),
            Point::Affine { x, y } => {
                let mut out = Vec::with_capacity(1 + 2 * width);
                out.push(UNCOMPRESSED_TAG);
                write_padded(&mut out, x, width)?;
                write_padded(&mut out, y, width)?;
                Ok(out)
            }
        }
    }
}

fn write_padded(out: &mut Vec<u8>, coordinate: &FieldElement, width: usize) -> Result<()> {
    let bytes = coordinate.value().to_bytes_be();
    if bytes.len() > width {
        return Err(Error::encoding(
            "Point::to_uncompressed",
            format!("coordinate needs {} bytes, width is {}", bytes.len(), width),
        ));
    }
    out.resize(out.len() + width - bytes.len(), 0);
    out.extend_from_slice(&bytes);
    Ok(())
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "Infinity"),
            Point::Affine { x, y } => write!(f, "({:X}, {:X})", x, y),
        }
    }
}

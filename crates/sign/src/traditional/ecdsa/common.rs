//! Common utilities for ECDSA implementations

use k1curve_api::{Error, Result};
use num_bigint::BigUint;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const SEQUENCE_TAG: u8 = 0x30;
const INTEGER_TAG: u8 = 0x02;

/// Largest INTEGER body accepted: a 256-bit value plus a sign byte
const MAX_INTEGER_LEN: usize = 33;

/// ECDSA signature components (r, s)
///
/// A signature carries no validity of its own beyond what `verify`
/// establishes: values outside `[1, n-1]` can be built and are simply
/// rejected at verification.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from its components
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// The r component
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The s component
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split into (r, s)
    pub fn into_parts(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }

    /// Check the Low-S convention s ≤ n/2
    pub fn is_low_s(&self, n: &BigUint) -> bool {
        self.s <= (n >> 1u32)
    }

    /// Return the Low-S form of this signature: s is replaced by n - s when
    /// it exceeds n/2. Both forms verify.
    pub fn normalize_s(&self, n: &BigUint) -> Self {
        if self.is_low_s(n) || &self.s >= n {
            return self.clone();
        }
        Signature {
            r: self.r.clone(),
            s: n - &self.s,
        }
    }

    /// Serialize signature to DER format
    ///
    /// Fails with [`Error::Encoding`] when r or s does not fit the
    /// short-form encoding that [`Signature::from_der`] accepts.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        // DER encoding: SEQUENCE { INTEGER r, INTEGER s }
        let r_bytes = encode_integer(&self.r, "r")?;
        let s_bytes = encode_integer(&self.s, "s")?;

        let mut der = Vec::with_capacity(6 + r_bytes.len() + s_bytes.len());
        der.push(SEQUENCE_TAG);
        der.push((4 + r_bytes.len() + s_bytes.len()) as u8);

        der.push(INTEGER_TAG);
        der.push(r_bytes.len() as u8);
        der.extend_from_slice(&r_bytes);

        der.push(INTEGER_TAG);
        der.push(s_bytes.len() as u8);
        der.extend_from_slice(&s_bytes);

        Ok(der)
    }

    /// Parse signature from DER format
    ///
    /// Only short-form lengths are accepted, which covers every r and s
    /// below 2^256. Negative and non-minimal integers are rejected, as is
    /// trailing data.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        if der.len() < 8 {
            return Err(Error::encoding("ECDSA DER parsing", "DER signature too short"));
        }
        if der[0] != SEQUENCE_TAG {
            return Err(Error::encoding("ECDSA DER parsing", "invalid DER SEQUENCE tag"));
        }
        if der[1] as usize != der.len() - 2 {
            return Err(Error::encoding(
                "ECDSA DER parsing",
                "SEQUENCE length does not match input",
            ));
        }

        let (r, rest) = decode_integer(&der[2..], "r")?;
        let (s, rest) = decode_integer(rest, "s")?;
        if !rest.is_empty() {
            return Err(Error::encoding(
                "ECDSA DER parsing",
                "trailing data after signature",
            ));
        }

        Ok(Signature { r, s })
    }
}

/// Encode integer for DER (add leading zero if high bit set)
fn encode_integer(value: &BigUint, name: &'static str) -> Result<Vec<u8>> {
    let bytes = value.to_bytes_be();
    let encoded = if bytes[0] & 0x80 == 0 {
        bytes
    } else {
        let mut result = Vec::with_capacity(bytes.len() + 1);
        result.push(0x00);
        result.extend_from_slice(&bytes);
        result
    };
    if encoded.len() > MAX_INTEGER_LEN {
        return Err(Error::encoding(
            "ECDSA DER encoding",
            format!("INTEGER {} longer than {} bytes", name, MAX_INTEGER_LEN),
        ));
    }
    Ok(encoded)
}

/// Decode one INTEGER, returning its value and the remaining input
fn decode_integer<'a>(input: &'a [u8], name: &'static str) -> Result<(BigUint, &'a [u8])> {
    let malformed = |reason: &str| {
        Error::encoding("ECDSA DER parsing", format!("INTEGER {}: {}", name, reason))
    };

    if input.len() < 2 {
        return Err(malformed("truncated header"));
    }
    if input[0] != INTEGER_TAG {
        return Err(malformed("invalid tag"));
    }
    let len = input[1] as usize;
    if len == 0 || len > MAX_INTEGER_LEN {
        return Err(malformed("invalid length"));
    }
    let body = input
        .get(2..2 + len)
        .ok_or_else(|| malformed("truncated body"))?;

    if body[0] & 0x80 != 0 {
        return Err(malformed("negative value"));
    }
    if len > 1 && body[0] == 0x00 && body[1] & 0x80 == 0 {
        return Err(malformed("non-minimal encoding"));
    }

    Ok((BigUint::from_bytes_be(body), &input[2 + len..]))
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature {{ r = {:X}, s = {:X} }}", self.r, self.s)
    }
}

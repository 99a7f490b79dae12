//! Uniform scalar sampling from an injected random source

use k1curve_api::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

/// Draw a scalar uniformly from `[1, n-1]` by rejection sampling
///
/// Each attempt fills `ceil(bits(n) / 8)` bytes from `rng`, masks the bits
/// above `bits(n)` in the leading byte and reads the buffer big-endian.
/// Candidates equal to zero or not below `n` are discarded.
pub fn random_scalar<R: CryptoRng + RngCore>(rng: &mut R, n: &BigUint) -> Result<BigUint> {
    if n <= &BigUint::from(1u32) {
        return Err(Error::param(
            "random scalar",
            "the upper bound must be at least 2",
        ));
    }

    let bits = n.bits();
    let len = ((bits + 7) / 8) as usize;
    let excess = (len as u64) * 8 - bits;
    let mask = 0xFFu8 >> excess;

    let mut buf = vec![0u8; len];
    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= mask;
        let candidate = BigUint::from_bytes_be(&buf);
        if !candidate.is_zero() && &candidate < n {
            return Ok(candidate);
        }
    }
}

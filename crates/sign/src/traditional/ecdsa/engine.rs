//! ECDSA over any set of domain parameters
//!
//! The engine borrows a [`DomainParameters`] and runs the textbook
//! algorithm on it. It is what the secp256k1 functions use, and it lets the
//! same code be driven over toy domains where the rare branches of the
//! signing loop can actually be reached.

use super::common::Signature;
use k1curve_algorithms::error::{KeyResult, Result, ResultExt};
use k1curve_algorithms::{hash_message, DomainParameters, Point};
use k1curve_api::error::SignatureResult;
use k1curve_common::{mod_inv, random_scalar};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

/// ECDSA bound to a set of domain parameters
#[derive(Clone, Copy, Debug)]
pub struct Ecdsa<'a> {
    domain: &'a DomainParameters,
}

impl<'a> Ecdsa<'a> {
    /// Bind the algorithm to `domain`.
    pub fn new(domain: &'a DomainParameters) -> Self {
        Ecdsa { domain }
    }

    /// The domain parameters in use
    pub fn domain(&self) -> &'a DomainParameters {
        self.domain
    }

    /// Draw a private key d uniformly from `[1, n-1]`.
    pub fn generate_private_key<R: CryptoRng + RngCore>(&self, rng: &mut R) -> KeyResult<BigUint> {
        random_scalar(rng, self.domain.order())
    }

    /// Q = d·G, failing with `OutOfRangeScalar` unless d is in `[1, n-1]`.
    pub fn public_key(&self, d: &BigUint) -> KeyResult<Point> {
        self.domain.public_key(d)
    }

    /// Sign the message representative `z` with private key `d`.
    ///
    /// `z` is used as given, without reduction modulo n. A fresh nonce is
    /// drawn from `rng` until r and s are both nonzero (and, on a domain
    /// whose order is not prime, until the nonce is invertible). The
    /// returned signature always satisfies the Low-S rule s ≤ n/2.
    pub fn sign<R: CryptoRng + RngCore>(
        &self,
        d: &BigUint,
        z: &BigUint,
        rng: &mut R,
    ) -> SignatureResult<Signature> {
        let n = self.domain.order();
        self.domain.check_scalar("ECDSA sign", d)?;

        loop {
            // k ∈ [1, n-1]
            let k = random_scalar(rng, n)?;

            // r = (k·G).x mod n
            let r = match self.domain.multiply_generator(&k)?.x() {
                Some(x) => x.value() % n,
                None => continue,
            };
            if r.is_zero() {
                continue;
            }

            let k_inv = match mod_inv(&k, n) {
                Some(inv) => inv,
                None => continue,
            };

            // s = k⁻¹(z + r·d) mod n
            let s = (k_inv * ((z + &r * d) % n)) % n;
            if s.is_zero() {
                continue;
            }

            return Ok(Signature::new(r, s).normalize_s(n));
        }
    }

    /// Verify `signature` over `z` against public key `q`.
    ///
    /// Total over its inputs: out-of-range components, a public key that is
    /// infinity or not on the curve, and a failed equation all give
    /// `false`. High-S signatures are accepted.
    pub fn verify(&self, q: &Point, z: &BigUint, signature: &Signature) -> bool {
        self.check_equation(q, z, signature).or_reject()
    }

    /// Hash `message` with SHA-256 and sign the digest.
    pub fn sign_message<R: CryptoRng + RngCore>(
        &self,
        d: &BigUint,
        message: &str,
        rng: &mut R,
    ) -> SignatureResult<Signature> {
        self.sign(d, &hash_message(message), rng)
    }

    /// Hash `message` with SHA-256 and verify the signature over the digest.
    pub fn verify_message(&self, q: &Point, message: &str, signature: &Signature) -> bool {
        self.verify(q, &hash_message(message), signature)
    }

    fn check_equation(&self, q: &Point, z: &BigUint, signature: &Signature) -> Result<bool> {
        let n = self.domain.order();
        let (r, s) = (signature.r(), signature.s());

        if r.is_zero() || r >= n || s.is_zero() || s >= n {
            return Ok(false);
        }
        if q.is_infinity() {
            return Ok(false);
        }

        let w = match mod_inv(s, n) {
            Some(w) => w,
            None => return Ok(false),
        };
        let u1 = (z * &w) % n;
        let u2 = (r * &w) % n;

        // P = u1·G + u2·Q
        let curve = self.domain.curve();
        let p = curve.add(
            &self.domain.multiply_generator(&u1)?,
            &curve.multiply(&u2, q)?,
        )?;

        Ok(match p.x() {
            Some(x) => &(x.value() % n) == r,
            None => false,
        })
    }
}

//! ECDSA over secp256k1
//!
//! Free functions bound to the process-wide secp256k1 domain, and the
//! [`Secp256k1Ecdsa`] scheme for callers that work through the
//! [`k1curve_api::Signature`] trait.
//!
//! Algorithm (sign):
//! 1. z = SHA-256(message) as an integer, not reduced modulo n
//! 2. Draw k uniformly from [1, n-1]
//! 3. (x₁, y₁) = k·G; r = x₁ mod n; if r = 0, go back to step 2
//! 4. s = k⁻¹(z + rd) mod n; if s = 0, go back to step 2
//! 5. If s > n/2, replace s by n - s
//! 6. Return signature (r, s)

use super::common::Signature;
use super::engine::Ecdsa;
use k1curve_algorithms::error::{validate, KeyResult};
use k1curve_algorithms::{hash_bytes, secp256k1, Point};
use k1curve_api::{error::SignatureResult, Result as ApiResult, Signature as SignatureTrait};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

pub use k1curve_algorithms::hash_message;

/// Size of a secp256k1 private key in bytes
pub const SECRET_KEY_SIZE: usize = secp256k1::FIELD_ELEMENT_SIZE;

/// The ECDSA engine bound to secp256k1
pub fn engine() -> Ecdsa<'static> {
    Ecdsa::new(secp256k1::params())
}

/// Draw a private key d uniformly from `[1, n-1]`.
pub fn generate_private_key<R: CryptoRng + RngCore>(rng: &mut R) -> KeyResult<BigUint> {
    engine().generate_private_key(rng)
}

/// Q = d·G, failing with `OutOfRangeScalar` unless d is in `[1, n-1]`.
pub fn get_public_key(d: &BigUint) -> KeyResult<Point> {
    secp256k1::get_public_key(d)
}

/// Sign the message representative `z` with private key `d`.
pub fn sign<R: CryptoRng + RngCore>(
    d: &BigUint,
    z: &BigUint,
    rng: &mut R,
) -> SignatureResult<Signature> {
    engine().sign(d, z, rng)
}

/// Verify a signature over `z` against public key `q`.
pub fn verify(q: &Point, z: &BigUint, signature: &Signature) -> bool {
    engine().verify(q, z, signature)
}

/// Hash a text message and sign it.
pub fn sign_message<R: CryptoRng + RngCore>(
    d: &BigUint,
    message: &str,
    rng: &mut R,
) -> SignatureResult<Signature> {
    engine().sign_message(d, message, rng)
}

/// Hash a text message and verify a signature over it.
pub fn verify_message(q: &Point, message: &str, signature: &Signature) -> bool {
    engine().verify_message(q, message, signature)
}

/// secp256k1 private key
///
/// Holds the scalar d ∈ [1, n-1] as 32 big-endian bytes, which are wiped
/// on drop. The bytes are not exposed; equality is constant-time.
#[derive(Clone)]
pub struct PrivateKey {
    bytes: [u8; SECRET_KEY_SIZE],
}

impl PrivateKey {
    /// Wrap a scalar, requiring d in `[1, n-1]`.
    pub fn from_scalar(d: &BigUint) -> KeyResult<Self> {
        validate::scalar_range("PrivateKey", d, secp256k1::order())?;

        let be = d.to_bytes_be();
        let mut bytes = [0u8; SECRET_KEY_SIZE];
        bytes[SECRET_KEY_SIZE - be.len()..].copy_from_slice(&be);
        Ok(PrivateKey { bytes })
    }

    /// Parse 32 big-endian bytes, requiring the value in `[1, n-1]`.
    pub fn from_bytes(bytes: &[u8]) -> KeyResult<Self> {
        validate::length("PrivateKey", bytes.len(), SECRET_KEY_SIZE)?;
        Self::from_scalar(&BigUint::from_bytes_be(bytes))
    }

    /// Draw a fresh private key.
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> KeyResult<Self> {
        Self::from_scalar(&generate_private_key(rng)?)
    }

    /// The scalar d
    ///
    /// The returned integer is an ordinary heap value and is not wiped.
    pub fn scalar(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// The public point Q = d·G
    pub fn public_key(&self) -> KeyResult<Point> {
        get_public_key(&self.scalar())
    }
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

// Secure cleanup on drop
impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes[..].ct_eq(&other.bytes[..]).into()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// ECDSA over secp256k1 with SHA-256 message hashing
pub struct Secp256k1Ecdsa;

impl SignatureTrait for Secp256k1Ecdsa {
    type PublicKey = Point;
    type SecretKey = PrivateKey;
    type SignatureData = Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "ECDSA-secp256k1"
    }

    /// Generate an ECDSA key pair
    ///
    /// Draws d ∈ [1, n-1] and computes Q = d·G.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let secret_key = PrivateKey::generate(rng)?;
        let public_key = secret_key.public_key()?;
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign<R: CryptoRng + RngCore>(
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        engine().sign(&secret_key.scalar(), &hash_bytes(message), rng)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> bool {
        engine().verify(public_key, &hash_bytes(message), signature)
    }
}

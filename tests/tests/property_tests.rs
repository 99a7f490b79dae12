//! Property-based tests for the field, the group law and ECDSA

use k1curve_algorithms::{hash_bytes, hash_message, secp256k1, FieldElement, Point};
use k1curve_sign::k256;
use num_bigint::BigUint;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

/// A private key in [1, n-1] built from 32 arbitrary bytes
fn private_key() -> impl Strategy<Value = BigUint> {
    any::<[u8; 32]>().prop_map(|bytes| {
        let n = secp256k1::order();
        BigUint::from_bytes_be(&bytes) % (n - 1u32) + 1u32
    })
}

fn field_element() -> impl Strategy<Value = FieldElement> {
    any::<[u8; 32]>().prop_map(|bytes| secp256k1::curve().element(BigUint::from_bytes_be(&bytes)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn ecdsa_roundtrip(
        d in private_key(),
        message in ".{0,64}",
        seed in any::<u64>()
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let q = k256::get_public_key(&d).unwrap();
        let z = hash_message(&message);

        let signature = k256::sign(&d, &z, &mut rng).unwrap();
        prop_assert!(k256::verify(&q, &z, &signature));
        prop_assert!(signature.is_low_s(secp256k1::order()));
    }

    #[test]
    fn ecdsa_rejects_flipped_message_bit(
        d in private_key(),
        message in prop::collection::vec(any::<u8>(), 1..64),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
        seed in any::<u64>()
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let q = k256::get_public_key(&d).unwrap();
        let signature = k256::sign(&d, &hash_bytes(&message), &mut rng).unwrap();

        let mut tampered = message.clone();
        tampered[index.index(message.len())] ^= 1 << bit;
        prop_assert!(!k256::verify(&q, &hash_bytes(&tampered), &signature));
    }

    #[test]
    fn hash_message_is_big_endian_sha256(message in ".{0,128}") {
        let digest = Sha256::digest(message.as_bytes());
        prop_assert_eq!(hash_message(&message), BigUint::from_bytes_be(&digest));
    }

    #[test]
    fn field_laws(a in field_element(), b in field_element(), c in field_element()) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        prop_assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
        prop_assert_eq!(
            a.add(&b).unwrap().add(&c).unwrap(),
            a.add(&b.add(&c).unwrap()).unwrap()
        );
        prop_assert_eq!(
            a.mul(&b).unwrap().mul(&c).unwrap(),
            a.mul(&b.mul(&c).unwrap()).unwrap()
        );
        if !a.is_zero() {
            prop_assert!(a.mul(&a.inverse().unwrap()).unwrap().is_one());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn scalar_multiplication_is_linear(k1 in private_key(), k2 in private_key()) {
        let curve = secp256k1::curve();
        let g = secp256k1::generator();
        let p1 = curve.multiply(&k1, g).unwrap();
        let p2 = curve.multiply(&k2, g).unwrap();

        prop_assert_eq!(curve.multiply(&(&k1 + &k2), g).unwrap(), curve.add(&p1, &p2).unwrap());
        prop_assert_eq!(curve.add(&p1, &Point::Infinity).unwrap(), p1.clone());
        prop_assert_eq!(curve.add(&p1, &curve.negate(&p1)).unwrap(), Point::Infinity);
    }
}

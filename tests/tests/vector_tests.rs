//! Known-answer tests against published secp256k1 vectors

use k1curve_algorithms::{hash_message, secp256k1, Point};
use k1curve_sign::{k256, Signature};
use k1curve_tests::vectors::SECP256K1_MULTIPLES;
use k1curve_tests::{biguint, secp256k1_point};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

#[test]
fn test_generator_multiples() {
    let curve = secp256k1::curve();
    let g = secp256k1::generator();

    for vector in SECP256K1_MULTIPLES {
        let k = biguint(vector.k);
        let expected = secp256k1_point(vector.x, vector.y);
        assert_eq!(curve.multiply(&k, g).unwrap(), expected, "k = {}", vector.k);
        assert_eq!(k256::get_public_key(&k).unwrap(), expected, "k = {}", vector.k);
    }
}

#[test]
fn test_multiples_encode_as_sec1() {
    let curve = secp256k1::curve();
    let size = secp256k1::FIELD_ELEMENT_SIZE;

    for vector in SECP256K1_MULTIPLES {
        let point = secp256k1_point(vector.x, vector.y);
        let encoded = point.to_uncompressed(size).unwrap();
        let expected = hex::decode(format!("04{}{}", vector.x, vector.y)).unwrap();
        assert_eq!(encoded, expected);
        assert_eq!(curve.point_from_uncompressed(&encoded, size).unwrap(), point);
    }
}

#[test]
fn test_hash_message_vectors() {
    assert_eq!(
        hash_message("abc"),
        biguint("BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD")
    );
    assert_eq!(
        hash_message(""),
        biguint("E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855")
    );
    let digest = Sha256::digest("hello".as_bytes());
    assert_eq!(hash_message("hello").to_bytes_be(), digest.to_vec());
}

#[test]
fn test_signatures_survive_json() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let d = k256::generate_private_key(&mut rng).unwrap();
    let q = k256::get_public_key(&d).unwrap();
    let signature = k256::sign_message(&d, "json", &mut rng).unwrap();

    let signature: Signature =
        serde_json::from_str(&serde_json::to_string(&signature).unwrap()).unwrap();
    let q: Point = serde_json::from_str(&serde_json::to_string(&q).unwrap()).unwrap();
    assert!(k256::verify_message(&q, "json", &signature));
}

#[test]
fn test_tampered_json_point_is_reduced_not_trusted() {
    // A y-coordinate shifted by p still names G once reduced
    let g = secp256k1::generator();
    let json = serde_json::to_string(g).unwrap();
    let mut raw: serde_json::Value = serde_json::from_str(&json).unwrap();
    let y = &mut raw["Affine"]["y"]["value"];
    let shifted = g.y().unwrap().value() + secp256k1::curve().p();
    *y = serde_json::to_value(shifted).unwrap();

    let point: Point = serde_json::from_value(raw).unwrap();
    assert_eq!(&point, g);
}

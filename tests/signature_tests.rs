//! Integration tests for ECDSA over secp256k1

use k1curve::prelude::*;
use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_secp256k1_signature() {
    let mut rng = OsRng;

    // Generate keypair
    let (public_key, secret_key) = Secp256k1Ecdsa::keypair(&mut rng).unwrap();

    // Message to sign
    let message = b"Test message for secp256k1 signature";

    // Sign the message
    let signature = Secp256k1Ecdsa::sign(message, &secret_key, &mut rng).unwrap();

    // Verify the signature
    assert!(Secp256k1Ecdsa::verify(message, &signature, &public_key));

    // Try with a modified message
    let modified_message = b"Modified message that should not verify";
    assert!(!Secp256k1Ecdsa::verify(modified_message, &signature, &public_key));
}

#[test]
fn test_free_function_flow() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);

    let d = k256::generate_private_key(&mut rng).unwrap();
    let q = k256::get_public_key(&d).unwrap();
    assert!(secp256k1::curve().is_on_curve(&q));

    let z = hash_message("Hello, secp256k1");
    let signature = k256::sign(&d, &z, &mut rng).unwrap();
    assert!(k256::verify(&q, &z, &signature));
    assert!(signature.is_low_s(secp256k1::order()));
}

#[test]
fn test_signature_survives_encoding() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let d = k256::generate_private_key(&mut rng).unwrap();
    let q = k256::get_public_key(&d).unwrap();
    let signature = k256::sign_message(&d, "encode me", &mut rng).unwrap();

    // Signature through DER, public key through SEC1
    let der = signature.to_der().unwrap();
    let sec1 = q.to_uncompressed(secp256k1::FIELD_ELEMENT_SIZE).unwrap();
    assert_eq!(sec1.len(), secp256k1::POINT_UNCOMPRESSED_SIZE);

    let signature = Signature::from_der(&der).unwrap();
    let q = secp256k1::curve()
        .point_from_uncompressed(&sec1, secp256k1::FIELD_ELEMENT_SIZE)
        .unwrap();
    assert!(k256::verify_message(&q, "encode me", &signature));
}

#[test]
fn test_invalid_signatures_are_false_not_errors() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let d = k256::generate_private_key(&mut rng).unwrap();
    let q = k256::get_public_key(&d).unwrap();
    let z = hash_message("total");
    let n = secp256k1::order();

    let garbage = [
        Signature::new(BigUint::from(0u32), BigUint::from(0u32)),
        Signature::new(BigUint::from(1u32), BigUint::from(1u32)),
        Signature::new(n.clone(), BigUint::from(1u32)),
        Signature::new(n - 1u32, n - 1u32),
    ];
    for signature in garbage.iter() {
        assert!(!k256::verify(&q, &z, signature));
    }

    // A public key from a toy curve is rejected rather than reported
    let foreign = k1curve::algorithms::ec::toy::f17_generator().unwrap();
    let signature = k256::sign(&d, &z, &mut rng).unwrap();
    assert!(!k256::verify(&foreign, &z, &signature));
    assert!(!k256::verify(&Point::Infinity, &z, &signature));
}

#[test]
fn test_out_of_range_private_keys() {
    let n = secp256k1::order();
    let mut rng = ChaCha20Rng::seed_from_u64(12);
    let z = hash_message("range");

    assert!(matches!(
        k256::get_public_key(&BigUint::from(0u32)),
        Err(Error::OutOfRangeScalar { .. })
    ));
    assert!(matches!(
        k256::get_public_key(n),
        Err(Error::OutOfRangeScalar { .. })
    ));
    assert!(matches!(
        k256::sign(&(n + 5u32), &z, &mut rng),
        Err(Error::OutOfRangeScalar { .. })
    ));
    assert!(k256::get_public_key(&(n - 1u32)).is_ok());
}

#[test]
fn test_generic_engine_matches_secp256k1_functions() {
    let ecdsa = Ecdsa::new(secp256k1::params());
    let d = BigUint::from(123_456_789u32);
    let z = hash_message("same engine");

    let a = ecdsa.sign(&d, &z, &mut ChaCha20Rng::seed_from_u64(1)).unwrap();
    let b = k256::sign(&d, &z, &mut ChaCha20Rng::seed_from_u64(1)).unwrap();
    assert_eq!(a, b);
    assert!(ecdsa.verify(&k256::get_public_key(&d).unwrap(), &z, &a));
}

//! EdDSA through the public facade, the way a host packet library drives it

use gpgext::prelude::*;
use gpgext_tests::enable_tracing;
use gpgext_tests::vectors::{self, bytes, mpi, public_key_body, rfc8032_test1};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn eddsa() -> &'static dyn PublicKeyAlgorithm {
    Registries::with_gnupg_extensions()
        .algorithms
        .require(22)
        .unwrap()
}

fn rfc_public_key() -> PublicKey {
    let body = public_key_body(0x40, &bytes(rfc8032_test1::PUBLIC_KEY));
    let (public_key, _) = eddsa().parse_public_key(&mut body.as_slice()).unwrap();
    public_key
}

fn rfc_private_key() -> PrivateKey {
    let seed_field = mpi(&bytes(rfc8032_test1::SECRET_KEY));
    eddsa().parse_private_key(&seed_field, &rfc_public_key()).unwrap()
}

#[test]
fn test_public_key_packet_round_trip() {
    enable_tracing();

    let body = public_key_body(0x40, &bytes(rfc8032_test1::PUBLIC_KEY));
    let mut reader = body.as_slice();
    let (public_key, fields) = eddsa().parse_public_key(&mut reader).unwrap();
    assert!(reader.is_empty());

    assert_eq!(
        public_key.as_ed25519().unwrap().as_bytes().to_vec(),
        bytes(rfc8032_test1::PUBLIC_KEY)
    );
    assert_eq!(eddsa().bit_length(&public_key).unwrap(), 32);

    // The wire fields come back untouched for fingerprinting
    let mut rewritten = Vec::new();
    gpgext::api::encoding::write_fields(&mut rewritten, &fields).unwrap();
    assert_eq!(rewritten, body);

    let mut serialized = Vec::new();
    let written = eddsa().serialize_public_key(&mut serialized, &public_key).unwrap();
    assert_eq!(written, body.len());
    assert_eq!(serialized, body);
}

#[test]
fn test_rfc8032_signature_verifies() {
    let signature = bytes(rfc8032_test1::SIGNATURE);
    let fields = vec![
        Field::Mpi(Mpi::new(&signature[..32]).unwrap()),
        Field::Mpi(Mpi::new(&signature[32..]).unwrap()),
    ];

    eddsa()
        .verify(&rfc_public_key(), HashAlgorithm::Sha256, rfc8032_test1::MESSAGE, &fields)
        .unwrap();
}

#[test]
fn test_rfc8032_signature_is_reproduced() {
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    let fields = eddsa()
        .sign(&mut rng, &rfc_private_key(), HashAlgorithm::Sha256, rfc8032_test1::MESSAGE)
        .unwrap();

    let mut raw = Vec::new();
    for field in &fields {
        let mut slot = [0u8; 32];
        slot[32 - field.bytes().len()..].copy_from_slice(field.bytes());
        raw.extend_from_slice(&slot);
    }
    assert_eq!(hex::encode(raw), rfc8032_test1::SIGNATURE);
}

#[test]
fn test_signature_packet_parse_and_verify() {
    let signature = bytes(rfc8032_test1::SIGNATURE);
    let mut packet = mpi(&signature[..32]);
    packet.extend_from_slice(&mpi(&signature[32..]));

    let fields = eddsa().parse_signature(&mut packet.as_slice()).unwrap();
    assert_eq!(fields.len(), 2);
    eddsa()
        .verify(&rfc_public_key(), HashAlgorithm::Sha512, b"", &fields)
        .unwrap();

    // Truncated S
    let err = eddsa()
        .parse_signature(&mut &packet[..packet.len() - 1])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedEncoding);
}

#[test]
fn test_secret_key_packet_round_trip() {
    let private_key = rfc_private_key();
    let secret = private_key.as_ed25519().unwrap();
    assert_eq!(secret.seed().to_vec(), bytes(rfc8032_test1::SECRET_KEY));
    assert_eq!(secret.public_key(), *rfc_public_key().as_ed25519().unwrap());

    let mut out = Vec::new();
    eddsa().serialize_private_key(&mut out, &private_key).unwrap();
    assert_eq!(out, mpi(&bytes(rfc8032_test1::SECRET_KEY)));
}

#[test]
fn test_point_markers() {
    let point = bytes(rfc8032_test1::PUBLIC_KEY);

    let err = eddsa()
        .parse_public_key(&mut public_key_body(0x04, &point).as_slice())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unimplemented);

    for marker in [0x00u8, 0x02, 0x03, 0x41, 0xff] {
        let err = eddsa()
            .parse_public_key(&mut public_key_body(marker, &point).as_slice())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "marker {:#04x}", marker);
    }
}

#[test]
fn test_foreign_curve_oid() {
    let point = bytes(rfc8032_test1::PUBLIC_KEY);
    for i in 1..vectors::ED25519_OID_FIELD.len() {
        let mut body = public_key_body(0x40, &point);
        body[i] ^= 0x01;
        let err = eddsa().parse_public_key(&mut body.as_slice()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_encryption_is_refused() {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let eddsa = eddsa();
    assert!(!eddsa.can_encrypt());

    let err = eddsa
        .encrypt(&mut rng, &rfc_public_key(), b"session key", &[0u8; 20])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = eddsa
        .decrypt(&mut rng, &rfc_private_key(), &[], &[0u8; 20])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);

    let err = eddsa.parse_encrypted_key(&mut &[0u8; 4][..]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
}

#[test]
fn test_scheme_and_adapter_agree() {
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    let (public_key, secret_key) = Ed25519::keypair(&mut rng).unwrap();
    let message = b"Test message for Ed25519 signature";

    let signature = Ed25519::sign(message, &secret_key).unwrap();
    let fields = vec![
        Field::Mpi(Mpi::new(&signature.0[..32]).unwrap()),
        Field::Mpi(Mpi::new(&signature.0[32..]).unwrap()),
    ];
    eddsa()
        .verify(&PublicKey::from(public_key), HashAlgorithm::Sha256, message, &fields)
        .unwrap();
}

proptest! {
    #[test]
    fn sign_then_verify(seed in any::<[u8; 32]>(), message in proptest::collection::vec(any::<u8>(), 0..256)) {
        let (public_key, secret_key) = Ed25519::derive_keypair(&seed).unwrap();
        let public_key = PublicKey::from(public_key);
        let private_key = PrivateKey::from(secret_key);
        let mut rng = ChaCha20Rng::from_seed(seed);

        let fields = eddsa().sign(&mut rng, &private_key, HashAlgorithm::Sha256, &message).unwrap();
        prop_assert!(eddsa().verify(&public_key, HashAlgorithm::Sha256, &message, &fields).is_ok());

        let mut tampered = message.clone();
        tampered.push(0);
        let err = eddsa().verify(&public_key, HashAlgorithm::Sha256, &tampered, &fields).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::SignatureInvalid);
    }

    #[test]
    fn private_key_round_trip(seed in any::<[u8; 32]>()) {
        let (public_key, _) = Ed25519::derive_keypair(&seed).unwrap();
        let public_key = PublicKey::from(public_key);

        let field = mpi(&seed);
        let private_key = eddsa().parse_private_key(&field, &public_key).unwrap();
        let mut out = Vec::new();
        eddsa().serialize_private_key(&mut out, &private_key).unwrap();
        prop_assert_eq!(out, field);
    }
}

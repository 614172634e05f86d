//! GNU S2K extensions through the public facade

use std::sync::Arc;
use std::thread;

use gpgext::prelude::*;
use gpgext::s2k::DivertToCard;
use gpgext_tests::vectors::{bytes, public_key_body, rfc8032_test1};
use gpgext_tests::{enable_tracing, SoftCard};

const SERIAL: [u8; 16] = [
    0xd2, 0x76, 0x00, 0x01, 0x24, 0x01, 0x03, 0x04, 0x00, 0x05, 0x00, 0x00, 0x53, 0x1f, 0x00, 0x00,
];

fn divert_record(hash: u8, serial: &[u8]) -> Vec<u8> {
    let mut record = vec![hash, b'G', b'N', b'U', 0x02];
    record.extend_from_slice(serial);
    record
}

#[test]
fn test_dummy_specifier() {
    enable_tracing();
    let registries = Registries::with_gnupg_extensions();

    let mut reader: &[u8] = &[0x01, b'G', b'N', b'U', 0x01];
    let s2k = registries.parse_s2k(0x65, &mut reader).unwrap();
    assert!(s2k.is_dummy());
    assert_eq!(s2k.id(), 0x65);
    assert!(s2k.setup_iv(16).unwrap().is_empty());

    let mut key = [0u8; 32];
    assert_eq!(
        s2k.convert(&mut key, b"passphrase").unwrap_err().kind(),
        ErrorKind::Unsupported
    );

    let mut out = Vec::new();
    assert_eq!(s2k.write_to(&mut out).unwrap(), 5);
    assert_eq!(out, [0x65, 0x01, b'G', b'N', b'U']);
}

#[test]
fn test_divert_to_card_round_trip() {
    let registries = Registries::with_gnupg_extensions();
    registries
        .agents
        .register(&[0xaa, 0xbb], Arc::new(SoftCard::new(b"123456", &[0; 32])))
        .unwrap();

    let input = [0x01, b'G', b'N', b'U', 0x02, 0xaa, 0xbb];
    let s2k = registries.parse_s2k(0x65, &mut &input[..]).unwrap();
    assert!(!s2k.is_dummy());

    let mut out = Vec::new();
    s2k.write_to(&mut out).unwrap();
    assert_eq!(out[0], 0x65);
    assert_eq!(&out[1..], &input[..]);
}

#[test]
fn test_card_unlocks_signing_key() {
    enable_tracing();
    let registries = Registries::with_gnupg_extensions();
    let card = Arc::new(SoftCard::new(b"123456", &bytes(rfc8032_test1::SECRET_KEY)));
    registries.agents.register(&SERIAL, card.clone()).unwrap();

    let eddsa = registries.algorithms.require(22).unwrap();
    let body = public_key_body(0x40, &bytes(rfc8032_test1::PUBLIC_KEY));
    let (public_key, _) = eddsa.parse_public_key(&mut body.as_slice()).unwrap();

    let record = divert_record(0x08, &SERIAL);
    let s2k = registries.parse_s2k(0x65, &mut record.as_slice()).unwrap();

    let mut seed = [0u8; 32];
    let err = s2k.convert(&mut seed, b"000000").unwrap_err();
    assert_eq!(err, Error::invalid_argument("soft card", "bad PIN"));
    assert_eq!(seed, [0u8; 32]);

    s2k.convert(&mut seed, b"123456").unwrap();
    assert_eq!(card.extractions(), 1);

    let secret_key = Ed25519SecretKey::from_parts(&seed, public_key.as_ed25519().unwrap());
    let private_key = PrivateKey::from(secret_key);

    let mut rng = rand::rngs::OsRng;
    let fields = eddsa
        .sign(&mut rng, &private_key, HashAlgorithm::Sha256, b"signed on card")
        .unwrap();
    eddsa
        .verify(&public_key, HashAlgorithm::Sha256, b"signed on card", &fields)
        .unwrap();
}

#[test]
fn test_wrong_key_size_from_card() {
    let registries = Registries::with_gnupg_extensions();
    registries
        .agents
        .register(&SERIAL, Arc::new(SoftCard::new(b"", &[0x42; 64])))
        .unwrap();

    let record = divert_record(0x02, &SERIAL);
    let s2k = registries.parse_s2k(0x65, &mut record.as_slice()).unwrap();

    let mut key = [0x17u8; 32];
    assert_eq!(s2k.convert(&mut key, b"").unwrap_err().kind(), ErrorKind::Unsupported);
    assert_eq!(key, [0x17u8; 32]);

    let mut key = [0x17u8; 64];
    s2k.convert(&mut key, b"").unwrap();
    assert_eq!(key, [0x42u8; 64]);
}

#[test]
fn test_unknown_card() {
    let registries = Registries::with_gnupg_extensions();
    let record = divert_record(0x02, &SERIAL);
    let err = registries
        .parse_s2k(0x65, &mut record.as_slice())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
}

#[test]
fn test_divert_iv_is_unimplemented() {
    let registries = Registries::with_gnupg_extensions();
    registries
        .agents
        .register(&SERIAL, Arc::new(SoftCard::new(b"", &[0; 32])))
        .unwrap();

    let record = divert_record(0x02, &SERIAL);
    let s2k = registries.parse_s2k(0x65, &mut record.as_slice()).unwrap();
    assert_eq!(s2k.setup_iv(16).unwrap_err().kind(), ErrorKind::Unimplemented);
}

#[test]
fn test_malformed_headers() {
    let registries = Registries::with_gnupg_extensions();

    let cases: [(&[u8], ErrorKind); 5] = [
        (&[0x02, b'G', b'N'], ErrorKind::MalformedEncoding),
        (&[0x02, b'G', b'P', b'G', 0x01], ErrorKind::MalformedEncoding),
        (&[0x63, b'G', b'N', b'U', 0x01], ErrorKind::Unsupported),
        (&[0x02, b'G', b'N', b'U', 0x03], ErrorKind::Unsupported),
        (&[], ErrorKind::MalformedEncoding),
    ];

    for (input, kind) in cases {
        let err = registries.parse_s2k(0x65, &mut &input[..]).unwrap_err();
        assert_eq!(err.kind(), kind, "input {}", hex::encode(input));
    }

    // Iterated and salted S2K belongs to the host, not to this library
    let err = registries.parse_s2k(3, &mut &[0x08u8][..]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
}

#[test]
fn test_registries_are_independent() {
    let first = Registries::with_gnupg_extensions();
    let second = Registries::with_gnupg_extensions();
    first
        .agents
        .register(&[0x01], Arc::new(SoftCard::new(b"", &[0; 32])))
        .unwrap();

    assert!(first.agents.lookup(&[0x01]).is_some());
    assert!(second.agents.lookup(&[0x01]).is_none());
    second
        .agents
        .register(&[0x01], Arc::new(SoftCard::new(b"", &[0; 32])))
        .unwrap();
}

#[test]
fn test_duplicate_card_serial() {
    let agents = CardAgentRegistry::new();
    let card: Arc<dyn CardAgent> = Arc::new(SoftCard::new(b"", &[0; 32]));

    assert!(agents.lookup(&[0x01]).is_none());
    agents.register(&[0x01], card.clone()).unwrap();
    assert_eq!(
        agents.register(&[0x01], card).unwrap_err().kind(),
        ErrorKind::Unsupported
    );
    assert_eq!(
        agents
            .register(&[0x01], Arc::new(SoftCard::new(b"", &[0; 32])))
            .unwrap_err()
            .kind(),
        ErrorKind::Unsupported
    );
}

#[test]
fn test_parse_while_registering() {
    let registries = Registries::with_gnupg_extensions();

    thread::scope(|scope| {
        for t in 0u8..4 {
            let registries = &registries;
            scope.spawn(move || {
                for i in 0u8..16 {
                    let serial = [t, i];
                    registries
                        .agents
                        .register(&serial, Arc::new(SoftCard::new(b"", &[t; 32])))
                        .unwrap();

                    let record = divert_record(0x08, &serial);
                    let s2k = registries.parse_s2k(0x65, &mut record.as_slice()).unwrap();
                    let mut key = [0u8; 32];
                    s2k.convert(&mut key, b"").unwrap();
                    assert_eq!(key, [t; 32]);
                }
            });
        }
    });

    assert_eq!(registries.agents.len(), 64);
}

#[test]
fn test_global_registry() {
    let serial = b"global-registry-test-card";
    let agents = CardAgentRegistry::global();
    agents
        .register(serial, Arc::new(SoftCard::new(b"", &[9; 32])))
        .unwrap();

    let extensions = ExtensionTable::with_gnupg_extensions();
    let record = divert_record(0x08, serial);
    let extension =
        gpgext::s2k::parse_gnu_extension(&mut record.as_slice(), &extensions, agents).unwrap();

    let divert: &DivertToCard = extension.as_divert_to_card().unwrap();
    assert_eq!(divert.serial(), serial);
    assert_eq!(extension.specifier(), ExtensionSpecifier::DivertToCard);
}

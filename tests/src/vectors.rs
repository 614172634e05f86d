//! Known-answer data

/// RFC 8032 section 7.1, TEST 1 (empty message)
pub mod rfc8032_test1 {
    pub const SECRET_KEY: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    pub const PUBLIC_KEY: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    pub const MESSAGE: &[u8] = b"";
    pub const SIGNATURE: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065\
                                 224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24\
                                 655141438e7a100b";
}

/// `2B 06 01 04 01 DA 47 0F 01` with its one-octet length prefix
pub const ED25519_OID_FIELD: [u8; 10] = [0x09, 0x2b, 0x06, 0x01, 0x04, 0x01, 0xda, 0x47, 0x0f, 0x01];

/// Decode a hex constant
pub fn bytes(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).unwrap()
}

/// Algorithm-specific body of an EdDSA public-key packet
pub fn public_key_body(marker: u8, point: &[u8]) -> Vec<u8> {
    let mut body = ED25519_OID_FIELD.to_vec();
    let mut value = vec![marker];
    value.extend_from_slice(point);
    body.extend_from_slice(&mpi(&value));
    body
}

/// Encode `value` as an MPI, dropping leading zero octets
pub fn mpi(value: &[u8]) -> Vec<u8> {
    let trimmed: Vec<u8> = value.iter().copied().skip_while(|&b| b == 0).collect();
    let bits = match trimmed.first() {
        Some(&top) => (trimmed.len() - 1) * 8 + (8 - top.leading_zeros() as usize),
        None => 0,
    };
    let mut out = (bits as u16).to_be_bytes().to_vec();
    out.extend_from_slice(&trimmed);
    out
}

use argon2_phc::{Algorithm, Error, HashParameters, PhcString};

fn params(memory_cost: u32, time_cost: u32, parallelism: u32) -> HashParameters {
    HashParameters {
        memory_cost,
        time_cost,
        parallelism,
        associated_data: Vec::new(),
    }
}

fn assert_malformed(s: &str) {
    match PhcString::decode(s) {
        Err(Error::MalformedDigest(_)) => {}
        other => panic!("expected malformed digest for {s:?}, got {other:?}"),
    }
}

#[test]
fn encodes_fields_in_order() {
    let digest = PhcString::new(
        Algorithm::Argon2id,
        params(65536, 3, 4),
        b"saltsaltsaltsalt".to_vec(),
        b"hashhashhashhash".to_vec(),
    );

    assert_eq!(
        digest.encode(),
        "$argon2id$m=65536,t=3,p=4$c2FsdHNhbHRzYWx0c2FsdA$aGFzaGhhc2hoYXNoaGFzaA"
    );
    assert_eq!(digest.to_string(), digest.encode());
}

#[test]
fn encodes_associated_data_after_costs() {
    let mut p = params(64, 1, 1);
    p.associated_data = vec![0x04; 12];

    let digest = PhcString::new(Algorithm::Argon2i, p, vec![0x02; 16], vec![0xff; 4]);

    assert_eq!(
        digest.encode(),
        "$argon2i$m=64,t=1,p=1,data=BAQEBAQEBAQEBAQE$AgICAgICAgICAgICAgICAg$/////w"
    );
}

#[test]
fn roundtrips_binary_salt_and_hash() {
    let mut p = params(4096, 2, 3);
    p.associated_data = vec![0x00, 0x80, 0xff, 0x00];

    let digest = PhcString::new(
        Algorithm::Argon2d,
        p,
        vec![0x00, 0x00, 0xfe, 0x7f, 0x80, 0x00, 0x01, 0xff, 0x00],
        (0..=255u8).collect(),
    );

    let decoded = PhcString::decode(&digest.encode()).unwrap();
    assert_eq!(decoded, digest);
    assert_eq!(decoded.algorithm(), Some(Algorithm::Argon2d));
}

#[test]
fn roundtrips_version_marker() {
    let mut digest = PhcString::new(
        Algorithm::Argon2id,
        params(64, 1, 1),
        vec![1; 16],
        vec![2; 32],
    );
    digest.version = Some(19);

    let encoded = digest.encode();
    assert!(encoded.starts_with("$argon2id$v=19$m=64,t=1,p=1$"));
    assert_eq!(PhcString::decode(&encoded).unwrap(), digest);
}

#[test]
fn roundtrips_without_salt_or_hash() {
    let digest = PhcString {
        id: "argon2id".to_owned(),
        version: None,
        params: params(64, 1, 1),
        salt: None,
        hash: None,
    };

    assert_eq!(digest.encode(), "$argon2id$m=64,t=1,p=1");
    assert_eq!(PhcString::decode("$argon2id$m=64,t=1,p=1").unwrap(), digest);

    let salted = PhcString {
        salt: Some(vec![9; 8]),
        ..digest
    };
    assert_eq!(PhcString::decode(&salted.encode()).unwrap(), salted);
}

#[test]
fn hash_without_salt_is_not_encoded() {
    let digest = PhcString {
        id: "argon2id".to_owned(),
        version: None,
        params: params(64, 1, 1),
        salt: None,
        hash: Some(vec![1; 16]),
    };

    assert_eq!(digest.encode(), "$argon2id$m=64,t=1,p=1");

    let decoded = PhcString::decode(&digest.encode()).unwrap();
    assert_eq!(decoded.hash, None);
}

#[test]
fn keeps_unknown_ids_verbatim() {
    let decoded: PhcString = "$argon2x$m=1,t=2,p=3$AAAA$AAAA".parse().unwrap();

    assert_eq!(decoded.id, "argon2x");
    assert_eq!(decoded.algorithm(), None);
    assert_eq!(decoded.params, params(1, 2, 3));
    assert_eq!(decoded.salt, Some(vec![0, 0, 0]));
}

#[test]
fn parameter_order_does_not_matter() {
    let decoded = PhcString::decode("$argon2id$p=4,t=3,m=65536$AAAA$AAAA").unwrap();

    assert_eq!(decoded.params, params(65536, 3, 4));
}

#[test]
fn ignores_unknown_parameters() {
    let decoded = PhcString::decode("$argon2id$m=8,keyid=AAAA,t=1,p=1$AAAA$AAAA").unwrap();

    assert_eq!(decoded.params, params(8, 1, 1));
}

#[test]
fn missing_data_means_empty_associated_data() {
    let decoded = PhcString::decode("$argon2id$m=8,t=1,p=1$AAAA$AAAA").unwrap();

    assert!(decoded.params.associated_data.is_empty());
}

#[test]
fn accepts_padded_base64() {
    let padded = PhcString::decode("$argon2id$m=8,t=1,p=1$c2FsdHNhbHQ=$aGFzaA==").unwrap();
    let unpadded = PhcString::decode("$argon2id$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaA").unwrap();

    assert_eq!(padded, unpadded);
    assert_eq!(padded.salt.as_deref(), Some(&b"saltsalt"[..]));
    assert_eq!(padded.hash.as_deref(), Some(&b"hash"[..]));
}

#[test]
fn empty_fields_decode_to_empty_bytes() {
    let decoded = PhcString::decode("$argon2id$m=8,t=1,p=1$$").unwrap();

    assert_eq!(decoded.salt, Some(Vec::new()));
    assert_eq!(decoded.hash, Some(Vec::new()));
}

#[test]
fn rejects_structurally_broken_strings() {
    for s in [
        "",
        "argon2id$m=8,t=1,p=1$AAAA$AAAA",
        "$",
        "$$m=8,t=1,p=1",
        "$argon2id",
        "$argon2id$v=19",
        "$argon2id$$AAAA$AAAA",
        "$argon2id$m=8,t=1,p=1$AAAA$AAAA$AAAA",
    ] {
        assert_malformed(s);
    }
}

#[test]
fn rejects_bad_parameter_blocks() {
    for s in [
        "$argon2id$m=8,t=1$AAAA$AAAA",
        "$argon2id$t=1,p=1$AAAA$AAAA",
        "$argon2id$m=8,t=1,p$AAAA$AAAA",
        "$argon2id$m=,t=1,p=1$AAAA$AAAA",
        "$argon2id$m=+8,t=1,p=1$AAAA$AAAA",
        "$argon2id$m=-8,t=1,p=1$AAAA$AAAA",
        "$argon2id$m=0x10,t=1,p=1$AAAA$AAAA",
        "$argon2id$m=4294967296,t=1,p=1$AAAA$AAAA",
        "$argon2id$v=x$m=8,t=1,p=1$AAAA$AAAA",
        "$argon2id$m=8,t=1,p=1,data=!!$AAAA$AAAA",
    ] {
        assert_malformed(s);
    }
}

#[test]
fn rejects_invalid_base64() {
    assert_malformed("$argon2id$m=8,t=1,p=1$not base64$AAAA");
    assert_malformed("$argon2id$m=8,t=1,p=1$AAAA$A");
}

#[test]
fn accepts_the_largest_costs() {
    let decoded = PhcString::decode("$argon2id$m=4294967295,t=4294967295,p=16777215").unwrap();

    assert_eq!(decoded.params, params(u32::MAX, u32::MAX, (1 << 24) - 1));
}

use argon2_phc::{Algorithm, HashOptions, needs_rehash};

#[test]
fn loads_a_policy_from_toml() {
    let options: HashOptions = toml::from_str(
        r#"
        memory_cost = 32768
        time_cost = 2
        parallelism = 1
        algorithm = "argon2i"
        "#,
    )
    .unwrap();

    assert_eq!(options.memory_cost, Some(32768));
    assert_eq!(options.time_cost, Some(2));
    assert_eq!(options.parallelism, Some(1));
    assert_eq!(options.algorithm, Some(Algorithm::Argon2i));
    assert_eq!(options.hash_length, None);
    assert!(!options.raw);
}

#[test]
fn empty_policy_means_defaults() {
    let options: HashOptions = toml::from_str("").unwrap();
    let digest = "$argon2id$m=65536,t=3,p=4$c2FsdHNhbHRzYWx0c2FsdA$aGFzaA";

    assert!(!needs_rehash(digest, &options).unwrap());
}

#[test]
fn policy_drives_rehash_decisions() {
    let options: HashOptions = toml::from_str("memory_cost = 131072").unwrap();
    let digest = "$argon2id$m=65536,t=3,p=4$c2FsdHNhbHRzYWx0c2FsdA$aGFzaA";

    assert!(needs_rehash(digest, &options).unwrap());
}

#[test]
fn byte_inputs_are_not_configurable() {
    assert!(toml::from_str::<HashOptions>("secret = \"pepper\"").is_err());
    assert!(toml::from_str::<HashOptions>("salt = \"saltsalt\"").is_err());
}

#[test]
fn rejects_unknown_algorithms_and_fields() {
    assert!(toml::from_str::<HashOptions>("algorithm = \"bcrypt\"").is_err());
    assert!(toml::from_str::<HashOptions>("memroy_cost = 1").is_err());
}

#[test]
fn algorithm_names_roundtrip() {
    for algorithm in [Algorithm::Argon2d, Algorithm::Argon2i, Algorithm::Argon2id] {
        assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
    }

    assert!("Argon2id".parse::<Algorithm>().is_err());
    assert_eq!(Algorithm::default(), Algorithm::Argon2id);
}

#[test]
fn debug_output_redacts_secrets() {
    let options = HashOptions {
        secret: Some(b"pepper".to_vec()),
        salt: Some(b"saltsalt".to_vec()),
        ..Default::default()
    };

    let rendered = format!("{options:?}");
    assert!(!rendered.contains("112, 101, 112"));
    assert!(rendered.contains("<redacted>"));
}

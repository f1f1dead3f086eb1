//! Credential loading from files on disk

use crate::common::fixtures::{KEY_PASSWORD, tls_fixture};
use ravendb_exporter::config::{RavenDbConfig, TlsConfig};
use ravendb_exporter::tls::{Credential, CredentialError};
use ravendb_exporter::{ExporterError, RavenDbClient};

fn mutual_tls(key: &str, password: Option<&str>) -> TlsConfig {
    TlsConfig {
        ca_cert: Some(tls_fixture("ca.crt")),
        use_auth: true,
        client_cert: Some(tls_fixture("client.crt")),
        client_key: Some(tls_fixture(key)),
        client_key_password: password.map(str::to_string),
    }
}

#[test]
fn test_no_tls_settings() {
    let credential = Credential::load(&TlsConfig::default()).unwrap();
    assert_eq!(credential.root_count(), 0);
    assert!(!credential.has_identity());
}

#[test]
fn test_ca_only() {
    let config = TlsConfig {
        ca_cert: Some(tls_fixture("ca.crt")),
        ..Default::default()
    };
    let credential = Credential::load(&config).unwrap();
    assert_eq!(credential.root_count(), 1);
    assert!(!credential.has_identity());
}

#[test]
fn test_every_supported_key_format_loads() {
    let cases = [
        ("client-rsa-pkcs1.key", None),
        ("client-rsa-pkcs8.key", None),
        ("client-ec-sec1.key", None),
        ("client-rsa-aes256.key", Some(KEY_PASSWORD)),
        ("client-rsa-des3.key", Some(KEY_PASSWORD)),
        ("client-rsa-pkcs8-encrypted.key", Some(KEY_PASSWORD)),
    ];

    for (key, password) in cases {
        let credential = Credential::load(&mutual_tls(key, password))
            .unwrap_or_else(|e| panic!("{}: {}", key, e));
        assert!(credential.has_identity(), "{}", key);
        assert_eq!(credential.root_count(), 1);
    }
}

#[test]
fn test_encrypted_key_without_password() {
    for password in [None, Some("")] {
        let err = Credential::load(&mutual_tls("client-rsa-aes256.key", password)).unwrap_err();
        assert!(matches!(err, CredentialError::PasswordRequired));
    }
}

#[test]
fn test_encrypted_key_with_wrong_password() {
    let err = Credential::load(&mutual_tls("client-rsa-aes256.key", Some("not-it"))).unwrap_err();
    assert!(matches!(err, CredentialError::IncorrectPassword));
}

#[test]
fn test_certificate_file_without_certificates() {
    let mut config = mutual_tls("client-rsa-pkcs1.key", None);
    config.client_cert = Some(tls_fixture("client-rsa-pkcs1.key"));

    let err = Credential::load(&config).unwrap_err();
    assert!(matches!(err, CredentialError::NoCertificates));
    assert_eq!(err.to_string(), "no certificates found in PEM data");
}

#[test]
fn test_unsupported_key_algorithm() {
    let err = Credential::load(&mutual_tls("client-ed25519.key", None)).unwrap_err();
    assert!(matches!(err, CredentialError::UnsupportedKeyType));
}

#[test]
fn test_missing_file() {
    let mut config = mutual_tls("client-rsa-pkcs1.key", None);
    config.client_key = Some(tls_fixture("does-not-exist.key"));

    let err = Credential::load(&config).unwrap_err();
    assert!(matches!(err, CredentialError::Io { .. }));
    assert!(err.to_string().contains("does-not-exist.key"));
}

#[test]
fn test_auth_without_key_path() {
    let mut config = mutual_tls("client-rsa-pkcs1.key", None);
    config.client_key = None;

    let err = Credential::load(&config).unwrap_err();
    assert!(matches!(err, CredentialError::MissingFile(_)));
}

#[test]
fn test_errors_do_not_leak_password() {
    let err = Credential::load(&mutual_tls("client-rsa-des3.key", Some("hunter2-wrong"))).unwrap_err();
    assert!(!err.to_string().contains("hunter2-wrong"));
    assert!(!format!("{:?}", err).contains("hunter2-wrong"));
}

#[test]
fn test_client_accepts_loaded_credential() {
    let credential = Credential::load(&mutual_tls("client-rsa-pkcs8-encrypted.key", Some(KEY_PASSWORD))).unwrap();
    let config = RavenDbConfig {
        url: "https://raven.example:8443".to_string(),
        ..Default::default()
    };

    let client = RavenDbClient::new(&config, &credential).unwrap();
    assert_eq!(client.base_url(), "https://raven.example:8443");
}

#[test]
fn test_credential_error_converts_to_exporter_error() {
    let err: ExporterError = Credential::load(&mutual_tls("client-ed25519.key", None))
        .unwrap_err()
        .into();
    assert!(matches!(err, ExporterError::Credential(CredentialError::UnsupportedKeyType)));
}

//! Turns CA, certificate and key files into a transport identity

use super::decrypt::{decrypt_block, is_encrypted};
use super::error::CredentialError;
use super::key::{PrivateKey, parse_private_key};
use crate::config::TlsConfig;
use pem::Pem;
use reqwest::{Certificate, ClientBuilder, Identity};
use std::fs;
use tracing::{debug, info};
use zeroize::Zeroizing;

const CERTIFICATE_TAG: &str = "CERTIFICATE";

/// Trust roots and client identity shared by every request.
///
/// Loaded once at startup and only read afterwards.
#[derive(Clone, Default)]
pub struct Credential {
    roots: Vec<Certificate>,
    identity: Option<Identity>,
}

impl Credential {
    /// Load the credential described by the TLS configuration
    pub fn load(config: &TlsConfig) -> Result<Self, CredentialError> {
        let mut credential = Self::default();

        if let Some(path) = config.ca_cert.as_deref() {
            let data = read_file(path)?;
            credential.roots = ca_certificates(&data)?;
            info!(path, count = credential.roots.len(), "Loaded CA certificates");
        }

        if config.use_auth {
            let cert_path = config
                .client_cert
                .as_deref()
                .ok_or(CredentialError::MissingFile("client certificate"))?;
            let key_path = config
                .client_key
                .as_deref()
                .ok_or(CredentialError::MissingFile("client private key"))?;

            let cert_data = read_file(cert_path)?;
            let key_data = Zeroizing::new(read_file(key_path)?);
            credential.identity = Some(identity_from_pem(
                &cert_data,
                &key_data,
                config.client_key_password.as_deref(),
            )?);
            info!(cert = cert_path, key = key_path, "Loaded client certificate");
        }

        Ok(credential)
    }

    /// Whether a client certificate will be presented
    pub fn has_identity(&self) -> bool {
        self.identity.is_some()
    }

    /// Number of extra trust roots
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Install the roots and identity on a client builder
    pub fn apply(&self, mut builder: ClientBuilder) -> ClientBuilder {
        for root in &self.roots {
            builder = builder.add_root_certificate(root.clone());
        }
        if let Some(identity) = &self.identity {
            builder = builder.identity(identity.clone());
        }
        builder
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("roots", &self.roots.len())
            .field("identity", &self.identity.is_some())
            .finish()
    }
}

fn read_file(path: &str) -> Result<Vec<u8>, CredentialError> {
    fs::read(path).map_err(|e| CredentialError::io(path, e))
}

/// Every `CERTIFICATE` block of a CA bundle, as trust roots
pub fn ca_certificates(data: &[u8]) -> Result<Vec<Certificate>, CredentialError> {
    let roots = certificate_blocks(data)?
        .iter()
        .map(|block| {
            Certificate::from_der(block.contents())
                .map_err(|e| CredentialError::Transport(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if roots.is_empty() {
        return Err(CredentialError::NoCertificates);
    }
    Ok(roots)
}

/// The certificate chain of a client certificate file, leaf first
pub fn certificate_chain(data: &[u8]) -> Result<Vec<Pem>, CredentialError> {
    let chain = certificate_blocks(data)?;
    if chain.is_empty() {
        return Err(CredentialError::NoCertificates);
    }
    debug!(certificates = chain.len(), "Decoded certificate chain");
    Ok(chain)
}

fn certificate_blocks(data: &[u8]) -> Result<Vec<Pem>, CredentialError> {
    Ok(pem::parse_many(data)?
        .into_iter()
        .filter(|block| block.tag() == CERTIFICATE_TAG)
        .collect())
}

fn is_private_key_tag(tag: &str) -> bool {
    tag == "PRIVATE KEY" || tag.ends_with(" PRIVATE KEY")
}

/// Decode the first key block of `data`, decrypting it when it is password
/// protected
pub fn decode_private_key(
    data: &[u8],
    password: Option<&str>,
) -> Result<PrivateKey, CredentialError> {
    let blocks = pem::parse_many(data)?;
    let block = blocks
        .iter()
        .find(|block| is_encrypted(block) || is_private_key_tag(block.tag()))
        .ok_or(CredentialError::NoPrivateKey)?;

    let der = if is_encrypted(block) {
        debug!(tag = block.tag(), "Private key is encrypted");
        decrypt_block(block, password)?
    } else {
        Zeroizing::new(block.contents().to_vec())
    };

    let key = parse_private_key(der)?;
    debug!(format = ?key.format(), "Parsed private key");
    Ok(key)
}

/// Build a client identity from a certificate chain and a possibly encrypted
/// private key
pub fn identity_from_pem(
    cert_data: &[u8],
    key_data: &[u8],
    password: Option<&str>,
) -> Result<Identity, CredentialError> {
    let chain = certificate_chain(cert_data)?;
    let key = decode_private_key(key_data, password)?;

    let mut bundle = Zeroizing::new(String::new());
    bundle.push_str(&key.to_pem());
    for cert in &chain {
        bundle.push_str(&pem::encode(cert));
    }

    Identity::from_pem(bundle.as_bytes()).map_err(|e| CredentialError::Transport(e.to_string()))
}

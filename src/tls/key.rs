//! Private key format detection

use super::error::CredentialError;
use pkcs8::PrivateKeyInfo;
use zeroize::Zeroizing;

/// Encodings a decoded private key can arrive in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    /// Legacy RSA-only `RSAPrivateKey`
    Pkcs1,
    /// Algorithm-agnostic `PrivateKeyInfo`, restricted to RSA and EC keys
    Pkcs8,
    /// Legacy EC-only `ECPrivateKey`
    Sec1,
}

impl KeyFormat {
    /// PEM tag the transport library expects for this encoding
    pub fn pem_tag(self) -> &'static str {
        match self {
            Self::Pkcs1 => "RSA PRIVATE KEY",
            Self::Pkcs8 => "PRIVATE KEY",
            Self::Sec1 => "EC PRIVATE KEY",
        }
    }
}

/// A validated private key, held as DER
pub struct PrivateKey {
    format: KeyFormat,
    der: Zeroizing<Vec<u8>>,
}

impl PrivateKey {
    pub fn format(&self) -> KeyFormat {
        self.format
    }

    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// Re-encode the key as a PEM block with the tag matching its format
    pub fn to_pem(&self) -> Zeroizing<String> {
        let block = pem::Pem::new(self.format.pem_tag(), self.der.to_vec());
        Zeroizing::new(pem::encode(&block))
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("format", &self.format)
            .field("der", &"<redacted>")
            .finish()
    }
}

/// Parse key bytes trying PKCS#1, then PKCS#8, then SEC1. The first encoding
/// that parses wins.
pub fn parse_private_key(der: Zeroizing<Vec<u8>>) -> Result<PrivateKey, CredentialError> {
    if pkcs1::RsaPrivateKey::try_from(der.as_slice()).is_ok() {
        return Ok(PrivateKey {
            format: KeyFormat::Pkcs1,
            der,
        });
    }

    if let Ok(info) = PrivateKeyInfo::try_from(der.as_slice()) {
        let oid = info.algorithm.oid;
        if oid == pkcs1::ALGORITHM_OID || oid == sec1::ALGORITHM_OID {
            return Ok(PrivateKey {
                format: KeyFormat::Pkcs8,
                der,
            });
        }
        return Err(CredentialError::UnsupportedKeyType);
    }

    if sec1::EcPrivateKey::try_from(der.as_slice()).is_ok() {
        return Ok(PrivateKey {
            format: KeyFormat::Sec1,
            der,
        });
    }

    Err(CredentialError::KeyParse)
}

//! Credential loading errors

use thiserror::Error;

/// Errors raised while turning PEM files into a transport identity.
///
/// None of the variants carry key bytes or the key password.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid PEM data: {0}")]
    Pem(#[from] pem::PemError),

    #[error("{0} is required when client authentication is enabled")]
    MissingFile(&'static str),

    #[error("no certificates found in PEM data")]
    NoCertificates,

    #[error("no private key found in PEM data")]
    NoPrivateKey,

    #[error("private key is password protected, but password was not specified")]
    PasswordRequired,

    #[error("private key decryption failed, the password is probably incorrect")]
    IncorrectPassword,

    #[error("unsupported private key encryption: {0}")]
    UnsupportedEncryption(String),

    #[error("found unknown private key type in PKCS#8 wrapping")]
    UnsupportedKeyType,

    #[error("failed to parse private key")]
    KeyParse,

    #[error("transport rejected credential: {0}")]
    Transport(String),
}

impl CredentialError {
    pub(crate) fn io(path: &str, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }
}

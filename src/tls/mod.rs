//! Client TLS material
//!
//! Loads the CA bundle, the client certificate chain and the client private
//! key. Keys may be PKCS#1, PKCS#8 or SEC1 encoded and may be protected with
//! a password, either with the legacy OpenSSL PEM encryption or as a PKCS#8
//! `ENCRYPTED PRIVATE KEY`.

mod decrypt;
mod error;
mod key;
mod loader;


pub use decrypt::{LegacyCipher, is_encrypted};
pub use error::CredentialError;
pub use key::{KeyFormat, PrivateKey, parse_private_key};
pub use loader::{
    Credential, ca_certificates, certificate_chain, decode_private_key, identity_from_pem,
};

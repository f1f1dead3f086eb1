//! Decryption of password protected PEM key blocks
//!
//! Two encodings are handled: the legacy OpenSSL scheme, where the block
//! carries `Proc-Type: 4,ENCRYPTED` and `DEK-Info` headers, and PKCS#8
//! `ENCRYPTED PRIVATE KEY` blocks.

use super::error::CredentialError;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockCipher, BlockDecryptMut, KeyIvInit};
use md5::{Digest, Md5};
use pem::Pem;
use zeroize::Zeroizing;

const PROC_TYPE: &str = "Proc-Type";
const DEK_INFO: &str = "DEK-Info";

/// Tag of a PKCS#8 encrypted key block
pub const ENCRYPTED_PKCS8_TAG: &str = "ENCRYPTED PRIVATE KEY";

/// Ciphers allowed in a legacy `DEK-Info` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyCipher {
    DesCbc,
    DesEde3Cbc,
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
}

impl LegacyCipher {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "DES-CBC" => Some(Self::DesCbc),
            "DES-EDE3-CBC" => Some(Self::DesEde3Cbc),
            "AES-128-CBC" => Some(Self::Aes128Cbc),
            "AES-192-CBC" => Some(Self::Aes192Cbc),
            "AES-256-CBC" => Some(Self::Aes256Cbc),
            _ => None,
        }
    }

    fn key_len(self) -> usize {
        match self {
            Self::DesCbc => 8,
            Self::DesEde3Cbc => 24,
            Self::Aes128Cbc => 16,
            Self::Aes192Cbc => 24,
            Self::Aes256Cbc => 32,
        }
    }

    fn block_len(self) -> usize {
        match self {
            Self::DesCbc | Self::DesEde3Cbc => 8,
            _ => 16,
        }
    }
}

/// Whether the block is encrypted in either supported scheme
pub fn is_encrypted(block: &Pem) -> bool {
    block.tag() == ENCRYPTED_PKCS8_TAG
        || block
            .headers()
            .get(PROC_TYPE)
            .is_some_and(|value| value.contains("ENCRYPTED"))
}

/// Decrypt an encrypted key block, returning the plaintext DER.
///
/// An empty password is rejected before any decryption is attempted.
pub fn decrypt_block(
    block: &Pem,
    password: Option<&str>,
) -> Result<Zeroizing<Vec<u8>>, CredentialError> {
    let password = match password {
        Some(p) if !p.is_empty() => p,
        _ => return Err(CredentialError::PasswordRequired),
    };

    if block.tag() == ENCRYPTED_PKCS8_TAG {
        return decrypt_pkcs8(block.contents(), password);
    }

    let dek_info = block.headers().get(DEK_INFO).ok_or_else(|| {
        CredentialError::UnsupportedEncryption("missing DEK-Info header".to_string())
    })?;
    let (cipher, iv) = parse_dek_info(dek_info)?;
    decrypt_legacy(cipher, &iv, block.contents(), password.as_bytes())
}

fn decrypt_pkcs8(der: &[u8], password: &str) -> Result<Zeroizing<Vec<u8>>, CredentialError> {
    let info = pkcs8::EncryptedPrivateKeyInfo::try_from(der).map_err(|_| CredentialError::KeyParse)?;
    let document = info
        .decrypt(password)
        .map_err(|_| CredentialError::IncorrectPassword)?;
    Ok(Zeroizing::new(document.as_bytes().to_vec()))
}

/// Split `AES-256-CBC,0123...` into the cipher and its IV
pub fn parse_dek_info(value: &str) -> Result<(LegacyCipher, Vec<u8>), CredentialError> {
    let (name, iv_hex) = value.split_once(',').ok_or_else(|| {
        CredentialError::UnsupportedEncryption(format!("malformed DEK-Info: {}", value))
    })?;
    let cipher = LegacyCipher::from_name(name.trim())
        .ok_or_else(|| CredentialError::UnsupportedEncryption(name.trim().to_string()))?;
    let iv = hex::decode(iv_hex.trim()).map_err(|_| {
        CredentialError::UnsupportedEncryption(format!("malformed IV in DEK-Info: {}", value))
    })?;
    if iv.len() != cipher.block_len() {
        return Err(CredentialError::UnsupportedEncryption(format!(
            "IV length {} does not match {}",
            iv.len(),
            name.trim()
        )));
    }
    Ok((cipher, iv))
}

fn decrypt_legacy(
    cipher: LegacyCipher,
    iv: &[u8],
    data: &[u8],
    password: &[u8],
) -> Result<Zeroizing<Vec<u8>>, CredentialError> {
    if data.is_empty() || data.len() % cipher.block_len() != 0 {
        return Err(CredentialError::UnsupportedEncryption(
            "encrypted key is not a whole number of blocks".to_string(),
        ));
    }

    // OpenSSL salts the key derivation with the first eight IV bytes.
    let key = derive_key(password, &iv[..8], cipher.key_len());

    match cipher {
        LegacyCipher::DesCbc => cbc_decrypt::<des::Des>(&key, iv, data),
        LegacyCipher::DesEde3Cbc => cbc_decrypt::<des::TdesEde3>(&key, iv, data),
        LegacyCipher::Aes128Cbc => cbc_decrypt::<aes::Aes128>(&key, iv, data),
        LegacyCipher::Aes192Cbc => cbc_decrypt::<aes::Aes192>(&key, iv, data),
        LegacyCipher::Aes256Cbc => cbc_decrypt::<aes::Aes256>(&key, iv, data),
    }
}

/// OpenSSL `EVP_BytesToKey` with MD5 and a single iteration
pub fn derive_key(password: &[u8], salt: &[u8], key_len: usize) -> Zeroizing<Vec<u8>> {
    let mut key = Zeroizing::new(Vec::with_capacity(key_len + 16));
    let mut digest: Vec<u8> = Vec::new();

    while key.len() < key_len {
        let mut hasher = Md5::new();
        hasher.update(&digest);
        hasher.update(password);
        hasher.update(salt);
        digest = hasher.finalize().to_vec();
        key.extend_from_slice(&digest);
    }

    key.truncate(key_len);
    key
}

fn cbc_decrypt<C>(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Zeroizing<Vec<u8>>, CredentialError>
where
    C: BlockCipher + BlockDecryptMut,
    cbc::Decryptor<C>: KeyIvInit + BlockDecryptMut,
{
    let decryptor = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| CredentialError::UnsupportedEncryption("invalid key or IV length".to_string()))?;

    // A wrong password almost always surfaces as broken padding.
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(data)
        .map(Zeroizing::new)
        .map_err(|_| CredentialError::IncorrectPassword)
}

//! Password-based authenticated encryption: AES-256-CFB with a PBKDF2-derived
//! key and an HMAC-SHA-256 tag (encrypt-then-MAC, derived key shared between
//! the cipher and the MAC).
//!
//! Wire layout of a blob produced by [`encrypt`]:
//!
//! ```text
//! [ salt : 16 ][ iv : 16 ][ ciphertext : len(plain) ][ tag : 32 ]
//! ```
//!
//! `tag = HMAC-SHA-256(derivedKey, iv || ciphertext)` — it does not cover
//! `salt`. `derivedKey = PBKDF2-HMAC-SHA-256(password, salt, 4096, 32)`.
//!
//! These constants and this exact byte layout are load-bearing: existing
//! vaults depend on them and must never change.

use aes::Aes256;
use cfb_mode::{Decryptor, Encryptor};
use cipher::{AsyncStreamCipher, KeyIvInit};
use hmac::{Hmac, Mac};
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::Sha256;

use crate::error::{Error, Result};

const SALT_LEN: usize = 16;
const IV_LEN: usize = 16;
const TAG_LEN: usize = 32;
const PBKDF2_ITERATIONS: u32 = 4096;
const DERIVED_KEY_LEN: usize = 32;
/// `salt + iv + tag`, the minimum size of a blob carrying no payload.
const MIN_BLOB_LEN: usize = SALT_LEN + IV_LEN + TAG_LEN;

type Aes256CfbEnc = Encryptor<Aes256>;
type Aes256CfbDec = Decryptor<Aes256>;
type HmacSha256 = Hmac<Sha256>;

fn random_bytes(len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|err| Error::Parse(format!("failed to read random bytes: {err}")))?;
    Ok(buf)
}

fn derive_key(password: &[u8], salt: &[u8]) -> [u8; DERIVED_KEY_LEN] {
    let mut key = [0u8; DERIVED_KEY_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, &mut key);
    key
}

/// Encrypt `plain` under `password`, returning a self-describing blob.
///
/// # Errors
///
/// Fails if the system RNG cannot be read.
pub fn encrypt(password: &[u8], plain: &[u8]) -> Result<Vec<u8>> {
    let salt = random_bytes(SALT_LEN)?;
    let key = derive_key(password, &salt);

    let mut buf = vec![0u8; IV_LEN + plain.len()];
    let iv = random_bytes(IV_LEN)?;
    buf[..IV_LEN].copy_from_slice(&iv);

    Aes256CfbEnc::new_from_slices(&key, &iv)
        .expect("key and iv are fixed-size and always valid")
        .encrypt_b2b(plain, &mut buf[IV_LEN..])
        .map_err(|err| Error::Parse(format!("AES-CFB encryption failed: {err}")))?;

    let mut mac = HmacSha256::new_from_slice(&key).expect("HMAC accepts any key length");
    mac.update(&buf);
    let tag = mac.finalize().into_bytes();

    let mut blob = Vec::with_capacity(SALT_LEN + buf.len() + TAG_LEN);
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&buf);
    blob.extend_from_slice(&tag);
    Ok(blob)
}

/// Decrypt a blob produced by [`encrypt`] under `password`.
///
/// # Errors
///
/// `Error::TooShort` if the blob is smaller than the 64-byte minimum
/// envelope; `Error::Tag` if the HMAC does not verify (wrong password or
/// corrupted data — these are indistinguishable by design).
pub fn decrypt(password: &[u8], blob: &[u8]) -> Result<Vec<u8>> {
    if blob.len() < MIN_BLOB_LEN {
        return Err(Error::TooShort);
    }

    let salt = &blob[..SALT_LEN];
    let rest = &blob[SALT_LEN..];
    let key = derive_key(password, salt);

    let (body, tag) = rest.split_at(rest.len() - TAG_LEN);

    let mut mac = HmacSha256::new_from_slice(&key).expect("HMAC accepts any key length");
    mac.update(body);
    mac.verify_slice(tag).map_err(|_| Error::Tag)?;

    let (iv, ciphertext) = body.split_at(IV_LEN);
    let mut plain = vec![0u8; ciphertext.len()];
    Aes256CfbDec::new_from_slices(&key, iv)
        .expect("key and iv are fixed-size and always valid")
        .decrypt_b2b(ciphertext, &mut plain)
        .map_err(|_| Error::Tag)?;

    Ok(plain)
}

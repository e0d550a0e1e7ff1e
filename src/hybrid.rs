//! RSA envelope around [`crate::sym`].
//!
//! Treats RSA-PKCS#1v1.5 as a one-shot key-encapsulation mechanism: a fresh
//! random byte string, sized to the modulus's maximum PKCS#1v1.5 payload, is
//! RSA-wrapped and also fed to [`crate::sym::encrypt`] as the password for
//! the actual payload. This way payload length is bounded only by memory,
//! never by the RSA modulus.
//!
//! Wire layout of a blob produced by [`encrypt`]:
//!
//! ```text
//! [ rsaWrappedKey : keySize ][ SymBlob over payload under that key ]
//! ```

use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};

use crate::error::{Error, Result};
use crate::sym;

/// RSA-PKCS#1v1.5's maximum cleartext length for a given modulus size.
fn max_message_len(key_size: usize) -> usize {
    key_size - 11
}

/// Encrypt `plain` under `public`, producing a [`HybridBlob`](mod@self).
///
/// # Errors
///
/// `Error::Rsa` if RSA encryption fails; propagates [`sym::encrypt`] errors.
pub fn encrypt(public: &RsaPublicKey, plain: &[u8]) -> Result<Vec<u8>> {
    use rsa::traits::PublicKeyParts;

    let key_size = public.size();
    let inner_key = {
        let mut rng = rsa::rand_core::OsRng;
        let mut bytes = vec![0u8; max_message_len(key_size)];
        rsa::rand_core::RngCore::fill_bytes(&mut rng, &mut bytes);
        bytes
    };

    let sym_blob = sym::encrypt(&inner_key, plain)?;

    let mut rng = rsa::rand_core::OsRng;
    let wrapped = public
        .encrypt(&mut rng, Pkcs1v15Encrypt, &inner_key)
        .map_err(|err| Error::Rsa(err.to_string()))?;
    debug_assert_eq!(wrapped.len(), key_size);

    let mut blob = Vec::with_capacity(wrapped.len() + sym_blob.len());
    blob.extend_from_slice(&wrapped);
    blob.extend_from_slice(&sym_blob);
    Ok(blob)
}

/// Decrypt a [`HybridBlob`](mod@self) produced by [`encrypt`] under `private`.
///
/// # Errors
///
/// `Error::TooShort` if the blob is shorter than the key's modulus size;
/// `Error::Rsa` if unwrapping the inner key fails; propagates
/// [`sym::decrypt`] errors for the inner layer.
pub fn decrypt(private: &RsaPrivateKey, blob: &[u8]) -> Result<Vec<u8>> {
    use rsa::traits::PublicKeyParts;

    let key_size = private.size();
    if blob.len() < key_size {
        return Err(Error::TooShort);
    }

    let (wrapped, sym_blob) = blob.split_at(key_size);
    let inner_key = private
        .decrypt(Pkcs1v15Encrypt, wrapped)
        .map_err(|err| Error::Rsa(err.to_string()))?;

    sym::decrypt(&inner_key, sym_blob)
}

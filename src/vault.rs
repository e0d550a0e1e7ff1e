//! Composes [`crate::sym`] and [`crate::hybrid`] according to the enabled
//! layers, producing the on-disk vault bytes. Inverse on decrypt.
//!
//! The on-disk format carries no magic header and no toggle byte — the
//! configuration used to encrypt is external knowledge the caller must
//! supply again to decrypt. Composition order is part of the format and
//! must never change: AES wraps first, RSA wraps second.

use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::error::{Error, Result};
use crate::{hybrid, sym};

/// Which layer(s) a vault operation uses, and the key material each one
/// needs.
///
/// The original tool carries this as two independent booleans
/// (`use_rsa`/`use_aes`), which makes the illegal `(false, false)`
/// combination representable. Here it is a tagged enum instead: the
/// no-method case simply has no variant. [`VaultMethod::from_toggles`]
/// bridges the two legacy booleans (as read from CLI flags or config) into
/// this type.
pub enum VaultMethod<'a> {
    AesOnly {
        password: &'a [u8],
    },
    RsaOnly {
        public: &'a RsaPublicKey,
    },
    AesThenRsa {
        password: &'a [u8],
        public: &'a RsaPublicKey,
    },
}

/// Mirror of [`VaultMethod`] carrying the key material needed to decrypt,
/// rather than to encrypt.
pub enum VaultDecryptMethod<'a> {
    AesOnly {
        password: &'a [u8],
    },
    RsaOnly {
        private: &'a RsaPrivateKey,
    },
    AesThenRsa {
        password: &'a [u8],
        private: &'a RsaPrivateKey,
    },
}

impl<'a> VaultMethod<'a> {
    /// Build a method from the two legacy toggles. `Err(Error::NoMethod)` if
    /// both are `false`; `Err(Error::KeyRequired)` if a toggle is enabled
    /// but its key material was not supplied.
    pub fn from_toggles(
        use_rsa: bool,
        use_aes: bool,
        password: Option<&'a [u8]>,
        public: Option<&'a RsaPublicKey>,
    ) -> Result<Self> {
        match (use_aes, use_rsa) {
            (true, true) => Ok(Self::AesThenRsa {
                password: password.ok_or(Error::KeyRequired("password"))?,
                public: public.ok_or(Error::KeyRequired("public key"))?,
            }),
            (true, false) => Ok(Self::AesOnly {
                password: password.ok_or(Error::KeyRequired("password"))?,
            }),
            (false, true) => Ok(Self::RsaOnly {
                public: public.ok_or(Error::KeyRequired("public key"))?,
            }),
            (false, false) => Err(Error::NoMethod),
        }
    }
}

impl<'a> VaultDecryptMethod<'a> {
    /// Build a method from the two legacy toggles. `Err(Error::NoMethod)` if
    /// both are `false`; `Err(Error::KeyRequired)` if a toggle is enabled
    /// but its key material was not supplied.
    pub fn from_toggles(
        use_rsa: bool,
        use_aes: bool,
        password: Option<&'a [u8]>,
        private: Option<&'a RsaPrivateKey>,
    ) -> Result<Self> {
        match (use_aes, use_rsa) {
            (true, true) => Ok(Self::AesThenRsa {
                password: password.ok_or(Error::KeyRequired("password"))?,
                private: private.ok_or(Error::KeyRequired("private key"))?,
            }),
            (true, false) => Ok(Self::AesOnly {
                password: password.ok_or(Error::KeyRequired("password"))?,
            }),
            (false, true) => Ok(Self::RsaOnly {
                private: private.ok_or(Error::KeyRequired("private key"))?,
            }),
            (false, false) => Err(Error::NoMethod),
        }
    }
}

/// Encrypt `plain` according to `method`.
///
/// # Errors
///
/// Propagates [`sym::encrypt`] / [`hybrid::encrypt`] failures.
pub fn encrypt(method: &VaultMethod<'_>, plain: &[u8]) -> Result<Vec<u8>> {
    match method {
        VaultMethod::AesOnly { password } => sym::encrypt(password, plain),
        VaultMethod::RsaOnly { public } => hybrid::encrypt(public, plain),
        VaultMethod::AesThenRsa { password, public } => {
            let sym_blob = sym::encrypt(password, plain)?;
            hybrid::encrypt(public, &sym_blob)
        }
    }
}

/// Decrypt `blob` according to `method`, stripping layers in the reverse
/// order they were applied (RSA first, then AES).
///
/// # Errors
///
/// Propagates [`sym::decrypt`] / [`hybrid::decrypt`] failures.
pub fn decrypt(method: &VaultDecryptMethod<'_>, blob: &[u8]) -> Result<Vec<u8>> {
    match method {
        VaultDecryptMethod::AesOnly { password } => sym::decrypt(password, blob),
        VaultDecryptMethod::RsaOnly { private } => hybrid::decrypt(private, blob),
        VaultDecryptMethod::AesThenRsa { password, private } => {
            let sym_blob = hybrid::decrypt(private, blob)?;
            sym::decrypt(password, &sym_blob)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::rand_core::OsRng;

    fn test_keypair() -> (RsaPrivateKey, RsaPublicKey) {
        let private = RsaPrivateKey::new(&mut OsRng, 2048).unwrap();
        let public = RsaPublicKey::from(&private);
        (private, public)
    }

    #[test]
    fn round_trip_aes_then_rsa() {
        let (private, public) = test_keypair();
        let method = VaultMethod::AesThenRsa {
            password: b"pw",
            public: &public,
        };
        let blob = encrypt(&method, b"hello").unwrap();
        // keySize(256) + 64 + len("hello") = 325, matching the E1 scenario.
        assert_eq!(blob.len(), 256 + 64 + 5);

        let decrypt_method = VaultDecryptMethod::AesThenRsa {
            password: b"pw",
            private: &private,
        };
        assert_eq!(decrypt(&decrypt_method, &blob).unwrap(), b"hello");
    }

    #[test]
    fn round_trip_aes_only() {
        let method = VaultMethod::AesOnly { password: b"pw" };
        let blob = encrypt(&method, b"abc").unwrap();
        assert_eq!(blob.len(), 67);

        let decrypt_method = VaultDecryptMethod::AesOnly { password: b"pw" };
        assert_eq!(decrypt(&decrypt_method, &blob).unwrap(), b"abc");
    }

    #[test]
    fn round_trip_rsa_only() {
        let (private, public) = test_keypair();
        let method = VaultMethod::RsaOnly { public: &public };
        let blob = encrypt(&method, b"abc").unwrap();

        let decrypt_method = VaultDecryptMethod::RsaOnly { private: &private };
        assert_eq!(decrypt(&decrypt_method, &blob).unwrap(), b"abc");

        let (wrong_private, _) = test_keypair();
        let wrong_method = VaultDecryptMethod::RsaOnly {
            private: &wrong_private,
        };
        assert!(decrypt(&wrong_method, &blob).is_err());
    }

    #[test]
    fn wrong_password_fails_with_tag() {
        let method = VaultMethod::AesOnly { password: b"pw" };
        let blob = encrypt(&method, b"hello").unwrap();
        let decrypt_method = VaultDecryptMethod::AesOnly { password: b"nope" };
        let err = decrypt(&decrypt_method, &blob).unwrap_err();
        assert!(matches!(err, Error::Tag));
    }

    #[test]
    fn no_method_is_rejected() {
        let (_, public) = test_keypair();
        let err = VaultMethod::from_toggles(false, false, Some(b"pw"), Some(&public)).unwrap_err();
        assert!(matches!(err, Error::NoMethod));
    }

    #[test]
    fn missing_key_material_is_rejected() {
        let err = VaultMethod::from_toggles(true, false, None, None).unwrap_err();
        assert!(matches!(err, Error::KeyRequired(_)));
    }
}

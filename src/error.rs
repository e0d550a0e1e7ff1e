use std::fmt;
use std::io;

/// A single error type threaded through every layer, from key loading down
/// to the top-level subcommand dispatch.
///
/// Mirrors the taxonomy of the original Go tool's scattered `errors.New`
/// call sites, but as one flat enum instead of ad hoc string-wrapped errors.
#[derive(Debug)]
pub enum Error {
    /// A filesystem operation failed (missing file, permission, write).
    Io(io::Error),
    /// Key text did not match any recognized prefix.
    FormatUnsupported,
    /// Prefix recognized but contents malformed.
    Parse(String),
    /// Encrypted PEM could not be decrypted with the supplied passphrase.
    Passphrase(String),
    /// Symmetric blob shorter than the minimum 64-byte envelope.
    TooShort,
    /// HMAC verification failed (wrong password or corruption).
    Tag,
    /// PKCS#1 v1.5 RSA encrypt/decrypt failed (wrong key or corruption).
    Rsa(String),
    /// Neither RSA nor AES was requested.
    NoMethod,
    /// A toggle requested a layer (RSA or AES) but its key material was not
    /// supplied.
    KeyRequired(&'static str),
    /// A file expected present is absent, or expected absent is present.
    PreCondition(String),
    /// A provided password was shorter than the minimum length.
    TooShortPassword,
    /// Two password entries did not match during confirmation.
    PasswordMismatch,
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::FormatUnsupported => {
                write!(f, "unsupported key format (expected PEM or OpenSSH)")
            }
            Self::Parse(msg) => write!(f, "failed to parse key: {msg}"),
            Self::Passphrase(msg) => write!(f, "failed to decrypt private key: {msg}"),
            Self::TooShort => write!(f, "vault data is too short to be valid"),
            Self::Tag => write!(
                f,
                "could not decrypt vault.\nYou are likely using the wrong password or key, or the data is corrupted."
            ),
            Self::Rsa(msg) => write!(f, "RSA operation failed: {msg}"),
            Self::NoMethod => write!(f, "no encryption method selected (both RSA and AES are disabled)"),
            Self::KeyRequired(what) => write!(f, "{what} is required but was not provided"),
            Self::PreCondition(msg) => write!(f, "{msg}"),
            Self::TooShortPassword => write!(f, "password too short, must be at least 4 characters"),
            Self::PasswordMismatch => write!(f, "passwords do not match"),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

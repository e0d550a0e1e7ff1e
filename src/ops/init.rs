use crate::config::Target;
use crate::error::{Error, Result};
use crate::vault::{self, VaultMethod};
use crate::{fs, ops};

const WELCOME_TEXT: &str = "Hello and welcome to your own vault!\n\n<3";

/// `init`: create a fresh vault at `target` containing a welcome message.
///
/// Pre: neither the vault nor the plain file exists.
/// Post: the vault file exists, mode 0644.
///
/// # Errors
///
/// `Error::PreCondition` if either file already exists; propagates
/// encryption and I/O errors otherwise.
pub fn init(target: &Target, method: &VaultMethod<'_>) -> Result<()> {
    if fs::exists(&target.plain_path) {
        return Err(Error::PreCondition(format!(
            "plain text file '{}' already exists",
            target.plain_path.display()
        )));
    }
    if fs::exists(&target.vault_path) {
        return Err(Error::PreCondition(format!(
            "encrypted vault file '{}' already exists",
            target.vault_path.display()
        )));
    }

    let cipher_payload = vault::encrypt(method, WELCOME_TEXT.as_bytes())?;
    fs::write_atomic(&target.vault_path, &cipher_payload, ops::VAULT_MODE_INIT)?;
    Ok(())
}

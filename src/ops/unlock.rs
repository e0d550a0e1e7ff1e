use crate::config::Target;
use crate::error::{Error, Result};
use crate::vault::{self, VaultDecryptMethod};
use crate::{fs, ops};

/// `unlock`: read the vault file, decrypt it, write the plain file, then
/// remove the vault file.
///
/// Pre: the vault file exists.
/// Post: the plain file exists (mode 0640), the vault file does not.
///
/// # Errors
///
/// `Error::PreCondition` if the vault file is missing; propagates
/// decryption and I/O errors otherwise.
pub fn unlock(target: &Target, method: &VaultDecryptMethod<'_>) -> Result<()> {
    if !fs::exists(&target.vault_path) {
        return Err(Error::PreCondition(format!(
            "source vault file '{}' does not exist",
            target.vault_path.display()
        )));
    }

    let vault_raw = fs::read_all(&target.vault_path)?;
    let plain_text = vault::decrypt(method, &vault_raw)?;
    fs::write_atomic(&target.plain_path, &plain_text, ops::PLAIN_MODE)?;
    fs::remove(&target.vault_path)?;
    Ok(())
}

use crate::config::Target;
use crate::error::{Error, Result};
use crate::vault::{self, VaultMethod};
use crate::{fs, ops};

/// `lock`: read the plain file, encrypt it, write the vault file, then
/// remove the plain file.
///
/// Pre: the plain file exists.
/// Post: the vault file exists (mode 0640), the plain file does not.
///
/// # Errors
///
/// `Error::PreCondition` if the plain file is missing; propagates
/// encryption and I/O errors otherwise.
pub fn lock(target: &Target, method: &VaultMethod<'_>) -> Result<()> {
    if !fs::exists(&target.plain_path) {
        return Err(Error::PreCondition(format!(
            "plain source file '{}' does not exist",
            target.plain_path.display()
        )));
    }

    let plain_text = fs::read_all(&target.plain_path)?;
    let cipher_payload = vault::encrypt(method, &plain_text)?;
    fs::write_atomic(&target.vault_path, &cipher_payload, ops::VAULT_MODE)?;
    fs::remove(&target.plain_path)?;
    Ok(())
}

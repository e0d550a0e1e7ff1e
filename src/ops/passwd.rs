use crate::config::Target;
use crate::error::{Error, Result};
use crate::vault::{self, VaultDecryptMethod, VaultMethod};
use crate::{fs, ops};

/// `passwd`: decrypt the vault under the old method, then re-encrypt it
/// under a new one and overwrite the vault file in place.
///
/// Pre: the vault file exists.
/// Post: the vault file exists, re-keyed.
///
/// # Errors
///
/// `Error::PreCondition` if the vault file is missing; propagates
/// decryption, encryption, and I/O errors otherwise.
pub fn passwd(
    target: &Target,
    old_method: &VaultDecryptMethod<'_>,
    new_method: &VaultMethod<'_>,
) -> Result<()> {
    if !fs::exists(&target.vault_path) {
        return Err(Error::PreCondition(format!(
            "source vault file '{}' does not exist",
            target.vault_path.display()
        )));
    }

    let vault_raw = fs::read_all(&target.vault_path)?;
    let plain_text = vault::decrypt(old_method, &vault_raw)?;

    let cipher_payload = vault::encrypt(new_method, &plain_text)?;
    fs::write_atomic(&target.vault_path, &cipher_payload, ops::VAULT_MODE)?;
    Ok(())
}

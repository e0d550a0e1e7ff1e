use std::thread;
use std::time::Duration;

use crate::config::Target;
use crate::error::{Error, Result};
use crate::vault::{self, VaultDecryptMethod, VaultMethod};
use crate::{fs, ops};

/// `temp`: decrypt the vault to a plaintext file, sleep `temp_seconds`, then
/// re-encrypt it and remove the plaintext again.
///
/// Unlike standalone `unlock`, the vault file is not removed during the
/// decrypt step — it is overwritten in place once the sleep ends, so the
/// vault path exists throughout (transiently alongside the plain file).
///
/// Pre: the vault file exists.
/// Post: same as entry (vault present, plain absent); transiently both
/// exist while the sleep runs.
///
/// # Errors
///
/// `Error::PreCondition` if the vault file is missing at the start, or the
/// plain file has vanished by the time the sleep ends (e.g. removed by
/// another process). Propagates decryption, encryption, and I/O errors
/// otherwise.
pub fn temp(
    target: &Target,
    decrypt_method: &VaultDecryptMethod<'_>,
    encrypt_method: &VaultMethod<'_>,
    temp_seconds: u64,
) -> Result<()> {
    println!("Temporary unlock vault for {temp_seconds} seconds...");

    if !fs::exists(&target.vault_path) {
        return Err(Error::PreCondition(format!(
            "source vault file '{}' does not exist",
            target.vault_path.display()
        )));
    }

    let vault_raw = fs::read_all(&target.vault_path)?;
    let plain_text = vault::decrypt(decrypt_method, &vault_raw)?;
    fs::write_atomic(&target.plain_path, &plain_text, ops::PLAIN_MODE)?;

    println!("Unlocked! Wait for {temp_seconds} seconds...");
    thread::sleep(Duration::from_secs(temp_seconds));
    println!("Lock vault now again...");

    if !fs::exists(&target.plain_path) {
        return Err(Error::PreCondition(format!(
            "plain source file '{}' does not exist",
            target.plain_path.display()
        )));
    }

    let plain_text = fs::read_all(&target.plain_path)?;
    let cipher_payload = vault::encrypt(encrypt_method, &plain_text)?;
    fs::write_atomic(&target.vault_path, &cipher_payload, ops::VAULT_MODE)?;
    fs::remove(&target.plain_path)?;

    println!("Locked again!");
    Ok(())
}

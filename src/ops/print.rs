use crate::config::Target;
use crate::error::{Error, Result};
use crate::fs;
use crate::vault::{self, VaultDecryptMethod};

/// `print`: read the vault file, decrypt it, and write the plaintext to
/// stdout — framed with a banner, unless `clean_print` is set, in which
/// case exactly the decrypted bytes followed by a newline are written.
///
/// Pre: the vault file exists. No file is changed.
///
/// # Errors
///
/// `Error::PreCondition` if the vault file is missing; propagates
/// decryption and I/O errors otherwise.
pub fn print(target: &Target, method: &VaultDecryptMethod<'_>, clean_print: bool) -> Result<()> {
    if !fs::exists(&target.vault_path) {
        return Err(Error::PreCondition(format!(
            "source vault file '{}' does not exist",
            target.vault_path.display()
        )));
    }

    let vault_raw = fs::read_all(&target.vault_path)?;
    let plain_text = vault::decrypt(method, &vault_raw)?;
    let plain_text = String::from_utf8_lossy(&plain_text);

    if clean_print {
        println!("{plain_text}");
    } else {
        println!("### Vault Content:\n\n{plain_text}\n\n### Don't forget to clear!");
    }
    Ok(())
}

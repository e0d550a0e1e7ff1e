//! Read a password from the controlling terminal, with echo disabled.
//!
//! Grounded on the original tool's `userin`/`passterm` packages: prompt,
//! enforce a minimum length, and (for new passwords) confirm by asking
//! twice. Where the original reaches for raw `TCGETS`/`TCSETS` ioctls, this
//! uses the `rpassword` crate, which wraps the same mechanism portably.
//!
//! When stdin is not a TTY (piped input, as in the black-box binary tests)
//! this falls back to reading a plain line, matching the non-interactive
//! fallback the test harness needs.

use std::io::{self, BufRead, IsTerminal, Write};

use secrecy::SecretString;

use crate::error::Result;

const MIN_LENGTH: usize = 4;

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    if io::stdin().is_terminal() {
        Ok(rpassword::read_password()?)
    } else {
        let mut line = String::new();
        let bytes_read = io::stdin().lock().read_line(&mut line)?;
        if bytes_read == 0 {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// Prompt once for an existing password. Retries on an empty read of length
/// below [`MIN_LENGTH`], printing a short notice, until a long-enough
/// password is entered.
///
/// # Errors
///
/// Propagates I/O failures reading from the terminal.
pub fn prompt_password(prompt: &str) -> Result<SecretString> {
    loop {
        let password = read_line(prompt)?;
        if password.len() < MIN_LENGTH {
            println!("Password too short! Use CTRL+C to abort.");
            continue;
        }
        return Ok(SecretString::from(password));
    }
}

/// Prompt for a new password with confirmation: the user is asked twice,
/// and the two entries must match.
///
/// # Errors
///
/// Propagates I/O failures reading from the terminal.
pub fn prompt_new_password() -> Result<SecretString> {
    loop {
        let first = prompt_password("Enter your new vault password: ")?;
        let second = read_line("Re-enter your new vault password: ")?;

        if first.expose_secret_str() != second {
            println!("Passwords do not match! Use CTRL+C to abort.");
            continue;
        }
        return Ok(first);
    }
}

trait ExposeSecretStr {
    fn expose_secret_str(&self) -> &str;
}

impl ExposeSecretStr for SecretString {
    fn expose_secret_str(&self) -> &str {
        use secrecy::ExposeSecret;
        self.expose_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// `read_line`'s non-TTY branch must surface EOF as an error rather
    /// than looping on an endless stream of empty reads. This can't drive
    /// stdin directly from a unit test (it's the test harness's stdin,
    /// which is not EOF), so this exercises the same `read_line`/`BufRead`
    /// contract directly: a 0-byte read is EOF, not an empty-but-present
    /// line.
    #[test]
    fn zero_byte_read_line_is_reported_as_eof() {
        let mut empty: &[u8] = b"";
        let mut line = String::new();
        let bytes_read = std::io::BufRead::read_line(&mut empty, &mut line).unwrap();
        assert_eq!(bytes_read, 0);

        let err: Result<String> = if bytes_read == 0 {
            Err(io::Error::from(io::ErrorKind::UnexpectedEof).into())
        } else {
            Ok(line)
        };
        assert!(matches!(err, Err(Error::Io(_))));
    }
}

//! Write-then-rename file writes with explicit POSIX modes, and removal that
//! tolerates a missing file and distinguishes directory vs file.
//!
//! Grounded on the original tool's `stringfs` package: unlike its
//! `SafeWriteFile`, which additionally wrote a `.bak` sidecar copy next to
//! every file, [`write_atomic`] here writes only the target path — the
//! `.bak` variant is a design decision explicitly not carried forward (see
//! the design notes on the vault format).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use crate::error::Result;

/// Write `bytes` to `path` atomically: write to a sibling `.tmp_<basename>`
/// file, set its mode, then rename it over `path`. The rename is the commit
/// point — a reader of `path` never observes a partial write.
///
/// `mode` is the POSIX file mode (e.g. `0o640`); ignored on non-Unix
/// targets.
///
/// # Errors
///
/// Propagates any I/O failure writing, chmod'ing, or renaming the temp file.
/// On failure, the temp file is left in place for inspection.
pub fn write_atomic(path: &Path, bytes: &[u8], mode: u32) -> Result<()> {
    let tmp_path = tmp_path_for(path);
    fs::write(&tmp_path, bytes)?;
    set_mode(&tmp_path, mode)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .map_or_else(|| ".tmp_".to_string(), |n| format!(".tmp_{}", n.to_string_lossy()));
    dir.join(name)
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}

/// Read the entire contents of `path`.
///
/// # Errors
///
/// Propagates any I/O failure (most commonly, the file does not exist).
pub fn read_all(path: &Path) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Remove `path`. Succeeds as a no-op if it does not exist; removes
/// recursively if it is a directory; unlinks otherwise.
///
/// # Errors
///
/// Propagates any I/O failure other than "not found".
pub fn remove(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path)?,
        Ok(_) => fs::remove_file(path)?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

#[must_use]
pub fn exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

#[must_use]
pub fn is_file(path: &Path) -> bool {
    path.is_file()
}

#[must_use]
pub fn is_dir(path: &Path) -> bool {
    path.is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read as _;

    #[test]
    fn write_atomic_creates_file_with_mode() {
        let dir = std::env::temp_dir().join(format!("vault-fs-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("vault.vt");

        write_atomic(&path, b"payload", 0o640).unwrap();

        let mut contents = String::new();
        fs::File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "payload");

        #[cfg(unix)]
        {
            let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
            assert_eq!(mode, 0o640);
        }

        assert!(!tmp_path_for(&path).exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn remove_missing_file_is_a_no_op() {
        let path = std::env::temp_dir().join("vault-fs-test-missing-file-does-not-exist.vt");
        remove(&path).unwrap();
    }

    #[test]
    fn exists_distinguishes_file_and_dir() {
        let dir = std::env::temp_dir().join(format!("vault-fs-test-classify-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("a.txt");
        fs::write(&file, b"x").unwrap();

        assert!(is_file(&file) && !is_dir(&file));
        assert!(is_dir(&dir) && !is_file(&dir));

        fs::remove_dir_all(&dir).unwrap();
    }
}

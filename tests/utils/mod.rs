#![allow(dead_code)]

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const VAULT: &str = env!("CARGO_BIN_EXE_vault");
const TMP_DIR: &str = env!("CARGO_TARGET_TMPDIR");

#[derive(Debug)]
pub struct Output {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A fresh scratch directory for one test. Not removed automatically — each
/// test gets its own name-derived path, so reruns don't collide, and
/// leftover directories are harmless.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = Path::new(TMP_DIR).join(format!("vault-bin-test-{name}"));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Run the `vault` binary with `args`, from within `cwd`, optionally piping
/// `stdin_input` in (used for password prompts, since stdin is not a TTY
/// under `Command`).
pub fn run_in(cwd: &Path, args: &[&str], stdin_input: Option<&str>) -> Output {
    let mut command = Command::new(VAULT);
    command.current_dir(cwd);
    command.env("NO_COLOR", "1");
    command.env_remove("PAGER");
    command.stdin(Stdio::piped());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    for arg in args {
        command.arg(arg);
    }

    let mut child = command.spawn().unwrap();
    if let Some(input) = stdin_input {
        use std::io::Write;
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
    } else {
        drop(child.stdin.take());
    }

    let output = child.wait_with_output().unwrap();

    Output {
        exit_code: output.status.code().unwrap(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Same as [`run_in`], but run from the crate root (used for `-h`,
/// `--help`, `--version`, which don't touch the filesystem).
pub fn run(args: &[&str]) -> Output {
    run_in(Path::new(env!("CARGO_MANIFEST_DIR")), args, None)
}

pub fn checksum(path: &Path) -> String {
    let payload = std::fs::read(path).unwrap();
    let hash = blake3::hash(&payload);
    hash.to_hex().to_string()
}

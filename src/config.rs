//! Resolved runtime configuration: CLI flags, falling back to environment
//! variables, falling back to hardcoded defaults.
//!
//! Grounded on the original tool's `config` package, which layers flags over
//! `VAULT_*` environment variables in the same priority order.

use std::path::PathBuf;

use crate::cmd::cli::Args;

/// Default `temp` unlock duration, in seconds.
pub const DEFAULT_TEMP_SECONDS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub private_key_path: PathBuf,
    pub public_key_path: PathBuf,
    pub vault_ext: String,
    pub plain_ext: String,
    pub use_rsa: bool,
    pub use_aes: bool,
    pub clean_print: bool,
    pub temp_seconds: u64,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            private_key_path: expand_path("~/.ssh/id_rsa"),
            public_key_path: expand_path("~/.ssh/id_rsa.pub"),
            vault_ext: "vt".to_string(),
            plain_ext: "txt".to_string(),
            use_rsa: true,
            use_aes: true,
            clean_print: false,
            temp_seconds: DEFAULT_TEMP_SECONDS,
            verbose: false,
        }
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

fn env_str(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_bool(name: &str) -> Option<bool> {
    env_str(name).map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_u64(name: &str) -> Option<u64> {
    env_str(name).and_then(|v| v.parse().ok())
}

impl Config {
    /// Resolve a `Config` from parsed CLI flags, with environment-variable
    /// fallback for every option left unset on the command line, and
    /// hardcoded defaults after that.
    #[must_use]
    pub fn from_args_and_env(args: &Args) -> Self {
        let defaults = Self::default();

        let private_key_path = args
            .private_key
            .clone()
            .or_else(|| env_str("VAULT_PRIVATE_KEY"))
            .map_or(defaults.private_key_path, |p| expand_path(&p));

        let public_key_path = args
            .public_key
            .clone()
            .or_else(|| env_str("VAULT_PUBLIC_KEY"))
            .map_or(defaults.public_key_path, |p| expand_path(&p));

        let vault_ext = args
            .vault_ext
            .clone()
            .or_else(|| env_str("VAULT_EXT"))
            .unwrap_or(defaults.vault_ext);

        let plain_ext = args
            .plain_ext
            .clone()
            .or_else(|| env_str("VAULT_PLAIN_EXT"))
            .unwrap_or(defaults.plain_ext);

        let use_rsa = if args.no_rsa {
            false
        } else {
            env_bool("VAULT_USE_RSA").unwrap_or(defaults.use_rsa)
        };

        let use_aes = if args.no_aes {
            false
        } else {
            env_bool("VAULT_USE_AES").unwrap_or(defaults.use_aes)
        };

        let clean_print = args.clean_print || env_bool("VAULT_CLEAN_PRINT").unwrap_or(false);

        let temp_seconds = args
            .temp_seconds
            .or_else(|| env_u64("VAULT_TEMP_SECONDS"))
            .unwrap_or(defaults.temp_seconds);

        let verbose = args.verbose || env_bool("VAULT_VERBOSE").unwrap_or(false);

        Self {
            private_key_path,
            public_key_path,
            vault_ext,
            plain_ext,
            use_rsa,
            use_aes,
            clean_print,
            temp_seconds,
            verbose,
        }
    }
}

/// A resolved base name plus the two file paths derived from it.
///
/// Built from the optional positional target: a recognized vault or plain
/// extension is stripped to obtain the base name; the default base name is
/// `vault`.
#[derive(Debug, Clone)]
pub struct Target {
    pub base: String,
    pub vault_path: PathBuf,
    pub plain_path: PathBuf,
}

impl Target {
    #[must_use]
    pub fn resolve(positional: Option<&str>, config: &Config) -> Self {
        let raw = positional.unwrap_or("vault");
        let base = strip_known_extension(raw, &config.vault_ext, &config.plain_ext);

        Self {
            vault_path: PathBuf::from(format!("{base}.{}", config.vault_ext)),
            plain_path: PathBuf::from(format!("{base}.{}", config.plain_ext)),
            base: base.to_string(),
        }
    }
}

fn strip_known_extension<'a>(raw: &'a str, vault_ext: &str, plain_ext: &str) -> &'a str {
    for ext in [vault_ext, plain_ext] {
        if let Some(base) = raw.strip_suffix(&format!(".{ext}")) {
            return base;
        }
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_is_vault() {
        let config = Config::default();
        let target = Target::resolve(None, &config);
        assert_eq!(target.base, "vault");
        assert_eq!(target.vault_path, PathBuf::from("vault.vt"));
        assert_eq!(target.plain_path, PathBuf::from("vault.txt"));
    }

    #[test]
    fn extension_is_stripped_from_positional() {
        let config = Config::default();
        let target = Target::resolve(Some("secrets.vt"), &config);
        assert_eq!(target.base, "secrets");
    }

    #[test]
    fn bare_base_name_is_kept_as_is() {
        let config = Config::default();
        let target = Target::resolve(Some("secrets"), &config);
        assert_eq!(target.base, "secrets");
    }
}

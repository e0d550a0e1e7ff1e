pub mod cli;
pub mod ui;

use secrecy::{ExposeSecret, SecretString};

use crate::cmd::cli::Args;
use crate::cmd::ui::color::Color;
use crate::config::{Config, Target};
use crate::error::Error;
use crate::keys;
use crate::ops;
use crate::vault::{VaultDecryptMethod, VaultMethod};
use crate::{fs, term};

fn report(step: &str, err: &Error) -> i32 {
    eprintln!("{}", Color::error(&format!("fatal: {step}: {err}.")));
    1
}

/// Print a step-level trace line to stderr, only when `--verbose`/
/// `VAULT_VERBOSE` is set.
fn diag(config: &Config, message: &str) {
    if config.verbose {
        eprintln!("{}", Color::diagnostic(&format!("verbose: {message}")));
    }
}

fn load_public_key(config: &Config) -> Result<rsa::RsaPublicKey, Error> {
    diag(
        config,
        &format!("loading public key from '{}'", config.public_key_path.display()),
    );
    let contents = fs::read_all(&config.public_key_path)?;
    let contents = String::from_utf8_lossy(&contents);
    keys::parse_public_key(&contents)
}

fn load_private_key(config: &Config) -> Result<rsa::RsaPrivateKey, Error> {
    diag(
        config,
        &format!("loading private key from '{}'", config.private_key_path.display()),
    );
    let contents = fs::read_all(&config.private_key_path)?;
    let contents = String::from_utf8_lossy(&contents);
    keys::parse_private_key(&contents, || {
        term::prompt_password(&format!(
            "Passphrase for '{}': ",
            config.private_key_path.display()
        ))
    })
}

/// Resolve the `Config`, `Target`, and an encryption-direction password
/// (prompting the user if the AES layer is enabled and no password is
/// cached for this invocation).
fn resolve_common(args: &Args) -> (Config, Target) {
    let config = Config::from_args_and_env(args);
    let target = Target::resolve(args.target.as_deref(), &config);
    diag(
        &config,
        &format!(
            "target '{}' -> vault='{}', plain='{}' (rsa={}, aes={})",
            target.base,
            target.vault_path.display(),
            target.plain_path.display(),
            config.use_rsa,
            config.use_aes,
        ),
    );
    (config, target)
}

pub fn init(args: &Args) -> Result<(), i32> {
    let (config, target) = resolve_common(args);

    let public_key = if config.use_rsa {
        Some(load_public_key(&config).map_err(|e| report("load public key", &e))?)
    } else {
        None
    };
    let password = if config.use_aes {
        Some(term::prompt_new_password().map_err(|e| report("read password", &e))?)
    } else {
        None
    };

    let method = build_encrypt_method(&config, password.as_ref(), public_key.as_ref())
        .map_err(|e| report("select method", &e))?;

    diag(&config, "encrypting welcome message");
    ops::init(&target, &method).map_err(|e| report("init", &e))?;
    println!("Created vault '{}'.", target.vault_path.display());
    Ok(())
}

pub fn lock(args: &Args) -> Result<(), i32> {
    let (config, target) = resolve_common(args);

    let public_key = if config.use_rsa {
        Some(load_public_key(&config).map_err(|e| report("load public key", &e))?)
    } else {
        None
    };
    let password = if config.use_aes {
        Some(term::prompt_password("Enter your vault password: ").map_err(|e| report("read password", &e))?)
    } else {
        None
    };

    let method = build_encrypt_method(&config, password.as_ref(), public_key.as_ref())
        .map_err(|e| report("select method", &e))?;

    diag(&config, "encrypting plain file into vault");
    ops::lock(&target, &method).map_err(|e| report("lock", &e))?;
    println!("Locked!");
    Ok(())
}

pub fn unlock(args: &Args) -> Result<(), i32> {
    let (config, target) = resolve_common(args);

    let private_key = if config.use_rsa {
        Some(load_private_key(&config).map_err(|e| report("load private key", &e))?)
    } else {
        None
    };
    let password = if config.use_aes {
        Some(term::prompt_password("Enter your vault password: ").map_err(|e| report("read password", &e))?)
    } else {
        None
    };

    let method = build_decrypt_method(&config, password.as_ref(), private_key.as_ref())
        .map_err(|e| report("select method", &e))?;

    diag(&config, "decrypting vault into plain file");
    ops::unlock(&target, &method).map_err(|e| report("unlock", &e))?;
    println!("Unlocked!");
    Ok(())
}

pub fn temp(args: &Args) -> Result<(), i32> {
    let (config, target) = resolve_common(args);

    let public_key = if config.use_rsa {
        Some(load_public_key(&config).map_err(|e| report("load public key", &e))?)
    } else {
        None
    };
    let private_key = if config.use_rsa {
        Some(load_private_key(&config).map_err(|e| report("load private key", &e))?)
    } else {
        None
    };
    let password = if config.use_aes {
        Some(term::prompt_password("Enter your vault password: ").map_err(|e| report("read password", &e))?)
    } else {
        None
    };

    let encrypt_method = build_encrypt_method(&config, password.as_ref(), public_key.as_ref())
        .map_err(|e| report("select method", &e))?;
    let decrypt_method = build_decrypt_method(&config, password.as_ref(), private_key.as_ref())
        .map_err(|e| report("select method", &e))?;

    diag(
        &config,
        &format!("unlocking for {} second(s), then re-locking", config.temp_seconds),
    );
    ops::temp(&target, &decrypt_method, &encrypt_method, config.temp_seconds)
        .map_err(|e| report("temp", &e))?;
    Ok(())
}

pub fn print(args: &Args) -> Result<(), i32> {
    let (config, target) = resolve_common(args);

    let private_key = if config.use_rsa {
        Some(load_private_key(&config).map_err(|e| report("load private key", &e))?)
    } else {
        None
    };
    let password = if config.use_aes {
        Some(term::prompt_password("Enter your vault password: ").map_err(|e| report("read password", &e))?)
    } else {
        None
    };

    let method = build_decrypt_method(&config, password.as_ref(), private_key.as_ref())
        .map_err(|e| report("select method", &e))?;

    diag(&config, "decrypting vault for display only, no file change");
    ops::print(&target, &method, config.clean_print).map_err(|e| report("print", &e))?;
    Ok(())
}

pub fn passwd(args: &Args) -> Result<(), i32> {
    let (config, target) = resolve_common(args);

    let private_key = if config.use_rsa {
        Some(load_private_key(&config).map_err(|e| report("load private key", &e))?)
    } else {
        None
    };
    let old_password = if config.use_aes {
        Some(term::prompt_password("Enter your vault password: ").map_err(|e| report("read password", &e))?)
    } else {
        None
    };

    let old_method = build_decrypt_method(&config, old_password.as_ref(), private_key.as_ref())
        .map_err(|e| report("select method", &e))?;

    let public_key = if config.use_rsa {
        Some(load_public_key(&config).map_err(|e| report("load public key", &e))?)
    } else {
        None
    };
    let new_password = if config.use_aes {
        Some(term::prompt_new_password().map_err(|e| report("read password", &e))?)
    } else {
        None
    };

    let new_method = build_encrypt_method(&config, new_password.as_ref(), public_key.as_ref())
        .map_err(|e| report("select method", &e))?;

    diag(&config, "re-keying vault under the new method");
    ops::passwd(&target, &old_method, &new_method).map_err(|e| report("passwd", &e))?;
    println!("Password changed!");
    Ok(())
}

pub fn keygen() -> Result<(), i32> {
    println!(
        "\
This tool does not generate RSA keypairs itself. Use your system's
ssh-keygen instead, e.g.:

    ssh-keygen -t rsa -b 4096 -m PEM -f ~/.ssh/id_rsa

then point --private-key / --public-key (or VAULT_PRIVATE_KEY /
VAULT_PUBLIC_KEY) at the resulting files."
    );
    Ok(())
}

fn build_encrypt_method<'a>(
    config: &Config,
    password: Option<&'a SecretString>,
    public_key: Option<&'a rsa::RsaPublicKey>,
) -> Result<VaultMethod<'a>, Error> {
    VaultMethod::from_toggles(
        config.use_rsa,
        config.use_aes,
        password.map(|p| p.expose_secret().as_bytes()),
        public_key,
    )
}

fn build_decrypt_method<'a>(
    config: &Config,
    password: Option<&'a SecretString>,
    private_key: Option<&'a rsa::RsaPrivateKey>,
) -> Result<VaultDecryptMethod<'a>, Error> {
    VaultDecryptMethod::from_toggles(
        config.use_rsa,
        config.use_aes,
        password.map(|p| p.expose_secret().as_bytes()),
        private_key,
    )
}


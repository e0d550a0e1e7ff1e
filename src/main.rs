use std::env;
use std::process;

use lessify::Pager;

use vault::cmd;
use vault::cmd::cli;

fn main() {
    let args = match cli::Args::build_from_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("fatal: {err}.");
            println!("Try '{bin} -h' for help.", bin = env!("CARGO_BIN_NAME"));
            process::exit(2);
        }
    };

    if args.long_help {
        long_help();
    } else if args.short_help {
        short_help();
    } else if args.version {
        version();
    } else if let Some(command) = args.command {
        let result = match command {
            cli::Command::Init => cmd::init(&args),
            cli::Command::Lock => cmd::lock(&args),
            cli::Command::Unlock => cmd::unlock(&args),
            cli::Command::Temp => cmd::temp(&args),
            cli::Command::Print => cmd::print(&args),
            cli::Command::Passwd => cmd::passwd(&args),
            cli::Command::Keygen => cmd::keygen(),
        };
        if let Err(code) = result {
            process::exit(code);
        }
    } else {
        // No arguments.
        short_help();
    }
}

fn short_help() {
    println!("{}", short_help_message());
    println!(
        "For full help, see `{bin} --help`.",
        bin = env!("CARGO_BIN_NAME")
    );
}

fn short_help_message() -> String {
    format!(
        "\
{description}

Usage: {bin} [<options>] <command> [<target>]

Commands:
  init [<target>]         Create a new vault with a welcome message
  lock [<target>]         Encrypt the plain file into a vault
  unlock [<target>]       Decrypt the vault into a plain file
  temp [<target>]         Temporarily unlock, then re-lock after a delay
  print [<target>]        Decrypt the vault and print it to stdout
  passwd [<target>]       Change the vault's password/key
  keygen                  Show guidance for generating an RSA keypair

Options:
  --private-key <path>    Path to the RSA private key [~/.ssh/id_rsa]
  --public-key <path>     Path to the RSA public key [~/.ssh/id_rsa.pub]
  --vault-ext <ext>       Extension for encrypted files [vt]
  --plain-ext <ext>       Extension for plaintext files [txt]
  --no-rsa                Disable the RSA envelope layer
  --no-aes                Disable the password/AES layer
  --clean-print           Suppress framing on `print`
  --temp-seconds <n>      Duration of `temp` unlock [10]
  -v, --verbose           Extra diagnostics
  -h, --help              Show this message and exit
  -V, --version           Show the version and exit
",
        description = env!("CARGO_PKG_DESCRIPTION"),
        bin = env!("CARGO_BIN_NAME"),
    )
}

#[allow(clippy::too_many_lines)]
fn long_help() {
    Pager::page_or_print(&format!(
        "\
{help}
What does {package} do?
  {package} stores arbitrary text in an encrypted vault file and moves it
  between that encrypted form and a plaintext form under your control.

  Encryption is a hybrid construction: an AES-256-CFB layer keyed by a
  PBKDF2-derived password, optionally wrapped in an RSA-PKCS#1v1.5 envelope
  keyed by your SSH keypair. Disable either layer with --no-aes / --no-rsa,
  but not both.

  Target names accept a bare base name (default `vault`) or a name with a
  recognized extension, which is stripped.
",
        help = short_help_message(),
        package = env!("CARGO_PKG_NAME"),
    ));
}

fn version() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

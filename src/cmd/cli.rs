#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Command {
    Init,
    Lock,
    Unlock,
    Temp,
    Print,
    Passwd,
    Keygen,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub command: Option<Command>,
    pub target: Option<String>,
    pub private_key: Option<String>,
    pub public_key: Option<String>,
    pub vault_ext: Option<String>,
    pub plain_ext: Option<String>,
    pub no_rsa: bool,
    pub no_aes: bool,
    pub clean_print: bool,
    pub temp_seconds: Option<u64>,
    pub verbose: bool,
    pub short_help: bool,
    pub long_help: bool,
    pub version: bool,
}

impl Args {
    pub fn build_from_args<I>(mut cli_args: I) -> Result<Self, String>
    where
        I: Iterator<Item: AsRef<str> + ToString>,
    {
        let mut args = Self::default();

        while let Some(arg) = cli_args.next() {
            let some_command = args.command.is_some();

            match arg.as_ref() {
                "init" if !some_command => args.command = Some(Command::Init),
                "lock" if !some_command => args.command = Some(Command::Lock),
                "unlock" if !some_command => args.command = Some(Command::Unlock),
                "temp" if !some_command => args.command = Some(Command::Temp),
                "print" if !some_command => args.command = Some(Command::Print),
                "passwd" if !some_command => args.command = Some(Command::Passwd),
                "keygen" if !some_command => args.command = Some(Command::Keygen),
                "-h" => args.short_help = true,
                "--help" => args.long_help = true,
                "-V" | "--version" => args.version = true,
                "--private-key" => {
                    args.private_key = Some(Self::take_value("--private-key", &mut cli_args)?);
                }
                "--public-key" => {
                    args.public_key = Some(Self::take_value("--public-key", &mut cli_args)?);
                }
                "--vault-ext" => {
                    args.vault_ext = Some(Self::take_value("--vault-ext", &mut cli_args)?);
                }
                "--plain-ext" => {
                    args.plain_ext = Some(Self::take_value("--plain-ext", &mut cli_args)?);
                }
                "--no-rsa" => args.no_rsa = true,
                "--no-aes" => args.no_aes = true,
                "--clean-print" => args.clean_print = true,
                "--temp-seconds" => {
                    let raw = Self::take_value("--temp-seconds", &mut cli_args)?;
                    args.temp_seconds = Some(
                        raw.parse()
                            .map_err(|_| format!("invalid value for --temp-seconds: '{raw}'"))?,
                    );
                }
                "-v" | "--verbose" => args.verbose = true,
                positional if some_command && args.target.is_none() && !positional.starts_with('-') => {
                    args.target = Some(positional.to_string());
                }
                unknown => {
                    return Err(format!("Unknown argument: '{unknown}'"));
                }
            }
        }

        Ok(args)
    }

    fn take_value<I>(flag: &str, cli_args: &mut I) -> Result<String, String>
    where
        I: Iterator<Item: AsRef<str> + ToString>,
    {
        cli_args
            .next()
            .map(|v| v.to_string())
            .ok_or_else(|| format!("Missing value for '{flag}'"))
    }
}

mod terminal;

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use quiz_core::RandomSource;
use quiz_core::model::QuestionBank;
use services::QuizSession;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidBankPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidBankPath { raw } => write!(f, "invalid --bank value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  quiz [--bank <questions.json>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in question bank, random order");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BANK, QUIZ_SEED, RUST_LOG");
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    bank: Option<PathBuf>,
    seed: Option<u64>,
}

impl Args {
    /// Flags win over `QUIZ_BANK` / `QUIZ_SEED`.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            bank: env("QUIZ_BANK")
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            seed: match env("QUIZ_SEED") {
                Some(raw) => Some(parse_seed(raw)?),
                None => None,
            },
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => {
                    let value = require_value(args, "--bank")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidBankPath { raw: value });
                    }
                    parsed.bank = Some(PathBuf::from(value));
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    parsed.seed = Some(parse_seed(value)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn random_source(&self) -> RandomSource {
        self.seed.map_or_else(RandomSource::thread, RandomSource::seeded)
    }
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn load_bank(path: Option<&PathBuf>) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(QuestionBank::reference());
    };
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read question bank {}: {e}", path.display()))?;
    let bank = QuestionBank::from_json_str(&raw)?;
    log::info!("loaded {} questions from {}", bank.len(), path.display());
    Ok(bank)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let bank = Arc::new(load_bank(args.bank.as_ref())?);
    let mut session = QuizSession::new(bank, args.random_source());

    let stdin = io::stdin();
    let stdout = io::stdout();
    terminal::run(&mut session, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn main() {
    pretty_env_logger::init();
    log::info!("Starting quiz...");

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

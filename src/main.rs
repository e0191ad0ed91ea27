//! Wordle - CLI
//!
//! Terminal Wordle with a TUI (default), a line-based mode, and a one-shot
//! guess checker.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{check_guess, run_simple},
    core::{ClassificationRule, Word},
    dictionary::{
        DEFAULT_DICTIONARY_URL, DictionaryValidator, HttpDictionary, LookupFailurePolicy,
        WordListDictionary,
    },
    game::{GameConfig, GameSession, MAX_GUESSES},
    output::print_check_result,
    wordlists::{
        ANSWERS, TargetPicker, ensure_guessable, guessable_targets,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses allowed per game
    #[arg(short = 'g', long, global = true, default_value_t = MAX_GUESSES)]
    max_guesses: usize,

    /// Where guesses are validated
    #[arg(short, long, global = true, value_enum, default_value_t = DictionarySource::Offline)]
    dictionary: DictionarySource,

    /// Base URL of the online dictionary
    #[arg(long, global = true, default_value = DEFAULT_DICTIONARY_URL)]
    dictionary_url: String,

    /// Online lookup timeout in milliseconds
    #[arg(long, global = true, default_value_t = 3000)]
    lookup_timeout: u64,

    /// What to do when the dictionary cannot be reached
    #[arg(long, global = true, value_enum, default_value_t = LookupFailurePolicy::Reject)]
    on_lookup_failure: LookupFailurePolicy,

    /// How duplicate letters are scored
    #[arg(short, long, global = true, value_enum, default_value_t = ClassificationRule::Positional)]
    rules: ClassificationRule,

    /// Play against this word instead of a random one
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Seed for target selection (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Word list file for the offline dictionary (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show the feedback for one guess against a target
    Check {
        /// The guessed word
        guess: String,

        /// The word being guessed
        target: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DictionarySource {
    /// Embedded (or `--wordlist`) word list
    Offline,
    /// HTTP dictionary API
    Online,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig::new()
            .with_max_guesses(self.max_guesses)
            .with_rule(self.rules)
            .with_lookup_failure_policy(self.on_lookup_failure)
    }

    fn validator(&self) -> Result<Arc<dyn DictionaryValidator>> {
        match self.dictionary {
            DictionarySource::Offline => {
                let dictionary = match &self.wordlist {
                    Some(path) => {
                        let words = load_from_file(path)?;
                        WordListDictionary::from_words(&words)
                    }
                    None => WordListDictionary::embedded(),
                };
                tracing::info!(words = dictionary.len(), "using offline dictionary");
                Ok(Arc::new(dictionary))
            }
            DictionarySource::Online => {
                let dictionary = HttpDictionary::new(
                    self.dictionary_url.as_str(),
                    Duration::from_millis(self.lookup_timeout),
                )
                .context("failed to create HTTP dictionary client")?;
                tracing::info!(url = dictionary.base_url(), "using online dictionary");
                Ok(Arc::new(dictionary))
            }
        }
    }

    /// Targets for this run. Every target must be one the dictionary accepts,
    /// otherwise the game could never be won.
    fn target_picker(
        &self,
        validator: &dyn DictionaryValidator,
        runtime: &Runtime,
    ) -> Result<TargetPicker> {
        match &self.target {
            Some(text) => {
                let target =
                    Word::new(text).with_context(|| format!("invalid target word '{text}'"))?;
                runtime.block_on(ensure_guessable(&target, validator))?;
                Ok(TargetPicker::fixed(target))
            }
            None => {
                let mut pool = words_from_slice(ANSWERS);
                // Online lookups would cost one request per answer
                if self.dictionary == DictionarySource::Offline {
                    pool = runtime.block_on(guessable_targets(pool, validator));
                }
                if pool.is_empty() {
                    bail!("no answer word is in the dictionary");
                }
                Ok(TargetPicker::random(pool, self.seed))
            }
        }
    }
}

/// Setup logging: to `log_file` if given, else to stderr for line modes.
/// The TUI owns the terminal, so without a log file it logs nowhere.
///
/// The returned guard flushes the file writer on drop and must outlive the run.
fn setup_logging(log_file: Option<&PathBuf>, tui: bool) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let Some(file_name) = path.file_name() else {
            bail!("log file path {} has no file name", path.display());
        };
        let directory = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(directory)
            .with_context(|| format!("failed to create log directory {}", directory.display()))?;

        let file_appender = tracing_appender::rolling::never(directory, file_name);
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(non_blocking_file)
            .with_ansi(false)
            .init();
        tracing::info!(log_file = %path.display(), "logging initialized");
        return Ok(Some(guard));
    }

    if !tui {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(None)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);
    let _log_guard = setup_logging(cli.log_file.as_ref(), matches!(command, Commands::Play))?;

    match command {
        Commands::Check { guess, target } => run_check_command(&cli, &guess, &target),
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
    }
}

fn run_check_command(cli: &Cli, guess: &str, target: &str) -> Result<()> {
    let result = check_guess(guess, target, cli.rules)?;
    print_check_result(&result);
    Ok(())
}

/// Build the first game's session from the CLI flags
fn new_session(cli: &Cli, targets: &mut TargetPicker) -> Result<GameSession> {
    let Some(target) = targets.next_target() else {
        bail!("no target words available");
    };
    tracing::debug!(word = %target, "picked target");
    Ok(GameSession::new(target, cli.game_config()))
}

fn build_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to start async runtime")
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let runtime = build_runtime()?;
    let validator = cli.validator()?;
    let mut targets = cli.target_picker(validator.as_ref(), &runtime)?;
    let mut session = new_session(cli, &mut targets)?;

    run_simple(
        &mut session,
        validator.as_ref(),
        &mut targets,
        runtime.handle(),
    )
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let runtime = build_runtime()?;
    let validator = cli.validator()?;
    let mut targets = cli.target_picker(validator.as_ref(), &runtime)?;
    let session = new_session(cli, &mut targets)?;

    let app = App::new(session, targets, validator, runtime.handle().clone());
    run_tui(app)
}

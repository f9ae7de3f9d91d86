#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** textnorm **
//! Command-line front end for the textnorm transforms.
//!
//! Text comes from the positional arguments or, when there are none, from stdin.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, info};

use textnorm::{Normalizer, NormalizerConfig, Strategy, decode_input};

#[derive(Parser)]
#[command(author, version, about = "Strip tags, transliterate and slugify text or paths.")]
struct Cli {
    /// TOML config file providing `separator` and `strategy`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Slug separator; overrides the config file.
    #[arg(long, global = true)]
    separator: Option<String>,
    /// Transliteration strategy; overrides the config file.
    #[arg(long, value_enum, global = true)]
    strategy: Option<StrategyArg>,
    /// Transform each input line on its own.
    #[arg(long, global = true)]
    lines: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode entities and remove HTML tags.
    StripTags(TextArgs),
    /// Remove tabs and line breaks.
    StripLines(TextArgs),
    /// Fold accents and smart punctuation to ASCII.
    Transliterate(TextArgs),
    /// Strip tags and line breaks, optionally transliterating.
    Clean {
        /// Also fold to ASCII.
        #[arg(long)]
        transliterate: bool,
        #[command(flatten)]
        text: TextArgs,
    },
    /// Slugify free text.
    Slug(TextArgs),
    /// Slugify a path or URL, keeping `/ ? & : = .`.
    SlugPath(TextArgs),
    /// Clean a path or URL without slugifying it.
    NormalizePath(TextArgs),
}

impl Commands {
    fn text(&self) -> &[String] {
        match self {
            Commands::StripTags(args)
            | Commands::StripLines(args)
            | Commands::Transliterate(args)
            | Commands::Clean { text: args, .. }
            | Commands::Slug(args)
            | Commands::SlugPath(args)
            | Commands::NormalizePath(args) => &args.text,
        }
    }
}

#[derive(Args)]
struct TextArgs {
    /// Input text; joined with single spaces. Reads stdin when omitted.
    text: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Auto,
    Unicode,
    Table,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => Strategy::Auto,
            StrategyArg::Unicode => Strategy::Unicode,
            StrategyArg::Table => Strategy::Table,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let normalizer = build_normalizer(&cli)?;
    info!("using '{}' transliteration", normalizer.strategy_name());

    let input = read_input(cli.command.text())?;
    let mut stdout = io::stdout().lock();
    if cli.lines {
        for line in input.lines() {
            let out = apply(&normalizer, &cli.command, line)?;
            writeln!(stdout, "{out}")?;
        }
    } else {
        let out = apply(&normalizer, &cli.command, &input)?;
        writeln!(stdout, "{out}")?;
    }
    stdout.flush()?;
    Ok(())
}

/// Defaults, then the config file, then command-line flags.
fn build_normalizer(cli: &Cli) -> Result<Normalizer> {
    let mut config = match &cli.config {
        Some(path) => NormalizerConfig::load(path).with_context(|| format!("while loading config '{}'", path.display()))?,
        None => NormalizerConfig::default(),
    };
    if let Some(separator) = &cli.separator {
        config.separator.clone_from(separator);
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy.into();
    }
    debug!("effective config: {config:?}");
    Normalizer::new(config).context("invalid normalizer settings")
}

fn read_input(args: &[String]) -> Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes).context("while reading stdin")?;
    let text = decode_input(&bytes).context("while decoding stdin")?;
    let text = text.strip_suffix('\n').map_or(text, |t| t.strip_suffix('\r').unwrap_or(t));
    Ok(text.to_string())
}

fn apply(normalizer: &Normalizer, command: &Commands, input: &str) -> Result<String> {
    Ok(match command {
        Commands::StripTags(_) => normalizer.strip_tags(input),
        Commands::StripLines(_) => normalizer.strip_lines(input),
        Commands::Transliterate(_) => normalizer.transliterate(input),
        Commands::Clean { transliterate, .. } => normalizer.normalize_string(input, *transliterate),
        Commands::Slug(_) => normalizer.slugify(input),
        Commands::SlugPath(_) => normalizer
            .slugify_path(input)
            .with_context(|| format!("while slugifying path '{input}'"))?,
        Commands::NormalizePath(_) => normalizer
            .normalize_path(input)
            .with_context(|| format!("while normalizing path '{input}'"))?,
    })
}

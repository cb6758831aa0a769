mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use docpack_lib::paths::content_root;

use crate::cmd::{BuildArgs, cmd_build, cmd_cheatsheet, cmd_init, cmd_show, cmd_stats, cmd_validate};
use crate::output::{OutputFormat, print_error};

/// docpack - validate and build language documentation content
#[derive(Parser)]
#[command(name = "docpack")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Content root holding one directory per language (env: DOCPACK_ROOT, default: content)
  #[arg(long, global = true)]
  root: Option<PathBuf>,

  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Scaffold a new language directory
  Init {
    /// Directory to create (default: <root>/<language>)
    path: Option<PathBuf>,

    /// Language id, e.g. `cpp`
    #[arg(short, long)]
    language: String,

    /// Display label (default: the language id)
    #[arg(long)]
    label: Option<String>,
  },

  /// Check content for broken references and malformed entries
  Validate {
    /// Only validate this language
    #[arg(short, long)]
    language: Option<String>,

    /// Treat warnings as errors
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Validate, then export each language as JSON
  Build {
    /// Only build this language
    #[arg(short, long)]
    language: Option<String>,

    /// Write `<id>.json` files here instead of printing to stdout
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Build even when validation reports warnings
    #[arg(long)]
    allow_warnings: bool,
  },

  /// Show content counts per language
  Stats {
    /// Only show this language
    #[arg(short, long)]
    language: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Show one entry
  Show {
    /// Entry id
    entry: String,

    /// Language the entry belongs to
    #[arg(short, long)]
    language: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Print a language's cheat sheet
  Cheatsheet {
    /// Language id
    #[arg(short, long)]
    language: String,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&format!("{err:#}"));
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  let root = content_root(cli.root.as_deref());

  match cli.command {
    Commands::Init { path, language, label } => {
      let path = path.unwrap_or_else(|| root.join(&language));
      cmd_init(&path, &language, label)
    }
    Commands::Validate {
      language,
      strict,
      output,
    } => cmd_validate(&root, language.as_deref(), strict, output),
    Commands::Build {
      language,
      out_dir,
      allow_warnings,
    } => cmd_build(
      &root,
      &BuildArgs {
        language,
        out_dir,
        allow_warnings,
      },
    ),
    Commands::Stats { language, output } => cmd_stats(&root, language.as_deref(), output, cli.verbose),
    Commands::Show {
      entry,
      language,
      output,
    } => cmd_show(&root, &language, &entry, output),
    Commands::Cheatsheet { language } => cmd_cheatsheet(&root, &language),
  }
}

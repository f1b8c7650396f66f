mod cmd;
mod functions;
mod logging;

use clap::{Args, Parser, Subcommand, ValueEnum};
use flatmatter_core::config::loader::ConfigLoader;
use flatmatter_core::config::types::OutputFormat;
use flatmatter_core::document::MergeStrategy;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "flatmatter", version, about = "Parse FlatMatter front matter")]
struct Cli {
    /// Path to config.toml (defaults to ~/.config/flatmatter/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a document and print its configuration
    Parse(ParseArgs),

    /// Report what each header line of a document does
    Check(CheckArgs),

    /// List the built-in functions
    Functions,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Document to parse; reads stdin when omitted or "-"
    pub path: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Fail on malformed lines instead of dropping them
    #[arg(long)]
    pub strict: bool,

    /// How lines sharing a top-level key are combined
    #[arg(long, value_enum)]
    pub merge: Option<MergeArg>,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Document to check; reads stdin when omitted or "-"
    pub path: Option<PathBuf>,

    /// Print the line report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Json,
    Pretty,
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Pretty => OutputFormat::Pretty,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MergeArg {
    Shallow,
    Deep,
}

impl From<MergeArg> for MergeStrategy {
    fn from(arg: MergeArg) -> Self {
        match arg {
            MergeArg::Shallow => MergeStrategy::Shallow,
            MergeArg::Deep => MergeStrategy::Deep,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let rc = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };

    logging::init(&rc.logging);
    tracing::debug!(config = ?rc.source, "configuration loaded");

    match cli.command {
        Commands::Parse(args) => cmd::parse::run(&rc, args),
        Commands::Check(args) => cmd::check::run(&rc, args),
        Commands::Functions => cmd::functions::run(),
    }

    logging::flush();
}

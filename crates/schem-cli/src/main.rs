/// Schematic command-line tool: inspect, validate and analyse Litematica
/// `.litematic` files.
///
/// # Command overview
///
/// ```text
/// schem <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print the metadata and regions of a schematic
///   validate   Check that a file decodes and binds, stage by stage
///   tree       Dump the raw tag tree
///   stats      Print sizes and tag statistics
///   help       Print help information
///
/// Global options:
///   -v, --verbose        Log decode and bind details to stderr
///   --no-color           Disable coloured output
///   --max-depth <N>      Nesting limit for the decoder (default 512)
///   -h, --help           Print help
///   -V, --version        Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                 |
/// |------|-----------------------------------------|
/// | 0    | Success                                 |
/// | 1    | Error (I/O failure, invalid file, etc.) |
///
/// Errors and log output go to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use schem_decoder::DecoderConfig;
use schem_decoder::config::DEFAULT_MAX_DEPTH;
use schem_driver::OutputMode;

mod cmd_inspect;
mod cmd_stats;
mod cmd_tree;
mod cmd_validate;
mod input;

// ── CLI root ──────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "schem", version, about = "Litematica schematic inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decode and bind details (debug level) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable coloured output (ANSI escape codes are suppressed).
    #[arg(long, global = true)]
    no_color: bool,

    /// Maximum Compound/List nesting accepted by the decoder.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl Cli {
    fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig {
            max_depth: self.max_depth,
            ..DecoderConfig::default()
        }
    }
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print the metadata and regions of a schematic.
    Inspect(InspectArgs),
    /// Check that a file decodes and binds, stage by stage.
    Validate(ValidateArgs),
    /// Dump the raw tag tree.
    Tree(TreeArgs),
    /// Print sizes and tag statistics.
    Stats(StatsArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputMode {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputMode::Text,
            Format::Json => OutputMode::Json,
        }
    }
}

/// Arguments for `schem inspect`.
///
/// ```text
/// ┌──────────────┬───────────────────────────────────────────────────┐
/// │ Flag         │ Effect                                            │
/// ├──────────────┼───────────────────────────────────────────────────┤
/// │ --format     │ text (default) | json                             │
/// │ --no-palette │ Print palette sizes only, not every block state   │
/// └──────────────┴───────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the `.litematic` file.
    pub file: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Omit palette entries from the output.
    #[arg(long)]
    pub no_palette: bool,
}

/// Arguments for `schem validate`.
///
/// Runs decompression, decoding and binding separately and reports each
/// stage. Exits 1 at the first failing stage.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the `.litematic` file.
    pub file: PathBuf,
}

/// Arguments for `schem tree`.
#[derive(clap::Args)]
pub struct TreeArgs {
    /// Path to the `.litematic` file.
    pub file: PathBuf,

    /// Print containers below this depth as a single summary line.
    /// The root compound is depth 1.
    #[arg(long)]
    pub depth: Option<usize>,
}

/// Arguments for `schem stats`.
#[derive(clap::Args)]
pub struct StatsArgs {
    /// Path to the `.litematic` file.
    pub file: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.decoder_config();
    let color = !cli.no_color;
    let result = match &cli.command {
        Commands::Inspect(args) => cmd_inspect::run(args, &config, color),
        Commands::Validate(args) => cmd_validate::run(args, &config),
        Commands::Tree(args) => cmd_tree::run(args, &config),
        Commands::Stats(args) => cmd_stats::run(args, &config),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

mod commands;
mod output;

use clap::{Parser, Subcommand};
use labscan_core::extraction::{ExtractOptions, DEFAULT_MAX_RESULTS, DEFAULT_MIN_LABEL_LEN};
use labscan_core::registry::builtin::DEFAULT_PRESET;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "labscan",
    version,
    about = "Extract structured lab results from OCR text of lab reports"
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract lab results from a text file (use "-" for stdin)
    Extract {
        /// Path to OCR text, or "-" to read stdin
        input_file: PathBuf,

        #[command(flatten)]
        registry: RegistryArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the analysis as JSON to a file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Skip the generic fallback pass
        #[arg(long)]
        no_generic: bool,

        /// Maximum number of results including generic matches
        #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,

        /// Saved enhanced-analysis response to try before basic extraction
        #[arg(long, value_name = "FILE")]
        enhanced_response: Option<PathBuf>,
    },
    /// Print a synthetic six-month trend for a parameter
    Trend {
        /// Parameter name (e.g., "Hemoglobin")
        parameter: String,

        #[command(flatten)]
        registry: RegistryArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect and validate parameter registries
    Registry {
        #[command(subcommand)]
        action: RegistryAction,
    },
}

#[derive(clap::Args)]
struct RegistryArgs {
    /// Custom JSON registry file (overrides --preset)
    #[arg(long, env = "LABSCAN_REGISTRY", value_name = "FILE")]
    registry: Option<PathBuf>,

    /// Predefined registry
    #[arg(short, long, default_value = DEFAULT_PRESET)]
    preset: String,
}

#[derive(Subcommand)]
enum RegistryAction {
    /// List predefined registries
    List,
    /// Show the parameters of a registry with their ranges
    Explain {
        /// Preset name
        #[arg(default_value = DEFAULT_PRESET)]
        preset: String,
    },
    /// Validate a custom registry file
    Validate {
        /// Path to JSON registry file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            registry,
            output,
            out,
            no_generic,
            max_results,
            enhanced_response,
        } => {
            let options = ExtractOptions {
                max_results,
                min_label_len: DEFAULT_MIN_LABEL_LEN,
                generic: !no_generic,
            };
            commands::extract::run(
                input_file,
                registry.registry,
                &registry.preset,
                &output,
                out,
                &options,
                enhanced_response,
            )
        }
        Commands::Trend {
            parameter,
            registry,
            output,
        } => commands::trend::run(&parameter, registry.registry, &registry.preset, &output),
        Commands::Registry { action } => match action {
            RegistryAction::List => commands::registry::list(),
            RegistryAction::Explain { preset } => commands::registry::explain(&preset),
            RegistryAction::Validate { file } => commands::registry::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

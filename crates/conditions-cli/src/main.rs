//! CLI entry point for conditions.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `conditions-app` crate.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use conditions_app::{
    CheckInput, ExplainOutput, decision_exit_code, format_decision, format_views, list_views,
    load_config, parse_request_json, run_check, run_explain, serialize_decision,
};
use conditions_settings::Overrides;
use conditions_types::Level;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "CONDITIONS_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "conditions",
    version,
    about = "Evaluate three-valued authorization conditions against requests"
)]
struct Cli {
    /// Path to the conditions config TOML. A missing file means an empty config.
    #[arg(long, default_value = "conditions.toml")]
    config: PathBuf,

    /// Override the route parameter used by `nested_resource_owner`.
    #[arg(long)]
    parent_lookup_kwarg: Option<String>,

    /// Log evaluation at debug level (overrides CONDITIONS_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide whether a request may access a view.
    Check {
        /// The configured view to check.
        #[arg(long)]
        view: String,

        /// Request snapshot JSON file, or `-` for stdin.
        #[arg(long, default_value = "-")]
        request: PathBuf,

        /// Run the object-level check instead of the collective one.
        #[arg(long)]
        object: bool,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// List configured views and their conditions.
    Views,

    /// Explain a builtin condition id.
    Explain {
        /// The condition id (e.g. "nested_resource_owner").
        identifier: String,
    },

    /// Print the JSON schema of the config file.
    Schema,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.cmd {
        Commands::Check {
            view,
            request,
            object,
            format,
        } => cmd_check(&cli, view, request, *object, *format),
        Commands::Views => cmd_views(&cli),
        Commands::Explain { identifier } => cmd_explain(identifier),
        Commands::Schema => cmd_schema(),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        parent_lookup_kwarg: cli.parent_lookup_kwarg.clone(),
    }
}

/// Config text, or empty when the file does not exist.
fn read_config(path: &Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "config not found; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config {}", path.display())),
    }
}

fn read_request(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read request from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("read request {}", path.display()))
    }
}

fn cmd_check(
    cli: &Cli,
    view: &str,
    request_path: &Path,
    object: bool,
    format: Format,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let config_text = read_config(&cli.config)?;
        let request = parse_request_json(&read_request(request_path)?)?;

        let output = run_check(CheckInput {
            config_text: &config_text,
            view,
            request,
            level: if object {
                Level::Object
            } else {
                Level::Collective
            },
            overrides: overrides(cli),
        })?;

        match format {
            Format::Json => print!("{}", serialize_decision(&output.decision)?),
            Format::Text => print!("{}", format_decision(view, &output.decision)),
        }

        Ok(decision_exit_code(&output.decision))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("conditions error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_views(cli: &Cli) -> anyhow::Result<()> {
    let config_text = read_config(&cli.config)?;
    let resolved = load_config(&config_text, overrides(cli))?;
    print!("{}", format_views(&list_views(&resolved)));
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", conditions_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available,
        } => {
            eprint!("{}", conditions_app::format_not_found(&identifier, available));
            std::process::exit(1);
        }
    }
}

fn cmd_schema() -> anyhow::Result<()> {
    let schema = conditions_settings::config_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

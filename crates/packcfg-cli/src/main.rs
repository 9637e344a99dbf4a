//! Command-line interface for packcfg.
//!
//! Resolves the packaging configuration of an Android project once and
//! prints it for the build toolchain to consume.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use packcfg_core::config::{gradle_user_home, parse_override, MetadataOptions, Project};
use packcfg_core::resolver::{ConfigResolver, KNOWN_SETTINGS};
use packcfg_core::types::signing_keys;
use packcfg_core::{BuildVariant, EnvPropertySource, OutputFormat, TracingLogger};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "PACKCFG_LOG";

#[derive(Parser)]
#[command(name = "packcfg")]
#[command(version, about = "Resolve Android packaging configuration")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve and print the build configuration
    Resolve(ResolveArgs),
    /// List the metadata keys and their defaults
    Keys,
}

#[derive(Args)]
struct ResolveArgs {
    /// Project root (the directory holding key.properties)
    #[arg(long, default_value = ".")]
    project: PathBuf,

    /// Project descriptor (default: <project>/packcfg.yaml)
    #[arg(long)]
    descriptor: Option<PathBuf>,

    /// Application namespace, overrides the descriptor
    #[arg(long)]
    namespace: Option<String>,

    /// Application id, overrides the descriptor
    #[arg(long)]
    application_id: Option<String>,

    /// Project property override, highest priority (repeatable)
    #[arg(short = 'P', long = "property", value_name = "KEY=VALUE")]
    properties: Vec<String>,

    /// Only print the policy of this build variant
    #[arg(long)]
    variant: Option<BuildVariant>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Print signing passwords instead of a redaction marker
    #[arg(long)]
    reveal_secrets: bool,

    /// Ignore ORG_GRADLE_PROJECT_* environment variables
    #[arg(long)]
    no_env: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Yaml => OutputFormat::Yaml,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve(args) => resolve(args),
        Command::Keys => {
            print_keys();
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve(args: ResolveArgs) -> Result<()> {
    let overrides = args
        .properties
        .iter()
        .map(|arg| parse_override(arg))
        .collect::<Result<Vec<_>, _>>()?;

    let project = Project::open(&args.project, args.descriptor.as_deref())
        .with_context(|| format!("Failed to open project at {}", args.project.display()))?;

    let metadata = project.metadata_chain(MetadataOptions {
        overrides,
        environment: (!args.no_env).then(EnvPropertySource::from_env),
        gradle_user_home: gradle_user_home(),
    })?;
    tracing::debug!(?metadata, "metadata chain assembled");

    let request = project.request(args.namespace, args.application_id)?;
    let resolver = ConfigResolver::new(metadata).with_logger(Arc::new(TracingLogger::new()));
    let mut config = resolver
        .resolve_config(&request)
        .context("Configuration resolution failed")?;

    if let Some(variant) = args.variant {
        config = config.only_variant(variant);
    }
    if !args.reveal_secrets {
        config = config.redacted();
    }

    println!("{}", config.render(args.format.into())?.trim_end());
    Ok(())
}

fn print_keys() {
    println!("{:<15} {:<28} DEFAULT", "SETTING", "KEY");
    for setting in KNOWN_SETTINGS {
        println!("{:<15} {:<28} {}", setting.name, setting.key.unwrap_or("-"), setting.default);
    }
    println!();
    println!("Signing keys (key.properties): {}", signing_keys::ALL.join(", "));
}

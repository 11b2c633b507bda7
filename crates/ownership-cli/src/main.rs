//! CLI entry point for ownership-diagram.
//!
//! This module is thin: it handles argument parsing, IO, logging setup and exit codes.
//! All business logic lives in the `ownership-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use ownership_app::{
    ExplainOutput, GenerateInput, format_explanation, format_filter_list, format_not_found,
    run_explain, run_generate,
};
use ownership_settings::Overrides;
use std::process::Command;

/// Environment variable naming the PlantUML executable used by `--compile`.
const PLANTUML_BIN_ENV: &str = "OWNERSHIP_PLANTUML";

#[derive(Parser, Debug)]
#[command(
    name = "ownership-diagram",
    version,
    about = "Render class ownership snapshots as PlantUML team diagrams"
)]
struct Cli {
    /// Path to ownership config TOML (missing file means defaults).
    #[arg(long, default_value = "ownership.toml")]
    config: Utf8PathBuf,

    /// Override profile (all|cross-team|unowned).
    #[arg(long)]
    profile: Option<String>,

    /// Override edge styling (hashed|random).
    #[arg(long)]
    styling: Option<String>,

    /// Seed for random styling.
    #[arg(long)]
    seed: Option<u64>,

    /// Only keep classes owned by this team (repeatable; enables `owner.in`).
    #[arg(long = "owner", value_name = "TEAM")]
    owners: Vec<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate PlantUML source from an ownership snapshot.
    Render {
        /// Path to the JSON ownership snapshot.
        #[arg(long)]
        snapshot: Utf8PathBuf,

        /// Where to write the PlantUML source (if not specified, prints to stdout).
        #[arg(long, short)]
        out: Option<Utf8PathBuf>,

        /// Also run `plantuml` on the written file to produce an image (png|svg).
        #[arg(long, requires = "out")]
        compile: Option<String>,
    },

    /// List the built-in filters.
    Filters,

    /// Explain a built-in filter.
    Explain {
        /// The filter id (e.g., "owner.in").
        identifier: String,
    },

    /// Print the JSON schema of the config file.
    ConfigSchema,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Render {
            ref snapshot,
            ref out,
            ref compile,
        } => cmd_render(&cli, snapshot, out.as_deref(), compile.as_deref()),
        Commands::Filters => {
            print!("{}", format_filter_list());
            Ok(())
        }
        Commands::Explain { ref identifier } => cmd_explain(identifier),
        Commands::ConfigSchema => {
            print!("{}", ownership_settings::config_schema()?);
            Ok(())
        }
    }
}

/// Log to stderr so stdout stays clean for diagram output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_render(
    cli: &Cli,
    snapshot: &Utf8Path,
    out: Option<&Utf8Path>,
    compile: Option<&str>,
) -> anyhow::Result<()> {
    let format = compile.map(parse_compile_format).transpose()?;

    let snapshot_text = std::fs::read_to_string(snapshot)
        .with_context(|| format!("read snapshot: {}", snapshot))?;
    let config_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

    let overrides = Overrides {
        profile: cli.profile.clone(),
        styling: cli.styling.clone(),
        seed: cli.seed,
        owners: cli.owners.clone(),
    };

    let output = run_generate(GenerateInput {
        snapshot_text: &snapshot_text,
        config_text: &config_text,
        overrides,
    })?;

    tracing::info!(
        "kept {}/{} classes: {} owners, {} unowned, {} dependency edges, {} method-usage edges",
        output.stats.filtered_records,
        output.stats.input_records,
        output.stats.owners,
        output.stats.unowned,
        output.stats.dependency_edges,
        output.stats.method_usage_edges
    );

    match out {
        Some(path) => {
            write_text_file(path, &output.diagram.source).context("write diagram")?;
            if let Some(format) = format {
                compile_diagram(path, format)?;
            }
        }
        None => print!("{}", output.diagram.source),
    }

    Ok(())
}

fn parse_compile_format(v: &str) -> anyhow::Result<&'static str> {
    match v {
        "png" => Ok("png"),
        "svg" => Ok("svg"),
        other => anyhow::bail!("unknown image format: {other} (expected png or svg)"),
    }
}

/// Hand the written source to PlantUML; the image lands next to it.
fn compile_diagram(path: &Utf8Path, format: &str) -> anyhow::Result<()> {
    let program = std::env::var(PLANTUML_BIN_ENV).unwrap_or_else(|_| "plantuml".to_string());

    let status = Command::new(&program)
        .arg(format!("-t{format}"))
        .arg(path.as_str())
        .status()
        .with_context(|| format!("spawn {program}"))?;

    if !status.success() {
        anyhow::bail!("{program} returned non-zero exit status ({status})");
    }
    tracing::info!("compiled {} to {}", path, format);
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_filter_ids,
        } => {
            eprint!("{}", format_not_found(&identifier, available_filter_ids));
            std::process::exit(1);
        }
    }
}

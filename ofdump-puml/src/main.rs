use anyhow::{Context, Result};
use clap::Parser;
use flowdump_core::{format_json, parse_file_with_stats, render_file};
use ofdump_puml::config::{default_render_options, load_render_options};
use ofdump_puml::path_guard::ensure_output_not_input;
use ofdump_puml::report::{render_skipped, render_summary};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = match &cli.config {
        Some(path) => load_render_options(path)?,
        None => default_render_options(),
    };

    ensure_output_not_input(&cli.output, &cli.input)?;

    info!(input = %cli.input.display(), "reading flow dump");
    let outcome = parse_file_with_stats(&cli.input)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;

    render_file(&outcome.registry, &options, &cli.output)
        .with_context(|| format!("failed to write diagram {}", cli.output.display()))?;
    info!(output = %cli.output.display(), "wrote diagram");

    if cli.summary {
        match cli.format {
            OutputFormat::Text => {
                println!("{}", render_summary(&outcome.registry));
                if let Some(skipped) = render_skipped(&outcome.stats) {
                    println!("{skipped}");
                }
            }
            OutputFormat::Json => println!("{}", format_json(&outcome.registry)),
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

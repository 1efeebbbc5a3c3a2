use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "ofdump-puml")]
#[command(about = "Draw an OpenFlow flow-table dump as a PlantUML diagram")]
pub struct Cli {
    /// Flow dump text file (for example `ovs-ofctl dump-flows br0` output).
    pub input: PathBuf,
    /// Diagram file to create or overwrite.
    #[arg(short, long, default_value = "./out.puml")]
    pub output: PathBuf,
    /// Optional TOML file with `[render]` settings.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Print table/rule/edge counts after rendering.
    #[arg(long)]
    pub summary: bool,
    /// Summary format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Log parsing details to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

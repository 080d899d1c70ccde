//! map_baker - bake an authored map document into a runtime level file
//!
//! Reads the editor's project JSON, runs the baking pipeline and writes the
//! flat level descriptor. One document in, one file out; any error aborts
//! before output exists.

use clap::Parser;
use map_baker_compile::write_level;
use map_baker_core::MapDocument;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "map_baker", version, about = "Bake an authored tile map into a runtime level descriptor")]
struct Cli {
    /// Authored map document (JSON)
    input: PathBuf,

    /// Output level file (defaults to the input path with a .level.json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(&cli.input)?;
    let doc: MapDocument = serde_json::from_str(&raw)?;
    log::debug!("loaded '{}' from {}", doc.name, cli.input.display());

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("level.json"));
    write_level(&doc, &output)?;

    println!("{}", output.display());
    Ok(())
}

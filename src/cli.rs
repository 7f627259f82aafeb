//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::bib::create_all_bibtexs;
use crate::config::Config;
use crate::error::Result;

/// Generate bibtex files from IETF bibliography sources.
#[derive(Parser)]
#[command(name = "ietfbib2bibtex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// A YAML configuration file (default: config.yaml)
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
}

/// Run the CLI: generate every bibliography from the configuration file.
///
/// A missing default configuration file is tolerated (empty configuration);
/// an explicitly given one must exist.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config_file {
        Some(path) => Config::from_file(path)?,
        None => Config::from_default_file()?,
    };
    generate_command(&config)
}

/// Generate all configured bibliographies with styled per-bibliography
/// output. The loop, failure counting, and final error live in
/// [`create_all_bibtexs`]; this only renders the outcomes.
fn generate_command(config: &Config) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Collecting entries...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = create_all_bibtexs(config, |bib_config, outcome| match outcome {
        Ok(path) => pb.println(format!(
            "{} {} ({})",
            style("Generated").green().bold(),
            style(&bib_config.name).cyan(),
            path.display()
        )),
        Err(e) => pb.println(format!(
            "{} {}: {e}",
            style("Failed").red().bold(),
            style(&bib_config.name).cyan()
        )),
    });

    pb.finish_and_clear();
    result
}

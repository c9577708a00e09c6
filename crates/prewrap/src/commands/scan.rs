//! `prewrap scan` command implementation.

use std::path::PathBuf;

use clap::Args;
use prewrap_config::{CliSettings, Config};
use prewrap_transform::FoundBlock;
use prewrap_tree::Root;

use super::wrapper_from_config;
use crate::error::CliError;
use crate::io::{read_input, write_output};
use crate::output::Output;

/// Arguments for the scan command.
#[derive(Args)]
pub(crate) struct ScanArgs {
    /// HAST JSON document to read (default: stdin).
    input: Option<PathBuf>,

    /// Diagram language to look for (overrides config).
    #[arg(short, long, env = "PREWRAP_LANGUAGE")]
    language: Option<String>,

    /// Path to configuration file (default: auto-discover prewrap.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ScanArgs {
    /// Execute the scan command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or input decoding fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            language: self.language,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let wrapper = wrapper_from_config(&config);

        let root = Root::from_json(&read_input(self.input.as_deref())?)?;
        let found = wrapper.find(&root);

        if found.is_empty() {
            output.nothing_found(&config.target.language_class());
            return Ok(());
        }

        write_output(None, &format_listing(&found))?;
        Ok(())
    }
}

/// One line per block: index, line count, and the first source line.
fn format_listing(found: &[FoundBlock]) -> String {
    found
        .iter()
        .map(|block| {
            let first_line = block.raw_code.lines().next().unwrap_or("");
            let line_count = block.raw_code.lines().count();
            format!("{}\t{line_count} line(s)\t{first_line}", block.index)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

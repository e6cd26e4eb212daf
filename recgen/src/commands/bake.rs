use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use recgen_manifest::{MANIFEST_FILE, Manifest};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to recgen.toml (defaults to ./recgen.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        let report = ops::bake(
            &manifest,
            ops::bake::BakeOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        // Successful artifacts are already on disk; the exit code reports the rest.
        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}

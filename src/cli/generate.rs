use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use reqdoc::{Engine, LayoutOptions, RequirementSet};

/// Command arguments for `reqdoc generate`.
#[derive(Debug, Parser)]
#[command(about = "Generate documents and a dependency diagram from extracted requirements")]
pub struct Generate {
    /// Path to the requirements JSON file produced by the extraction stage
    requirements: PathBuf,

    /// Skip the technical design document
    #[arg(long)]
    skip_design: bool,

    /// Skip the user story document
    #[arg(long)]
    skip_stories: bool,

    /// Skip the dependency diagram
    #[arg(long)]
    skip_diagram: bool,

    /// Layout seed for the dependency diagram
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

impl Generate {
    /// Runs the selected generation operations, continuing past individual
    /// failures, and fails overall if any artifact could not be generated.
    pub fn run(self, output_dir: PathBuf) -> anyhow::Result<()> {
        let set = RequirementSet::load(&self.requirements).with_context(|| {
            format!(
                "failed to load requirements from {}",
                self.requirements.display()
            )
        })?;

        let engine = Engine::new(output_dir).context("failed to prepare output directory")?;

        let mut failures = 0_usize;

        if !self.skip_design && engine.generate_design_document(&set).is_err() {
            failures += 1;
        }

        if !self.skip_stories && engine.generate_story_document(&set).is_err() {
            failures += 1;
        }

        if !self.skip_diagram {
            let options = LayoutOptions {
                seed: self.seed,
                ..LayoutOptions::default()
            };
            if engine.generate_dependency_diagram(&set, &options).is_err() {
                failures += 1;
            }
        }

        anyhow::ensure!(failures == 0, "{failures} artifact(s) failed to generate");
        Ok(())
    }
}

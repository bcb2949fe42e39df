// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments, runs the sampling use case, and prints a
// per-file summary. All work is delegated to Layer 2.
//
// Fatal errors (missing or unreadable input) come back as
// anyhow errors and end the process with a non-zero status.
// Per-size write failures are printed and the summary goes on.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::SampleArgs;

use crate::application::sample_use_case::{source_text, RunReport, SampleUseCase};
use crate::domain::error::SubsampleError;

/// Draw reproducible safe/harmful subsets and write them as JSON arrays.
#[derive(Parser, Debug)]
#[command(
    name = "dataset-subsample",
    version,
    about = "Sample equal numbers of safe and harmful records into shuffled JSON files."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: SampleArgs,
}

impl Cli {
    /// Convert args into a SampleConfig and hand off to Layer 2.
    pub fn run(self) -> Result<()> {
        let use_case = SampleUseCase::new(self.args.into());
        let cfg      = use_case.config();

        tracing::info!(
            "Sampling from '{}' and '{}'",
            cfg.safe_path().display(),
            cfg.harmful_path().display()
        );

        let report = use_case
            .execute()
            .context("Sampling run aborted")?;

        print_summary(&report);
        Ok(())
    }
}

fn print_summary(report: &RunReport) {
    println!("Safe records loaded:    {}", report.safe_loaded);
    println!("Harmful records loaded: {}", report.harmful_loaded);

    for size in &report.sizes {
        println!("\nSample size {}:", size.sample_size);
        println!("  Drew {} safe + {} harmful", size.safe_drawn, size.harmful_drawn);

        for shortfall in &size.shortfalls {
            println!("  ! {}", SubsampleError::from(*shortfall));
        }

        match &size.outcome {
            Ok(summary) => {
                println!("  Saved {} ({} items)", summary.path.display(), summary.written);
                println!("  - safe:    {}", summary.labels.safe);
                println!("  - harmful: {}", summary.labels.harmful);
                if summary.labels.unlabeled > 0 {
                    println!("  - no marker:   {}", summary.labels.unlabeled);
                }
                if summary.labels.ambiguous > 0 {
                    println!("  - both markers: {}", summary.labels.ambiguous);
                }
                println!("  - total:   {}", summary.labels.total());
            }
            Err(e) => {
                println!("  Not saved: {}", size.path.display());
                println!("  - {}: {}", e, source_text(e));
            }
        }
    }

    if report.failed_writes() > 0 {
        println!("\n{} of {} files could not be written.", report.failed_writes(), report.sizes.len());
    } else {
        println!("\nAll files generated.");
    }

    println!("\nOutput files:");
    for path in &report.existing_outputs {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        println!("  - {}", name);
    }
}

use std::path::PathBuf;

use clap::Args;
use quizme_core::load_questions;

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the question data file (JSON array)
    #[arg(long)]
    pub questions: PathBuf,

    /// Fail if any record was skipped
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ValidateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let report = load_questions(&args.questions)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}: {} of {} records usable",
            args.questions.display(),
            report.questions.len(),
            report.total_records()
        );
        for skipped in &report.skipped {
            println!("  record {}: {}", skipped.index, skipped.reason);
        }
    }

    if args.strict && !report.skipped.is_empty() {
        return Err(format!("{} record(s) skipped", report.skipped.len()).into());
    }
    Ok(())
}

use std::io;
use std::path::{Path, PathBuf};

use clap::Args;
use quizme_core::{load_questions, BoxManager, LinePrompter, Session, SessionReport};
use rand::seq::SliceRandom;

#[derive(Args)]
pub struct RunArgs {
    /// The name of the quiz taker
    pub name: String,

    /// Path to the question data file (JSON array)
    #[arg(long)]
    pub questions: PathBuf,

    /// Shuffle load order (only affects which of several equally-due questions comes first)
    #[arg(long)]
    pub shuffle: bool,

    /// Print the session report as JSON when the session ends
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RunArgs, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path)?;

    let mut loaded = match load_questions(&args.questions) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Exiting due to error in loading questions: {e}");
            std::process::exit(1);
        }
    };
    if loaded.questions.is_empty() {
        tracing::warn!(path = %args.questions.display(), "no usable questions in file");
    }
    if args.shuffle {
        loaded.questions.shuffle(&mut rand::thread_rng());
    }

    println!(
        "Welcome, {}! Let's start your adaptive quiz session.",
        args.name
    );

    let stdin = io::stdin();
    let prompter = LinePrompter::new(stdin.lock(), io::stdout());
    let manager = BoxManager::with_ladder(&config.ladder);
    let mut session = Session::new(manager, prompter).with_config(config.session.clone());
    session.add_questions(loaded.questions);

    let report = session.run()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &SessionReport) {
    println!(
        "Answered {} correctly and {} incorrectly; {} question(s) still in review.",
        report.correct, report.incorrect, report.remaining
    );
}

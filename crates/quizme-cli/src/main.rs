use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "quizme", version, about = "QuizMe: an adaptive quiz CLI")]
struct Cli {
    /// Config file to use instead of ~/.config/quizme/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    config_file: Option<PathBuf>,

    /// Verbose diagnostics on stderr (box moves, skipped records)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take an adaptive quiz session
    Run(commands::quiz::RunArgs),
    /// Check a question file without starting a session
    Validate(commands::validate::ValidateArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "quizme=debug,quizme_core=debug"
    } else {
        "quizme=warn,quizme_core=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config_file.as_deref();
    let result = match cli.command {
        Commands::Run(args) => commands::quiz::run(args, config_path),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Config { action } => commands::config::run(action, config_path),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "quizme", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

mod commands;
mod render;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tutorcal_core::config::TutorCalConfig;
use tutorcal_core::date_range::DateRange;
use tutorcal_core::RecordId;

#[derive(Parser)]
#[command(name = "tutorcal")]
#[command(about = "Show tutoring sessions, rosters and student birthdays as an agenda")]
struct Cli {
    /// Records export to read instead of the configured one
    #[arg(long, global = true)]
    records: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List upcoming occurrences grouped by day
    Agenda {
        /// Show occurrences from this date (YYYY-MM-DD, or "start" for everything before)
        #[arg(long)]
        from: Option<String>,

        /// Show occurrences until this date (YYYY-MM-DD, or "end" for everything after)
        #[arg(long)]
        to: Option<String>,

        /// Hide session occurrences
        #[arg(long)]
        no_sessions: bool,

        /// Hide birthday occurrences
        #[arg(long)]
        no_birthdays: bool,

        /// Also print occurrence ids
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show the details of one occurrence (ids are listed by `agenda --verbose`)
    Show { occurrence_id: String },
    /// List the students actively enrolled in a session
    Roster {
        session_id: String,

        /// Include inactive enrollments, with their status
        #[arg(short, long)]
        all: bool,
    },
    /// Print configuration paths and defaults
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = TutorCalConfig::load()?;
    let records_path = cli.records.unwrap_or_else(|| config.records_path());

    match cli.command {
        Commands::Agenda {
            from,
            to,
            no_sessions,
            no_birthdays,
            verbose,
        } => {
            let today = chrono::Local::now().date_naive();
            let range = DateRange::from_args(from.as_deref(), to.as_deref(), today)
                .map_err(|e| anyhow::anyhow!(e))?;

            let mut filter = config.filters;
            if no_sessions {
                filter.sessions = false;
            }
            if no_birthdays {
                filter.birthdays = false;
            }

            let snapshot = store::load_snapshot(&records_path).await?;
            commands::agenda::run(&snapshot, filter, range, verbose)
        }
        Commands::Show { occurrence_id } => {
            let snapshot = store::load_snapshot(&records_path).await?;
            commands::show::run(&snapshot, &occurrence_id)
        }
        Commands::Roster { session_id, all } => {
            let snapshot = store::load_snapshot(&records_path).await?;
            commands::roster::run(&snapshot, &RecordId::new(session_id), all)
        }
        Commands::Config => commands::config::run(&config, &records_path),
    }
}

/// Log to stderr, `warn` unless RUST_LOG says otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

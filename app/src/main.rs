#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    CommandStrategy, InfoStrategy, InitStrategy, ProgramsInput, ProgramsStrategy, RecommendInput,
    RecommendStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "minat")]
#[command(about = "Course recommender for UBM students", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend courses for a free-text interest or question
    Recommend {
        /// What you like, dislike or want to ask
        query: String,

        /// Only consider courses of this program
        #[arg(short, long)]
        program: Option<String>,

        /// Only consider courses of this semester
        #[arg(short, long)]
        semester: Option<u32>,

        /// Minimum similarity a course must exceed
        #[arg(long)]
        min_score: Option<f64>,

        /// Maximum number of courses to show
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Course catalog CSV (overrides config)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Never ask the AI assistant
        #[arg(long)]
        no_ai: bool,
    },
    /// List the programs and semesters of the catalog
    Programs {
        /// Course catalog CSV (overrides config)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show configuration information
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Recommend {
            query,
            program,
            semester,
            min_score,
            top_k,
            catalog,
            no_ai,
        } => {
            let input = RecommendInput {
                query,
                program,
                semester,
                min_score,
                top_k,
                catalog,
                no_ai,
            };
            RecommendStrategy.execute(input).await?;
        }
        Commands::Programs { catalog } => {
            ProgramsStrategy.execute(ProgramsInput { catalog }).await?;
        }
        Commands::Init => {
            InitStrategy.execute(()).await?;
        }
        Commands::Info => {
            InfoStrategy.execute(()).await?;
        }
        Commands::Version => {
            VersionStrategy.execute(()).await?;
        }
    }

    Ok(())
}

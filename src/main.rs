use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use wordrank::config::Config;
use wordrank::db::models::StoreOutcome;
use wordrank::db::sqlite::SqliteDatabase;
use wordrank::error::WordRankError;
use wordrank::fetch::client::PageClient;

/// Wordrank: the most used words in Project Gutenberg ebooks.
///
/// Fetches a book's plain text, ranks its words by frequency (skipping a
/// small stopword list), and keeps the top words per title in SQLite.
#[derive(Parser)]
#[command(name = "wordrank", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Fetch a book by URL, rank its words, store and show the top words
    Fetch {
        /// URL of the book's plain text (e.g. https://www.gutenberg.org/cache/epub/2701/pg2701.txt)
        url: String,

        /// Number of words to keep (default: WORDRANK_TOP_N or 10)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Show the stored top words for a title
    Lookup {
        /// The book title (case-insensitive, e.g. moby dick)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Print the ranking as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List every stored title
    List,

    /// Rank the words of a local text file without storing anything
    Analyze {
        /// Path to a downloaded plain-text book
        path: PathBuf,

        /// Number of words to show (default: WORDRANK_TOP_N or 10)
        #[arg(long, conflicts_with = "all")]
        top: Option<usize>,

        /// Show every distinct word instead of the top N
        #[arg(long)]
        all: bool,
    },

    /// Show database status (size, stored titles)
    Status,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordrank=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Init => {
            info!("Initializing wordrank database...");
            let db = wordrank::db::initialize_sqlite(&config.db_path)?;
            let table_count = db.table_count().await?;
            println!("Database initialized at: {}", config.db_path.display());
            println!("Tables created: {table_count}");
            println!("\nNext step: cargo run -- fetch <URL>");
        }

        Commands::Fetch { url, top } => {
            let limit = resolve_limit(top, &config)?;
            let db = wordrank::db::initialize_sqlite(&config.db_path)?;
            let client = PageClient::new(&config.user_agent, config.fetch_timeout)?;
            let excluded = config.excluded_words();

            let spinner = fetch_spinner(&url);
            let submitted = wordrank::pipeline::submit::run(
                &client,
                db.as_ref(),
                &excluded,
                &url,
                limit,
            )
            .await;
            spinner.finish_and_clear();

            match submitted {
                Ok(submission) => {
                    if let StoreOutcome::AlreadyExists { .. } = submission.outcome {
                        println!(
                            "{}",
                            format!(
                                "\"{}\" is already stored; showing the saved ranking.",
                                submission.result.title
                            )
                            .yellow()
                        );
                    }
                    wordrank::output::terminal::display_ranking(&submission.result);
                }
                Err(e) => return Ok(report(&e)),
            }
        }

        Commands::Lookup { title, json } => {
            let title = title.join(" ");
            let db = wordrank::db::open_sqlite(&config.db_path)?;

            match wordrank::pipeline::lookup::run(db.as_ref(), &title).await {
                Ok(result) if json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                Ok(result) => wordrank::output::terminal::display_ranking(&result),
                Err(e) => return Ok(report(&e)),
            }
        }

        Commands::List => {
            let db = wordrank::db::open_sqlite(&config.db_path)?;
            let titles = db.list_titles().await?;
            wordrank::output::terminal::display_title_list(&titles);
        }

        Commands::Analyze { path, top, all } => {
            let limit = if all {
                None
            } else {
                Some(resolve_limit(top, &config)?)
            };
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let analysis = wordrank::text::analyze(&raw, &config.excluded_words(), limit);
            wordrank::output::terminal::display_analysis(&analysis, &path.display().to_string());
        }

        Commands::Status => {
            let db = SqliteDatabase::new(&config.db_path);
            wordrank::status::show(&db, &config.db_path).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// A `--top` flag wins over the configured default; zero is rejected.
fn resolve_limit(top: Option<usize>, config: &Config) -> Result<usize> {
    match top {
        Some(0) => anyhow::bail!("--top must be at least 1"),
        Some(n) => Ok(n),
        None => Ok(config.top_n),
    }
}

/// Print a pipeline error as a user-facing message and pick the exit code.
fn report(err: &WordRankError) -> ExitCode {
    match err {
        WordRankError::NotFound(_) | WordRankError::NoWordsFound { .. } => {
            println!("{}", err.user_message().yellow());
        }
        WordRankError::InvalidUrl { source, .. } => {
            println!("{}", err.user_message().red());
            println!("  {}", format!("{source:#}").dimmed());
        }
        WordRankError::NoTitleFound { .. } | WordRankError::Storage(_) => {
            println!("{}", err.user_message().red());
        }
    }
    ExitCode::FAILURE
}

fn fetch_spinner(url: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .expect("valid template"),
    );
    spinner.set_message(format!("Fetching {url}"));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

//! Biology City CLI - walk the topic map from a terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use biocity_core::{ClickOutcome, MapVariant, TopicCatalog};
use biocity_progress::{ConnectionState, MapView, ProgressTracker, Session};

#[derive(Parser)]
#[command(name = "biocity")]
#[command(about = "Biology City topic map", long_about = None)]
struct Cli {
    /// Map variant whose built-in layout to use
    #[arg(long, global = true, default_value = "cities-skylines")]
    variant: MapVariant,

    /// Load the topic catalog from a JSON file instead
    #[arg(long, global = true)]
    catalog: Option<std::path::PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List topics in unlock order
    Topics,
    /// List districts and their topics
    Districts,
    /// Start an interactive session reading topic ids from stdin
    Play,
    /// Apply a sequence of clicks and print the resulting map
    Replay {
        /// Topic ids to click, in order
        #[arg(allow_negative_numbers = true)]
        clicks: Vec<i64>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = match &cli.catalog {
        Some(path) => TopicCatalog::load(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => cli.variant.catalog(),
    };
    debug!(variant = %cli.variant, topics = catalog.len(), "catalog ready");

    match cli.command {
        Commands::Topics => {
            println!("Topics ({})", catalog.len());
            for topic in &catalog {
                println!("  {:>2} | {} | {}", topic.id, topic.display_type, topic.name);
            }
        }
        Commands::Districts => {
            let districts = catalog.districts();
            if districts.is_empty() {
                println!("No districts in this layout");
            }
            for (name, ids) in districts {
                println!("{name}");
                for id in ids {
                    if let Some(topic) = catalog.get(id) {
                        let zone = topic.zone.map(|z| z.as_str()).unwrap_or("-");
                        println!("  {:>2} | {} | {}", id, zone, topic.name);
                    }
                }
            }
        }
        Commands::Play => {
            let mut session = Session::new(catalog);
            info!(session = %session.id(), "session started");
            print_view(&session.view());
            play(&mut session).await?;
            info!(
                session = %session.id(),
                started_at = %session.started_at(),
                seconds = (chrono::Utc::now() - session.started_at()).num_seconds(),
                clicks = session.history().len(),
                unlocked = session.tracker().unlocked_count(),
                "session ended"
            );
        }
        Commands::Replay { clicks, format } => {
            let mut session = Session::new(catalog);
            for raw in clicks {
                session.click(raw);
            }
            let view = session.view();
            match format {
                Format::Text => print_view(&view),
                Format::Json => println!("{}", view.to_json()?),
            }
        }
    }

    Ok(())
}

async fn play(session: &mut Session) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("Enter a topic id to click, or: view, history, quit");

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "view" => print_view(&session.view()),
            "history" => {
                for event in session.history() {
                    println!("  {} | {:>3} | {}", event.timestamp.format("%H:%M:%S"), event.requested, format_outcome(&event.outcome));
                }
            }
            input => match input.parse::<i64>() {
                Ok(raw) => {
                    let outcome = session.click(raw);
                    println!("{}", format_outcome(&outcome));
                    println!("  Current topic: {}", session.current_topic_name());
                    println!("  Progress: {}/{}", session.tracker().unlocked_count(), session.tracker().total());
                }
                Err(_) => println!("Not a topic id: {input}"),
            },
        }
    }

    Ok(())
}

fn print_view(view: &MapView) {
    println!("Progress: {}/{} ({:.0}%)", view.progress.unlocked, view.progress.total, view.progress.percentage);
    println!("Current topic: {} - {}", view.current_topic.id, view.current_topic.name);
    for topic in &view.topics {
        let marker = match (topic.active, topic.unlocked) {
            (true, _) => "*",
            (false, true) => "+",
            (false, false) => " ",
        };
        println!("  [{marker}] {:>2} {}", topic.id, topic.name);
    }
    let next = view
        .connections
        .iter()
        .find(|c| c.state == ConnectionState::Next);
    if let Some(connection) = next {
        println!("Next: {} -> {}", connection.from, connection.to);
    }
    for district in &view.districts {
        println!("  {}: {}/{}", district.name, district.unlocked, district.topics.len());
    }
}

fn format_outcome(outcome: &ClickOutcome) -> String {
    match outcome {
        ClickOutcome::Ignored => "LOCKED (ignored)".to_string(),
        ClickOutcome::Activated { topic } => format!("ACTIVE {topic}"),
        ClickOutcome::Unlocked { topic, next } => format!("ACTIVE {topic}, UNLOCKED {next}"),
    }
}

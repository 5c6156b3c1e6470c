use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::indexer::{MessageIndex, build_message_index};
use crate::models::{Direction, Message, SearchBuckets};
use crate::search::{ContentQuery, DEFAULT_BUCKET_FORMAT};
use crate::utils::format_path_with_tilde;

const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Parser)]
#[command(name = "nbu-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Search SMS messages in legacy phone backup files", long_about = None)]
pub struct Cli {
    /// Backup file (UTF-16LE VMSG container)
    pub file: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show message counts and date range
    Stats,
    /// Count regex matches in message bodies, grouped by date
    Search {
        /// Regular expression to search for
        pattern: String,

        /// Which messages to search
        #[arg(short, long, value_enum, default_value_t = Direction::Received)]
        direction: Direction,

        /// Match case exactly (default is case-insensitive)
        #[arg(long)]
        case_sensitive: bool,

        /// strftime-style format that defines the date buckets
        #[arg(long, default_value = DEFAULT_BUCKET_FORMAT)]
        bucket_format: String,

        /// List matching messages under each bucket
        #[arg(long)]
        show_messages: bool,
    },
    /// Find messages whose phone number contains a fragment
    Phone {
        /// Part of the phone number, matched as-is
        fragment: String,

        /// Which messages to search
        #[arg(short, long, value_enum, default_value_t = Direction::Received)]
        direction: Direction,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let index = build_message_index(&cli.file)
        .with_context(|| format!("Failed to load backup {}", cli.file.display()))?;

    match command {
        Commands::Stats => show_stats(&cli.file, &index, cli.json)?,
        Commands::Search { pattern, direction, case_sensitive, bucket_format, show_messages } => {
            let query = ContentQuery::new(pattern.as_str())
                .case_sensitive(*case_sensitive)
                .bucket_format(bucket_format.as_str());
            let buckets = index.search_content(*direction, &query)?;
            if cli.json {
                print_json(&buckets)?;
            } else {
                print_buckets(&query, *direction, &buckets, *show_messages);
            }
        }
        Commands::Phone { fragment, direction } => {
            let messages = index.search_phone(*direction, fragment);
            if cli.json {
                print_json(&messages)?;
            } else {
                print_phone_results(fragment, *direction, &messages);
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays parseable with --json
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nbu_explorer={}", level)));

    // Ignore the error if a subscriber is already installed (e.g. by an embedding caller)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Serialize)]
struct Stats {
    file: String,
    total: usize,
    sent: usize,
    received: usize,
    oldest: Option<String>,
    newest: Option<String>,
}

fn show_stats(file: &Path, index: &MessageIndex, json: bool) -> Result<()> {
    let oldest = index.iter().map(|m| m.timestamp).min();
    let newest = index.iter().map(|m| m.timestamp).max();

    let stats = Stats {
        file: format_path_with_tilde(file),
        total: index.len(),
        sent: index.sent.len(),
        received: index.received.len(),
        oldest: oldest.map(|t| t.format(TIMESTAMP_DISPLAY_FORMAT).to_string()),
        newest: newest.map(|t| t.format(TIMESTAMP_DISPLAY_FORMAT).to_string()),
    };

    if json {
        return print_json(&stats);
    }

    println!("Phone Backup Statistics");
    println!("=======================");
    println!("Total messages: {}", stats.total);
    println!("  Sent: {}", stats.sent);
    println!("  Received: {}", stats.received);
    println!();
    println!("Backup file: {}", stats.file);

    if let Some(oldest) = &stats.oldest {
        println!("Oldest message: {}", oldest);
    }
    if let Some(newest) = &stats.newest {
        println!("Newest message: {}", newest);
    }

    Ok(())
}

fn print_buckets(
    query: &ContentQuery,
    direction: Direction,
    buckets: &SearchBuckets<'_>,
    show_messages: bool,
) {
    println!("Matches for /{}/ in {} messages", query.pattern, direction);

    for (key, bucket) in buckets.iter() {
        println!("{}: {} matches in {} messages", key, bucket.count, bucket.messages.len());
        if show_messages {
            for message in &bucket.messages {
                println!("    {}", format_message(message));
            }
        }
    }

    println!(
        "Total: {} matches in {} messages",
        buckets.total_count(),
        buckets.total_messages()
    );
}

fn print_phone_results(fragment: &str, direction: Direction, messages: &[&Message]) {
    println!("{} messages matching phone '{}'", direction, fragment);
    for message in messages {
        println!("  {}", format_message(message));
    }
    println!("Total: {} messages", messages.len());
}

fn format_message(message: &Message) -> String {
    format!(
        "[{}] {}: {}",
        message.timestamp.format(TIMESTAMP_DISPLAY_FORMAT),
        message.phone_number,
        message.content
    )
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

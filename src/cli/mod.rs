pub mod api_client;
mod commands;
pub mod error;
mod utils;

use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::sync::broadcast;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::api_client::HttpPeopleApi;
use crate::cli::error::CliResult;
use crate::notify::{ChannelNotifier, Notification};
use crate::table::{DEFAULT_PAGE_SIZE, TableConfig, TableController};

#[derive(Parser)]
#[command(name = "people-table")]
#[command(author, version, about = "Browse the people API page by page", long_about = None)]
pub struct Cli {
    /// Override the API URL (default: PEOPLE_API_URL env or http://localhost:3000)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Rows per page
    #[arg(long, global = true, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Abort requests that take longer than this many milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List people one page at a time
    List {
        /// Only show people with this color
        #[arg(long)]
        color: Option<String>,
        /// Page to show (1-based)
        #[arg(long)]
        page: Option<usize>,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// List the colors people can be filtered by
    Colors {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Add a person
    Add {
        /// Person's name
        #[arg(long)]
        name: String,
        /// Person's color
        #[arg(long)]
        color: String,
        /// Extra attribute as key=value (repeatable)
        #[arg(long = "attr")]
        attributes: Vec<String>,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

/// Initialize tracing subscriber with env filter, logging to stderr
fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "people_table=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Print every notification raised while the command ran.
fn drain_notifications(rx: &mut broadcast::Receiver<Notification>) {
    while let Ok(notification) = rx.try_recv() {
        eprintln!("{}", notification);
    }
}

pub async fn run() -> CliResult<()> {
    init_tracing();

    let cli = Cli::parse();
    let api_client = HttpPeopleApi::new(cli.api_url, cli.timeout_ms.map(Duration::from_millis))?;
    let notifier = ChannelNotifier::new();
    let mut notifications = notifier.subscribe();

    let config = TableConfig {
        page_size: cli.page_size,
        ..TableConfig::default()
    };
    let table = TableController::with_config(api_client, notifier, config)?;

    let result = match cli.command {
        Some(Commands::List {
            color,
            page,
            format,
        }) => commands::people::list_people(&table, color.as_deref(), page, &format).await,
        Some(Commands::Colors { format }) => {
            commands::people::list_colors(&table, &format).await
        }
        Some(Commands::Add {
            name,
            color,
            attributes,
            format,
        }) => commands::people::add_person(&table, &name, &color, &attributes, &format).await,
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["people-table", "--help"]);
            return Ok(());
        }
    };

    drain_notifications(&mut notifications);
    table.dispose();

    println!("{}", result?);
    Ok(())
}

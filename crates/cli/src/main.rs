//! DevSearch CLI: query a search endpoint from the terminal.
//!
//! Drives the same view state machine as the web front end, so prompts,
//! empty states and pagination behave identically.

mod output;
mod repl;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use devsearch_core::view::{ERROR_MESSAGE, PROMPT_MESSAGE};
use devsearch_core::{load_config, SearchClient, SearchView};

/// DevSearch CLI: developer search from the terminal.
#[derive(Parser)]
#[command(name = "ds", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Search endpoint URL (default: from .devsearch.toml)
    #[arg(long, global = true)]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and print a page of results
    Search {
        /// Search query
        query: String,

        /// Page to fetch (1-indexed)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive search loop
    Repl,
}

fn resolve_endpoint(endpoint: Option<String>) -> String {
    endpoint.unwrap_or_else(|| {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        load_config(&cwd).endpoint
    })
}

/// Run one search. Returns the process exit code.
async fn run_search(client: &SearchClient, query: &str, page: u32, json: bool) -> i32 {
    let mut view = SearchView::new();
    let Some(mut ticket) = view.submit_query(query) else {
        eprintln!("{PROMPT_MESSAGE}");
        return 1;
    };
    if page > 1 {
        if let Some(paged) = view.request_page(page) {
            ticket = paged;
        }
    }

    let outcome = client.fetch(&ticket).await;

    if json {
        return match outcome {
            Ok(response) => {
                println!("{}", output::format_json(&response));
                0
            }
            Err(e) => {
                tracing::warn!("Search request failed: {e}");
                eprintln!("{ERROR_MESSAGE}");
                1
            }
        };
    }

    view.complete(&ticket, outcome);
    let rendered = output::format_view(&view);
    let code = output::exit_code(view.panel());
    if code == 0 {
        print!("{rendered}");
    } else {
        eprint!("{rendered}");
    }
    code
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("devsearch=warn".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let endpoint = resolve_endpoint(cli.endpoint);
    let client = match SearchClient::new(&endpoint) {
        Ok(client) => {
            tracing::debug!(endpoint = %client.endpoint(), "Using search endpoint");
            client
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let code = match cli.command {
        Commands::Search { query, page, json } => run_search(&client, &query, page, json).await,
        Commands::Repl => match repl::run(&client).await {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("I/O error: {e}");
                1
            }
        },
    };
    std::process::exit(code);
}

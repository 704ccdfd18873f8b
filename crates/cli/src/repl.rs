//! Interactive search loop.

use devsearch_core::{SearchClient, SearchView};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::output::format_view;

const PROMPT: &str = "Enter your search query (or type 'exit' to quit): ";
const HELP: &str = "Commands: :n next page, :p previous page, :<number> jump to page, exit to quit";

#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
    Exit,
    Next,
    Previous,
    Page(u32),
    Help,
    Query(String),
}

pub fn parse_command(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.eq_ignore_ascii_case("exit") {
        return ReplCommand::Exit;
    }
    match line.strip_prefix(':') {
        Some("n") | Some("next") => ReplCommand::Next,
        Some("p") | Some("prev") => ReplCommand::Previous,
        Some(rest) => rest.parse().map(ReplCommand::Page).unwrap_or(ReplCommand::Help),
        None => ReplCommand::Query(line.to_string()),
    }
}

/// Page a navigation command leads to, if that control is rendered and enabled.
pub fn navigation_target(view: &SearchView, command: &ReplCommand) -> Option<u32> {
    let bar = view.pagination()?;
    let control = match command {
        ReplCommand::Next => bar.next(),
        ReplCommand::Previous => bar.previous(),
        ReplCommand::Page(n) => return bar.target_for(*n),
        _ => None,
    }?;
    (!control.disabled).then_some(control.target)
}

pub async fn run(client: &SearchClient) -> std::io::Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut view = SearchView::new();

    stdout.write_all(b"Welcome to DevSearch!\n").await?;

    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            stdout.write_all(b"\n").await?;
            break;
        };

        let command = parse_command(&line);
        let ticket = match &command {
            ReplCommand::Exit => {
                stdout.write_all(b"Goodbye!\n").await?;
                break;
            }
            ReplCommand::Help => {
                stdout.write_all(format!("{HELP}\n").as_bytes()).await?;
                continue;
            }
            ReplCommand::Query(query) => view.submit_query(query),
            nav => match navigation_target(&view, nav) {
                Some(page) => view.request_page(page),
                None => {
                    stdout.write_all(b"No such page.\n").await?;
                    continue;
                }
            },
        };

        if let Some(ticket) = ticket {
            let outcome = client.fetch(&ticket).await;
            view.complete(&ticket, outcome);
        }

        stdout.write_all(b"\n").await?;
        stdout.write_all(format_view(&view).as_bytes()).await?;
        if view.pagination().is_some() {
            stdout.write_all(format!("{HELP}\n").as_bytes()).await?;
        }
        stdout.write_all(b"\n").await?;
    }

    Ok(())
}

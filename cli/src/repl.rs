//! Line-driven front end: every stdin line is a query change, lines starting
//! with `:` are dropdown commands.

use anyhow::Result;
use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::warn;
use typeahead_core::types::{Item, SuggestConfig};
use typeahead_search::{Lookup, Notify, Phase, SearchState, SuggestEngine};

/// Upper bound on waiting for outstanding lookups after stdin closes.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Query(String),
    /// Zero-based index.
    Choose(usize),
    Dismiss,
    Focus,
    Submit,
    Quit,
    Unknown(String),
}

/// `:choose N` is one-based. `::text` types a literal `:text`.
pub(crate) fn parse_line(line: &str) -> Command {
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Query(line.to_string());
    };
    if rest.starts_with(':') {
        return Command::Query(rest.to_string());
    }

    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("choose" | "c"), Some(n)) => n
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .map(Command::Choose)
            .unwrap_or_else(|| Command::Unknown(line.to_string())),
        (Some("dismiss" | "esc"), None) => Command::Dismiss,
        (Some("focus"), None) => Command::Focus,
        (Some("submit" | "enter"), None) => Command::Submit,
        (Some("quit" | "q"), None) => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Renders the search box as the dropdown would show it.
pub(crate) fn render(state: &SearchState<Item>) -> String {
    let mut out = format!("> {}", state.current_query);
    match state.phase() {
        Phase::Idle => {}
        Phase::Pending => out.push_str("  [typing]"),
        Phase::Loading => out.push_str("  [loading]"),
        Phase::Closed => out.push_str("  [closed]"),
        Phase::Resolved => {
            if let Some(err) = &state.last_error {
                let _ = write!(out, "  [search failed: {err}]");
            }
        }
    }

    if !state.is_open {
        return out;
    }
    for (position, item) in state.suggestions.iter().enumerate() {
        let _ = write!(out, "\n  {}. {}", position + 1, item.primary_label);
        if !item.secondary_label.is_empty() {
            let _ = write!(out, " ({})", item.secondary_label);
        }
    }
    if state.phase() == Phase::Resolved
        && state.suggestions.is_empty()
        && state.last_error.is_none()
    {
        out.push_str("\n  (no results)");
    }
    out
}

fn print_selection(item: &Item) -> Result<()> {
    println!("selected: {} [{}]", item.primary_label, item.key);
    if !item.detail.is_null() {
        println!("{}", serde_json::to_string_pretty(&item.detail)?);
    }
    Ok(())
}

fn render_if_changed(state: &SearchState<Item>, last: &mut String) {
    let rendered = render(state);
    if rendered != *last {
        println!("{rendered}");
        *last = rendered;
    }
}

/// Drives an engine from stdin until EOF or `:quit`, then waits for
/// outstanding lookups to resolve.
pub(crate) async fn run<L>(lookup: L, config: SuggestConfig) -> Result<()>
where
    L: Lookup<Item = Item>,
{
    let (tx, mut changes) = mpsc::unbounded_channel();
    let notify: Notify = Arc::new(move || {
        let _ = tx.send(());
    });
    let mut engine = SuggestEngine::new(lookup, config, notify)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last = String::new();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(&line) {
                    Command::Query(query) => engine.on_query_change(query),
                    Command::Choose(index) => match engine.choose_index(index) {
                        Some(item) => print_selection(&item)?,
                        None => println!("no suggestion #{}", index + 1),
                    },
                    Command::Dismiss => engine.dismiss(),
                    Command::Focus => engine.reopen(),
                    Command::Submit => engine.submit(),
                    Command::Quit => break,
                    Command::Unknown(line) => println!("unknown command: {line}"),
                }
            }
            Some(()) = changes.recv() => {}
        }
        render_if_changed(&engine.state(), &mut last);
    }

    loop {
        let state = engine.state();
        if !state.pending && !state.is_loading {
            break;
        }
        if tokio::time::timeout(SETTLE_TIMEOUT, changes.recv())
            .await
            .is_err()
        {
            warn!("gave up waiting for outstanding lookups");
            break;
        }
    }
    render_if_changed(&engine.state(), &mut last);

    engine.dispose();
    Ok(())
}

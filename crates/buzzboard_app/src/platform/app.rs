use std::io::BufRead;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use board_logging::{board_info, board_warn};
use buzzboard_core::{update, AppState, Msg, Sort};
use buzzboard_engine::{EngineHandle, FetchSettings};

use super::config;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::Both);

    let api_base = config::api_base();
    let page_path = config::page_path();
    board_info!(
        "buzzboard starting; api base {api_base}, page {}",
        page_path.display()
    );

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let (engine, engine_events) =
        EngineHandle::new(&api_base, FetchSettings::default()).context("start fetch engine")?;
    let runner = EffectRunner::new(engine, engine_events, msg_tx.clone());

    // Stdin stands in for the interactive surface: one command per line.
    let shutdown = Arc::new(AtomicBool::new(false));
    spawn_stdin_reader(msg_tx.clone(), shutdown.clone());
    print_help();

    let mut state = AppState::new();

    // Automatic refresh once at startup.
    dispatch(&mut state, Msg::RefreshRequested, &runner, &page_path)?;

    while let Ok(msg) = msg_rx.recv() {
        dispatch(&mut state, msg, &runner, &page_path)?;
        if shutdown.load(Ordering::SeqCst) {
            break;
        }
    }

    board_info!("buzzboard shutting down");
    Ok(())
}

/// Runs one message through the pure update, executes any effects, and
/// re-renders the page wholesale when the state marked itself dirty.
fn dispatch(
    state: &mut AppState,
    msg: Msg,
    runner: &EffectRunner,
    page_path: &Path,
) -> anyhow::Result<()> {
    let current = std::mem::take(state);
    let (mut next, effects) = update(current, msg);
    runner.enqueue(effects);

    if next.consume_dirty() {
        let view = next.view();
        let page = ui::render::render_page(&view);
        std::fs::write(page_path, page)
            .with_context(|| format!("write page to {}", page_path.display()))?;
        board_info!(
            "rendered {} cards to {}",
            view.cards.len(),
            page_path.display()
        );
    }

    *state = next;
    Ok(())
}

fn spawn_stdin_reader(msg_tx: mpsc::Sender<Msg>, shutdown: Arc<AtomicBool>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Command::Dispatch(msg) => {
                    if msg_tx.send(msg).is_err() {
                        return;
                    }
                }
                Command::Help => print_help(),
                Command::Empty => {}
                Command::Unknown(input) => {
                    board_warn!("unknown command: {input}");
                    print_help();
                }
                Command::Quit => break,
            }
        }
        // Quit command or EOF: wake the main loop so it can exit.
        shutdown.store(true, Ordering::SeqCst);
        let _ = msg_tx.send(Msg::NoOp);
    });
}

#[derive(Debug, PartialEq)]
enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "sort" => match Sort::from_param(rest) {
            Some(sort) => Command::Dispatch(Msg::SortSelected(sort)),
            None => Command::Unknown(line.to_string()),
        },
        "keyword" | "q" => Command::Dispatch(Msg::KeywordChanged(rest.to_string())),
        "tag" => Command::Dispatch(Msg::TagChanged(rest.to_string())),
        "source" => Command::Dispatch(Msg::SourceTypeChanged(rest.to_string())),
        "refresh" | "r" => Command::Dispatch(Msg::RefreshRequested),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn print_help() {
    println!("commands:");
    println!("  sort <new|buzz>    select ranking order and refresh");
    println!("  source [type]      set or clear the source-type filter and refresh");
    println!("  keyword [text]     set or clear the keyword filter (no refresh)");
    println!("  tag [text]         set or clear the tag filter (no refresh)");
    println!("  refresh            fetch with the current filters");
    println!("  quit               exit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_command_parses_wire_values() {
        assert_eq!(
            parse_command("sort buzz"),
            Command::Dispatch(Msg::SortSelected(Sort::Buzz))
        );
        assert_eq!(
            parse_command("sort new"),
            Command::Dispatch(Msg::SortSelected(Sort::New))
        );
        assert!(matches!(parse_command("sort hot"), Command::Unknown(_)));
    }

    #[test]
    fn text_filters_capture_the_rest_of_the_line() {
        assert_eq!(
            parse_command("keyword rust async"),
            Command::Dispatch(Msg::KeywordChanged("rust async".to_string()))
        );
        assert_eq!(
            parse_command("tag  webdev "),
            Command::Dispatch(Msg::TagChanged("webdev".to_string()))
        );
    }

    #[test]
    fn bare_filter_commands_clear_the_field() {
        assert_eq!(
            parse_command("keyword"),
            Command::Dispatch(Msg::KeywordChanged(String::new()))
        );
        assert_eq!(
            parse_command("source"),
            Command::Dispatch(Msg::SourceTypeChanged(String::new()))
        );
    }

    #[test]
    fn refresh_and_quit_are_recognized() {
        assert_eq!(
            parse_command("refresh"),
            Command::Dispatch(Msg::RefreshRequested)
        );
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command(""), Command::Empty);
    }
}

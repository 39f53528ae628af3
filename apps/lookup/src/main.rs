use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{load_settings, PaperSearch, ScholarClient};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc::{self, Receiver, Sender},
};
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod view;

use backend_bridge::{commands::BackendCommand, runtime};
use controller::{
    events::{parse_input, InputAction, UiEvent},
    orchestration::dispatch_backend_command,
    reducer::LookupScreen,
};
use view::{render_results, render_screen, HELP, PROMPT_HINT};

#[derive(Parser, Debug)]
#[command(name = "scholar-lookup", about = "Search Semantic Scholar papers by keyword")]
struct Args {
    /// Search once and exit. Without a query an interactive prompt starts.
    query: Vec<String>,
    /// With a query, also print the details of result N (1-based).
    #[arg(long, value_name = "N")]
    select: Option<usize>,
    /// Settings file; defaults to ./scholar.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    api_base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(url) = args.api_base_url {
        settings.api_base_url = url;
    }
    tracing::debug!(?settings, "loaded settings");

    let backend: Arc<dyn PaperSearch> = Arc::new(ScholarClient::new(settings));
    let (cmd_tx, cmd_rx) = mpsc::channel::<BackendCommand>(16);
    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>(64);
    runtime::launch(backend, cmd_rx, ui_tx);

    let screen = LookupScreen::default();
    if args.query.is_empty() {
        run_interactive(screen, cmd_tx, ui_rx).await
    } else {
        run_once(screen, args.query.join(" "), args.select, cmd_tx, ui_rx).await
    }
}

/// Starts a search unless one is in flight. Returns a status line when the
/// search could not be started.
fn submit_search(
    screen: &mut LookupScreen,
    cmd_tx: &Sender<BackendCommand>,
    query: String,
) -> Option<String> {
    let Some(ticket) = screen.begin_search() else {
        return Some("Search in progress; please wait".to_string());
    };
    if let Err(status) = dispatch_backend_command(cmd_tx, BackendCommand::Search { ticket, query }) {
        screen.fail_pending(status);
    }
    None
}

async fn run_once(
    mut screen: LookupScreen,
    query: String,
    select: Option<usize>,
    cmd_tx: Sender<BackendCommand>,
    mut ui_rx: Receiver<UiEvent>,
) -> Result<()> {
    submit_search(&mut screen, &cmd_tx, query);
    while screen.is_loading() {
        let Some(event) = ui_rx.recv().await else {
            bail!("backend worker stopped before the search settled");
        };
        screen.apply(event);
    }

    if let Some(error) = screen.error() {
        bail!("{error}");
    }
    if let Some(row) = select {
        screen
            .select(row)
            .with_context(|| format!("no result number {row}"))?;
    }
    println!("{}", render_screen(&screen));
    Ok(())
}

async fn run_interactive(
    mut screen: LookupScreen,
    cmd_tx: Sender<BackendCommand>,
    mut ui_rx: Receiver<UiEvent>,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{PROMPT_HINT} (:help for commands)");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                match parse_input(&line) {
                    None => continue,
                    Some(InputAction::Quit) => break,
                    Some(InputAction::Help) => println!("{HELP}"),
                    Some(InputAction::Invalid(message)) => println!("{message}"),
                    Some(InputAction::Close) => {
                        screen.close_detail();
                        println!("{}", render_screen(&screen));
                    }
                    Some(InputAction::Open(row)) => {
                        if screen.select(row).is_some() {
                            println!("{}", render_screen(&screen));
                        } else {
                            println!("No result number {row}");
                        }
                    }
                    Some(InputAction::Search(query)) => {
                        match submit_search(&mut screen, &cmd_tx, query) {
                            Some(status) => println!("{status}"),
                            None => println!("{}", render_results(&screen)),
                        }
                    }
                }
            }
            event = ui_rx.recv() => {
                let Some(event) = event else {
                    bail!("backend worker stopped");
                };
                screen.apply(event);
                println!("{}", render_screen(&screen));
            }
        }
    }

    Ok(())
}

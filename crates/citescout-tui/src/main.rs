use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ratatui::crossterm::event;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use citescout_core::SearchClient;

mod action;
mod app;
mod config_file;
mod export;
mod input;
mod persistence;
mod theme;
mod tui_event;
mod view;

use app::App;
use tui_event::{BackendCommand, BackendEvent};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Citescout — scholarly search with a persistent citation collection.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the search service
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Color theme: hacker (default) or modern
    #[arg(long)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let file_config = config_file::load_config();

    // Resolve config from CLI flags > env vars > config file > defaults
    let base_url = args
        .base_url
        .or_else(|| std::env::var("CITESCOUT_BASE_URL").ok())
        .or_else(|| file_config.base_url())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let timeout_secs = args
        .timeout_secs
        .or_else(|| {
            std::env::var("CITESCOUT_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or_else(|| file_config.timeout_secs())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let theme_name = args
        .theme
        .or_else(|| file_config.theme())
        .unwrap_or_else(|| "hacker".to_string());
    let theme = match theme_name.as_str() {
        "modern" => theme::Theme::modern(),
        _ => theme::Theme::hacker(),
    };

    // The terminal is owned by the UI, so tracing goes to a file.
    let _log_guard = init_logging();

    // Batched session read, before the terminal takes over.
    let store = persistence::SessionStore::open_default();
    let session = store.load_session();

    let client = Arc::new(SearchClient::new(
        base_url,
        Duration::from_secs(timeout_secs),
    ));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let backend_terminal = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_terminal)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(theme, store, export::default_dir());
    // Restoration renders the stored query, mode and results directly; it
    // never re-fetches and never writes back to the store.
    app.restore(session);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel::<BackendCommand>();
    let cancel = CancellationToken::new();

    app.backend_cmd_tx = Some(cmd_tx);

    // Backend listener: one spawned fetch per search command. In-flight
    // requests are never cancelled; the app discards stale responses by seq.
    let event_tx_for_backend = event_tx.clone();
    let client_for_backend = client.clone();
    let cancel_for_backend = cancel.clone();
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel_for_backend.cancelled() => break,
                maybe_cmd = cmd_rx.recv() => {
                    let Some(cmd) = maybe_cmd else { break };
                    match cmd {
                        BackendCommand::Search { seq, mode, query } => {
                            let client = client_for_backend.clone();
                            let tx = event_tx_for_backend.clone();
                            tokio::spawn(async move {
                                let outcome = client.query(mode, &query).await;
                                let _ = tx.send(BackendEvent::SearchFinished {
                                    seq,
                                    mode,
                                    query,
                                    outcome,
                                });
                            });
                        }
                    }
                }
            }
        }
    });

    // Also handle Ctrl+C at the OS level for clean shutdown
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_for_signal.cancel();
        }
    });

    // Main event loop
    let tick_rate = Duration::from_millis(100);

    loop {
        // Draw
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            // Backend events (non-blocking drain)
            maybe_event = event_rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.handle_backend_event(backend_event);
                    // Drain any additional queued backend events
                    while let Ok(evt) = event_rx.try_recv() {
                        app.handle_backend_event(evt);
                    }
                }
            }
            // Terminal input events
            _ = async {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let action = input::map_event(&evt, &app.input_mode);
                        if app.update(action) {
                            // Quit requested
                        }
                    }
                }
            } => {}
        }

        // Process tick
        app.update(action::Action::Tick);

        if app.should_quit || cancel.is_cancelled() {
            cancel.cancel();
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

/// Route tracing to `<data_dir>/citescout/logs/`, one file per day. Returns
/// the writer guard that must stay alive for the process lifetime.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let dir = dirs::data_dir()?.join("citescout").join("logs");
    std::fs::create_dir_all(&dir).ok()?;
    let appender = tracing_appender::rolling::daily(dir, "citescout.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

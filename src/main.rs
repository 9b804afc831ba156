use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod basket;
mod components;
mod config;
mod constants;
mod event;
mod handler;
mod service;
mod tui;
mod ui;

use crate::{
    api::BasketApiClient,
    app::App,
    basket::{TicketData, TicketSource},
    constants::TICK_RATE,
    event::{Action, ApiUpdateEvent},
    handler::handle_event,
    service::ApiManager,
    tui::Tui,
};

/// Customer-service basket lookup terminal UI.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Base URL of the ticket API.
    #[arg(long)]
    api_url: Option<String>,

    /// Ticket id to fetch in the Transaction Completion section. Without
    /// it, a canned ticket record is shown directly.
    #[arg(long)]
    ticket_id: Option<String>,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;
    color_eyre::install()?;

    let mut settings = config::load_settings();
    if let Some(url) = cli.api_url {
        settings.api_base_url = url;
    }

    let ticket_source = match cli.ticket_id {
        Some(id) => TicketSource::Fetched(id),
        None => TicketSource::Direct(TicketData::demo()),
    };

    let mut terminal = tui::init()?;
    let mut app = App::new(settings, ticket_source);

    let runtime = tokio::runtime::Handle::current();
    let (api_event_sender, mut api_event_receiver) = mpsc::channel::<ApiUpdateEvent>(100);
    let client = Arc::new(BasketApiClient::new(app.settings.api_base_url.clone()));
    let api = ApiManager::new(client, runtime, api_event_sender);

    let result = run_app(&mut terminal, &mut app, &api, &mut api_event_receiver).await;

    tui::restore()?;

    // Persist the last-used tab; losing this is not worth an error exit.
    if let Err(e) = config::save_settings(&app.settings) {
        warn!(%e, "failed to save settings");
    }

    result
}

fn init_tracing(log_file: Option<&std::path::Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Main application loop.
async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    api: &ApiManager,
    api_event_receiver: &mut mpsc::Receiver<ApiUpdateEvent>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        if app.exit {
            break;
        }

        terminal.draw(|frame| ui::render(app, frame))?;

        // Poll terminal input with a tiny timeout so API events are never
        // starved behind a blocking read.
        let mut terminal_event_ready = false;
        if crossterm::event::poll(Duration::from_millis(1))? {
            terminal_event_ready = true;
        }

        if terminal_event_ready {
            match crossterm::event::read() {
                Ok(crossterm::event::Event::Resize(..)) => {
                    // Redraw happens at the top of the next iteration.
                    continue;
                }
                Ok(event) => {
                    if let Some(action) = handle_event(app, event) {
                        if let Err(e) = app.update(action, api) {
                            app.update(Action::ShowMessage(format!("Error: {}", e)), api)?;
                        }
                    }
                }
                Err(_) => {
                    app.exit = true;
                }
            }
        }

        // Drain any waiting API event without blocking.
        match api_event_receiver.try_recv() {
            Ok(api_event) => {
                let action = match api_event {
                    ApiUpdateEvent::SearchCompleted(result) => Action::UpdateSearchResult(result),
                    ApiUpdateEvent::TicketFetched { generation, result } => {
                        Action::UpdateTicketDetails { generation, result }
                    }
                };
                if let Err(e) = app.update(action, api) {
                    app.update(Action::ShowMessage(format!("Error: {}", e)), api)?;
                }
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                app.exit = true;
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
        }

        // Idle sleep keeps CPU usage down without delaying input handling.
        if !terminal_event_ready {
            let remaining = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_millis(5));
            tokio::time::sleep(remaining.min(Duration::from_millis(50))).await;
        }
    }
    Ok(())
}

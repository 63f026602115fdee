//! Terminal UI for Bulls & Cows.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Intent, map_key};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::api::{GameApi, RestGameClient};
use crate::config::ClientConfig;
use crate::machine::{CallOutcome, PendingCall};

/// Run the TUI client
pub async fn run_tui(config: ClientConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create("bulls_cows_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,bulls_cows=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(api_base = %config.api_base(), "Starting Bulls & Cows TUI");

    let client = RestGameClient::new(config.api_base().clone());
    let app = App::new(*config.difficulty());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

/// Draw, apply settled calls, read keys; until the user quits.
///
/// Calls run on spawned tasks so the screen keeps updating while the
/// server thinks. The machine's busy flag keeps it to one at a time.
#[instrument(skip_all)]
async fn run_app<A>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    api: A,
) -> Result<()>
where
    A: GameApi + Clone + 'static,
{
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<CallOutcome>();

    loop {
        let snapshot = app.snapshot();
        terminal.draw(|f| ui::draw(f, &snapshot, app.difficulty(), app.modal_open()))?;

        while let Ok(outcome) = outcome_rx.try_recv() {
            debug!("Applying settled call");
            app.apply(outcome);
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if let Some(intent) = map_key(key, &app.snapshot(), app.modal_open()) {
                    if let Some(call) = app.handle(intent) {
                        spawn_call(call, api.clone(), outcome_tx.clone());
                    }
                }
            }
        }

        if app.should_quit() {
            info!("Leaving TUI");
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}

fn spawn_call<A>(call: PendingCall, api: A, tx: mpsc::UnboundedSender<CallOutcome>)
where
    A: GameApi + 'static,
{
    tokio::spawn(async move {
        let outcome = call.execute(&api).await;
        if tx.send(outcome).is_err() {
            debug!("UI gone before call settled");
        }
    });
}

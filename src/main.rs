use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::sync::mpsc;

use litepost::app::App;
use litepost::config::AppConfig;
use litepost::event::Event;
use litepost::http::backend::BackendClient;
use litepost::http::client::build_client;
use litepost::state::request_state::RequestForm;
use litepost::{logging, terminal, ui};

#[derive(Parser)]
#[command(name = "litepost", version, about = "Compose HTTP requests and inspect the responses")]
struct Args {
    /// Base URL of the execution backend (overrides the config file).
    #[arg(long)]
    backend: Option<String>,

    /// Config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Per-call timeout, e.g. `30s` or `2m`.
    #[arg(long)]
    timeout: Option<String>,

    /// URL to open the editor with instead of the sample request.
    #[arg(long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(AppConfig::default_path);
    let mut config = AppConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(backend) = args.backend {
        config.backend = backend;
    }
    if let Some(timeout) = args.timeout {
        config.timeout = timeout;
    }

    // Validate everything before the terminal switches to raw mode.
    let base = config.backend_url()?;
    let client = build_client(config.timeout()?).context("building HTTP client")?;
    let log_path = config.log_path();
    logging::init(&log_path, &config.log_level)
        .with_context(|| format!("opening log file {}", log_path.display()))?;
    log::info!("starting, backend {base}");

    let form = match args.url {
        Some(url) => RequestForm::with_url(url),
        None => RequestForm::sample(),
    };

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    // Background thread: read crossterm events and feed into channel
    let event_tx = tx.clone();
    std::thread::spawn(move || loop {
        if crossterm::event::poll(Duration::from_millis(16)).unwrap_or(false) {
            let sent = match crossterm::event::read() {
                Ok(crossterm::event::Event::Key(key)) => event_tx.send(Event::Key(key)),
                Ok(crossterm::event::Event::Mouse(mouse)) => event_tx.send(Event::Mouse(mouse)),
                Ok(crossterm::event::Event::Resize(w, h)) => event_tx.send(Event::Resize(w, h)),
                _ => Ok(()),
            };
            if sent.is_err() {
                break;
            }
        } else if event_tx.send(Event::Tick).is_err() {
            break;
        }
    });

    let mut terminal = terminal::init()?;
    let mut app = App::new(tx, BackendClient::new(client, base), form);

    let result = run_loop(&mut terminal, &mut app, &mut rx).await;

    terminal::restore()?;
    log::info!("exiting");
    result
}

async fn run_loop(
    terminal: &mut terminal::Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Event>,
) -> anyhow::Result<()> {
    loop {
        if app.state.dirty {
            terminal.draw(|frame| ui::layout::render(frame, &app.state))?;
            app.state.dirty = false;
        }

        match rx.recv().await {
            Some(event) => app.handle_event(event),
            None => break,
        }

        if app.state.should_quit {
            break;
        }
    }
    Ok(())
}

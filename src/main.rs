mod app;
mod config;
mod debounce;
mod logging;
mod shop;
mod style_demo;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::{AppState, Screen};
use crate::debounce::Debouncer;
use crate::shop::connectivity::{self, ConnectivitySubscription, StaticProbe, TcpProbe};
use crate::shop::store::{self, FileKvStore, FurnitureStore, StorageHandle, StorageRequest};
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Shortest reachability poll period accepted from config.
const MIN_PROBE_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;

    match logging::init(&cfg.logging) {
        Ok(Some(path)) => info!(log = %path.display(), "furnishop {} starting", env!("CARGO_PKG_VERSION")),
        Ok(None) => {}
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }

    // Write defaults on first start so the knobs are discoverable
    let cfg_path = config::config_path();
    if !cfg_path.exists() {
        if let Err(e) = config::save_config(&cfg, &cfg_path) {
            warn!("Could not write default config: {:#}", e);
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        error!("fatal: {:#}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("furnishop stopped");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Resources owned by the screen on display. Dropping the value releases
/// them: the reachability subscription stops polling and a pending style
/// change is cancelled.
enum Mounted {
    Shop {
        _reachability: ConnectivitySubscription,
    },
    StyleDemo {
        debouncer: Debouncer<u32>,
    },
}

fn mount(
    screen: Screen,
    cfg: &config::AppConfig,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
    storage: &StorageHandle,
) -> Mounted {
    match screen {
        Screen::Shop => {
            let net = &cfg.network;
            let interval = Duration::from_millis(net.interval_ms).max(MIN_PROBE_INTERVAL);
            let subscription = if net.probe_enabled {
                let probe = TcpProbe::new(
                    &net.probe_host,
                    net.probe_port,
                    Duration::from_millis(net.timeout_ms),
                );
                connectivity::subscribe(probe, interval, event_tx.clone())
            } else {
                connectivity::subscribe(StaticProbe(true), interval, event_tx.clone())
            };
            storage.request(StorageRequest::Load);
            Mounted::Shop {
                _reachability: subscription,
            }
        }
        Screen::StyleDemo => {
            let tx = event_tx.clone();
            let debouncer = Debouncer::new(Duration::from_millis(cfg.demo.debounce_ms), move |press| {
                let _ = tx.send(AppEvent::StyleChangeDue { press });
            });
            Mounted::StyleDemo { debouncer }
        }
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let kv = FileKvStore::new(config::expand_home(&cfg.storage.data_dir));
    info!(path = %kv.path().display(), key = %cfg.storage.key, "using local storage");
    let storage = store::spawn_worker(
        FurnitureStore::new(kv, cfg.storage.key.clone()),
        event_tx.clone(),
    );

    let mut state = AppState::new(cfg.clone());

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (20 FPS = 50ms)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(50));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    state.enter_screen(Screen::Shop);
    let mut mounted = mount(Screen::Shop, &cfg, &event_tx, &storage);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::Persist(items) => storage.request(StorageRequest::Save(items)),
                Action::Reload => storage.request(StorageRequest::Load),
                Action::SwitchScreen(screen) => {
                    // Release the old screen before acquiring the new one
                    drop(mounted);
                    info!(screen = screen.label(), "switching screen");
                    mounted = mount(screen, &cfg, &event_tx, &storage);
                }
                Action::ScheduleStyleChange { press } => {
                    if let Mounted::StyleDemo { debouncer } = &mut mounted {
                        if debouncer.is_pending() {
                            debug!(press, "restarting style change countdown");
                        }
                        debouncer.trigger(press);
                        state.set_status(format!(
                            "Style change in {} ms",
                            debouncer.delay().as_millis()
                        ));
                    }
                }
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    drop(mounted);
    // Let queued saves land before the runtime goes away
    storage.shutdown().await;
    Ok(())
}

use inflight::adapters::ReqwestHttpClient;
use inflight::app::App;
use inflight::cli::{parse_args, run_cli_command};
use inflight::config::AppConfig;
use inflight::logging;
use inflight::terminal::{setup_panic_hook, TerminalManager};
use inflight::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

fn main() -> Result<()> {
    let Some(overrides) = run_cli_command(parse_args(std::env::args())?) else {
        return Ok(());
    };

    color_eyre::install()?;

    let config = overrides.apply(AppConfig::from_env()?)?;
    if !logging::init(&config)? {
        eprintln!("warning: a tracing subscriber was already installed");
    }
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_url = %config.api_url,
        max_delay_ms = config.max_delay.as_millis() as u64,
        "starting inflight"
    );

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let transport = ReqwestHttpClient::with_timeout(config.request_timeout)?;

    runtime.block_on(async {
        let mut app = App::new(&config, transport);
        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app, config.tick_rate).await;
        manager.restore();

        tracing::info!(
            users = app.users.len(),
            imbalances = app.tracker.imbalance_count(),
            "shutting down"
        );
        result
    })
}

/// Drive the UI until the user quits.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut ticker = tokio::time::interval(tick_rate);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!("terminal event error: {}", err);
                    }
                    None => {
                        tracing::info!("terminal event stream closed");
                        app.quit();
                    }
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        // Pick up loading changes caused by the branch above without
        // waiting for the next tick
        app.sync_loading();

        if app.should_quit {
            return Ok(());
        }
    }
}

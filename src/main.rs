//! MarketPulse CLI entry point

use anyhow::{Context, Result};
use clap::Parser;
use marketpulse::api::ApiClient;
use marketpulse::cli::{run_command, Cli, Command};
use marketpulse::config::{default_log_path, Config};
use marketpulse::core::Fetcher;
use marketpulse::ui::{render_dashboard, TUI};
use marketpulse::App;
use crossterm::event::Event;
use std::fs::{self, OpenOptions};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.as_ref().unwrap_or(&Command::Dashboard);
    let interactive = matches!(command, Command::Dashboard);

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_logger(interactive.then_some(log_path.as_path()))?;

    log::info!("MarketPulse v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(secs) = cli.timeout_secs {
        config.api.timeout_secs = secs;
    }
    config.validate()?;

    let client = ApiClient::new(&config.api)?;
    log::info!("Using backend {}", client.base_url());

    if interactive {
        run_dashboard(client, config)
    } else {
        let mut stdout = std::io::stdout().lock();
        run_command(command, &client, &config.catalog, &mut stdout).await
    }
}

/// Log to stderr, or to a file while the dashboard owns the terminal
fn init_logger(file: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if let Some(path) = file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn run_dashboard(client: ApiClient, config: Config) -> Result<()> {
    let api_url = client.base_url().to_string();
    let (fetcher, event_rx) = Fetcher::new(client);
    let mut app = App::new(config.catalog, event_rx);
    let mut tui = TUI::new()?;

    while !app.should_quit {
        for request in app.drain_requests() {
            fetcher.dispatch(request);
        }

        app.process_events();

        tui.terminal().draw(|f| render_dashboard(f, &app, &api_url))?;

        if App::should_poll_input()? {
            if let Event::Key(key) = App::read_event()? {
                app.handle_key(key);
            }
        }
    }

    log::info!("Dashboard closed");
    Ok(())
}

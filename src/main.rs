use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io, sync::Mutex, time::Duration};

/// VisionVault terminal browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/vvault-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Backend base URL (overrides the config file)
    #[arg(short, long)]
    url: Option<String>,

    /// Folder to open on startup
    folder: Option<String>,
}

mod app;
mod config;
mod handlers;
mod services;
mod ui;
mod utils;

use config::Config;
use services::{ApiResponse, ApiService};
use visionvault::api::VaultClient;
use visionvault::model::{self, Request};

pub struct App {
    pub model: model::Model,

    api: ApiService,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<ApiResponse>,

    clipboard_command: Option<Vec<String>>,
    open_command: Option<String>,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let client = VaultClient::new(
            config.base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?;
        let (api_tx, api_rx) = tokio::sync::mpsc::unbounded_channel();

        tracing::info!(base_url = %client.base_url(), "starting VisionVault browser");

        Ok(Self {
            model: model::Model::new(config.folder_tree.clone(), config.vim_mode),
            api: ApiService::new(client, api_tx),
            api_rx,
            clipboard_command: config.clipboard_argv(),
            open_command: config.open_command,
        })
    }

    /// Hand a request produced by the model to the background service
    pub(crate) fn dispatch(&mut self, request: Option<Request>) {
        if let Some(request) = request {
            self.api.dispatch(request);
        }
    }
}

fn init_logging(debug: bool) -> Result<()> {
    // The terminal belongs to the UI, so logs only go to a file in debug mode
    if !debug {
        return Ok(());
    }

    let log_path = utils::get_debug_log_path();
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open debug log {}", log_path.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::debug!(path = %log_path.display(), "debug logging enabled");
    Ok(())
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<Option<std::path::PathBuf>> {
    use std::path::PathBuf;

    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/visionvault/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("visionvault").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn missing_config_error() -> anyhow::Error {
    let expected_path = dirs::config_dir()
        .map(|dir| dir.join("visionvault").join("config.yaml").display().to_string())
        .unwrap_or_else(|| "~/.config/visionvault/config.yaml".to_string());

    anyhow::anyhow!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location, or --url <base_url>.",
        expected_path
    )
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match get_config_path(args.config.clone())? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let config_str = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_yaml::from_str(&config_str)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => match &args.url {
            Some(url) => Config::from_url(url.clone()),
            None => return Err(missing_config_error()),
        },
    };

    // Override config with CLI flags
    if let Some(url) = &args.url {
        config.base_url = url.clone();
    }
    if args.vim {
        config.vim_mode = true;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug)?;

    let config = load_config(&args)?;
    let mut app = App::new(config)?;

    if let Some(folder) = &args.folder {
        let request = app.model.navigate(folder);
        app.dispatch(request);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "browser exited with error");
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process background results (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        // Short poll keeps responses flowing while the user is idle
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => handlers::handle_key(app, key),
                Event::Paste(text) => handlers::handle_paste(app, text),
                _ => {}
            }
        }
    }

    Ok(())
}

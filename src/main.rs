//! Furnions site: scroll-driven motion core, a terminal preview of the
//! landing page and the newsletter signup API.
//!
//! Run the binary (or `preview`) to scroll through the page in the
//! terminal.  Run `serve` to host the newsletter endpoint.

mod api;
mod app;
mod config;
mod core;
mod ui;

use std::fs::File;
use std::io::{stderr, Stderr};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing_subscriber::EnvFilter;

use crate::api::client::NewsletterClient;
use crate::api::ApiState;
use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::PreviewState,
};
use crate::config::SiteConfig;
use crate::core::page::Page;
use crate::ui::layout::AppLayout;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), version, about = "Furnions landing page motion preview and API")]
struct Cli {
    /// Config file (defaults to `$XDG_CONFIG_HOME/furnions-site/config.toml`).
    #[arg(long, global = true, env = "FURNIONS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scroll through the page in the terminal (the default).
    Preview(PreviewArgs),
    /// Serve the newsletter API.
    Serve {
        /// Address to listen on.
        #[arg(long, env = "FURNIONS_BIND")]
        bind: Option<SocketAddr>,
        /// Simulated processing delay per signup, in milliseconds.
        #[arg(long)]
        signup_delay_ms: Option<u64>,
    },
    /// Write a config file with every default filled in.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Default)]
struct PreviewArgs {
    /// Resolve scroll-linked motion at rest and show reveals immediately.
    #[arg(long)]
    reduced_motion: bool,
    /// Write logs here.  The terminal is owned by the preview, so logs are
    /// dropped without this.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ───────────────────────────────────────── logging ───────────

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn init_stderr_logging(default: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .with_writer(stderr) // never pollute stdout
        .init();
}

fn init_file_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("cannot open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info,furnions_site=debug"))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

// ───────────────────────────────────────── preview ───────────

type Term = Terminal<CrosstermBackend<Stderr>>;

async fn run_preview(site: &SiteConfig) -> Result<()> {
    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stderr(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stderr()))?;

    let result = preview_loop(&mut terminal, site).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    result
}

async fn preview_loop(terminal: &mut Term, site: &SiteConfig) -> Result<()> {
    let size = terminal.size()?;
    let (width, height) = AppLayout::from_area(Rect::new(0, 0, size.width, size.height)).page_extent();
    let page = Page::new(site.motion.to_settings(), width, height)?;
    let mut state = PreviewState::new(page, &site.preview);
    let client = NewsletterClient::new(site.server.bind)?;
    tracing::info!(
        width,
        height,
        reduced = state.reduced_motion(),
        signup = client.endpoint(),
        "preview started"
    );

    let mut events = spawn_event_reader();
    let (signup_tx, mut signup_rx) = mpsc::unbounded_channel();
    let mut ticker = tokio::time::interval(Duration::from_millis(site.preview.tick_rate_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_tick = Instant::now();

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                    AppEvent::Resize(w, h) => {
                        let (width, height) = AppLayout::from_area(Rect::new(0, 0, w, h)).page_extent();
                        state.resize(width, height);
                    }
                }
            }

            Some(result) = signup_rx.recv() => state.finish_signup(result),

            _ = ticker.tick() => {
                let now = Instant::now();
                state.tick(now.duration_since(last_tick));
                last_tick = now;
            }
        }

        if let Some(email) = state.take_pending_signup() {
            let client = client.clone();
            let tx = signup_tx.clone();
            tokio::spawn(async move {
                // The loop may already be gone; nothing to report to then.
                let _ = tx.send(client.subscribe(&email).await);
            });
        }

        if state.should_quit {
            break;
        }
    }

    state.page.teardown();
    tracing::info!("preview closed");
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(config::config_path);

    match cli.command.unwrap_or(Command::Preview(PreviewArgs::default())) {
        Command::Preview(args) => {
            init_file_logging(args.log_file.as_deref())?;
            let mut site = SiteConfig::load_from(&config_path)?;
            if args.reduced_motion {
                site.motion.reduced_motion = true;
            }
            run_preview(&site).await
        }
        Command::Serve {
            bind,
            signup_delay_ms,
        } => {
            init_stderr_logging("info,tower_http=warn");
            let mut site = SiteConfig::load_from(&config_path)?;
            if let Some(bind) = bind {
                site.server.bind = bind;
            }
            if let Some(ms) = signup_delay_ms {
                site.server.signup_delay_ms = ms;
            }
            let state = ApiState::new(Duration::from_millis(site.server.signup_delay_ms))?;
            api::serve(site.server.bind, state).await
        }
        Command::InitConfig { force } => {
            init_stderr_logging("info");
            if config_path.exists() && !force {
                bail!(
                    "{} already exists (pass --force to overwrite)",
                    config_path.display()
                );
            }
            SiteConfig::default().save_to(&config_path)?;
            tracing::info!(path = %config_path.display(), "config written");
            println!("{}", config_path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_preview() {
        let cli = Cli::try_parse_from(["furnions-site"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_accepts_bind_override() {
        let cli = Cli::try_parse_from(["furnions-site", "serve", "--bind", "0.0.0.0:9000"]).unwrap();
        match cli.command {
            Some(Command::Serve { bind, .. }) => assert_eq!(bind.unwrap().port(), 9000),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn preview_flags_parse() {
        let cli = Cli::try_parse_from([
            "furnions-site",
            "preview",
            "--reduced-motion",
            "--log-file",
            "/tmp/p.log",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Preview(args)) => {
                assert!(args.reduced_motion);
                assert_eq!(args.log_file.as_deref(), Some(Path::new("/tmp/p.log")));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}

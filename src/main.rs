//! An endlessly looping scroll list for the terminal.
//!
//! Run the binary to open the demo page: a plain loop on the left, a tilted
//! autoplaying loop on the right.  Scroll with the wheel, drag with the left
//! button, hover the right panel to pause it.
//! Run with `--print-config` to dump the effective configuration.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Alignment,
    widgets::Paragraph,
    Frame, Terminal,
};

use crate::app::{
    event::spawn_event_reader,
    handler,
    page::{HostPage, PAGE_TITLE},
    state::AppState,
};
use crate::config::AppConfig;
use crate::ui::{layout::PageLayout, scroll_widget::ScrollWidget, theme::Theme};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Infinite scroll demo")]
struct Cli {
    /// Read configuration from this file instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Offset units per terminal row.
    #[arg(long)]
    units_per_row: Option<f64>,

    /// Animation frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Raw wheel delta per notch.
    #[arg(long)]
    wheel_step: Option<f64>,

    /// Print the effective configuration and exit.
    #[arg(long = "print-config")]
    print_config: bool,
}

impl Cli {
    /// Resolve the configuration: explicit file (strict) or the default
    /// location (lenient), then command-line overrides.
    fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load_from(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => AppConfig::load(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(upr) = self.units_per_row.filter(|v| v.is_finite() && *v > 0.0) {
            config.units_per_row = upr;
        }
        if let Some(fps) = self.fps {
            config.frames_per_second = fps.clamp(1, 240);
        }
        if let Some(step) = self.wheel_step.filter(|v| v.is_finite() && *v > 0.0) {
            config.wheel_step = step;
        }
    }
}

// ───────────────────────────────────────── rendering ─────────

fn draw(frame: &mut Frame, state: &mut AppState) {
    state.terminal_area = frame.area();
    let layout = PageLayout::from_area(frame.area(), state.page.len());

    frame.render_widget(
        Paragraph::new(PAGE_TITLE)
            .alignment(Alignment::Center)
            .style(Theme::heading_style()),
        layout.header_area,
    );

    let upr = state.page.units_per_row();
    for (column, panel) in layout.columns.iter().zip(&state.page.panels) {
        frame.render_widget(
            Paragraph::new(panel.heading)
                .alignment(Alignment::Center)
                .style(Theme::subheading_style()),
            column.heading_area,
        );
        frame.render_widget(ScrollWidget::new(&panel.scroll, upr), column.widget_area);
    }

    frame.render_widget(
        Paragraph::new("Try scrolling, dragging, or using your mouse wheel!")
            .alignment(Alignment::Center),
        layout.hint_area,
    );
    frame.render_widget(
        Paragraph::new(state.config.status_bar_hint()).style(Theme::status_bar_style()),
        layout.status_area,
    );
}

// ───────────────────────────────────────── terminal ─────────

/// Raw mode, alternate screen and mouse capture for as long as it lives.
/// Dropping it restores the terminal, including on an early `?` return or a
/// panic unwinding out of the loop.
#[must_use]
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(stderr(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Nothing useful to do with a failure while restoring.
        let _ = disable_raw_mode();
        let _ = execute!(
            stderr(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        );
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    if cli.print_config {
        print!("{}", config.serialise());
        return Ok(());
    }

    let mut page = HostPage::demo(config.units_per_row, config.drag_tolerance);
    page.mount_all();
    let frame_interval = config.frame_interval();
    let mut state = AppState::new(page, config);

    // ── terminal setup ────────────────────────────────────────
    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(frame_interval);
    tracing::debug!(?frame_interval, "event loop starting");

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| draw(frame, &mut state))?;

        let Some(event) = events.recv().await else {
            break;
        };
        handler::handle_event(&mut state, event);

        // Drain whatever else is queued before redrawing.
        while let Ok(event) = events.try_recv() {
            handler::handle_event(&mut state, event);
        }

        if state.should_quit {
            break;
        }
    }

    state.page.teardown_all();

    // ── teardown ──────────────────────────────────────────────
    drop(guard);

    Ok(())
}

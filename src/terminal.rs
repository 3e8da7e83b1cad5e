//! Terminal collaborators: capability probe, size query, one-shot
//! rendering, and the live resize/keypress session.
//!
//! The live session is the only event-driven part of the program. It
//! blocks on crossterm's event stream, redrawing on resize and returning
//! on the first key press. Raw mode and cursor visibility are managed by
//! an RAII guard so every exit path, including panics, restores the
//! terminal.

use crate::render::{build_frame, FrameSpec, RenderError};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use std::io::{self, Write};
use supports_color::Stream;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("your terminal doesn't support color")]
    ColorUnsupported,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Fails unless stdout reports some level of color support. Truecolor
/// sequences are emitted regardless of the reported level, matching the
/// original tool's behavior of forcing its color output to truecolor.
pub fn ensure_color_support() -> Result<(), TerminalError> {
    match supports_color::on_cached(Stream::Stdout) {
        Some(level) => {
            debug!(truecolor = level.has_16m, "color support detected");
            Ok(())
        }
        None => Err(TerminalError::ColorUnsupported),
    }
}

/// Current terminal size as `(columns, rows)`.
pub fn size() -> Result<(u16, u16), TerminalError> {
    Ok(terminal::size()?)
}

/// Renders the flag once at the current terminal size, with a single
/// trailing newline.
pub fn render_once(spec: &FrameSpec) -> Result<(), TerminalError> {
    let (cols, rows) = size()?;
    let frame = build_frame(spec, cols, rows, "\n")?;

    let mut out = io::stdout().lock();
    out.write_all(frame.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Holds the terminal, redrawing on every resize, until any key is
/// pressed.
pub fn run_live(spec: &FrameSpec) -> Result<(), TerminalError> {
    let _guard = LiveGuard::activate()?;

    draw(spec)?;
    loop {
        match event::read()? {
            Event::Resize(cols, rows) => {
                debug!(cols, rows, "terminal resized");
                draw(spec)?;
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                debug!("key pressed, leaving live mode");
                break;
            }
            _ => {}
        }
    }
    Ok(())
}

fn draw(spec: &FrameSpec) -> Result<(), TerminalError> {
    let (cols, rows) = size()?;
    let frame = build_frame(spec, cols, rows, "\r\n")?;

    let mut out = io::stdout().lock();
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.write_all(frame.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Pairs raw-mode-enable/cursor-hide with the matching restore on drop.
struct LiveGuard;

impl LiveGuard {
    fn activate() -> Result<LiveGuard, TerminalError> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), Hide)?;
        Ok(LiveGuard)
    }
}

impl Drop for LiveGuard {
    fn drop(&mut self) {
        // Restore unconditionally; there is no meaningful recovery if the
        // terminal refuses these writes on the way out.
        let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0), Show);
        let _ = terminal::disable_raw_mode();
    }
}

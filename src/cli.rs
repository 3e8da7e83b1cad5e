//! Command dispatch.
//!
//! Turns parsed arguments into a render invocation. Catalog misses are
//! boundary conditions, not failures: the user gets a message and the
//! help screen, and the process exits successfully, the same as asking
//! for help outright.

use pride::catalog;
use pride::commands::{
    self, CommandError, ARG_BLEND, ARG_CHARACTER, ARG_COMPLETIONS, ARG_FLAG, ARG_GRADIENT,
    ARG_HOLD, ARG_LIVE, ARG_RANDOM, ARG_VERTICAL, DEFAULT_GLYPH,
};
use pride::exit_codes::PrideExitCode;
use pride::model::{BlendSpec, Orientation, RenderMode};
use pride::render::FrameSpec;
use pride::terminal::{self, TerminalError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Terminal(#[from] TerminalError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("Input/Output error: {0}")]
    InputOutput(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> PrideExitCode {
        match self {
            CliError::Command(_) => PrideExitCode::UsageError,
            CliError::Terminal(_) | CliError::InputOutput(_) => PrideExitCode::RenderFailure,
        }
    }
}

pub fn execute_command() -> Result<(), CliError> {
    let matches = commands::create_cli_commands();

    // Completions are generated before any terminal probing so they work
    // when stdout is a pipe.
    if let Some(shell) = matches.get_one::<String>(ARG_COMPLETIONS) {
        return Ok(commands::generate_completions(shell)?);
    }

    terminal::ensure_color_support()?;

    let (name, flag) = if matches.get_flag(ARG_RANDOM) {
        catalog::random()
    } else {
        match matches.get_one::<String>(ARG_FLAG) {
            Some(requested) => match catalog::find(requested) {
                Ok(flag) => (requested.as_str(), flag),
                Err(e) => {
                    eprintln!("{}", e);
                    commands::create_command().print_help()?;
                    return Ok(());
                }
            },
            None => {
                commands::create_command().print_help()?;
                return Ok(());
            }
        }
    };
    debug!(flag = name, "rendering");

    let blend = match matches.get_one::<String>(ARG_BLEND) {
        Some(value) => {
            let (blend_name, factor) = parse_blend_argument(value);
            match catalog::find(&blend_name) {
                Ok(blend_flag) => Some(BlendSpec::new(blend_flag, factor)),
                Err(e) => {
                    eprintln!("{}", e);
                    commands::create_command().print_help()?;
                    return Ok(());
                }
            }
        }
        None => None,
    };

    let glyph = matches
        .get_one::<String>(ARG_CHARACTER)
        .and_then(|s| s.trim().chars().next())
        .unwrap_or(DEFAULT_GLYPH);

    let spec = FrameSpec {
        flag,
        blend,
        mode: if matches.get_flag(ARG_GRADIENT) {
            RenderMode::Gradient
        } else {
            RenderMode::Stripe
        },
        orientation: if matches.get_flag(ARG_VERTICAL) {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        },
        glyph,
        hold: matches.get_flag(ARG_HOLD),
    };

    if matches.get_flag(ARG_LIVE) {
        terminal::run_live(&spec)?;
    } else {
        terminal::render_once(&spec)?;
    }

    Ok(())
}

/// Splits `name[,factor]`; the factor falls back to 0.5 when omitted or
/// unparseable.
fn parse_blend_argument(value: &str) -> (String, f64) {
    match value.split_once(',') {
        Some((name, factor)) => {
            let factor = factor
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .unwrap_or(0.5);
            (name.trim().to_string(), factor)
        }
        None => (value.trim().to_string(), 0.5),
    }
}

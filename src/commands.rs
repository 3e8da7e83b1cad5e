//! CLI command definition and argument parsing.
//!
//! Defines the command-line interface with the clap builder API, and
//! generates shell completions through clap_complete.

use crate::help;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io;
use thiserror::Error;

pub const ARG_FLAG: &str = "flag";
pub const ARG_GRADIENT: &str = "gradient";
pub const ARG_VERTICAL: &str = "vertical";
pub const ARG_LIVE: &str = "live";
pub const ARG_BLEND: &str = "blend";
pub const ARG_CHARACTER: &str = "character";
pub const ARG_RANDOM: &str = "random";
pub const ARG_HOLD: &str = "hold";
pub const ARG_COMPLETIONS: &str = "completions";

pub const DEFAULT_GLYPH: char = '█';

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unsupported shell: {0}")]
    UnsupportedShell(String),
}

/// Create and configure the CLI command and all of its arguments.
pub fn create_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .after_help(help::flag_listing(DEFAULT_GLYPH))
        .arg(
            Arg::new(ARG_FLAG)
                .value_name("FLAG")
                .help("Name of the flag to display (case-insensitive)"),
        )
        .arg(
            Arg::new(ARG_GRADIENT)
                .short('g')
                .long("gradient")
                .action(ArgAction::SetTrue)
                .help("Make the flag a smooth gradient"),
        )
        .arg(
            Arg::new(ARG_VERTICAL)
                .short('v')
                .long("vertical")
                .action(ArgAction::SetTrue)
                .help("Display the flag, but vertically"),
        )
        .arg(
            Arg::new(ARG_LIVE)
                .short('l')
                .long("live")
                .action(ArgAction::SetTrue)
                .help("Hold the terminal and redraw the flag upon resize, closing when any key is pressed"),
        )
        .arg(
            Arg::new(ARG_BLEND)
                .short('b')
                .long("blend")
                .value_name("FLAG[,FACTOR]")
                .help("Blend two flags together, with an optional decimal factor"),
        )
        .arg(
            Arg::new(ARG_CHARACTER)
                .short('c')
                .long("character")
                .value_name("CHAR")
                .help("Character to use to draw the flag"),
        )
        .arg(
            Arg::new(ARG_RANDOM)
                .short('r')
                .long("random")
                .action(ArgAction::SetTrue)
                .help("Displays a random flag! This ignores any passed flags."),
        )
        .arg(
            Arg::new(ARG_HOLD)
                .long("hold")
                .action(ArgAction::SetTrue)
                .help("Keep the flag's natural proportions instead of stretching to fill the terminal"),
        )
        .arg(
            Arg::new(ARG_COMPLETIONS)
                .long("completions")
                .value_name("SHELL")
                .value_parser(["bash", "zsh", "fish", "powershell", "elvish"])
                .help("Generate shell completions for the given shell"),
        )
}

/// Parse the command-line arguments.
pub fn create_cli_commands() -> ArgMatches {
    create_command().get_matches()
}

/// Generate completions for the specified shell and write them to stdout.
pub fn generate_completions(shell: &str) -> Result<(), CommandError> {
    let mut cmd = create_command();
    let name = cmd.get_name().to_string();

    let shell = match shell {
        "bash" => clap_complete::Shell::Bash,
        "zsh" => clap_complete::Shell::Zsh,
        "fish" => clap_complete::Shell::Fish,
        "powershell" => clap_complete::Shell::PowerShell,
        "elvish" => clap_complete::Shell::Elvish,
        other => return Err(CommandError::UnsupportedShell(other.to_string())),
    };
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());

    Ok(())
}

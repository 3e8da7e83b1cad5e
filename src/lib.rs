//! Render pride flags in your terminal.
//!
//! This crate provides the core functionality for the `pride` CLI:
//! a catalog of named flags, color resolution along a flag (discrete
//! stripes or smooth gradients, optionally blended with a second flag),
//! integer scaling of stripe weights onto terminal cells, and frame
//! rendering for both one-shot and live (redraw-on-resize) sessions.
//!
//! # Modules
//!
//! - `catalog`: the built-in flag catalog and name lookup
//! - `color`: position-to-color resolution and two-color blending
//! - `commands`: CLI command parsing and shell completions
//! - `exit_codes`: process exit-code mapping
//! - `geometry`: scaling stripe weights to integer cell partitions
//! - `help`: the flag listing appended to the help screen
//! - `model`: flags, stripes, colors, and render options
//! - `render`: frame assembly from a flag and terminal dimensions
//! - `terminal`: color probe, size query, and the live event loop

pub mod catalog;
pub mod color;
pub mod commands;
pub mod exit_codes;
pub mod geometry;
pub mod help;
pub mod model;
pub mod render;
pub mod terminal;

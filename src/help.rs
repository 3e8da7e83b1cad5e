//! Catalog listing appended to the CLI help text.
//!
//! Each catalog entry gets one line: the flag name padded to a fixed
//! column, then a "mini flag" showing one colored glyph per stripe when
//! stdout supports color.

use crate::catalog;
use crate::model::Rgb;
use color_print::cformat;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::Command;
use supports_color::Stream;

/// Column where the mini flags start, so they all line up.
const MINI_FLAG_DISTANCE: usize = 16;

/// Builds the "Flags:" section for the help screen.
pub fn flag_listing(glyph: char) -> String {
    let colored = supports_color::on_cached(Stream::Stdout).is_some();

    let header = if colored {
        cformat!("<green>Flags:</green>")
    } else {
        String::from("Flags:")
    };

    let mut listing = String::from(header);
    for (name, flag) in catalog::all() {
        listing.push('\n');
        listing.push_str("  ");
        listing.push_str(name);
        if colored {
            for _ in name.len()..MINI_FLAG_DISTANCE {
                listing.push(' ');
            }
            for stripe in flag.stripes() {
                push_colored(&mut listing, stripe.color(), glyph);
            }
            let _ = ResetColor.write_ansi(&mut listing);
        }
    }
    listing
}

fn push_colored(out: &mut String, color: Rgb, glyph: char) {
    // Writing ANSI into a String cannot fail.
    let _ = SetForegroundColor(Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    })
    .write_ansi(out);
    out.push(glyph);
}

//! Frame construction.
//!
//! Walks the scaled partition for the current orientation, resolves a
//! color per cell row/column, and assembles one frame of ANSI-colored
//! output. Horizontal flags paint one color per full terminal row;
//! vertical flags paint one color per column, repeated down every row.

use crate::color::{blend, ColorError, FlagColors};
use crate::geometry::{scale, scale_hold};
use crate::model::{BlendSpec, FlagDefinition, Orientation, RenderMode, Rgb};
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::Command;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("failed to assemble frame")]
    Format(#[from] std::fmt::Error),
}

/// Everything needed to draw one flag, fixed for the duration of a render
/// invocation. Terminal dimensions are passed separately since they change
/// under live mode.
#[derive(Debug, Clone, Copy)]
pub struct FrameSpec<'a> {
    pub flag: &'a FlagDefinition,
    pub blend: Option<BlendSpec<'a>>,
    pub mode: RenderMode,
    pub orientation: Orientation,
    pub glyph: char,
    pub hold: bool,
}

impl<'a> FrameSpec<'a> {
    pub fn new(flag: &'a FlagDefinition) -> FrameSpec<'a> {
        FrameSpec {
            flag,
            blend: None,
            mode: RenderMode::Stripe,
            orientation: Orientation::Horizontal,
            glyph: '█',
            hold: false,
        }
    }
}

/// Builds a complete frame for a `cols` x `rows` terminal as a string of
/// glyphs and ANSI color sequences, rows separated by `line_ending`
/// (`\r\n` under raw mode). The frame carries no trailing line ending and
/// always ends with a color reset.
pub fn build_frame(
    spec: &FrameSpec,
    cols: u16,
    rows: u16,
    line_ending: &str,
) -> Result<String, RenderError> {
    debug!(cols, rows, orientation = %spec.orientation, mode = %spec.mode, "building frame");

    let mut frame = String::new();
    match spec.orientation {
        Orientation::Horizontal => {
            let cells = axis_colors(spec, rows as usize)?;
            let band = spec.glyph.to_string().repeat(cols as usize);
            let mut active: Option<Rgb> = None;
            for (row, cell) in cells.iter().enumerate() {
                if row > 0 {
                    frame.push_str(line_ending);
                }
                if let Some(color) = cell {
                    set_color(&mut frame, *color, &mut active)?;
                    frame.push_str(&band);
                }
            }
        }
        Orientation::Vertical => {
            let cells = axis_colors(spec, cols as usize)?;
            let mut band = String::new();
            let mut active: Option<Rgb> = None;
            for cell in &cells {
                match cell {
                    Some(color) => {
                        set_color(&mut band, *color, &mut active)?;
                        band.push(spec.glyph);
                    }
                    None => band.push(' '),
                }
            }
            for row in 0..rows {
                if row > 0 {
                    frame.push_str(line_ending);
                }
                frame.push_str(&band);
            }
        }
    }

    ResetColor.write_ansi(&mut frame)?;
    Ok(frame)
}

/// Resolves one color per cell along the scaled axis, walking the
/// partition with a running offset so stripe-mode band edges follow the
/// partition exactly. Cells beyond the partition's span (hold mode
/// leftovers) come back as `None` and render blank.
fn axis_colors(spec: &FrameSpec, available: usize) -> Result<Vec<Option<Rgb>>, RenderError> {
    let partition = if spec.hold {
        scale_hold(spec.flag, available)
    } else {
        scale(spec.flag, available)
    };
    let span: usize = partition.iter().sum();

    let resolver = FlagColors::new(spec.flag);
    let blend_resolver = spec.blend.map(|b| FlagColors::new(b.flag));

    let mut cells = Vec::with_capacity(available);
    let mut index = 0usize;
    for (stripe_index, run) in partition.iter().enumerate() {
        for _ in 0..*run {
            let position = index as f64 / span as f64;
            let base = match spec.mode {
                RenderMode::Stripe => spec.flag.stripes()[stripe_index].color(),
                RenderMode::Gradient => resolver.color_at(position, RenderMode::Gradient)?,
            };
            let color = match (blend_resolver, spec.blend) {
                (Some(second), Some(blend_spec)) => {
                    let other = second.color_at(position, spec.mode)?;
                    blend(base, other, blend_spec.factor)
                }
                _ => base,
            };
            cells.push(Some(color));
            index += 1;
        }
    }
    cells.resize(available, None);
    Ok(cells)
}

/// Emits a foreground-color change only when the color actually differs
/// from the active one.
fn set_color(out: &mut String, color: Rgb, active: &mut Option<Rgb>) -> Result<(), RenderError> {
    if *active != Some(color) {
        SetForegroundColor(Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        })
        .write_ansi(out)?;
        *active = Some(color);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stripe;

    fn two_stripe_flag() -> FlagDefinition {
        FlagDefinition::new(vec![
            Stripe::new(Rgb::new(255, 0, 0), 1.0),
            Stripe::new(Rgb::new(0, 0, 255), 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_axis_colors_follow_partition() {
        let flag = two_stripe_flag();
        let spec = FrameSpec::new(&flag);
        let cells = axis_colors(&spec, 10).unwrap();

        assert_eq!(10, cells.len());
        assert!(cells[..5].iter().all(|c| *c == Some(Rgb::new(255, 0, 0))));
        assert!(cells[5..].iter().all(|c| *c == Some(Rgb::new(0, 0, 255))));
    }

    #[test]
    fn test_axis_colors_zero_size() {
        let flag = two_stripe_flag();
        let spec = FrameSpec::new(&flag);
        assert!(axis_colors(&spec, 0).unwrap().is_empty());
    }

    #[test]
    fn test_axis_colors_hold_leaves_blanks() {
        let flag = two_stripe_flag();
        let spec = FrameSpec {
            hold: true,
            ..FrameSpec::new(&flag)
        };
        let cells = axis_colors(&spec, 7).unwrap();

        // Natural height 2, scale factor 3: six colored cells, one blank.
        assert_eq!(7, cells.len());
        assert!(cells[..6].iter().all(Option::is_some));
        assert_eq!(None, cells[6]);
    }

    #[test]
    fn test_axis_colors_self_blend_is_identity() {
        let flag = two_stripe_flag();
        let plain = FrameSpec::new(&flag);
        let blended = FrameSpec {
            blend: Some(BlendSpec::new(&flag, 0.5)),
            ..FrameSpec::new(&flag)
        };
        assert_eq!(
            axis_colors(&plain, 24).unwrap(),
            axis_colors(&blended, 24).unwrap()
        );
    }

    #[test]
    fn test_axis_colors_blend_extremes() {
        let red_blue = two_stripe_flag();
        let white = FlagDefinition::new(vec![Stripe::new(Rgb::new(255, 255, 255), 1.0)]).unwrap();

        let fully_second = FrameSpec {
            blend: Some(BlendSpec::new(&white, 1.0)),
            ..FrameSpec::new(&red_blue)
        };
        let cells = axis_colors(&fully_second, 8).unwrap();
        assert!(cells
            .iter()
            .all(|c| *c == Some(Rgb::new(255, 255, 255))));
    }

    #[test]
    fn test_horizontal_frame_shape() {
        let flag = two_stripe_flag();
        let spec = FrameSpec::new(&flag);
        let frame = build_frame(&spec, 4, 2, "\n").unwrap();

        assert_eq!(2, frame.lines().count());
        for line in frame.lines() {
            assert_eq!(4, line.chars().filter(|c| *c == '█').count());
        }
    }

    #[test]
    fn test_vertical_frame_repeats_rows() {
        let flag = two_stripe_flag();
        let spec = FrameSpec {
            orientation: Orientation::Vertical,
            ..FrameSpec::new(&flag)
        };
        let frame = build_frame(&spec, 6, 3, "\n").unwrap();

        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(3, lines.len());
        // Every terminal row shows the same column pattern.
        assert_eq!(lines[0], lines[1]);
        for line in &lines {
            assert_eq!(6, line.chars().filter(|c| *c == '█').count());
        }
    }

    #[test]
    fn test_frame_emits_color_change_per_band_not_per_cell() {
        let flag = two_stripe_flag();
        let spec = FrameSpec::new(&flag);
        let frame = build_frame(&spec, 10, 10, "\n").unwrap();

        // Two bands plus the trailing reset; no per-row re-emission.
        let set_count = frame.matches("\u{1b}[38;2;").count();
        assert_eq!(2, set_count);
    }

    #[test]
    fn test_frame_ends_with_reset() {
        let flag = two_stripe_flag();
        let spec = FrameSpec::new(&flag);
        let frame = build_frame(&spec, 3, 3, "\n").unwrap();
        assert!(frame.ends_with("\u{1b}[0m"));
    }

    #[test]
    fn test_custom_glyph() {
        let flag = two_stripe_flag();
        let spec = FrameSpec {
            glyph: '#',
            ..FrameSpec::new(&flag)
        };
        let frame = build_frame(&spec, 5, 2, "\n").unwrap();
        assert_eq!(10, frame.matches('#').count());
        assert_eq!(0, frame.matches('█').count());
    }
}

//! Color resolution along a flag.
//!
//! Maps a normalized position in `[0, 1)` to a concrete color, either by
//! snapping to the containing stripe or by interpolating a smooth gradient
//! between adjacent stripes, and linearly blends two resolved colors for
//! two-flag rendering.

use crate::model::{FlagDefinition, RenderMode, Rgb};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorError {
    /// Defensive check; unreachable when positions come from the renderer.
    #[error("position {position} is outside [0, 1)")]
    InvalidPosition { position: f64 },
}

/// Resolves display colors for one flag. Holds no state beyond the
/// borrowed definition; every call is a pure function of its arguments.
#[derive(Debug, Clone, Copy)]
pub struct FlagColors<'a> {
    flag: &'a FlagDefinition,
}

impl<'a> FlagColors<'a> {
    pub fn new(flag: &'a FlagDefinition) -> FlagColors<'a> {
        FlagColors { flag }
    }

    /// Returns the color at `position` in `[0, 1)`.
    ///
    /// In stripe mode the stripes occupy contiguous sub-intervals of
    /// `[0, 1)` sized by `weight / total_weight`, in order; the last
    /// interval is closed on the right so positions rounding up toward 1
    /// still resolve to the last stripe. In gradient mode the anchor
    /// points are the stripe centers: positions outside the first and
    /// last centers clamp to those stripes' colors, positions between two
    /// centers interpolate each channel linearly.
    pub fn color_at(&self, position: f64, mode: RenderMode) -> Result<Rgb, ColorError> {
        if !(0.0..1.0).contains(&position) {
            return Err(ColorError::InvalidPosition { position });
        }

        let stripes = self.flag.stripes();
        if stripes.len() == 1 {
            return Ok(stripes[0].color());
        }

        match mode {
            RenderMode::Stripe => Ok(self.containing_stripe(position).color()),
            RenderMode::Gradient => Ok(self.gradient_at(position)),
        }
    }

    fn containing_stripe(&self, position: f64) -> &crate::model::Stripe {
        let total = self.flag.total_weight();
        let stripes = self.flag.stripes();
        let mut upper = 0.0;
        for stripe in &stripes[..stripes.len() - 1] {
            upper += stripe.weight() / total;
            if position < upper {
                return stripe;
            }
        }
        // Anything at or past the last boundary belongs to the last stripe.
        &stripes[stripes.len() - 1]
    }

    fn gradient_at(&self, position: f64) -> Rgb {
        let total = self.flag.total_weight();
        let stripes = self.flag.stripes();

        // Center of each stripe's interval, in flag order.
        let mut centers = Vec::with_capacity(stripes.len());
        let mut start = 0.0;
        for stripe in stripes {
            let width = stripe.weight() / total;
            centers.push(start + width / 2.0);
            start += width;
        }

        if position <= centers[0] {
            return stripes[0].color();
        }
        if position >= centers[centers.len() - 1] {
            return stripes[stripes.len() - 1].color();
        }

        let next = centers.partition_point(|&c| c < position);
        let prev = next - 1;
        let span = centers[next] - centers[prev];
        let t = (position - centers[prev]) / span;
        lerp(stripes[prev].color(), stripes[next].color(), t)
    }
}

/// Linear blend of two colors: 0 yields `a` exactly, 1 yields `b` exactly.
pub fn blend(a: Rgb, b: Rgb, factor: f64) -> Rgb {
    lerp(a, b, factor.clamp(0.0, 1.0))
}

fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let channel = |a: u8, b: u8| {
        let value = f64::from(a) * (1.0 - t) + f64::from(b) * t;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
}

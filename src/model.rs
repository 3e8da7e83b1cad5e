//! Core data model for flag rendering.
//!
//! A flag is an ordered list of colored stripes, each with a relative
//! weight determining its proportional size along the flag's short axis.
//! Everything here is immutable once constructed; the resolver and scaler
//! are pure functions over these types.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumString};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid color value {value:?}, expected #RRGGBB")]
    InvalidColor { value: String },
    #[error("a flag must have at least one stripe")]
    EmptyFlag,
    #[error("stripe {index} has non-positive weight {weight}")]
    NonPositiveWeight { index: usize, weight: f64 },
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = ModelError;

    /// Parses `#RRGGBB` or the shorthand `#RGB`.
    fn from_str(s: &str) -> Result<Rgb, ModelError> {
        let invalid = || ModelError::InvalidColor {
            value: s.to_string(),
        };

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
                Ok(Rgb { r, g, b })
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Rgb {
                    r: channel(0)?,
                    g: channel(1)?,
                    b: channel(2)?,
                })
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Rgb, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// One color band of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "StripeRepr")]
pub struct Stripe {
    color: Rgb,
    weight: f64,
}

/// Catalog form of a stripe: either a bare hex string (weight 1) or an
/// explicit `{color, weight}` mapping.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StripeRepr {
    Plain(Rgb),
    Weighted {
        color: Rgb,
        #[serde(default = "default_weight")]
        weight: f64,
    },
}

fn default_weight() -> f64 {
    1.0
}

impl From<StripeRepr> for Stripe {
    fn from(repr: StripeRepr) -> Stripe {
        match repr {
            StripeRepr::Plain(color) => Stripe { color, weight: 1.0 },
            StripeRepr::Weighted { color, weight } => Stripe { color, weight },
        }
    }
}

impl Stripe {
    pub fn new(color: Rgb, weight: f64) -> Stripe {
        Stripe { color, weight }
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// An ordered, validated list of stripes representing one named banner.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "FlagRepr")]
pub struct FlagDefinition {
    stripes: Vec<Stripe>,
}

#[derive(Debug, Deserialize)]
struct FlagRepr {
    stripes: Vec<Stripe>,
}

impl TryFrom<FlagRepr> for FlagDefinition {
    type Error = ModelError;

    fn try_from(repr: FlagRepr) -> Result<FlagDefinition, ModelError> {
        FlagDefinition::new(repr.stripes)
    }
}

impl FlagDefinition {
    /// Validates that the flag has at least one stripe and that every
    /// weight is positive.
    pub fn new(stripes: Vec<Stripe>) -> Result<FlagDefinition, ModelError> {
        if stripes.is_empty() {
            return Err(ModelError::EmptyFlag);
        }
        for (index, stripe) in stripes.iter().enumerate() {
            if !(stripe.weight > 0.0) {
                return Err(ModelError::NonPositiveWeight {
                    index,
                    weight: stripe.weight,
                });
            }
        }
        Ok(FlagDefinition { stripes })
    }

    pub fn stripes(&self) -> &[Stripe] {
        &self.stripes
    }

    pub fn stripe_count(&self) -> usize {
        self.stripes.len()
    }

    pub fn total_weight(&self) -> f64 {
        self.stripes.iter().map(Stripe::weight).sum()
    }
}

/// Whether the resolver snaps to the containing stripe's color or
/// interpolates continuously between adjacent stripes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RenderMode {
    Stripe,
    Gradient,
}

/// Axis along which the stripes are laid out on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A second flag to blend against, with a blend factor in `[0, 1]`
/// (0 = entirely the first flag, 1 = entirely the second).
#[derive(Debug, Clone, Copy)]
pub struct BlendSpec<'a> {
    pub flag: &'a FlagDefinition,
    pub factor: f64,
}

impl<'a> BlendSpec<'a> {
    pub fn new(flag: &'a FlagDefinition, factor: f64) -> BlendSpec<'a> {
        BlendSpec {
            flag,
            factor: factor.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_hex() {
        let color: Rgb = "#E40303".parse().unwrap();
        assert_eq!(Rgb::new(0xE4, 0x03, 0x03), color);
    }

    #[test]
    fn test_parse_short_hex() {
        let color: Rgb = "#F0A".parse().unwrap();
        assert_eq!(Rgb::new(0xFF, 0x00, 0xAA), color);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("E40303".parse::<Rgb>().is_err());
        assert!("#E403".parse::<Rgb>().is_err());
        assert!("#GGGGGG".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let color = Rgb::new(91, 206, 250);
        let parsed: Rgb = color.to_string().parse().unwrap();
        assert_eq!(color, parsed);
    }

    #[test]
    fn test_flag_requires_stripes() {
        let result = FlagDefinition::new(Vec::new());
        assert!(matches!(result, Err(ModelError::EmptyFlag)));
    }

    #[test]
    fn test_flag_rejects_zero_weight() {
        let stripes = vec![
            Stripe::new(Rgb::new(255, 0, 0), 1.0),
            Stripe::new(Rgb::new(0, 0, 255), 0.0),
        ];
        let result = FlagDefinition::new(stripes);
        assert!(matches!(
            result,
            Err(ModelError::NonPositiveWeight { index: 1, .. })
        ));
    }

    #[test]
    fn test_total_weight() {
        let flag = FlagDefinition::new(vec![
            Stripe::new(Rgb::new(214, 2, 112), 2.0),
            Stripe::new(Rgb::new(155, 79, 150), 1.0),
            Stripe::new(Rgb::new(0, 56, 168), 2.0),
        ])
        .unwrap();
        assert_eq!(5.0, flag.total_weight());
    }

    #[test]
    fn test_stripe_yaml_forms() {
        let plain: Stripe = serde_yaml::from_str("\"#FF0000\"").unwrap();
        assert_eq!(Rgb::new(255, 0, 0), plain.color());
        assert_eq!(1.0, plain.weight());

        let weighted: Stripe = serde_yaml::from_str("{ color: \"#0038A8\", weight: 2 }").unwrap();
        assert_eq!(Rgb::new(0, 56, 168), weighted.color());
        assert_eq!(2.0, weighted.weight());
    }

    #[test]
    fn test_mode_and_orientation_from_str() {
        assert_eq!(RenderMode::Gradient, "gradient".parse().unwrap());
        assert_eq!(Orientation::Vertical, "vertical".parse().unwrap());
    }

    #[test]
    fn test_blend_spec_clamps_factor() {
        let flag = FlagDefinition::new(vec![Stripe::new(Rgb::new(0, 0, 0), 1.0)]).unwrap();
        assert_eq!(1.0, BlendSpec::new(&flag, 7.5).factor);
        assert_eq!(0.0, BlendSpec::new(&flag, -0.1).factor);
    }
}

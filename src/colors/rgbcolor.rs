//! The RGB color model: three integer channels from 0 to 255. This is the hub of the crate, since
//! every other model converts through it, and it's the only model whose range is enforced by its
//! type rather than checked at conversion time.

use std::fmt;
use std::str::FromStr;

use bound::{Bound, ChannelRange, DomainError};
use color::{AlphaUnit, Channels, Color};
use coord::Coord;
use hex::{self, HexParseError};
use rounding::DEFAULT_ALPHA_PRECISION;

static RGB_BOUNDS: [ChannelRange; 3] = [
    ChannelRange::byte("red"),
    ChannelRange::byte("green"),
    ChannelRange::byte("blue"),
];

/// An RGB color, with each channel as a byte.
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// let teal = RGBColor::new(102, 255, 204);
/// assert_eq!(teal.to_string(), "#66FFCC");
/// let parsed: Channels<RGBColor> = "#6fc".parse().unwrap();
/// assert_eq!(parsed, Channels::Plain(teal));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl RGBColor {
    /// Builds a color from its three channels.
    pub fn new(r: u8, g: u8, b: u8) -> RGBColor {
        RGBColor { r, g, b }
    }

    /// The channels scaled into `[0, 1]`.
    pub fn to_unit(&self) -> Coord {
        Coord::from_bytes([self.r, self.g, self.b])
    }

    /// Scales a point in the unit cube back to bytes, rounding each channel to the nearest integer.
    pub fn from_unit(point: Coord) -> RGBColor {
        let [r, g, b] = point.to_bytes();
        RGBColor { r, g, b }
    }
}

impl Bound for RGBColor {
    fn bounds() -> &'static [ChannelRange] {
        &RGB_BOUNDS
    }

    // u8 channels can't be out of range
    fn check(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

impl Color for RGBColor {
    fn components(&self) -> Vec<f64> {
        vec![f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }

    fn from_components(values: &[f64]) -> RGBColor {
        // in range and integral once checked, so the casts are exact
        RGBColor {
            r: values[0] as u8,
            g: values[1] as u8,
            b: values[2] as u8,
        }
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from((r, g, b): (u8, u8, u8)) -> RGBColor {
        RGBColor { r, g, b }
    }
}

impl fmt::Display for RGBColor {
    /// Formats as six uppercase hex digits with a leading `#`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&[self.r, self.g, self.b]))
    }
}

impl FromStr for Channels<RGBColor> {
    type Err = HexParseError;

    /// Parses any hex form the codec accepts. Alpha, if present, comes out as a fraction with the
    /// default alpha precision.
    fn from_str(s: &str) -> Result<Channels<RGBColor>, HexParseError> {
        hex::hex_to_rgb(s, DEFAULT_ALPHA_PRECISION, AlphaUnit::Fraction)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_unit_scaling() {
        let rgb = RGBColor::new(255, 0, 51);
        let unit = rgb.to_unit();
        assert_eq!((unit.x, unit.y, unit.z), (1., 0., 0.2));
        assert_eq!(RGBColor::from_unit(unit), rgb);
    }

    #[test]
    fn test_parse_and_display() {
        let rgba: Channels<RGBColor> = "#3366FF80".parse().unwrap();
        assert_eq!(rgba.alpha(), Some(0.502));
        assert_eq!(rgba.color().to_string(), "#3366FF");
        assert!("#3366F".parse::<Channels<RGBColor>>().is_err());
    }

    #[test]
    fn test_components() {
        let rgb = RGBColor::from((1, 2, 3));
        assert_eq!(rgb.components(), vec![1., 2., 3.]);
        assert_eq!(RGBColor::from_components(&[1., 2., 3.]), rgb);
        assert_eq!(RGBColor::arity(), 3);
    }
}

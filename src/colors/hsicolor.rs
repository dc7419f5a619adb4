//! HSI: hue, saturation, and intensity, where intensity is simply the mean of the three RGB
//! channels. The hue is the same hexagonal hue as in HSL and HSV. Because the mean can be high
//! while one channel is already at its maximum, some HSI triples describe colors no RGB display
//! can show; converting those back rescales the whole color until it fits.

use bound::{Bound, ChannelRange, DomainError};
use color::Color;

static HSI_BOUNDS: [ChannelRange; 3] = [
    ChannelRange::angle("hue"),
    ChannelRange::percent("saturation"),
    ChannelRange::percent("intensity"),
];

/// A color in the HSI color space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSIColor {
    /// The hue, in degrees.
    pub h: f64,
    /// The saturation: how far the smallest channel is below the mean, relative to the mean. Ranges
    /// from 0 to 100.
    pub s: f64,
    /// The intensity, the mean of red, green, and blue. Ranges from 0 to 100.
    pub i: f64,
}

impl HSIColor {
    /// Builds a color from hue, saturation, and intensity. Nothing is checked until conversion.
    pub fn new(h: f64, s: f64, i: f64) -> HSIColor {
        HSIColor { h, s, i }
    }
}

impl Bound for HSIColor {
    fn bounds() -> &'static [ChannelRange] {
        &HSI_BOUNDS
    }

    fn check(&self) -> Result<(), DomainError> {
        Self::check_components(&self.components())
    }
}

impl Color for HSIColor {
    fn components(&self) -> Vec<f64> {
        vec![self.h, self.s, self.i]
    }

    fn from_components(values: &[f64]) -> HSIColor {
        HSIColor {
            h: values[0],
            s: values[1],
            i: values[2],
        }
    }
}

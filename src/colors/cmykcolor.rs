//! CMYK, the subtractive model used in print: cyan, magenta, yellow, and key (black), each as a
//! percentage of ink coverage. Unlike the other models here it has four channels, so a CMYK color
//! with alpha has five.

use bound::{Bound, ChannelRange, DomainError};
use color::Color;

static CMYK_BOUNDS: [ChannelRange; 4] = [
    ChannelRange::percent("cyan"),
    ChannelRange::percent("magenta"),
    ChannelRange::percent("yellow"),
    ChannelRange::percent("key"),
];

/// A CMYK color, with every channel from 0 to 100.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMYKColor {
    /// Cyan.
    pub c: f64,
    /// Magenta.
    pub m: f64,
    /// Yellow.
    pub y: f64,
    /// Key, i.e. black.
    pub k: f64,
}

impl CMYKColor {
    /// Builds a color from its four channels. Nothing is checked until conversion.
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> CMYKColor {
        CMYKColor { c, m, y, k }
    }
}

impl Bound for CMYKColor {
    fn bounds() -> &'static [ChannelRange] {
        &CMYK_BOUNDS
    }

    fn check(&self) -> Result<(), DomainError> {
        Self::check_components(&self.components())
    }
}

impl Color for CMYKColor {
    fn components(&self) -> Vec<f64> {
        vec![self.c, self.m, self.y, self.k]
    }

    fn from_components(values: &[f64]) -> CMYKColor {
        CMYKColor {
            c: values[0],
            m: values[1],
            y: values[2],
            k: values[3],
        }
    }
}

//! This module implements the HSV color space, a cousin of the HSL color space, also known as HSB
//! (B for brightness). The definition of value differs from lightness: it goes from black to full
//! saturation instead of black to white. This makes value an extraordinarily poor analog of
//! luminance (dark purple is the same value as white, despite reflecting one-tenth the light), but
//! does make the hue and saturation a bit more meaningful than HSL.

use bound::{Bound, ChannelRange, DomainError};
use color::Color;

static HSV_BOUNDS: [ChannelRange; 3] = [
    ChannelRange::angle("hue"),
    ChannelRange::percent("saturation"),
    ChannelRange::percent("value"),
];

/// An HSV color, defining parameters for hue, saturation, and value from the RGB space.
/// # Example
/// As with HSL, changing a red to a yellow results in a lightness increase as well.
///
/// ```
/// # use decolmor::prelude::*;
/// # use decolmor::hex::rgb_to_hex;
/// # use decolmor::direct::hsv_to_rgb;
/// let red = HSVColor::new(0., 50., 80.);
/// let yellow = HSVColor::new(50., 50., 80.);
/// let to_hex = |c: HSVColor| rgb_to_hex(hsv_to_rgb(c).unwrap(), AlphaUnit::Fraction).unwrap();
/// assert_eq!(to_hex(red), "#CC6666");
/// assert_eq!(to_hex(yellow), "#CCBB66");
/// // note how the second one is strictly more light
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, described as an angle in degrees. Values outside 0 to 360 are folded onto the wheel.
    pub h: f64,
    /// The saturation, defined as the radius of the HSV cylinder and the distance between the color
    /// and the equivalent-value grayscale. Ranges between 0 and 100.
    pub s: f64,
    /// The value, defined as the largest RGB primary value of a color, from 0 to 100. This
    /// corresponds to something close to color intensity, not really luminance.
    pub v: f64,
}

/// HSB is HSV under another name.
pub type HSBColor = HSVColor;

impl HSVColor {
    /// Builds a color from hue, saturation, and value. Nothing is checked until conversion.
    pub fn new(h: f64, s: f64, v: f64) -> HSVColor {
        HSVColor { h, s, v }
    }
}

impl Bound for HSVColor {
    fn bounds() -> &'static [ChannelRange] {
        &HSV_BOUNDS
    }

    fn check(&self) -> Result<(), DomainError> {
        Self::check_components(&self.components())
    }
}

impl Color for HSVColor {
    fn components(&self) -> Vec<f64> {
        vec![self.h, self.s, self.v]
    }

    fn from_components(values: &[f64]) -> HSVColor {
        HSVColor {
            h: values[0],
            s: values[1],
            v: values[2],
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hsv_bounds() {
        assert!(HSVColor::new(375., 20., 50.).check().is_ok());
        let err = HSBColor::new(0., 100.5, 50.).check().unwrap_err();
        assert_eq!(err.channel, "saturation");
        assert_eq!(err.value, 100.5);
    }
}

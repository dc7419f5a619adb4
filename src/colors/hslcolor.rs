//! This file implements HSL: a simple transformation of RGB that creates a cylindrical space. HSL
//! and HSV are very similar but have an important difference: *value* in HSV runs from black to
//! fully saturated colors, whereas *lightness* in HSL runs from black to fully saturated in the
//! middle to white at the end. This makes the saturation component of HSL rather inaccurate,
//! because light colors can have a very high saturation even if they are extremely close to white.
//! The space is mathematically cylindrical, but when you account for the actual differentiation of
//! colors it forms a "bi-hexcone", where the hue component is a hexagon stretched into a circle.
//! That hexagon is why hue never needs a trig function here.
//! Converting gray into HSL gives a hue of 0 degrees, although any hue could be used in its place.

use bound::{Bound, ChannelRange, DomainError};
use color::Color;

static HSL_BOUNDS: [ChannelRange; 3] = [
    ChannelRange::angle("hue"),
    ChannelRange::percent("saturation"),
    ChannelRange::percent("lightness"),
];

/// A color in the HSL color space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component, in degrees. Anything from 0 to 360 is canonical, but any finite angle is
    /// accepted and folded onto the wheel.
    pub h: f64,
    /// The saturation component. Ranges between 0 and 100.
    pub s: f64,
    /// The lightness component. Ranges from 0 to 100. Defined in HSL as the average of the largest
    /// and smallest color components in RGB, which sacrifices accuracy for convenience.
    pub l: f64,
}

impl HSLColor {
    /// Builds a color from hue, saturation, and lightness. Nothing is checked until conversion.
    pub fn new(h: f64, s: f64, l: f64) -> HSLColor {
        HSLColor { h, s, l }
    }
}

impl Bound for HSLColor {
    fn bounds() -> &'static [ChannelRange] {
        &HSL_BOUNDS
    }

    fn check(&self) -> Result<(), DomainError> {
        Self::check_components(&self.components())
    }
}

impl Color for HSLColor {
    fn components(&self) -> Vec<f64> {
        vec![self.h, self.s, self.l]
    }

    fn from_components(values: &[f64]) -> HSLColor {
        HSLColor {
            h: values[0],
            s: values[1],
            l: values[2],
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hsl_bounds() {
        assert!(HSLColor::new(-30., 0., 100.).check().is_ok());
        assert_eq!(
            HSLColor::new(0., 50., -1.).check().unwrap_err().channel,
            "lightness"
        );
        assert_eq!(
            HSLColor::new(f64::NAN, 50., 50.).check().unwrap_err().channel,
            "hue"
        );
    }
}

//! Converts between HSL and HSV without going through RGB. Both share the same hue, so only
//! saturation and the third channel change: HSV's value is the top of the HSL bi-hexcone at a
//! given lightness, and the two saturations measure chroma against different maxima. Skipping RGB
//! also skips rounding to whole bytes, so these are more precise than a two-step conversion.

use bound::{Bound, DomainError};
use color::Channels;
use colors::{HSLColor, HSVColor};
use rounding::round_to;

/// Converts HSL to HSV, rounding to `precision` decimal places. The hue is kept as is apart from
/// rounding, and alpha is passed through untouched.
/// # Errors
/// A `DomainError` if saturation or lightness is outside `[0, 100]` or hue isn't finite.
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// # use decolmor::cross::hsl_to_hsv;
/// let hsv = hsl_to_hsv(HSLColor::new(160., 100., 70.), 1).unwrap();
/// assert_eq!(hsv.into_color(), HSVColor::new(160., 60., 100.));
/// ```
pub fn hsl_to_hsv<C: Into<Channels<HSLColor>>>(
    hsl: C,
    precision: u32,
) -> Result<Channels<HSVColor>, DomainError> {
    hsl.into().try_map(|hsl| {
        hsl.check()?;
        let saturation = hsl.s / 100.;
        let lightness = hsl.l / 100.;
        let value = lightness + saturation * lightness.min(1. - lightness);
        // black has no saturation
        let saturation = if lightness == 0. {
            0.
        } else {
            2. * (1. - lightness / value)
        };
        Ok(HSVColor {
            h: round_to(hsl.h, precision),
            s: round_to(saturation * 100., precision),
            v: round_to(value * 100., precision),
        })
    })
}

pub use self::hsl_to_hsv as hsl_to_hsb;

/// Converts HSV to HSL, rounding to `precision` decimal places. The hue is kept as is apart from
/// rounding, and alpha is passed through untouched.
/// # Errors
/// A `DomainError` if saturation or value is outside `[0, 100]` or hue isn't finite.
pub fn hsv_to_hsl<C: Into<Channels<HSVColor>>>(
    hsv: C,
    precision: u32,
) -> Result<Channels<HSLColor>, DomainError> {
    hsv.into().try_map(|hsv| {
        hsv.check()?;
        let saturation = hsv.s / 100.;
        let value = hsv.v / 100.;
        let lightness = value * (1. - saturation / 2.);
        // black and white have no saturation
        let saturation = if lightness == 0. || lightness == 1. {
            0.
        } else {
            (value - lightness) / lightness.min(1. - lightness)
        };
        Ok(HSLColor {
            h: round_to(hsv.h, precision),
            s: round_to(saturation * 100., precision),
            l: round_to(lightness * 100., precision),
        })
    })
}

pub use self::hsv_to_hsl as hsb_to_hsl;

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_cross_conversion() {
        assert_eq!(
            hsv_to_hsl(HSVColor::new(160., 60., 100.), 1).unwrap().into_color(),
            HSLColor::new(160., 100., 70.)
        );
        // going the long way through RGB and this way agree up to one rounding step
        assert_eq!(
            hsl_to_hsv(HSLColor::new(210.8, 75.9, 27.6), 1).unwrap().into_color(),
            HSVColor::new(210.8, 86.3, 48.5)
        );
        assert_eq!(
            hsb_to_hsl(HSVColor::new(210.8, 86.3, 48.6), 1).unwrap().into_color(),
            HSLColor::new(210.8, 75.9, 27.6)
        );
    }

    #[test]
    fn test_extremes() {
        let black = hsl_to_hsv(HSLColor::new(0., 50., 0.), 1).unwrap().into_color();
        assert_eq!(black, HSVColor::new(0., 0., 0.));
        let white = hsl_to_hsb(HSLColor::new(0., 50., 100.), 1).unwrap().into_color();
        assert_eq!(white, HSVColor::new(0., 0., 100.));
        let white = hsv_to_hsl(HSVColor::new(0., 0., 100.), 1).unwrap().into_color();
        assert_eq!(white, HSLColor::new(0., 0., 100.));
        let black = hsv_to_hsl(HSVColor::new(0., 100., 0.), 1).unwrap().into_color();
        assert_eq!(black, HSLColor::new(0., 0., 0.));
        let red = hsv_to_hsl(HSVColor::new(0., 50., 100.), 1).unwrap().into_color();
        assert_eq!(red, HSLColor::new(0., 100., 75.));
    }

    #[test]
    fn test_hue_is_only_rounded() {
        let hsv = hsl_to_hsv(HSLColor::new(-30., 50., 60.), 1).unwrap().into_color();
        assert_eq!(hsv, HSVColor::new(-30., 50., 80.));
        let hsv = hsl_to_hsv(HSLColor::new(245.46, 50., 60.), 0).unwrap().into_color();
        assert_eq!(hsv.h, 245.);
    }

    #[test]
    fn test_alpha_and_errors() {
        let hsl = hsv_to_hsl((HSVColor::new(10., 10., 10.), 0.77777), 0).unwrap();
        assert_eq!(hsl.alpha(), Some(0.77777));
        let err = hsl_to_hsv(HSLColor::new(0., 50., 101.), 1).unwrap_err();
        assert_eq!(err.channel, "lightness");
        assert!(hsv_to_hsl(HSVColor::new(0., 100.01, 50.), 1).is_err());
    }
}

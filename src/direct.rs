//! The direct angle converters between RGB and HSL or HSV. Going to RGB, they use a closed form
//! per channel instead of picking a hexagon sector: each channel looks up its own position on a
//! periodic piecewise-linear wave, offset by a fixed phase. Because every hue term sits inside a
//! `rem_euclid`, any finite hue works, including negative ones and ones past 360.
//!
//! See [`sector`](../sector/index.html) for the sector-table strategy, which gives the same
//! results (up to rounding) by a different route.

use bound::{Bound, DomainError};
use color::Channels;
use colors::{HSLColor, HSVColor, RGBColor};
use coord::Coord;
use hue::HueChroma;
use rounding::round_to;

/// Converts RGB to HSL, rounding hue, saturation, and lightness to `precision` decimal places.
/// Alpha is passed through untouched.
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// # use decolmor::direct::rgb_to_hsl;
/// let hsl = rgb_to_hsl(RGBColor::new(102, 255, 204), 1);
/// assert_eq!(hsl, Channels::Plain(HSLColor::new(160., 100., 70.)));
/// ```
pub fn rgb_to_hsl<C: Into<Channels<RGBColor>>>(rgb: C, precision: u32) -> Channels<HSLColor> {
    rgb.into().map(|rgb| {
        let kernel = HueChroma::from_unit(rgb.to_unit());
        let lightness = (kernel.cmax + kernel.cmin) / 2.;
        let saturation = if kernel.chroma == 0. {
            0.
        } else {
            kernel.chroma / (1. - (2. * lightness - 1.).abs())
        };
        HSLColor {
            h: round_to(kernel.hue, precision),
            s: round_to(saturation * 100., precision),
            l: round_to(lightness * 100., precision),
        }
    })
}

/// Converts RGB to HSV, rounding to `precision` decimal places. Alpha is passed through untouched.
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// # use decolmor::direct::rgb_to_hsv;
/// let hsv = rgb_to_hsv((RGBColor::new(102, 255, 204), 0.5), 1);
/// assert_eq!(hsv, Channels::WithAlpha(HSVColor::new(160., 60., 100.), 0.5));
/// ```
pub fn rgb_to_hsv<C: Into<Channels<RGBColor>>>(rgb: C, precision: u32) -> Channels<HSVColor> {
    rgb.into().map(|rgb| {
        let kernel = HueChroma::from_unit(rgb.to_unit());
        let value = kernel.cmax;
        let saturation = if kernel.chroma == 0. {
            0.
        } else {
            kernel.chroma / value
        };
        HSVColor {
            h: round_to(kernel.hue, precision),
            s: round_to(saturation * 100., precision),
            v: round_to(value * 100., precision),
        }
    })
}

pub use self::rgb_to_hsv as rgb_to_hsb;

/// Converts HSL to RGB with the closed-form formula. Alpha is passed through untouched.
/// # Errors
/// A `DomainError` if saturation or lightness is outside `[0, 100]` or hue isn't finite.
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// # use decolmor::direct::hsl_to_rgb;
/// let rgb = hsl_to_rgb(HSLColor::new(245., 50., 60.)).unwrap();
/// assert_eq!(rgb.color().to_string(), "#6E66CC");
/// ```
pub fn hsl_to_rgb<C: Into<Channels<HSLColor>>>(hsl: C) -> Result<Channels<RGBColor>, DomainError> {
    hsl.into().try_map(|hsl| {
        hsl.check()?;
        let saturation = hsl.s / 100.;
        let lightness = hsl.l / 100.;
        let a = saturation * lightness.min(1. - lightness);
        let channel = |offset: f64| {
            let k = (offset + hsl.h / 30.).rem_euclid(12.);
            lightness - a * (k - 3.).min(9. - k).min(1.).max(-1.)
        };
        Ok(RGBColor::from_unit(Coord {
            x: channel(0.),
            y: channel(8.),
            z: channel(4.),
        }))
    })
}

/// Converts HSV to RGB with the closed-form formula. Alpha is passed through untouched.
/// # Errors
/// A `DomainError` if saturation or value is outside `[0, 100]` or hue isn't finite.
pub fn hsv_to_rgb<C: Into<Channels<HSVColor>>>(hsv: C) -> Result<Channels<RGBColor>, DomainError> {
    hsv.into().try_map(|hsv| {
        hsv.check()?;
        let saturation = hsv.s / 100.;
        let value = hsv.v / 100.;
        let channel = |offset: f64| {
            let k = (offset + hsv.h / 60.).rem_euclid(6.);
            value - value * saturation * k.min(4. - k).min(1.).max(0.)
        };
        Ok(RGBColor::from_unit(Coord {
            x: channel(5.),
            y: channel(3.),
            z: channel(1.),
        }))
    })
}

pub use self::hsv_to_rgb as hsb_to_rgb;

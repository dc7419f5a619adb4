//! Conversion between RGB and CMYK. This is the naive device-independent formula: black takes as
//! much of the color as it can, and cyan, magenta, and yellow make up the rest relative to what's
//! left. Real printers use ICC profiles and ink limits, none of which apply here.

use bound::{Bound, DomainError};
use color::Channels;
use colors::{CMYKColor, RGBColor};
use coord::Coord;
use rounding::round_to;

/// Converts RGB to CMYK, rounding to `precision` decimal places. Alpha is passed through untouched.
/// Pure black comes out as key alone, since there's no remaining color to divide among the inks.
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// # use decolmor::cmyk::rgb_to_cmyk;
/// let cmyk = rgb_to_cmyk(RGBColor::new(102, 255, 204), 1);
/// assert_eq!(cmyk.into_color(), CMYKColor::new(60., 0., 20., 0.));
/// let black = rgb_to_cmyk(RGBColor::new(0, 0, 0), 1);
/// assert_eq!(black.into_color(), CMYKColor::new(0., 0., 0., 100.));
/// ```
pub fn rgb_to_cmyk<C: Into<Channels<RGBColor>>>(rgb: C, precision: u32) -> Channels<CMYKColor> {
    rgb.into().map(|rgb| {
        let unit = rgb.to_unit();
        let key = 1. - unit.max();
        let ink = |channel: f64| {
            if key == 1. {
                0.
            } else {
                (1. - channel - key) / (1. - key)
            }
        };
        let percent = |v: f64| round_to(v * 100., precision);
        CMYKColor {
            c: percent(ink(unit.x)),
            m: percent(ink(unit.y)),
            y: percent(ink(unit.z)),
            k: percent(key),
        }
    })
}

/// Converts CMYK to RGB. Alpha is passed through untouched.
/// # Errors
/// A `DomainError` if any channel is outside `[0, 100]`.
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// # use decolmor::cmyk::cmyk_to_rgb;
/// let rgba = cmyk_to_rgb((CMYKColor::new(86.3, 44.4, 0., 51.4), 0.5)).unwrap();
/// assert_eq!(rgba, Channels::WithAlpha(RGBColor::new(17, 69, 124), 0.5));
/// ```
pub fn cmyk_to_rgb<C: Into<Channels<CMYKColor>>>(
    cmyk: C,
) -> Result<Channels<RGBColor>, DomainError> {
    cmyk.into().try_map(|cmyk| {
        cmyk.check()?;
        let white = 1. - cmyk.k / 100.;
        let channel = |ink: f64| (1. - ink / 100.) * white;
        Ok(RGBColor::from_unit(Coord {
            x: channel(cmyk.c),
            y: channel(cmyk.m),
            z: channel(cmyk.y),
        }))
    })
}

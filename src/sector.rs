//! The sector-table converters. These cut the hue hexagon into six 60-degree sectors: within a
//! sector one channel sits at the chroma, one at zero, and the third climbs or falls linearly
//! between them. Looking up the sector gives a point on the hexagon, and adding a constant to every
//! channel lifts it to the right lightness, value, or intensity.
//!
//! This is the only way to go from HSI to RGB, so both directions of HSI live here. The HSL and HSV
//! variants are alternatives to [`direct`](../direct/index.html) and agree with it to within one
//! unit per channel.

use bound::{Bound, DomainError};
use color::Channels;
use colors::{HSIColor, HSLColor, HSVColor, RGBColor};
use coord::Coord;
use hue::HueChroma;
use rounding::round_to;

/// Folds a hue onto `[0, 6)`, measured in sectors instead of degrees.
fn fold_hue(hue: f64) -> f64 {
    hue.rem_euclid(360.) / 60.
}

/// The point on the hexagon for a folded hue, where `chroma` is the largest channel and `x` the
/// intermediate one. The smallest channel is always 0.
fn hexagon_point(sector: f64, chroma: f64, x: f64) -> Coord {
    // rem_euclid can round up to exactly 360 for tiny negative hues, so the index is clamped
    let (r, g, b) = match (sector as usize).min(5) {
        0 => (chroma, x, 0.),
        1 => (x, chroma, 0.),
        2 => (0., chroma, x),
        3 => (0., x, chroma),
        4 => (x, 0., chroma),
        _ => (chroma, 0., x),
    };
    Coord { x: r, y: g, z: b }
}

/// How far along its sector a folded hue is, as a triangle wave: 0 at the primaries and
/// secondaries, 1 halfway between.
fn sector_ramp(sector: f64) -> f64 {
    1. - (sector.rem_euclid(2.) - 1.).abs()
}

/// Converts HSL to RGB by sector lookup. Alpha is passed through untouched.
/// # Errors
/// A `DomainError` if saturation or lightness is outside `[0, 100]` or hue isn't finite.
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// # use decolmor::sector::hsl_to_rgb_alt;
/// let rgb = hsl_to_rgb_alt(HSLColor::new(245., 50., 60.)).unwrap();
/// assert_eq!(rgb, Channels::Plain(RGBColor::new(110, 102, 204)));
/// ```
pub fn hsl_to_rgb_alt<C: Into<Channels<HSLColor>>>(
    hsl: C,
) -> Result<Channels<RGBColor>, DomainError> {
    hsl.into().try_map(|hsl| {
        hsl.check()?;
        let saturation = hsl.s / 100.;
        let lightness = hsl.l / 100.;
        let sector = fold_hue(hsl.h);
        let chroma = (1. - (2. * lightness - 1.).abs()) * saturation;
        let x = chroma * sector_ramp(sector);
        let offset = lightness - chroma / 2.;
        Ok(RGBColor::from_unit(
            hexagon_point(sector, chroma, x) + Coord::splat(offset),
        ))
    })
}

/// Converts HSV to RGB by sector lookup. Alpha is passed through untouched.
/// # Errors
/// A `DomainError` if saturation or value is outside `[0, 100]` or hue isn't finite.
pub fn hsv_to_rgb_alt<C: Into<Channels<HSVColor>>>(
    hsv: C,
) -> Result<Channels<RGBColor>, DomainError> {
    hsv.into().try_map(|hsv| {
        hsv.check()?;
        let saturation = hsv.s / 100.;
        let value = hsv.v / 100.;
        let sector = fold_hue(hsv.h);
        let chroma = value * saturation;
        let x = chroma * sector_ramp(sector);
        Ok(RGBColor::from_unit(
            hexagon_point(sector, chroma, x) + Coord::splat(value - chroma),
        ))
    })
}

pub use self::hsv_to_rgb_alt as hsb_to_rgb_alt;

/// Converts RGB to HSI, rounding to `precision` decimal places. Alpha is passed through untouched.
/// Saturation here is how far the smallest channel falls below the mean, so pure primaries and
/// secondaries both have 100% saturation, at different intensities.
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// # use decolmor::sector::rgb_to_hsi;
/// let red = rgb_to_hsi(RGBColor::new(255, 0, 0), 1);
/// assert_eq!(red.into_color(), HSIColor::new(0., 100., 33.3));
/// ```
pub fn rgb_to_hsi<C: Into<Channels<RGBColor>>>(rgb: C, precision: u32) -> Channels<HSIColor> {
    rgb.into().map(|rgb| {
        let unit = rgb.to_unit();
        let kernel = HueChroma::from_unit(unit);
        let intensity = (unit.x + unit.y + unit.z) / 3.;
        let saturation = if kernel.chroma == 0. {
            0.
        } else {
            1. - kernel.cmin / intensity
        };
        HSIColor {
            h: round_to(kernel.hue, precision),
            s: round_to(saturation * 100., precision),
            i: round_to(intensity * 100., precision),
        }
    })
}

/// Converts HSI to RGB. Alpha is passed through untouched.
///
/// An HSI triple can describe a color brighter than RGB can hold: full saturation at full
/// intensity, for instance, would need a red of 3. When any channel comes out above 1, the whole
/// color is scaled down by its largest channel, which keeps the hue and the channel ratios but
/// gives up on the intensity.
/// # Errors
/// A `DomainError` if saturation or intensity is outside `[0, 100]` or hue isn't finite.
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// # use decolmor::sector::hsi_to_rgb;
/// let too_bright = hsi_to_rgb(HSIColor::new(0., 100., 100.)).unwrap();
/// assert_eq!(too_bright.into_color(), RGBColor::new(255, 0, 0));
/// ```
pub fn hsi_to_rgb<C: Into<Channels<HSIColor>>>(hsi: C) -> Result<Channels<RGBColor>, DomainError> {
    hsi.into().try_map(|hsi| {
        hsi.check()?;
        let saturation = hsi.s / 100.;
        let intensity = hsi.i / 100.;
        let sector = fold_hue(hsi.h);
        let ramp = sector_ramp(sector);
        // the three channels must average to the intensity
        let chroma = 3. * intensity * saturation / (1. + ramp);
        let x = chroma * ramp;
        let offset = intensity * (1. - saturation);
        let mut point = hexagon_point(sector, chroma, x) + Coord::splat(offset);
        let brightest = point.max();
        if brightest > 1. {
            trace!("{:?} is outside the RGB cube, rescaling by {}", hsi, brightest);
            point = point / brightest;
        }
        Ok(RGBColor::from_unit(point))
    })
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use direct::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};

    fn rgb(r: u8, g: u8, b: u8) -> Channels<RGBColor> {
        Channels::Plain(RGBColor::new(r, g, b))
    }

    #[test]
    fn test_fold_hue() {
        assert_eq!(fold_hue(0.), 0.);
        assert_eq!(fold_hue(90.), 1.5);
        assert_eq!(fold_hue(420.), 1.);
        assert_eq!(fold_hue(-300.), 1.);
        assert!(fold_hue(359.9) < 6.);
    }

    #[test]
    fn test_alt_matches_direct_on_samples() {
        for &(r, g, b) in &[(17, 69, 124), (102, 255, 204), (250, 1, 30), (64, 64, 65)] {
            let hsl = rgb_to_hsl(RGBColor::new(r, g, b), 1);
            assert_eq!(hsl_to_rgb_alt(hsl).unwrap(), hsl_to_rgb(hsl).unwrap());
            let hsv = rgb_to_hsv(RGBColor::new(r, g, b), 1);
            assert_eq!(hsv_to_rgb_alt(hsv).unwrap(), hsv_to_rgb(hsv).unwrap());
        }
    }

    #[test]
    fn test_hue_of_360() {
        // rounding to 0 places pushes these hues up to exactly 360
        let hsl = rgb_to_hsl(RGBColor::new(123, 1, 2), 0);
        assert_eq!(hsl.into_color(), HSLColor::new(360., 98., 24.));
        assert_eq!(hsl_to_rgb_alt(hsl).unwrap(), rgb(121, 1, 1));

        let hsv = rgb_to_hsv(RGBColor::new(128, 7, 8), 0);
        assert_eq!(hsv.into_color(), HSVColor::new(360., 95., 50.));
        assert_eq!(hsb_to_rgb_alt(hsv).unwrap(), rgb(128, 6, 6));

        let hsi = rgb_to_hsi(RGBColor::new(255, 11, 13), 0);
        assert_eq!(hsi.into_color(), HSIColor::new(360., 88., 36.));
        assert_eq!(hsi_to_rgb(hsi).unwrap(), rgb(253, 11, 11));
    }

    #[test]
    fn test_hue_outside_wheel() {
        let yellow = rgb(255, 255, 0);
        assert_eq!(hsl_to_rgb_alt(HSLColor::new(420., 100., 50.)).unwrap(), yellow);
        assert_eq!(hsl_to_rgb_alt(HSLColor::new(-300., 100., 50.)).unwrap(), yellow);
        assert_eq!(hsv_to_rgb_alt(HSVColor::new(-300., 100., 100.)).unwrap(), yellow);
        assert_eq!(hsi_to_rgb(HSIColor::new(420., 100., 66.7)).unwrap(), yellow);
    }

    #[test]
    fn test_rgb_to_hsi() {
        assert_eq!(
            rgb_to_hsi(RGBColor::new(102, 255, 204), 1).into_color(),
            HSIColor::new(160., 45.5, 73.3)
        );
        assert_eq!(
            rgb_to_hsi(RGBColor::new(255, 255, 0), 1).into_color(),
            HSIColor::new(60., 100., 66.7)
        );
        assert_eq!(
            rgb_to_hsi(RGBColor::new(0, 0, 0), 1).into_color(),
            HSIColor::new(0., 0., 0.)
        );
        assert_eq!(
            rgb_to_hsi(RGBColor::new(255, 255, 255), 1).into_color(),
            HSIColor::new(0., 0., 100.)
        );
    }

    #[test]
    fn test_hsi_round_trip_needs_two_places() {
        let navy = RGBColor::new(17, 69, 124);
        assert_eq!(hsi_to_rgb(rgb_to_hsi(navy, 2)).unwrap(), rgb(17, 69, 124));
        // one place isn't always enough for HSI
        assert_eq!(
            hsi_to_rgb(HSIColor::new(210.8, 74.7, 27.6)).unwrap(),
            rgb(18, 69, 124)
        );
    }

    #[test]
    fn test_hsi_overrange_is_rescaled() {
        assert_eq!(hsi_to_rgb(HSIColor::new(0., 100., 100.)).unwrap(), rgb(255, 0, 0));
        assert_eq!(hsi_to_rgb(HSIColor::new(160., 60., 70.)).unwrap(), rgb(69, 255, 193));
        assert_eq!(hsi_to_rgb(HSIColor::new(120., 0., 50.2)).unwrap(), rgb(128, 128, 128));
    }

    #[test]
    fn test_alpha_passes_through() {
        let hsi = rgb_to_hsi((RGBColor::new(9, 8, 7), 0.3333), 0);
        assert_eq!(hsi.alpha(), Some(0.3333));
        assert_eq!(hsi_to_rgb(hsi).unwrap().alpha(), Some(0.3333));
        let back = hsv_to_rgb_alt((HSVColor::new(1., 2., 3.), 17.)).unwrap();
        assert_eq!(back.alpha(), Some(17.));
    }

    #[test]
    fn test_out_of_range_input() {
        assert_eq!(
            hsi_to_rgb(HSIColor::new(0., 50., 100.5)).unwrap_err().channel,
            "intensity"
        );
        assert!(hsl_to_rgb_alt(HSLColor::new(f64::NAN, 50., 50.)).is_err());
        assert!(hsv_to_rgb_alt(HSVColor::new(0., -0.1, 50.)).is_err());
    }
}

//! Properties that should hold for every color, not just the ones in the fixture table.

extern crate decolmor;
#[macro_use]
extern crate proptest;

use decolmor::cmyk::{cmyk_to_rgb, rgb_to_cmyk};
use decolmor::direct::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};
use decolmor::hex::{decode, encode, hex_to_rgb, rgb_to_hex};
use decolmor::prelude::*;
use decolmor::sector::{hsi_to_rgb, hsl_to_rgb_alt, hsv_to_rgb_alt, rgb_to_hsi};
use proptest::prelude::*;

fn rgb() -> impl Strategy<Value = RGBColor> {
    any::<(u8, u8, u8)>().prop_map(RGBColor::from)
}

fn percent() -> impl Strategy<Value = f64> {
    0.0_f64..=100.0
}

fn hue() -> impl Strategy<Value = f64> {
    0.0_f64..360.0
}

// channels may differ by one from float error alone
fn close(a: Channels<RGBColor>, b: Channels<RGBColor>) -> bool {
    a.to_vec()
        .iter()
        .zip(b.to_vec())
        .all(|(x, y)| (x - y).abs() <= 1.)
}

proptest! {
    #[test]
    fn hex_is_a_bijection(bytes in any::<[u8; 3]>()) {
        let hex = encode(&bytes);
        prop_assert_eq!(decode(&hex).unwrap(), bytes.to_vec());
        prop_assert_eq!(encode(&decode(&hex.to_lowercase()).unwrap()), hex);
    }

    #[test]
    fn hex_with_alpha_byte_is_a_bijection(bytes in any::<[u8; 4]>()) {
        let hex = encode(&bytes);
        let rgba = hex_to_rgb(&hex, 3, AlphaUnit::Byte).unwrap();
        prop_assert_eq!(rgb_to_hex(rgba, AlphaUnit::Byte).unwrap(), hex.clone());
        // three places are enough to tell every alpha byte apart
        let rgba = hex_to_rgb(&hex, 3, AlphaUnit::Fraction).unwrap();
        prop_assert_eq!(rgb_to_hex(rgba, AlphaUnit::Fraction).unwrap(), hex);
    }

    #[test]
    fn alpha_is_never_touched(color in rgb(), alpha in any::<f64>(), precision in 0u32..6) {
        let rgba = Channels::WithAlpha(color, alpha);
        let same = |a: Option<f64>| a.map(f64::to_bits) == Some(alpha.to_bits());
        let hsl = rgb_to_hsl(rgba, precision);
        prop_assert!(same(hsl.alpha()));
        prop_assert!(same(hsl_to_rgb(hsl).unwrap().alpha()));
        let hsv = rgb_to_hsv(rgba, precision);
        prop_assert!(same(hsv_to_rgb_alt(hsv).unwrap().alpha()));
        let hsi = rgb_to_hsi(rgba, precision);
        prop_assert!(same(hsi_to_rgb(hsi).unwrap().alpha()));
        let cmyk = rgb_to_cmyk(rgba, precision);
        prop_assert!(same(cmyk_to_rgb(cmyk).unwrap().alpha()));
    }

    #[test]
    fn one_place_is_lossless(color in rgb()) {
        let plain = Channels::Plain(color);
        prop_assert_eq!(hsl_to_rgb(rgb_to_hsl(color, 1)).unwrap(), plain);
        prop_assert_eq!(hsl_to_rgb_alt(rgb_to_hsl(color, 1)).unwrap(), plain);
        prop_assert_eq!(hsv_to_rgb(rgb_to_hsv(color, 1)).unwrap(), plain);
        prop_assert_eq!(hsv_to_rgb_alt(rgb_to_hsv(color, 1)).unwrap(), plain);
        prop_assert_eq!(cmyk_to_rgb(rgb_to_cmyk(color, 1)).unwrap(), plain);
    }

    #[test]
    fn two_places_are_lossless_for_hsi(color in rgb()) {
        prop_assert_eq!(hsi_to_rgb(rgb_to_hsi(color, 2)).unwrap(), Channels::Plain(color));
    }

    #[test]
    fn zero_places_drift_a_little(color in rgb()) {
        let drift = |back: Channels<RGBColor>, limit: f64| {
            back.to_vec()
                .iter()
                .zip(color.components())
                .all(|(x, y)| (x - y).abs() <= limit)
        };
        prop_assert!(drift(hsl_to_rgb(rgb_to_hsl(color, 0)).unwrap(), 5.));
        prop_assert!(drift(hsv_to_rgb(rgb_to_hsv(color, 0)).unwrap(), 3.));
        prop_assert!(drift(hsi_to_rgb(rgb_to_hsi(color, 0)).unwrap(), 6.));
        prop_assert!(drift(cmyk_to_rgb(rgb_to_cmyk(color, 0)).unwrap(), 2.));
    }

    #[test]
    fn hue_wraps_around(h in hue(), s in percent(), l in percent(), turns in -3i32..4) {
        let shifted = h + 360. * f64::from(turns);
        let base = hsl_to_rgb(HSLColor::new(h, s, l)).unwrap();
        prop_assert!(close(hsl_to_rgb(HSLColor::new(shifted, s, l)).unwrap(), base));
        prop_assert!(close(hsl_to_rgb_alt(HSLColor::new(shifted, s, l)).unwrap(), base));
        let base = hsv_to_rgb(HSVColor::new(h, s, l)).unwrap();
        prop_assert!(close(hsv_to_rgb(HSVColor::new(shifted, s, l)).unwrap(), base));
        let base = hsi_to_rgb(HSIColor::new(h, s, l)).unwrap();
        prop_assert!(close(hsi_to_rgb(HSIColor::new(shifted, s, l)).unwrap(), base));
    }

    #[test]
    fn both_strategies_agree(h in hue(), s in percent(), x in percent()) {
        prop_assert!(close(
            hsl_to_rgb(HSLColor::new(h, s, x)).unwrap(),
            hsl_to_rgb_alt(HSLColor::new(h, s, x)).unwrap()
        ));
        prop_assert!(close(
            hsv_to_rgb(HSVColor::new(h, s, x)).unwrap(),
            hsv_to_rgb_alt(HSVColor::new(h, s, x)).unwrap()
        ));
    }

    #[test]
    fn out_of_range_is_rejected(over in 100.001_f64..1e6, h in hue()) {
        prop_assert!(hsl_to_rgb(HSLColor::new(h, over, 50.)).is_err());
        prop_assert!(hsv_to_rgb(HSVColor::new(h, 50., over)).is_err());
        prop_assert!(hsi_to_rgb(HSIColor::new(h, -over, 50.)).is_err());
        prop_assert!(cmyk_to_rgb(CMYKColor::new(0., 0., over, 0.)).is_err());
    }
}

//! A configured front end to every conversion in the crate. [`Converter`] holds the rounding
//! precision and the alpha unit so callers don't have to pass them on every call; it's an ordinary
//! `Copy` value, so two parts of a program that want different precisions each build their own
//! instead of fighting over a shared setting.

use cmyk;
use color::{AlphaUnit, Channels};
use colors::{CMYKColor, HSIColor, HSLColor, HSVColor, RGBColor};
use compose;
use cross;
use direct;
use error::{ConversionError, DomainError, HexParseError};
use generate;
use hex;
use rounding::Rounding;
use sector;

/// Every conversion, with its precision and alpha unit fixed at construction.
///
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// let converter = Converter::default();
/// let hsl = converter.hex_to_hsl("#66FFCC").unwrap();
/// assert_eq!(hsl.into_color(), HSLColor::new(160., 100., 70.));
///
/// // a coarser copy, for one call chain
/// let coarse = converter.with_precision(0);
/// let hsv = coarse.rgb_to_hsv(RGBColor::new(17, 69, 124));
/// assert_eq!(hsv.into_color(), HSVColor::new(211., 86., 49.));
/// assert_eq!(converter.precision(), 1);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Converter {
    rounding: Rounding,
    alpha_unit: AlphaUnit,
}

impl Converter {
    /// A converter with the given rounding, reading and writing alpha as a fraction.
    pub fn new(rounding: Rounding) -> Converter {
        Converter {
            rounding,
            alpha_unit: AlphaUnit::default(),
        }
    }

    /// A copy of this converter rounding HSL, HSV, HSI, and CMYK output to `precision` places.
    pub fn with_precision(self, precision: u32) -> Converter {
        Converter {
            rounding: Rounding {
                hsx: precision,
                ..self.rounding
            },
            ..self
        }
    }

    /// A copy of this converter rounding alpha decoded from hex to `precision` places.
    pub fn with_alpha_precision(self, precision: u32) -> Converter {
        Converter {
            rounding: Rounding {
                alpha: precision,
                ..self.rounding
            },
            ..self
        }
    }

    /// A copy of this converter using `unit` for alpha in the hex codec.
    pub fn with_alpha_unit(self, unit: AlphaUnit) -> Converter {
        Converter {
            alpha_unit: unit,
            ..self
        }
    }

    /// The full rounding configuration.
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Decimal places for HSL, HSV, HSI, and CMYK output.
    pub fn precision(&self) -> u32 {
        self.rounding.hsx
    }

    /// Decimal places for alpha decoded from hex.
    pub fn alpha_precision(&self) -> u32 {
        self.rounding.alpha
    }

    /// The scale alpha is read and written on by the hex codec.
    pub fn alpha_unit(&self) -> AlphaUnit {
        self.alpha_unit
    }

    /// See [`hex::hex_to_rgb`](../hex/fn.hex_to_rgb.html).
    pub fn hex_to_rgb(&self, hex: &str) -> Result<Channels<RGBColor>, HexParseError> {
        hex::hex_to_rgb(hex, self.rounding.alpha, self.alpha_unit)
    }

    /// See [`hex::rgb_to_hex`](../hex/fn.rgb_to_hex.html).
    pub fn rgb_to_hex<C: Into<Channels<RGBColor>>>(&self, rgb: C) -> Result<String, DomainError> {
        hex::rgb_to_hex(rgb, self.alpha_unit)
    }

    /// See [`direct::rgb_to_hsl`](../direct/fn.rgb_to_hsl.html).
    pub fn rgb_to_hsl<C: Into<Channels<RGBColor>>>(&self, rgb: C) -> Channels<HSLColor> {
        direct::rgb_to_hsl(rgb, self.rounding.hsx)
    }

    /// See [`direct::rgb_to_hsv`](../direct/fn.rgb_to_hsv.html).
    pub fn rgb_to_hsv<C: Into<Channels<RGBColor>>>(&self, rgb: C) -> Channels<HSVColor> {
        direct::rgb_to_hsv(rgb, self.rounding.hsx)
    }

    /// Same as [`rgb_to_hsv`](#method.rgb_to_hsv).
    pub fn rgb_to_hsb<C: Into<Channels<RGBColor>>>(&self, rgb: C) -> Channels<HSVColor> {
        self.rgb_to_hsv(rgb)
    }

    /// See [`sector::rgb_to_hsi`](../sector/fn.rgb_to_hsi.html).
    pub fn rgb_to_hsi<C: Into<Channels<RGBColor>>>(&self, rgb: C) -> Channels<HSIColor> {
        sector::rgb_to_hsi(rgb, self.rounding.hsx)
    }

    /// See [`cmyk::rgb_to_cmyk`](../cmyk/fn.rgb_to_cmyk.html).
    pub fn rgb_to_cmyk<C: Into<Channels<RGBColor>>>(&self, rgb: C) -> Channels<CMYKColor> {
        cmyk::rgb_to_cmyk(rgb, self.rounding.hsx)
    }

    /// See [`direct::hsl_to_rgb`](../direct/fn.hsl_to_rgb.html).
    pub fn hsl_to_rgb<C: Into<Channels<HSLColor>>>(
        &self,
        hsl: C,
    ) -> Result<Channels<RGBColor>, DomainError> {
        direct::hsl_to_rgb(hsl)
    }

    /// See [`direct::hsv_to_rgb`](../direct/fn.hsv_to_rgb.html).
    pub fn hsv_to_rgb<C: Into<Channels<HSVColor>>>(
        &self,
        hsv: C,
    ) -> Result<Channels<RGBColor>, DomainError> {
        direct::hsv_to_rgb(hsv)
    }

    /// Same as [`hsv_to_rgb`](#method.hsv_to_rgb).
    pub fn hsb_to_rgb<C: Into<Channels<HSVColor>>>(
        &self,
        hsb: C,
    ) -> Result<Channels<RGBColor>, DomainError> {
        self.hsv_to_rgb(hsb)
    }

    /// See [`sector::hsl_to_rgb_alt`](../sector/fn.hsl_to_rgb_alt.html).
    pub fn hsl_to_rgb_alt<C: Into<Channels<HSLColor>>>(
        &self,
        hsl: C,
    ) -> Result<Channels<RGBColor>, DomainError> {
        sector::hsl_to_rgb_alt(hsl)
    }

    /// See [`sector::hsv_to_rgb_alt`](../sector/fn.hsv_to_rgb_alt.html).
    pub fn hsv_to_rgb_alt<C: Into<Channels<HSVColor>>>(
        &self,
        hsv: C,
    ) -> Result<Channels<RGBColor>, DomainError> {
        sector::hsv_to_rgb_alt(hsv)
    }

    /// Same as [`hsv_to_rgb_alt`](#method.hsv_to_rgb_alt).
    pub fn hsb_to_rgb_alt<C: Into<Channels<HSVColor>>>(
        &self,
        hsb: C,
    ) -> Result<Channels<RGBColor>, DomainError> {
        self.hsv_to_rgb_alt(hsb)
    }

    /// See [`sector::hsi_to_rgb`](../sector/fn.hsi_to_rgb.html).
    pub fn hsi_to_rgb<C: Into<Channels<HSIColor>>>(
        &self,
        hsi: C,
    ) -> Result<Channels<RGBColor>, DomainError> {
        sector::hsi_to_rgb(hsi)
    }

    /// See [`cmyk::cmyk_to_rgb`](../cmyk/fn.cmyk_to_rgb.html).
    pub fn cmyk_to_rgb<C: Into<Channels<CMYKColor>>>(
        &self,
        cmyk: C,
    ) -> Result<Channels<RGBColor>, DomainError> {
        cmyk::cmyk_to_rgb(cmyk)
    }

    /// See [`cross::hsl_to_hsv`](../cross/fn.hsl_to_hsv.html).
    pub fn hsl_to_hsv<C: Into<Channels<HSLColor>>>(
        &self,
        hsl: C,
    ) -> Result<Channels<HSVColor>, DomainError> {
        cross::hsl_to_hsv(hsl, self.rounding.hsx)
    }

    /// Same as [`hsl_to_hsv`](#method.hsl_to_hsv).
    pub fn hsl_to_hsb<C: Into<Channels<HSLColor>>>(
        &self,
        hsl: C,
    ) -> Result<Channels<HSVColor>, DomainError> {
        self.hsl_to_hsv(hsl)
    }

    /// See [`cross::hsv_to_hsl`](../cross/fn.hsv_to_hsl.html).
    pub fn hsv_to_hsl<C: Into<Channels<HSVColor>>>(
        &self,
        hsv: C,
    ) -> Result<Channels<HSLColor>, DomainError> {
        cross::hsv_to_hsl(hsv, self.rounding.hsx)
    }

    /// Same as [`hsv_to_hsl`](#method.hsv_to_hsl).
    pub fn hsb_to_hsl<C: Into<Channels<HSVColor>>>(
        &self,
        hsb: C,
    ) -> Result<Channels<HSLColor>, DomainError> {
        self.hsv_to_hsl(hsb)
    }

    /// See [`compose::hex_to_hsl`](../compose/fn.hex_to_hsl.html).
    pub fn hex_to_hsl(&self, hex: &str) -> Result<Channels<HSLColor>, ConversionError> {
        compose::hex_to_hsl(hex, self.rounding, self.alpha_unit)
    }

    /// See [`compose::hex_to_hsv`](../compose/fn.hex_to_hsv.html).
    pub fn hex_to_hsv(&self, hex: &str) -> Result<Channels<HSVColor>, ConversionError> {
        compose::hex_to_hsv(hex, self.rounding, self.alpha_unit)
    }

    /// Same as [`hex_to_hsv`](#method.hex_to_hsv).
    pub fn hex_to_hsb(&self, hex: &str) -> Result<Channels<HSVColor>, ConversionError> {
        self.hex_to_hsv(hex)
    }

    /// See [`compose::hex_to_hsi`](../compose/fn.hex_to_hsi.html).
    pub fn hex_to_hsi(&self, hex: &str) -> Result<Channels<HSIColor>, ConversionError> {
        compose::hex_to_hsi(hex, self.rounding, self.alpha_unit)
    }

    /// See [`compose::hex_to_cmyk`](../compose/fn.hex_to_cmyk.html).
    pub fn hex_to_cmyk(&self, hex: &str) -> Result<Channels<CMYKColor>, ConversionError> {
        compose::hex_to_cmyk(hex, self.rounding, self.alpha_unit)
    }

    /// See [`compose::hsl_to_hex`](../compose/fn.hsl_to_hex.html).
    pub fn hsl_to_hex<C: Into<Channels<HSLColor>>>(
        &self,
        hsl: C,
    ) -> Result<String, ConversionError> {
        compose::hsl_to_hex(hsl, self.alpha_unit)
    }

    /// See [`compose::hsv_to_hex`](../compose/fn.hsv_to_hex.html).
    pub fn hsv_to_hex<C: Into<Channels<HSVColor>>>(
        &self,
        hsv: C,
    ) -> Result<String, ConversionError> {
        compose::hsv_to_hex(hsv, self.alpha_unit)
    }

    /// Same as [`hsv_to_hex`](#method.hsv_to_hex).
    pub fn hsb_to_hex<C: Into<Channels<HSVColor>>>(
        &self,
        hsb: C,
    ) -> Result<String, ConversionError> {
        self.hsv_to_hex(hsb)
    }

    /// See [`compose::hsi_to_hex`](../compose/fn.hsi_to_hex.html).
    pub fn hsi_to_hex<C: Into<Channels<HSIColor>>>(
        &self,
        hsi: C,
    ) -> Result<String, ConversionError> {
        compose::hsi_to_hex(hsi, self.alpha_unit)
    }

    /// See [`compose::cmyk_to_hex`](../compose/fn.cmyk_to_hex.html).
    pub fn cmyk_to_hex<C: Into<Channels<CMYKColor>>>(
        &self,
        cmyk: C,
    ) -> Result<String, ConversionError> {
        compose::cmyk_to_hex(cmyk, self.alpha_unit)
    }

    /// See [`generate::new_rgb`](../generate/fn.new_rgb.html).
    pub fn new_rgb(
        &self,
        red: Option<u8>,
        green: Option<u8>,
        blue: Option<u8>,
        alpha: Option<f64>,
    ) -> Channels<RGBColor> {
        generate::new_rgb(red, green, blue, alpha)
    }
}

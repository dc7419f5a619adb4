//! Hex compositions: decode a hex string and convert the result in one call, or convert to RGB and
//! encode. The HSL and HSV paths use the [`direct`](../direct/index.html) converters; HSI goes
//! through [`sector`](../sector/index.html), the only place it's implemented.
//!
//! # Example
//! ```
//! # use decolmor::prelude::*;
//! # use decolmor::compose::{hex_to_hsl, hsl_to_hex};
//! let hsla = hex_to_hsl("#66FFCC80", Rounding::default(), AlphaUnit::Fraction).unwrap();
//! assert_eq!(hsla, Channels::WithAlpha(HSLColor::new(160., 100., 70.), 0.502));
//! assert_eq!(hsl_to_hex(hsla, AlphaUnit::Fraction).unwrap(), "#66FFCC80");
//! ```

use cmyk::{cmyk_to_rgb, rgb_to_cmyk};
use color::{AlphaUnit, Channels};
use colors::{CMYKColor, HSIColor, HSLColor, HSVColor, RGBColor};
use direct::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};
use error::ConversionError;
use hex::{hex_to_rgb, rgb_to_hex};
use rounding::Rounding;
use sector::{hsi_to_rgb, rgb_to_hsi};

fn decode(
    hex: &str,
    rounding: Rounding,
    unit: AlphaUnit,
) -> Result<Channels<RGBColor>, ConversionError> {
    Ok(hex_to_rgb(hex, rounding.alpha, unit)?)
}

fn encode(rgb: Channels<RGBColor>, unit: AlphaUnit) -> Result<String, ConversionError> {
    Ok(rgb_to_hex(rgb, unit)?)
}

/// Decodes hex and converts to HSL.
/// # Errors
/// `ConversionError::Format` if the string isn't valid hex.
pub fn hex_to_hsl(
    hex: &str,
    rounding: Rounding,
    unit: AlphaUnit,
) -> Result<Channels<HSLColor>, ConversionError> {
    Ok(rgb_to_hsl(decode(hex, rounding, unit)?, rounding.hsx))
}

/// Decodes hex and converts to HSV.
/// # Errors
/// `ConversionError::Format` if the string isn't valid hex.
pub fn hex_to_hsv(
    hex: &str,
    rounding: Rounding,
    unit: AlphaUnit,
) -> Result<Channels<HSVColor>, ConversionError> {
    Ok(rgb_to_hsv(decode(hex, rounding, unit)?, rounding.hsx))
}

pub use self::hex_to_hsv as hex_to_hsb;

/// Decodes hex and converts to HSI.
/// # Errors
/// `ConversionError::Format` if the string isn't valid hex.
pub fn hex_to_hsi(
    hex: &str,
    rounding: Rounding,
    unit: AlphaUnit,
) -> Result<Channels<HSIColor>, ConversionError> {
    Ok(rgb_to_hsi(decode(hex, rounding, unit)?, rounding.hsx))
}

/// Decodes hex and converts to CMYK.
/// # Errors
/// `ConversionError::Format` if the string isn't valid hex.
pub fn hex_to_cmyk(
    hex: &str,
    rounding: Rounding,
    unit: AlphaUnit,
) -> Result<Channels<CMYKColor>, ConversionError> {
    Ok(rgb_to_cmyk(decode(hex, rounding, unit)?, rounding.hsx))
}

/// Converts HSL to RGB and encodes it as hex.
/// # Errors
/// `ConversionError::Domain` if a channel, or the alpha on the scale `unit` names, is out of range.
pub fn hsl_to_hex<C: Into<Channels<HSLColor>>>(
    hsl: C,
    unit: AlphaUnit,
) -> Result<String, ConversionError> {
    encode(hsl_to_rgb(hsl)?, unit)
}

/// Converts HSV to RGB and encodes it as hex.
/// # Errors
/// `ConversionError::Domain` if a channel, or the alpha on the scale `unit` names, is out of range.
pub fn hsv_to_hex<C: Into<Channels<HSVColor>>>(
    hsv: C,
    unit: AlphaUnit,
) -> Result<String, ConversionError> {
    encode(hsv_to_rgb(hsv)?, unit)
}

pub use self::hsv_to_hex as hsb_to_hex;

/// Converts HSI to RGB and encodes it as hex.
/// # Errors
/// `ConversionError::Domain` if a channel, or the alpha on the scale `unit` names, is out of range.
pub fn hsi_to_hex<C: Into<Channels<HSIColor>>>(
    hsi: C,
    unit: AlphaUnit,
) -> Result<String, ConversionError> {
    encode(hsi_to_rgb(hsi)?, unit)
}

/// Converts CMYK to RGB and encodes it as hex.
/// # Errors
/// `ConversionError::Domain` if a channel, or the alpha on the scale `unit` names, is out of range.
pub fn cmyk_to_hex<C: Into<Channels<CMYKColor>>>(
    cmyk: C,
    unit: AlphaUnit,
) -> Result<String, ConversionError> {
    encode(cmyk_to_rgb(cmyk)?, unit)
}

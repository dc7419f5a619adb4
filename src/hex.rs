//! The hex codec: turns strings like `#66FFCC`, `6fc`, or `#3366FF80` into channel bytes and back.
//! A leading `#` is optional. Three or four digits are shorthand, with each digit standing for a
//! doubled pair; six or eight digits are full byte pairs. The fourth byte, if any, is alpha.
//!
//! Decoding is strict: any other length, or any non-hex character, is an error rather than
//! something to truncate or pad.

use std::error::Error;
use std::fmt;

use regex::Regex;

use bound::{ChannelRange, DomainError};
use color::{AlphaUnit, Channels};
use colors::RGBColor;
use rounding::round_to;

lazy_static! {
    static ref HEX_DIGITS: Regex = Regex::new(r"^[0-9A-Fa-f]+$").expect("hex digit pattern");
}

/// A hex string that couldn't be decoded.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum HexParseError {
    /// The number of digits, after removing any leading `#`, was not 3, 4, 6, or 8.
    InvalidLength(usize),
    /// Something other than `0-9`, `a-f`, or `A-F` followed the optional `#`.
    InvalidCharacters,
}

impl fmt::Display for HexParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            HexParseError::InvalidLength(n) => {
                write!(f, "expected 3, 4, 6, or 8 hex digits, found {}", n)
            }
            HexParseError::InvalidCharacters => write!(f, "unexpected non-hex characters"),
        }
    }
}

impl Error for HexParseError {}

/// Decodes a hex string into its 3 or 4 channel bytes.
/// # Example
/// ```
/// # use decolmor::hex::decode;
/// assert_eq!(decode("#6FC").unwrap(), vec![102, 255, 204]);
/// assert_eq!(decode("66ffcc80").unwrap(), vec![102, 255, 204, 128]);
/// assert!(decode("#66FFC").is_err());
/// ```
pub fn decode(hex: &str) -> Result<Vec<u8>, HexParseError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    // count characters rather than bytes, so the error reports what the caller typed
    let len = digits.chars().count();
    if ![3, 4, 6, 8].contains(&len) {
        debug!("rejected hex {:?}: {} digits", hex, len);
        return Err(HexParseError::InvalidLength(len));
    }
    if !HEX_DIGITS.is_match(digits) {
        debug!("rejected hex {:?}: non-hex characters", hex);
        return Err(HexParseError::InvalidCharacters);
    }
    let pairs: Vec<String> = if len <= 4 {
        digits.chars().map(|c| c.to_string().repeat(2)).collect()
    } else {
        digits
            .as_bytes()
            .chunks(2)
            .map(|pair| String::from_utf8_lossy(pair).into_owned())
            .collect()
    };
    pairs
        .iter()
        .map(|pair| u8::from_str_radix(pair, 16).map_err(|_| HexParseError::InvalidCharacters))
        .collect()
}

/// Encodes channel bytes as uppercase hex with a leading `#`: six digits for three bytes, eight for
/// four.
/// # Example
/// ```
/// # use decolmor::hex::encode;
/// assert_eq!(encode(&[102, 255, 204]), "#66FFCC");
/// assert_eq!(encode(&[51, 102, 255, 255]), "#3366FFFF");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::from("#"), |s, b| s + &format!("{:02X}", b))
}

/// Decodes a hex string as an RGB color. An alpha byte becomes a fraction rounded to
/// `alpha_precision` places when `unit` is `Fraction`, or stays on the 0-255 scale when it's
/// `Byte`.
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// # use decolmor::hex::hex_to_rgb;
/// let rgba = hex_to_rgb("#36F8", 3, AlphaUnit::Fraction).unwrap();
/// assert_eq!(rgba, Channels::WithAlpha(RGBColor::new(51, 102, 255), 0.533));
/// let rgba = hex_to_rgb("#36F8", 3, AlphaUnit::Byte).unwrap();
/// assert_eq!(rgba.alpha(), Some(136.));
/// ```
pub fn hex_to_rgb(
    hex: &str,
    alpha_precision: u32,
    unit: AlphaUnit,
) -> Result<Channels<RGBColor>, HexParseError> {
    let bytes = decode(hex)?;
    let rgb = RGBColor::new(bytes[0], bytes[1], bytes[2]);
    Ok(match bytes.get(3) {
        None => Channels::Plain(rgb),
        Some(&a) => {
            let alpha = match unit {
                AlphaUnit::Fraction => round_to(f64::from(a) / 255., alpha_precision),
                AlphaUnit::Byte => f64::from(a),
            };
            Channels::WithAlpha(rgb, alpha)
        }
    })
}

/// Encodes an RGB color as hex. Alpha, if present, is read on the scale `unit` names and written
/// as a rounded byte.
/// # Errors
/// A `DomainError` if alpha is outside `[0, 1]` (as a fraction) or `[0, 255]` (as a byte).
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// # use decolmor::hex::rgb_to_hex;
/// let rgba = (RGBColor::new(51, 102, 255), 0.502);
/// assert_eq!(rgb_to_hex(rgba, AlphaUnit::Fraction).unwrap(), "#3366FF80");
/// assert_eq!(rgb_to_hex((RGBColor::new(51, 102, 255), 128.), AlphaUnit::Byte).unwrap(), "#3366FF80");
/// ```
pub fn rgb_to_hex<C: Into<Channels<RGBColor>>>(
    rgb: C,
    unit: AlphaUnit,
) -> Result<String, DomainError> {
    let rgb = rgb.into();
    let color = rgb.color();
    let mut bytes = vec![color.r, color.g, color.b];
    if let Some(alpha) = rgb.alpha() {
        bytes.push(alpha_to_byte(alpha, unit)?);
    }
    Ok(encode(&bytes))
}

fn alpha_to_byte(alpha: f64, unit: AlphaUnit) -> Result<u8, DomainError> {
    let (range, scale) = match unit {
        AlphaUnit::Fraction => (ChannelRange::fraction("alpha"), 255.),
        AlphaUnit::Byte => (
            ChannelRange {
                integral: false,
                ..ChannelRange::byte("alpha")
            },
            1.,
        ),
    };
    range.check(alpha)?;
    Ok((alpha * scale).round() as u8)
}

//! Random RGB colors, with any channel optionally pinned to a fixed value. Alpha is never random: it
//! is attached only when the caller supplies one.

use rand::distributions::{Distribution, Standard};
use rand::{self, Rng};

use color::Channels;
use colors::RGBColor;

impl Distribution<RGBColor> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RGBColor {
        RGBColor::new(rng.gen(), rng.gen(), rng.gen())
    }
}

/// A random color from the thread-local generator. Each channel that is `Some` is used as given,
/// and each `None` is drawn uniformly from 0 to 255.
/// # Example
/// ```
/// # use decolmor::prelude::*;
/// # use decolmor::generate::new_rgb;
/// let reddish = new_rgb(Some(255), None, None, Some(0.5));
/// assert_eq!(reddish.color().r, 255);
/// assert_eq!(reddish.alpha(), Some(0.5));
/// ```
pub fn new_rgb(
    red: Option<u8>,
    green: Option<u8>,
    blue: Option<u8>,
    alpha: Option<f64>,
) -> Channels<RGBColor> {
    new_rgb_with(&mut rand::thread_rng(), red, green, blue, alpha)
}

/// Like [`new_rgb`], drawing from the given generator. Use a seeded generator for reproducible
/// colors.
pub fn new_rgb_with<R: Rng + ?Sized>(
    rng: &mut R,
    red: Option<u8>,
    green: Option<u8>,
    blue: Option<u8>,
    alpha: Option<f64>,
) -> Channels<RGBColor> {
    let random: RGBColor = rng.gen();
    let rgb = RGBColor::new(
        red.unwrap_or(random.r),
        green.unwrap_or(random.g),
        blue.unwrap_or(random.b),
    );
    match alpha {
        Some(a) => Channels::WithAlpha(rgb, a),
        None => Channels::Plain(rgb),
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fixed_channels() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let c = new_rgb_with(&mut rng, Some(10), None, Some(30), None);
            assert_eq!(c.color().r, 10);
            assert_eq!(c.color().b, 30);
            assert_eq!(c.alpha(), None);
        }
        let fixed = new_rgb(Some(1), Some(2), Some(3), Some(0.25));
        assert_eq!(fixed, Channels::WithAlpha(RGBColor::new(1, 2, 3), 0.25));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let first = new_rgb_with(&mut StdRng::seed_from_u64(42), None, None, None, None);
        let second = new_rgb_with(&mut StdRng::seed_from_u64(42), None, None, None, None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_channels_vary() {
        let mut rng = StdRng::seed_from_u64(2024);
        let reds: Vec<u8> = (0..100)
            .map(|_| new_rgb_with(&mut rng, None, Some(0), Some(0), None).color().r)
            .collect();
        // 100 uniform draws from 256 values all landing on one is vanishingly unlikely
        assert!(reds.iter().any(|&r| r != reds[0]));
    }
}

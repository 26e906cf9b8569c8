#![forbid(unsafe_code)]

//! # Hexhue
//!
//! Conversions between hex color codes, legacy color descriptors and an RGBA
//! color value.
//!
//! ## Overview
//!
//! - **Hex parsing**: `rgb`, `rgba`, `rrggbb` and `rrggbbaa` codes, with or
//!   without a `#` or `0x` prefix, in any case
//! - **Hex formatting**: always the canonical 8-digit `#RRGGBBAA` form
//! - **Legacy descriptors**: `UIDeviceRGBColorSpace r g b a` and
//!   `UIDeviceWhiteColorSpace w a` strings, parsed without ever failing
//! - **Text helpers**: fail-safe trimming and number parsing on `str`
//!
//! ## Core Components
//!
//! - [`Color`]: immutable RGBA value with normalized `f32` channels
//! - [`HexParser`]: hex parser configuration ([`Extraction`] mode)
//! - [`TextExt`]: text normalization helpers
//! - [`HexhueError`]: the single `InvalidFormat` parse failure
//!
//! ## Example Usage
//!
//! ```rust
//! use hexhue::Color;
//!
//! fn main() -> hexhue::HexhueResult<()> {
//!     let red = Color::from_hex("#F00")?;
//!     assert_eq!(red.to_hex(), "#FF0000FF");
//!
//!     let gray = Color::from_descriptor("UIDeviceWhiteColorSpace 0.5 1");
//!     assert_eq!(gray.to_hex(), "#808080FF");
//!
//!     // Unknown descriptors fall back to transparent black.
//!     assert_eq!(Color::from_descriptor("garbage"), Color::CLEAR);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Hex parsing is strict and returns [`HexhueResult`]; any malformed input is
//! [`HexhueError::InvalidFormat`], a `miette` diagnostic pointing at the
//! offending text. Descriptor parsing is total: failures are reported as
//! `tracing` warnings and replaced by [`Color::CLEAR`].

/// Re-exports of core components
pub use colors::{Color, Extraction, HexParser};
pub use error::{HexhueError, HexhueResult};
pub use text::TextExt;

/// Color codec
pub mod colors;
/// Error types and handling
pub mod error;
/// Text normalization helpers
pub mod text;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;
    use rayon::prelude::*;

    const SAMPLES: usize = 2000;

    fn random_digits(rng: &mut impl Rng, len: usize) -> String {
        const DIGITS: &[u8] = b"0123456789abcdefABCDEF";
        (0..len)
            .map(|_| DIGITS[rng.gen_range(0..DIGITS.len())] as char)
            .collect()
    }

    fn random_prefix(rng: &mut impl Rng) -> &'static str {
        ["", "#", "0x", "0X"][rng.gen_range(0..4)]
    }

    #[test]
    fn test_six_digit_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..SAMPLES {
            let digits = random_digits(&mut rng, 6);
            let input = format!("{}{}", random_prefix(&mut rng), digits);
            let color = Color::from_hex(&input).unwrap();

            assert_eq!(
                color.with_alpha(1.0).to_hex(),
                format!("#{}FF", digits.to_uppercase())
            );
        }
    }

    #[test]
    fn test_eight_digit_round_trip_is_idempotent() {
        let mut rng = rand::thread_rng();
        for _ in 0..SAMPLES {
            let digits = random_digits(&mut rng, 8);
            let input = format!("{}{}", random_prefix(&mut rng), digits);

            let once = Color::from_hex(&input).unwrap().to_hex();
            let twice = Color::from_hex(&once).unwrap().to_hex();
            assert_eq!(once, twice);
            assert_eq!(once, format!("#{}", digits.to_uppercase()));
        }
    }

    #[test]
    fn test_shorthand_matches_expanded() {
        let mut rng = rand::thread_rng();
        for len in [3, 4] {
            for _ in 0..SAMPLES / 2 {
                let short = random_digits(&mut rng, len);
                let long: String = short.chars().flat_map(|c| [c, c]).collect();
                assert_eq!(
                    Color::from_hex(&short).unwrap(),
                    Color::from_hex(&long).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_prefix_insensitivity() {
        let hash = Color::from_hex("#FF0000FF").unwrap();
        let zero_x = Color::from_hex("0xFF0000FF").unwrap();
        let bare = Color::from_hex("ff0000ff").unwrap();

        assert_eq!(hash, zero_x);
        assert_eq!(zero_x, bare);
        assert_eq!(hash.rgba_components(), (1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_invalid_inputs() {
        for input in ["", "#12", "#1234567"] {
            assert!(Color::from_hex(input).unwrap_err().is_invalid_format());
        }
    }

    #[test]
    fn test_descriptor_examples() {
        assert_eq!(
            Color::from_descriptor("UIDeviceRGBColorSpace 1 0 0 1"),
            Color::rgba(1.0, 0.0, 0.0, 1.0)
        );
        assert_eq!(
            Color::from_descriptor("UIDeviceWhiteColorSpace 0.5 1"),
            Color::rgba(0.5, 0.5, 0.5, 1.0)
        );
        assert_eq!(
            Color::from_descriptor("garbage"),
            Color::rgba(0.0, 0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_hex_through_descriptor() {
        let mut rng = rand::thread_rng();
        for _ in 0..SAMPLES {
            let hex = format!("#{}", random_digits(&mut rng, 8).to_uppercase());
            let color = Color::from_hex(&hex).unwrap();
            let restored = Color::from_descriptor(&color.to_descriptor());
            assert_eq!(restored.to_hex(), hex);
        }
    }

    #[test]
    fn test_concurrent_conversions() {
        let results: Vec<(String, String)> = (0..=0xFFFFu32)
            .into_par_iter()
            .map(|n| {
                let hex = format!("#{:08X}", n.wrapping_mul(0x9E37_79B9));
                let color = Color::from_hex(&hex).unwrap();
                (hex, color.to_hex())
            })
            .collect();

        for (input, output) in results {
            assert_eq!(input, output);
        }
    }
}

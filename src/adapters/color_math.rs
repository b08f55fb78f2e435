//! Color parsing and harmony helpers.
//!
//! Parsing accepts anything CSS understands (`#rgb`, `#rrggbb`, named colors,
//! `rgb()`, `hsl()`, ...) via `csscolorparser`. Hue and lightness operations go
//! through `palette`'s HSL model. Every result is an opaque 8-bit sRGB color.

use crate::domain::model::Rgb8;
use crate::utils::error::{ChartError, Result};
use palette::{FromColor, Hsl, RgbHue, Srgb};
use rand::Rng;

const ANALOGOUS_RESULTS: usize = 6;
const ANALOGOUS_SLICES: f32 = 30.0;

pub fn parse(input: &str) -> Result<Rgb8> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ChartError::InvalidColor {
            input: input.to_string(),
        });
    }

    let color = csscolorparser::parse(trimmed).map_err(|e| {
        tracing::trace!("Rejected color {:?}: {}", input, e);
        ChartError::InvalidColor {
            input: input.to_string(),
        }
    })?;

    let [red, green, blue, _alpha] = color.to_rgba8();
    Ok(Srgb::new(red, green, blue))
}

pub fn is_valid(input: &str) -> bool {
    parse(input).is_ok()
}

/// Lowercase `#rrggbb`.
pub fn to_hex(color: Rgb8) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

fn to_hsl(color: Rgb8) -> Hsl {
    Hsl::from_color(color.into_format::<f32>())
}

fn from_hsl(hsl: Hsl) -> Rgb8 {
    Srgb::<f32>::from_color(hsl).into_format::<u8>()
}

fn with_hue(hsl: Hsl, degrees: f32) -> Rgb8 {
    let mut shifted = hsl;
    shifted.hue = RgbHue::from_degrees(degrees);
    from_hsl(shifted)
}

/// HSL hue in degrees, `0.0..360.0`. Achromatic colors report 0.
pub fn hue(color: Rgb8) -> f32 {
    to_hsl(color).hue.into_positive_degrees()
}

/// Adds `255 * amount / 100` to every RGB channel.
pub fn brighten(color: Rgb8, amount: f32) -> Rgb8 {
    let delta = (255.0 * amount / 100.0).round() as i16;
    let channel = |value: u8| (i16::from(value) + delta).clamp(0, 255) as u8;
    Srgb::new(channel(color.red), channel(color.green), channel(color.blue))
}

/// Lowers HSL lightness by `amount` percentage points.
pub fn darken(color: Rgb8, amount: f32) -> Rgb8 {
    let mut hsl = to_hsl(color);
    hsl.lightness = (hsl.lightness - amount / 100.0).clamp(0.0, 1.0);
    from_hsl(hsl)
}

pub fn spin(color: Rgb8, degrees: f32) -> Rgb8 {
    let hsl = to_hsl(color);
    with_hue(hsl, hsl.hue.into_positive_degrees() + degrees)
}

pub fn complement(color: Rgb8) -> Rgb8 {
    spin(color, 180.0)
}

/// The color followed by five neighbours 12 degrees apart, centred on it.
pub fn analogous(color: Rgb8) -> Vec<Rgb8> {
    let hsl = to_hsl(color);
    let step = 360.0 / ANALOGOUS_SLICES;
    let mut degrees = hsl.hue.into_positive_degrees() - step * (ANALOGOUS_RESULTS / 2) as f32;

    let mut colors = Vec::with_capacity(ANALOGOUS_RESULTS);
    colors.push(color);
    for _ in 1..ANALOGOUS_RESULTS {
        degrees += step;
        colors.push(with_hue(hsl, degrees));
    }
    colors
}

fn polyad(color: Rgb8, count: usize) -> Vec<Rgb8> {
    let step = 360.0 / count as f32;
    std::iter::once(color)
        .chain((1..count).map(|i| spin(color, step * i as f32)))
        .collect()
}

pub fn triad(color: Rgb8) -> Vec<Rgb8> {
    polyad(color, 3)
}

pub fn tetrad(color: Rgb8) -> Vec<Rgb8> {
    polyad(color, 4)
}

pub fn random() -> Rgb8 {
    let mut rng = rand::thread_rng();
    Srgb::new(rng.gen(), rng.gen(), rng.gen())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(input: &str) -> Rgb8 {
        parse(input).unwrap()
    }

    #[test]
    fn test_parse_accepts_css_forms() {
        assert_eq!(to_hex(hex("#FF0000")), "#ff0000");
        assert_eq!(to_hex(hex("red")), "#ff0000");
        assert_eq!(to_hex(hex("#0f0")), "#00ff00");
        assert_eq!(to_hex(hex("rgb(0, 0, 255)")), "#0000ff");
        assert_eq!(to_hex(hex("  #808080 ")), "#808080");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(!is_valid(""));
        assert!(!is_valid("   "));
        assert!(!is_valid("not-a-color"));
        assert!(!is_valid("#12345z"));
    }

    #[test]
    fn test_brighten_and_darken_gray() {
        let gray = hex("#808080");
        assert_eq!(to_hex(brighten(gray, 20.0)), "#b3b3b3");
        assert_eq!(to_hex(brighten(gray, 40.0)), "#e6e6e6");
        assert_eq!(to_hex(darken(gray, 20.0)), "#4d4d4d");
        assert_eq!(to_hex(darken(gray, 40.0)), "#1a1a1a");
    }

    #[test]
    fn test_brighten_and_darken_clamp() {
        assert_eq!(to_hex(brighten(hex("#ffffff"), 40.0)), "#ffffff");
        assert_eq!(to_hex(darken(hex("#000000"), 40.0)), "#000000");
    }

    #[test]
    fn test_complement_of_primaries() {
        assert_eq!(to_hex(complement(hex("#ff0000"))), "#00ffff");
        assert_eq!(to_hex(complement(hex("#0000ff"))), "#ffff00");
    }

    #[test]
    fn test_harmony_sets() {
        let red = hex("#ff0000");

        let analogous = analogous(red);
        assert_eq!(analogous.len(), 6);
        assert_eq!(analogous[0], red);
        assert_eq!(analogous[3], red);

        let triad = triad(red);
        assert_eq!(
            triad.iter().map(|c| to_hex(*c)).collect::<Vec<_>>(),
            vec!["#ff0000", "#00ff00", "#0000ff"]
        );

        let tetrad = tetrad(red);
        assert_eq!(tetrad.len(), 4);
        assert_eq!(to_hex(tetrad[2]), "#00ffff");
    }

    #[test]
    fn test_hue() {
        assert!(hue(hex("#808080")).abs() < f32::EPSILON);
        assert!((hue(hex("#00ff00")) - 120.0).abs() < 0.01);
        assert!((hue(hex("#0000ff")) - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_random_is_hex() {
        let color = to_hex(random());
        assert_eq!(color.len(), 7);
        assert!(is_valid(&color));
    }
}

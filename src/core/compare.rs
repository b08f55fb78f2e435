use crate::adapters::{color_math, contrast};
use crate::core::{ComparisonResult, Result, Rgb8, WcagRating};
use crate::utils::validation::validate_required_field;

pub fn parse_pair(color_a: Option<&str>, color_b: Option<&str>) -> Result<(Rgb8, Rgb8)> {
    let a = color_math::parse(validate_required_field("colorA", &color_a)?)?;
    let b = color_math::parse(validate_required_field("colorB", &color_b)?)?;
    Ok((a, b))
}

pub fn compare(a: Rgb8, b: Rgb8) -> ComparisonResult {
    let contrast_ratio = contrast::ratio(a, b);
    let hue_difference = (color_math::hue(a) - color_math::hue(b)).abs();

    ComparisonResult {
        contrast_ratio,
        hue_difference,
        rating: WcagRating::from_ratio(contrast_ratio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(a: &str, b: &str) -> ComparisonResult {
        let (a, b) = parse_pair(Some(a), Some(b)).unwrap();
        compare(a, b)
    }

    #[test]
    fn test_self_comparison() {
        for color in ["#000000", "#ffffff", "#3366cc", "#ff9933", "#a1b2c3"] {
            let result = run(color, color);
            assert_eq!(result.ratio_label(), "1.00:1");
            assert_eq!(result.hue_difference_label(), "0.0");
            assert_eq!(result.rating, WcagRating::Fail);
        }
    }

    #[test]
    fn test_black_and_white() {
        let result = run("#000000", "#ffffff");
        assert_eq!(result.ratio_label(), "21.00:1");
        assert_eq!(result.rating, WcagRating::Aaa);
    }

    #[test]
    fn test_hue_difference() {
        let result = run("#ff0000", "#0000ff");
        assert_eq!(result.hue_difference_label(), "240.0");
    }

    #[test]
    fn test_parse_pair_requires_both() {
        assert!(parse_pair(Some("#fff"), None).is_err());
        assert!(parse_pair(None, Some("#fff")).is_err());
        assert!(parse_pair(Some("#fff"), Some("bogus")).is_err());
    }
}

use crate::domain::model::Rgb8;
use palette::color_difference::Wcag21RelativeContrast;

/// WCAG 2.1 contrast ratio, `1.0..=21.0`.
pub fn ratio(a: Rgb8, b: Rgb8) -> f32 {
    a.into_format::<f32>()
        .relative_contrast(b.into_format::<f32>())
}

use crate::adapters::color_math;
use crate::core::{ExportFormat, ExportOutput, ExportRequest, Result, Rgb8, SwatchEncoder};
use crate::utils::error::ChartError;
use crate::utils::validation::{validate_non_empty_list, validate_required_field};
use std::sync::Arc;

/// Upper bound on swatches in one PNG export; 100 px swatches make this a
/// 102400 x 100 RGBA raster (about 41 MB).
pub const MAX_PNG_SWATCHES: usize = 1024;

impl ExportRequest {
    /// The color list is checked before the format.
    pub fn parse(format: Option<&str>, colors: Option<Vec<String>>) -> Result<Self> {
        let colors = validate_required_field("colors", &colors)?;
        validate_non_empty_list("colors", colors)?;
        let format = validate_required_field("format", &format)?.parse::<ExportFormat>()?;

        if format == ExportFormat::Png && colors.len() > MAX_PNG_SWATCHES {
            return Err(ChartError::InvalidInput {
                field: "colors".to_string(),
                reason: format!(
                    "PNG export supports at most {} colors, got {}",
                    MAX_PNG_SWATCHES,
                    colors.len()
                ),
            });
        }

        Ok(Self {
            format,
            colors: colors.clone(),
        })
    }
}

/// `:root { --color-N: <color>; ... }`, N starting at 1.
pub fn render_css(colors: &[String]) -> String {
    let declarations = colors
        .iter()
        .enumerate()
        .map(|(i, color)| format!("--color-{}: {};", i + 1, color))
        .collect::<Vec<_>>()
        .join("\n");
    format!(":root {{\n{}\n}}", declarations)
}

pub async fn export(request: ExportRequest, encoder: Arc<dyn SwatchEncoder>) -> Result<ExportOutput> {
    match request.format {
        ExportFormat::Json => Ok(ExportOutput::Json(request.colors)),
        ExportFormat::Css => Ok(ExportOutput::Css(render_css(&request.colors))),
        ExportFormat::Png => {
            let colors = request
                .colors
                .iter()
                .map(|color| color_math::parse(color))
                .collect::<Result<Vec<Rgb8>>>()?;

            // 編碼屬於 CPU 密集工作，交給 blocking 執行緒池
            let bytes = tokio::task::spawn_blocking(move || encoder.encode(&colors)).await??;
            tracing::debug!("Encoded palette PNG ({} bytes)", bytes.len());
            Ok(ExportOutput::Png(bytes))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::PngSwatchEncoder;

    fn colors(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_render_css() {
        let css = render_css(&colors(&["#ff0000", "blue"]));
        assert_eq!(css, ":root {\n--color-1: #ff0000;\n--color-2: blue;\n}");
    }

    #[test]
    fn test_parse_request() {
        let request = ExportRequest::parse(Some("CSS"), Some(colors(&["#fff"]))).unwrap();
        assert_eq!(request.format, ExportFormat::Css);

        assert!(matches!(
            ExportRequest::parse(Some("json"), Some(vec![])),
            Err(ChartError::InvalidInput { .. })
        ));
        assert!(matches!(
            ExportRequest::parse(Some("json"), None),
            Err(ChartError::MissingField { .. })
        ));
        assert!(matches!(
            ExportRequest::parse(Some("gif"), Some(colors(&["#fff"]))),
            Err(ChartError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            ExportRequest::parse(None, Some(colors(&["#fff"]))),
            Err(ChartError::MissingField { .. })
        ));
    }

    #[test]
    fn test_png_swatch_limit() {
        let at_limit = vec!["#000".to_string(); MAX_PNG_SWATCHES];
        assert!(ExportRequest::parse(Some("png"), Some(at_limit)).is_ok());

        let over_limit = vec!["#000".to_string(); MAX_PNG_SWATCHES + 1];
        assert!(matches!(
            ExportRequest::parse(Some("png"), Some(over_limit.clone())),
            Err(ChartError::InvalidInput { .. })
        ));

        // 只有 PNG 需要配置像素緩衝區
        assert!(ExportRequest::parse(Some("css"), Some(over_limit)).is_ok());
    }

    #[tokio::test]
    async fn test_json_echoes_input() {
        let input = colors(&["#FF0000", "rebeccapurple", "#abc"]);
        let request = ExportRequest::parse(Some("json"), Some(input.clone())).unwrap();
        let output = export(request, Arc::new(PngSwatchEncoder::default()))
            .await
            .unwrap();
        assert_eq!(output, ExportOutput::Json(input));
    }

    #[tokio::test]
    async fn test_png_rejects_unparseable_colors() {
        let request = ExportRequest::parse(Some("png"), Some(colors(&["#fff", "nope"]))).unwrap();
        let result = export(request, Arc::new(PngSwatchEncoder::default())).await;
        assert!(matches!(result, Err(ChartError::InvalidColor { .. })));
    }
}

use crate::utils::error::{ChartError, Result};
use palette::Srgb;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An opaque 8-bit sRGB color. Alpha is dropped when parsing.
pub type Rgb8 = Srgb<u8>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub hex: &'static str,
    pub value: u8,
    pub chroma: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HueGroup {
    pub hue: &'static str,
    pub name: &'static str,
    pub colors: &'static [Swatch],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmonyType {
    Monochromatic,
    Analogous,
    Complementary,
    Triadic,
    Tetradic,
    Random,
}

impl FromStr for HarmonyType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "monochromatic" => Ok(HarmonyType::Monochromatic),
            "analogous" => Ok(HarmonyType::Analogous),
            "complementary" => Ok(HarmonyType::Complementary),
            "triadic" => Ok(HarmonyType::Triadic),
            "tetradic" => Ok(HarmonyType::Tetradic),
            "random" => Ok(HarmonyType::Random),
            _ => Err(ChartError::UnsupportedHarmony {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteRequest {
    pub harmony: HarmonyType,
    pub base: Rgb8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WcagRating {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AA (Large Text)")]
    AaLargeText,
    Fail,
}

impl WcagRating {
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio >= 7.0 {
            WcagRating::Aaa
        } else if ratio >= 4.5 {
            WcagRating::Aa
        } else if ratio >= 3.0 {
            WcagRating::AaLargeText
        } else {
            WcagRating::Fail
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonResult {
    pub contrast_ratio: f32,
    /// Absolute HSL hue difference in degrees.
    pub hue_difference: f32,
    pub rating: WcagRating,
}

impl ComparisonResult {
    pub fn ratio_label(&self) -> String {
        format!("{:.2}:1", self.contrast_ratio)
    }

    pub fn hue_difference_label(&self) -> String {
        format!("{:.1}", self.hue_difference)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationType {
    Protanomaly,
    Protanopia,
    Deuteranomaly,
    Deuteranopia,
    Tritanomaly,
    Tritanopia,
    Achromatomaly,
    Achromatopsia,
}

impl FromStr for SimulationType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        // 名稱需完全相符（小寫），不做大小寫轉換
        match s {
            "protanomaly" => Ok(SimulationType::Protanomaly),
            "protanopia" => Ok(SimulationType::Protanopia),
            "deuteranomaly" => Ok(SimulationType::Deuteranomaly),
            "deuteranopia" => Ok(SimulationType::Deuteranopia),
            "tritanomaly" => Ok(SimulationType::Tritanomaly),
            "tritanopia" => Ok(SimulationType::Tritanopia),
            "achromatomaly" => Ok(SimulationType::Achromatomaly),
            "achromatopsia" => Ok(SimulationType::Achromatopsia),
            _ => Err(ChartError::UnsupportedSimulation {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Css,
    Png,
}

impl FromStr for ExportFormat {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "css" => Ok(ExportFormat::Css),
            "png" => Ok(ExportFormat::Png),
            _ => Err(ChartError::UnsupportedFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Json => "json",
            ExportFormat::Css => "css",
            ExportFormat::Png => "png",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutput {
    Json(Vec<String>),
    Css(String),
    Png(Vec<u8>),
}

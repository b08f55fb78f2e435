use serde::{Deserialize, Serialize};
use serde_json::Value;

// Request bodies keep every field optional so a missing field becomes a
// per-endpoint client error instead of a generic rejection.

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteBody {
    pub r#type: Option<String>,
    pub base_color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareBody {
    pub color_a: Option<String>,
    pub color_b: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulateBody {
    pub colors: Option<Vec<Value>>,
    pub r#type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportBody {
    pub format: Option<String>,
    pub colors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaletteResponse {
    pub palette: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    pub contrast_ratio: String,
    pub color_difference: String,
    pub wcag_rating: crate::domain::model::WcagRating,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulateResponse {
    pub simulated: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportJsonResponse {
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

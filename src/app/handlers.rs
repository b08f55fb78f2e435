use crate::app::dto::{
    CompareBody, CompareResponse, ExportBody, ExportJsonResponse, PaletteBody, PaletteResponse,
    SimulateBody, SimulateResponse,
};
use crate::app::error::ApiError;
use crate::app::router::AppState;
use crate::core::{compare, export, palette, simulate, ExportOutput, ExportRequest, PaletteRequest};
use crate::domain::model::HueGroup;
use crate::domain::munsell::MUNSELL_DATA;
use crate::utils::error::ChartError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

const PALETTE_INVALID: &str = "Invalid type or base color";
const PALETTE_UNSUPPORTED: &str = "Unsupported palette type";
const PALETTE_FAILED: &str = "Failed to generate palette";
const COMPARE_INVALID: &str = "Invalid colors";
const SIMULATE_INVALID: &str =
    "Invalid colors array or type (use: deuteranomaly, protanomaly, tritanomaly, etc.)";
const EXPORT_INVALID: &str = "Invalid colors array";
const EXPORT_UNSUPPORTED: &str = "Unsupported format (json, css, png)";
const EXPORT_FAILED: &str = "Failed to export";

const PNG_DISPOSITION: &str = "attachment; filename=palette.png";

fn rejected(rejection: JsonRejection, message: &'static str) -> ApiError {
    tracing::debug!("Rejected request body: {}", rejection);
    ApiError::bad_request(message)
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn munsell_data() -> Json<&'static [HueGroup]> {
    Json(MUNSELL_DATA)
}

pub async fn generate_palette(
    payload: Result<Json<PaletteBody>, JsonRejection>,
) -> Result<Json<PaletteResponse>, ApiError> {
    palette_response(payload)
}

/// Alias of `generate_palette`; shares the same validation and response path.
pub async fn color_harmony(
    payload: Result<Json<PaletteBody>, JsonRejection>,
) -> Result<Json<PaletteResponse>, ApiError> {
    palette_response(payload)
}

fn palette_response(
    payload: Result<Json<PaletteBody>, JsonRejection>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| rejected(rejection, PALETTE_INVALID))?;

    let request = PaletteRequest::parse(body.r#type.as_deref(), body.base_color.as_deref())
        .map_err(|err| match err {
            ChartError::UnsupportedHarmony { .. } => ApiError::bad_request(PALETTE_UNSUPPORTED),
            other => ApiError::from_chart_error(&other, PALETTE_INVALID, PALETTE_FAILED),
        })?;

    Ok(Json(PaletteResponse {
        palette: palette::generate(&request),
    }))
}

pub async fn compare_colors(
    payload: Result<Json<CompareBody>, JsonRejection>,
) -> Result<Json<CompareResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| rejected(rejection, COMPARE_INVALID))?;

    let (a, b) = compare::parse_pair(body.color_a.as_deref(), body.color_b.as_deref())
        .map_err(|_| ApiError::bad_request(COMPARE_INVALID))?;
    let result = compare::compare(a, b);

    Ok(Json(CompareResponse {
        contrast_ratio: result.ratio_label(),
        color_difference: result.hue_difference_label(),
        wcag_rating: result.rating,
    }))
}

pub async fn simulate_color_blind(
    payload: Result<Json<SimulateBody>, JsonRejection>,
) -> Result<Json<SimulateResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| rejected(rejection, SIMULATE_INVALID))?;

    let colors = body
        .colors
        .ok_or_else(|| ApiError::bad_request(SIMULATE_INVALID))?;
    let kind = simulate::parse_kind(body.r#type.as_deref())
        .map_err(|_| ApiError::bad_request(SIMULATE_INVALID))?;

    Ok(Json(SimulateResponse {
        simulated: simulate::simulate_all(&colors, kind),
    }))
}

pub async fn export_colors(
    State(state): State<AppState>,
    payload: Result<Json<ExportBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload.map_err(|rejection| rejected(rejection, EXPORT_INVALID))?;

    let request = ExportRequest::parse(body.format.as_deref(), body.colors)
        .map_err(export_failure)?;
    tracing::debug!(
        "Exporting {} colors as {}",
        request.colors.len(),
        request.format
    );

    let output = export::export(request, state.encoder())
        .await
        .map_err(export_failure)?;

    let response = match output {
        ExportOutput::Json(colors) => Json(ExportJsonResponse { colors }).into_response(),
        ExportOutput::Css(css) => ([(header::CONTENT_TYPE, "text/css")], css).into_response(),
        ExportOutput::Png(bytes) => (
            [
                (header::CONTENT_TYPE, "image/png"),
                (header::CONTENT_DISPOSITION, PNG_DISPOSITION),
            ],
            bytes,
        )
            .into_response(),
    };
    Ok(response)
}

fn export_failure(err: ChartError) -> ApiError {
    match &err {
        ChartError::UnsupportedFormat { .. } => ApiError::bad_request(EXPORT_UNSUPPORTED),
        ChartError::MissingField { field } if field == "format" => {
            ApiError::bad_request(EXPORT_UNSUPPORTED)
        }
        _ => ApiError::from_chart_error(&err, EXPORT_INVALID, EXPORT_FAILED),
    }
}

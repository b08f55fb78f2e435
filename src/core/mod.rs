pub mod compare;
pub mod export;
pub mod palette;
pub mod simulate;

pub use crate::domain::model::{
    ComparisonResult, ExportFormat, ExportOutput, ExportRequest, HarmonyType, PaletteRequest,
    Rgb8, SimulationType, WcagRating,
};
pub use crate::domain::ports::SwatchEncoder;
pub use crate::utils::error::Result;

use crate::domain::model::Rgb8;
use crate::utils::error::Result;

/// Rasterizes a row of flat-color swatches into an encoded image.
pub trait SwatchEncoder: Send + Sync {
    fn encode(&self, colors: &[Rgb8]) -> Result<Vec<u8>>;
}

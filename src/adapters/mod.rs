// Adapters layer: thin wrappers around the color crates and the PNG codec.

pub mod color_math;
pub mod contrast;
pub mod png_encoder;
pub mod vision;

pub use png_encoder::PngSwatchEncoder;

use crate::domain::model::Rgb8;
use crate::domain::ports::SwatchEncoder;
use crate::utils::error::{ChartError, Result};

pub const DEFAULT_SWATCH_SIZE: u32 = 100;

/// Largest RGBA raster `encode` will allocate.
pub const MAX_RASTER_BYTES: u64 = 64 * 1024 * 1024;

/// Lays swatches out left to right as `size` × `size` squares in an RGBA PNG.
#[derive(Debug, Clone, Copy)]
pub struct PngSwatchEncoder {
    swatch_size: u32,
}

impl PngSwatchEncoder {
    pub fn new(swatch_size: u32) -> Self {
        Self { swatch_size }
    }

    /// Row-major RGBA8 pixels, alpha always 255.
    pub fn rasterize(&self, colors: &[Rgb8]) -> Vec<u8> {
        let size = self.swatch_size as usize;
        let width = size * colors.len();

        let mut row = Vec::with_capacity(width * 4);
        for color in colors {
            for _ in 0..size {
                row.extend_from_slice(&[color.red, color.green, color.blue, 255]);
            }
        }

        row.repeat(size)
    }
}

impl Default for PngSwatchEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_SWATCH_SIZE)
    }
}

impl SwatchEncoder for PngSwatchEncoder {
    fn encode(&self, colors: &[Rgb8]) -> Result<Vec<u8>> {
        let width = u32::try_from(colors.len())
            .ok()
            .and_then(|count| count.checked_mul(self.swatch_size))
            .filter(|width| *width > 0)
            .ok_or_else(|| ChartError::InvalidInput {
                field: "colors".to_string(),
                reason: format!("cannot lay out {} swatches", colors.len()),
            })?;
        let height = self.swatch_size;

        let raster_bytes = u64::from(width) * u64::from(height) * 4;
        if raster_bytes > MAX_RASTER_BYTES {
            return Err(ChartError::InvalidInput {
                field: "colors".to_string(),
                reason: format!(
                    "{}x{} raster needs {} bytes, limit is {}",
                    width, height, raster_bytes, MAX_RASTER_BYTES
                ),
            });
        }

        let pixels = self.rasterize(colors);
        tracing::debug!(
            "Encoding {}x{} PNG for {} swatches",
            width,
            height,
            colors.len()
        );

        let mut buffer = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buffer, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_compression(png::Compression::default());
            encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&pixels)?;
            writer.finish()?;
        }

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    fn ihdr_dimensions(bytes: &[u8]) -> (u32, u32) {
        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        (width, height)
    }

    #[test]
    fn test_rasterize_layout() {
        let encoder = PngSwatchEncoder::new(2);
        let colors = [Srgb::new(255, 0, 0), Srgb::new(0, 0, 255)];
        let pixels = encoder.rasterize(&colors);

        // 4x2 像素，每像素 4 bytes
        assert_eq!(pixels.len(), 4 * 2 * 4);
        let pixel = |x: usize, y: usize| {
            let i = (y * 4 + x) * 4;
            [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
        };
        assert_eq!(pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(pixel(1, 1), [255, 0, 0, 255]);
        assert_eq!(pixel(2, 0), [0, 0, 255, 255]);
        assert_eq!(pixel(3, 1), [0, 0, 255, 255]);
    }

    #[test]
    fn test_encode_writes_png_header() {
        let encoder = PngSwatchEncoder::default();
        let colors = [
            Srgb::new(255, 0, 0),
            Srgb::new(0, 255, 0),
            Srgb::new(0, 0, 255),
        ];
        let bytes = encoder.encode(&colors).unwrap();

        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
        assert_eq!(&bytes[12..16], b"IHDR");
        assert_eq!(ihdr_dimensions(&bytes), (300, 100));
    }

    #[test]
    fn test_encode_decodes_to_swatch_blocks() {
        let encoder = PngSwatchEncoder::default();
        let colors = [Srgb::new(18, 52, 86), Srgb::new(250, 1, 128)];
        let bytes = encoder.encode(&colors).unwrap();

        let decoder = png::Decoder::new(std::io::Cursor::new(bytes.as_slice()));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0u8; reader.output_buffer_size().unwrap()];
        let info = reader.next_frame(&mut buf).unwrap();

        assert_eq!((info.width, info.height), (200, 100));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);

        let pixel = |x: usize, y: usize| {
            let i = (y * 200 + x) * 4;
            [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
        };
        for (x, y) in [(0, 0), (99, 0), (0, 99), (99, 99)] {
            assert_eq!(pixel(x, y), [18, 52, 86, 255]);
        }
        for (x, y) in [(100, 0), (199, 0), (100, 99), (199, 99)] {
            assert_eq!(pixel(x, y), [250, 1, 128, 255]);
        }
    }

    #[test]
    fn test_encode_rejects_oversized_raster() {
        // 1000 px 的色塊，17 個就超過 64 MB
        let encoder = PngSwatchEncoder::new(1000);
        let colors = vec![Srgb::new(0, 0, 0); 17];
        assert!(matches!(
            encoder.encode(&colors),
            Err(ChartError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_encode_rejects_empty_input() {
        let encoder = PngSwatchEncoder::default();
        assert!(encoder.encode(&[]).is_err());
    }
}

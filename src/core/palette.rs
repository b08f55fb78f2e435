use crate::adapters::color_math;
use crate::core::{HarmonyType, PaletteRequest, Result};
use crate::utils::validation::validate_required_field;

const MONOCHROMATIC_STEPS: [f32; 2] = [20.0, 40.0];
const COMPLEMENTARY_SHIFT: f32 = 10.0;
const RANDOM_COLORS: usize = 5;

impl PaletteRequest {
    /// Type and base color are both required; an unusable base color is
    /// reported before an unknown type.
    pub fn parse(kind: Option<&str>, base_color: Option<&str>) -> Result<Self> {
        let kind = kind.filter(|value| !value.is_empty());
        let kind = validate_required_field("type", &kind)?;
        let base_color = validate_required_field("baseColor", &base_color)?;

        let base = color_math::parse(base_color)?;
        let harmony = kind.parse::<HarmonyType>()?;

        Ok(Self { harmony, base })
    }
}

/// Builds the palette as lowercase hex strings.
pub fn generate(request: &PaletteRequest) -> Vec<String> {
    let base = request.base;

    let colors = match request.harmony {
        HarmonyType::Monochromatic => {
            let mut colors = vec![base];
            for step in MONOCHROMATIC_STEPS {
                colors.push(color_math::brighten(base, step));
                colors.push(color_math::darken(base, step));
            }
            colors
        }
        HarmonyType::Analogous => color_math::analogous(base),
        HarmonyType::Complementary => vec![
            base,
            color_math::complement(base),
            color_math::complement(color_math::brighten(base, COMPLEMENTARY_SHIFT)),
            color_math::complement(color_math::darken(base, COMPLEMENTARY_SHIFT)),
        ],
        HarmonyType::Triadic => color_math::triad(base),
        HarmonyType::Tetradic => color_math::tetrad(base),
        HarmonyType::Random => std::iter::once(base)
            .chain((0..RANDOM_COLORS).map(|_| color_math::random()))
            .collect(),
    };

    tracing::debug!(
        "Generated {:?} palette with {} colors",
        request.harmony,
        colors.len()
    );

    colors.into_iter().map(color_math::to_hex).collect()
}

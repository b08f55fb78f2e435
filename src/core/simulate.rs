use crate::adapters::{color_math, vision};
use crate::core::{Result, SimulationType};
use crate::utils::validation::validate_required_field;
use serde_json::Value;

pub fn parse_kind(kind: Option<&str>) -> Result<SimulationType> {
    validate_required_field("type", &kind)?.parse()
}

/// Entries that are not strings or do not parse as colors are dropped
/// rather than reported.
pub fn simulate_all(colors: &[Value], kind: SimulationType) -> Vec<String> {
    let simulated: Vec<String> = colors
        .iter()
        .filter_map(Value::as_str)
        .filter_map(|input| color_math::parse(input).ok())
        .map(|color| color_math::to_hex(vision::simulate(color, kind)))
        .collect();

    if simulated.len() < colors.len() {
        tracing::debug!(
            "Dropped {} invalid colors from {:?} simulation",
            colors.len() - simulated.len(),
            kind
        );
    }

    simulated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ChartError;
    use serde_json::json;

    #[test]
    fn test_invalid_entries_are_dropped() {
        let colors = json!(["#ff0000", "not-a-color", 42, null, "#00ff00"]);
        let simulated = simulate_all(colors.as_array().unwrap(), SimulationType::Deuteranomaly);
        assert_eq!(simulated.len(), 2);
        assert!(simulated.iter().all(|c| c.len() == 7 && c.starts_with('#')));
    }

    #[test]
    fn test_order_is_preserved() {
        let colors = json!(["#ff0000", "#ffffff"]);
        let simulated = simulate_all(colors.as_array().unwrap(), SimulationType::Achromatopsia);
        assert_eq!(simulated, vec!["#363636", "#ffffff"]);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(
            parse_kind(Some("tritanomaly")).unwrap(),
            SimulationType::Tritanomaly
        );
        assert!(parse_kind(None).is_err());
        assert!(parse_kind(Some("sepia")).is_err());
        assert!(matches!(
            parse_kind(Some("Protanopia")),
            Err(ChartError::UnsupportedSimulation { .. })
        ));
    }
}

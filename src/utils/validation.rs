use crate::utils::error::{ChartError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ChartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ChartError::MissingField {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ChartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(ChartError::InvalidInput {
            field: field_name.to_string(),
            reason: "List cannot be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("port", 3000, 1).is_ok());
        assert!(validate_positive_number("port", 0, 1).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("#ffffff".to_string());
        assert_eq!(
            validate_required_field("baseColor", &present).unwrap(),
            "#ffffff"
        );

        let missing: Option<String> = None;
        let err = validate_required_field("baseColor", &missing).unwrap_err();
        assert!(matches!(err, ChartError::MissingField { field } if field == "baseColor"));
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty_string("host", "0.0.0.0").is_ok());
        assert!(validate_non_empty_string("host", "   ").is_err());
        assert!(validate_non_empty_list("colors", &["#fff"]).is_ok());
        assert!(validate_non_empty_list::<String>("colors", &[]).is_err());
    }
}

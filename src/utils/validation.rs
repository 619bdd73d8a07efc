use crate::utils::error::{AdvisorError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects zero, negative, NaN and infinite values.
pub fn validate_positive_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AdvisorError::InvalidAnswer {
            field: field_name.to_string(),
            reason: format!("Value must be a positive number, got {}", value),
        });
    }
    Ok(())
}

pub fn validate_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    validate_positive_finite(field_name, value)?;
    if value < min || value > max {
        return Err(AdvisorError::InvalidAnswer {
            field: field_name.to_string(),
            reason: format!("Value {} must be between {} and {}", value, min, max),
        });
    }
    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<String> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) => {
            let extension = extension.to_ascii_lowercase();
            if allowed_set.contains(extension.as_str()) {
                Ok(extension)
            } else {
                Err(AdvisorError::InvalidConfigValue {
                    field: field_name.to_string(),
                    value: file.to_string(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                })
            }
        }
        None => Err(AdvisorError::InvalidConfigValue {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| AdvisorError::MissingField {
        field: field_name.to_string(),
    })
}

/// Presence check: the value must contain something other than whitespace.
pub fn validate_present(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AdvisorError::MissingField {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

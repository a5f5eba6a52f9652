//! Validation rules for metadata fields

use super::field_type::FieldKind;
use chrono::NaiveDate;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            custom_error: None,
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate raw form input for a field of the given kind.
    ///
    /// Blank optional values are always accepted.
    pub fn validate(&self, kind: FieldKind, raw: &str, field_label: &str) -> Result<(), String> {
        let value = raw.trim();
        if value.is_empty() {
            if self.required {
                return Err(self.error_or(format!("{} is required", field_label)));
            }
            return Ok(());
        }

        if let Some(min) = self.min_length {
            if value.chars().count() < min {
                return Err(self.error_or(format!(
                    "{} must contain at least {} characters",
                    field_label, min
                )));
            }
        }
        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(self.error_or(format!(
                    "{} must contain at most {} characters",
                    field_label, max
                )));
            }
        }

        match kind {
            FieldKind::Email if !is_valid_email(value) => {
                Err(self.error_or(format!("{} must be a valid email address", field_label)))
            }
            FieldKind::Phone if !is_valid_phone(value) => Err(self.error_or(format!(
                "{} must contain 10 to 15 digits",
                field_label
            ))),
            FieldKind::Date if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() => {
                Err(self.error_or(format!("{} must be a date (YYYY-MM-DD)", field_label)))
            }
            FieldKind::Choice(options) if !options.contains(&value) => Err(self.error_or(
                format!("{} must be one of: {}", field_label, options.join(", ")),
            )),
            FieldKind::Integer | FieldKind::Reference(_) => match value.parse::<i64>() {
                Ok(n) => self.validate_range(n as f64, field_label),
                Err(_) => Err(self.error_or(format!("{} must be a whole number", field_label))),
            },
            FieldKind::Number => match value.parse::<f64>() {
                Ok(n) if n.is_finite() => self.validate_range(n, field_label),
                _ => Err(self.error_or(format!("{} must be a number", field_label))),
            },
            _ => Ok(()),
        }
    }

    /// Validate a numeric value against min/max
    pub fn validate_range(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(self.error_or(format!("{} must be at least {}", field_label, min)));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(self.error_or(format!("{} must be at most {}", field_label, max)));
            }
        }
        Ok(())
    }

    fn error_or(&self, message: String) -> String {
        self.custom_error.map(str::to_string).unwrap_or(message)
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
                    .unwrap_or(false)
        }
        None => false,
    }
}

fn is_valid_phone(value: &str) -> bool {
    let body = value.strip_prefix('+').unwrap_or(value);
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
    {
        return false;
    }
    let digits = body.chars().filter(char::is_ascii_digit).count();
    (10..=15).contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_blank_is_rejected() {
        let rules = ValidationRules {
            required: true,
            ..ValidationRules::none()
        };
        assert_eq!(
            rules.validate(FieldKind::Text, "   ", "Name"),
            Err("Name is required".to_string())
        );
        assert!(ValidationRules::none()
            .validate(FieldKind::Email, "", "Email")
            .is_ok());
    }

    #[test]
    fn email_and_phone_formats() {
        let rules = ValidationRules::none();
        assert!(rules.validate(FieldKind::Email, "a@b.co", "Email").is_ok());
        assert!(rules.validate(FieldKind::Email, "a@b", "Email").is_err());
        assert!(rules.validate(FieldKind::Email, "a b@c.de", "Email").is_err());
        assert!(rules.validate(FieldKind::Phone, "+91 98765-43210", "Phone").is_ok());
        assert!(rules.validate(FieldKind::Phone, "12345", "Phone").is_err());
        assert!(rules.validate(FieldKind::Phone, "98765x43210", "Phone").is_err());
    }

    #[test]
    fn numeric_kinds_respect_minimum() {
        let rules = ValidationRules {
            min: Some(1.0),
            ..ValidationRules::none()
        };
        assert!(rules.validate(FieldKind::Integer, "3", "Floors").is_ok());
        assert!(rules.validate(FieldKind::Integer, "0", "Floors").is_err());
        assert!(rules.validate(FieldKind::Integer, "2.5", "Floors").is_err());
        assert!(rules.validate(FieldKind::Number, "2.5", "Rate").is_ok());
        assert!(rules.validate(FieldKind::Number, "abc", "Rate").is_err());
    }

    #[test]
    fn dates_and_choices() {
        let rules = ValidationRules::none();
        assert!(rules.validate(FieldKind::Date, "2024-02-29", "Date").is_ok());
        assert!(rules.validate(FieldKind::Date, "2023-02-29", "Date").is_err());
        let kind = FieldKind::Choice(&["Owner", "Tenant"]);
        assert!(rules.validate(kind, "Tenant", "Type").is_ok());
        assert!(rules.validate(kind, "Guest", "Type").is_err());
    }
}

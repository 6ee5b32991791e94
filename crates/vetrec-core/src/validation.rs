//! Owner form binding and field-level validation.
//!
//! Incoming form parameters bind onto an explicit `OwnerForm` struct.
//! `validate` checks every constraint and reports all violations
//! together, so the form view can flag each invalid field individually
//! instead of stopping at the first failure.

use serde::{Deserialize, Serialize};

use crate::domain::{NewOwner, Owner};

/// Maximum number of significant digits in a telephone number.
const TELEPHONE_MAX_DIGITS: usize = 10;

/// Message attached to a blank required field.
pub const MSG_REQUIRED: &str = "must not be blank";

/// Message attached to a malformed telephone number.
pub const MSG_TELEPHONE: &str = "must be a number of at most 10 digits";

/// Field names as they appear in submitted form parameters.
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const ADDRESS: &str = "address";
    pub const CITY: &str = "city";
    pub const TELEPHONE: &str = "telephone";
}

/// A validation failure attached to one named field.
///
/// The field name matches the submitted parameter name so the form view
/// can display the message alongside the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Submitted owner form fields.
///
/// Binds from `application/x-www-form-urlencoded` parameters; absent
/// parameters bind as empty strings and fail the required check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerForm {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl OwnerForm {
    /// Pre-populate a form from an existing owner (edit flow).
    #[must_use]
    pub fn from_owner(owner: &Owner) -> Self {
        Self {
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            address: owner.address.clone(),
            city: owner.city.clone(),
            telephone: owner.telephone.clone(),
        }
    }

    /// Check every constraint and return all violations.
    ///
    /// An empty result means the form is valid. Every field is required;
    /// the telephone must additionally be all digits within the numeric
    /// bound. A blank telephone reports only the required violation.
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let required = [
            (fields::FIRST_NAME, &self.first_name),
            (fields::LAST_NAME, &self.last_name),
            (fields::ADDRESS, &self.address),
            (fields::CITY, &self.city),
            (fields::TELEPHONE, &self.telephone),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(FieldError::new(field, MSG_REQUIRED));
            }
        }

        let telephone = self.telephone.trim();
        if !telephone.is_empty() && !is_valid_telephone(telephone) {
            errors.push(FieldError::new(fields::TELEPHONE, MSG_TELEPHONE));
        }

        errors
    }

    /// Convert a validated form into an owner awaiting persistence.
    #[must_use]
    pub fn into_new_owner(self) -> NewOwner {
        NewOwner {
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            city: self.city,
            telephone: self.telephone,
        }
    }

    /// Convert a validated form into an owner with a known ID (edit flow).
    #[must_use]
    pub fn into_owner(self, id: i64) -> Owner {
        Owner {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            city: self.city,
            telephone: self.telephone,
        }
    }
}

/// Telephone numbers are digits only, with at most ten significant
/// digits. Leading zeros carry no numeric weight, so "01316761638"
/// (eleven characters, ten significant digits) is accepted.
fn is_valid_telephone(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
        && value.trim_start_matches('0').len() <= TELEPHONE_MAX_DIGITS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> OwnerForm {
        OwnerForm {
            first_name: "Joe".to_string(),
            last_name: "Bloggs".to_string(),
            address: "123 Caramel Street".to_string(),
            city: "London".to_string(),
            telephone: "6085551023".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let form = OwnerForm {
            first_name: "Joe".to_string(),
            last_name: "Bloggs".to_string(),
            city: "London".to_string(),
            ..Default::default()
        };

        let errors = form.validate();
        let flagged: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(flagged, vec![fields::ADDRESS, fields::TELEPHONE]);
        assert!(errors.iter().all(|e| e.message == MSG_REQUIRED));
    }

    #[test]
    fn test_empty_form_flags_every_field() {
        let errors = OwnerForm::default().validate();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_whitespace_only_field_is_blank() {
        let form = OwnerForm {
            city: "   ".to_string(),
            ..valid_form()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, fields::CITY);
    }

    #[test]
    fn test_telephone_rejects_non_digits() {
        let form = OwnerForm {
            telephone: "608-555-1023".to_string(),
            ..valid_form()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, fields::TELEPHONE);
        assert_eq!(errors[0].message, MSG_TELEPHONE);
    }

    #[test]
    fn test_telephone_rejects_too_many_digits() {
        let form = OwnerForm {
            telephone: "60855510234".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate().len(), 1);
    }

    #[test]
    fn test_telephone_accepts_leading_zero_within_bound() {
        // Eleven characters but only ten significant digits.
        let form = OwnerForm {
            telephone: "01316761638".to_string(),
            ..valid_form()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_blank_telephone_reports_required_only() {
        let form = OwnerForm {
            telephone: String::new(),
            ..valid_form()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, MSG_REQUIRED);
    }

    #[test]
    fn test_into_owner_preserves_id() {
        let owner = valid_form().into_owner(7);
        assert_eq!(owner.id, 7);
        assert_eq!(owner.last_name, "Bloggs");
    }

    #[test]
    fn test_form_round_trips_owner_fields() {
        let owner = valid_form().into_owner(1);
        assert_eq!(OwnerForm::from_owner(&owner), valid_form());
    }
}

//! Field rules for the `Project` entity.
//!
//! The only constraint the catalog enforces is that a new project has a name
//! and a description that are not blank once surrounding whitespace is
//! ignored. Stored values are kept exactly as entered.

use std::borrow::Cow;

use validator::ValidationError;

use crate::error::CoreError;

/// Validation code reported by [`validate_not_blank`].
pub const BLANK_CODE: &str = "blank";

/// Message shown when the add form is submitted with a blank field.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

/// Returns `true` when `value` is empty or only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Custom `validator` rule: the field must contain a non-whitespace character.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        let mut err = ValidationError::new(BLANK_CODE);
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

/// The error reported when a new project is missing a name or description.
pub fn missing_fields() -> CoreError {
    CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string())
}

//! Client-side Form Validation
//!
//! Mirrors the server's constraints so a form never submits a body the
//! backend would reject. Failures come back as dotted-path field errors
//! (`"buyer.phone.phoneNumber"`, `"items.0.quantity"`) so pages can map
//! each message onto its input.

mod item;
mod order;

pub use item::{validate_item_create, validate_item_update, ItemFormData};
pub use order::{
    validate_order_create, validate_order_update, OrderFormData, OrderItemFormData, PersonFormData,
};

/// Validation failures keyed by dotted field path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push((path.into(), message.into()));
    }

    /// First message recorded for a field, if any
    pub fn message(&self, path: &str) -> Option<String> {
        self.errors
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, m)| m.clone())
    }

    pub fn has(&self, path: &str) -> bool {
        self.errors.iter().any(|(p, _)| p == path)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// Why a text input failed numeric coercion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CoerceError {
    NotANumber,
    NotAnInteger,
}

/// Coerce a numeric text input: empty counts as 0, fractional values are
/// rejected as non-integers.
pub(crate) fn coerce_int(raw: &str) -> Result<i64, CoerceError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 => Ok(value as i64),
        Ok(_) => Err(CoerceError::NotAnInteger),
        Err(_) => Err(CoerceError::NotANumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_int_accepts_plain_and_empty_input() {
        assert_eq!(coerce_int("42"), Ok(42));
        assert_eq!(coerce_int(" 42 "), Ok(42));
        assert_eq!(coerce_int(""), Ok(0));
        assert_eq!(coerce_int("3.0"), Ok(3));
    }

    #[test]
    fn test_coerce_int_rejects_fractions_and_garbage() {
        assert_eq!(coerce_int("3.5"), Err(CoerceError::NotAnInteger));
        assert_eq!(coerce_int("abc"), Err(CoerceError::NotANumber));
    }

    #[test]
    fn test_field_errors_lookup() {
        let mut errors = FieldErrors::default();
        errors.push("po", "PO number is required");
        errors.push("items.0.quantity", "Quantity must be at least 1");
        assert!(errors.has("po"));
        assert!(!errors.has("note"));
        assert_eq!(
            errors.message("items.0.quantity").as_deref(),
            Some("Quantity must be at least 1")
        );
        assert_eq!(errors.len(), 2);
    }
}

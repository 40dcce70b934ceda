// =====================================================================================
// FIELD VALIDATION - SHARED BY THE DOCTOR AND APPOINTMENT CELLS
// =====================================================================================

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use shared_models::error::{AppError, Result};

// `[0-9]` rather than `\d`: the regex crate's `\d` is Unicode-aware.
static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

static TIME_SLOT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap());

/// True when the value is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Exactly ten ASCII digits, nothing else.
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_PATTERN.is_match(mobile)
}

/// 24-hour `HH:mm`, both fields zero-padded.
pub fn is_valid_time_slot(time_slot: &str) -> bool {
    TIME_SLOT_PATTERN.is_match(time_slot)
}

pub fn validate_non_negative(value: i32, message: &str) -> Result<()> {
    if value < 0 {
        debug!("Rejected negative value {}", value);
        return Err(AppError::validation(message));
    }
    Ok(())
}

pub fn validate_non_blank(value: &str, message: &str) -> Result<()> {
    if is_blank(value) {
        return Err(AppError::validation(message));
    }
    Ok(())
}

pub fn validate_mobile(mobile: &str, message: &str) -> Result<()> {
    if !is_valid_mobile(mobile) {
        debug!("Rejected mobile number '{}'", mobile);
        return Err(AppError::validation(message));
    }
    Ok(())
}

pub fn validate_time_slot(time_slot: &str, message: &str) -> Result<()> {
    if !is_valid_time_slot(time_slot) {
        debug!("Rejected time slot '{}'", time_slot);
        return Err(AppError::validation(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" Dr. Lee "));
    }

    #[test]
    fn test_mobile_validation() {
        assert!(is_valid_mobile("1234567890"));
        assert!(is_valid_mobile("0000000000"));

        assert!(!is_valid_mobile("123"));
        assert!(!is_valid_mobile("12345678901"));
        assert!(!is_valid_mobile("12345abcde"));
        assert!(!is_valid_mobile(" 1234567890"));
        assert!(!is_valid_mobile("1234567890\n"));
        assert!(!is_valid_mobile(""));
        // Arabic-Indic digits must not pass as digits
        assert!(!is_valid_mobile("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn test_time_slot_validation() {
        assert!(is_valid_time_slot("00:00"));
        assert!(is_valid_time_slot("08:30"));
        assert!(is_valid_time_slot("19:45"));
        assert!(is_valid_time_slot("23:59"));

        assert!(!is_valid_time_slot("24:00"));
        assert!(!is_valid_time_slot("9:00"));
        assert!(!is_valid_time_slot("12:60"));
        assert!(!is_valid_time_slot("12:5"));
        assert!(!is_valid_time_slot("12-30"));
        assert!(!is_valid_time_slot("12:30 "));
        assert!(!is_valid_time_slot(""));
    }

    #[test]
    fn test_validators_return_validation_errors() {
        assert!(validate_non_negative(0, "ID cannot be negative").is_ok());
        assert_matches!(
            validate_non_negative(-1, "ID cannot be negative"),
            Err(AppError::ValidationError(msg)) if msg == "ID cannot be negative"
        );

        assert!(validate_non_blank("Cardiology", "Specialization cannot be empty").is_ok());
        assert_matches!(
            validate_non_blank("  ", "Specialization cannot be empty"),
            Err(AppError::ValidationError(_))
        );

        assert_matches!(validate_mobile("123", "bad mobile"), Err(AppError::ValidationError(_)));
        assert_matches!(validate_time_slot("24:00", "bad slot"), Err(AppError::ValidationError(_)));
    }
}

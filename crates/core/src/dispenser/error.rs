//! Dispenser error types.
//!
//! All failure paths of validation and allocation are explicit variants so
//! the HTTP layer can map each one to a status code and user-facing message
//! without inspecting strings.

use thiserror::Error;

/// Errors that can occur while validating or fulfilling a withdrawal.
#[derive(Debug, Error)]
pub enum DispenserError {
    // ========== Validation Errors ==========
    /// Requested amount is not a positive integer.
    #[error("Amount must be a positive integer")]
    InvalidAmount,

    /// Requested amount fails the divisibility pre-check for the supported
    /// denomination set (must be divisible by both 5 and 2).
    #[error("Amount cannot be dispensed with the available denominations; use a multiple of 5 and 2")]
    UnsupportedDenominationCombination,

    // ========== Allocation Errors ==========
    /// Requested amount exceeds the total cash value in the machine.
    #[error("Amount exceeds the total value of bills available")]
    AmountExceedsTotalAvailable,

    /// The greedy pass could not zero out the amount with the bills on hand.
    #[error("Amount cannot be fulfilled with the bills currently available")]
    UnfulfillableWithAvailableDenominations,

    // ========== Internal Errors ==========
    /// Unexpected failure; detail is logged server-side, never echoed.
    #[error("internal server error")]
    Internal(String),
}

impl DispenserError {
    /// Returns the error code for logging and API diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::UnsupportedDenominationCombination => "UNSUPPORTED_DENOMINATION_COMBINATION",
            Self::AmountExceedsTotalAvailable => "AMOUNT_EXCEEDS_TOTAL_AVAILABLE",
            Self::UnfulfillableWithAvailableDenominations => {
                "UNFULFILLABLE_WITH_AVAILABLE_DENOMINATIONS"
            }
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation and allocation errors
            Self::InvalidAmount
            | Self::UnsupportedDenominationCombination
            | Self::AmountExceedsTotalAvailable
            | Self::UnfulfillableWithAvailableDenominations => 400,

            // 500 Internal Server Error
            Self::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DispenserError::InvalidAmount.error_code(), "INVALID_AMOUNT");
        assert_eq!(
            DispenserError::UnsupportedDenominationCombination.error_code(),
            "UNSUPPORTED_DENOMINATION_COMBINATION"
        );
        assert_eq!(
            DispenserError::AmountExceedsTotalAvailable.error_code(),
            "AMOUNT_EXCEEDS_TOTAL_AVAILABLE"
        );
        assert_eq!(
            DispenserError::UnfulfillableWithAvailableDenominations.error_code(),
            "UNFULFILLABLE_WITH_AVAILABLE_DENOMINATIONS"
        );
        assert_eq!(
            DispenserError::Internal("boom".to_string()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(DispenserError::InvalidAmount.http_status_code(), 400);
        assert_eq!(
            DispenserError::UnsupportedDenominationCombination.http_status_code(),
            400
        );
        assert_eq!(
            DispenserError::AmountExceedsTotalAvailable.http_status_code(),
            400
        );
        assert_eq!(
            DispenserError::UnfulfillableWithAvailableDenominations.http_status_code(),
            400
        );
        assert_eq!(
            DispenserError::Internal("boom".to_string()).http_status_code(),
            500
        );
    }

    #[test]
    fn test_internal_detail_never_in_display() {
        // The Display message is what goes over the wire; the detail string
        // must stay out of it.
        let err = DispenserError::Internal("lock poisoned".to_string());
        assert_eq!(err.to_string(), "internal server error");
    }
}

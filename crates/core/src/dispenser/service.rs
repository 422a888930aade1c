//! Dispenser service: amount validation and greedy bill allocation.

use super::error::DispenserError;
use super::types::{Allocation, DENOMINATIONS, Inventory};

/// Dispenser service for withdrawal logic.
pub struct DispenserService;

impl DispenserService {
    /// Validate a withdrawal amount before any allocation is attempted.
    ///
    /// `raw` is the request's amount field as a parsed JSON integer, `None`
    /// when the field was missing or not an integer. The divisibility check
    /// (by 5 and by 2) is a necessary pre-check derived from the
    /// denomination set, not a sufficiency guarantee; [`Self::withdraw`]
    /// still verifies the amount against the actual bills on hand.
    ///
    /// # Errors
    ///
    /// Returns `DispenserError::InvalidAmount` if `raw` is missing, zero, or
    /// negative.
    /// Returns `DispenserError::UnsupportedDenominationCombination` if the
    /// amount is not divisible by both 5 and 2.
    pub fn validate_amount(raw: Option<i64>) -> Result<u64, DispenserError> {
        let amount = match raw {
            Some(value) if value > 0 => value.unsigned_abs(),
            _ => return Err(DispenserError::InvalidAmount),
        };

        if amount % 5 != 0 || amount % 2 != 0 {
            return Err(DispenserError::UnsupportedDenominationCombination);
        }

        Ok(amount)
    }

    /// Allocate bills for a validated `amount` and debit the inventory.
    ///
    /// Walks [`DENOMINATIONS`] largest first: at each denomination it takes
    /// `min(remaining / denomination, available)` bills and moves on with
    /// the reduced remainder. The pass never backtracks to re-route a
    /// shortfall through a larger denomination it already passed, so a
    /// constrained inventory can make the pass fail for amounts a different
    /// mix could satisfy. That single-pass policy is intentional.
    ///
    /// All-or-nothing: the inventory is decremented only after the pass has
    /// zeroed out the amount, so a failed call leaves it untouched. Callers
    /// are responsible for holding whatever guard makes the check-decrement
    /// sequence exclusive across concurrent requests.
    ///
    /// # Errors
    ///
    /// Returns `DispenserError::AmountExceedsTotalAvailable` if `amount` is
    /// greater than the inventory's total cash value.
    /// Returns `DispenserError::UnfulfillableWithAvailableDenominations` if
    /// the greedy pass cannot zero out the amount.
    pub fn withdraw(inventory: &mut Inventory, amount: u64) -> Result<Allocation, DispenserError> {
        if amount > inventory.total_value() {
            return Err(DispenserError::AmountExceedsTotalAvailable);
        }

        let available = inventory.counts();
        let mut used = [0u64; 6];
        let mut remaining = amount;

        for (i, denomination) in DENOMINATIONS.iter().enumerate() {
            used[i] = (remaining / denomination).min(available[i]);
            remaining -= used[i] * denomination;
        }

        if remaining > 0 {
            return Err(DispenserError::UnfulfillableWithAvailableDenominations);
        }

        let allocation = Allocation::from_counts(used);
        inventory.debit(&allocation);
        Ok(allocation)
    }
}

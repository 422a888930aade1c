//! Property-based tests for the dispenser module.

use proptest::prelude::*;

use super::service::DispenserService;
use super::types::{DENOMINATIONS, Inventory};

fn arb_counts() -> impl Strategy<Value = [u64; 6]> {
    [
        0u64..50,
        0u64..50,
        0u64..80,
        0u64..100,
        0u64..200,
        0u64..400,
    ]
}

proptest! {
    /// A successful allocation always sums to exactly the requested amount,
    /// and the inventory loses exactly that value.
    #[test]
    fn test_success_conserves_value(
        counts in arb_counts(),
        multiple in 1u64..600,
    ) {
        let amount = multiple * 10;
        let mut inventory = Inventory::with_counts(counts);
        let before = inventory.total_value();

        if let Ok(allocation) = DispenserService::withdraw(&mut inventory, amount) {
            prop_assert_eq!(allocation.total_value(), amount);
            prop_assert_eq!(inventory.total_value(), before - amount);
        } else {
            prop_assert_eq!(inventory.total_value(), before);
            prop_assert_eq!(inventory, Inventory::with_counts(counts));
        }
    }

    /// An allocation never hands out more bills of a denomination than the
    /// inventory held, and never drives a count negative.
    #[test]
    fn test_allocation_respects_availability(
        counts in arb_counts(),
        multiple in 1u64..600,
    ) {
        let amount = multiple * 10;
        let mut inventory = Inventory::with_counts(counts);

        if let Ok(allocation) = DispenserService::withdraw(&mut inventory, amount) {
            for (i, denomination) in DENOMINATIONS.iter().enumerate() {
                prop_assert!(allocation.count(*denomination) <= counts[i]);
                prop_assert_eq!(
                    inventory.count(*denomination),
                    counts[i] - allocation.count(*denomination)
                );
            }
        }
    }

    /// Repeating a failed withdrawal without any mutation in between yields
    /// the same error.
    #[test]
    fn test_failure_is_deterministic(
        counts in arb_counts(),
        multiple in 1u64..600,
    ) {
        let amount = multiple * 10;
        let mut inventory = Inventory::with_counts(counts);

        let first = DispenserService::withdraw(&mut inventory, amount);
        if let Err(first_err) = first {
            let second = DispenserService::withdraw(&mut inventory, amount);
            let second_err = second.expect_err("retry after failure must fail identically");
            prop_assert_eq!(first_err.error_code(), second_err.error_code());
        }
    }

    /// Amounts above the total cash value are rejected before allocation.
    #[test]
    fn test_exceeding_total_always_rejected(
        counts in arb_counts(),
        excess in 1u64..1000,
    ) {
        let mut inventory = Inventory::with_counts(counts);
        let amount = inventory.total_value() + excess;

        let result = DispenserService::withdraw(&mut inventory, amount);
        prop_assert!(matches!(
            result,
            Err(super::error::DispenserError::AmountExceedsTotalAvailable)
        ));
    }
}

//! Dispenser domain types.
//!
//! Bill counts are stored positionally, parallel to [`DENOMINATIONS`].
//! Both [`Inventory`] and [`Allocation`] serialize as a JSON map keyed by
//! the denomination value (as a string), largest denomination first, with
//! every denomination present even when its count is zero.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Bill denominations the machine supports, in descending order.
///
/// The allocation algorithm depends on this ordering: the greedy pass walks
/// the array front to back.
pub const DENOMINATIONS: [u64; 6] = [100, 50, 20, 10, 5, 2];

/// Bill counts the machine is loaded with at startup, parallel to
/// [`DENOMINATIONS`]: 20x100, 30x50, 40x20, 50x10, 100x5, 200x2.
pub const SEED_COUNTS: [u64; 6] = [20, 30, 40, 50, 100, 200];

/// Position of `denomination` within [`DENOMINATIONS`], if supported.
fn denomination_index(denomination: u64) -> Option<usize> {
    DENOMINATIONS.iter().position(|&d| d == denomination)
}

fn serialize_counts<S: Serializer>(counts: &[u64; 6], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(DENOMINATIONS.len()))?;
    for (denomination, count) in DENOMINATIONS.iter().zip(counts) {
        map.serialize_entry(&denomination.to_string(), count)?;
    }
    map.end()
}

/// Available bill counts per denomination.
///
/// Constructed once at process start and mutated only by
/// [`DispenserService::withdraw`](super::DispenserService::withdraw) on a
/// fully successful allocation, so counts can never go negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    counts: [u64; 6],
}

impl Inventory {
    /// Creates an inventory with the standard seed counts.
    #[must_use]
    pub const fn seeded() -> Self {
        Self { counts: SEED_COUNTS }
    }

    /// Creates an inventory with explicit per-denomination counts, parallel
    /// to [`DENOMINATIONS`].
    #[must_use]
    pub const fn with_counts(counts: [u64; 6]) -> Self {
        Self { counts }
    }

    /// Number of bills available for `denomination` (zero for unsupported
    /// denominations).
    #[must_use]
    pub fn count(&self, denomination: u64) -> u64 {
        denomination_index(denomination).map_or(0, |i| self.counts[i])
    }

    /// Total cash value held: sum of denomination x count.
    #[must_use]
    pub fn total_value(&self) -> u64 {
        DENOMINATIONS
            .iter()
            .zip(&self.counts)
            .map(|(denomination, count)| denomination * count)
            .sum()
    }

    pub(crate) const fn counts(&self) -> &[u64; 6] {
        &self.counts
    }

    /// Removes the allocated bills. The allocator only produces allocations
    /// capped at the available counts, so the subtraction cannot underflow.
    pub(crate) fn debit(&mut self, allocation: &Allocation) {
        for (count, used) in self.counts.iter_mut().zip(&allocation.counts) {
            *count -= used;
        }
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_counts(&self.counts, serializer)
    }
}

/// Per-denomination bill counts dispensed for a single withdrawal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    counts: [u64; 6],
}

impl Allocation {
    pub(crate) const fn from_counts(counts: [u64; 6]) -> Self {
        Self { counts }
    }

    /// Number of bills of `denomination` dispensed (zero for unsupported
    /// denominations).
    #[must_use]
    pub fn count(&self, denomination: u64) -> u64 {
        denomination_index(denomination).map_or(0, |i| self.counts[i])
    }

    /// Total cash value dispensed: sum of denomination x count.
    #[must_use]
    pub fn total_value(&self) -> u64 {
        DENOMINATIONS
            .iter()
            .zip(&self.counts)
            .map(|(denomination, count)| denomination * count)
            .sum()
    }
}

impl Serialize for Allocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_counts(&self.counts, serializer)
    }
}

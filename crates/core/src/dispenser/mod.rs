//! Bill inventory and withdrawal allocation.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::DispenserError;
pub use service::DispenserService;
pub use types::{Allocation, DENOMINATIONS, Inventory, SEED_COUNTS};

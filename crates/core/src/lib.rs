//! Core dispenser logic for Caixa.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and the bill allocation algorithm
//! live here.
//!
//! # Modules
//!
//! - `dispenser` - Bill inventory and greedy withdrawal allocation

pub mod dispenser;

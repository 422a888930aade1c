//! Shared configuration for Caixa.

pub mod config;

pub use config::AppConfig;

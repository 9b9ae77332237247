//! Configuration module for Baike lookups
//!
//! This module provides the `LookupConfig` struct, its builder, and loading
//! from JSON files with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::LookupConfigBuilder;
pub use types::LookupConfig;

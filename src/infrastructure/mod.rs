//! Infrastructure layer - external adapters and integrations.
//!
//! This layer provides adapters for:
//! - Cache storage (dashmap-backed shared cache)
//! - Tracing integration (observer emitting structured events)
//! - The assembled layered calculator

pub mod cache;
pub mod calculator;
pub mod observer;

/// Mock implementations for testing.
///
/// This module is only available when the `test-helpers` feature is enabled,
/// or during test builds. It provides controllable test doubles for testing
/// layering behavior.
///
/// To use these mocks in integration tests, add to your `Cargo.toml`:
/// ```toml
/// [dev-dependencies]
/// layered-calc = { version = "*", features = ["test-helpers"] }
/// ```
#[cfg(any(test, feature = "test-helpers"))]
pub mod mocks;

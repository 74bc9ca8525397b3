//! Mock implementations for testing.
//!
//! This module provides test doubles for the calculator stack,
//! enabling controlled testing of layering behavior.

pub mod capture;
pub mod evaluator;
pub mod observer;

pub use capture::{CaptureLayer, CapturedEvent};
pub use evaluator::CountingEvaluator;
pub use observer::{ObservedEvent, RecordingObserver};

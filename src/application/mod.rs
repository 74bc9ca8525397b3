//! Application layer - orchestration of domain logic.
//!
//! This layer composes the domain's evaluators into the layered stack and
//! manages runtime behavior:
//! - Memoizing layer (result caching)
//! - Observing layer (input/output notifications)
//! - Observer registry and subscription handles
//! - Evaluation metrics
//! - Generic building blocks (command dispatch, observable stack)
//!
//! ## Ports
//!
//! The application layer defines ports (traits) that infrastructure
//! adapters must implement. This keeps the application layer independent
//! from infrastructure details.

pub mod dispatcher;
pub mod logging;
pub mod memo;
pub mod metrics;
pub mod observable;
pub mod observers;
pub mod ports;

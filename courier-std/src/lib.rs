//! # courier-std
//!
//! Standard implementations for the courier record broker.
//!
//! This crate provides:
//! - **Broker**: [`Broker`], an ordered, identity de-duplicated subscriber registry
//! - **Delivery**: [`DeliveryStrategy`] and the fail-fast [`SequentialDelivery`]
//! - **Sinks**: [`LineSink`] and [`StdoutSink`] for subscriber output
//! - **Testing**: recording sinks and subscribers in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use courier_core;

// Modules
pub mod broker;
pub mod delivery;
pub mod sink;
pub mod testing;

pub use broker::Broker;
pub use delivery::{DeliveryStrategy, SequentialDelivery};
pub use sink::{LineSink, StdoutSink};

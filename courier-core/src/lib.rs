//! # courier-core
//!
//! Core traits for the courier record broker.
//!
//! This crate has minimal dependencies and is meant to be imported by code that
//! only needs to *implement* subscribers, not wire up a broker.
//!
//! # Two Pieces
//!
//! ## Payload ([`Message`])
//!
//! A marker for values that can be routed. Records are immutable and are lent
//! to every subscriber by reference, so nothing here requires `Clone`.
//!
//! ## Reaction ([`Subscriber`])
//!
//! A single-method capability: look at one routed value, react if it is
//! interesting, otherwise do nothing. Brokers depend only on this trait and
//! never on concrete subscriber types.
//!
//! # Error Types
//!
//! - [`DispatchError`] - A subscriber failed while a value was being routed
//! - [`BoxError`] - The erased error a subscriber hands back

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod message;
mod subscriber;

// Re-exports
pub use error::{BoxError, DispatchError};
pub use message::Message;
pub use subscriber::Subscriber;

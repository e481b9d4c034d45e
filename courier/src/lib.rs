//! # courier - Typed Record Broker
//!
//! `courier` routes immutable customer records to a fixed, ordered set of
//! handlers. Routing is synchronous: [`Broker::route`] returns once every
//! handler has looked at the record, or with the first handler failure.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use courier::{Broker, GenericHandler, Record, RegisteredCustomerRecord, StdoutSink};
//! use std::sync::Arc;
//!
//! let mut broker: Broker<Record> = Broker::new();
//! broker.attach(Arc::new(GenericHandler::new(Arc::new(StdoutSink))));
//!
//! let record = RegisteredCustomerRecord::new(chrono::Utc::now(), 2, 344);
//! broker.route(&record.into())?;
//! ```
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin courier-demo
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Lets `#[derive(Message)]` name `::courier` from inside this crate.
extern crate self as courier;

pub use courier_core::{BoxError, DispatchError, Message, Subscriber};

pub use courier_std::{Broker, DeliveryStrategy, LineSink, SequentialDelivery, StdoutSink};

pub mod demo;
pub mod handlers;
pub mod logging;
pub mod record;

pub use demo::{DemoError, run_demo};
pub use handlers::{GenericHandler, RegisteredHandler, UnregisteredHandler};
pub use record::{
    ConstructionError, CustomerRecord, Record, RegisteredCustomerRecord,
    UnregisteredCustomerRecord, Variant,
};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use courier_std::testing::*;
}

/// Prelude module - common imports for courier.
///
/// # Usage
///
/// ```rust,ignore
/// use courier::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Broker, DispatchError, LineSink, Message, Record, Subscriber, Variant,
    };
}

#[cfg(feature = "macros")]
pub use courier_macros::Message;

//! Composition root for the demonstration run.
//!
//! Wires one broker to the three customer handlers and routes one record of
//! each customer kind through it.

use crate::{
    handlers::{GenericHandler, RegisteredHandler, UnregisteredHandler},
    record::{ConstructionError, Record, RegisteredCustomerRecord, UnregisteredCustomerRecord},
};
use chrono::{DateTime, Utc};
use courier_core::DispatchError;
use courier_std::{Broker, LineSink};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that end a demonstration run.
#[derive(Error, Debug)]
pub enum DemoError {
    /// A sample record could not be built.
    #[error("could not build sample record")]
    Construction(#[from] ConstructionError),

    /// A handler failed while a record was routed.
    #[error("could not route record")]
    Dispatch(#[from] DispatchError),
}

/// Builds a broker with the generic, unregistered and registered handlers
/// attached in that order, all writing to `sink`.
pub fn customer_broker(sink: Arc<dyn LineSink>) -> Broker<Record> {
    let mut broker: Broker<Record> = Broker::new();
    broker.attach(Arc::new(GenericHandler::new(sink.clone())));
    broker.attach(Arc::new(UnregisteredHandler::new(sink.clone())));
    broker.attach(Arc::new(RegisteredHandler::new(sink)));
    broker
}

/// The sample visit by John Doe, order 1.
pub fn sample_unregistered_customer(
    last_visit: DateTime<Utc>,
) -> Result<UnregisteredCustomerRecord, ConstructionError> {
    UnregisteredCustomerRecord::builder()
        .last_visit(last_visit)
        .order_id(1)
        .name("John")
        .surname("Doe")
        .build()
}

/// The sample visit by customer 344, order 2.
pub fn sample_registered_customer(
    last_visit: DateTime<Utc>,
) -> Result<RegisteredCustomerRecord, ConstructionError> {
    RegisteredCustomerRecord::builder()
        .last_visit(last_visit)
        .order_id(2)
        .customer_id(344)
        .build()
}

/// Routes the unregistered sample, then the registered sample, through
/// [`customer_broker`].
pub fn run_demo(sink: Arc<dyn LineSink>) -> Result<(), DemoError> {
    let broker = customer_broker(sink);
    info!(subscribers = broker.len(), "broker ready");

    let unregistered = sample_unregistered_customer(Utc::now())?;
    let registered = sample_registered_customer(Utc::now())?;

    broker.route(&Record::from(unregistered))?;
    broker.route(&Record::from(registered))?;

    info!("demo finished");
    Ok(())
}

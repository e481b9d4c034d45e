//! Customer handlers.
//!
//! Each handler reacts to the [`Record`] shapes it recognizes by writing one
//! fixed line to its sink. Recognition is an exhaustive `match`, so a new
//! record shape will not compile until every handler decides about it.

use crate::record::Record;
use courier_core::{BoxError, Subscriber};
use courier_std::LineSink;
use std::{fmt, sync::Arc};
use tracing::debug;

/// Line written by [`GenericHandler`].
pub const GENERIC_LINE: &str = "Handler for all type of customers";
/// Line written by [`UnregisteredHandler`].
pub const UNREGISTERED_LINE: &str = "Handler for non registered customer";
/// Line written by [`RegisteredHandler`].
pub const REGISTERED_LINE: &str = "Handler for registered customer";

/// Reacts to every record.
pub struct GenericHandler {
    sink: Arc<dyn LineSink>,
}

impl GenericHandler {
    /// Create a handler writing to `sink`.
    pub fn new(sink: Arc<dyn LineSink>) -> Self {
        Self { sink }
    }
}

impl Subscriber<Record> for GenericHandler {
    fn process(&self, record: &Record) -> Result<(), BoxError> {
        debug!(
            variant = %record.variant(),
            order_id = record.order_id(),
            "generic handler matched"
        );
        self.sink.emit(GENERIC_LINE)?;
        Ok(())
    }
}

/// Reacts only to [`Record::Unregistered`].
pub struct UnregisteredHandler {
    sink: Arc<dyn LineSink>,
}

impl UnregisteredHandler {
    /// Create a handler writing to `sink`.
    pub fn new(sink: Arc<dyn LineSink>) -> Self {
        Self { sink }
    }
}

impl Subscriber<Record> for UnregisteredHandler {
    fn process(&self, record: &Record) -> Result<(), BoxError> {
        match record {
            Record::Unregistered(customer) => {
                debug!(
                    order_id = customer.order_id(),
                    surname = customer.surname(),
                    "unregistered handler matched"
                );
                self.sink.emit(UNREGISTERED_LINE)?;
            }
            Record::Base(_) | Record::Registered(_) => {}
        }
        Ok(())
    }
}

/// Reacts only to [`Record::Registered`].
pub struct RegisteredHandler {
    sink: Arc<dyn LineSink>,
}

impl RegisteredHandler {
    /// Create a handler writing to `sink`.
    pub fn new(sink: Arc<dyn LineSink>) -> Self {
        Self { sink }
    }
}

impl Subscriber<Record> for RegisteredHandler {
    fn process(&self, record: &Record) -> Result<(), BoxError> {
        match record {
            Record::Registered(customer) => {
                debug!(
                    order_id = customer.order_id(),
                    customer_id = customer.customer_id(),
                    "registered handler matched"
                );
                self.sink.emit(REGISTERED_LINE)?;
            }
            Record::Base(_) | Record::Unregistered(_) => {}
        }
        Ok(())
    }
}

macro_rules! impl_debug {
    ($($handler:ident),*) => {
        $(
            impl fmt::Debug for $handler {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct(stringify!($handler)).finish_non_exhaustive()
                }
            }
        )*
    };
}

impl_debug!(GenericHandler, UnregisteredHandler, RegisteredHandler);

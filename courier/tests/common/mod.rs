#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use courier::{
    Broker, CustomerRecord, GenericHandler, Record, RegisteredCustomerRecord, RegisteredHandler,
    UnregisteredCustomerRecord, UnregisteredHandler, testing::RecordingSink,
};
use std::sync::Arc;

// ============================================================================
// Fixtures
// ============================================================================

pub fn visit() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

pub fn john_doe() -> Record {
    UnregisteredCustomerRecord::new(visit(), 1, "John", "Doe").into()
}

pub fn member_344() -> Record {
    RegisteredCustomerRecord::new(visit(), 2, 344).into()
}

pub fn walk_in() -> Record {
    CustomerRecord::new(visit(), 3).into()
}

/// Broker with [Generic, Unregistered, Registered] writing to one recorder.
pub fn wired_broker() -> (Broker<Record>, RecordingSink) {
    let sink = RecordingSink::new();
    let mut broker: Broker<Record> = Broker::new();
    broker.attach(Arc::new(GenericHandler::new(Arc::new(sink.clone()))));
    broker.attach(Arc::new(UnregisteredHandler::new(Arc::new(sink.clone()))));
    broker.attach(Arc::new(RegisteredHandler::new(Arc::new(sink.clone()))));
    (broker, sink)
}

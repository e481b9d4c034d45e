//! Routing customer records through a fully wired broker.

use courier::{
    Broker, DispatchError, GenericHandler, Record, Subscriber, UnregisteredCustomerRecord,
    handlers::{GENERIC_LINE, REGISTERED_LINE, UNREGISTERED_LINE},
    testing::{CountingSubscriber, FailingSubscriber, OrderRecordingSubscriber, RecordingSink},
};
use std::sync::{Arc, Mutex};

mod common;
use common::{john_doe, member_344, visit, walk_in, wired_broker};

#[test]
fn test_unregistered_record_hits_generic_then_unregistered() {
    let (broker, sink) = wired_broker();

    broker.route(&john_doe()).unwrap();

    assert_eq!(sink.lines(), vec![GENERIC_LINE, UNREGISTERED_LINE]);
}

#[test]
fn test_registered_record_hits_generic_then_registered() {
    let (broker, sink) = wired_broker();

    broker.route(&member_344()).unwrap();

    assert_eq!(sink.lines(), vec![GENERIC_LINE, REGISTERED_LINE]);
}

#[test]
fn test_base_record_hits_generic_only() {
    let (broker, sink) = wired_broker();

    broker.route(&walk_in()).unwrap();

    assert_eq!(sink.lines(), vec![GENERIC_LINE]);
}

#[test]
fn test_any_unregistered_record_never_triggers_registered_line() {
    let (broker, sink) = wired_broker();

    for (order_id, name) in [(10, "Ada"), (11, ""), (12, "Grace")] {
        sink.clear();
        let record: Record = UnregisteredCustomerRecord::new(visit(), order_id, name, "X").into();
        broker.route(&record).unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(!lines.iter().any(|l| l == REGISTERED_LINE));
    }
}

#[test]
fn test_reattaching_same_handler_is_noop() {
    let sink = RecordingSink::new();
    let generic: Arc<dyn Subscriber<Record>> =
        Arc::new(GenericHandler::new(Arc::new(sink.clone())));
    let mut broker: Broker<Record> = Broker::new();

    assert!(broker.attach(generic.clone()));
    assert!(!broker.attach(generic));
    assert_eq!(broker.len(), 1);

    broker.route(&john_doe()).unwrap();
    assert_eq!(sink.lines(), vec![GENERIC_LINE], "handler must run once");
}

#[test]
fn test_route_order_matches_attach_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let mut broker: Broker<Record> = Broker::new();

    // Subscribers are attached and executed in order
    for id in [3, 1, 2] {
        broker.attach(Arc::new(OrderRecordingSubscriber::new(id, order.clone())));
    }
    broker.route(&member_344()).unwrap();

    assert_eq!(
        *order.lock().unwrap(),
        vec![3, 1, 2],
        "Subscribers should execute in attach order"
    );
}

#[test]
fn test_failure_stops_dispatch() {
    let first = CountingSubscriber::new();
    let last = CountingSubscriber::new();
    let mut broker: Broker<Record> = Broker::new();
    broker.attach(Arc::new(first.clone()));
    broker.attach(Arc::new(FailingSubscriber::new("disk full")));
    broker.attach(Arc::new(last.clone()));

    let result = broker.route(&john_doe());

    match result {
        Err(DispatchError::Subscriber { index, source }) => {
            assert_eq!(index, 1);
            assert_eq!(source.to_string(), "disk full");
        }
        other => panic!("expected subscriber failure, got {other:?}"),
    }
    assert_eq!(first.count(), 1);
    assert_eq!(last.count(), 0, "Subscriber after the failure should NOT be called");
}

//! End-to-end run of the composition root.

use courier::{
    handlers::{GENERIC_LINE, REGISTERED_LINE, UNREGISTERED_LINE},
    run_demo,
    testing::RecordingSink,
};
use std::sync::Arc;

#[test]
fn test_demo_routes_unregistered_then_registered() {
    let sink = RecordingSink::new();

    run_demo(Arc::new(sink.clone())).unwrap();

    assert_eq!(
        sink.lines(),
        vec![
            GENERIC_LINE,
            UNREGISTERED_LINE,
            GENERIC_LINE,
            REGISTERED_LINE,
        ]
    );
}

#[test]
fn test_demo_literal_output() {
    let sink = RecordingSink::new();

    run_demo(Arc::new(sink.clone())).unwrap();

    assert_eq!(
        sink.lines().join("\n"),
        "Handler for all type of customers\n\
         Handler for non registered customer\n\
         Handler for all type of customers\n\
         Handler for registered customer"
    );
}

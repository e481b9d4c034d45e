use courier::{StdoutSink, demo::DemoError, logging::init_logging, run_demo};
use std::sync::Arc;

fn main() -> Result<(), DemoError> {
    init_logging();
    run_demo(Arc::new(StdoutSink))
}

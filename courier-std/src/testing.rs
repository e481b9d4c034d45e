//! Testing utilities for courier.
//!
//! # Features
//!
//! - [`RecordingSink`]: A line sink that keeps every emitted line
//! - [`RecordingSubscriber`]: A subscriber that records every value it receives
//! - [`OrderRecordingSubscriber`]: Pushes its id into a shared log when invoked
//! - [`CountingSubscriber`]: Counts invocations
//! - [`FailingSubscriber`]: Always fails, for exercising fail-fast delivery

use crate::sink::LineSink;
use courier_core::{BoxError, Message, Subscriber};
use std::{
    io,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

// ============================================================================
// Recording Sink
// ============================================================================

/// A line sink that records all lines written to it.
///
/// Clones share the same buffer, so keep one handle and give the other to
/// the code under test.
///
/// # Example
///
/// ```rust,ignore
/// let sink = RecordingSink::new();
/// let handler = GenericHandler::new(Arc::new(sink.clone()));
///
/// broker.route(&record)?;
/// assert_eq!(sink.lines().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the recorded lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Clear all recorded lines.
    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
    }
}

impl LineSink for RecordingSink {
    fn emit(&self, line: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(line.to_owned());
        Ok(())
    }
}

// ============================================================================
// Recording Subscriber
// ============================================================================

/// A subscriber that records all values it receives.
pub struct RecordingSubscriber<E: Clone> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E: Clone> RecordingSubscriber<E> {
    /// Create a new recording subscriber.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded values.
    pub fn events(&self) -> Vec<E> {
        self.events.lock().unwrap().clone()
    }

    /// Get the number of recorded values.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl<E: Clone> Default for RecordingSubscriber<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for RecordingSubscriber<E> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl<E: Message + Clone> Subscriber<E> for RecordingSubscriber<E> {
    fn process(&self, event: &E) -> Result<(), BoxError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

// ============================================================================
// Order Recording Subscriber
// ============================================================================

/// Pushes its `id` into a shared log each time it is invoked.
///
/// Attach several with distinct ids to observe dispatch order.
pub struct OrderRecordingSubscriber {
    id: usize,
    order: Arc<Mutex<Vec<usize>>>,
}

impl OrderRecordingSubscriber {
    /// Create a subscriber that records `id` into `order`.
    pub fn new(id: usize, order: Arc<Mutex<Vec<usize>>>) -> Self {
        Self { id, order }
    }
}

impl<E: Message> Subscriber<E> for OrderRecordingSubscriber {
    fn process(&self, _event: &E) -> Result<(), BoxError> {
        self.order.lock().unwrap().push(self.id);
        Ok(())
    }
}

// ============================================================================
// Counting Subscriber
// ============================================================================

/// A subscriber that counts invocations.
#[derive(Debug, Clone, Default)]
pub struct CountingSubscriber {
    count: Arc<AtomicUsize>,
}

impl CountingSubscriber {
    /// Create a new counting subscriber.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<E: Message> Subscriber<E> for CountingSubscriber {
    fn process(&self, _event: &E) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Subscriber
// ============================================================================

/// A subscriber that fails every time with a fixed message.
#[derive(Debug, Clone)]
pub struct FailingSubscriber {
    message: String,
}

impl FailingSubscriber {
    /// Create a subscriber that fails with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<E: Message> Subscriber<E> for FailingSubscriber {
    fn process(&self, _event: &E) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_clones_share_buffer() {
        let sink = RecordingSink::new();
        let handle = sink.clone();

        handle.emit("one").unwrap();
        handle.emit("two").unwrap();
        assert_eq!(sink.lines(), vec!["one", "two"]);

        sink.clear();
        assert!(handle.lines().is_empty());
    }

    #[test]
    fn recording_subscriber_keeps_values() {
        let sub = RecordingSubscriber::<String>::new();
        sub.process(&"a".to_string()).unwrap();
        sub.process(&"b".to_string()).unwrap();

        assert_eq!(sub.count(), 2);
        assert_eq!(sub.events(), vec!["a".to_string(), "b".to_string()]);
    }
}

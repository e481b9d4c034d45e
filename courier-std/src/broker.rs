//! Broker: an ordered subscriber registry with synchronous fan-out.

use crate::delivery::{DeliveryStrategy, SequentialDelivery};
use courier_core::{DispatchError, Message, Subscriber};
use std::{fmt, sync::Arc};

/// Routes every value to all attached subscribers, in attachment order.
///
/// Subscribers are de-duplicated by identity: attaching a clone of an `Arc`
/// that is already registered does nothing, while a separately constructed
/// subscriber of the same type is a new registration. There is no removal.
///
/// `attach` needs `&mut self` and `route` only `&self`, so all wiring happens
/// before the first value is routed.
///
/// # Example
/// ```ignore
/// let mut broker = Broker::new();
/// broker.attach(Arc::new(GenericHandler::new(sink)));
/// broker.route(&record)?;
/// ```
pub struct Broker<E: Message, D = SequentialDelivery> {
    subscribers: Vec<Arc<dyn Subscriber<E>>>,
    delivery: D,
}

impl<E: Message> Broker<E> {
    /// Create an empty broker with [`SequentialDelivery`].
    pub fn new() -> Self {
        Self::with_delivery(SequentialDelivery)
    }
}

impl<E: Message> Default for Broker<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Message, D: DeliveryStrategy> Broker<E, D> {
    /// Create an empty broker using the given delivery strategy.
    pub fn with_delivery(delivery: D) -> Self {
        Self {
            subscribers: Vec::new(),
            delivery,
        }
    }

    /// Append a subscriber unless this exact instance is already attached.
    ///
    /// Returns `true` if the subscriber was appended.
    pub fn attach(&mut self, subscriber: Arc<dyn Subscriber<E>>) -> bool {
        if self
            .subscribers
            .iter()
            .any(|existing| Arc::ptr_eq(existing, &subscriber))
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                subscribers = self.subscribers.len(),
                "subscriber already attached, ignoring"
            );
            return false;
        }

        self.subscribers.push(subscriber);
        #[cfg(feature = "tracing")]
        tracing::debug!(subscribers = self.subscribers.len(), "subscriber attached");
        true
    }

    /// Invoke every attached subscriber with `event`, in attachment order.
    ///
    /// Returns once all subscribers have run, or with the first failure.
    pub fn route(&self, event: &E) -> Result<(), DispatchError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("route", subscribers = self.subscribers.len()).entered();

        self.delivery
            .deliver(event, self.subscribers.iter().map(Arc::as_ref))
    }

    /// Number of attached subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether no subscriber is attached.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<E: Message, D: fmt::Debug> fmt::Debug for Broker<E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broker")
            .field("subscribers", &self.subscribers.len())
            .field("delivery", &self.delivery)
            .finish()
    }
}

//! Delivery strategies.
//!
//! A strategy decides how a borrowed value reaches an already resolved,
//! ordered list of subscribers.

use courier_core::{DispatchError, Message, Subscriber};

/// Strategy for delivering a value to a resolved set of subscribers.
pub trait DeliveryStrategy: Send + Sync {
    /// Deliver the value to the subscribers, in iteration order.
    fn deliver<'a, E, I>(&self, event: &E, subscribers: I) -> Result<(), DispatchError>
    where
        E: Message,
        I: Iterator<Item = &'a dyn Subscriber<E>>;
}

/// A sequential delivery strategy.
///
/// Invokes subscribers one by one. The first error aborts delivery; the
/// remaining subscribers are not invoked.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialDelivery;

impl DeliveryStrategy for SequentialDelivery {
    fn deliver<'a, E, I>(&self, event: &E, subscribers: I) -> Result<(), DispatchError>
    where
        E: Message,
        I: Iterator<Item = &'a dyn Subscriber<E>>,
    {
        for (index, subscriber) in subscribers.enumerate() {
            if let Err(source) = subscriber.process(event) {
                #[cfg(feature = "tracing")]
                tracing::warn!(index, error = %source, "subscriber failed, aborting dispatch");
                return Err(DispatchError::Subscriber { index, source });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingSubscriber, FailingSubscriber};

    #[test]
    fn delivers_to_every_subscriber() {
        let first = CountingSubscriber::new();
        let second = CountingSubscriber::new();
        let subs: Vec<&dyn Subscriber<String>> = vec![&first, &second];

        SequentialDelivery
            .deliver(&"ping".to_string(), subs.into_iter())
            .unwrap();

        assert_eq!(first.count(), 1);
        assert_eq!(second.count(), 1);
    }

    #[test]
    fn stops_at_first_failure() {
        let before = CountingSubscriber::new();
        let failing = FailingSubscriber::new("boom");
        let after = CountingSubscriber::new();
        let subs: Vec<&dyn Subscriber<String>> = vec![&before, &failing, &after];

        let err = SequentialDelivery
            .deliver(&"ping".to_string(), subs.into_iter())
            .unwrap_err();

        assert_eq!(err.index(), 1);
        assert_eq!(before.count(), 1);
        assert_eq!(after.count(), 0, "subscriber after the failure must not run");
    }

    #[test]
    fn empty_list_is_ok() {
        let subs: Vec<&dyn Subscriber<String>> = Vec::new();
        assert!(SequentialDelivery.deliver(&String::new(), subs.into_iter()).is_ok());
    }
}

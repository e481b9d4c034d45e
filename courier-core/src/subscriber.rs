//! # Subscriber
//!
//! The reacting end of a broker. A subscriber receives every routed value,
//! decides whether the value is one it recognizes, and performs its side
//! effect if so.
//!
//! # Contract
//!
//! - `process` borrows the value; it must not expect to keep it.
//! - Returning `Ok(())` covers both "handled" and "not mine".
//! - Returning `Err` aborts the remainder of the current dispatch.

use crate::{error::BoxError, message::Message};

/// A handler that reacts to routed values of type `E`.
///
/// The trait is object safe; brokers store subscribers as
/// `Arc<dyn Subscriber<E>>` and compare them by identity.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot process values of type `{E}`",
    label = "missing `Subscriber<{E}>` implementation",
    note = "Subscribers must implement `process` for the routed type `{E}`."
)]
pub trait Subscriber<E: Message>: Send + Sync + 'static {
    /// Inspects a routed value and reacts if it matches.
    fn process(&self, event: &E) -> Result<(), BoxError>;
}

// Blanket impl for closures
impl<F, E> Subscriber<E> for F
where
    E: Message,
    F: Fn(&E) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn process(&self, event: &E) -> Result<(), BoxError> {
        (self)(event)
    }
}

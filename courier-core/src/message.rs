//! Message trait for routed values.

/// A marker trait for values that can be routed through a broker.
///
/// Routed values are lent to every subscriber and may sit behind an `Arc`
/// in test doubles, so they must be `Send + Sync + 'static`. Domain types
/// usually get this impl from `#[derive(Message)]`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "Routed values must be thread-safe and static; derive or implement `Message`."
)]
pub trait Message: Send + Sync + 'static {}

// Plain text payloads, used by the generic test doubles.
impl Message for String {}

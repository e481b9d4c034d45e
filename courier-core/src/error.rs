//! Error types for courier.
//!
//! - [`DispatchError`] - Errors during routing
//! - [`BoxError`] - Erased subscriber failure

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while routing a value to subscribers.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A subscriber failed; subscribers after it were not invoked.
    #[error("subscriber #{index} failed")]
    Subscriber {
        /// Registration position of the failing subscriber.
        index: usize,
        /// The subscriber's own error.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// Registration position of the subscriber that failed.
    pub fn index(&self) -> usize {
        match self {
            DispatchError::Subscriber { index, .. } => *index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn subscriber_error_keeps_source() {
        let err = DispatchError::Subscriber {
            index: 2,
            source: "sink closed".into(),
        };

        assert_eq!(err.to_string(), "subscriber #2 failed");
        assert_eq!(err.index(), 2);
        assert_eq!(err.source().unwrap().to_string(), "sink closed");
    }
}

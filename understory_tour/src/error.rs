// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`Sequence::start`](crate::Sequence::start).

use thiserror::Error;

/// Reason a tour could not be started.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum TourError {
    /// The tour is already open.
    #[error("tour is already running")]
    AlreadyStarted,
    /// The tour has closed; a sequence runs exactly one session.
    #[error("tour has closed and cannot be restarted")]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_cause() {
        assert_eq!(TourError::AlreadyStarted.to_string(), "tour is already running");
        assert_eq!(
            TourError::Closed.to_string(),
            "tour has closed and cannot be restarted"
        );
    }

    #[test]
    fn is_a_core_error() {
        let err: &dyn core::error::Error = &TourError::Closed;
        assert!(err.source().is_none());
    }
}

use thiserror::Error;

/// Errors surfaced by the collections in this crate.
///
/// Every variant is a contract violation by the caller. None of them is
/// transient, so nothing in the crate retries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A required argument was missing or out of range.
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },

    /// The operation needs at least one element.
    #[error("There are no elements left in the container")]
    EmptyContainer,

    /// An iteration cursor was read while not positioned on an element.
    #[error("Invalid cursor state: {reason}")]
    InvalidState { reason: &'static str },
}

impl CollectionError {
    pub(crate) const fn invalid_argument(argument: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { argument, reason }
    }

    pub(crate) const fn invalid_state(reason: &'static str) -> Self {
        Self::InvalidState { reason }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = CollectionError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CollectionError::invalid_argument("capacity", "must not be negative");
        assert_eq!(
            err.to_string(),
            "Invalid argument `capacity`: must not be negative"
        );

        assert_eq!(
            CollectionError::EmptyContainer.to_string(),
            "There are no elements left in the container"
        );

        let err = CollectionError::invalid_state("enumeration has been completed");
        assert_eq!(
            err.to_string(),
            "Invalid cursor state: enumeration has been completed"
        );
    }
}

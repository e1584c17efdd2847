//! Per-slice loading state.
//!
//! Each fetched collection a view shows lives in its own `LoadState`, so
//! sections render independently as their data arrives.

use crate::error::ServiceError;

/// Progress of one fetch as the view sees it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Request in flight
    #[default]
    Pending,
    /// Data arrived
    Ready(T),
    /// Request failed; carries the displayable error
    Failed(ServiceError),
}

impl<T> LoadState<T> {
    /// Borrow the data, if it arrived.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the error, if the request failed.
    pub fn error(&self) -> Option<&ServiceError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Still waiting?
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl<T> From<Result<T, ServiceError>> for LoadState<T> {
    fn from(result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::Operation;

    #[test]
    fn starts_pending() {
        let state: LoadState<Vec<u8>> = LoadState::default();
        assert!(state.is_pending());
        assert!(state.ready().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn converts_from_results() {
        let ok: LoadState<u8> = Ok(3).into();
        assert_eq!(ok.ready(), Some(&3));

        let failed: LoadState<u8> = Err(ServiceError::ServiceUnavailable {
            operation: Operation::FetchMeta,
            reason: "down".into(),
        })
        .into();
        assert!(failed.error().is_some_and(ServiceError::is_transient));
        assert!(!failed.is_pending());
    }
}

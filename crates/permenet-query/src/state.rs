//! Per-query lifecycle state with stale-response suppression.

use std::sync::Mutex;
use tracing::debug;

use permenet_common::Result;

/// Lifecycle state of one remote query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    NotStarted,
    Loading,
    Error(String),
    Success(T),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Error(message) => Some(message),
            _ => None,
        }
    }
}

struct SlotInner<T> {
    version: u64,
    state: QueryState<T>,
}

/// Holds the state of one query kind across re-issues.
///
/// Each in-flight request carries the store version its argument was
/// derived from. `begin` moves the slot forward to a newer version;
/// `apply` drops any result whose version is older than the slot's.
/// This is the logical-cancellation rule that keeps a slow response for
/// an old descriptor vector from overwriting a newer one.
pub struct QuerySlot<T> {
    inner: Mutex<SlotInner<T>>,
}

impl<T: Clone> QuerySlot<T> {
    pub fn new() -> Self {
        Self { inner: Mutex::new(SlotInner { version: 0, state: QueryState::NotStarted }) }
    }

    /// Mark a request at `version` as in flight. A `begin` for an older
    /// version than the slot already tracks is ignored.
    pub fn begin(&self, version: u64) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if version < inner.version {
            debug!(version, current = inner.version, "ignoring stale begin");
            return;
        }
        inner.version = version;
        inner.state = QueryState::Loading;
    }

    /// Apply the outcome of the request issued at `version`. Results for
    /// superseded versions are discarded on arrival.
    pub fn apply(&self, version: u64, result: Result<T>) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if version < inner.version {
            debug!(version, current = inner.version, "discarding stale response");
            return;
        }
        inner.version = version;
        inner.state = match result {
            Ok(data) => QueryState::Success(data),
            Err(e) => QueryState::Error(e.to_string()),
        };
    }

    /// Current state, as an owned copy.
    pub fn get(&self) -> QueryState<T> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).state.clone()
    }
}

impl<T: Clone> Default for QuerySlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use permenet_common::PermenetError;

    #[test]
    fn test_lifecycle_not_started_to_success() {
        let slot: QuerySlot<f64> = QuerySlot::new();
        assert_eq!(slot.get(), QueryState::NotStarted);

        slot.begin(1);
        assert!(slot.get().is_loading());

        slot.apply(1, Ok(2.5));
        assert_eq!(slot.get(), QueryState::Success(2.5));
    }

    #[test]
    fn test_error_is_captured_as_state() {
        let slot: QuerySlot<f64> = QuerySlot::new();
        slot.begin(1);
        slot.apply(1, Err(PermenetError::Query("model unavailable".to_string())));
        assert_eq!(slot.get().error(), Some("Query error: model unavailable"));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let slot: QuerySlot<f64> = QuerySlot::new();
        slot.begin(1);
        slot.begin(2);

        // The older request resolves after the newer one.
        slot.apply(2, Ok(20.0));
        slot.apply(1, Ok(10.0));

        assert_eq!(slot.get(), QueryState::Success(20.0));
    }

    #[test]
    fn test_stale_response_does_not_clear_loading() {
        let slot: QuerySlot<f64> = QuerySlot::new();
        slot.begin(1);
        slot.begin(2);

        // Old result arrives while the newer request is still in flight.
        slot.apply(1, Ok(10.0));
        assert!(slot.get().is_loading());

        slot.apply(2, Ok(20.0));
        assert_eq!(slot.get(), QueryState::Success(20.0));
    }

    #[test]
    fn test_stale_begin_is_ignored() {
        let slot: QuerySlot<f64> = QuerySlot::new();
        slot.begin(3);
        slot.apply(3, Ok(30.0));

        slot.begin(2);
        assert_eq!(slot.get(), QueryState::Success(30.0));
    }
}

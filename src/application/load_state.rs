//! Tri-state load tracking for store-backed views.
//!
//! A view issues a request, gets a ticket, and later resolves it. Only the
//! most recently issued ticket may resolve; results for superseded tickets
//! are discarded so a slow earlier request never overwrites a newer one.

/// State of one view's data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Error(String),
    Success(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Handle for one dispatched load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// Holds a view's `LoadState` and arbitrates between overlapping loads.
#[derive(Debug, Clone)]
pub struct LoadTracker<T> {
    state: LoadState<T>,
    latest: u64,
}

impl<T> Default for LoadTracker<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Loading,
            latest: 0,
        }
    }
}

impl<T> LoadTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn into_state(self) -> LoadState<T> {
        self.state
    }

    /// Starts a load, superseding any in flight.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.state = LoadState::Loading;
        RequestTicket(self.latest)
    }

    /// Applies a result. Returns `false` (and changes nothing) when the
    /// ticket has been superseded.
    pub fn resolve<E: std::fmt::Display>(&mut self, ticket: RequestTicket, result: Result<T, E>) -> bool {
        if ticket.0 != self.latest {
            tracing::debug!(ticket = ticket.0, latest = self.latest, "discarding stale load result");
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Success(value),
            Err(err) => LoadState::Error(err.to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        let tracker: LoadTracker<u32> = LoadTracker::new();
        assert!(tracker.state().is_loading());
    }

    #[test]
    fn resolves_success_and_error() {
        let mut tracker: LoadTracker<u32> = LoadTracker::new();
        let ticket = tracker.begin();
        assert!(tracker.resolve::<String>(ticket, Ok(7)));
        assert_eq!(tracker.state().value(), Some(&7));

        let ticket = tracker.begin();
        assert!(tracker.resolve(ticket, Err::<u32, _>("store down")));
        assert_eq!(tracker.state().error(), Some("store down"));
    }

    #[test]
    fn into_state_yields_resolved_value() {
        let mut tracker: LoadTracker<Vec<u32>> = LoadTracker::new();
        let ticket = tracker.begin();
        tracker.resolve::<String>(ticket, Ok(vec![1, 2]));
        assert_eq!(tracker.into_state(), LoadState::Success(vec![1, 2]));
    }

    #[test]
    fn last_dispatched_wins() {
        let mut tracker = LoadTracker::new();
        let stale = tracker.begin();
        let fresh = tracker.begin();

        assert!(tracker.resolve::<String>(fresh, Ok("new")));
        assert!(!tracker.resolve::<String>(stale, Ok("old")));
        assert_eq!(tracker.state(), &LoadState::Success("new"));
    }

    #[test]
    fn stale_result_does_not_end_newer_loading() {
        let mut tracker: LoadTracker<u32> = LoadTracker::new();
        let stale = tracker.begin();
        let _fresh = tracker.begin();
        assert!(!tracker.resolve(stale, Err::<u32, _>("late failure")));
        assert!(tracker.state().is_loading());
    }
}

//! Latest-wins holder for displayed values.
//!
//! Rapid successive location changes can start overlapping fetches, and the
//! responses may arrive out of order. Each fetch takes a token before it
//! starts; a response only becomes the displayed value if no newer token has
//! already published. Stale responses are discarded, never displayed.

use std::sync::Mutex;

/// Opaque, monotonically increasing fetch identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug)]
struct Inner<T> {
    next_token: u64,
    published: Option<(RequestToken, T)>,
}

/// Shared holder with a defined update contract: `begin_request` before the
/// fetch, `publish` with the same token after it.
#[derive(Debug)]
pub struct DisplayState<T> {
    inner: Mutex<Inner<T>>,
}

impl<T> Default for DisplayState<T> {
    fn default() -> Self {
        Self { inner: Mutex::new(Inner { next_token: 0, published: None }) }
    }
}

impl<T: Clone> DisplayState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<T>> {
        // A poisoned lock means a panic mid-update; the state holds only
        // plain values, so continuing with the recovered guard is sound.
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Issue the token for a new fetch. Later tokens always beat earlier
    /// ones, regardless of response arrival order.
    pub fn begin_request(&self) -> RequestToken {
        let mut inner = self.lock();
        let token = RequestToken(inner.next_token);
        inner.next_token += 1;
        token
    }

    /// Offer a value for display. Returns whether it won; a `false` return
    /// means a newer fetch already published and this value was dropped.
    pub fn publish(&self, token: RequestToken, value: T) -> bool {
        let mut inner = self.lock();
        match &inner.published {
            Some((latest, _)) if *latest >= token => false,
            _ => {
                inner.published = Some((token, value));
                true
            }
        }
    }

    /// The most recently won value, if any fetch has published yet.
    pub fn current(&self) -> Option<T> {
        self.lock().published.as_ref().map(|(_, value)| value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_increase_monotonically() {
        let state: DisplayState<&str> = DisplayState::new();
        let a = state.begin_request();
        let b = state.begin_request();
        let c = state.begin_request();
        assert!(a < b && b < c);
    }

    #[test]
    fn in_order_responses_each_win() {
        let state = DisplayState::new();
        let first = state.begin_request();
        let second = state.begin_request();

        assert!(state.publish(first, "first"));
        assert!(state.publish(second, "second"));
        assert_eq!(state.current(), Some("second"));
    }

    #[test]
    fn stale_response_is_discarded() {
        let state = DisplayState::new();
        let first = state.begin_request();
        let second = state.begin_request();

        // Later fetch answers before the earlier one.
        assert!(state.publish(second, "second"));
        assert!(!state.publish(first, "first"));
        assert_eq!(state.current(), Some("second"));
    }

    #[test]
    fn duplicate_publish_of_same_token_is_rejected() {
        let state = DisplayState::new();
        let token = state.begin_request();

        assert!(state.publish(token, "value"));
        assert!(!state.publish(token, "value again"));
        assert_eq!(state.current(), Some("value"));
    }

    #[test]
    fn empty_state_has_no_current_value() {
        let state: DisplayState<String> = DisplayState::new();
        assert_eq!(state.current(), None);
    }
}

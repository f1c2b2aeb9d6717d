//! Trailing-edge debounce with a single pending slot.
//!
//! The caller owns the actual timer. Each [`Debouncer::schedule`] replaces
//! the pending value and hands out a fresh token; when a timer fires, only
//! the token of the latest schedule yields the value. Timers armed for
//! replaced schedules fire into nothing.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceToken(u64);

#[derive(Debug)]
struct Pending<T> {
    token: DebounceToken,
    value: T,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    next_token: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            next_token: 0,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace whatever is pending. Arm a timer of [`Self::quiet_period`]
    /// for the returned token.
    pub fn schedule(&mut self, value: T) -> DebounceToken {
        let token = DebounceToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(Pending { token, value });
        token
    }

    /// Called when the timer for `token` elapses
    pub fn fire(&mut self, token: DebounceToken) -> Option<T> {
        match self.pending.take() {
            Some(pending) if pending.token == token => Some(pending.value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_collapses_to_last_value() {
        let mut debouncer = Debouncer::new(Duration::from_millis(75));

        let first = debouncer.schedule("a");
        let second = debouncer.schedule("b");
        let third = debouncer.schedule("c");

        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.fire(third), Some("c"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_fires_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(75));

        let token = debouncer.schedule(1);
        assert_eq!(debouncer.fire(token), Some(1));
        assert_eq!(debouncer.fire(token), None);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut debouncer = Debouncer::new(Duration::from_millis(75));

        let token = debouncer.schedule(1);
        assert_eq!(debouncer.cancel(), Some(1));
        assert_eq!(debouncer.fire(token), None);
        assert_eq!(debouncer.quiet_period(), Duration::from_millis(75));
    }
}

use std::time::{Duration, Instant};

/// A cancellable one-shot deadline for the error banner.
///
/// Arming replaces any pending deadline, so re-arming on every message
/// change gives the debounce-on-change behavior: only the most recent
/// message's deadline can ever fire. Cancelling drops the deadline, and
/// since this is plain data there is nothing to release on teardown.
#[derive(Debug, Default)]
pub struct ErrorTimer {
    deadline: Option<Instant>,
}

impl ErrorTimer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    pub fn arm(&mut self, now: Instant, ttl: Duration) {
        self.deadline = Some(now + ttl);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once the armed deadline has passed. Never true after cancel.
    pub fn expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_timer_never_expires() {
        let timer = ErrorTimer::new();
        assert!(!timer.is_armed());
        assert!(!timer.expired(Instant::now()));
    }

    #[test]
    fn test_armed_timer_expires_after_ttl() {
        let mut timer = ErrorTimer::new();
        let now = Instant::now();
        timer.arm(now, Duration::from_secs(3));

        assert!(timer.is_armed());
        assert!(!timer.expired(now));
        assert!(!timer.expired(now + Duration::from_secs(2)));
        assert!(timer.expired(now + Duration::from_secs(3)));
        assert!(timer.expired(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_cancel_drops_pending_deadline() {
        let mut timer = ErrorTimer::new();
        let now = Instant::now();
        timer.arm(now, Duration::from_secs(3));
        timer.cancel();

        assert!(!timer.is_armed());
        assert!(!timer.expired(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_rearming_replaces_deadline() {
        let mut timer = ErrorTimer::new();
        let now = Instant::now();
        timer.arm(now, Duration::from_secs(3));
        // Re-arm two seconds in; the old deadline must not fire.
        let later = now + Duration::from_secs(2);
        timer.arm(later, Duration::from_secs(3));

        assert!(!timer.expired(now + Duration::from_secs(3)));
        assert!(timer.expired(later + Duration::from_secs(3)));
    }
}

//! User-facing failure notification.

/// Channel notified once for every thrown failure.
///
/// The executor always logs; the sink is the user-visible side of the
/// failure path and is optional. Failure-status responses are routed to the
/// caller's error callback instead and never reach the sink.
pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}

/// Closures taking the failure message work as sinks directly.
impl<F> AlertSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn alert(&self, message: &str) {
        (self)(message)
    }
}

//! Owned timer tasks.
//!
//! Every delayed callback in the portfolio (typing ticks, cursor blink,
//! status auto-dismiss) runs as a tokio task held by a [`TimerGuard`].
//! Dropping the guard aborts the task, which is how views cancel their
//! timers on teardown.

use std::future::Future;

use tokio::task::JoinHandle;

/// A spawned timer task that is aborted when the guard goes away.
#[derive(Debug, Default)]
pub struct TimerGuard {
    handle: Option<JoinHandle<()>>,
}

impl TimerGuard {
    /// A guard with nothing scheduled.
    pub fn idle() -> Self {
        Self { handle: None }
    }

    /// Spawn `task` on the current tokio runtime and own it.
    pub fn spawn<F>(task: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: Some(tokio::spawn(task)),
        }
    }

    /// Abort the task if it is still pending. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether a task is scheduled and has not finished yet.
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn dropped_guard_never_fires() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let guard = TimerGuard::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        });
        assert!(guard.is_active());

        drop(guard);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn guard_fires_when_kept() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let _guard = TimerGuard::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(fired.load(Ordering::SeqCst));
    }

    #[test]
    fn idle_guard_is_inactive() {
        let mut guard = TimerGuard::idle();
        assert!(!guard.is_active());
        guard.cancel();
        assert!(!guard.is_active());
    }
}

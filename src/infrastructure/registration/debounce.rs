//! Cancellable debounced task scheduling

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

/// A single-slot debounced task: scheduling cancels whatever was pending
/// and starts the delay over. The task body runs only if the full delay
/// elapses without another `schedule` call.
#[derive(Debug)]
pub struct DebouncedTask {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl DebouncedTask {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending run and schedule `task` after the delay.
    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Cancel the pending run, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl Drop for DebouncedTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_task_runs_after_delay() {
        let debounce = DebouncedTask::new(Duration::from_millis(500));
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&fired);
        debounce.schedule(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_supersedes_pending_run() {
        let debounce = DebouncedTask::new(Duration::from_millis(500));
        let fired = Arc::new(AtomicUsize::new(0));

        // Five schedules, 100ms apart: only the last survives.
        for _ in 0..5 {
            let counter = Arc::clone(&fired);
            debounce.schedule(async move {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_run() {
        let debounce = DebouncedTask::new(Duration::from_millis(500));
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&fired);
        debounce.schedule(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        debounce.cancel();

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}

//! Deferred reply scheduling
//!
//! Each reply is a tokio task that sleeps for a fixed delay and then runs its
//! job. Every task carries a child of the scheduler's root
//! [`CancellationToken`]; tasks are independent, so a later submission never
//! cancels or coalesces an earlier one.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use uuid::Uuid;

/// Decrements the pending counter when the task's future is dropped, whether
/// it completed or was cancelled.
struct PendingGuard(Arc<AtomicUsize>);

impl PendingGuard {
    fn new(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::Relaxed);
        Self(counter)
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        let _ = self
            .0
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| Some(v.saturating_sub(1)));
    }
}

/// Handle to one scheduled reply
pub struct ReplyHandle {
    id: Uuid,
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl ReplyHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Prevent the reply from firing. No effect once the job has run.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the task to either run or be cancelled
    pub async fn finished(self) {
        if let Err(e) = self.task.await {
            warn!("Reply task {} failed: {}", self.id, e);
        }
    }
}

/// Spawns delayed jobs sharing a root cancellation token
pub struct ReplyScheduler {
    root: CancellationToken,
    pending: Arc<AtomicUsize>,
}

impl ReplyScheduler {
    pub fn new() -> Self {
        Self {
            root: CancellationToken::new(),
            pending: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Run `job` after `delay` unless cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, delay: Duration, job: F) -> ReplyHandle
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let id = Uuid::new_v4();
        let token = self.root.child_token();
        let guard = PendingGuard::new(self.pending.clone());

        let task_token = token.clone();
        let task = tokio::spawn(async move {
            let _guard = guard;
            tokio::select! {
                biased;
                _ = task_token.cancelled() => {
                    debug!("Reply {} cancelled before firing", id);
                }
                _ = async {
                    tokio::time::sleep(delay).await;
                    job.await;
                } => {
                    debug!("Reply {} delivered", id);
                }
            }
        });

        debug!("Scheduled reply {} in {:?}", id, delay);
        ReplyHandle { id, token, task }
    }

    /// Replies scheduled but not yet delivered or cancelled
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Relaxed)
    }

    /// Cancel every outstanding reply and any scheduled later
    pub fn shutdown(&self) {
        self.root.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.root.is_cancelled()
    }
}

impl Default for ReplyScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;

    #[tokio::test(start_paused = true)]
    async fn test_job_runs_after_delay() {
        let scheduler = ReplyScheduler::new();
        let fired = Arc::new(AtomicBool::new(false));

        let flag = fired.clone();
        let handle = scheduler.schedule(Duration::from_millis(500), async move {
            flag.store(true, Ordering::SeqCst);
        });
        assert_eq!(scheduler.pending(), 1);

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(!fired.load(Ordering::SeqCst));

        handle.finished().await;
        assert!(fired.load(Ordering::SeqCst));
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_one_of_two() {
        let scheduler = ReplyScheduler::new();
        let count = Arc::new(AtomicUsize::new(0));

        let c1 = count.clone();
        let first = scheduler.schedule(Duration::from_millis(500), async move {
            c1.fetch_add(1, Ordering::SeqCst);
        });
        let c2 = count.clone();
        let second = scheduler.schedule(Duration::from_millis(500), async move {
            c2.fetch_add(10, Ordering::SeqCst);
        });
        assert_ne!(first.id(), second.id());

        first.cancel();
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());

        first.finished().await;
        second.finished().await;
        assert_eq!(count.load(Ordering::SeqCst), 10);
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_everything() {
        let scheduler = ReplyScheduler::new();
        let count = Arc::new(AtomicUsize::new(0));

        let handles: Vec<ReplyHandle> = (0..3)
            .map(|_| {
                let c = count.clone();
                scheduler.schedule(Duration::from_millis(500), async move {
                    c.fetch_add(1, Ordering::SeqCst);
                })
            })
            .collect();
        assert_eq!(scheduler.pending(), 3);

        scheduler.shutdown();
        assert!(scheduler.is_shut_down());
        for handle in handles {
            handle.finished().await;
        }

        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.pending(), 0);
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-filename mutual exclusion for read-modify-write cycles. Different
/// files never contend; the guard releases on drop.
#[derive(Clone, Default)]
pub struct FileLocks {
    inner: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl FileLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, filename: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().await;
            // Entries only the map still references are idle
            map.retain(|_, l| Arc::strong_count(l) > 1);
            map.entry(filename.to_string()).or_default().clone()
        };
        lock.lock_owned().await
    }

    #[cfg(test)]
    pub async fn tracked(&self) -> usize {
        self.inner.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn same_file_waits_for_release() {
        let locks = FileLocks::new();
        let first = locks.acquire("a.md").await;

        let acquired = Arc::new(AtomicBool::new(false));
        let handle = {
            let locks = locks.clone();
            let acquired = acquired.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire("a.md").await;
                acquired.store(true, Ordering::SeqCst);
            })
        };

        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(!acquired.load(Ordering::SeqCst));

        drop(first);
        handle.await.unwrap();
        assert!(acquired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn different_files_are_independent() {
        let locks = FileLocks::new();
        let _a = locks.acquire("a.md").await;
        let _b = locks.acquire("b.md").await;
        assert_eq!(locks.tracked().await, 2);
    }

    #[tokio::test]
    async fn idle_entries_are_pruned() {
        let locks = FileLocks::new();
        drop(locks.acquire("a.md").await);
        drop(locks.acquire("b.md").await);
        let _c = locks.acquire("c.md").await;
        assert_eq!(locks.tracked().await, 1);
    }
}

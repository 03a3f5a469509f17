use std::{collections::HashMap, future::Future};

use tokio::task::JoinHandle;

/// Background jobs keyed by name. Spawning under a key that is still running
/// aborts the older job.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<F>(&mut self, key: &str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.tasks.insert(key.to_string(), tokio::spawn(task)) {
            handle.abort();
        }
    }

    pub fn abort(&mut self, key: &str) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
        self.tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn respawn_aborts_previous_task() {
        let mut tasks = TaskManager::new();
        let (tx, rx) = flume::unbounded::<u8>();

        let first = tx.clone();
        tasks.spawn("job", async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let _ = first.send(1);
        });
        tasks.spawn("job", async move {
            let _ = tx.send(2);
        });

        assert_eq!(rx.recv_async().await.unwrap(), 2);
        // The first job was aborted, so its sender is gone and the channel closes.
        assert!(rx.recv_async().await.is_err());
    }

    #[tokio::test]
    async fn abort_stops_a_running_task() {
        let mut tasks = TaskManager::new();
        let (tx, rx) = flume::unbounded::<u8>();
        tasks.spawn("sleep", async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let _ = tx.send(1);
        });
        tasks.abort("sleep");
        assert!(rx.recv_async().await.is_err());
    }
}

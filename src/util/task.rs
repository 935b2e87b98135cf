use std::collections::HashMap;

use tokio::task::JoinHandle;
use tracing::debug;

/// Keyed registry of background tasks. At most one task lives under a key:
/// spawning under an occupied key aborts the previous task.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    pub fn spawn(&mut self, key: &'static str, task: JoinHandle<()>) {
        if let Some(previous) = self.tasks.insert(key, task) {
            debug!(task = key, "replacing running task");
            previous.abort();
        }
    }

    pub fn abort(&mut self, key: &'static str) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.tasks.get(key).is_some_and(|h| !h.is_finished())
    }

    /// Number of registered tasks that have not completed yet.
    pub fn pending(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.abort_all();
    }
}

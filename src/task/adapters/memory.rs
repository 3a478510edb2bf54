//! In-memory repository adapter for the task persistence port.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::TaskId,
    ports::{TaskRecord, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identity is assigned from a monotonically increasing counter, so keying
/// the map by id keeps `find_all` in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    records: BTreeMap<i64, TaskRecord>,
    next_id: i64,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned_lock(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, record: TaskRecord) -> TaskRepositoryResult<TaskRecord> {
        let mut state = self.state.write().map_err(poisoned_lock)?;
        match record.id {
            None => {
                let assigned = TaskId::new(state.next_id);
                state.next_id += 1;
                let stored = TaskRecord {
                    id: Some(assigned),
                    ..record
                };
                state.records.insert(assigned.value(), stored.clone());
                Ok(stored)
            }
            Some(id) => {
                if !state.records.contains_key(&id.value()) {
                    return Err(TaskRepositoryError::MissingEntry(id));
                }
                state.records.insert(id.value(), record.clone());
                Ok(record)
            }
        }
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<TaskRecord>> {
        let state = self.state.read().map_err(poisoned_lock)?;
        Ok(state.records.get(&id.value()).cloned())
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<TaskRecord>> {
        let state = self.state.read().map_err(poisoned_lock)?;
        Ok(state.records.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(poisoned_lock)?;
        Ok(state.records.remove(&id.value()).is_some())
    }
}

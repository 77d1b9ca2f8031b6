//! In-memory board for hosts without a task store, and for tests.

use crate::task::{
    domain::{Task, TaskFields, TaskId, TaskStatus},
    ports::TaskBoard,
};
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned by board-owned operations of the in-memory board.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InMemoryBoardError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Thread-safe in-memory task board.
///
/// Tasks are kept in creation order. Identifiers and creation timestamps are
/// assigned here, never by dialogs.
#[derive(Debug, Clone)]
pub struct InMemoryTaskBoard<C>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryBoardState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    tasks: Vec<Task>,
    open_signals: Vec<bool>,
}

impl<C> InMemoryTaskBoard<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty board.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryBoardState::default())),
            clock,
        }
    }

    /// Adds an existing task, replacing any task with the same identifier.
    pub fn insert(&self, task: Task) {
        let mut state = self.write();
        upsert(&mut state.tasks, task);
    }

    /// Returns all tasks in creation order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.read().tasks.clone()
    }

    /// Returns the tasks in one board column.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Vec<Task> {
        self.read()
            .tasks
            .iter()
            .filter(|task| task.status() == status)
            .cloned()
            .collect()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<Task> {
        self.read().tasks.iter().find(|task| task.id() == id).cloned()
    }

    /// Removes a task, typically in response to a dialog delete request.
    ///
    /// # Errors
    ///
    /// Returns [`InMemoryBoardError::NotFound`] when no task has `id`.
    pub fn remove_task(&self, id: TaskId) -> Result<Task, InMemoryBoardError> {
        let mut state = self.write();
        let position = state
            .tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(InMemoryBoardError::NotFound(id))?;
        Ok(state.tasks.remove(position))
    }

    /// Returns every open/close signal received from dialogs, oldest first.
    #[must_use]
    pub fn open_signals(&self) -> Vec<bool> {
        self.read().open_signals.clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, InMemoryBoardState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, InMemoryBoardState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Replaces the task with the same identifier or appends it.
fn upsert(tasks: &mut Vec<Task>, task: Task) -> bool {
    if let Some(existing) = tasks.iter_mut().find(|stored| stored.id() == task.id()) {
        *existing = task;
        return true;
    }
    tasks.push(task);
    false
}

impl<C> TaskBoard for InMemoryTaskBoard<C>
where
    C: Clock + Send + Sync,
{
    fn create_task(&self, fields: TaskFields) {
        let task = Task::from_fields(TaskId::new(), fields, self.clock.utc());
        debug!(task_id = %task.id(), "stored new task");
        self.write().tasks.push(task);
    }

    fn update_task(&self, task: Task) {
        let task_id = task.id();
        let mut state = self.write();
        if !upsert(&mut state.tasks, task) {
            warn!(task_id = %task_id, "update for unknown task stored as new");
        }
    }

    fn open_changed(&self, open: bool) {
        self.write().open_signals.push(open);
    }
}

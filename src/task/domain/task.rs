//! Board-owned task records and the normalised fields a commit produces.

use super::{TagSelection, TaskId, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Normalised task fields produced by a successful validation.
///
/// This is the payload of the creation entry point: the title is trimmed and
/// non-empty, the description is trimmed, and `tags` is absent rather than
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    /// Trimmed, non-empty title.
    pub title: TaskTitle,
    /// Trimmed description, possibly empty.
    pub description: String,
    /// Selected status.
    pub status: TaskStatus,
    /// Selected tags, absent when nothing is selected.
    #[serde(
        default,
        deserialize_with = "deserialize_present_tags",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<TagSelection>,
}

/// Task record owned by the board.
///
/// The dialog never sets `id` or `created_at`; it only reads them and carries
/// them through edits unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    #[serde(
        default,
        deserialize_with = "deserialize_present_tags",
        skip_serializing_if = "Option::is_none"
    )]
    tags: Option<TagSelection>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Stored task identifier.
    pub id: TaskId,
    /// Stored title.
    pub title: TaskTitle,
    /// Stored description.
    pub description: String,
    /// Stored status.
    pub status: TaskStatus,
    /// Stored tags; an empty selection is normalised to absent.
    pub tags: Option<TagSelection>,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task from committed fields with board-assigned identity.
    #[must_use]
    pub fn from_fields(id: TaskId, fields: TaskFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            status: fields.status,
            tags: fields.tags.and_then(TagSelection::into_present),
            created_at,
        }
    }

    /// Reconstructs a task from storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            tags: data.tags.and_then(TagSelection::into_present),
            created_at: data.created_at,
        }
    }

    /// Returns a copy of this task with the editable fields replaced.
    ///
    /// Identity and creation time are kept verbatim.
    #[must_use]
    pub fn with_fields(&self, fields: TaskFields) -> Self {
        Self::from_fields(self.id, fields, self.created_at)
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the selected tags, if any.
    #[must_use]
    pub const fn tags(&self) -> Option<&TagSelection> {
        self.tags.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Reads an optional tag list, treating an empty list as absent.
fn deserialize_present_tags<'de, D>(deserializer: D) -> Result<Option<TagSelection>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TagSelection>::deserialize(deserializer)?.and_then(TagSelection::into_present))
}

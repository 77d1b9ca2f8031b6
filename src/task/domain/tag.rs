//! Fixed tag vocabulary and ordered tag selections.

use super::ParseTagError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label from the fixed board vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Visual design work.
    Design,
    /// User interface and experience work.
    #[serde(rename = "UI/UX")]
    UiUx,
    /// Development work.
    Dev,
    /// Testing work.
    Testing,
}

/// Allowed tags in the order selectors enumerate them.
pub const TAG_VOCABULARY: [Tag; 4] = [Tag::Design, Tag::UiUx, Tag::Dev, Tag::Testing];

impl Tag {
    /// Returns the tag name as shown to users and stored by the board.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Design => "Design",
            Self::UiUx => "UI/UX",
            Self::Dev => "Dev",
            Self::Testing => "Testing",
        }
    }
}

impl TryFrom<&str> for Tag {
    type Error = ParseTagError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        TAG_VOCABULARY
            .into_iter()
            .find(|tag| tag.as_str() == value.trim())
            .ok_or_else(|| ParseTagError(value.to_owned()))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of selected tags.
///
/// Membership is what matters; insertion order is kept so chips render in a
/// stable order. A tag appears at most once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Tag>", into = "Vec<Tag>")]
pub struct TagSelection(Vec<Tag>);

impl TagSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns `true` when `tag` is selected.
    #[must_use]
    pub fn contains(&self, tag: Tag) -> bool {
        self.0.contains(&tag)
    }

    /// Removes `tag` if selected, otherwise appends it.
    pub fn toggle(&mut self, tag: Tag) {
        if let Some(position) = self.0.iter().position(|selected| *selected == tag) {
            self.0.remove(position);
        } else {
            self.0.push(tag);
        }
    }

    /// Returns `true` when no tag is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of selected tags.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the selected tags in selection order.
    #[must_use]
    pub fn as_slice(&self) -> &[Tag] {
        &self.0
    }

    /// Iterates over the selected tags in selection order.
    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.0.iter().copied()
    }

    /// Returns `true` when both selections hold the same tags, in any order.
    #[must_use]
    pub fn same_members(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|tag| other.contains(tag))
    }

    /// Converts the selection into its payload form: absent when empty.
    #[must_use]
    pub fn into_present(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

impl FromIterator<Tag> for TagSelection {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut selection = Self::new();
        for tag in iter {
            if !selection.contains(tag) {
                selection.0.push(tag);
            }
        }
        selection
    }
}

impl From<Vec<Tag>> for TagSelection {
    fn from(tags: Vec<Tag>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSelection> for Vec<Tag> {
    fn from(selection: TagSelection) -> Self {
        selection.0
    }
}

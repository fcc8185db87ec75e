//! Storage Trait
//!
//! This module defines the `Storage` trait, which provides an interface for story storage
//! backends.
//!
//! All methods return a `Result` to handle potential storage errors.

use crate::error_handling::types::StorageError;
use crate::story_management::story::StoryRecord;

/// The `Storage` trait defines the interface for story storage backends.
pub trait Storage: Send + Sync {
    /// Inserts or replaces a story under its id.
    fn save_story(&self, story: &StoryRecord) -> Result<(), StorageError>;

    /// Retrieves a story by id. `Ok(None)` when the id is unknown.
    fn get_story(&self, id: &str) -> Result<Option<StoryRecord>, StorageError>;

    /// Whether a story with this id is stored.
    fn contains_story(&self, id: &str) -> Result<bool, StorageError>;

    /// Applies `update` to the stored story in place.
    ///
    /// Returns `Ok(false)` without calling `update` when the id is unknown.
    fn update_story(
        &self,
        id: &str,
        update: &mut dyn FnMut(&mut StoryRecord),
    ) -> Result<bool, StorageError>;

    /// Number of stored stories.
    fn story_count(&self) -> Result<usize, StorageError>;
}

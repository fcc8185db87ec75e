use std::collections::HashMap;
use std::sync::Mutex;

use log::{debug, error};

use crate::error_handling::types::StorageError;
use crate::storage::storage_trait::Storage;
use crate::story_management::story::StoryRecord;

/// Process-lifetime story map. No eviction, nothing is written to disk.
#[derive(Default)]
pub struct MemoryStorage {
    stories: Mutex<HashMap<String, StoryRecord>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save_story(&self, story: &StoryRecord) -> Result<(), StorageError> {
        let mut stories = self.stories.lock().map_err(|_| {
            error!("Story map lock poisoned while saving {}", story.id);
            StorageError::WriteFailed
        })?;
        stories.insert(story.id.clone(), story.clone());
        debug!("Saved story {} ({} segment(s))", story.id, story.content.len());
        Ok(())
    }

    fn get_story(&self, id: &str) -> Result<Option<StoryRecord>, StorageError> {
        let stories = self.stories.lock().map_err(|_| {
            error!("Story map lock poisoned while reading {}", id);
            StorageError::ReadFailed
        })?;
        Ok(stories.get(id).cloned())
    }

    fn contains_story(&self, id: &str) -> Result<bool, StorageError> {
        self.stories
            .lock()
            .map(|stories| stories.contains_key(id))
            .map_err(|_| {
                error!("Story map lock poisoned while looking up {}", id);
                StorageError::ReadFailed
            })
    }

    fn update_story(
        &self,
        id: &str,
        update: &mut dyn FnMut(&mut StoryRecord),
    ) -> Result<bool, StorageError> {
        let mut stories = self.stories.lock().map_err(|_| {
            error!("Story map lock poisoned while updating {}", id);
            StorageError::WriteFailed
        })?;
        match stories.get_mut(id) {
            Some(story) => {
                update(story);
                debug!("Updated story {}", id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn story_count(&self) -> Result<usize, StorageError> {
        self.stories
            .lock()
            .map(|stories| stories.len())
            .map_err(|_| StorageError::ReadFailed)
    }
}

use std::sync::{Arc, Mutex};

use chrono::Utc;
use log::{debug, info, warn};

use crate::error_handling::types::StoryError;
use crate::generation::fallback::fallback_story;
use crate::generation::{StoryGenerator, StoryPrompt, TemplateEngine};
use crate::storage::Storage;
use crate::story_management::story::{StoryOrigin, StoryRecord};

const MOCK_SYSTEM_PROMPT: &str = "Mock story generator";

/// Creates, extends and looks up stories.
///
/// # Fields Overview
///
/// - `generator`: produces openings and continuations for the regular endpoints
/// - `templates`: used directly by the mock endpoints, and as the continuation fallback
/// - `storage`: where story records live
/// - `last_id`: last issued id, keeps ids unique within one millisecond
pub struct StoryManager {
    generator: Arc<dyn StoryGenerator>,
    templates: Arc<TemplateEngine>,
    storage: Arc<dyn Storage>,
    last_id: Mutex<i64>,
}

impl StoryManager {
    pub fn new(
        generator: Arc<dyn StoryGenerator>,
        templates: Arc<TemplateEngine>,
        storage: Arc<dyn Storage>,
    ) -> Self {
        Self {
            generator,
            templates,
            storage,
            last_id: Mutex::new(0),
        }
    }

    /// Starts a story through the configured generator.
    ///
    /// Generation failures never surface: the fallback story (or poem) is stored instead.
    pub fn start_story(&self, prompt: &StoryPrompt) -> Result<StoryRecord, StoryError> {
        info!(
            "Generating complete story (genre: {}, generator: {})",
            prompt.genre_label,
            self.generator.name()
        );
        let opening = match self.generator.generate(prompt) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!("Generator returned an empty story, using fallback");
                fallback_story(prompt)
            }
            Err(e) => {
                warn!("Error generating story: {}, using fallback", e);
                fallback_story(prompt)
            }
        };

        let user = if prompt.prompt.is_empty() {
            format!("Tell me a {} story", prompt.genre_label)
        } else {
            prompt.prompt.clone()
        };
        let story = StoryRecord::new(
            self.next_id(),
            StoryOrigin::Generated,
            format!("Generate a {} story", prompt.genre_label),
            user,
            opening,
        );
        self.storage.save_story(&story)?;
        info!("Story {} started", story.id);
        Ok(story)
    }

    /// Starts a story straight from the templates, bypassing the configured generator.
    pub fn start_mock_story(&self, prompt: &StoryPrompt) -> Result<StoryRecord, StoryError> {
        info!("Using mock story generator (genre: {})", prompt.genre_label);
        let opening = self
            .templates
            .generate(prompt)
            .unwrap_or_else(|e| {
                warn!("Mock generation failed: {}, using fallback", e);
                fallback_story(prompt)
            });

        let story = StoryRecord::new(
            self.next_id(),
            StoryOrigin::Mock,
            MOCK_SYSTEM_PROMPT.to_string(),
            prompt.prompt_or("Tell me an adventure story").to_string(),
            opening,
        );
        self.storage.save_story(&story)?;
        info!("Mock story {} started", story.id);
        Ok(story)
    }

    /// Continues a story through the configured generator, falling back to the templates.
    pub fn continue_story(&self, story_id: &str, user_input: &str) -> Result<String, StoryError> {
        self.ensure_exists(story_id)?;
        let segment = self
            .generator
            .continue_story(user_input)
            .or_else(|e| {
                warn!("Error continuing story {}: {}, using templates", story_id, e);
                self.templates.continue_story(user_input)
            })
            .unwrap_or_else(|_| self.plain_continuation(user_input));
        self.append(story_id, user_input, segment)
    }

    /// Continues a story straight from the templates.
    pub fn continue_mock_story(
        &self,
        story_id: &str,
        user_input: &str,
    ) -> Result<String, StoryError> {
        self.ensure_exists(story_id)?;
        let segment = self
            .templates
            .continue_story(user_input)
            .unwrap_or_else(|_| self.plain_continuation(user_input));
        self.append(story_id, user_input, segment)
    }

    pub fn get_story(&self, story_id: &str) -> Result<StoryRecord, StoryError> {
        self.storage
            .get_story(story_id)?
            .ok_or(StoryError::NotFound)
    }

    pub fn story_count(&self) -> Result<usize, StoryError> {
        Ok(self.storage.story_count()?)
    }

    fn ensure_exists(&self, story_id: &str) -> Result<(), StoryError> {
        if self.storage.contains_story(story_id)? {
            Ok(())
        } else {
            debug!("Story {} not found", story_id);
            Err(StoryError::NotFound)
        }
    }

    fn append(&self, story_id: &str, user_input: &str, segment: String) -> Result<String, StoryError> {
        let found = self
            .storage
            .update_story(story_id, &mut |story| story.push_exchange(user_input, &segment))?;
        if !found {
            return Err(StoryError::NotFound);
        }
        info!("Story {} continued", story_id);
        Ok(segment)
    }

    /// Last-resort continuation when even the template random source is gone.
    fn plain_continuation(&self, user_input: &str) -> String {
        format!(
            "You decided to {}.\n\nWhat will you do next?",
            crate::generation::continuation::choose_action(user_input)
        )
    }

    /// Current Unix time in milliseconds, bumped past the previous id when needed.
    fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut last = match self.last_id.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let id = if now > *last { now } else { *last + 1 };
        *last = id;
        id.to_string()
    }
}

//! Generator trait
//!
//! A `StoryGenerator` turns a prompt into the opening of a story and a reader's move into the
//! next segment. The story manager calls it for the regular endpoints and treats every error as
//! recoverable: failures are logged and replaced by fixed fallback text.

use crate::error_handling::types::GenerationError;
use crate::generation::types::StoryPrompt;

pub trait StoryGenerator: Send + Sync {
    /// Produces the opening segment for a new story.
    fn generate(&self, prompt: &StoryPrompt) -> Result<String, GenerationError>;

    /// Produces the next segment from the reader's input.
    fn continue_story(&self, user_input: &str) -> Result<String, GenerationError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

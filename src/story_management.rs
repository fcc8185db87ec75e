//! Story management core module.
//!
//! This module provides the story record kept for every session, its chat-style transcript,
//! and the manager that creates and extends stories.

/// Submodule for story records and transcript messages.
pub mod story;
/// Submodule for the story manager implementation.
pub mod story_manager;

pub use story::{Message, Role, StoryOrigin, StoryRecord};
pub use story_manager::StoryManager;

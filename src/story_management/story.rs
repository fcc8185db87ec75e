use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Which family of endpoints created the story.
///
/// Variants:
/// - `Generated`: created through the configured generator.
/// - `Mock`: created through the mock endpoints, straight from the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryOrigin {
    Generated,
    Mock,
}

/// One story session: the generated segments and the transcript that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryRecord {
    /// Creation time in Unix milliseconds, as a string.
    pub id: String,
    /// Generated segments, opening first.
    pub content: Vec<String>,
    pub messages: Vec<Message>,
    pub origin: StoryOrigin,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoryRecord {
    /// Starts a record from its opening segment and the three seed messages.
    pub fn new(
        id: String,
        origin: StoryOrigin,
        system: String,
        user: String,
        opening: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            messages: vec![
                Message::new(Role::System, system),
                Message::new(Role::User, user),
                Message::new(Role::Assistant, opening.clone()),
            ],
            content: vec![opening],
            origin,
            completed: origin == StoryOrigin::Generated,
            created_at: now,
            updated_at: now,
        }
    }

    /// Records one exchange: the reader's input followed by the generated segment.
    pub fn push_exchange(&mut self, user_input: &str, segment: &str) {
        self.messages.push(Message::new(Role::User, user_input));
        self.messages.push(Message::new(Role::Assistant, segment));
        self.content.push(segment.to_string());
        self.updated_at = Utc::now();
    }
}

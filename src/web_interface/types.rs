use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::generation::StoryPrompt;

/// Body of `POST /api/story/start` and `POST /api/story/mock`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StartStoryRequest {
    pub prompt: Option<String>,
    pub genre: Option<String>,
    pub setting: Option<String>,
}

impl StartStoryRequest {
    pub fn to_prompt(&self) -> StoryPrompt {
        StoryPrompt::new(
            self.prompt.as_deref(),
            self.genre.as_deref(),
            self.setting.as_deref(),
        )
    }
}

/// Body of `POST /api/story/continue` and `POST /api/story/mock/continue`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContinueStoryRequest {
    pub story_id: String,
    pub user_input: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryStartedResponse {
    pub story_id: String,
    pub content: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContinuationResponse {
    pub content: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryHistoryResponse {
    pub story_id: String,
    pub content: Vec<String>,
    pub success: bool,
}

/// API error payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Decodes a JSON body, treating an empty or malformed body as an empty request.
pub fn parse_lenient<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    if body.iter().all(u8::is_ascii_whitespace) {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        warn!("Ignoring malformed request body: {}", e);
        T::default()
    })
}

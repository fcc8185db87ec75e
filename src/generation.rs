//! Story generation subsystem.
//!
//! Everything the server says comes from here: a small library of canned nursery rhymes, poem
//! styles and one template per genre, selected by substring matching on the prompt and by
//! uniform random picks.
//!
//! Components:
//! - `types`: `Genre` and the normalised `StoryPrompt`.
//! - `nursery_rhymes`: canned rhymes and their detector.
//! - `poems`: classic openings, limericks, quatrain / haiku / free verse.
//! - `genre_stories`: one story template per genre.
//! - `continuation`: the next segment from the reader's move.
//! - `fallback`: fixed texts used when a generator fails.
//! - `generator`: the `StoryGenerator` trait.
//! - `template_engine`: `TemplateEngine`, the template-backed `StoryGenerator`.

pub mod continuation;
pub mod fallback;
pub mod generator;
pub mod genre_stories;
pub mod nursery_rhymes;
pub mod poems;
pub mod template_engine;
pub mod types;

pub use generator::StoryGenerator;
pub use template_engine::TemplateEngine;
pub use types::{Genre, StoryPrompt};

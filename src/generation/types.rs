//! Core types shared by the template generators.

use std::fmt;

/// Genre requested by the client.
///
/// Labels are matched after trimming and lowercasing. Anything unrecognised, including the
/// front-end's `story` default, maps to `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Adventure,
    Fantasy,
    Mystery,
    SciFi,
    Horror,
    Romance,
    Historical,
    Comedy,
    Poem,
    NurseryRhyme,
    General,
}

impl Genre {
    pub const ALL: [Genre; 11] = [
        Genre::Adventure,
        Genre::Fantasy,
        Genre::Mystery,
        Genre::SciFi,
        Genre::Horror,
        Genre::Romance,
        Genre::Historical,
        Genre::Comedy,
        Genre::Poem,
        Genre::NurseryRhyme,
        Genre::General,
    ];

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "adventure" => Genre::Adventure,
            "fantasy" => Genre::Fantasy,
            "mystery" => Genre::Mystery,
            "sci-fi" => Genre::SciFi,
            "horror" => Genre::Horror,
            "romance" => Genre::Romance,
            "historical" => Genre::Historical,
            "comedy" => Genre::Comedy,
            "poem" => Genre::Poem,
            "nursery-rhyme" => Genre::NurseryRhyme,
            _ => Genre::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Adventure => "adventure",
            Genre::Fantasy => "fantasy",
            Genre::Mystery => "mystery",
            Genre::SciFi => "sci-fi",
            Genre::Horror => "horror",
            Genre::Romance => "romance",
            Genre::Historical => "historical",
            Genre::Comedy => "comedy",
            Genre::Poem => "poem",
            Genre::NurseryRhyme => "nursery-rhyme",
            Genre::General => "story",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalised input for one opening request.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryPrompt {
    /// Prompt as typed by the user, trimmed. May be empty.
    pub prompt: String,
    pub genre: Genre,
    /// Genre label exactly as the client sent it, `story` when absent.
    pub genre_label: String,
    pub setting: Option<String>,
}

impl StoryPrompt {
    pub fn new(prompt: Option<&str>, genre: Option<&str>, setting: Option<&str>) -> Self {
        let genre_label = genre
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .unwrap_or(Genre::General.as_str())
            .to_string();
        Self {
            prompt: prompt.map(str::trim).unwrap_or_default().to_string(),
            genre: Genre::from_label(&genre_label),
            genre_label,
            setting: setting
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    pub fn prompt_or<'a>(&'a self, default: &'a str) -> &'a str {
        if self.prompt.is_empty() {
            default
        } else {
            &self.prompt
        }
    }
}

//! Fixed texts served when a generator fails.

use super::types::{Genre, StoryPrompt};

const FALLBACK_VERSE: &str = "Words flow like water,
Thoughts dance across the page,
Creating beauty from chaos,
A moment captured in time.

Each line a heartbeat,
Each verse a breath,
In the rhythm of creation,
We find ourselves.";

pub fn fallback_poem(prompt: &str) -> String {
    let title = if prompt.trim().is_empty() {
        "Inspiration"
    } else {
        prompt
    };
    format!("{}\n\n{}", title, FALLBACK_VERSE)
}

pub fn fallback_story(prompt: &StoryPrompt) -> String {
    if prompt.genre == Genre::Poem {
        return fallback_poem(&prompt.prompt);
    }
    format!(
        "Once upon a time, in a {}, {} began.\n\nThough unexpected challenges arose, determination and courage prevailed.\n\nThe journey might not follow the expected path, but sometimes the most beautiful stories emerge from the unexpected turns of life.",
        prompt.setting.as_deref().unwrap_or("faraway place"),
        prompt.prompt_or("an adventure"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poem_fallback_uses_a_default_title() {
        let poem = fallback_poem("  ");
        assert!(poem.starts_with("Inspiration\n\nWords flow like water,"));
        assert!(poem.ends_with("We find ourselves."));
    }

    #[test]
    fn story_fallback_fills_placeholders() {
        let text = fallback_story(&StoryPrompt::new(None, None, None));
        assert!(text.starts_with("Once upon a time, in a faraway place, an adventure began."));

        let text = fallback_story(&StoryPrompt::new(Some("a lost kite"), None, Some("windy town")));
        assert!(text.starts_with("Once upon a time, in a windy town, a lost kite began."));
    }

    #[test]
    fn poem_genre_gets_the_poem_fallback() {
        let text = fallback_story(&StoryPrompt::new(Some("Night"), Some("poem"), None));
        assert!(text.starts_with("Night\n\nWords flow"));
    }
}

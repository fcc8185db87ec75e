//! Continuation of an existing story from the reader's next move.

use rand::rngs::StdRng;
use rand::Rng;

/// Keyword-to-action table, checked in order against the lowercased input.
const ACTIONS: [(&str, &str); 3] = [
    ("mountain", "climb the misty mountain"),
    ("valley", "follow the road through the valley"),
    ("forest", "take the hidden forest trail"),
];

const DEFAULT_ACTION: &str = "forge your own path";

const ENCOUNTERS: [&str; 2] = [
    "a mysterious stranger who offers to guide you",
    "an unexpected obstacle blocking your way",
];

pub fn choose_action(user_input: &str) -> &'static str {
    let input = user_input.to_lowercase();
    ACTIONS
        .iter()
        .find(|(keyword, _)| input.contains(keyword))
        .map(|(_, action)| *action)
        .unwrap_or(DEFAULT_ACTION)
}

pub fn compose_continuation(user_input: &str, rng: &mut StdRng) -> String {
    let encounter = if rng.gen_bool(0.5) {
        ENCOUNTERS[0]
    } else {
        ENCOUNTERS[1]
    };
    format!(
        "You decided to {}.\n\nAs you continue on your journey, you encounter {}.\n\nWhat will you do next?",
        choose_action(user_input),
        encounter
    )
}

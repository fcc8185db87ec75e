//! Poem composition: classic openings, limericks and three randomly chosen verse styles.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::nursery_rhymes::{find_nursery_rhyme, TWINKLE_TWINKLE};

const ROSES_ARE_RED: &str = "Roses are red,
Violets are blue,
Sugar is sweet,
And so are you.";

type PoemStyle = fn(&str, &str, &mut StdRng) -> String;

const POEM_STYLES: [PoemStyle; 3] = [quatrain, haiku, free_verse];

/// Uniform pick from a fixed word list.
pub(crate) fn pick(rng: &mut StdRng, choices: &[&'static str]) -> &'static str {
    choices.choose(rng).copied().unwrap_or_default()
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn titled(prompt: &str, verse: &str) -> String {
    format!("{}\n\n{}", prompt, verse)
}

/// Composes a poem for the prompt.
///
/// Nursery rhymes and well-known openings are returned verbatim; otherwise one of the verse
/// styles is picked at random and themed from keywords found in the prompt.
pub fn compose_poem(prompt: &str, rng: &mut StdRng) -> String {
    if let Some(rhyme) = find_nursery_rhyme(prompt) {
        debug!("Poem prompt matched a nursery rhyme");
        return rhyme.to_string();
    }

    let lower = prompt.to_lowercase();

    if lower.contains("roses are red") {
        return ROSES_ARE_RED.to_string();
    }
    if lower.contains("twinkle twinkle") {
        return TWINKLE_TWINKLE.to_string();
    }
    if contains_any(&lower, &["there once was", "limerick"]) {
        debug!("Composing a limerick");
        return limerick(rng);
    }

    let style = POEM_STYLES[rng.gen_range(0..POEM_STYLES.len())];
    style(prompt, &lower, rng)
}

fn limerick(rng: &mut StdRng) -> String {
    format!(
        "There once was a {} so {},\nWhose tales were {} everywhere,\n    {} {},\n    {} they {},\nAnd {}.",
        pick(rng, &["hero", "wizard", "knight", "sailor", "dancer"]),
        pick(rng, &["brave", "wise", "kind", "bold", "fair"]),
        pick(rng, &["told", "sung", "known", "shared"]),
        pick(rng, &["Adventures", "Stories", "Legends", "Journeys"]),
        pick(rng, &["abound", "unfold", "enthrall", "inspire"]),
        pick(rng, &["Hearts", "Minds", "Souls", "Dreams"]),
        pick(rng, &["ignite", "delight", "excite", "inspire"]),
        pick(
            rng,
            &[
                "leave us in wonder",
                "bring joy to all there",
                "fill us with cheer",
                "banish all care",
            ]
        ),
    )
}

fn quatrain(prompt: &str, lower: &str, rng: &mut StdRng) -> String {
    let theme = if lower.contains("love") {
        "love"
    } else if lower.contains("nature") {
        "nature"
    } else if lower.contains("dream") {
        "dreams"
    } else {
        pick(rng, &["nature", "love", "dreams", "hope", "joy", "wonder"])
    };
    debug!("Composing a quatrain on {}", theme);

    let verse = match theme {
        "love" => {
            "Love blooms like flowers in spring,
In hearts that dare to feel.
With every moment, joy it brings,
A truth that time reveals."
        }
        "nature" => {
            "The mountains rise, the rivers flow,
Nature's rhythm never ends.
Through seasons high and seasons low,
Earth's beauty never bends."
        }
        "dreams" => {
            "Dreams carry us on silent wings,
To worlds beyond our sight.
Where possibility sings,
And darkness turns to light."
        }
        _ => {
            "Words painted on the canvas of mind,
Create worlds previously unseen.
Treasures of thought we find,
In spaces in between."
        }
    };
    titled(prompt, verse)
}

fn haiku(prompt: &str, lower: &str, rng: &mut StdRng) -> String {
    let season = if contains_any(lower, &["spring", "bloom", "flower"]) {
        "spring"
    } else if contains_any(lower, &["summer", "sun", "heat"]) {
        "summer"
    } else if contains_any(lower, &["fall", "autumn", "leaf"]) {
        "autumn"
    } else if contains_any(lower, &["winter", "snow", "cold"]) {
        "winter"
    } else {
        pick(rng, &["spring", "summer", "autumn", "winter"])
    };
    debug!("Composing a {} haiku", season);

    let verse = match season {
        "spring" => {
            "Petals unfurling
Life renews with each rainfall
Spring brings beginnings"
        }
        "summer" => {
            "Golden sun above
Warmth embraces everything
Summer days stretch long"
        }
        "autumn" => {
            "Leaves dance to the ground
Colors painting the landscape
Autumn whispers change"
        }
        _ => {
            "Frost covers the world
Silence fills the snowy fields
Winter's deep slumber"
        }
    };
    titled(prompt, verse)
}

fn free_verse(prompt: &str, lower: &str, rng: &mut StdRng) -> String {
    let mood = if contains_any(lower, &["joy", "happy", "delight"]) {
        "joyful"
    } else if contains_any(lower, &["sad", "grief", "loss"]) {
        "somber"
    } else if contains_any(lower, &["inspire", "courage", "strength"]) {
        "inspiring"
    } else if contains_any(lower, &["memory", "past", "childhood"]) {
        "nostalgic"
    } else {
        pick(rng, &["joyful", "somber", "inspiring", "nostalgic"])
    };
    debug!("Composing {} free verse", mood);

    let verse = match mood {
        "joyful" => {
            "Brightness cascades through windowpanes
Catching dust motes in golden beams
Like memories suspended in light
We rise
We shine
We become the day itself"
        }
        "somber" => {
            "Shadows lengthen across empty rooms
Words once spoken now echo only in thought
Between heartbeats
The silence grows
Teaching us the language of absence"
        }
        "inspiring" => {
            "Not in the mighty oak
But in the seed that faces darkness
And pushes through soil toward light
There lies true courage
Unseen
Persistent
Transforming against all odds"
        }
        _ => {
            "The clock ticks differently
In places we've loved and left
Time stretches, folds back on itself
Doorways to yesterdays
Standing ajar
Inviting us to rooms
Where we are always
Both visitor and resident"
        }
    };
    titled(prompt, verse)
}

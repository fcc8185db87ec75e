//! Canned nursery rhymes and the substring detector that finds them in a prompt.

/// A rhyme with the spellings users commonly type when asking for it.
pub struct NurseryRhyme {
    pub key: &'static str,
    pub variations: &'static [&'static str],
    pub text: &'static str,
}

/// Detection order matters: the first rhyme with a matching variation wins.
pub const NURSERY_RHYMES: &[NurseryRhyme] = &[
    NurseryRhyme {
        key: "johnny johnny yes papa",
        variations: &["johnny johnny", "jhonny jhonny", "jonny jonny"],
        text: "Johnny Johnny
Yes, Papa?
Eating sugar?
No, Papa.
Telling lies?
No, Papa.
Open your mouth!
Ha! Ha! Ha!",
    },
    NurseryRhyme {
        key: "baa baa black sheep",
        variations: &["baa baa", "black sheep"],
        text: "Baa, baa, black sheep,
Have you any wool?
Yes sir, yes sir,
Three bags full.
One for the master,
One for the dame,
And one for the little boy
Who lives down the lane.",
    },
    NurseryRhyme {
        key: "humpty dumpty",
        variations: &["humpty dumpty"],
        text: "Humpty Dumpty sat on a wall,
Humpty Dumpty had a great fall.
All the king's horses and all the king's men
Couldn't put Humpty together again.",
    },
    NurseryRhyme {
        key: "twinkle twinkle little star",
        variations: &["twinkle twinkle", "twinkle star"],
        text: TWINKLE_TWINKLE,
    },
    NurseryRhyme {
        key: "jack and jill",
        variations: &["jack and jill", "jack & jill"],
        text: "Jack and Jill went up the hill
To fetch a pail of water.
Jack fell down and broke his crown,
And Jill came tumbling after.",
    },
    NurseryRhyme {
        key: "hickory dickory dock",
        variations: &["hickory dickory", "dickory dock"],
        text: "Hickory dickory dock,
The mouse ran up the clock.
The clock struck one,
The mouse ran down,
Hickory dickory dock.",
    },
    NurseryRhyme {
        key: "little bo peep",
        variations: &["bo peep", "little bo peep"],
        text: "Little Bo Peep has lost her sheep,
And doesn't know where to find them.
Leave them alone, and they'll come home,
Wagging their tails behind them.",
    },
    NurseryRhyme {
        key: "mary had a little lamb",
        variations: &["mary had a lamb", "mary's lamb", "mary little lamb"],
        text: "Mary had a little lamb,
Its fleece was white as snow;
And everywhere that Mary went,
The lamb was sure to go.",
    },
];

pub const TWINKLE_TWINKLE: &str = "Twinkle, twinkle, little star,
How I wonder what you are!
Up above the world so high,
Like a diamond in the sky.
Twinkle, twinkle, little star,
How I wonder what you are!";

/// Returns the full rhyme text when the input mentions a known nursery rhyme.
///
/// Variations are checked first across every rhyme, then the canonical keys.
pub fn find_nursery_rhyme(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    NURSERY_RHYMES
        .iter()
        .find(|rhyme| rhyme.variations.iter().any(|v| input.contains(v)))
        .or_else(|| NURSERY_RHYMES.iter().find(|rhyme| input.contains(rhyme.key)))
        .map(|rhyme| rhyme.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_common_misspellings() {
        let text = find_nursery_rhyme("Sing me Jhonny Jhonny please").unwrap();
        assert!(text.starts_with("Johnny Johnny"));
    }

    #[test]
    fn detection_is_case_insensitive() {
        let text = find_nursery_rhyme("  HUMPTY DUMPTY ").unwrap();
        assert!(text.contains("great fall"));
    }

    #[test]
    fn earlier_rhymes_win_when_several_match() {
        let text = find_nursery_rhyme("black sheep meets jack and jill").unwrap();
        assert!(text.starts_with("Baa, baa"));
    }

    #[test]
    fn canonical_key_is_a_fallback() {
        // "mary had a little lamb" is not one of the listed variations
        let text = find_nursery_rhyme("mary had a little lamb").unwrap();
        assert!(text.starts_with("Mary had a little lamb"));
    }

    #[test]
    fn unrelated_prompts_do_not_match() {
        assert_eq!(find_nursery_rhyme("a dragon in the city"), None);
        assert_eq!(find_nursery_rhyme(""), None);
    }

    #[test]
    fn every_rhyme_is_reachable_by_its_key() {
        for rhyme in NURSERY_RHYMES {
            assert_eq!(find_nursery_rhyme(rhyme.key), Some(rhyme.text));
        }
    }
}

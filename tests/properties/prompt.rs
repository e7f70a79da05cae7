//! Property tests for prompt interpretation.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use house_gen::systems::house::generator::prompt::interpret_prompt;

use crate::common::filler_words;

const TWO_FLOOR_WORDS: &[&str] = &["two", "2", "double", "Two", "DOUBLE"];
const THREE_FLOOR_WORDS: &[&str] = &["three", "3", "triple"];

fn floors_for(words: &[&str], seed: u64) -> u32 {
    let mut rng = StdRng::seed_from_u64(seed);
    interpret_prompt(&words.join(" "), &mut rng).floor_count
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a two-floor word always gives two floors.
    #[test]
    fn property_two_floor_words(
        mut words in filler_words(),
        floor_word in proptest::sample::select(TWO_FLOOR_WORDS),
        at in 0usize..6,
        seed in any::<u64>(),
    ) {
        words.insert(at.min(words.len()), floor_word);
        prop_assert_eq!(floors_for(&words, seed), 2);
    }

    /// PROPERTY: a three-floor word always gives three floors, even next to "tall".
    #[test]
    fn property_three_floor_words(
        mut words in filler_words(),
        floor_word in proptest::sample::select(THREE_FLOOR_WORDS),
        tall in any::<bool>(),
        seed in any::<u64>(),
    ) {
        words.push(floor_word);
        if tall {
            words.insert(0, "tall");
        }
        prop_assert_eq!(floors_for(&words, seed), 3);
    }

    /// PROPERTY: "tall" alone means two floors.
    #[test]
    fn property_tall_means_two(mut words in filler_words(), seed in any::<u64>()) {
        words.push("tall");
        prop_assert_eq!(floors_for(&words, seed), 2);
    }

    /// PROPERTY: the same prompt and seed always give the same parameters.
    #[test]
    fn property_seeded_interpretation_is_reproducible(text in crate::common::prompt_text(), seed in any::<u64>()) {
        let first = interpret_prompt(&text, &mut StdRng::seed_from_u64(seed));
        let second = interpret_prompt(&text, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(first, second);
    }
}

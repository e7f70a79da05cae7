//! Property tests for parameter invariants and the JSON format.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use house_gen::config::{MIN_WING_SIDE, WING_DEPTH_RATIO, WING_WIDTH_RATIO};
use house_gen::systems::export::{from_json, to_json};
use house_gen::systems::house::generator::massing::normalize;
use house_gen::systems::house::generator::params::*;
use house_gen::systems::house::generator::prompt::interpret_prompt;

use crate::common::{edited_design, prompt_text};

fn check_invariants(params: &DesignParameters) -> Result<(), TestCaseError> {
    prop_assert_eq!(params.footprint_shape == FootprintShape::LShape, params.wing_params.is_some());
    prop_assert_eq!(params.window_count, ((params.width + params.depth) / 4.0).floor() as u32);
    prop_assert!(params.floor_count >= 1);
    if let Some(wing) = params.wing_params {
        // wing always derived from the current main mass
        prop_assert_eq!(wing.width, (params.width * WING_WIDTH_RATIO).floor().max(MIN_WING_SIDE));
        prop_assert_eq!(wing.depth, (params.depth * WING_DEPTH_RATIO).floor().max(MIN_WING_SIDE));
        prop_assert!(wing.depth <= params.depth);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: interpreted prompts satisfy the parameter invariants.
    #[test]
    fn property_interpreted_designs_are_consistent(text in prompt_text(), seed in any::<u64>()) {
        let params = interpret_prompt(&text, &mut StdRng::seed_from_u64(seed));
        check_invariants(&params)?;
    }

    /// PROPERTY: normalising any hand edit restores the invariants.
    #[test]
    fn property_normalized_edits_are_consistent(params in edited_design()) {
        check_invariants(&normalize(params))?;
    }

    /// PROPERTY: normalising twice changes nothing.
    #[test]
    fn property_normalize_is_idempotent(params in edited_design()) {
        let once = normalize(params);
        prop_assert_eq!(normalize(once.clone()), once);
    }

    /// PROPERTY: export then import gives back the same parameters.
    #[test]
    fn property_json_round_trip(text in prompt_text(), seed in any::<u64>()) {
        let params = interpret_prompt(&text, &mut StdRng::seed_from_u64(seed));
        let json = to_json(&params).unwrap();
        prop_assert_eq!(from_json(&json).unwrap(), params);
    }

    /// PROPERTY: edited designs survive the round trip once normalised.
    #[test]
    fn property_edited_json_round_trip(params in edited_design()) {
        let params = normalize(params);
        let json = to_json(&params).unwrap();
        prop_assert_eq!(from_json(&json).unwrap(), params);
    }
}

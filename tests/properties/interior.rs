//! Property tests for the interior layout engine.

use std::collections::HashMap;

use proptest::prelude::*;

use house_gen::config::FURNITURE_CLEARANCE;
use house_gen::systems::house::generator::interior::collision::find_overlaps;
use house_gen::systems::house::generator::interior::generate_layout;
use house_gen::systems::house::generator::massing::normalize;
use house_gen::systems::house::generator::params::*;

use crate::common::generated_design;

fn type_counts(items: &[FurnitureItem]) -> HashMap<FurnitureType, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.kind).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the layout is a pure function of the parameters.
    #[test]
    fn property_layout_is_idempotent(params in generated_design()) {
        let params = normalize(params);
        prop_assert_eq!(generate_layout(&params), generate_layout(&params));
    }

    /// PROPERTY: minimal keeps a subset of standard, premium matches standard.
    #[test]
    fn property_density_is_monotonic(params in generated_design()) {
        let params = normalize(params);
        let with_density = |furniture_density| generate_layout(&DesignParameters {
            furniture_density,
            ..params.clone()
        });

        let minimal = type_counts(&with_density(FurnitureDensity::Minimal).furniture);
        let standard = type_counts(&with_density(FurnitureDensity::Standard).furniture);
        let premium = type_counts(&with_density(FurnitureDensity::Premium).furniture);

        for (kind, count) in &minimal {
            prop_assert!(standard.get(kind).copied().unwrap_or(0) >= *count, "{:?} grew under minimal", kind);
        }
        prop_assert_eq!(standard, premium);
    }

    /// PROPERTY: accepted furniture never overlaps.
    #[test]
    fn property_accepted_furniture_never_overlaps(params in generated_design()) {
        let layout = generate_layout(&normalize(params));
        prop_assert!(find_overlaps(&layout.furniture, FURNITURE_CLEARANCE).is_empty());
    }

    /// PROPERTY: every room sits on an existing floor.
    #[test]
    fn property_rooms_stay_in_the_building(params in generated_design()) {
        let params = normalize(params);
        let layout = generate_layout(&params);
        prop_assert!(layout.rooms.iter().all(|room| room.floor < params.floor_count));
        prop_assert!(layout.furniture.iter().all(|item| item.floor < params.floor_count));
    }
}

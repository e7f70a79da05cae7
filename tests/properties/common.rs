//! Strategies shared by the property tests.

use proptest::prelude::*;

use house_gen::systems::house::generator::params::*;

/// Filler words that trigger no floor rule.
pub const FILLER: &[&str] = &[
    "modern", "house", "garden", "cozy", "brick", "home", "with", "a", "roof", "quiet", "villa", "forest", "gable",
];

pub fn filler_words() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::collection::vec(proptest::sample::select(FILLER), 0..6)
}

pub fn prompt_text() -> impl Strategy<Value = String> {
    filler_words().prop_map(|words| words.join(" "))
}

fn shape() -> impl Strategy<Value = FootprintShape> {
    prop_oneof![Just(FootprintShape::Rectangular), Just(FootprintShape::LShape)]
}

fn density() -> impl Strategy<Value = FurnitureDensity> {
    prop_oneof![
        Just(FurnitureDensity::Minimal),
        Just(FurnitureDensity::Standard),
        Just(FurnitureDensity::Premium),
    ]
}

fn wing() -> impl Strategy<Value = Option<WingParams>> {
    proptest::option::of((0.0f32..12.0, 0.0f32..12.0).prop_map(|(width, depth)| WingParams {
        width,
        depth,
        offset: WingOffset { x: 0.0, z: 0.0 },
    }))
}

/// Hand-edited parameters, not yet normalised: stale derived fields and wings that
/// do not match the footprint shape are all fair game.
pub fn edited_design() -> impl Strategy<Value = DesignParameters> {
    (
        0.0f32..30.0,
        0.0f32..30.0,
        0u32..5,
        shape(),
        wing(),
        density(),
        0u32..40,
        any::<bool>(),
    )
        .prop_map(|(width, depth, floor_count, footprint_shape, wing_params, furniture_density, window_count, smart_home)| {
            DesignParameters {
                width,
                depth,
                floor_count,
                footprint_shape,
                wing_params,
                furniture_density,
                window_count,
                smart_home,
                ..DesignParameters::default()
            }
        })
}

/// Envelopes the interpreter can produce, built-in zoning only.
pub fn generated_design() -> impl Strategy<Value = DesignParameters> {
    (10u32..=22, 9u32..=18, 1u32..=3, shape(), density()).prop_map(
        |(width, depth, floor_count, footprint_shape, furniture_density)| DesignParameters {
            width: width as f32,
            depth: depth as f32,
            floor_count,
            footprint_shape,
            furniture_density,
            ..DesignParameters::default()
        },
    )
}

// free text -> semantic design intent
// every axis is an ordered rule table, later hits override earlier ones

use bevy::log::debug;
use rand::Rng;

use super::massing::{self, EnvelopeDraw, SizeBucket};
use super::params::*;

const MODERN_WORDS: &[&str] = &["modern", "minimalist", "minimal", "contemporary", "glass", "sleek", "box"];
const CLASSIC_WORDS: &[&str] = &["classic", "cottage", "traditional", "brick"];
const COMPOUND_WORDS: &[&str] = &["estate", "villa", "complex", "ranch"];

/// Style flags every table can key off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleFlags {
    pub modern: bool,
    pub classic: bool,
}

impl StyleFlags {
    pub fn detect(text: &str) -> Self {
        Self {
            modern: contains_any(text, MODERN_WORDS),
            classic: contains_any(text, CLASSIC_WORDS),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Trigger {
    Words(&'static [&'static str]),
    /// whole words only, "township" is not a hip roof
    Tokens(&'static [&'static str]),
    Modern,
    Classic,
    ClassicOr(&'static [&'static str]),
}

impl Trigger {
    fn matches(&self, text: &str, flags: StyleFlags) -> bool {
        match self {
            Trigger::Words(words) => contains_any(text, words),
            Trigger::Tokens(words) => contains_token(text, words),
            Trigger::Modern => flags.modern,
            Trigger::Classic => flags.classic,
            Trigger::ClassicOr(words) => flags.classic || contains_any(text, words),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Rule<T: 'static> {
    pub trigger: Trigger,
    pub value: T,
}

const fn rule<T>(trigger: Trigger, value: T) -> Rule<T> {
    Rule { trigger, value }
}

/// A single feature axis: default value plus rules in priority order.
pub struct Axis<T: 'static> {
    pub name: &'static str,
    pub default: T,
    pub rules: &'static [Rule<T>],
}

impl<T: Copy + std::fmt::Debug> Axis<T> {
    /// Evaluates every rule in order, the last matching rule wins.
    /// `text` must already be lowercase.
    pub fn resolve(&self, text: &str, flags: StyleFlags) -> T {
        let value = self.rules.iter().fold(self.default, |value, rule| {
            if rule.trigger.matches(text, flags) { rule.value } else { value }
        });
        debug!("prompt axis {} -> {:?}", self.name, value);
        value
    }
}

pub const ROOF: Axis<RoofType> = Axis {
    name: "roof",
    default: RoofType::Flat,
    rules: &[
        rule(Trigger::ClassicOr(&["gable", "pitched"]), RoofType::Gable),
        rule(Trigger::Tokens(&["hip", "hipped"]), RoofType::Hip),
        // explicit flat always wins
        rule(Trigger::Tokens(&["flat"]), RoofType::Flat),
    ],
};

pub const FACADE: Axis<FacadeMaterial> = Axis {
    name: "facade",
    default: FacadeMaterial::Concrete,
    rules: &[
        rule(Trigger::ClassicOr(&["brick"]), FacadeMaterial::Brick),
        rule(Trigger::Words(&["wood", "timber"]), FacadeMaterial::Wood),
        rule(Trigger::Words(&["stone"]), FacadeMaterial::Stone),
    ],
};

pub const FLOORS: Axis<u32> = Axis {
    name: "floors",
    default: 1,
    rules: &[
        // "tall" only counts when no explicit floor word follows
        rule(Trigger::Words(&["tall"]), 2),
        rule(Trigger::Words(&["two", "2", "double"]), 2),
        rule(Trigger::Words(&["three", "3", "triple"]), 3),
    ],
};

pub const SIZE: Axis<SizeBucket> = Axis {
    name: "size",
    default: SizeBucket::Standard,
    rules: &[rule(Trigger::Words(&["large", "villa", "mansion", "estate"]), SizeBucket::Large)],
};

pub const WINDOWS: Axis<WindowStyle> = Axis {
    name: "window style",
    default: WindowStyle::Standard,
    rules: &[
        rule(Trigger::Modern, WindowStyle::FloorToCeiling),
        rule(Trigger::Classic, WindowStyle::Arched),
        rule(Trigger::Words(&["arched"]), WindowStyle::Arched),
        rule(Trigger::Words(&["panoramic", "floor-to-ceiling"]), WindowStyle::FloorToCeiling),
    ],
};

pub const DOOR: Axis<DoorStyle> = Axis {
    name: "door style",
    default: DoorStyle::Modern,
    rules: &[
        rule(Trigger::Classic, DoorStyle::Classic),
        rule(Trigger::Words(&["industrial", "loft", "warehouse"]), DoorStyle::Industrial),
    ],
};

pub const OVERHANG: Axis<f32> = Axis {
    name: "roof overhang",
    default: 0.5,
    rules: &[rule(Trigger::Modern, 0.3), rule(Trigger::Classic, 0.6)],
};

pub const FOUNDATION: Axis<f32> = Axis {
    name: "foundation height",
    default: 0.4,
    rules: &[rule(Trigger::Modern, 0.3), rule(Trigger::Classic, 0.6)],
};

pub const ENVIRONMENT: Axis<EnvType> = Axis {
    name: "environment",
    default: EnvType::Grass,
    rules: &[
        rule(Trigger::Modern, EnvType::Pavement),
        rule(Trigger::Words(&["gravel"]), EnvType::Gravel),
        rule(Trigger::Words(&["urban", "city"]), EnvType::Pavement),
        rule(Trigger::Words(&["forest", "woods", "trees"]), EnvType::Forest),
    ],
};

pub const PORCH: Axis<f32> = Axis {
    name: "porch depth",
    default: 2.0,
    rules: &[
        rule(Trigger::Modern, 1.5),
        rule(Trigger::Classic, 2.5),
        rule(Trigger::Words(&["porch", "veranda"]), 3.0),
    ],
};

pub const LIGHT: Axis<LightTemperature> = Axis {
    name: "light temperature",
    default: LightTemperature::Neutral,
    rules: &[
        rule(Trigger::Modern, LightTemperature::Cool),
        rule(Trigger::Classic, LightTemperature::Warm),
        rule(Trigger::Words(&["cozy", "warm"]), LightTemperature::Warm),
        rule(Trigger::Words(&["bright", "cool"]), LightTemperature::Cool),
    ],
};

pub const DENSITY: Axis<FurnitureDensity> = Axis {
    name: "furniture density",
    default: FurnitureDensity::Standard,
    rules: &[
        rule(Trigger::Words(&["minimal", "minimalist", "sparse"]), FurnitureDensity::Minimal),
        rule(Trigger::Words(&["luxury", "premium", "furnished"]), FurnitureDensity::Premium),
    ],
};

pub const TIER: Axis<MaterialTier> = Axis {
    name: "material tier",
    default: MaterialTier::Standard,
    rules: &[
        rule(Trigger::Words(&["budget", "affordable", "cheap"]), MaterialTier::Economy),
        rule(Trigger::Words(&["luxury", "premium", "high-end"]), MaterialTier::Premium),
    ],
};

pub const ORIENTATION: Axis<Orientation> = Axis {
    name: "orientation",
    default: Orientation::North,
    rules: &[
        rule(Trigger::Words(&["north"]), Orientation::North),
        rule(Trigger::Words(&["east"]), Orientation::East),
        rule(Trigger::Words(&["south"]), Orientation::South),
        rule(Trigger::Words(&["west"]), Orientation::West),
        rule(Trigger::Words(&["north-east", "northeast"]), Orientation::NorthEast),
        rule(Trigger::Words(&["south-east", "southeast"]), Orientation::SouthEast),
        rule(Trigger::Words(&["south-west", "southwest"]), Orientation::SouthWest),
        rule(Trigger::Words(&["north-west", "northwest"]), Orientation::NorthWest),
    ],
};

pub const SMART_HOME: Axis<bool> = Axis {
    name: "smart home",
    default: false,
    rules: &[rule(Trigger::Words(&["smart"]), true)],
};

pub const VENTILATION: Axis<bool> = Axis {
    name: "ventilation plan",
    default: false,
    rules: &[rule(Trigger::Words(&["ventilation", "airflow", "passive"]), true)],
};

/// Everything the text decides, before any random draw.
#[derive(Clone, Debug, PartialEq)]
pub struct DesignIntent {
    pub flags: StyleFlags,
    pub roof_type: RoofType,
    pub facade_material: FacadeMaterial,
    pub floor_count: u32,
    pub size: SizeBucket,
    /// keyword-forced L footprint (estate, villa, ...)
    pub compound_keyword: bool,
    pub window_style: WindowStyle,
    pub door_style: DoorStyle,
    pub roof_overhang: f32,
    pub foundation_height: f32,
    pub env_type: EnvType,
    pub porch_depth: f32,
    pub light: LightTemperature,
    pub density: FurnitureDensity,
    pub tier: MaterialTier,
    pub orientation: Orientation,
    pub smart_home: bool,
    pub ventilation_plan: bool,
}

impl DesignIntent {
    pub fn wall_color(&self) -> &'static str {
        match self.facade_material {
            FacadeMaterial::Concrete => "#d9d9d6",
            FacadeMaterial::Brick => "#a0522d",
            FacadeMaterial::Wood => "#c19a6b",
            FacadeMaterial::Stone => "#9e9e9e",
        }
    }

    pub fn roof_color(&self) -> &'static str {
        if self.flags.classic {
            "#6b3e26"
        } else if self.flags.modern {
            "#3a3a3a"
        } else {
            "#555555"
        }
    }
}

/// Deterministic half of the interpreter.
pub fn classify(prompt: &str) -> DesignIntent {
    let text = prompt.to_lowercase();
    let flags = StyleFlags::detect(&text);

    DesignIntent {
        flags,
        roof_type: ROOF.resolve(&text, flags),
        facade_material: FACADE.resolve(&text, flags),
        floor_count: FLOORS.resolve(&text, flags),
        size: SIZE.resolve(&text, flags),
        compound_keyword: contains_any(&text, COMPOUND_WORDS),
        window_style: WINDOWS.resolve(&text, flags),
        door_style: DOOR.resolve(&text, flags),
        roof_overhang: OVERHANG.resolve(&text, flags),
        foundation_height: FOUNDATION.resolve(&text, flags),
        env_type: ENVIRONMENT.resolve(&text, flags),
        porch_depth: PORCH.resolve(&text, flags),
        light: LIGHT.resolve(&text, flags),
        density: DENSITY.resolve(&text, flags),
        tier: TIER.resolve(&text, flags),
        orientation: ORIENTATION.resolve(&text, flags),
        smart_home: SMART_HOME.resolve(&text, flags),
        ventilation_plan: VENTILATION.resolve(&text, flags),
    }
}

/// Free text to a complete parameter set, all randomness comes from `rng`.
pub fn interpret_prompt<R: Rng>(prompt: &str, rng: &mut R) -> DesignParameters {
    let intent = classify(prompt);
    let draw = EnvelopeDraw::sample(intent.size, rng);
    massing::synthesize(&intent, &draw)
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

fn contains_token(text: &str, words: &[&str]) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| words.iter().any(|word| *word == token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roof_defaults_to_flat() {
        assert_eq!(classify("a house").roof_type, RoofType::Flat);
    }

    #[test]
    fn classic_words_pick_gable() {
        assert_eq!(classify("Traditional family home").roof_type, RoofType::Gable);
    }

    #[test]
    fn hip_overrides_classic_gable() {
        assert_eq!(classify("classic home with a hip roof").roof_type, RoofType::Hip);
    }

    #[test]
    fn roof_words_must_stand_alone() {
        assert_eq!(classify("modern township home").roof_type, RoofType::Flat);
        assert_eq!(classify("cottage for a relationship").roof_type, RoofType::Gable);
        assert_eq!(classify("brick house near the flatbed yard").roof_type, RoofType::Gable);
        assert_eq!(classify("house with a hip-roof porch").roof_type, RoofType::Hip);
        assert_eq!(classify("cottage, flat-roofed").roof_type, RoofType::Flat);
    }

    #[test]
    fn flat_wins_over_everything() {
        assert_eq!(classify("cottage with hip and flat roof sections").roof_type, RoofType::Flat);
    }

    #[test]
    fn stone_beats_brick() {
        assert_eq!(classify("brick and stone manor").facade_material, FacadeMaterial::Stone);
        assert_eq!(classify("timber cabin").facade_material, FacadeMaterial::Wood);
    }

    #[test]
    fn explicit_floor_words() {
        assert_eq!(classify("double height").floor_count, 2);
        assert_eq!(classify("a triple decker").floor_count, 3);
        assert_eq!(classify("tall townhouse").floor_count, 2);
        assert_eq!(classify("tall three level home").floor_count, 3);
        assert_eq!(classify("bungalow").floor_count, 1);
    }

    #[test]
    fn style_branches_for_openings() {
        assert_eq!(classify("sleek glass pavilion").window_style, WindowStyle::FloorToCeiling);
        assert_eq!(classify("cottage").window_style, WindowStyle::Arched);
        assert_eq!(classify("house").window_style, WindowStyle::Standard);
        assert_eq!(classify("loft conversion").door_style, DoorStyle::Industrial);
        assert_eq!(classify("cottage").door_style, DoorStyle::Classic);
    }

    #[test]
    fn forest_keyword_always_wins_environment() {
        assert_eq!(classify("modern city house in the forest").env_type, EnvType::Forest);
        assert_eq!(classify("modern house").env_type, EnvType::Pavement);
        assert_eq!(classify("house").env_type, EnvType::Grass);
    }

    #[test]
    fn diagonals_override_cardinals() {
        assert_eq!(classify("south-east facing").orientation, Orientation::SouthEast);
        assert_eq!(classify("facing west").orientation, Orientation::West);
    }

    #[test]
    fn compound_keywords_are_detected() {
        assert!(classify("hillside ranch").compound_keyword);
        assert!(!classify("large house").compound_keyword);
        assert_eq!(classify("large house").size, SizeBucket::Large);
    }

    #[test]
    fn add_ons_from_keywords() {
        let intent = classify("smart home with passive ventilation on a budget");
        assert!(intent.smart_home);
        assert!(intent.ventilation_plan);
        assert_eq!(intent.tier, MaterialTier::Economy);
    }
}

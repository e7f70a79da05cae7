// semantic intent -> numeric building envelope

use bevy::log::{debug, warn};
use rand::Rng;

use crate::config::*;
use super::footprint;
use super::params::*;
use super::prompt::DesignIntent;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeBucket {
    #[default]
    Standard,
    Large,
}

impl SizeBucket {
    /// Inclusive (min, max) width and depth in whole meters.
    pub fn ranges(self) -> ((u32, u32), (u32, u32)) {
        match self {
            SizeBucket::Standard => (STANDARD_WIDTH, STANDARD_DEPTH),
            SizeBucket::Large => (LARGE_WIDTH, LARGE_DEPTH),
        }
    }

    pub fn plot(self) -> (f32, f32) {
        match self {
            SizeBucket::Standard => STANDARD_PLOT,
            SizeBucket::Large => LARGE_PLOT,
        }
    }
}

/// The random inputs of one generation, drawn up front so the rest stays pure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvelopeDraw {
    pub width: f32,
    pub depth: f32,
    /// uniform in [0, 1), compared against the wing threshold for large houses
    pub wing_roll: f32,
}

impl EnvelopeDraw {
    pub fn sample<R: Rng>(bucket: SizeBucket, rng: &mut R) -> Self {
        let ((min_w, max_w), (min_d, max_d)) = bucket.ranges();
        let width = rng.random_range(min_w..=max_w) as f32;
        let depth = rng.random_range(min_d..=max_d) as f32;
        let wing_roll = rng.random::<f32>();
        debug!("envelope draw {:?}: {}x{} roll {:.3}", bucket, width, depth, wing_roll);
        Self { width, depth, wing_roll }
    }
}

pub fn building_height(floor_count: u32) -> f32 {
    floor_count.max(1) as f32 * FLOOR_HEIGHT
}

pub fn window_count(width: f32, depth: f32) -> u32 {
    ((width + depth) / WINDOW_SPAN).floor().max(0.0) as u32
}

/// L footprint when a compound keyword forces it, or a large house wins the roll.
pub fn wants_wing(intent: &DesignIntent, draw: &EnvelopeDraw) -> bool {
    intent.compound_keyword
        || (intent.size == SizeBucket::Large && draw.wing_roll > WING_ROLL_THRESHOLD)
}

pub fn synthesize(intent: &DesignIntent, draw: &EnvelopeDraw) -> DesignParameters {
    let width = draw.width;
    let depth = draw.depth;
    let (plot_width, plot_depth) = intent.size.plot();

    let footprint_shape = if wants_wing(intent, draw) {
        FootprintShape::LShape
    } else {
        FootprintShape::Rectangular
    };
    let wing_params = match footprint_shape {
        FootprintShape::LShape => Some(footprint::plan_wing(width, depth)),
        FootprintShape::Rectangular => None,
    };

    let floor_count = intent.floor_count.max(1);

    DesignParameters {
        width,
        depth,
        height: building_height(floor_count),
        roof_type: intent.roof_type,
        wall_color: intent.wall_color().to_string(),
        roof_color: intent.roof_color().to_string(),
        facade_material: intent.facade_material,
        window_count: window_count(width, depth),
        window_style: intent.window_style,
        door_style: intent.door_style,
        porch_depth: intent.porch_depth,
        roof_overhang: intent.roof_overhang,
        foundation_height: intent.foundation_height,
        env_type: intent.env_type,
        footprint_shape,
        wing_params,
        floor_count,
        furniture_density: intent.density,
        interior_light_temp: intent.light,
        plot_size: PlotSize { width: plot_width, depth: plot_depth, unit: LengthUnit::Meters },
        setbacks: Setbacks {
            front: SETBACK_FRONT,
            back: SETBACK_BACK,
            left: SETBACK_SIDE,
            right: SETBACK_SIDE,
        },
        orientation: intent.orientation,
        rooms: Vec::new(),
        smart_home: intent.smart_home,
        ventilation_plan: intent.ventilation_plan,
        material_tier: intent.tier,
    }
}

/// Restores the derived fields and invariants after manual edits or an import.
pub fn normalize(mut params: DesignParameters) -> DesignParameters {
    if !(params.width >= 1.0) {
        warn!("width {} below 1m, clamping", params.width);
        params.width = 1.0;
    }
    if !(params.depth >= 1.0) {
        warn!("depth {} below 1m, clamping", params.depth);
        params.depth = 1.0;
    }
    params.floor_count = params.floor_count.max(1);
    params.height = building_height(params.floor_count);
    params.window_count = window_count(params.width, params.depth);
    params.porch_depth = params.porch_depth.max(0.0);
    params.roof_overhang = params.roof_overhang.max(0.0);
    params.foundation_height = params.foundation_height.max(0.0);

    params.wing_params = footprint::normalize_wing(params.footprint_shape, params.width, params.depth);

    let top_floor = params.floor_count - 1;
    for room in params.rooms.iter_mut() {
        if room.floor > top_floor {
            warn!("room {} sits on floor {} of {}, moving to top floor", room.id, room.floor, params.floor_count);
            room.floor = top_floor;
        }
    }

    params
}

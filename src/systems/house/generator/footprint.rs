// envelope -> footprint topology, a single mass or a mass plus wing

use bevy::prelude::*;
use bevy::math::bounding::Aabb2d;

use crate::config::*;
use super::params::*;
use super::utils::{polygon_area, rect_from_corners};
use super::Polygon;

/// Plan view of the building, main mass centred on the origin, front facade at +z.
#[derive(Clone, Debug, PartialEq)]
pub struct FootprintPlan {
    pub main: Aabb2d,
    pub wing: Option<Aabb2d>,
    /// union outline, 4 vertices for a rectangle, 6 for an L
    pub outline: Polygon,
}

impl FootprintPlan {
    /// Built-up area of the union outline.
    pub fn area(&self) -> f32 {
        polygon_area(&self.outline).abs()
    }

    /// Bounding box of the whole footprint.
    pub fn bounds(&self) -> Aabb2d {
        match self.wing {
            Some(wing) => Aabb2d {
                min: self.main.min.min(wing.min),
                max: self.main.max.max(wing.max),
            },
            None => self.main,
        }
    }
}

/// Wing centre relative to the main centre: attached on the +x side, flush with the back wall,
/// sunk into the main mass by the seam overlap.
pub fn wing_offset(main_width: f32, main_depth: f32, wing_width: f32, wing_depth: f32) -> WingOffset {
    WingOffset {
        x: main_width / 2.0 + wing_width / 2.0 - WING_SEAM_OVERLAP,
        z: -main_depth / 2.0 + wing_depth / 2.0,
    }
}

/// Wing sized from the main mass, never smaller than `MIN_WING_SIDE` on either side.
pub fn plan_wing(main_width: f32, main_depth: f32) -> WingParams {
    let width = (main_width * WING_WIDTH_RATIO).floor().max(MIN_WING_SIDE);
    let depth = (main_depth * WING_DEPTH_RATIO).floor().max(MIN_WING_SIDE);
    WingParams {
        width,
        depth,
        offset: wing_offset(main_width, main_depth, width, depth),
    }
}

/// Keeps `wing_params` consistent with the footprint shape.
/// Rectangular drops the wing, L-shape re-derives it from the current main mass.
pub fn normalize_wing(shape: FootprintShape, main_width: f32, main_depth: f32) -> Option<WingParams> {
    match shape {
        FootprintShape::Rectangular => None,
        FootprintShape::LShape => Some(plan_wing(main_width, main_depth)),
    }
}

pub fn plan_footprint(params: &DesignParameters) -> FootprintPlan {
    let half = Vec2::new(params.width, params.depth) / 2.0;
    let main = rect_from_corners(-half, half);

    let wing = match (params.footprint_shape, params.wing_params) {
        (FootprintShape::LShape, Some(wing)) => {
            let center = Vec2::new(wing.offset.x, wing.offset.z);
            let wing_half = Vec2::new(wing.width, wing.depth) / 2.0;
            Some(rect_from_corners(center - wing_half, center + wing_half))
        }
        _ => None,
    };

    let outline = match wing {
        Some(wing) => vec![
            Vec2::new(main.min.x, main.min.y),
            Vec2::new(wing.max.x, main.min.y),
            Vec2::new(wing.max.x, wing.max.y),
            Vec2::new(main.max.x, wing.max.y),
            Vec2::new(main.max.x, main.max.y),
            Vec2::new(main.min.x, main.max.y),
        ],
        None => vec![
            Vec2::new(main.min.x, main.min.y),
            Vec2::new(main.max.x, main.min.y),
            Vec2::new(main.max.x, main.max.y),
            Vec2::new(main.min.x, main.max.y),
        ],
    };

    FootprintPlan { main, wing, outline }
}

/// Plan region of the wing that is not already inside the main mass.
pub fn wing_interior(plan: &FootprintPlan) -> Option<Aabb2d> {
    plan.wing.map(|wing| rect_from_corners(
        Vec2::new(wing.min.x.max(plan.main.max.x), wing.min.y),
        wing.max,
    ))
}

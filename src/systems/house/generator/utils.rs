// plan geometry helpers, x across the width and y along the depth

use bevy::prelude::*;
use bevy::math::bounding::Aabb2d;

use super::Polygon;

/// Shoelace area, positive for counter-clockwise outlines.
pub fn polygon_area(polygon: &Polygon) -> f32 {
    if polygon.len() < 3 {
        return 0.0;
    }

    let twice_area: f32 = polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(a, b)| a.perp_dot(*b))
        .sum();
    twice_area / 2.0
}

/// Axis aligned box from a centre and a full size (not half size).
pub fn rect(center: Vec2, size: Vec2) -> Aabb2d {
    Aabb2d::new(center, size / 2.0)
}

/// Box spanning two corners in plan coordinates.
pub fn rect_from_corners(min: Vec2, max: Vec2) -> Aabb2d {
    Aabb2d { min: min.min(max), max: max.max(min) }
}

/// `true` when `inner` lies completely within `outer` (touching edges allowed).
pub fn rect_contains(outer: &Aabb2d, inner: &Aabb2d) -> bool {
    const EPSILON: f32 = 1e-4;
    inner.min.x >= outer.min.x - EPSILON
        && inner.min.y >= outer.min.y - EPSILON
        && inner.max.x <= outer.max.x + EPSILON
        && inner.max.y <= outer.max.y + EPSILON
}

/// Counter-clockwise outline of a box, used to feed the polygon helpers.
pub fn rect_polygon(bounds: &Aabb2d) -> Polygon {
    vec![
        Vec2::new(bounds.min.x, bounds.min.y),
        Vec2::new(bounds.max.x, bounds.min.y),
        Vec2::new(bounds.max.x, bounds.max.y),
        Vec2::new(bounds.min.x, bounds.max.y),
    ]
}

// round to one decimal, keeps generated dimensions readable in exports
pub fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

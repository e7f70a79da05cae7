// soft checks on a generated design, reported to the panel, never blocking

use std::fmt;

use bevy::log::warn;
use bevy::math::bounding::Aabb2d;
use bevy::math::Vec2;

use crate::config::*;
use super::footprint::{plan_footprint, wing_interior};
use super::interior::collision::find_overlaps;
use super::interior::InteriorLayout;
use super::params::*;
use super::utils::{rect, rect_contains};

// room centres are rounded to 0.1 m
const ROOM_FIT_TOLERANCE: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DesignWarning {
    /// built-up area over plot area
    PlotCoverage { ratio: f32 },
    ImpracticalRoom { id: String, width: f32, depth: f32 },
    SetbackEncroachment { side: Side },
    FurnitureOverlap { floor: u32, first: usize, second: usize },
    RoomOutsideFootprint { id: String, floor: u32 },
}

impl fmt::Display for DesignWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesignWarning::PlotCoverage { ratio } => {
                write!(f, "rooms cover {:.0}% of the plot (limit {:.0}%)", ratio * 100.0, MAX_PLOT_COVERAGE * 100.0)
            }
            DesignWarning::ImpracticalRoom { id, width, depth } => {
                write!(f, "room {} is only {:.1} x {:.1} m", id, width, depth)
            }
            DesignWarning::SetbackEncroachment { side } => write!(f, "footprint crosses the {:?} setback", side),
            DesignWarning::FurnitureOverlap { floor, first, second } => {
                write!(f, "furniture {} and {} overlap on floor {}", first, second, floor)
            }
            DesignWarning::RoomOutsideFootprint { id, floor } => {
                write!(f, "room {} on floor {} extends past the building", id, floor)
            }
        }
    }
}

/// Sum of room footprints over plot area.
pub fn plot_coverage(params: &DesignParameters, layout: &InteriorLayout) -> f32 {
    let plot = params.plot_size.area_sq_meters();
    if plot <= 0.0 {
        return 0.0;
    }
    layout.rooms.iter().map(Room::area).sum::<f32>() / plot
}

/// (plot, buildable area) in plan coordinates. The building sits at the plot centre, front towards +z.
pub fn plot_bounds(params: &DesignParameters) -> (Aabb2d, Aabb2d) {
    let half = Vec2::new(params.plot_size.width_meters(), params.plot_size.depth_meters()) / 2.0;
    let s = &params.setbacks;
    let min = Vec2::new(-half.x + s.left, -half.y + s.back);
    let max = Vec2::new(half.x - s.right, half.y - s.front);
    (Aabb2d { min: -half, max: half }, Aabb2d { min, max })
}

fn setback_encroachments(params: &DesignParameters) -> Vec<Side> {
    let bounds = plan_footprint(params).bounds();
    let (_, buildable) = plot_bounds(params);

    [
        (Side::Front, bounds.max.y > buildable.max.y),
        (Side::Back, bounds.min.y < buildable.min.y),
        (Side::Left, bounds.min.x < buildable.min.x),
        (Side::Right, bounds.max.x > buildable.max.x),
    ]
    .into_iter()
    .filter_map(|(side, crossed)| crossed.then_some(side))
    .collect()
}

/// Rooms not inside the main mass, or on the ground floor the wing.
fn rooms_outside_footprint(params: &DesignParameters, layout: &InteriorLayout) -> Vec<(String, u32)> {
    let plan = plan_footprint(params);
    let slack = Vec2::splat(ROOM_FIT_TOLERANCE);
    let loosen = |b: Aabb2d| Aabb2d { min: b.min - slack, max: b.max + slack };
    let main = loosen(plan.main);
    let wing = wing_interior(&plan).map(loosen);

    layout
        .rooms
        .iter()
        .filter(|room| {
            let (Some(x), Some(z)) = (room.x, room.z) else {
                return false;
            };
            let bounds = rect(Vec2::new(x, z), Vec2::new(room.width, room.depth));
            let in_wing = room.floor == 0 && wing.is_some_and(|wing| rect_contains(&wing, &bounds));
            !rect_contains(&main, &bounds) && !in_wing
        })
        .map(|room| (room.id.clone(), room.floor))
        .collect()
}

pub fn assess(params: &DesignParameters, layout: &InteriorLayout) -> Vec<DesignWarning> {
    let mut warnings = Vec::new();

    let ratio = plot_coverage(params, layout);
    if ratio > MAX_PLOT_COVERAGE {
        warnings.push(DesignWarning::PlotCoverage { ratio });
    }

    for room in &layout.rooms {
        if room.room_type != RoomType::Bathroom && room.width.min(room.depth) < MIN_ROOM_SIDE {
            warnings.push(DesignWarning::ImpracticalRoom {
                id: room.id.clone(),
                width: room.width,
                depth: room.depth,
            });
        }
    }

    warnings.extend(
        rooms_outside_footprint(params, layout)
            .into_iter()
            .map(|(id, floor)| DesignWarning::RoomOutsideFootprint { id, floor }),
    );

    warnings.extend(
        setback_encroachments(params)
            .into_iter()
            .map(|side| DesignWarning::SetbackEncroachment { side }),
    );

    warnings.extend(
        find_overlaps(&layout.furniture, FURNITURE_CLEARANCE)
            .into_iter()
            .map(|(first, second)| DesignWarning::FurnitureOverlap {
                floor: layout.furniture[first].floor,
                first,
                second,
            }),
    );

    for warning in &warnings {
        warn!("{}", warning);
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::house::generator::interior::generate_layout;
    use bevy::prelude::Vec3;

    #[test]
    fn buildable_area_shrinks_by_setbacks() {
        let (plot, buildable) = plot_bounds(&DesignParameters::default());
        assert_eq!(plot.max, Vec2::new(15.0, 20.0));
        assert_eq!(buildable.min, Vec2::new(-12.0, -15.0));
        assert_eq!(buildable.max, Vec2::new(12.0, 15.0));
    }

    #[test]
    fn default_design_is_clean() {
        let params = DesignParameters::default();
        assert!(assess(&params, &generate_layout(&params)).is_empty());
    }

    #[test]
    fn crowded_plot_is_flagged() {
        let mut params = DesignParameters::default();
        params.plot_size = PlotSize { width: 13.0, depth: 11.0, unit: LengthUnit::Meters };
        params.setbacks = Setbacks { front: 0.0, back: 0.0, left: 0.0, right: 0.0 };
        let warnings = assess(&params, &generate_layout(&params));
        assert_eq!(warnings.len(), 1);
        let DesignWarning::PlotCoverage { ratio } = warnings[0] else {
            panic!("expected a coverage warning, got {:?}", warnings[0]);
        };
        assert!((ratio - 120.0 / 143.0).abs() < 1e-4);
    }

    #[test]
    fn feet_plots_are_converted_before_comparing() {
        let mut params = DesignParameters::default();
        // 100 x 130 ft is about 1208 m2
        params.plot_size = PlotSize { width: 100.0, depth: 130.0, unit: LengthUnit::Feet };
        let layout = generate_layout(&params);
        assert!(plot_coverage(&params, &layout) < 0.75);
    }

    #[test]
    fn narrow_rooms_except_bathrooms() {
        let params = DesignParameters::default();
        let room = |id: &str, room_type| Room {
            id: id.into(),
            name: id.into(),
            room_type,
            floor: 0,
            width: 1.5,
            depth: 3.0,
            x: None,
            z: None,
        };
        let layout = InteriorLayout {
            rooms: vec![room("wc", RoomType::Bathroom), room("hall", RoomType::Corridor)],
            furniture: Vec::new(),
        };
        let warnings = assess(&params, &layout);
        assert_eq!(
            warnings,
            vec![DesignWarning::ImpracticalRoom { id: "hall".into(), width: 1.5, depth: 3.0 }]
        );
    }

    #[test]
    fn wide_house_crosses_side_setbacks() {
        let mut params = DesignParameters::default();
        params.width = 26.0;
        let warnings = assess(&params, &InteriorLayout::default());
        assert!(warnings.contains(&DesignWarning::SetbackEncroachment { side: Side::Left }));
        assert!(warnings.contains(&DesignWarning::SetbackEncroachment { side: Side::Right }));
        assert!(!warnings.contains(&DesignWarning::SetbackEncroachment { side: Side::Front }));
    }

    #[test]
    fn oversized_upload_spills_out_of_the_building() {
        use crate::systems::house::generator::upload::rooms_from_areas;

        let mut params = DesignParameters::default();
        params.width = 10.0;
        params.depth = 9.0;
        params.rooms = rooms_from_areas(&[(RoomType::Living, 40.0); 4], 1);
        let warnings = assess(&params, &generate_layout(&params));
        assert!(warnings.iter().any(|w| matches!(
            w,
            DesignWarning::RoomOutsideFootprint { floor: 0, .. }
        )));
        // the first room starts at the back-left corner
        assert!(!warnings.contains(&DesignWarning::RoomOutsideFootprint { id: "upload-1".into(), floor: 0 }));
    }

    #[test]
    fn upload_that_fits_stays_quiet() {
        use crate::systems::house::generator::upload::rooms_from_areas;

        let mut params = DesignParameters::default();
        params.rooms = rooms_from_areas(&[(RoomType::Living, 30.0), (RoomType::Kitchen, 12.0)], params.floor_count);
        let warnings = assess(&params, &generate_layout(&params));
        assert!(!warnings.iter().any(|w| matches!(w, DesignWarning::RoomOutsideFootprint { .. })));
    }

    #[test]
    fn externally_assembled_overlaps_are_reported() {
        let params = DesignParameters::default();
        let item = |x: f32| FurnitureItem {
            kind: FurnitureType::Table,
            position: Vec3::new(x, 0.0, 0.0),
            rotation: 0.0,
            width: 1.0,
            depth: 1.0,
            height: 0.75,
            floor: 0,
        };
        let layout = InteriorLayout { rooms: Vec::new(), furniture: vec![item(0.0), item(0.5)] };
        assert_eq!(
            assess(&params, &layout),
            vec![DesignWarning::FurnitureOverlap { floor: 0, first: 0, second: 1 }]
        );
    }
}

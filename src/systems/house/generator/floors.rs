// envelope + floor count -> per floor elevation, openings and visibility

use bevy::prelude::*;

use crate::config::*;
use super::params::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facade {
    Front,
    Back,
}

/// A window or door slot on a facade, `x` is the centre along the width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Opening {
    pub facade: Facade,
    pub x: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloorLevel {
    pub index: u32,
    pub elevation: f32,
    pub front_windows: u32,
    pub back_windows: u32,
    pub openings: Vec<Opening>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoofGeometry {
    pub kind: RoofType,
    pub base_elevation: f32,
    pub ridge_height: f32,
    pub overhang: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloorStack {
    pub floors: Vec<FloorLevel>,
    pub roof: RoofGeometry,
    /// front door centre on the ground floor
    pub door: Opening,
}

impl FloorStack {
    pub fn top_floor(&self) -> u32 {
        self.floors.len().saturating_sub(1) as u32
    }

    /// Floors above the active one are cut away, nothing is hidden without a filter.
    pub fn floor_visible(&self, index: u32, active: Option<u32>) -> bool {
        active.is_none_or(|active| index <= active)
    }

    /// Roof only shows for the unfiltered view or when looking at the top floor.
    pub fn roof_visible(&self, active: Option<u32>) -> bool {
        active.is_none_or(|active| active == self.top_floor())
    }
}

pub fn floor_elevation(foundation_height: f32, index: u32) -> f32 {
    foundation_height + index as f32 * FLOOR_HEIGHT
}

/// (upper front, back, ground front) window counts for a facade budget.
pub fn window_split(window_count: u32) -> (u32, u32, u32) {
    let upper_front = window_count.div_ceil(2);
    let back = (window_count / 2).max(1);
    let ground_front = (upper_front / 2).max(1);
    (upper_front, back, ground_front)
}

// evenly spaced centres between `start` and `end`
fn spread(count: u32, start: f32, end: f32) -> impl Iterator<Item = f32> {
    let step = (end - start) / (count + 1) as f32;
    (1..=count).map(move |i| start + step * i as f32)
}

fn facade_openings(facade: Facade, count: u32, width: f32) -> Vec<Opening> {
    spread(count, -width / 2.0, width / 2.0)
        .map(|x| Opening { facade, x })
        .collect()
}

// ground floor front keeps the door bay in the middle clear
fn ground_front_openings(count: u32, width: f32) -> Vec<Opening> {
    let bay = (DOOR_BAY_WIDTH / 2.0).min(width / 4.0);
    let left = count.div_ceil(2);
    let right = count - left;

    spread(left, -width / 2.0, -bay)
        .chain(spread(right, bay, width / 2.0))
        .map(|x| Opening { facade: Facade::Front, x })
        .collect()
}

pub fn resolve_floors(params: &DesignParameters) -> FloorStack {
    let floor_count = params.floor_count.max(1);
    let (upper_front, back, ground_front) = window_split(params.window_count);

    let floors = (0..floor_count)
        .map(|index| {
            let front_windows = if index == 0 { ground_front } else { upper_front };
            let mut openings = if index == 0 {
                ground_front_openings(front_windows, params.width)
            } else {
                facade_openings(Facade::Front, front_windows, params.width)
            };
            openings.extend(facade_openings(Facade::Back, back, params.width));

            FloorLevel {
                index,
                elevation: floor_elevation(params.foundation_height, index),
                front_windows,
                back_windows: back,
                openings,
            }
        })
        .collect();

    let ridge_height = match params.roof_type {
        RoofType::Flat => 0.0,
        RoofType::Gable | RoofType::Hip => params.depth * ROOF_PITCH_RATIO,
    };

    FloorStack {
        floors,
        roof: RoofGeometry {
            kind: params.roof_type,
            base_elevation: floor_elevation(params.foundation_height, floor_count),
            ridge_height,
            overhang: params.roof_overhang,
        },
        door: Opening { facade: Facade::Front, x: 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(floor_count: u32, window_count: u32) -> DesignParameters {
        DesignParameters {
            floor_count,
            window_count,
            foundation_height: 0.5,
            ..DesignParameters::default()
        }
    }

    #[test]
    fn elevations_stack_from_foundation() {
        let stack = resolve_floors(&params(3, 5));
        let elevations: Vec<f32> = stack.floors.iter().map(|f| f.elevation).collect();
        assert_eq!(elevations.len(), 3);
        assert!((elevations[0] - 0.5).abs() < 1e-5);
        assert!((elevations[2] - (0.5 + 2.0 * FLOOR_HEIGHT)).abs() < 1e-5);
        assert!((stack.roof.base_elevation - (0.5 + 3.0 * FLOOR_HEIGHT)).abs() < 1e-5);
    }

    #[test]
    fn ground_floor_front_gets_half_the_windows() {
        let stack = resolve_floors(&params(2, 6));
        assert_eq!(stack.floors[1].front_windows, 3);
        assert_eq!(stack.floors[0].front_windows, 1);
        assert_eq!(stack.floors[0].back_windows, stack.floors[1].back_windows);
    }

    #[test]
    fn ground_floor_front_never_drops_to_zero() {
        assert_eq!(window_split(1), (1, 1, 1));
        assert_eq!(window_split(0).2, 1);
    }

    #[test]
    fn ground_windows_avoid_the_door_bay() {
        let stack = resolve_floors(&params(1, 10));
        for opening in stack.floors[0].openings.iter().filter(|o| o.facade == Facade::Front) {
            assert!(opening.x.abs() >= DOOR_BAY_WIDTH / 2.0 - 1e-4);
        }
    }

    #[test]
    fn roof_visibility_follows_active_floor() {
        let stack = resolve_floors(&params(3, 5));
        assert!(stack.roof_visible(None));
        assert!(stack.roof_visible(Some(2)));
        assert!(!stack.roof_visible(Some(0)));
        // data for every floor stays around regardless of the filter
        assert_eq!(stack.floors.len(), 3);
        assert!(stack.floor_visible(0, Some(1)));
        assert!(!stack.floor_visible(2, Some(1)));
    }

    #[test]
    fn flat_roofs_have_no_ridge() {
        let stack = resolve_floors(&params(1, 5));
        assert_eq!(stack.roof.ridge_height, 0.0);
    }
}

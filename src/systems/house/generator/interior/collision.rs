// axis aligned overlap checks for furniture footprints in plan (x, z)

use bevy::prelude::*;
use bevy::math::bounding::{Aabb2d, BoundingVolume, IntersectsVolume};

use crate::systems::house::generator::params::FurnitureItem;
use crate::systems::house::generator::utils::{rect, rect_contains};

/// Plan footprint of an item, rotation already applied.
pub fn item_bounds(item: &FurnitureItem) -> Aabb2d {
    rect(Vec2::new(item.position.x, item.position.z), item.plan_size())
}

/// `true` when the two boxes come closer than `clearance`.
pub fn overlaps(a: &Aabb2d, b: &Aabb2d, clearance: f32) -> bool {
    let margin = Vec2::splat(clearance / 2.0);
    a.grow(margin).intersects(&b.grow(margin))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementConflict {
    /// footprint leaves the zone it was anchored to
    OutsideZone,
    /// too close to an already accepted item, index into the accepted list
    Overlap(usize),
}

/// Accepts placements one by one and rejects the ones that collide with earlier ones.
#[derive(Debug, Default)]
pub struct PlacementValidator {
    clearance: f32,
    accepted: Vec<(u32, Aabb2d)>,
}

impl PlacementValidator {
    pub fn new(clearance: f32) -> Self {
        Self { clearance, accepted: Vec::new() }
    }

    pub fn check(&self, item: &FurnitureItem, zone: &Aabb2d) -> Result<(), PlacementConflict> {
        let bounds = item_bounds(item);
        if !rect_contains(zone, &bounds) {
            return Err(PlacementConflict::OutsideZone);
        }

        let hit = self.accepted.iter().position(|(floor, other)| {
            *floor == item.floor && overlaps(&bounds, other, self.clearance)
        });
        match hit {
            Some(index) => Err(PlacementConflict::Overlap(index)),
            None => Ok(()),
        }
    }

    pub fn try_place(&mut self, item: &FurnitureItem, zone: &Aabb2d) -> Result<(), PlacementConflict> {
        self.check(item, zone)?;
        self.accepted.push((item.floor, item_bounds(item)));
        Ok(())
    }
}

/// Every pair of items on the same floor that violates the clearance.
pub fn find_overlaps(items: &[FurnitureItem], clearance: f32) -> Vec<(usize, usize)> {
    let bounds: Vec<Aabb2d> = items.iter().map(item_bounds).collect();
    let mut pairs = Vec::new();

    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            if items[i].floor == items[j].floor && overlaps(&bounds[i], &bounds[j], clearance) {
                pairs.push((i, j));
            }
        }
    }

    pairs
}

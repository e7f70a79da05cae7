// rule based furniture anchoring, every piece is placed relative to its zone walls
// front of a zone is +z, left is -x

use std::f32::consts::{FRAC_PI_2, PI};

use bevy::prelude::*;

use crate::config::{VIEWING_DISTANCE, WALL_GAP};
use crate::systems::house::generator::params::{FurnitureItem, FurnitureType};
use super::zoning::{Furnishing, Zone};

const FACE_FRONT: f32 = 0.0;
const FACE_RIGHT: f32 = FRAC_PI_2;
const FACE_BACK: f32 = PI;
const FACE_LEFT: f32 = 3.0 * FRAC_PI_2;

/// (width, depth, height) of a piece before rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dims {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

const fn dims(width: f32, depth: f32, height: f32) -> Dims {
    Dims { width, depth, height }
}

pub const SOFA: Dims = dims(2.2, 0.9, 0.8);
pub const TV_UNIT: Dims = dims(1.8, 0.45, 0.5);
pub const DINING_TABLE: Dims = dims(1.6, 0.9, 0.75);
pub const DESK: Dims = dims(1.4, 0.7, 0.75);
pub const CHAIR: Dims = dims(0.45, 0.45, 0.9);
pub const LIVING_RUG: Dims = dims(1.6, 2.0, 0.01);
pub const BEDROOM_RUG: Dims = dims(1.4, 2.0, 0.01);
pub const PLANT: Dims = dims(0.5, 0.5, 1.2);
pub const DOUBLE_BED: Dims = dims(1.6, 2.1, 0.6);
pub const GUEST_BED: Dims = dims(1.4, 2.0, 0.6);
pub const WARDROBE: Dims = dims(1.2, 0.6, 2.1);
pub const SMALL_WARDROBE: Dims = dims(1.0, 0.6, 2.1);
pub const COUNTER: Dims = dims(2.4, 0.65, 0.9);
pub const SIDE_COUNTER: Dims = dims(1.8, 0.65, 0.9);
pub const TOILET: Dims = dims(0.4, 0.7, 0.8);
pub const SHOWER: Dims = dims(0.9, 0.9, 2.1);
pub const VANITY: Dims = dims(0.9, 0.5, 0.85);

// gap between neighbouring pieces inside a zone
const SPACING: f32 = 0.15;

struct Anchor<'a> {
    zone: &'a Zone,
    elevation: f32,
    items: Vec<FurnitureItem>,
}

impl Anchor<'_> {
    fn place(&mut self, kind: FurnitureType, size: Dims, center: Vec2, rotation: f32) {
        self.items.push(FurnitureItem {
            kind,
            position: Vec3::new(center.x, self.elevation, center.y),
            rotation,
            width: size.width,
            depth: size.depth,
            height: size.height,
            floor: self.zone.floor,
        });
    }
}

/// Candidate placements for a zone. Nothing here checks for conflicts, see `PlacementValidator`.
pub fn furnish(zone: &Zone, elevation: f32) -> Vec<FurnitureItem> {
    let min = zone.bounds.min;
    let max = zone.bounds.max;
    let center = (min + max) / 2.0;
    let g = WALL_GAP;

    let mut anchor = Anchor { zone, elevation, items: Vec::new() };

    match zone.furnishing {
        Furnishing::Living => {
            // tv on the left wall, sofa floats facing it
            let tv_x = min.x + g + TV_UNIT.depth / 2.0;
            let sofa_x = min.x + g + TV_UNIT.depth + VIEWING_DISTANCE + SOFA.depth / 2.0;
            let rug_x = min.x + g + TV_UNIT.depth + VIEWING_DISTANCE / 2.0;
            anchor.place(FurnitureType::TvUnit, TV_UNIT, Vec2::new(tv_x, center.y), FACE_RIGHT);
            anchor.place(FurnitureType::Sofa, SOFA, Vec2::new(sofa_x, center.y), FACE_LEFT);
            anchor.place(FurnitureType::Rug, LIVING_RUG, Vec2::new(rug_x, center.y), FACE_FRONT);
            anchor.place(FurnitureType::Plant, PLANT, corner(min, max, -1.0, 1.0, PLANT), FACE_FRONT);
        }
        Furnishing::Dining => {
            anchor.place(FurnitureType::Table, DINING_TABLE, center, FACE_FRONT);
            let reach = DINING_TABLE.depth / 2.0 + SPACING + CHAIR.depth / 2.0;
            for side in [-1.0, 1.0] {
                let z = center.y + side * reach;
                let facing = if side < 0.0 { FACE_FRONT } else { FACE_BACK };
                anchor.place(FurnitureType::Chair, CHAIR, Vec2::new(center.x - 0.4, z), facing);
                anchor.place(FurnitureType::Chair, CHAIR, Vec2::new(center.x + 0.4, z), facing);
            }
            anchor.place(FurnitureType::Plant, PLANT, corner(min, max, 1.0, 1.0, PLANT), FACE_FRONT);
        }
        Furnishing::Kitchen => {
            // counter run along the back wall, return along the left wall
            let back = Vec2::new(min.x + g + COUNTER.width / 2.0, min.y + g + COUNTER.depth / 2.0);
            let side = Vec2::new(
                min.x + g + SIDE_COUNTER.depth / 2.0,
                min.y + g + COUNTER.depth + SPACING + SIDE_COUNTER.width / 2.0,
            );
            anchor.place(FurnitureType::KitchenUnit, COUNTER, back, FACE_FRONT);
            anchor.place(FurnitureType::KitchenUnit, SIDE_COUNTER, side, FACE_RIGHT);
        }
        Furnishing::Study => {
            let desk = Vec2::new(center.x, min.y + g + DESK.depth / 2.0);
            let chair = Vec2::new(center.x, min.y + g + DESK.depth + SPACING + CHAIR.depth / 2.0);
            let shelf = Vec2::new(max.x - g - WARDROBE.depth / 2.0, center.y);
            anchor.place(FurnitureType::Table, DESK, desk, FACE_FRONT);
            anchor.place(FurnitureType::Chair, CHAIR, chair, FACE_BACK);
            anchor.place(FurnitureType::Wardrobe, WARDROBE, shelf, FACE_LEFT);
            anchor.place(FurnitureType::Plant, PLANT, corner(min, max, -1.0, 1.0, PLANT), FACE_FRONT);
        }
        Furnishing::MasterBedroom => {
            // head of the bed against the left wall
            let bed = Vec2::new(min.x + g + DOUBLE_BED.depth / 2.0, center.y);
            let rug = Vec2::new(min.x + g + DOUBLE_BED.depth + 0.4 + BEDROOM_RUG.width / 2.0, center.y);
            let wardrobe = Vec2::new(max.x - g - WARDROBE.depth / 2.0, center.y);
            anchor.place(FurnitureType::Bed, DOUBLE_BED, bed, FACE_RIGHT);
            anchor.place(FurnitureType::Wardrobe, WARDROBE, wardrobe, FACE_LEFT);
            anchor.place(FurnitureType::Rug, BEDROOM_RUG, rug, FACE_FRONT);
            anchor.place(FurnitureType::Plant, PLANT, corner(min, max, -1.0, 1.0, PLANT), FACE_FRONT);
        }
        Furnishing::GuestBedroom => {
            // head of the bed against the right wall
            let bed = Vec2::new(max.x - g - GUEST_BED.depth / 2.0, center.y);
            let wardrobe = Vec2::new(min.x + g + SMALL_WARDROBE.width / 2.0, min.y + g + SMALL_WARDROBE.depth / 2.0);
            anchor.place(FurnitureType::Bed, GUEST_BED, bed, FACE_LEFT);
            anchor.place(FurnitureType::Wardrobe, SMALL_WARDROBE, wardrobe, FACE_FRONT);
            anchor.place(FurnitureType::Plant, PLANT, corner(min, max, -1.0, 1.0, PLANT), FACE_FRONT);
        }
        Furnishing::Bathroom => {
            // wet wall along the back: shower, toilet, vanity
            let shower = Vec2::new(min.x + g + SHOWER.width / 2.0, min.y + g + SHOWER.depth / 2.0);
            let toilet_x = min.x + g + SHOWER.width + 0.2 + TOILET.width / 2.0;
            let vanity_x = toilet_x + TOILET.width / 2.0 + 0.2 + VANITY.width / 2.0;
            anchor.place(FurnitureType::Shower, SHOWER, shower, FACE_FRONT);
            anchor.place(FurnitureType::Toilet, TOILET, Vec2::new(toilet_x, min.y + g + TOILET.depth / 2.0), FACE_FRONT);
            anchor.place(FurnitureType::Vanity, VANITY, Vec2::new(vanity_x, min.y + g + VANITY.depth / 2.0), FACE_FRONT);
        }
        Furnishing::Auxiliary => {
            anchor.place(FurnitureType::Table, DESK, Vec2::new(center.x, min.y + g + DESK.depth / 2.0), FACE_FRONT);
        }
        Furnishing::Corridor => {
            anchor.place(FurnitureType::Plant, PLANT, corner(min, max, -1.0, -1.0, PLANT), FACE_FRONT);
        }
    }

    anchor.items
}

// centre of a square piece tucked into a zone corner, sides are -1 / +1 for min / max
fn corner(min: Vec2, max: Vec2, side_x: f32, side_z: f32, size: Dims) -> Vec2 {
    let inset = Vec2::new(WALL_GAP + size.width / 2.0, WALL_GAP + size.depth / 2.0);
    let x = if side_x < 0.0 { min.x + inset.x } else { max.x - inset.x };
    let z = if side_z < 0.0 { min.y + inset.y } else { max.y - inset.y };
    Vec2::new(x, z)
}

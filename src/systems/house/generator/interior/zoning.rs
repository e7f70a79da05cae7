// floor plate -> rectangular zones, one room each

use bevy::prelude::*;
use bevy::math::bounding::{Aabb2d, BoundingVolume};

use crate::config::*;
use crate::systems::house::generator::footprint::{wing_interior, FootprintPlan};
use crate::systems::house::generator::params::*;
use crate::systems::house::generator::utils::{rect, rect_from_corners, round_tenth};

/// Which anchor rule set furnishes a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Furnishing {
    Living,
    Dining,
    Kitchen,
    Study,
    MasterBedroom,
    GuestBedroom,
    Bathroom,
    /// wing room, a single desk
    Auxiliary,
    Corridor,
}

impl Furnishing {
    // imported rooms only carry a type, pick the closest rule set
    pub fn for_room(room: &Room) -> Self {
        match room.room_type {
            RoomType::Living => Furnishing::Living,
            RoomType::Kitchen => Furnishing::Kitchen,
            RoomType::Dining => Furnishing::Dining,
            RoomType::Study => Furnishing::Study,
            RoomType::Bathroom => Furnishing::Bathroom,
            RoomType::Corridor => Furnishing::Corridor,
            RoomType::Bedroom if room.area() >= 16.0 => Furnishing::MasterBedroom,
            RoomType::Bedroom => Furnishing::GuestBedroom,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub room_type: RoomType,
    pub floor: u32,
    pub bounds: Aabb2d,
    pub furnishing: Furnishing,
}

impl Zone {
    fn new(floor: u32, slug: &str, name: &str, room_type: RoomType, furnishing: Furnishing, bounds: Aabb2d) -> Self {
        Self {
            id: format!("f{}-{}", floor, slug),
            name: name.to_string(),
            room_type,
            floor,
            bounds,
            furnishing,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.bounds.max - self.bounds.min
    }

    pub fn to_room(&self) -> Room {
        let size = self.size();
        let center = self.bounds.center();
        Room {
            id: self.id.clone(),
            name: self.name.clone(),
            room_type: self.room_type,
            floor: self.floor,
            width: size.x,
            depth: size.y,
            x: Some(center.x),
            z: Some(center.y),
        }
    }
}

/// Ground floor: living / dining across the front 60%, kitchen / study across the back.
pub fn ground_zones(main: &Aabb2d) -> Vec<Zone> {
    let depth = main.max.y - main.min.y;
    let width = main.max.x - main.min.x;
    let band = main.max.y - depth * GROUND_FRONT_BAND;
    let split = main.min.x + width * GROUND_SPLIT;

    vec![
        Zone::new(0, "living", "Living Room", RoomType::Living, Furnishing::Living,
            rect_from_corners(Vec2::new(main.min.x, band), Vec2::new(split, main.max.y))),
        Zone::new(0, "dining", "Dining Room", RoomType::Dining, Furnishing::Dining,
            rect_from_corners(Vec2::new(split, band), Vec2::new(main.max.x, main.max.y))),
        Zone::new(0, "kitchen", "Kitchen", RoomType::Kitchen, Furnishing::Kitchen,
            rect_from_corners(Vec2::new(main.min.x, main.min.y), Vec2::new(split, band))),
        Zone::new(0, "study", "Study", RoomType::Study, Furnishing::Study,
            rect_from_corners(Vec2::new(split, main.min.y), Vec2::new(main.max.x, band))),
    ]
}

/// Upper floors: master bedroom across the front half, bathroom and guest room behind.
pub fn upper_zones(main: &Aabb2d, floor: u32) -> Vec<Zone> {
    let depth = main.max.y - main.min.y;
    let width = main.max.x - main.min.x;
    let band = main.max.y - depth * UPPER_FRONT_BAND;
    let split = main.min.x + width * UPPER_BATH_SPLIT;

    vec![
        Zone::new(floor, "master", "Master Bedroom", RoomType::Bedroom, Furnishing::MasterBedroom,
            rect_from_corners(Vec2::new(main.min.x, band), Vec2::new(main.max.x, main.max.y))),
        Zone::new(floor, "bath", "Bathroom", RoomType::Bathroom, Furnishing::Bathroom,
            rect_from_corners(Vec2::new(main.min.x, main.min.y), Vec2::new(split, band))),
        Zone::new(floor, "guest", "Guest Bedroom", RoomType::Bedroom, Furnishing::GuestBedroom,
            rect_from_corners(Vec2::new(split, main.min.y), Vec2::new(main.max.x, band))),
    ]
}

pub fn wing_zone(plan: &FootprintPlan) -> Option<Zone> {
    wing_interior(plan).map(|bounds| {
        Zone::new(0, "wing", "Home Office", RoomType::Study, Furnishing::Auxiliary, bounds)
    })
}

/// Built-in zoning for every floor of the main mass, plus the wing room.
pub fn standard_zones(floor_count: u32, plan: &FootprintPlan) -> Vec<Zone> {
    let mut zones = ground_zones(&plan.main);
    zones.extend(wing_zone(plan));
    for floor in 1..floor_count.max(1) {
        zones.extend(upper_zones(&plan.main, floor));
    }
    zones
}

/// Zones for an uploaded room list. Rooms with a position keep it,
/// the rest are shelf packed per floor from the back-left corner of the main mass.
pub fn zones_from_rooms(rooms: &[Room], plan: &FootprintPlan) -> Vec<Zone> {
    let main = plan.main;
    // per floor (cursor, row depth)
    let mut cursors: Vec<(u32, Vec2, f32)> = Vec::new();

    rooms
        .iter()
        .map(|room| {
            let size = Vec2::new(room.width.max(0.1), room.depth.max(0.1));
            let center = match (room.x, room.z) {
                (Some(x), Some(z)) => Vec2::new(x, z),
                _ => {
                    let slot = match cursors.iter().position(|(floor, _, _)| *floor == room.floor) {
                        Some(slot) => slot,
                        None => {
                            cursors.push((room.floor, main.min, 0.0));
                            cursors.len() - 1
                        }
                    };
                    let (_, cursor, row_depth) = &mut cursors[slot];
                    if cursor.x > main.min.x && cursor.x + size.x > main.max.x {
                        // next row
                        cursor.x = main.min.x;
                        cursor.y += *row_depth;
                        *row_depth = 0.0;
                    }
                    let center = *cursor + size / 2.0;
                    cursor.x += size.x;
                    *row_depth = row_depth.max(size.y);
                    Vec2::new(round_tenth(center.x), round_tenth(center.y))
                }
            };

            Zone {
                id: room.id.clone(),
                name: room.name.clone(),
                room_type: room.room_type,
                floor: room.floor,
                bounds: rect(center, size),
                furnishing: Furnishing::for_room(room),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::house::generator::footprint::{plan_footprint, plan_wing};

    fn plan(width: f32, depth: f32, wing: bool) -> FootprintPlan {
        let mut params = DesignParameters { width, depth, ..DesignParameters::default() };
        if wing {
            params.footprint_shape = FootprintShape::LShape;
            params.wing_params = Some(plan_wing(width, depth));
        }
        plan_footprint(&params)
    }

    #[test]
    fn ground_floor_uses_sixty_forty_bands() {
        let zones = ground_zones(&plan(10.0, 10.0, false).main);
        let living = &zones[0];
        let kitchen = &zones[2];
        assert_eq!(living.room_type, RoomType::Living);
        assert!((living.size().y - 6.0).abs() < 1e-4);
        assert!((kitchen.size().y - 4.0).abs() < 1e-4);
        assert!((living.size().x - 5.0).abs() < 1e-4);
        // living sits at the front (+z)
        assert!(living.bounds.center().y > kitchen.bounds.center().y);
    }

    #[test]
    fn upper_floor_splits_back_band() {
        let zones = upper_zones(&plan(10.0, 10.0, false).main, 1);
        let names: Vec<&str> = zones.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, ["Master Bedroom", "Bathroom", "Guest Bedroom"]);
        assert!((zones[0].size().y - 5.0).abs() < 1e-4);
        assert!((zones[1].size().x - 4.0).abs() < 1e-4);
        assert!((zones[2].size().x - 6.0).abs() < 1e-4);
        assert!(zones.iter().all(|z| z.floor == 1));
    }

    #[test]
    fn zone_counts_per_floor() {
        assert_eq!(standard_zones(1, &plan(12.0, 10.0, false)).len(), 4);
        assert_eq!(standard_zones(3, &plan(12.0, 10.0, false)).len(), 10);
        assert_eq!(standard_zones(2, &plan(18.0, 15.0, true)).len(), 8);
    }

    #[test]
    fn wing_zone_starts_at_main_wall() {
        let zone = wing_zone(&plan(20.0, 16.0, true)).unwrap();
        assert!((zone.bounds.min.x - 10.0).abs() < 1e-5);
        assert_eq!(zone.furnishing, Furnishing::Auxiliary);
    }

    #[test]
    fn unplaced_rooms_are_packed_without_overlap() {
        let room = |id: &str, width: f32| Room {
            id: id.into(),
            name: id.into(),
            room_type: RoomType::Living,
            floor: 0,
            width,
            depth: 4.0,
            x: None,
            z: None,
        };
        let zones = zones_from_rooms(&[room("a", 6.0), room("b", 5.0), room("c", 4.0)], &plan(12.0, 10.0, false));
        // a and b share the back row of the 12m plate, c wraps to the next row
        assert!((zones[0].bounds.min.x + 6.0).abs() < 1e-4);
        assert!((zones[1].bounds.min.x - 0.0).abs() < 1e-4);
        assert!((zones[2].bounds.min.x + 6.0).abs() < 1e-4);
        assert!((zones[2].bounds.min.y - (-5.0 + 4.0)).abs() < 1e-4);
    }
}

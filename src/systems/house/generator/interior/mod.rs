// resolved envelope + floor stack -> room zones and furniture per floor

use bevy::log::debug;

use crate::config::FURNITURE_CLEARANCE;
use super::floors::floor_elevation;
use super::footprint::plan_footprint;
use super::params::*;

pub mod collision;
pub mod furnish;
pub mod zoning;

use collision::PlacementValidator;
use zoning::Zone;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteriorLayout {
    pub rooms: Vec<Room>,
    pub furniture: Vec<FurnitureItem>,
}

impl InteriorLayout {
    pub fn rooms_on(&self, floor: u32) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |room| room.floor == floor)
    }

    pub fn furniture_on(&self, floor: u32) -> impl Iterator<Item = &FurnitureItem> {
        self.furniture.iter().filter(move |item| item.floor == floor)
    }
}

/// Drops decorative pieces for the minimal tier. Standard and premium currently keep the same set.
pub fn apply_density(furniture: Vec<FurnitureItem>, density: FurnitureDensity) -> Vec<FurnitureItem> {
    match density {
        FurnitureDensity::Minimal => furniture.into_iter().filter(|item| !item.kind.is_decorative()).collect(),
        FurnitureDensity::Standard | FurnitureDensity::Premium => furniture,
    }
}

/// Zones for the design: uploaded rooms when present, otherwise the built-in zoning.
pub fn zones_for(params: &DesignParameters) -> Vec<Zone> {
    let plan = plan_footprint(params);
    if params.rooms.is_empty() {
        zoning::standard_zones(params.floor_count, &plan)
    } else {
        zoning::zones_from_rooms(&params.rooms, &plan)
    }
}

/// Deterministic: the same parameters always produce the same layout.
pub fn generate_layout(params: &DesignParameters) -> InteriorLayout {
    let zones = zones_for(params);
    let mut validator = PlacementValidator::new(FURNITURE_CLEARANCE);
    let mut furniture = Vec::new();

    for zone in &zones {
        let elevation = floor_elevation(params.foundation_height, zone.floor);
        for item in furnish::furnish(zone, elevation) {
            match validator.try_place(&item, &zone.bounds) {
                Ok(()) => furniture.push(item),
                Err(conflict) => debug!("rejected {:?} in {}: {:?}", item.kind, zone.id, conflict),
            }
        }
    }

    InteriorLayout {
        rooms: zones.iter().map(Zone::to_room).collect(),
        furniture: apply_density(furniture, params.furniture_density),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::house::generator::footprint::plan_wing;

    fn design(width: f32, depth: f32, floor_count: u32) -> DesignParameters {
        DesignParameters { width, depth, floor_count, ..DesignParameters::default() }
    }

    #[test]
    fn built_in_zoning_places_everything() {
        // every anchor survives validation for the generated size range
        for (width, depth) in [(10.0, 9.0), (14.0, 13.0), (16.0, 14.0), (22.0, 18.0)] {
            let params = design(width, depth, 2);
            let expected: usize = zones_for(&params).iter().map(|zone| furnish::furnish(zone, 0.0).len()).sum();
            assert_eq!(generate_layout(&params).furniture.len(), expected, "{width}x{depth}");
        }
    }

    #[test]
    fn wing_room_gets_a_single_piece() {
        let mut params = design(16.0, 14.0, 1);
        params.footprint_shape = FootprintShape::LShape;
        params.wing_params = Some(plan_wing(16.0, 14.0));
        let layout = generate_layout(&params);
        assert_eq!(layout.rooms.len(), 5);
        let wing = layout.rooms.iter().find(|r| r.id == "f0-wing").unwrap();
        let inside: Vec<_> = layout
            .furniture
            .iter()
            .filter(|item| item.position.x > params.width / 2.0)
            .collect();
        assert_eq!(inside.len(), 1);
        assert_eq!(wing.room_type, RoomType::Study);
    }

    #[test]
    fn minimal_density_strips_decoration() {
        let mut params = design(12.0, 10.0, 2);
        params.furniture_density = FurnitureDensity::Minimal;
        let layout = generate_layout(&params);
        assert!(layout.furniture.iter().all(|item| !item.kind.is_decorative()));
        assert!(layout.furniture.iter().any(|item| item.kind == FurnitureType::Bed));
    }

    #[test]
    fn furniture_sits_on_its_floor_elevation() {
        let mut params = design(12.0, 10.0, 3);
        params.foundation_height = 0.5;
        let layout = generate_layout(&params);
        for item in &layout.furniture {
            assert!((item.position.y - floor_elevation(0.5, item.floor)).abs() < 1e-5);
            assert!(item.floor < 3);
        }
        assert_eq!(layout.rooms_on(2).count(), 3);
    }

    #[test]
    fn overlapping_uploads_are_resolved_by_rejection() {
        let mut params = design(12.0, 10.0, 1);
        let room = |id: &str| Room {
            id: id.into(),
            name: "Lounge".into(),
            room_type: RoomType::Living,
            floor: 0,
            width: 5.0,
            depth: 5.0,
            x: Some(0.0),
            z: Some(0.0),
        };
        params.rooms = vec![room("a"), room("b")];
        let layout = generate_layout(&params);
        // second room is stacked on the first, none of its pieces fit
        assert_eq!(layout.rooms.len(), 2);
        assert_eq!(layout.furniture.len(), 4);
        assert!(collision::find_overlaps(&layout.furniture, FURNITURE_CLEARANCE).is_empty());
    }

    #[test]
    fn tiny_rooms_shed_what_does_not_fit() {
        let mut params = design(12.0, 10.0, 1);
        params.rooms = vec![Room {
            id: "nook".into(),
            name: "Nook".into(),
            room_type: RoomType::Living,
            floor: 0,
            width: 2.0,
            depth: 2.5,
            x: None,
            z: None,
        }];
        let layout = generate_layout(&params);
        assert!(layout.furniture.iter().all(|item| item.kind != FurnitureType::Sofa));
    }
}

// design data model shared by every generation stage
// DesignParameters is the flat record that gets exported / imported as JSON

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RoofType {
    #[default]
    Flat,
    Gable,
    Hip,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FacadeMaterial {
    #[default]
    Concrete,
    Brick,
    Wood,
    Stone,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WindowStyle {
    #[default]
    Standard,
    FloorToCeiling,
    Arched,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DoorStyle {
    #[default]
    Modern,
    Classic,
    Industrial,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EnvType {
    #[default]
    Grass,
    Pavement,
    Gravel,
    Forest,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FootprintShape {
    #[default]
    #[serde(rename = "rectangular")]
    Rectangular,
    #[serde(rename = "L-shape")]
    LShape,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FurnitureDensity {
    Minimal,
    #[default]
    Standard,
    Premium,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LightTemperature {
    Warm,
    #[default]
    Neutral,
    Cool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialTier {
    Economy,
    #[default]
    Standard,
    Premium,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "ft")]
    Feet,
}

// compass points, serialized as "N", "NE", ...
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NW")]
    NorthWest,
}

impl Orientation {
    /// Rotation of the front facade about the vertical axis, north = 0, clockwise.
    pub fn yaw(self) -> f32 {
        let step = std::f32::consts::FRAC_PI_4;
        let index = match self {
            Orientation::North => 0.0,
            Orientation::NorthEast => 1.0,
            Orientation::East => 2.0,
            Orientation::SouthEast => 3.0,
            Orientation::South => 4.0,
            Orientation::SouthWest => 5.0,
            Orientation::West => 6.0,
            Orientation::NorthWest => 7.0,
        };
        -index * step
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct WingOffset {
    pub x: f32,
    pub z: f32,
}

/// Secondary mass attached to the main one to form an L.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct WingParams {
    pub width: f32,
    pub depth: f32,
    /// wing centre relative to the main mass centre
    pub offset: WingOffset,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct PlotSize {
    pub width: f32,
    pub depth: f32,
    pub unit: LengthUnit,
}

impl PlotSize {
    pub fn area_sq_meters(&self) -> f32 {
        let area = self.width * self.depth;
        match self.unit {
            LengthUnit::Meters => area,
            LengthUnit::Feet => area * crate::config::SQ_FEET_TO_SQ_METERS,
        }
    }

    pub fn width_meters(&self) -> f32 {
        match self.unit {
            LengthUnit::Meters => self.width,
            LengthUnit::Feet => self.width * 0.3048,
        }
    }

    pub fn depth_meters(&self) -> f32 {
        match self.unit {
            LengthUnit::Meters => self.depth,
            LengthUnit::Feet => self.depth * 0.3048,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Setbacks {
    pub front: f32,
    pub back: f32,
    pub left: f32,
    pub right: f32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    Living,
    Kitchen,
    Bedroom,
    Bathroom,
    Dining,
    Study,
    Corridor,
}

impl RoomType {
    pub const ALL: [RoomType; 7] = [
        RoomType::Living,
        RoomType::Kitchen,
        RoomType::Bedroom,
        RoomType::Bathroom,
        RoomType::Dining,
        RoomType::Study,
        RoomType::Corridor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RoomType::Living => "Living Room",
            RoomType::Kitchen => "Kitchen",
            RoomType::Bedroom => "Bedroom",
            RoomType::Bathroom => "Bathroom",
            RoomType::Dining => "Dining Room",
            RoomType::Study => "Study",
            RoomType::Corridor => "Corridor",
        }
    }

    // rooms that belong downstairs when a plan does not say otherwise
    pub fn is_public(self) -> bool {
        matches!(self, RoomType::Living | RoomType::Kitchen | RoomType::Dining | RoomType::Corridor)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub floor: u32,
    pub width: f32,
    pub depth: f32,
    // centre of the room in plan coordinates, absent for unplaced uploads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
}

impl Room {
    pub fn area(&self) -> f32 {
        self.width * self.depth
    }
}

/// Furniture tags are a contract with the renderer, keep the set stable.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum FurnitureType {
    Sofa,
    Table,
    Bed,
    Wardrobe,
    KitchenUnit,
    Toilet,
    Shower,
    Vanity,
    TvUnit,
    Rug,
    Plant,
    Chair,
}

impl FurnitureType {
    pub const ALL: [FurnitureType; 12] = [
        FurnitureType::Sofa,
        FurnitureType::Table,
        FurnitureType::Bed,
        FurnitureType::Wardrobe,
        FurnitureType::KitchenUnit,
        FurnitureType::Toilet,
        FurnitureType::Shower,
        FurnitureType::Vanity,
        FurnitureType::TvUnit,
        FurnitureType::Rug,
        FurnitureType::Plant,
        FurnitureType::Chair,
    ];

    /// Secondary pieces dropped by the minimal density tier.
    pub fn is_decorative(self) -> bool {
        matches!(self, FurnitureType::Rug | FurnitureType::Plant | FurnitureType::TvUnit | FurnitureType::Chair)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FurnitureItem {
    pub kind: FurnitureType,
    /// centre of the footprint at floor level (y = floor elevation)
    pub position: Vec3,
    /// radians about the vertical axis, multiples of PI/2
    pub rotation: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub floor: u32,
}

impl FurnitureItem {
    /// Plan extent (x, z) after rotation.
    pub fn plan_size(&self) -> Vec2 {
        let quarter_turns = (self.rotation / std::f32::consts::FRAC_PI_2).round() as i32;
        if quarter_turns.rem_euclid(2) == 1 {
            Vec2::new(self.depth, self.width)
        } else {
            Vec2::new(self.width, self.depth)
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesignParameters {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub roof_type: RoofType,
    pub wall_color: String,
    pub roof_color: String,
    pub facade_material: FacadeMaterial,
    pub window_count: u32,
    pub window_style: WindowStyle,
    pub door_style: DoorStyle,
    pub porch_depth: f32,
    pub roof_overhang: f32,
    pub foundation_height: f32,
    pub env_type: EnvType,
    pub footprint_shape: FootprintShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wing_params: Option<WingParams>,
    pub floor_count: u32,
    pub furniture_density: FurnitureDensity,
    pub interior_light_temp: LightTemperature,
    pub plot_size: PlotSize,
    pub setbacks: Setbacks,
    pub orientation: Orientation,
    #[serde(default)]
    pub rooms: Vec<Room>,
    pub smart_home: bool,
    pub ventilation_plan: bool,
    pub material_tier: MaterialTier,
}

impl Default for DesignParameters {
    fn default() -> Self {
        use crate::config::*;

        let width = 12.0;
        let depth = 10.0;
        Self {
            width,
            depth,
            height: FLOOR_HEIGHT,
            roof_type: RoofType::Flat,
            wall_color: "#d9d9d6".to_string(),
            roof_color: "#555555".to_string(),
            facade_material: FacadeMaterial::Concrete,
            window_count: ((width + depth) / WINDOW_SPAN).floor() as u32,
            window_style: WindowStyle::Standard,
            door_style: DoorStyle::Modern,
            porch_depth: 2.0,
            roof_overhang: 0.5,
            foundation_height: 0.4,
            env_type: EnvType::Grass,
            footprint_shape: FootprintShape::Rectangular,
            wing_params: None,
            floor_count: 1,
            furniture_density: FurnitureDensity::Standard,
            interior_light_temp: LightTemperature::Neutral,
            plot_size: PlotSize {
                width: STANDARD_PLOT.0,
                depth: STANDARD_PLOT.1,
                unit: LengthUnit::Meters,
            },
            setbacks: Setbacks {
                front: SETBACK_FRONT,
                back: SETBACK_BACK,
                left: SETBACK_SIDE,
                right: SETBACK_SIDE,
            },
            orientation: Orientation::North,
            rooms: Vec::new(),
            smart_home: false,
            ventilation_plan: false,
            material_tier: MaterialTier::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_tags_match_export_format() {
        assert_eq!(serde_json::to_string(&FootprintShape::LShape).unwrap(), "\"L-shape\"");
        assert_eq!(serde_json::to_string(&WindowStyle::FloorToCeiling).unwrap(), "\"floor-to-ceiling\"");
        assert_eq!(serde_json::to_string(&FurnitureType::KitchenUnit).unwrap(), "\"kitchen-unit\"");
        assert_eq!(serde_json::to_string(&FurnitureType::TvUnit).unwrap(), "\"tv-unit\"");
        assert_eq!(serde_json::to_string(&Orientation::SouthWest).unwrap(), "\"SW\"");
        assert_eq!(serde_json::to_string(&LengthUnit::Meters).unwrap(), "\"m\"");
    }

    #[test]
    fn field_names_are_camel_case() {
        let json = serde_json::to_value(DesignParameters::default()).unwrap();
        for key in ["floorCount", "footprintShape", "facadeMaterial", "envType", "windowCount", "materialTier"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        // rectangular designs carry no wing at all
        assert!(json.get("wingParams").is_none());
    }

    #[test]
    fn plan_size_swaps_on_quarter_turn() {
        let item = FurnitureItem {
            kind: FurnitureType::Bed,
            position: Vec3::ZERO,
            rotation: std::f32::consts::FRAC_PI_2,
            width: 1.6,
            depth: 2.1,
            height: 0.6,
            floor: 0,
        };
        assert_eq!(item.plan_size(), Vec2::new(2.1, 1.6));
        let straight = FurnitureItem { rotation: std::f32::consts::PI, ..item };
        assert_eq!(straight.plan_size(), Vec2::new(1.6, 2.1));
    }

    #[test]
    fn feet_plots_convert_to_square_meters() {
        let plot = PlotSize { width: 100.0, depth: 100.0, unit: LengthUnit::Feet };
        assert!((plot.area_sq_meters() - 929.03).abs() < 0.1);
    }
}

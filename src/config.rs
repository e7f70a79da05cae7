// Configuration file, all measurements in real-world meters (1 unit = 1 meter)
// This controls the initial generation parameter settings

pub const INITIAL_SEED: u64 = 1512086461918454205;
pub const INITIAL_PROMPT: &str = "Two storey modern house with a garden";

// Massing
pub const FLOOR_HEIGHT: f32 = 3.2;          // storey height, slab to slab
pub const WINDOW_SPAN: f32 = 4.0;           // perimeter meters per window, (width + depth) / 4

// Size buckets for the random envelope draw (whole meters, inclusive)
pub const LARGE_WIDTH: (u32, u32) = (16, 22);
pub const LARGE_DEPTH: (u32, u32) = (14, 18);
pub const STANDARD_WIDTH: (u32, u32) = (10, 14);
pub const STANDARD_DEPTH: (u32, u32) = (9, 13);

// Footprint / wing
pub const WING_ROLL_THRESHOLD: f32 = 0.4;   // large houses grow a wing when the roll exceeds this
pub const WING_WIDTH_RATIO: f32 = 0.55;
pub const WING_DEPTH_RATIO: f32 = 0.6;
pub const MIN_WING_SIDE: f32 = 1.0;         // smallest wing side for tiny envelopes
pub const WING_SEAM_OVERLAP: f32 = 0.2;     // wing sinks into the main mass to hide the seam

// Plot defaults
pub const STANDARD_PLOT: (f32, f32) = (30.0, 40.0);
pub const LARGE_PLOT: (f32, f32) = (45.0, 55.0);
pub const SETBACK_FRONT: f32 = 5.0;
pub const SETBACK_BACK: f32 = 5.0;
pub const SETBACK_SIDE: f32 = 3.0;
pub const SQ_FEET_TO_SQ_METERS: f32 = 0.092903;

// Openings
pub const DOOR_BAY_WIDTH: f32 = 2.0;        // ground floor front windows keep clear of this bay
pub const ROOF_PITCH_RATIO: f32 = 0.35;     // ridge height as a fraction of depth

// Interior zoning ratios (fraction of floor depth / width)
pub const GROUND_FRONT_BAND: f32 = 0.6;
pub const GROUND_SPLIT: f32 = 0.5;
pub const UPPER_FRONT_BAND: f32 = 0.5;
pub const UPPER_BATH_SPLIT: f32 = 0.4;

// Furniture placement
pub const WALL_GAP: f32 = 0.1;              // distance kept between anchored furniture and walls
pub const FURNITURE_CLEARANCE: f32 = 0.1;   // minimum gap between two pieces on the same floor
pub const VIEWING_DISTANCE: f32 = 2.5;      // tv unit to sofa

// Advisories
pub const MAX_PLOT_COVERAGE: f32 = 0.75;
pub const MIN_ROOM_SIDE: f32 = 2.0;

// Upload path
pub const UPLOAD_ASPECT: f32 = 1.25;        // width:depth for rooms built from an area only

// pure generator core: prompt -> parameters -> envelope -> floors -> interior -> estimate
// nothing in here touches the ECS, the plugin feeds it and spawns the result

use bevy::prelude::*;

pub mod advisory;
pub mod estimate;
pub mod floors;
pub mod footprint;
pub mod interior;
pub mod massing;
pub mod mesh_gen;
pub mod params;
pub mod prompt;
pub mod upload;
pub mod utils;

// plan outline, x across the width, y along the depth (world z)
pub type Polygon = Vec<Vec2>;

use advisory::DesignWarning;
use estimate::{CostEstimate, RateTable};
use floors::FloorStack;
use footprint::FootprintPlan;
use interior::InteriorLayout;
use params::DesignParameters;

/// Everything derived from one parameter set.
#[derive(Clone, Debug)]
pub struct ResolvedDesign {
    pub params: DesignParameters,
    pub footprint: FootprintPlan,
    pub floors: FloorStack,
    pub interior: InteriorLayout,
    pub estimate: CostEstimate,
    pub warnings: Vec<DesignWarning>,
}

/// Normalises `params` and runs every downstream stage on the result.
pub fn resolve(params: &DesignParameters, rates: &RateTable) -> ResolvedDesign {
    let params = massing::normalize(params.clone());
    let interior = interior::generate_layout(&params);
    let warnings = advisory::assess(&params, &interior);

    ResolvedDesign {
        footprint: footprint::plan_footprint(&params),
        floors: floors::resolve_floors(&params),
        estimate: estimate::estimate(&params, rates),
        interior,
        warnings,
        params,
    }
}

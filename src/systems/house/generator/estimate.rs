// design parameters -> construction cost and duration

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::footprint::plan_footprint;
use super::params::*;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct MaterialRates {
    pub concrete: f32,
    pub brick: f32,
    pub wood: f32,
    pub stone: f32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TierRates {
    pub economy: f32,
    pub standard: f32,
    pub premium: f32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindowRates {
    pub standard: f32,
    pub floor_to_ceiling: f32,
    pub arched: f32,
}

/// Pricing model, swapped per region by loading `rates.json`.
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RateTable {
    pub currency: String,
    /// cost per m2 of gross floor area
    pub base_rate: f32,
    /// surcharge per floor above the ground floor, as a fraction of the base cost
    pub extra_floor_factor: f32,
    pub material: MaterialRates,
    pub tier: TierRates,
    /// cost per window opening
    pub window: WindowRates,
    pub smart_home: f32,
    pub ventilation: f32,
    pub base_months: f32,
    pub months_per_floor: f32,
    /// gross m2 that add one month
    pub area_per_month: f32,
    pub tier_duration: TierRates,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            base_rate: 1800.0,
            extra_floor_factor: 0.08,
            material: MaterialRates { concrete: 1.0, brick: 1.12, wood: 0.92, stone: 1.3 },
            tier: TierRates { economy: 0.8, standard: 1.0, premium: 1.45 },
            window: WindowRates { standard: 650.0, floor_to_ceiling: 1600.0, arched: 1150.0 },
            smart_home: 15000.0,
            ventilation: 8000.0,
            base_months: 4.0,
            months_per_floor: 2.0,
            area_per_month: 120.0,
            tier_duration: TierRates { economy: 0.9, standard: 1.0, premium: 1.2 },
        }
    }
}

impl MaterialRates {
    pub fn factor(&self, material: FacadeMaterial) -> f32 {
        match material {
            FacadeMaterial::Concrete => self.concrete,
            FacadeMaterial::Brick => self.brick,
            FacadeMaterial::Wood => self.wood,
            FacadeMaterial::Stone => self.stone,
        }
    }
}

impl TierRates {
    pub fn factor(&self, tier: MaterialTier) -> f32 {
        match tier {
            MaterialTier::Economy => self.economy,
            MaterialTier::Standard => self.standard,
            MaterialTier::Premium => self.premium,
        }
    }
}

impl WindowRates {
    pub fn rate(&self, style: WindowStyle) -> f32 {
        match style {
            WindowStyle::Standard => self.standard,
            WindowStyle::FloorToCeiling => self.floor_to_ceiling,
            WindowStyle::Arched => self.arched,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CostEstimate {
    pub total: f32,
    pub materials: f32,
    pub labor: f32,
    pub overhead: f32,
    pub currency: String,
    pub duration_months: f32,
    /// human readable range, e.g. "9-12 months"
    pub timeline: String,
}

const MATERIALS_SHARE: f32 = 0.40;
const LABOR_SHARE: f32 = 0.35;

/// Floor area over every storey. The wing is a single storey, only the main mass stacks.
pub fn gross_floor_area(params: &DesignParameters) -> f32 {
    let plan = plan_footprint(params);
    let main = params.width * params.depth;
    plan.area() + main * params.floor_count.max(1).saturating_sub(1) as f32
}

pub fn estimate(params: &DesignParameters, rates: &RateTable) -> CostEstimate {
    let floors = params.floor_count.max(1);
    let area = gross_floor_area(params);
    let tier = rates.tier.factor(params.material_tier);

    let shell = area
        * rates.base_rate
        * rates.material.factor(params.facade_material)
        * tier
        * (1.0 + rates.extra_floor_factor * (floors - 1) as f32);
    let windows = (params.window_count * floors) as f32 * rates.window.rate(params.window_style) * tier;
    let mut extras = 0.0;
    if params.smart_home {
        extras += rates.smart_home;
    }
    if params.ventilation_plan {
        extras += rates.ventilation;
    }

    let total = (shell + windows + extras).round();
    let materials = (total * MATERIALS_SHARE).round();
    let labor = (total * LABOR_SHARE).round();
    // remainder keeps the three parts summing to the total
    let overhead = total - materials - labor;

    let per_month = rates.area_per_month.max(1.0);
    let duration_months = (rates.base_months + rates.months_per_floor * floors as f32 + area / per_month)
        * rates.tier_duration.factor(params.material_tier);
    let lo = duration_months.floor().max(1.0) as u32;
    let hi = ((duration_months * 1.25).ceil() as u32).max(lo + 1);

    CostEstimate {
        total,
        materials,
        labor,
        overhead,
        currency: rates.currency.clone(),
        duration_months,
        timeline: format!("{}-{} months", lo, hi),
    }
}

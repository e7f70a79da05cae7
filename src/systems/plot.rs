use bevy::prelude::*;
use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};
use bevy::math::bounding::Aabb2d;

use crate::systems::house::CurrentDesign;
use crate::systems::house::generator::advisory::plot_bounds;

// plot boundary and buildable area drawn on the ground
// so the user can see where setbacks bite
pub struct PlotPlugin;

#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct PlotGizmoGroup;

impl Plugin for PlotPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(PlotConfig::default())
            .init_gizmo_group::<PlotGizmoGroup>()
            .add_systems(Startup, setup_gizmos)
            .add_systems(Update, draw_plot);
    }
}

// setting these parameters as a resource allows for runtime modifications
#[derive(Resource)]
pub struct PlotConfig {
    pub boundary_color: Color,
    pub setback_color: Color,
    pub dash_length: f32,
    pub enabled: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            boundary_color: Color::srgba(0.9, 0.9, 0.9, 0.6),
            setback_color: Color::srgba(0.95, 0.6, 0.2, 0.5),
            dash_length: 0.8,
            enabled: true,
        }
    }
}

fn corners(rect: &Aabb2d, y: f32) -> [Vec3; 4] {
    [
        Vec3::new(rect.min.x, y, rect.min.y),
        Vec3::new(rect.max.x, y, rect.min.y),
        Vec3::new(rect.max.x, y, rect.max.y),
        Vec3::new(rect.min.x, y, rect.max.y),
    ]
}

fn setup_gizmos(
    mut config_store: ResMut<GizmoConfigStore>
) {
    let (config, _) = config_store.config_mut::<PlotGizmoGroup>();
    config.depth_bias = -0.1; // keep lines above the ground plane
    config.line.width = 2.0;
}

fn draw_plot(
    mut gizmos: Gizmos<PlotGizmoGroup>,
    params: Res<PlotConfig>,
    design: Res<CurrentDesign>,
) {
    if !params.enabled {
        return;
    }

    let (plot, buildable) = plot_bounds(&design.0);

    let outline = corners(&plot, 0.02);
    for i in 0..4 {
        gizmos.line(outline[i], outline[(i + 1) % 4], params.boundary_color);
    }

    // dashed setback line
    let inner = corners(&buildable, 0.03);
    for i in 0..4 {
        let start = inner[i];
        let end = inner[(i + 1) % 4];
        let length = start.distance(end);
        let steps = (length / params.dash_length).floor() as usize;
        for step in (0..steps).step_by(2) {
            let a = start.lerp(end, step as f32 / steps as f32);
            let b = start.lerp(end, (step + 1) as f32 / steps as f32);
            gizmos.line(a, b, params.setback_color);
        }
    }
}

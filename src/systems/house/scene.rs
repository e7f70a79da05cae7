use bevy::prelude::*;

use crate::config::*;
use super::generator::floors::{floor_elevation, Facade, RoofGeometry};
use super::generator::footprint::wing_interior;
use super::generator::mesh_gen::{extrude_polygon, roof_mesh};
use super::generator::params::*;
use super::generator::utils::rect_polygon;
use super::generator::ResolvedDesign;

// entity hierarchy components
#[derive(Component)]
pub struct House;

#[derive(Component)]
pub struct Storey {
    pub index: u32,
}

#[derive(Component)]
pub struct Roof;

#[derive(Component)]
pub struct Furniture {
    pub kind: FurnitureType,
    pub floor: u32,
}

const GLASS: Color = Color::srgba(0.55, 0.7, 0.85, 0.8);
const SILL_HEIGHT: f32 = 0.9;
const DOOR_SIZE: Vec2 = Vec2::new(1.0, 2.2);

fn hex_color(hex: &str, fallback: Color) -> Color {
    Srgba::hex(hex).map(Color::from).unwrap_or(fallback)
}

// (width, height) of one window opening
fn window_size(style: WindowStyle) -> Vec2 {
    match style {
        WindowStyle::Standard => Vec2::new(1.2, 1.4),
        WindowStyle::FloorToCeiling => Vec2::new(1.6, 2.6),
        WindowStyle::Arched => Vec2::new(1.0, 1.8),
    }
}

fn facade_roughness(material: FacadeMaterial) -> f32 {
    match material {
        FacadeMaterial::Concrete => 0.8,
        FacadeMaterial::Brick => 0.9,
        FacadeMaterial::Wood => 0.7,
        FacadeMaterial::Stone => 0.95,
    }
}

fn ground_color(env: EnvType) -> Color {
    match env {
        EnvType::Grass => Color::srgb(0.35, 0.55, 0.25),
        EnvType::Pavement => Color::srgb(0.5, 0.5, 0.52),
        EnvType::Gravel => Color::srgb(0.62, 0.58, 0.5),
        EnvType::Forest => Color::srgb(0.2, 0.38, 0.18),
    }
}

fn door_color(style: DoorStyle) -> Color {
    match style {
        DoorStyle::Modern => Color::srgb(0.15, 0.15, 0.17),
        DoorStyle::Classic => Color::srgb(0.36, 0.2, 0.1),
        DoorStyle::Industrial => Color::srgb(0.45, 0.47, 0.5),
    }
}

fn light_color(temperature: LightTemperature) -> Color {
    match temperature {
        LightTemperature::Warm => Color::srgb(1.0, 0.82, 0.62),
        LightTemperature::Neutral => Color::WHITE,
        LightTemperature::Cool => Color::srgb(0.8, 0.9, 1.0),
    }
}

// one flat colour per furniture tag
pub fn furniture_color(kind: FurnitureType) -> Color {
    match kind {
        FurnitureType::Sofa => Color::srgb(0.3, 0.35, 0.55),
        FurnitureType::Table => Color::srgb(0.55, 0.4, 0.25),
        FurnitureType::Bed => Color::srgb(0.9, 0.88, 0.82),
        FurnitureType::Wardrobe => Color::srgb(0.45, 0.32, 0.22),
        FurnitureType::KitchenUnit => Color::srgb(0.85, 0.85, 0.85),
        FurnitureType::Toilet | FurnitureType::Vanity => Color::srgb(0.95, 0.95, 0.97),
        FurnitureType::Shower => Color::srgba(0.7, 0.85, 0.95, 0.6),
        FurnitureType::TvUnit => Color::srgb(0.12, 0.12, 0.12),
        FurnitureType::Rug => Color::srgb(0.7, 0.3, 0.3),
        FurnitureType::Plant => Color::srgb(0.2, 0.6, 0.25),
        FurnitureType::Chair => Color::srgb(0.5, 0.36, 0.22),
    }
}

fn visibility(visible: bool) -> Visibility {
    if visible { Visibility::Inherited } else { Visibility::Hidden }
}

pub fn spawn_house(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    resolved: &ResolvedDesign,
    active_floor: Option<u32>,
    show_furniture: bool,
) {
    let params = &resolved.params;
    let stack = &resolved.floors;
    let plan = &resolved.footprint;

    let wall_color = hex_color(&params.wall_color, Color::srgb(0.85, 0.85, 0.84));
    let roof_color = hex_color(&params.roof_color, Color::srgb(0.33, 0.33, 0.33));

    // root stays axis aligned with the plot, the building turns inside it
    let house_entity = commands.spawn((House, Transform::default(), Visibility::default())).id();
    let building_entity = commands.spawn((
        Transform::from_rotation(Quat::from_rotation_y(params.orientation.yaw())),
        Visibility::default(),
    )).id();
    commands.entity(house_entity).add_children(&[building_entity]);

    // ground plane over the plot
    let plot_w = params.plot_size.width_meters();
    let plot_d = params.plot_size.depth_meters();
    let ground = commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(plot_w, plot_d))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: ground_color(params.env_type),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.01, 0.0),
    )).id();
    commands.entity(house_entity).add_children(&[ground]);
    if params.env_type == EnvType::Forest {
        spawn_tree_line(commands, meshes, materials, house_entity, plot_w, plot_d);
    }

    let mut parts = Vec::new();

    // foundation under the whole outline
    if params.foundation_height > 0.0 {
        parts.push(commands.spawn((
            Mesh3d(meshes.add(extrude_polygon(&plan.outline, 0.0, params.foundation_height))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.45, 0.45, 0.45),
                ..default()
            })),
            Transform::default(),
        )).id());
    }

    if params.porch_depth > 0.0 {
        let porch_width = (params.width * 0.4).min(5.0);
        let porch_height = params.foundation_height.max(0.05);
        parts.push(commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(porch_width, porch_height, params.porch_depth))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.6, 0.58, 0.55),
                ..default()
            })),
            Transform::from_xyz(stack.door.x, porch_height / 2.0, params.depth / 2.0 + params.porch_depth / 2.0),
        )).id());
    }

    let main_polygon = rect_polygon(&plan.main);
    let window = window_size(params.window_style);
    let window_mesh = meshes.add(Cuboid::new(window.x, window.y, 0.08));
    let glass = materials.add(StandardMaterial {
        base_color: GLASS,
        alpha_mode: AlphaMode::Blend,
        reflectance: 0.8,
        ..default()
    });
    let interior_light = light_color(params.interior_light_temp);

    for level in &stack.floors {
        let visible = stack.floor_visible(level.index, active_floor);
        // the active floor is see-through so its furniture shows
        let cut_away = active_floor == Some(level.index);

        // ground storey carries the wing, upper storeys only the main mass
        let outline = if level.index == 0 { &plan.outline } else { &main_polygon };
        let wall_material = materials.add(StandardMaterial {
            base_color: if cut_away { wall_color.with_alpha(0.25) } else { wall_color },
            alpha_mode: if cut_away { AlphaMode::Blend } else { AlphaMode::Opaque },
            perceptual_roughness: facade_roughness(params.facade_material),
            ..default()
        });

        let storey_entity = commands.spawn((
            Storey { index: level.index },
            Mesh3d(meshes.add(extrude_polygon(outline, level.elevation, FLOOR_HEIGHT))),
            MeshMaterial3d(wall_material),
            Transform::default(),
            visibility(visible),
        )).id();

        let mut openings = Vec::new();
        for opening in &level.openings {
            let z = match opening.facade {
                Facade::Front => params.depth / 2.0 + 0.02,
                Facade::Back => -params.depth / 2.0 - 0.02,
            };
            let sill = if params.window_style == WindowStyle::FloorToCeiling { 0.2 } else { SILL_HEIGHT };
            openings.push(commands.spawn((
                Mesh3d(window_mesh.clone()),
                MeshMaterial3d(glass.clone()),
                Transform::from_xyz(opening.x, level.elevation + sill + window.y / 2.0, z),
            )).id());
        }
        if level.index == 0 {
            openings.push(commands.spawn((
                Mesh3d(meshes.add(Cuboid::new(DOOR_SIZE.x, DOOR_SIZE.y, 0.1))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: door_color(params.door_style),
                    ..default()
                })),
                Transform::from_xyz(stack.door.x, level.elevation + DOOR_SIZE.y / 2.0, params.depth / 2.0 + 0.03),
            )).id());
        }
        openings.push(commands.spawn((
            PointLight {
                color: interior_light,
                intensity: 40_000.0,
                range: params.width.max(params.depth),
                ..default()
            },
            Transform::from_xyz(0.0, level.elevation + FLOOR_HEIGHT - 0.4, 0.0),
        )).id());
        commands.entity(storey_entity).add_children(&openings);

        if show_furniture {
            let furniture: Vec<Entity> = resolved
                .interior
                .furniture_on(level.index)
                .map(|item| spawn_furniture(commands, meshes, materials, item))
                .collect();
            commands.entity(storey_entity).add_children(&furniture);
        }

        parts.push(storey_entity);
    }

    // main roof
    parts.push(commands.spawn((
        Roof,
        Mesh3d(meshes.add(roof_mesh(&stack.roof, &plan.main))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: roof_color,
            cull_mode: None,
            ..default()
        })),
        Transform::default(),
        visibility(stack.roof_visible(active_floor)),
    )).id());

    // single storey wing gets its own flat roof, cut away together with the ground floor
    if let Some(wing) = wing_interior(plan) {
        let wing_roof = RoofGeometry {
            kind: RoofType::Flat,
            base_elevation: floor_elevation(params.foundation_height, 1),
            ridge_height: 0.0,
            overhang: 0.0,
        };
        parts.push(commands.spawn((
            Roof,
            Mesh3d(meshes.add(roof_mesh(&wing_roof, &wing))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: roof_color,
                ..default()
            })),
            Transform::default(),
            visibility(stack.floor_visible(1, active_floor)),
        )).id());
    }

    commands.entity(building_entity).add_children(&parts);
}

fn spawn_furniture(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    item: &FurnitureItem,
) -> Entity {
    let color = furniture_color(item.kind);
    commands.spawn((
        Furniture { kind: item.kind, floor: item.floor },
        Mesh3d(meshes.add(Cuboid::new(item.width, item.height, item.depth))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color,
            alpha_mode: if color.alpha() < 1.0 { AlphaMode::Blend } else { AlphaMode::Opaque },
            ..default()
        })),
        Transform::from_xyz(item.position.x, item.position.y + item.height / 2.0, item.position.z)
            .with_rotation(Quat::from_rotation_y(item.rotation)),
    )).id()
}

// trees just outside the plot boundary
fn spawn_tree_line(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    parent: Entity,
    plot_w: f32,
    plot_d: f32,
) {
    const SPACING: f32 = 6.0;
    const MARGIN: f32 = 2.5;

    let trunk = meshes.add(Cylinder::new(0.25, 2.0));
    let canopy = meshes.add(Sphere::new(1.8));
    let bark = materials.add(StandardMaterial { base_color: Color::srgb(0.35, 0.25, 0.15), ..default() });
    let leaves = materials.add(StandardMaterial { base_color: Color::srgb(0.15, 0.4, 0.15), ..default() });

    let half = Vec2::new(plot_w / 2.0 + MARGIN, plot_d / 2.0 + MARGIN);
    let mut spots = Vec::new();
    let mut x = -half.x;
    while x <= half.x {
        spots.push(Vec2::new(x, -half.y));
        spots.push(Vec2::new(x, half.y));
        x += SPACING;
    }
    let mut z = -half.y + SPACING;
    while z < half.y {
        spots.push(Vec2::new(-half.x, z));
        spots.push(Vec2::new(half.x, z));
        z += SPACING;
    }

    let trees: Vec<Entity> = spots
        .into_iter()
        .map(|spot| {
            let tree = commands.spawn((Transform::from_xyz(spot.x, 0.0, spot.y), Visibility::default())).id();
            let parts = [
                commands.spawn((Mesh3d(trunk.clone()), MeshMaterial3d(bark.clone()), Transform::from_xyz(0.0, 1.0, 0.0))).id(),
                commands.spawn((Mesh3d(canopy.clone()), MeshMaterial3d(leaves.clone()), Transform::from_xyz(0.0, 3.2, 0.0))).id(),
            ];
            commands.entity(tree).add_children(&parts);
            tree
        })
        .collect();
    commands.entity(parent).add_children(&trees);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_furniture_tag_has_a_colour() {
        for kind in FurnitureType::ALL {
            assert!(furniture_color(kind).alpha() > 0.0);
        }
    }

    #[test]
    fn wall_colours_parse_from_hex() {
        let color = hex_color("#a0522d", Color::BLACK).to_srgba();
        assert!((color.red - 160.0 / 255.0).abs() < 1e-3);
        assert_eq!(hex_color("not a colour", Color::BLACK), Color::BLACK);
    }
}

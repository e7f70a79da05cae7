use bevy::prelude::*;
use bevy::math::bounding::Aabb2d;
use bevy::window::{WindowPlugin, PrimaryWindow};
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy_egui::EguiPlugin;
use bevy_rts_camera::*;

// import modules here
use house_gen::systems::house::BuildingGenerationPlugin;
use house_gen::systems::plot::PlotPlugin;
use house_gen::systems::ui::UIPlugin;

fn main() -> bevy::app::AppExit {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "House Generator".to_string(),
                mode: bevy::window::WindowMode::Windowed,
                resolution: bevy::window::WindowResolution::new(1920.0, 1080.0),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(RtsCameraPlugin)

        // my custom plugins
        .add_plugins(PlotPlugin)
        .add_plugins(BuildingGenerationPlugin)
        .add_plugins(UIPlugin)

        .insert_resource(ClearColor(Color::srgb(0.62, 0.74, 0.86))) // sky
        .add_systems(Startup, (start, maximize_window))
        .add_systems(Update, handle_exit)
        .run()
}

fn maximize_window(mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    for mut window in windows.iter_mut() {
        window.set_maximized(true);
    }
}

// application entry point here
fn start(
    mut commands: Commands
) {
    // spawn camera, the largest plot fits inside the bounds
    commands.spawn((
        RtsCamera {
            bounds: Aabb2d::new(
                Vec2::ZERO,
                Vec2::new(60.0, 60.0),
            ),
            min_angle: 0.45,
            height_max: 90.0,
            ..default()
        },
        RtsCameraControls {
            key_up: KeyCode::KeyW,
            key_down: KeyCode::KeyS,
            key_left: KeyCode::KeyA,
            key_right: KeyCode::KeyD,
            key_rotate_left: KeyCode::F24,  // should figure out how to unassign a key :)
            key_rotate_right: KeyCode::F23,
            pan_speed: 20.0,
            zoom_sensitivity: 0.15,
            edge_pan_width: 0.0,
            ..default()
        },
    ));

    // sun
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(30.0, 50.0, 40.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

// application exit
fn handle_exit(
    keys: Res<ButtonInput<KeyCode>>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

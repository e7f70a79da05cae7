// this is the entry point for the house generation plugin
use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::*;

pub mod generator;
pub mod scene;

use generator::advisory::DesignWarning;
use generator::estimate::{CostEstimate, RateTable};
use generator::interior::InteriorLayout;
use generator::params::{DesignParameters, RoomType};

// resources
#[derive(Resource)]
pub struct Seed(pub u64);

/// The one design the app is showing, replaced wholesale on every regeneration.
#[derive(Resource, Default)]
pub struct CurrentDesign(pub DesignParameters);

#[derive(Resource, Default)]
pub struct GeneratedInterior(pub InteriorLayout);

/// Cut-away filter, `None` shows the whole house.
#[derive(Resource, Default, Clone, Copy, PartialEq, Debug)]
pub struct ActiveFloor(pub Option<u32>);

#[derive(Resource)]
pub struct GenerationSettings {
    pub prompt: String,
    pub plan_text: String,
    pub import_path: String,
    pub show_furniture: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            prompt: INITIAL_PROMPT.to_string(),
            plan_text: "living 28, kitchen 12, dining 14, bedroom 16, bathroom 6".to_string(),
            import_path: String::new(),
            show_furniture: true,
        }
    }
}

#[derive(Resource, Default)]
pub struct DesignReport {
    pub estimate: CostEstimate,
    pub warnings: Vec<DesignWarning>,
}

// Event for regeneration
#[derive(Event, Clone, Debug)]
pub enum RegenerateEvent {
    /// interpret a prompt with a fresh envelope draw
    Prompt { text: String, seed: u64 },
    /// panel edits or an imported file
    Edited(DesignParameters),
    /// plan upload, replaces the room list of the current design
    Uploaded(Vec<(RoomType, f32)>),
    /// same design, only the view changed (active floor, furniture toggle)
    Refresh,
}

// main plugin for generation
pub struct BuildingGenerationPlugin;

impl Plugin for BuildingGenerationPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(Seed(INITIAL_SEED))
            .init_resource::<CurrentDesign>()
            .init_resource::<GeneratedInterior>()
            .init_resource::<ActiveFloor>()
            .init_resource::<GenerationSettings>()
            .init_resource::<DesignReport>()
            .insert_resource(RateTable::default())

            .add_event::<RegenerateEvent>()
            .add_event::<crate::systems::export::ExportEvent>()
            .add_event::<crate::systems::export::ImportEvent>()

            // rates first so the first estimate uses them
            .add_systems(Startup, (crate::systems::export::setup_rates, initial_generation).chain())
            .add_systems(Update, (
                handle_regeneration,
                crate::systems::export::handle_export,
                crate::systems::export::handle_import,
            ));
    }
}

fn initial_generation(
    mut regen_events: EventWriter<RegenerateEvent>,
    settings: Res<GenerationSettings>,
    seed: Res<Seed>,
) {
    regen_events.write(RegenerateEvent::Prompt { text: settings.prompt.clone(), seed: seed.0 });
}

/// Parameters the event asks for, before normalisation.
pub fn requested_design(event: &RegenerateEvent, current: &DesignParameters) -> DesignParameters {
    match event {
        RegenerateEvent::Prompt { text, seed } => {
            let mut rng = StdRng::seed_from_u64(*seed);
            generator::prompt::interpret_prompt(text, &mut rng)
        }
        RegenerateEvent::Edited(params) => params.clone(),
        RegenerateEvent::Uploaded(areas) => DesignParameters {
            rooms: generator::upload::rooms_from_areas(areas, current.floor_count),
            ..current.clone()
        },
        RegenerateEvent::Refresh => current.clone(),
    }
}

pub fn handle_regeneration(
    mut commands: Commands,
    mut events: EventReader<RegenerateEvent>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut seed: ResMut<Seed>,
    mut design: ResMut<CurrentDesign>,
    mut interior: ResMut<GeneratedInterior>,
    mut report: ResMut<DesignReport>,
    mut active_floor: ResMut<ActiveFloor>,
    settings: Res<GenerationSettings>,
    rates: Res<RateTable>,
    query: Query<Entity, With<scene::House>>,
) {
    // rapid slider drags queue several events, only the last one matters
    let Some(event) = events.read().last() else {
        return;
    };

    if let RegenerateEvent::Prompt { text, seed: event_seed } = event {
        seed.0 = *event_seed;
        info!("generating from prompt {:?} with seed {}", text, event_seed);
    }

    let resolved = generator::resolve(&requested_design(event, &design.0), &rates);

    // the filter can point past the top floor after a floor count edit
    if active_floor.0.is_some_and(|floor| floor > resolved.floors.top_floor()) {
        active_floor.0 = None;
    }

    // cleanup existing house
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
    }
    scene::spawn_house(
        &mut commands,
        &mut meshes,
        &mut materials,
        &resolved,
        active_floor.0,
        settings.show_furniture,
    );

    debug!(
        "regenerated {} rooms, {} furniture, {} warnings",
        resolved.interior.rooms.len(),
        resolved.interior.furniture.len(),
        resolved.warnings.len(),
    );
    design.0 = resolved.params;
    interior.0 = resolved.interior;
    report.estimate = resolved.estimate;
    report.warnings = resolved.warnings;
}

use bevy::prelude::*;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin}; // fps
use bevy_egui::{egui, EguiContexts, EguiPlugin, EguiPrimaryContextPass};

use crate::systems::export::{export_filename, ExportEvent, ImportEvent};
use crate::systems::house::generator::params::*;
use crate::systems::house::generator::upload::parse_room_areas;
use crate::systems::house::{
    ActiveFloor, CurrentDesign, DesignReport, GeneratedInterior, GenerationSettings, RegenerateEvent, Seed,
};

pub mod indicator;

// re-export the main items that other modules need
pub use indicator::{FloorChangeEvent, FloorIndicator, render_floor_indicator, update_floor_indicator};

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        assert!(app.is_plugin_added::<EguiPlugin>());
        app
            .insert_resource(FloorIndicator::default())
            .add_event::<FloorChangeEvent>()
            .add_systems(Update, (key_input, update_floor_indicator))
            .add_systems(EguiPrimaryContextPass, (ui_main, fps, render_floor_indicator)); // UI rendering here
    }
}

/// Next cut-away filter: all floors, then ground floor up to the top, then all again.
pub fn next_floor(current: Option<u32>, floor_count: u32) -> Option<u32> {
    match current {
        None => Some(0),
        Some(floor) if floor + 1 < floor_count => Some(floor + 1),
        Some(_) => None,
    }
}

/// `1234567.0, "USD"` -> `"USD 1,234,567"`
pub fn format_money(value: f32, currency: &str) -> String {
    let digits = (value.round().max(0.0) as u64).to_string();
    let mut grouped = String::new();
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{} {}", currency, grouped)
}

fn key_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut active_floor: ResMut<ActiveFloor>,
    design: Res<CurrentDesign>,
    mut floor_events: EventWriter<FloorChangeEvent>,
    mut regen_events: EventWriter<RegenerateEvent>,
) {
    if keyboard_input.just_pressed(KeyCode::Tab) {
        active_floor.0 = next_floor(active_floor.0, design.0.floor_count);
        floor_events.write(FloorChangeEvent(*active_floor));
        regen_events.write(RegenerateEvent::Refresh);
    }
}

fn combo<T: Copy + PartialEq + std::fmt::Debug>(ui: &mut egui::Ui, label: &str, value: &mut T, options: &[T]) -> bool {
    let mut changed = false;
    egui::ComboBox::from_label(label)
        .selected_text(format!("{:?}", value))
        .show_ui(ui, |ui| {
            for option in options {
                changed |= ui.selectable_value(value, *option, format!("{:?}", option)).changed();
            }
        });
    changed
}

fn ui_main(
    mut contexts: EguiContexts,
    current_seed: Res<Seed>,
    design: Res<CurrentDesign>,
    interior: Res<GeneratedInterior>,
    report: Res<DesignReport>,
    mut settings: ResMut<GenerationSettings>,
    mut active_floor: ResMut<ActiveFloor>,
    mut regen_events: EventWriter<RegenerateEvent>,
    mut export_events: EventWriter<ExportEvent>,
    mut import_events: EventWriter<ImportEvent>,
    mut floor_events: EventWriter<FloorChangeEvent>,
) {
    if let Ok(ctx) = contexts.ctx_mut() {
        egui::SidePanel::left("config_panel")
            .default_width(200.0)
            .min_width(280.0)
            .max_width(420.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    // camera
                    ui.label("Camera: ");
                    ui.label("WASD - Move");
                    ui.label("Scroll - Zoom");
                    ui.label("MMB - Rotate");

                    ui.separator();

                    // prompt
                    egui::CollapsingHeader::new("Describe the house")
                        .default_open(true)
                        .show(ui, |ui| {
                        ui.add(egui::TextEdit::multiline(&mut settings.prompt)
                            .desired_rows(3)
                            .hint_text("e.g. classic brick cottage with gable roof"));
                        ui.label(format!("Seed: {}", current_seed.0));
                        ui.horizontal(|ui| {
                            if ui.button("Generate")
                                .on_hover_text("Interpret the prompt with a new random envelope")
                                .clicked() {
                                regen_events.write(RegenerateEvent::Prompt { text: settings.prompt.clone(), seed: rand::random() });
                            }
                            if ui.button("Same seed")
                                .on_hover_text("Interpret the prompt again, keeping the envelope draw")
                                .clicked() {
                                regen_events.write(RegenerateEvent::Prompt { text: settings.prompt.clone(), seed: current_seed.0 });
                            }
                        });
                    });

                    // manual edits, sent back through normalisation
                    let mut edited = design.0.clone();
                    let mut changed = false;

                    egui::CollapsingHeader::new("Envelope")
                        .default_open(true)
                        .show(ui, |ui| {
                        changed |= ui.add(egui::Slider::new(&mut edited.width, 6.0..=30.0)
                            .text("Width")
                            .suffix(" m"))
                            .changed();
                        changed |= ui.add(egui::Slider::new(&mut edited.depth, 6.0..=30.0)
                            .text("Depth")
                            .suffix(" m"))
                            .changed();
                        changed |= ui.add(egui::Slider::new(&mut edited.floor_count, 1..=5)
                            .text("Floors"))
                            .changed();
                        changed |= combo(ui, "Footprint", &mut edited.footprint_shape,
                            &[FootprintShape::Rectangular, FootprintShape::LShape]);
                        changed |= combo(ui, "Roof", &mut edited.roof_type,
                            &[RoofType::Flat, RoofType::Gable, RoofType::Hip]);
                        changed |= ui.add(egui::Slider::new(&mut edited.roof_overhang, 0.0..=1.5)
                            .text("Overhang")
                            .suffix(" m"))
                            .changed();
                        changed |= ui.add(egui::Slider::new(&mut edited.foundation_height, 0.0..=1.5)
                            .text("Foundation")
                            .suffix(" m"))
                            .changed();
                        changed |= ui.add(egui::Slider::new(&mut edited.porch_depth, 0.0..=5.0)
                            .text("Porch")
                            .suffix(" m"))
                            .changed();
                        ui.label(format!("Height {:.1} m, {} windows per facade budget", design.0.height, design.0.window_count));
                    });

                    egui::CollapsingHeader::new("Finish")
                        .default_open(false)
                        .show(ui, |ui| {
                        changed |= combo(ui, "Facade", &mut edited.facade_material,
                            &[FacadeMaterial::Concrete, FacadeMaterial::Brick, FacadeMaterial::Wood, FacadeMaterial::Stone]);
                        changed |= combo(ui, "Windows", &mut edited.window_style,
                            &[WindowStyle::Standard, WindowStyle::FloorToCeiling, WindowStyle::Arched]);
                        changed |= combo(ui, "Door", &mut edited.door_style,
                            &[DoorStyle::Modern, DoorStyle::Classic, DoorStyle::Industrial]);
                        changed |= combo(ui, "Surroundings", &mut edited.env_type,
                            &[EnvType::Grass, EnvType::Pavement, EnvType::Gravel, EnvType::Forest]);
                        changed |= combo(ui, "Orientation", &mut edited.orientation,
                            &[Orientation::North, Orientation::NorthEast, Orientation::East, Orientation::SouthEast,
                              Orientation::South, Orientation::SouthWest, Orientation::West, Orientation::NorthWest]);
                        changed |= combo(ui, "Tier", &mut edited.material_tier,
                            &[MaterialTier::Economy, MaterialTier::Standard, MaterialTier::Premium]);
                        changed |= ui.checkbox(&mut edited.smart_home, "Smart home").changed();
                        changed |= ui.checkbox(&mut edited.ventilation_plan, "Ventilation plan").changed();
                    });

                    egui::CollapsingHeader::new("Interior")
                        .default_open(true)
                        .show(ui, |ui| {
                        changed |= combo(ui, "Furniture", &mut edited.furniture_density,
                            &[FurnitureDensity::Minimal, FurnitureDensity::Standard, FurnitureDensity::Premium]);
                        changed |= combo(ui, "Lighting", &mut edited.interior_light_temp,
                            &[LightTemperature::Warm, LightTemperature::Neutral, LightTemperature::Cool]);
                        if ui.checkbox(&mut settings.show_furniture, "Show furniture").changed() {
                            regen_events.write(RegenerateEvent::Refresh);
                        }

                        // active floor filter
                        let mut floor = active_floor.0;
                        ui.horizontal_wrapped(|ui| {
                            ui.label("View:");
                            ui.selectable_value(&mut floor, None, "All");
                            for index in 0..design.0.floor_count {
                                ui.selectable_value(&mut floor, Some(index), format!("F{}", index));
                            }
                        });
                        if floor != active_floor.0 {
                            active_floor.0 = floor;
                            floor_events.write(FloorChangeEvent(*active_floor));
                            regen_events.write(RegenerateEvent::Refresh);
                        }

                        for index in 0..design.0.floor_count {
                            egui::CollapsingHeader::new(format!("Floor {} rooms", index))
                                .default_open(false)
                                .show(ui, |ui| {
                                for room in interior.0.rooms_on(index) {
                                    ui.label(format!("{}: {:.1} x {:.1} m", room.name, room.width, room.depth));
                                }
                                ui.label(format!("{} pieces of furniture", interior.0.furniture_on(index).count()));
                            });
                        }
                    });

                    if changed {
                        regen_events.write(RegenerateEvent::Edited(edited));
                    }

                    // plan upload
                    egui::CollapsingHeader::new("Floor plan")
                        .default_open(false)
                        .show(ui, |ui| {
                        ui.label("Room type and area (m²), comma separated:");
                        ui.add(egui::TextEdit::multiline(&mut settings.plan_text).desired_rows(2));
                        ui.horizontal(|ui| {
                            if ui.button("Apply plan").clicked() {
                                let areas = parse_room_areas(&settings.plan_text);
                                if areas.is_empty() {
                                    warn!("floor plan has no readable rooms");
                                } else {
                                    regen_events.write(RegenerateEvent::Uploaded(areas));
                                }
                            }
                            if ui.button("Built-in layout").clicked() {
                                regen_events.write(RegenerateEvent::Edited(DesignParameters {
                                    rooms: Vec::new(),
                                    ..design.0.clone()
                                }));
                            }
                        });
                    });

                    ui.separator();

                    // estimate
                    let estimate = &report.estimate;
                    ui.label(egui::RichText::new(format_money(estimate.total, &estimate.currency)).size(18.0).strong());
                    ui.label(format!("Materials {}", format_money(estimate.materials, &estimate.currency)));
                    ui.label(format!("Labor {}", format_money(estimate.labor, &estimate.currency)));
                    ui.label(format!("Overhead {}", format_money(estimate.overhead, &estimate.currency)));
                    ui.label(format!("Timeline {}", estimate.timeline));

                    if !report.warnings.is_empty() {
                        ui.separator();
                        for warning in &report.warnings {
                            ui.label(egui::RichText::new(warning.to_string()).color(egui::Color32::from_rgb(220, 150, 60)));
                        }
                    }

                    ui.separator();

                    // export section
                    ui.horizontal(|ui| {
                        if ui.button("Export JSON")
                            .on_hover_text("Save the design as JSON, current directory")
                            .clicked() {
                            let timestamp = std::time::SystemTime::now()
                                .duration_since(std::time::UNIX_EPOCH)
                                .map(|d| d.as_secs())
                                .unwrap_or_default();
                            export_events.write(ExportEvent { filename: export_filename(timestamp) });
                        }
                    });
                    ui.horizontal(|ui| {
                        ui.add(egui::TextEdit::singleline(&mut settings.import_path)
                            .hint_text("house_design_....json")
                            .desired_width(180.0));
                        if ui.button("Import").clicked() && !settings.import_path.trim().is_empty() {
                            import_events.write(ImportEvent { path: settings.import_path.trim().to_string() });
                        }
                    });

                    ui.separator();
                    ui.label("TAB - Cycle floors");
                    ui.label("ESC - Exit");
                });
            });
    }
}

fn fps(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
) {
    if let Ok(ctx) = contexts.ctx_mut() {
        egui::Area::new(egui::Id::new("fps_counter"))
            .anchor(egui::Align2::RIGHT_TOP, egui::Vec2::new(-10.0, 10.0))
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::RIGHT), |ui| {
                    if let Some(fps) = diagnostics
                        .get(&FrameTimeDiagnosticsPlugin::FPS)
                        .and_then(|fps| fps.smoothed())
                    {
                        ui.label(egui::RichText::new(format!("{:.0}", fps))
                            .size(26.0)
                            .color(egui::Color32::WHITE));
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycles_through_every_floor() {
        let mut floor = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            floor = next_floor(floor, 3);
            seen.push(floor);
        }
        assert_eq!(seen, [Some(0), Some(1), Some(2), None]);
    }

    #[test]
    fn money_is_grouped_in_thousands() {
        assert_eq!(format_money(1234567.0, "USD"), "USD 1,234,567");
        assert_eq!(format_money(950.4, "EUR"), "EUR 950");
        assert_eq!(format_money(100000.0, "USD"), "USD 100,000");
    }
}

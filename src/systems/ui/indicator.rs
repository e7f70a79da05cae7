use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::systems::house::ActiveFloor;

// short lived banner announcing the active floor filter
#[derive(Resource)]
pub struct FloorIndicator {
    pub floor: Option<u32>,
    pub timer: f32,
    pub duration: f32,
}

impl Default for FloorIndicator {
    fn default() -> Self {
        Self {
            floor: None,
            timer: 0.0,
            duration: 2.0,
        }
    }
}

#[derive(Event)]
pub struct FloorChangeEvent(pub ActiveFloor);

pub fn floor_label(floor: Option<u32>) -> String {
    match floor {
        None => "ALL FLOORS".to_string(),
        Some(0) => "GROUND FLOOR".to_string(),
        Some(index) => format!("FLOOR {}", index),
    }
}

pub fn update_floor_indicator(
    mut indicator: ResMut<FloorIndicator>,
    mut events: EventReader<FloorChangeEvent>,
    time: Res<Time>,
) {
    for event in events.read() {
        indicator.floor = event.0.0;
        indicator.timer = indicator.duration;
    }

    if indicator.timer > 0.0 {
        indicator.timer = (indicator.timer - time.delta_secs()).max(0.0);
    }
}

pub fn render_floor_indicator(
    indicator: Res<FloorIndicator>,
    mut contexts: EguiContexts,
) {
    if indicator.timer <= 0.0 {
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut() {
        const KEY_DURATION: f32 = 0.7;

        let main_alpha = (indicator.timer / indicator.duration).clamp(0.0, 1.0);
        let key_alpha = if indicator.timer > (indicator.duration - KEY_DURATION) {
            ((indicator.timer - (indicator.duration - KEY_DURATION)) / KEY_DURATION).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let bg_color = match indicator.floor {
            None => egui::Color32::from_rgb(45, 72, 116),
            Some(_) => egui::Color32::from_rgb(50, 91, 34),
        };

        egui::Area::new(egui::Id::new("floor_indicator"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 60.0))
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    // matches the side panel background
                    let grey_color = egui::Color32::from_rgb(40, 44, 52);

                    let key_frame = egui::Frame::new()
                        .fill(egui::Color32::from_rgba_unmultiplied(
                            grey_color.r(), grey_color.g(), grey_color.b(),
                            (200.0 * key_alpha) as u8
                        ))
                        .stroke(egui::Stroke::new(
                            1.0,
                            egui::Color32::from_rgba_unmultiplied(255, 255, 255, (200.0 * key_alpha) as u8)
                        ))
                        .inner_margin(egui::Margin::symmetric(8, 6))
                        .corner_radius(egui::CornerRadius::same(4));

                    key_frame.show(ui, |ui| {
                        ui.label(egui::RichText::new("TAB")
                            .size(14.0)
                            .color(egui::Color32::from_rgba_unmultiplied(255, 255, 255, (255.0 * key_alpha) as u8))
                            .strong());
                    });

                    ui.add_space(4.0);

                    let floor_frame = egui::Frame::new()
                        .fill(egui::Color32::from_rgba_unmultiplied(
                            bg_color.r(), bg_color.g(), bg_color.b(),
                            (200.0 * main_alpha) as u8
                        ))
                        .stroke(egui::Stroke::new(
                            2.0,
                            egui::Color32::from_rgba_unmultiplied(255, 255, 255, (200.0 * main_alpha) as u8)
                        ))
                        .inner_margin(egui::Margin::symmetric(20, 10))
                        .corner_radius(egui::CornerRadius::same(8));

                    floor_frame.show(ui, |ui| {
                        ui.label(egui::RichText::new(floor_label(indicator.floor))
                            .size(18.0)
                            .color(egui::Color32::from_rgba_unmultiplied(255, 255, 255, (255.0 * main_alpha) as u8))
                            .strong());
                    });
                });
            });
    }
}

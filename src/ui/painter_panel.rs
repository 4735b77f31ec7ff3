//! Inspector panel for the prefab painter.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::{AppConfig, SaveConfigRequest};
use crate::constants::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::painter::{
    AddBodiesRequest, ApplyTransformsRequest, ClearContainerRequest, CommandHistory,
    CopyTransformsRequest, PainterSession, PainterSettings, RedoRequest, RemoveBodiesRequest,
    UndoRequest,
};

/// Writers for every button on the panel
#[derive(SystemParam)]
pub struct PanelActions<'w> {
    add_bodies: MessageWriter<'w, AddBodiesRequest>,
    remove_bodies: MessageWriter<'w, RemoveBodiesRequest>,
    copy_transforms: MessageWriter<'w, CopyTransformsRequest>,
    apply_transforms: MessageWriter<'w, ApplyTransformsRequest>,
    clear_container: MessageWriter<'w, ClearContainerRequest>,
    undo: MessageWriter<'w, UndoRequest>,
    redo: MessageWriter<'w, RedoRequest>,
    save_config: MessageWriter<'w, SaveConfigRequest>,
}

fn separator(ui: &mut egui::Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(4.0);
}

fn full_width_button(ui: &mut egui::Ui, label: &str) -> bool {
    ui.add_sized([ui.available_width(), 26.0], egui::Button::new(label))
        .clicked()
}

fn vec3_editor(ui: &mut egui::Ui, value: &mut Vec3) {
    ui.horizontal(|ui| {
        ui.add(egui::DragValue::new(&mut value.x).speed(0.05).prefix("x "));
        ui.add(egui::DragValue::new(&mut value.y).speed(0.05).prefix("y "));
        ui.add(egui::DragValue::new(&mut value.z).speed(0.05).prefix("z "));
    });
}

fn settings_section(ui: &mut egui::Ui, settings: &mut PainterSettings) {
    ui.label("Brush size");
    ui.add(egui::Slider::new(&mut settings.brush_size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE));

    ui.add_space(4.0);
    ui.label("Prefab");
    ui.text_edit_singleline(&mut settings.prefab_path);

    ui.add_space(4.0);
    ui.label("Position offset");
    vec3_editor(ui, &mut settings.position_offset);

    ui.add_space(4.0);
    ui.checkbox(&mut settings.random_rotation, "Random rotation");
    ui.checkbox(&mut settings.random_scale, "Random scale");
    ui.add_enabled_ui(settings.random_scale, |ui| {
        ui.horizontal(|ui| {
            ui.label("Min");
            ui.add(egui::DragValue::new(&mut settings.random_scale_min).speed(0.01));
            ui.label("Max");
            ui.add(egui::DragValue::new(&mut settings.random_scale_max).speed(0.01));
        });
    });
}

fn body_section(ui: &mut egui::Ui, settings: &mut PainterSettings) {
    ui.horizontal(|ui| {
        ui.label("Body mass");
        ui.add(egui::DragValue::new(&mut settings.body_mass).speed(0.1));
    });
    ui.checkbox(&mut settings.body_use_gravity, "Use gravity");
}

pub fn painter_panel_ui(
    mut contexts: EguiContexts,
    mut settings: ResMut<PainterSettings>,
    config: Res<AppConfig>,
    session: Res<PainterSession>,
    history: Res<CommandHistory>,
    mut actions: PanelActions,
) -> Result {
    // Edit a copy so change detection only fires when something actually changed
    let mut edited = settings.clone();

    egui::SidePanel::right("painter_panel")
        .resizable(false)
        .default_width(260.0)
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Prefab Painter").heading().size(18.0));
            ui.add_space(4.0);
            ui.separator();
            ui.add_space(4.0);

            settings_section(ui, &mut edited);

            if let Err(e) = edited.validate() {
                ui.add_space(4.0);
                ui.colored_label(egui::Color32::RED, e.to_string());
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let label = if config.dirty { "Save Settings *" } else { "Save Settings" };
                if ui.button(label).clicked() {
                    actions.save_config.write(SaveConfigRequest);
                }
            });

            separator(ui);
            body_section(ui, &mut edited);
            if full_width_button(ui, "Add Bodies") {
                actions.add_bodies.write(AddBodiesRequest);
            }
            if full_width_button(ui, "Remove Bodies") {
                actions.remove_bodies.write(RemoveBodiesRequest);
            }

            separator(ui);
            if full_width_button(ui, "Copy Transforms") {
                actions.copy_transforms.write(CopyTransformsRequest);
            }
            if full_width_button(ui, "Apply Copied Transforms") {
                actions.apply_transforms.write(ApplyTransformsRequest);
            }
            ui.label(
                egui::RichText::new(format!("{} transforms copied", session.snapshots.len()))
                    .weak(),
            );

            separator(ui);
            if full_width_button(ui, "Remove Container Children") {
                actions.clear_container.write(ClearContainerRequest);
            }

            separator(ui);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(history.can_undo(), egui::Button::new("Undo"))
                    .clicked()
                {
                    actions.undo.write(UndoRequest);
                }
                if ui
                    .add_enabled(history.can_redo(), egui::Button::new("Redo"))
                    .clicked()
                {
                    actions.redo.write(RedoRequest);
                }
                ui.label(
                    egui::RichText::new(format!(
                        "{} / {}",
                        history.undo_count(),
                        history.redo_count()
                    ))
                    .weak(),
                );
            });
        });

    if edited != *settings {
        *settings = edited;
    }
    Ok(())
}

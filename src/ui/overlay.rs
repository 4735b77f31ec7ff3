//! Info panel along the bottom of the viewport.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::painter::container::count_instances;
use crate::painter::{BrushCursor, PaintedInstance, PainterTarget};

pub const USAGE_HINT: &str =
    "Use ctrl + mousewheel to adjust the brush size\nPress left mouse button and drag to paint prefabs";

pub fn format_position(position: Vec3) -> String {
    format!("Mouse Position: ({:.2}, {:.2}, {:.2})", position.x, position.y, position.z)
}

pub fn info_overlay_ui(
    mut contexts: EguiContexts,
    cursor: Res<BrushCursor>,
    target: Res<PainterTarget>,
    instances: Query<&ChildOf, With<PaintedInstance>>,
) -> Result {
    let children = count_instances(target.container, instances.iter());

    egui::Area::new(egui::Id::new("painter_info"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -12.0])
        .interactable(false)
        .show(contexts.ctx_mut()?, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(170, 30, 30, 220))
                .corner_radius(4.0)
                .inner_margin(egui::Margin::symmetric(16, 8))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        let text = |s: String| egui::RichText::new(s).color(egui::Color32::WHITE).strong();
                        ui.label(text(USAGE_HINT.to_string()));
                        ui.label(text(format!("Children: {}", children)));
                        if let Some(hit) = cursor.hit {
                            ui.label(text(format_position(hit.point)));
                        }
                    });
                });
        });
    Ok(())
}

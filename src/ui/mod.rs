mod dialogs;
mod overlay;
mod painter_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Side panel first so the overlay is laid out in the remaining space
        app.add_systems(
            EguiPrimaryContextPass,
            (
                painter_panel::painter_panel_ui,
                overlay::info_overlay_ui,
                dialogs::config_reset_notification_ui,
            )
                .chain(),
        );
    }
}

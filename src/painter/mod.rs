//! Prefab painting: brush placement, randomization, bodies, transform
//! snapshots and undo.

pub mod brush;
mod camera;
pub mod container;
pub mod history;
pub mod identity;
pub mod messages;
pub mod physics;
pub mod randomizer;
mod scene;
pub mod session;
pub mod settings;
pub mod snapshot;

pub use brush::BrushCursor;
pub use container::PaintedInstance;
pub use history::CommandHistory;
pub use messages::{
    AddBodiesRequest, ApplyTransformsRequest, ClearContainerRequest, CopyTransformsRequest,
    RedoRequest, RemoveBodiesRequest, UndoRequest,
};
pub use session::{PainterSession, PainterTarget};
pub use settings::PainterSettings;

use bevy::prelude::*;

use crate::config::ConfigLoaded;

pub struct PainterPlugin;

impl Plugin for PainterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PainterSettings>()
            .init_resource::<PainterSession>()
            .init_resource::<PainterTarget>()
            .init_resource::<BrushCursor>()
            .init_resource::<CommandHistory>()
            .init_resource::<randomizer::PaintRng>()
            .add_message::<AddBodiesRequest>()
            .add_message::<RemoveBodiesRequest>()
            .add_message::<CopyTransformsRequest>()
            .add_message::<ApplyTransformsRequest>()
            .add_message::<ClearContainerRequest>()
            .add_message::<UndoRequest>()
            .add_message::<RedoRequest>()
            .add_systems(
                Startup,
                (camera::spawn_camera, scene::setup_scene).after(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    camera::camera_orbit_pan,
                    camera::camera_zoom,
                    camera::apply_camera_rig,
                    brush::handle_brush_resize,
                    (brush::update_brush_cursor, brush::handle_paint, brush::draw_brush_gizmo)
                        .chain(),
                ),
            )
            .add_systems(
                Update,
                (
                    physics::handle_add_bodies.run_if(on_message::<AddBodiesRequest>),
                    physics::handle_remove_bodies.run_if(on_message::<RemoveBodiesRequest>),
                    snapshot::handle_copy_transforms.run_if(on_message::<CopyTransformsRequest>),
                    snapshot::handle_apply_transforms.run_if(on_message::<ApplyTransformsRequest>),
                    container::handle_clear_container.run_if(on_message::<ClearContainerRequest>),
                    history::handle_undo,
                    history::handle_redo,
                )
                    .chain(),
            );
    }
}

//! Applying the inverse of a command for undo and redo.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::super::container::{PaintContainer, PaintedInstance};
use super::super::identity::PaintId;
use super::super::physics::PaintedBody;
use super::commands::PainterCommand;
use super::data_types::InstanceData;
use super::spawn_helpers::spawn_instance;

/// World access needed to revert painter commands
#[allow(clippy::type_complexity)]
#[derive(SystemParam)]
pub struct HistoryContext<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub asset_server: Res<'w, AssetServer>,
    pub containers: Query<'w, 's, (), With<PaintContainer>>,
    pub instances: Query<
        'w,
        's,
        (
            Entity,
            &'static PaintId,
            &'static PaintedInstance,
            &'static Transform,
            Option<&'static PaintedBody>,
        ),
    >,
}

impl HistoryContext<'_, '_> {
    fn find_instance(&self, id: PaintId) -> Option<Entity> {
        self.instances
            .iter()
            .find_map(|(entity, instance_id, ..)| (*instance_id == id).then_some(entity))
    }

    /// Current state of an instance, as it would be stored to respawn it
    fn live_instance(&self, id: PaintId) -> Option<InstanceData> {
        self.instances
            .iter()
            .find(|(_, instance_id, ..)| **instance_id == id)
            .map(|(_, id, instance, transform, body)| InstanceData {
                id: *id,
                prefab_path: instance.prefab_path.clone(),
                transform: transform.into(),
                body: body.copied(),
            })
    }

    /// Carry out `command` against the world. False if it could not be applied.
    fn apply(&mut self, command: &PainterCommand) -> bool {
        match command {
            PainterCommand::PlaceInstances { container, items } => {
                if !self.containers.contains(*container) {
                    warn!("Cannot restore instances: container {:?} is gone", container);
                    return false;
                }
                for item in items {
                    spawn_instance(&mut self.commands, &self.asset_server, *container, item);
                }
            }
            PainterCommand::RemoveInstances { items, .. } => {
                for item in items {
                    if let Some(entity) = self.find_instance(item.id) {
                        self.commands.entity(entity).despawn();
                    }
                }
            }
            PainterCommand::MoveInstances { moves } => {
                for (id, _, new_transform) in moves {
                    if let Some(entity) = self.find_instance(*id) {
                        self.commands
                            .entity(entity)
                            .insert(Transform::from(*new_transform));
                    }
                }
            }
        }
        true
    }
}

/// Revert `command` and return the command that reverts it again.
///
/// Instances are looked up by [`PaintId`], so commands stay valid after the
/// entities they mention have been respawned. Returns `None` when nothing
/// could be reverted (e.g. the container is gone or no instance remains).
pub fn execute_inverse(command: &PainterCommand, ctx: &mut HistoryContext) -> Option<PainterCommand> {
    let inverse = command.inverse(|id| ctx.live_instance(id))?;
    ctx.apply(&inverse).then_some(inverse)
}

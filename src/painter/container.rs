//! The container that painted instances are parented to.

use bevy::prelude::*;

use super::history::{CommandHistory, InstanceData, PainterCommand};
use super::identity::PaintId;
use super::messages::ClearContainerRequest;
use super::physics::PaintedBody;
use super::session::PainterTarget;

/// Marker for entities that can hold painted instances
#[derive(Component, Debug, Default)]
pub struct PaintContainer;

/// Marks the root entity of a painted prefab instance
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PaintedInstance {
    pub prefab_path: String,
}

/// Number of painted instances under the container (0 without a container)
pub fn count_instances<'a, I>(container: Option<Entity>, parents: I) -> usize
where
    I: IntoIterator<Item = &'a ChildOf>,
{
    let Some(container) = container else {
        return 0;
    };
    parents
        .into_iter()
        .filter(|child_of| child_of.parent() == container)
        .count()
}

/// Despawn every painted instance under the active container
#[allow(clippy::type_complexity)]
pub fn handle_clear_container(
    mut commands: Commands,
    mut events: MessageReader<ClearContainerRequest>,
    target: Res<PainterTarget>,
    instances: Query<(
        Entity,
        &PaintId,
        &PaintedInstance,
        &Transform,
        &ChildOf,
        Option<&PaintedBody>,
    )>,
    mut history: ResMut<CommandHistory>,
) {
    for _ in events.read() {
        let Some(container) = target.container else {
            debug!("Clear ignored: no container");
            continue;
        };

        let mut removed = Vec::new();
        for (entity, id, instance, transform, child_of, body) in instances.iter() {
            if child_of.parent() != container {
                continue;
            }
            removed.push(InstanceData {
                id: *id,
                prefab_path: instance.prefab_path.clone(),
                transform: transform.into(),
                body: body.copied(),
            });
            commands.entity(entity).despawn();
        }

        if removed.is_empty() {
            continue;
        }

        info!("Removed {} painted instances", removed.len());
        history.push(PainterCommand::RemoveInstances {
            container,
            items: removed,
        });
    }
}

//! Spawning painted instances, shared by the brush and undo/redo.

use avian3d::prelude::*;
use bevy::prelude::*;

use super::super::container::PaintedInstance;
use super::super::physics::body_components;
use super::data_types::InstanceData;

/// Spawn a prefab instance under `container` from InstanceData
pub fn spawn_instance(
    commands: &mut Commands,
    asset_server: &AssetServer,
    container: Entity,
    data: &InstanceData,
) -> Entity {
    let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(data.prefab_path.clone()));

    let mut entity = commands.spawn((
        SceneRoot(scene),
        Transform::from(data.transform),
        data.id,
        PaintedInstance {
            prefab_path: data.prefab_path.clone(),
        },
        ChildOf(container),
        // Colliders are built per mesh once the scene has loaded
        ColliderConstructorHierarchy::new(ColliderConstructor::ConvexHullFromMesh),
    ));

    if let Some(body) = data.body {
        entity.insert(body_components(body));
    }

    entity.id()
}

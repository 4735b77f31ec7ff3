use avian3d::prelude::*;
use bevy::prelude::*;

use crate::constants::GROUND_SIZE;

use super::container::PaintContainer;
use super::session::PainterTarget;

/// Spawn the ground surface, lighting and the default container
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut target: ResMut<PainterTarget>,
) {
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(Color::srgb(0.35, 0.45, 0.3))),
        Transform::default(),
        RigidBody::Static,
        Collider::half_space(Vec3::Y),
    ));

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let container = commands
        .spawn((
            Name::new("Painted Prefabs"),
            PaintContainer,
            Transform::default(),
            Visibility::default(),
        ))
        .id();
    target.container = Some(container);
    info!("Painting into container {:?}", container);
}

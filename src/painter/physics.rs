//! Batch add/remove of physics bodies on painted instances.
//!
//! A body is a dynamic avian3d rigid body. Colliders come from the prefab
//! meshes (see [`spawn_instance`](super::history::spawn_instance)), so
//! removing a body leaves the instance as a static obstacle.

use avian3d::prelude::*;
use bevy::prelude::*;

use super::container::PaintedInstance;
use super::messages::{AddBodiesRequest, RemoveBodiesRequest};
use super::session::PainterTarget;
use super::settings::PainterSettings;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PaintedBody {
    pub mass: f32,
    pub use_gravity: bool,
}

impl PaintedBody {
    pub fn from_settings(settings: &PainterSettings) -> Self {
        Self {
            mass: settings.body_mass,
            use_gravity: settings.body_use_gravity,
        }
    }

    pub fn gravity_scale(&self) -> f32 {
        if self.use_gravity { 1.0 } else { 0.0 }
    }
}

/// The body record plus the components the physics solver simulates
pub fn body_components(body: PaintedBody) -> impl Bundle {
    (
        body,
        RigidBody::Dynamic,
        Mass(body.mass),
        GravityScale(body.gravity_scale()),
    )
}

/// Strip a body added by [`body_components`]
pub fn remove_body(entity: &mut EntityCommands) {
    entity.remove::<(PaintedBody, RigidBody, Mass, GravityScale)>();
}

/// Instances that need a body: everything without one.
pub fn plan_add_bodies<I>(instances: I) -> Vec<Entity>
where
    I: IntoIterator<Item = (Entity, bool)>,
{
    instances
        .into_iter()
        .filter_map(|(entity, has_body)| (!has_body).then_some(entity))
        .collect()
}

/// Instances whose body should be removed: everything that has one.
pub fn plan_remove_bodies<I>(instances: I) -> Vec<Entity>
where
    I: IntoIterator<Item = (Entity, bool)>,
{
    instances
        .into_iter()
        .filter_map(|(entity, has_body)| has_body.then_some(entity))
        .collect()
}

pub fn handle_add_bodies(
    mut commands: Commands,
    mut events: MessageReader<AddBodiesRequest>,
    target: Res<PainterTarget>,
    settings: Res<PainterSettings>,
    instances: Query<(Entity, &ChildOf, Has<PaintedBody>), With<PaintedInstance>>,
) {
    for _ in events.read() {
        let Some(container) = target.container else {
            debug!("Add bodies ignored: no container");
            continue;
        };

        let body = PaintedBody::from_settings(&settings);
        let entities = plan_add_bodies(
            instances
                .iter()
                .filter(|(_, child_of, _)| child_of.parent() == container)
                .map(|(entity, _, has_body)| (entity, has_body)),
        );
        for entity in &entities {
            commands.entity(*entity).insert(body_components(body));
        }
        info!("Added bodies to {} instances", entities.len());
    }
}

pub fn handle_remove_bodies(
    mut commands: Commands,
    mut events: MessageReader<RemoveBodiesRequest>,
    target: Res<PainterTarget>,
    instances: Query<(Entity, &ChildOf, Has<PaintedBody>), With<PaintedInstance>>,
) {
    for _ in events.read() {
        let Some(container) = target.container else {
            debug!("Remove bodies ignored: no container");
            continue;
        };

        let entities = plan_remove_bodies(
            instances
                .iter()
                .filter(|(_, child_of, _)| child_of.parent() == container)
                .map(|(entity, _, has_body)| (entity, has_body)),
        );
        for entity in &entities {
            remove_body(&mut commands.entity(*entity));
        }
        info!("Removed bodies from {} instances", entities.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(count: usize) -> Vec<Entity> {
        let mut world = World::new();
        (0..count).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn test_add_skips_instances_with_bodies() {
        let e = entities(3);
        let planned = plan_add_bodies([(e[0], false), (e[1], true), (e[2], false)]);
        assert_eq!(planned, vec![e[0], e[2]]);
    }

    #[test]
    fn test_remove_only_targets_bodies() {
        let e = entities(3);
        let planned = plan_remove_bodies([(e[0], false), (e[1], true), (e[2], false)]);
        assert_eq!(planned, vec![e[1]]);
    }

    #[test]
    fn test_empty_container_plans_nothing() {
        assert!(plan_add_bodies(std::iter::empty()).is_empty());
        assert!(plan_remove_bodies(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_body_from_settings() {
        let settings = PainterSettings {
            body_mass: 2.5,
            body_use_gravity: false,
            ..default()
        };
        let body = PaintedBody::from_settings(&settings);
        assert_eq!(body.mass, 2.5);
        assert!(!body.use_gravity);

        let default_body = PaintedBody::from_settings(&PainterSettings::default());
        assert_eq!(default_body.mass, 1.0);
        assert!(default_body.use_gravity);
    }

    #[test]
    fn test_gravity_scale_follows_flag() {
        let body = PaintedBody {
            mass: 1.0,
            use_gravity: true,
        };
        assert_eq!(body.gravity_scale(), 1.0);

        let floating = PaintedBody {
            use_gravity: false,
            ..body
        };
        assert_eq!(floating.gravity_scale(), 0.0);
    }
}

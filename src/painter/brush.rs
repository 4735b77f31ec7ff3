//! Brush tool for painting prefab instances.
//!
//! The brush follows the surface under the mouse. While the left button is
//! held, a new instance is placed at the brush point unless an existing
//! instance already lies within the brush size of it, so each
//! brush-sized neighborhood gets at most one instance.
//!
//! ## Tool Behavior
//!
//! - Left click / drag: paint
//! - Ctrl + mouse wheel: grow or shrink the brush

use bevy::input::mouse::MouseWheel;
use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;
use bevy_egui::EguiContexts;
use rand::Rng;

use crate::constants::BRUSH_SIZE_STEP;

use super::camera::CameraParams;
use super::container::{PaintContainer, PaintedInstance};
use super::history::{CommandHistory, InstanceData, PainterCommand, spawn_instance};
use super::randomizer::{PaintRng, PlacementVariation, randomize};
use super::session::{PainterSession, PainterTarget};
use super::settings::PainterSettings;

/// A single placement attempt: where the cursor is and how large the brush is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushQuery {
    pub point: Vec3,
    pub radius: f32,
}

impl BrushQuery {
    /// Returns `None` for a radius that is not a positive finite number
    pub fn new(point: Vec3, radius: f32) -> Option<Self> {
        (radius.is_finite() && radius > 0.0).then_some(Self { point, radius })
    }

    pub fn can_place<I>(&self, existing: I) -> bool
    where
        I: IntoIterator<Item = Vec3>,
    {
        can_place(self.point, self.radius, existing)
    }
}

/// Whether a new instance may go at `point`.
///
/// False as soon as any existing instance is within `radius` (boundary
/// included). A non-positive radius never allows placement.
pub fn can_place<I>(point: Vec3, radius: f32, existing: I) -> bool
where
    I: IntoIterator<Item = Vec3>,
{
    if radius.is_nan() || radius <= 0.0 {
        return false;
    }
    !existing
        .into_iter()
        .any(|position| point.distance(position) <= radius)
}

/// Where and how a new instance should be placed, in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementPlan {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl PlacementPlan {
    pub fn world_transform(&self) -> Transform {
        Transform {
            translation: self.translation,
            rotation: self.rotation,
            scale: Vec3::splat(self.scale),
        }
    }
}

/// Decide whether to paint at `hit` and, if so, with which transform.
///
/// Occupancy is tested at the raw brush point; the configured offset is only
/// added to the placed translation.
pub fn plan_placement<I, R>(
    settings: &PainterSettings,
    hit: Vec3,
    existing: I,
    rng: &mut R,
) -> Option<PlacementPlan>
where
    I: IntoIterator<Item = Vec3>,
    R: Rng + ?Sized,
{
    let query = BrushQuery::new(hit, settings.exclusion_radius())?;
    if !query.can_place(existing) {
        return None;
    }

    let PlacementVariation { scale, rotation } = randomize(settings, rng);
    Some(PlacementPlan {
        translation: hit + settings.position_offset,
        rotation,
        scale,
    })
}

/// Surface point currently under the mouse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushHit {
    pub point: Vec3,
    pub normal: Vec3,
}

/// Resource holding the brush position for this frame, if the cursor hits anything
#[derive(Resource, Default)]
pub struct BrushCursor {
    pub hit: Option<BrushHit>,
}

/// Cast a ray from the cursor into the scene to find the brush point
pub fn update_brush_cursor(
    camera: CameraParams,
    mut ray_cast: MeshRayCast,
    mut cursor: ResMut<BrushCursor>,
) {
    let hit = camera.cursor_ray().and_then(|ray| {
        ray_cast
            .cast_ray(ray, &MeshRayCastSettings::default())
            .first()
            .map(|(_, hit)| BrushHit {
                point: hit.point,
                normal: hit.normal.normalize_or(Vec3::Y),
            })
    });

    if cursor.hit != hit {
        cursor.hit = hit;
    }
}

/// Draw the brush circle on the surface
pub fn draw_brush_gizmo(
    cursor: Res<BrushCursor>,
    settings: Res<PainterSettings>,
    mut gizmos: Gizmos,
) {
    let Some(hit) = cursor.hit else {
        return;
    };

    // Circles are drawn in the isometry's XY plane, so align +Z with the normal
    let rotation = Quat::from_rotation_arc(Vec3::Z, hit.normal);
    gizmos.circle(
        Isometry3d::new(hit.point, rotation),
        settings.brush_radius(),
        Color::srgb(1.0, 0.0, 0.0),
    );
}

/// Ctrl + mouse wheel changes the brush size
pub fn handle_brush_resize(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut scroll_events: MessageReader<MouseWheel>,
    mut settings: ResMut<PainterSettings>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        scroll_events.clear();
        return;
    }

    for event in scroll_events.read() {
        if event.y > 0.0 {
            settings.adjust_brush_size(BRUSH_SIZE_STEP);
        } else if event.y < 0.0 {
            settings.adjust_brush_size(-BRUSH_SIZE_STEP);
        }
    }
}

/// Paint while the left mouse button is held over scene geometry
#[allow(clippy::too_many_arguments)]
pub fn handle_paint(
    mut commands: Commands,
    mouse_button: Res<ButtonInput<MouseButton>>,
    cursor: Res<BrushCursor>,
    settings: Res<PainterSettings>,
    target: Res<PainterTarget>,
    containers: Query<&GlobalTransform, With<PaintContainer>>,
    instances: Query<(&GlobalTransform, &ChildOf), With<PaintedInstance>>,
    asset_server: Res<AssetServer>,
    mut session: ResMut<PainterSession>,
    mut rng: ResMut<PaintRng>,
    mut history: ResMut<CommandHistory>,
    mut contexts: EguiContexts,
) {
    if !mouse_button.pressed(MouseButton::Left) {
        return;
    }

    // Don't paint through the UI
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.is_pointer_over_area()
    {
        return;
    }

    let Some(hit) = cursor.hit else {
        return;
    };

    let Some(container) = target.container else {
        debug!("Paint ignored: no container");
        return;
    };

    let Ok(container_transform) = containers.get(container) else {
        debug!("Paint ignored: container {:?} no longer exists", container);
        return;
    };

    if settings.prefab_path.trim().is_empty() {
        debug!("Paint ignored: no prefab");
        return;
    }

    if settings.validate().is_err() {
        return;
    }

    let existing = instances
        .iter()
        .filter(|(_, child_of)| child_of.parent() == container)
        .map(|(transform, _)| transform.translation());

    let Some(plan) = plan_placement(&settings, hit.point, existing, &mut rng.0) else {
        return;
    };

    // Instances are parented to the container, so store container-local transforms
    let local = GlobalTransform::from(plan.world_transform()).reparented_to(container_transform);

    let data = InstanceData {
        id: session.ids.next(),
        prefab_path: settings.prefab_path.clone(),
        transform: (&local).into(),
        body: None,
    };
    spawn_instance(&mut commands, &asset_server, container, &data);
    debug!("Painted {} at {}", data.id, plan.translation);

    history.push(PainterCommand::PlaceInstances {
        container,
        items: vec![data],
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_existing_is_always_placeable() {
        assert!(can_place(Vec3::ZERO, 1.0, []));
        assert!(can_place(Vec3::new(100.0, -5.0, 3.0), 0.01, Vec::new()));
    }

    #[test]
    fn test_placement_scenario() {
        let existing = [Vec3::ZERO];
        // Distance 1.0 is inside a radius of 2.0
        assert!(!can_place(Vec3::new(1.0, 0.0, 0.0), 2.0, existing));
        // Distance 5.0 is outside
        assert!(can_place(Vec3::new(5.0, 0.0, 0.0), 2.0, existing));
    }

    #[test]
    fn test_boundary_counts_as_occupied() {
        let existing = [Vec3::ZERO];
        assert!(!can_place(Vec3::new(2.0, 0.0, 0.0), 2.0, existing));
        assert!(can_place(Vec3::new(2.001, 0.0, 0.0), 2.0, existing));
    }

    #[test]
    fn test_any_nearby_instance_blocks() {
        let existing = [
            Vec3::new(50.0, 0.0, 0.0),
            Vec3::new(-50.0, 0.0, 0.0),
            Vec3::new(0.0, 0.5, 0.5),
        ];
        assert!(!can_place(Vec3::ZERO, 1.0, existing));

        // Order does not matter
        let mut reversed = existing;
        reversed.reverse();
        assert!(!can_place(Vec3::ZERO, 1.0, reversed));
    }

    #[test]
    fn test_distance_is_three_dimensional() {
        // Close in XZ but far above
        let existing = [Vec3::new(0.5, 10.0, 0.0)];
        assert!(can_place(Vec3::ZERO, 1.0, existing));
    }

    #[test]
    fn test_non_positive_radius_never_places() {
        assert!(!can_place(Vec3::ZERO, 0.0, []));
        assert!(!can_place(Vec3::ZERO, -1.0, []));
        assert!(!can_place(Vec3::ZERO, f32::NAN, []));
    }

    #[test]
    fn test_brush_query_rejects_invalid_radius() {
        assert!(BrushQuery::new(Vec3::ZERO, 0.0).is_none());
        assert!(BrushQuery::new(Vec3::ZERO, -2.0).is_none());
        assert!(BrushQuery::new(Vec3::ZERO, f32::INFINITY).is_none());

        let query = BrushQuery::new(Vec3::ZERO, 2.0).unwrap();
        assert!(query.can_place([Vec3::new(3.0, 0.0, 0.0)]));
        assert!(!query.can_place([Vec3::new(1.0, 0.0, 0.0)]));
    }

    #[test]
    fn test_plan_excludes_within_full_brush_size() {
        let settings = PainterSettings::default();
        let mut rng = StdRng::seed_from_u64(1);

        // Default size 2.0: 1.5 away is outside the drawn circle but still blocks
        assert!(plan_placement(&settings, Vec3::ZERO, [Vec3::new(1.5, 0.0, 0.0)], &mut rng).is_none());
        assert!(plan_placement(&settings, Vec3::ZERO, [Vec3::new(2.0, 0.0, 0.0)], &mut rng).is_none());
        assert!(plan_placement(&settings, Vec3::ZERO, [Vec3::new(2.1, 0.0, 0.0)], &mut rng).is_some());
    }

    #[test]
    fn test_plan_applies_offset() {
        let settings = PainterSettings {
            brush_size: 4.0,
            position_offset: Vec3::new(0.0, 0.25, 0.0),
            ..default()
        };
        let mut rng = StdRng::seed_from_u64(1);

        assert!(plan_placement(&settings, Vec3::ZERO, [Vec3::new(3.5, 0.0, 0.0)], &mut rng).is_none());

        let plan = plan_placement(&settings, Vec3::ZERO, [Vec3::new(4.5, 0.0, 0.0)], &mut rng)
            .unwrap();
        assert_eq!(plan.translation, Vec3::new(0.0, 0.25, 0.0));
        assert_eq!(plan.scale, 1.0);
        assert_eq!(plan.rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_plan_world_transform_scales_uniformly() {
        let plan = PlacementPlan {
            translation: Vec3::ONE,
            rotation: Quat::IDENTITY,
            scale: 1.25,
        };
        let transform = plan.world_transform();
        assert_eq!(transform.scale, Vec3::splat(1.25));
        assert_eq!(transform.translation, Vec3::ONE);
    }

    #[test]
    fn test_brush_cursor_default() {
        let cursor = BrushCursor::default();
        assert!(cursor.hit.is_none());
    }
}

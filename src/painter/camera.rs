use bevy::ecs::system::SystemParam;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

#[derive(Component)]
pub struct EditorCamera;

/// Orbit camera parameters; the camera transform is derived from these
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub focus: Vec3,
    pub distance: f32,
    /// Rotation around the Y axis, radians
    pub yaw: f32,
    /// Elevation above the ground plane, radians
    pub pitch: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            distance: 25.0,
            yaw: 0.6,
            pitch: 0.7,
        }
    }
}

impl CameraRig {
    pub const MIN_DISTANCE: f32 = 2.0;
    pub const MAX_DISTANCE: f32 = 200.0;
    const MAX_PITCH: f32 = 1.5;

    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        let translation = self.focus + rotation * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(translation).looking_at(self.focus, Vec3::Y)
    }

    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * 0.005;
        self.pitch = (self.pitch + delta.y * 0.005).clamp(0.05, Self::MAX_PITCH);
    }

    pub fn zoom(&mut self, amount: f32) {
        self.distance = (self.distance * (1.0 - amount)).clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }
}

/// Bundled camera and window queries for cursor ray casting
#[derive(SystemParam)]
pub struct CameraParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<EditorCamera>>,
}

impl CameraParams<'_, '_> {
    /// World-space ray through the cursor, if the cursor is in the window
    pub fn cursor_ray(&self) -> Option<Ray3d> {
        let window = self.window.single().ok()?;
        let (camera, transform) = self.camera.single().ok()?;
        let cursor_pos = window.cursor_position()?;
        camera.viewport_to_world(transform, cursor_pos).ok()
    }
}

pub fn spawn_camera(mut commands: Commands) {
    let rig = CameraRig::default();
    commands.spawn((Camera3d::default(), EditorCamera, rig, rig.transform()));
}

/// Right drag orbits, middle drag pans
pub fn camera_orbit_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut camera_query: Query<(&mut CameraRig, &Transform), With<EditorCamera>>,
) {
    let orbiting = mouse_button.pressed(MouseButton::Right);
    let panning = mouse_button.pressed(MouseButton::Middle);
    if !orbiting && !panning {
        mouse_motion.clear();
        return;
    }

    let Ok((mut rig, transform)) = camera_query.single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        if orbiting {
            rig.orbit(event.delta);
        } else {
            let scale = rig.distance * 0.002;
            let right = transform.right() * -event.delta.x * scale;
            let up = transform.up() * event.delta.y * scale;
            rig.focus += right + up;
        }
    }
}

/// Mouse wheel zooms, except while Ctrl is held (that resizes the brush)
pub fn camera_zoom(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut CameraRig, With<EditorCamera>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if ctrl {
        scroll_events.clear();
        return;
    }

    let Ok(mut rig) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        let scroll_amount = match event.unit {
            MouseScrollUnit::Line => event.y * 0.1,
            MouseScrollUnit::Pixel => event.y * 0.001,
        };
        rig.zoom(scroll_amount);
    }
}

pub fn apply_camera_rig(
    mut camera_query: Query<(&CameraRig, &mut Transform), (With<EditorCamera>, Changed<CameraRig>)>,
) {
    for (rig, mut transform) in camera_query.iter_mut() {
        *transform = rig.transform();
    }
}

//! Data kept by undo/redo commands.

use bevy::prelude::*;

use super::super::identity::PaintId;
use super::super::physics::PaintedBody;

/// Everything needed to respawn a painted instance
#[derive(Clone, Debug, PartialEq)]
pub struct InstanceData {
    pub id: PaintId,
    pub prefab_path: String,
    /// Container-local transform
    pub transform: TransformData,
    pub body: Option<PaintedBody>,
}

#[derive(Clone, Debug, Copy, PartialEq)]
pub struct TransformData {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl From<&Transform> for TransformData {
    fn from(t: &Transform) -> Self {
        Self {
            translation: t.translation,
            rotation: t.rotation,
            scale: t.scale,
        }
    }
}

impl From<TransformData> for Transform {
    fn from(t: TransformData) -> Self {
        Transform {
            translation: t.translation,
            rotation: t.rotation,
            scale: t.scale,
        }
    }
}

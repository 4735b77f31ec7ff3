use bevy::prelude::*;

use super::identity::PaintIdAllocator;
use super::snapshot::SnapshotStore;

/// State that lives for one editing session: copied transforms and the id counter
#[derive(Resource, Default)]
pub struct PainterSession {
    pub snapshots: SnapshotStore,
    pub ids: PaintIdAllocator,
}

/// Which container painted instances are parented to.
///
/// All placement, body, snapshot and clear operations are scoped to it and
/// quietly do nothing while it is unset.
#[derive(Resource, Default)]
pub struct PainterTarget {
    pub container: Option<Entity>,
}

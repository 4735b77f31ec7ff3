//! Transform snapshots for the Copy / Apply Copied Transforms buttons.
//!
//! A copy captures the translation and rotation of every painted instance,
//! keyed by [`PaintId`]. Applying writes them back to whichever instances
//! still exist; instances without a snapshot are left alone.

use std::collections::HashMap;
use std::ops::DerefMut;

use bevy::prelude::*;

use super::history::{CommandHistory, PainterCommand, TransformData};
use super::identity::PaintId;
use super::messages::{ApplyTransformsRequest, CopyTransformsRequest};
use super::session::{PainterSession, PainterTarget};

/// Position and rotation of one instance at copy time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSnapshot {
    pub position: Vec3,
    pub rotation: Quat,
}

impl From<&Transform> for TransformSnapshot {
    fn from(t: &Transform) -> Self {
        Self {
            position: t.translation,
            rotation: t.rotation,
        }
    }
}

/// Outcome of [`SnapshotStore::capture`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaptureReport {
    pub captured: usize,
    /// Entries replaced because the same id appeared more than once
    pub overwritten: usize,
}

/// Outcome of [`SnapshotStore::restore`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RestoreReport {
    pub applied: Vec<PaintId>,
    /// Live objects with no snapshot
    pub skipped: usize,
}

#[derive(Debug, Default, Clone)]
pub struct SnapshotStore {
    entries: HashMap<PaintId, TransformSnapshot>,
}

impl SnapshotStore {
    /// Replace the store contents with one snapshot per object.
    ///
    /// A repeated id keeps the last snapshot seen for it.
    pub fn capture<I>(&mut self, objects: I) -> CaptureReport
    where
        I: IntoIterator<Item = (PaintId, Vec3, Quat)>,
    {
        self.entries.clear();

        let mut report = CaptureReport::default();
        for (id, position, rotation) in objects {
            let previous = self
                .entries
                .insert(id, TransformSnapshot { position, rotation });
            if previous.is_some() {
                report.overwritten += 1;
            } else {
                report.captured += 1;
            }
        }
        report
    }

    /// Write captured translation and rotation back onto live objects.
    ///
    /// Scale is untouched. Objects the store knows nothing about are skipped,
    /// and store entries for objects that no longer exist are ignored.
    pub fn restore<I, T>(&self, objects: I) -> RestoreReport
    where
        I: IntoIterator<Item = (PaintId, T)>,
        T: DerefMut<Target = Transform>,
    {
        let mut report = RestoreReport::default();
        for (id, mut transform) in objects {
            match self.entries.get(&id) {
                Some(snapshot) => {
                    transform.translation = snapshot.position;
                    transform.rotation = snapshot.rotation;
                    report.applied.push(id);
                }
                None => report.skipped += 1,
            }
        }
        report
    }

    pub fn get(&self, id: PaintId) -> Option<&TransformSnapshot> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PaintId, &TransformSnapshot)> {
        self.entries.iter()
    }
}

/// Moves caused by a restore, for the undo history.
///
/// `before` holds the transforms prior to the restore and `applied` the ids
/// the restore wrote to. Instances whose transform did not actually change are
/// left out. Scale is never part of a snapshot, so the old scale is kept.
pub fn plan_moves(
    before: &HashMap<PaintId, TransformData>,
    applied: &[PaintId],
    store: &SnapshotStore,
) -> Vec<(PaintId, TransformData, TransformData)> {
    applied
        .iter()
        .filter_map(|id| {
            let old = *before.get(id)?;
            let snapshot = store.get(*id)?;
            let new = TransformData {
                translation: snapshot.position,
                rotation: snapshot.rotation,
                scale: old.scale,
            };
            (old != new).then_some((*id, old, new))
        })
        .collect()
}

/// Capture the transforms of the active container's instances
pub fn handle_copy_transforms(
    mut events: MessageReader<CopyTransformsRequest>,
    target: Res<PainterTarget>,
    instances: Query<(&PaintId, &Transform, &ChildOf)>,
    mut session: ResMut<PainterSession>,
) {
    for _ in events.read() {
        let Some(container) = target.container else {
            debug!("Copy transforms ignored: no container");
            continue;
        };

        let report = session.snapshots.capture(
            instances
                .iter()
                .filter(|(_, _, child_of)| child_of.parent() == container)
                .map(|(id, transform, _)| (*id, transform.translation, transform.rotation)),
        );

        if report.overwritten > 0 {
            warn!("{} duplicate instance ids while copying transforms", report.overwritten);
        }
        info!("Copied {} transforms", session.snapshots.len());
        for (id, snapshot) in session.snapshots.iter() {
            debug!("Copied {}: position {}", id, snapshot.position);
        }
    }
}

/// Restore the last copied transforms onto the active container's instances
pub fn handle_apply_transforms(
    mut events: MessageReader<ApplyTransformsRequest>,
    target: Res<PainterTarget>,
    mut instances: Query<(&PaintId, &mut Transform, &ChildOf)>,
    session: Res<PainterSession>,
    mut history: ResMut<CommandHistory>,
) {
    for _ in events.read() {
        let Some(container) = target.container else {
            debug!("Apply transforms ignored: no container");
            continue;
        };

        if session.snapshots.is_empty() {
            info!("Nothing copied yet");
            continue;
        }

        let before: HashMap<PaintId, TransformData> = instances
            .iter()
            .filter(|(_, _, child_of)| child_of.parent() == container)
            .map(|(id, transform, _)| (*id, TransformData::from(transform)))
            .collect();

        let report = session.snapshots.restore(
            instances
                .iter_mut()
                .filter(|(_, _, child_of)| child_of.parent() == container)
                .map(|(id, transform, _)| (*id, transform)),
        );

        info!(
            "Applied {} copied transforms ({} instances without a snapshot)",
            report.applied.len(),
            report.skipped
        );

        let moves = plan_moves(&before, &report.applied, &session.snapshots);

        if !moves.is_empty() {
            history.push(PainterCommand::MoveInstances { moves });
        }
    }
}

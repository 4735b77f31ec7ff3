//! Painter command enum for undo/redo operations.

use bevy::prelude::*;

use super::super::identity::PaintId;
use super::data_types::{InstanceData, TransformData};

/// A reversible painter operation
#[derive(Clone, Debug, PartialEq)]
pub enum PainterCommand {
    /// Instances were painted into the container
    PlaceInstances {
        container: Entity,
        items: Vec<InstanceData>,
    },
    /// Instances were removed from the container
    RemoveInstances {
        container: Entity,
        items: Vec<InstanceData>,
    },
    /// Instances were moved, e.g. by applying copied transforms
    MoveInstances {
        /// Instance id, old transform, new transform
        moves: Vec<(PaintId, TransformData, TransformData)>,
    },
}

impl PainterCommand {
    /// Short description for logs
    pub fn label(&self) -> &'static str {
        match self {
            PainterCommand::PlaceInstances { .. } => "paint",
            PainterCommand::RemoveInstances { .. } => "remove instances",
            PainterCommand::MoveInstances { .. } => "apply transforms",
        }
    }

    /// The command that reverts this one.
    ///
    /// `live` returns the current state of an instance that still exists.
    /// Placements are reverted with the live data so that later edits (a
    /// body, a moved transform) come back on redo. Returns `None` when the
    /// inverse would not touch any instance.
    pub fn inverse<F>(&self, mut live: F) -> Option<PainterCommand>
    where
        F: FnMut(PaintId) -> Option<InstanceData>,
    {
        match self {
            PainterCommand::PlaceInstances { container, items } => {
                let items: Vec<_> = items.iter().filter_map(|item| live(item.id)).collect();
                (!items.is_empty()).then_some(PainterCommand::RemoveInstances {
                    container: *container,
                    items,
                })
            }
            PainterCommand::RemoveInstances { container, items } => {
                (!items.is_empty()).then(|| PainterCommand::PlaceInstances {
                    container: *container,
                    items: items.clone(),
                })
            }
            PainterCommand::MoveInstances { moves } => {
                let moves: Vec<_> = moves
                    .iter()
                    .filter(|(id, _, _)| live(*id).is_some())
                    .map(|(id, old, new)| (*id, *new, *old))
                    .collect();
                (!moves.is_empty()).then_some(PainterCommand::MoveInstances { moves })
            }
        }
    }
}

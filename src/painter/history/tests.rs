//! Unit tests for the history module.

use bevy::prelude::*;

use super::super::identity::PaintId;
use super::super::physics::PaintedBody;
use super::MAX_HISTORY_SIZE;
use super::command_history::CommandHistory;
use super::commands::PainterCommand;
use super::data_types::{InstanceData, TransformData};

fn container() -> Entity {
    World::new().spawn_empty().id()
}

fn instance(id: u64) -> InstanceData {
    InstanceData {
        id: PaintId(id),
        prefab_path: "models/rock.glb".to_string(),
        transform: TransformData::from(&Transform::from_xyz(id as f32, 0.0, 0.0)),
        body: None,
    }
}

#[test]
fn test_command_history_push() {
    let mut history = CommandHistory::default();
    assert!(!history.can_undo());

    history.push(PainterCommand::PlaceInstances {
        container: container(),
        items: vec![instance(1)],
    });
    assert!(history.can_undo());
    assert_eq!(history.undo_count(), 1);
}

#[test]
fn test_command_history_push_clears_redo() {
    let mut history = CommandHistory::default();
    let container = container();

    history.push(PainterCommand::PlaceInstances {
        container,
        items: vec![instance(1)],
    });
    history.push(PainterCommand::PlaceInstances {
        container,
        items: vec![instance(2)],
    });

    // Undo one
    let undone = history.pop_undo().unwrap();
    history.push_redo(undone);
    assert!(history.can_redo());

    // A new action clears redo
    history.push(PainterCommand::PlaceInstances {
        container,
        items: vec![instance(3)],
    });
    assert!(!history.can_redo());
    assert_eq!(history.undo_count(), 2);
}

#[test]
fn test_push_undo_keeps_redo() {
    let mut history = CommandHistory::default();
    history.push_redo(PainterCommand::MoveInstances { moves: vec![] });
    history.push_undo(PainterCommand::MoveInstances { moves: vec![] });
    assert_eq!(history.redo_count(), 1);
    assert_eq!(history.undo_count(), 1);
}

#[test]
fn test_command_history_max_size() {
    let mut history = CommandHistory::default();

    for i in 0..150 {
        history.push(PainterCommand::PlaceInstances {
            container: container(),
            items: vec![instance(i)],
        });
    }

    assert_eq!(history.undo_count(), MAX_HISTORY_SIZE);

    // Oldest entries are dropped first
    let newest = history.pop_undo().unwrap();
    match newest {
        PainterCommand::PlaceInstances { items, .. } => assert_eq!(items[0].id, PaintId(149)),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_transform_data_conversion() {
    let transform = Transform {
        translation: Vec3::new(1.0, 2.0, 3.0),
        rotation: Quat::from_rotation_y(0.5),
        scale: Vec3::splat(1.3),
    };

    let data = TransformData::from(&transform);
    let restored: Transform = data.into();

    assert_eq!(transform, restored);
}

#[test]
fn test_instance_data_keeps_body() {
    let mut data = instance(7);
    data.body = Some(PaintedBody {
        mass: 3.0,
        use_gravity: false,
    });
    let cloned = data.clone();
    assert_eq!(cloned.body.map(|b| b.mass), Some(3.0));
}

#[test]
fn test_command_labels() {
    assert_eq!(
        PainterCommand::MoveInstances { moves: vec![] }.label(),
        "apply transforms"
    );
    assert_eq!(
        PainterCommand::RemoveInstances {
            container: container(),
            items: vec![]
        }
        .label(),
        "remove instances"
    );
}

fn live_from(instances: &[InstanceData]) -> impl FnMut(PaintId) -> Option<InstanceData> + '_ {
    move |id| instances.iter().find(|item| item.id == id).cloned()
}

#[test]
fn test_place_inverse_removes_live_instances() {
    let container = container();
    let placed = PainterCommand::PlaceInstances {
        container,
        items: vec![instance(1), instance(2)],
    };

    // Instance 2 is already gone
    let live = [instance(1)];
    let inverse = placed.inverse(live_from(&live));

    assert_eq!(
        inverse,
        Some(PainterCommand::RemoveInstances {
            container,
            items: vec![instance(1)],
        })
    );
}

#[test]
fn test_place_inverse_keeps_body_added_after_painting() {
    let container = container();
    let placed = PainterCommand::PlaceInstances {
        container,
        items: vec![instance(1)],
    };

    let mut with_body = instance(1);
    with_body.body = Some(PaintedBody {
        mass: 2.0,
        use_gravity: true,
    });
    let live = [with_body.clone()];

    // Undo the paint, then redo it
    let removal = placed.inverse(live_from(&live)).unwrap();
    let replaced = removal.inverse(live_from(&[])).unwrap();

    match replaced {
        PainterCommand::PlaceInstances { items, .. } => assert_eq!(items, vec![with_body]),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_place_remove_place_round_trip() {
    let container = container();
    let items = vec![instance(1), instance(2)];
    let placed = PainterCommand::PlaceInstances {
        container,
        items: items.clone(),
    };

    let removal = placed.inverse(live_from(&items)).unwrap();
    assert_eq!(removal.label(), "remove instances");

    // After the removal nothing is live, the stored items are respawned as-is
    let replaced = removal.inverse(live_from(&[])).unwrap();
    assert_eq!(replaced, placed);
}

#[test]
fn test_place_inverse_with_nothing_live_is_none() {
    let placed = PainterCommand::PlaceInstances {
        container: container(),
        items: vec![instance(1)],
    };
    assert!(placed.inverse(live_from(&[])).is_none());
}

#[test]
fn test_move_inverse_swaps_transforms() {
    let a = TransformData::from(&Transform::from_xyz(1.0, 0.0, 0.0));
    let b = TransformData::from(&Transform::from_xyz(0.0, 0.0, 4.0));
    let moved = PainterCommand::MoveInstances {
        moves: vec![(PaintId(1), a, b), (PaintId(2), b, a)],
    };

    let live = [instance(1)];
    let inverse = moved.inverse(live_from(&live));

    assert_eq!(
        inverse,
        Some(PainterCommand::MoveInstances {
            moves: vec![(PaintId(1), b, a)],
        })
    );

    // Inverting twice gives back the original moves of live instances
    let twice = inverse.unwrap().inverse(live_from(&live)).unwrap();
    assert_eq!(
        twice,
        PainterCommand::MoveInstances {
            moves: vec![(PaintId(1), a, b)],
        }
    );
}

#[test]
fn test_move_inverse_with_no_live_instance_is_none() {
    let a = TransformData::from(&Transform::default());
    let moved = PainterCommand::MoveInstances {
        moves: vec![(PaintId(5), a, a)],
    };
    assert!(moved.inverse(live_from(&[])).is_none());
}

#[test]
fn test_empty_remove_has_no_inverse() {
    let removed = PainterCommand::RemoveInstances {
        container: container(),
        items: vec![],
    };
    assert!(removed.inverse(live_from(&[])).is_none());
}

//! Bevy systems for undo/redo shortcuts and panel buttons.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::super::messages::{RedoRequest, UndoRequest};
use super::command_history::CommandHistory;
use super::execute::{HistoryContext, execute_inverse};

fn typing_in_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false)
}

/// System to handle undo (Ctrl+Z or the panel button)
pub fn handle_undo(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: MessageReader<UndoRequest>,
    mut history: ResMut<CommandHistory>,
    mut ctx: HistoryContext,
    mut contexts: EguiContexts,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    // Ctrl+Z (without shift) = undo
    let shortcut = ctrl && !shift && keyboard.just_pressed(KeyCode::KeyZ) && !typing_in_ui(&mut contexts);
    let requested = requests.read().count() > 0;

    if (shortcut || requested)
        && let Some(command) = history.pop_undo()
    {
        debug!("Undo {}", command.label());
        if let Some(reverse) = execute_inverse(&command, &mut ctx) {
            history.push_redo(reverse);
        }
    }
}

/// System to handle redo (Ctrl+Y, Ctrl+Shift+Z or the panel button)
pub fn handle_redo(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: MessageReader<RedoRequest>,
    mut history: ResMut<CommandHistory>,
    mut ctx: HistoryContext,
    mut contexts: EguiContexts,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    // Ctrl+Y or Ctrl+Shift+Z = redo
    let shortcut = ((ctrl && keyboard.just_pressed(KeyCode::KeyY))
        || (ctrl && shift && keyboard.just_pressed(KeyCode::KeyZ)))
        && !typing_in_ui(&mut contexts);
    let requested = requests.read().count() > 0;

    if (shortcut || requested)
        && let Some(command) = history.pop_redo()
    {
        debug!("Redo {}", command.label());
        if let Some(reverse) = execute_inverse(&command, &mut ctx) {
            history.push_undo(reverse);
        }
    }
}

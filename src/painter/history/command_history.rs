//! Command history resource for tracking undo/redo state.

use bevy::prelude::*;

use super::MAX_HISTORY_SIZE;
use super::commands::PainterCommand;

/// Resource tracking command history for undo/redo
#[derive(Resource, Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone (most recent last)
    undo_stack: Vec<PainterCommand>,
    /// Stack of inverse commands that can be redone (most recent last)
    redo_stack: Vec<PainterCommand>,
}

impl CommandHistory {
    /// Push a new command to the history
    pub fn push(&mut self, command: PainterCommand) {
        // Clear redo stack when a new action is performed
        self.redo_stack.clear();
        self.push_undo(command);
    }

    /// Pop the last command for undo
    pub fn pop_undo(&mut self) -> Option<PainterCommand> {
        self.undo_stack.pop()
    }

    /// Pop the last command for redo
    pub fn pop_redo(&mut self) -> Option<PainterCommand> {
        self.redo_stack.pop()
    }

    /// Push a command to the redo stack (used after undo)
    pub fn push_redo(&mut self, command: PainterCommand) {
        self.redo_stack.push(command);
    }

    /// Push a command to the undo stack without touching redo (used after redo)
    pub fn push_undo(&mut self, command: PainterCommand) {
        self.undo_stack.push(command);

        // Trim history if it exceeds max size
        if self.undo_stack.len() > MAX_HISTORY_SIZE {
            let excess = self.undo_stack.len() - MAX_HISTORY_SIZE;
            self.undo_stack.drain(..excess);
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

//! Undo/Redo for painter actions.
//!
//! Every reversible painter operation is recorded as a [`PainterCommand`].
//! Undoing a command applies its inverse and moves that inverse to the redo
//! stack; redoing does the same in the other direction.
//!
//! ## Usage
//!
//! - **Ctrl+Z**: Undo the last action
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo the last undone action
//!
//! ## Supported Operations
//!
//! - Painting an instance
//! - Removing all container children
//! - Applying copied transforms
//!
//! ## Module Structure
//!
//! - [`commands`] - PainterCommand enum defining all reversible operations
//! - [`data_types`] - Instance and transform data kept by commands
//! - [`command_history`] - CommandHistory resource for tracking state
//! - [`execute`] - Applying a command's inverse
//! - [`spawn_helpers`] - Spawning painted instances
//! - [`systems`] - Bevy systems for shortcuts and panel buttons

mod command_history;
mod commands;
mod data_types;
mod execute;
mod spawn_helpers;
mod systems;

#[cfg(test)]
mod tests;

// Re-exports
pub use command_history::CommandHistory;
pub use commands::PainterCommand;
pub use data_types::{InstanceData, TransformData};
pub use spawn_helpers::spawn_instance;
pub use systems::{handle_redo, handle_undo};

/// Maximum number of commands to keep in history
pub(crate) const MAX_HISTORY_SIZE: usize = 100;

//! Requests sent from the inspector panel to the painter systems.

use bevy::prelude::*;

/// Add a physics body to every painted instance that lacks one
#[derive(Message)]
pub struct AddBodiesRequest;

/// Remove the physics body from every painted instance
#[derive(Message)]
pub struct RemoveBodiesRequest;

/// Snapshot the transforms of all painted instances
#[derive(Message)]
pub struct CopyTransformsRequest;

/// Restore the transforms captured by the last copy
#[derive(Message)]
pub struct ApplyTransformsRequest;

/// Despawn every child of the active container
#[derive(Message)]
pub struct ClearContainerRequest;

#[derive(Message)]
pub struct UndoRequest;

#[derive(Message)]
pub struct RedoRequest;

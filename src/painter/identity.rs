use bevy::prelude::*;

/// Stable identity of a painted instance, assigned when it is placed.
///
/// Unlike `Entity`, the id survives undo/redo respawns, so transform
/// snapshots taken before an undo still find the instance afterwards.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaintId(pub u64);

impl std::fmt::Display for PaintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out session-unique ids. Ids are never reused, even after despawn.
#[derive(Debug, Default)]
pub struct PaintIdAllocator {
    last: u64,
}

impl PaintIdAllocator {
    pub fn next(&mut self) -> PaintId {
        self.last += 1;
        PaintId(self.last)
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.last
    }
}

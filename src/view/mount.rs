//! Mount targets: the region a view renders into.

use crate::view::{Rendered, ViewId};

/// Receives the output of each render pass.
pub trait MountTarget: Send {
    /// Replace the mounted content.
    fn mount(&mut self, view: &ViewId, rendered: Rendered);

    /// The view currently mounted, if any.
    fn current(&self) -> Option<&ViewId>;
}

/// In-memory mount region used headlessly.
#[derive(Debug, Default)]
pub struct MemoryMount {
    current: Option<(ViewId, Rendered)>,
    mounts: u64,
}

impl MemoryMount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> Option<&Rendered> {
        self.current.as_ref().map(|(_, rendered)| rendered)
    }

    /// Number of mounts since creation.
    pub fn mount_count(&self) -> u64 {
        self.mounts
    }
}

impl MountTarget for MemoryMount {
    fn mount(&mut self, view: &ViewId, rendered: Rendered) {
        self.current = Some((view.clone(), rendered));
        self.mounts += 1;
    }

    fn current(&self) -> Option<&ViewId> {
        self.current.as_ref().map(|(id, _)| id)
    }
}

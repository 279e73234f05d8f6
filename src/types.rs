//! Domain types for type safety and clarity

use std::fmt;
use std::path::{Path, PathBuf};

/// Reference to one gallery image, relative to the asset root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(&'static str);

impl ImageRef {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub fn path(self) -> &'static str {
        self.0
    }

    /// Build a `file://` URI the egui image loaders understand
    pub fn uri(self, asset_root: &Path) -> String {
        let full: PathBuf = asset_root.join(self.0);
        format!("file://{}", full.display())
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Auto-advance state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

impl RunState {
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }

    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }
}

/// What the renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub current_image: ImageRef,
    pub index: usize,
    pub running: bool,
}

/// User interaction raised by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    ToggleRun,
    Next,
    Previous,
}

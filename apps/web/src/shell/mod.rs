//! Shell: the session-wide workspace. Owns the single `ResumeData` instance
//! shared by the editor and the scanner, plus the active view.

pub mod handlers;
pub mod render;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::editor::EditorState;
use crate::models::ResumeData;
use crate::scanner::ScannerState;

/// Shared handle held in `AppState`. Never hold the guard across an AI call.
pub type SharedWorkspace = Arc<RwLock<Workspace>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Builder,
    Scanner,
}

#[derive(Debug, Default)]
pub struct Workspace {
    pub resume: ResumeData,
    pub mode: ViewMode,
    pub editor: EditorState,
    pub scanner: ScannerState,
}

impl Workspace {
    pub fn shared() -> SharedWorkspace {
        Arc::new(RwLock::new(Workspace::default()))
    }

    /// The editor's update callback: the new record replaces the old wholesale.
    pub fn replace_resume(&mut self, next: ResumeData) -> &ResumeData {
        self.resume = next;
        &self.resume
    }

    /// Switching views never touches resume data.
    pub fn switch_mode(&mut self, mode: ViewMode) {
        if self.mode != mode {
            debug!("Switching view: {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }
}

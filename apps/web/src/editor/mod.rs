// Resume Editor: pure edit operations, the summary enhancement action and the
// form projection rendered into the builder view.

pub mod enhance;
pub mod handlers;
pub mod operations;
pub mod render;

/// Per-view editor state. Only the enhancement busy flag lives here; the
/// resume itself belongs to the workspace.
#[derive(Debug, Default)]
pub struct EditorState {
    enhancing: bool,
}

impl EditorState {
    pub fn is_enhancing(&self) -> bool {
        self.enhancing
    }

    /// Check-and-set of the busy flag. Returns false if already enhancing.
    pub fn try_begin_enhance(&mut self) -> bool {
        if self.enhancing {
            return false;
        }
        self.enhancing = true;
        true
    }

    pub fn finish_enhance(&mut self) {
        self.enhancing = false;
    }
}

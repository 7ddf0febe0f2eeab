//! Undo/redo functionality

use super::EditorController;

impl EditorController {
    /// Undo last change. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.parts = snapshot.clone();
        self.after_history_step();
        true
    }

    /// Redo last undone change. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.parts = snapshot.clone();
        self.after_history_step();
        true
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn after_history_step(&mut self) {
        // the restored snapshot may not contain the selected part
        self.selection.clear();
        self.gesture = None;
        self.publish();
    }
}

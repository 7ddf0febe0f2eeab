//! Transform edits and the two-phase drag commit

use shared::{PartId, PartPatch};

use super::EditorController;
use crate::state::UpdateOutcome;

impl EditorController {
    /// Patch a part in place without touching history.
    ///
    /// Missing ids are reported as [`UpdateOutcome::NotFound`], never an error:
    /// a drag tick can race a delete.
    pub fn update_part(&mut self, id: &str, patch: &PartPatch) -> UpdateOutcome {
        let outcome = self.parts.update(id, patch);
        match outcome {
            UpdateOutcome::Updated => self.publish(),
            UpdateOutcome::NotFound => tracing::debug!("update_part: no part {id}"),
        }
        outcome
    }

    /// Start a drag on `id`. No history entry until [`end_gesture`](Self::end_gesture).
    pub fn begin_gesture(&mut self, id: PartId) {
        tracing::debug!("Gesture started on {id}");
        self.gesture = Some(id);
    }

    /// Per-tick update while dragging
    pub fn update_part_live(&mut self, id: &str, patch: &PartPatch) -> UpdateOutcome {
        self.update_part(id, patch)
    }

    /// Finish the drag and record it as one undo step
    pub fn end_gesture(&mut self) -> bool {
        if let Some(id) = self.gesture.take() {
            tracing::debug!("Gesture ended on {id}");
        }
        self.commit_history()
    }

    /// Push the current parts as a history entry.
    ///
    /// Does nothing (and returns `false`) if the parts equal the snapshot
    /// under the cursor.
    pub fn commit_history(&mut self) -> bool {
        if self.history.current() == Some(&self.parts) {
            return false;
        }
        self.history.push(&self.parts);
        self.publish();
        true
    }
}

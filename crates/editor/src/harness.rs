//! Headless test harness for programmatic editor manipulation.
//!
//! Pairs an [`EditorController`] with an in-memory project store and adds
//! short helpers for tests and scripted sessions.

use shared::{Part, PartPatch, PartType, ProjectDocument, Vec3, Vec3Patch};

use crate::command::{execute_json, execute_json_batch, CommandResponse};
use crate::controller::EditorController;
use crate::error::Result;
use crate::persistence::InMemoryProjectStore;
use crate::state::EditorSettings;

/// Headless test harness: editor plus project store
pub struct TestHarness {
    pub editor: EditorController,
    pub store: InMemoryProjectStore,
}

impl TestHarness {
    /// Create a new empty harness.
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            editor: EditorController::new(settings),
            store: InMemoryProjectStore::new(),
        }
    }

    // ── Part manipulation ─────────────────────────────────────

    /// Add a part and return its ID
    pub fn add(&mut self, part_type: PartType) -> String {
        self.editor
            .add_part(part_type)
            .expect("fresh part ids never collide")
    }

    /// Add a gear and return its ID
    pub fn add_gear(&mut self) -> String {
        self.add(PartType::Gear)
    }

    /// Move a part with a discrete edit (no history entry)
    pub fn move_to(&mut self, id: &str, position: Vec3) {
        self.editor
            .update_part(id, &PartPatch::position(Vec3Patch::all(position)));
    }

    /// Simulate a drag: begin, `ticks` live updates ending at `target`, end
    pub fn drag_to(&mut self, id: &str, target: Vec3, ticks: usize) {
        let start = self.part(id).position;
        self.editor.begin_gesture(id.to_string());
        let ticks = ticks.max(1);
        for i in 1..=ticks {
            let t = i as f64 / ticks as f64;
            let p = Vec3::new(
                start.x + (target.x - start.x) * t,
                start.y + (target.y - start.y) * t,
                start.z + (target.z - start.z) * t,
            );
            self.editor
                .update_part_live(id, &PartPatch::position(Vec3Patch::all(p)));
        }
        self.editor.end_gesture();
    }

    /// Delete a part by ID
    pub fn delete(&mut self, id: &str) -> bool {
        self.editor.delete_part(id)
    }

    /// Undo the last operation
    pub fn undo(&mut self) -> bool {
        self.editor.undo()
    }

    /// Redo the last undone operation
    pub fn redo(&mut self) -> bool {
        self.editor.redo()
    }

    // ── Projects ──────────────────────────────────────────────

    pub async fn save(&mut self, name: &str, description: &str) -> Result<ProjectDocument> {
        self.editor.save_project(&self.store, name, description).await
    }

    pub async fn open(&mut self, id: &str) -> Result<()> {
        self.editor.open_project(&self.store, id).await
    }

    /// Execute one JSON command
    pub async fn run_json(&mut self, json: &str) -> std::result::Result<CommandResponse, String> {
        execute_json(&mut self.editor, &self.store, json).await
    }

    /// Execute a JSON array of commands
    pub async fn run_json_batch(
        &mut self,
        json: &str,
    ) -> std::result::Result<Vec<CommandResponse>, String> {
        execute_json_batch(&mut self.editor, &self.store, json).await
    }

    // ── Inspection ────────────────────────────────────────────

    /// Number of parts
    pub fn part_count(&self) -> usize {
        self.editor.parts().len()
    }

    /// Part by ID; panics if missing
    pub fn part(&self, id: &str) -> &Part {
        self.editor
            .part(id)
            .unwrap_or_else(|| panic!("no part with id {id}"))
    }

    /// Part names in display order
    pub fn names(&self) -> Vec<String> {
        self.editor.parts().iter().map(|p| p.name.clone()).collect()
    }

    /// Number of history entries
    pub fn history_len(&self) -> usize {
        self.editor.history().len()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_harness_empty() {
        let h = TestHarness::new();
        assert_eq!(h.part_count(), 0);
        assert_eq!(h.history_len(), 1);
    }

    #[test]
    fn test_names_in_order() {
        let mut h = TestHarness::new();
        h.add_gear();
        h.add(PartType::Shaft);
        h.add_gear();
        assert_eq!(h.names(), vec!["Gear 1", "Shaft 1", "Gear 2"]);
    }

    #[test]
    fn test_drag_is_one_undo_step() {
        let mut h = TestHarness::new();
        let id = h.add_gear();
        let len = h.history_len();
        h.drag_to(&id, Vec3::new(3.0, 0.0, -1.0), 30);
        assert_eq!(h.history_len(), len + 1);
        assert_eq!(h.part(&id).position, Vec3::new(3.0, 0.0, -1.0));
        assert!(h.undo());
        assert_eq!(h.part(&id).position, Vec3::ZERO);
    }
}

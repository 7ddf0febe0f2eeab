//! Structural part commands: add, delete, duplicate, select

use shared::{PartId, PartType};

use super::EditorController;
use crate::error::{EditorError, Result};
use crate::state::factory;

impl EditorController {
    /// Add a new part of `part_type` at the origin and select it
    pub fn add_part(&mut self, part_type: PartType) -> Result<PartId> {
        let part = factory::create_part(part_type, &self.parts);
        let id = part.id.clone();
        self.parts.add(part)?;
        self.selection.select(Some(id.clone()));
        self.commit_structural();
        tracing::debug!("Added {} part {}", part_type, id);
        Ok(id)
    }

    /// Add a part from its type tag (`"gear"`, `"lead-screw"`, ...)
    pub fn add_part_tag(&mut self, tag: &str) -> Result<PartId> {
        let part_type: PartType = tag.parse().map_err(|e| {
            tracing::warn!("Rejected add_part: {e}");
            EditorError::from(e)
        })?;
        self.add_part(part_type)
    }

    /// Delete a part. Returns `false` (and changes nothing) if the id is unknown.
    pub fn delete_part(&mut self, id: &str) -> bool {
        if self.parts.remove(id).is_none() {
            tracing::debug!("delete_part: no part {id}");
            return false;
        }
        self.selection.on_part_removed(id);
        self.commit_structural();
        tracing::debug!("Deleted part {id}");
        true
    }

    /// Duplicate a part next to the original and select the copy
    pub fn duplicate_part(&mut self, id: &str) -> Result<PartId> {
        let source = self
            .parts
            .get(id)
            .ok_or_else(|| EditorError::PartNotFound(id.to_string()))?;
        let copy = factory::duplicate_part_with_offset(source, self.settings.duplicate_offset);
        let copy_id = copy.id.clone();
        self.parts.add(copy)?;
        self.selection.select(Some(copy_id.clone()));
        self.commit_structural();
        tracing::debug!("Duplicated part {id} as {copy_id}");
        Ok(copy_id)
    }

    /// Select a part, or clear the selection with `None`
    pub fn select_part(&mut self, id: Option<PartId>) {
        self.selection.select(id);
        self.publish();
    }

    /// Push history for a structural edit and publish
    fn commit_structural(&mut self) {
        self.gesture = None;
        self.history.push(&self.parts);
        self.publish();
    }
}

//! View state handed to the presentation layer, plus display helpers

use serde::Serialize;
use shared::{Part, PartId, ProjectId};

/// Everything needed to render the editor after a command
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    pub parts: Vec<Part>,
    pub selected: Option<PartId>,
    pub can_undo: bool,
    pub can_redo: bool,
    pub project_id: Option<ProjectId>,
    pub project_name: String,
    pub project_description: String,
    pub version: u64,
}

/// Get display name for a part in the parts list
pub fn part_display_name(part: &Part) -> String {
    format!("{} ({})", part.name, short_id(&part.id))
}

/// Get shortened ID (first 8 characters)
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

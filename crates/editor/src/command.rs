//! JSON command protocol.
//!
//! Lets scripts and external front ends drive the editor with commands such
//! as `{"command": "add_part", "part_type": "gear"}`.

use serde::{Deserialize, Serialize};
use shared::{PartPatch, ProjectDocument};

use crate::controller::EditorController;
use crate::error::EditorError;
use crate::persistence::ProjectStore;
use crate::state::UpdateOutcome;

/// A command the editor can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Add a part by type tag
    AddPart { part_type: String },
    /// Patch a part in place (no history entry)
    UpdatePart { id: String, patch: PartPatch },
    /// Delete a part by ID
    DeletePart { id: String },
    /// Duplicate a part by ID
    DuplicatePart { id: String },
    /// Select a part, or clear selection when `id` is omitted
    SelectPart {
        #[serde(default)]
        id: Option<String>,
    },
    /// Start a drag gesture on a part
    BeginGesture { id: String },
    /// Finish the current gesture with one history entry
    EndGesture,
    /// Record the current parts as a history entry
    CommitHistory,
    /// Undo the last operation.
    Undo,
    /// Redo the last undone operation.
    Redo,
    /// Start an empty project.
    NewProject,
    /// Replace the editor state with a project document
    LoadProject { project: ProjectDocument },
    /// Save to the project store
    SaveProject {
        name: String,
        #[serde(default)]
        description: String,
    },
    /// List stored projects
    ListProjects,
    /// Load a stored project by ID
    OpenProject { id: String },
    /// Delete a stored project by ID
    DeleteProject { id: String },
    /// Export `{name, parts}`
    ExportProject,
    /// Inspect the editor: list all parts.
    Inspect,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(err: EditorError) -> Self {
        Self {
            success: false,
            error: Some(err.to_string()),
            data: None,
        }
    }
}

fn respond<T>(result: Result<T, EditorError>, data: impl FnOnce(T) -> serde_json::Value) -> CommandResponse {
    match result {
        Ok(value) => CommandResponse::ok_with_data(data(value)),
        Err(e) => {
            tracing::warn!("Command failed: {e}");
            CommandResponse::err(e)
        }
    }
}

/// Execute a single command on the editor.
pub async fn execute_command<S: ProjectStore>(
    editor: &mut EditorController,
    store: &S,
    cmd: EditorCommand,
) -> CommandResponse {
    tracing::debug!("Executing {:?}", cmd);
    match cmd {
        EditorCommand::AddPart { part_type } => {
            respond(editor.add_part_tag(&part_type), |id| serde_json::json!({ "id": id }))
        }

        EditorCommand::UpdatePart { id, patch } => {
            let updated = editor.update_part(&id, &patch) == UpdateOutcome::Updated;
            CommandResponse::ok_with_data(serde_json::json!({ "updated": updated }))
        }

        EditorCommand::DeletePart { id } => {
            let removed = editor.delete_part(&id);
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        EditorCommand::DuplicatePart { id } => {
            respond(editor.duplicate_part(&id), |id| serde_json::json!({ "id": id }))
        }

        EditorCommand::SelectPart { id } => {
            editor.select_part(id.clone());
            CommandResponse::ok_with_data(serde_json::json!({ "selected": id }))
        }

        EditorCommand::BeginGesture { id } => {
            editor.begin_gesture(id);
            CommandResponse::ok()
        }

        EditorCommand::EndGesture => {
            let committed = editor.end_gesture();
            CommandResponse::ok_with_data(serde_json::json!({ "committed": committed }))
        }

        EditorCommand::CommitHistory => {
            let committed = editor.commit_history();
            CommandResponse::ok_with_data(serde_json::json!({ "committed": committed }))
        }

        EditorCommand::Undo => {
            let success = editor.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        EditorCommand::Redo => {
            let success = editor.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        EditorCommand::NewProject => {
            editor.new_project();
            CommandResponse::ok()
        }

        EditorCommand::LoadProject { project } => {
            respond(editor.load_project(project), |_| {
                serde_json::json!({ "part_count": editor.parts().len() })
            })
        }

        EditorCommand::SaveProject { name, description } => respond(
            editor.save_project(store, &name, &description).await,
            |saved| serde_json::json!({ "id": saved.id, "name": saved.name }),
        ),

        EditorCommand::ListProjects => respond(editor.list_projects(store).await, |projects| {
            let projects: Vec<serde_json::Value> = projects
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "id": p.id,
                        "name": p.name,
                        "part_count": p.parts.len(),
                        "updated_date": p.updated_date,
                    })
                })
                .collect();
            serde_json::json!({ "projects": projects })
        }),

        EditorCommand::OpenProject { id } => {
            respond(editor.open_project(store, &id).await, |_| {
                serde_json::json!({ "part_count": editor.parts().len() })
            })
        }

        EditorCommand::DeleteProject { id } => respond(
            editor.delete_stored_project(store, &id).await,
            |_| serde_json::json!({ "deleted": id }),
        ),

        EditorCommand::ExportProject => respond(editor.export_project(), |export| {
            serde_json::to_value(&export).unwrap_or_default()
        }),

        EditorCommand::Inspect => {
            let parts: Vec<serde_json::Value> = editor
                .parts()
                .iter()
                .map(|part| {
                    serde_json::json!({
                        "id": part.id,
                        "type": part.part_type,
                        "name": part.name,
                        "position": part.position,
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "part_count": parts.len(),
                "parts": parts,
                "selected": editor.selected(),
                "can_undo": editor.can_undo(),
                "can_redo": editor.can_redo(),
                "project_name": editor.project_name(),
            }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub async fn execute_json<S: ProjectStore>(
    editor: &mut EditorController,
    store: &S,
    json: &str,
) -> Result<CommandResponse, String> {
    let cmd: EditorCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(editor, store, cmd).await)
}

/// Parse and execute multiple JSON commands (array).
pub async fn execute_json_batch<S: ProjectStore>(
    editor: &mut EditorController,
    store: &S,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<EditorCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    let mut responses = Vec::with_capacity(cmds.len());
    for cmd in cmds {
        responses.push(execute_command(editor, store, cmd).await);
    }
    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::InMemoryProjectStore;

    #[test]
    fn test_command_serde_undo() {
        let json = r#"{"command": "undo"}"#;
        let cmd: EditorCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(cmd, EditorCommand::Undo));
    }

    #[test]
    fn test_command_serde_update_part() {
        let json = r#"{"command": "update_part", "id": "p1", "patch": {"scale": {"x": 0.05}}}"#;
        let cmd: EditorCommand = serde_json::from_str(json).unwrap();
        match cmd {
            EditorCommand::UpdatePart { id, patch } => {
                assert_eq!(id, "p1");
                assert_eq!(patch.scale.unwrap().x, Some(0.05));
            }
            _ => panic!("Expected UpdatePart"),
        }
    }

    #[test]
    fn test_command_serde_select_none() {
        let cmd: EditorCommand = serde_json::from_str(r#"{"command": "select_part"}"#).unwrap();
        assert!(matches!(cmd, EditorCommand::SelectPart { id: None }));
    }

    #[tokio::test]
    async fn test_execute_add_part() {
        let mut editor = EditorController::default();
        let store = InMemoryProjectStore::new();
        let resp = execute_json(
            &mut editor,
            &store,
            r#"{"command": "add_part", "part_type": "gear"}"#,
        )
        .await
        .unwrap();
        assert!(resp.success);
        assert!(resp.data.unwrap()["id"].as_str().is_some());
        assert_eq!(editor.parts().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_add_unknown_part() {
        let mut editor = EditorController::default();
        let store = InMemoryProjectStore::new();
        let resp = execute_json(
            &mut editor,
            &store,
            r#"{"command": "add_part", "part_type": "teleporter"}"#,
        )
        .await
        .unwrap();
        assert!(!resp.success);
        assert!(resp.error.unwrap().contains("invalid part type"));
    }

    #[tokio::test]
    async fn test_execute_invalid_json() {
        let mut editor = EditorController::default();
        let store = InMemoryProjectStore::new();
        let result = execute_json(&mut editor, &store, "not valid json").await;
        assert!(result.is_err());
    }
}

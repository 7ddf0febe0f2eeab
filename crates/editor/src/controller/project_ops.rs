//! Project lifecycle: new, load, save, export

use shared::{ExportDocument, ProjectDocument};

use super::EditorController;
use crate::error::{EditorError, Result};
use crate::persistence::ProjectStore;
use crate::state::PartCollection;

impl EditorController {
    /// Start an empty, unsaved project
    pub fn new_project(&mut self) {
        self.parts = PartCollection::new();
        self.selection.clear();
        self.history.reset(PartCollection::new());
        self.project_name = self.settings.default_project_name.clone();
        self.project_description.clear();
        self.project_id = None;
        self.gesture = None;
        self.publish();
        tracing::info!("New project");
    }

    /// Replace all editor state with a loaded document.
    ///
    /// Fails without touching state if the document repeats a part id.
    pub fn load_project(&mut self, doc: ProjectDocument) -> Result<()> {
        let parts = PartCollection::from_parts(doc.parts)?;
        self.history.reset(parts.clone());
        self.parts = parts;
        self.selection.clear();
        self.project_id = doc.id;
        self.project_name = doc.name;
        self.project_description = doc.description.unwrap_or_default();
        self.gesture = None;
        self.publish();
        tracing::info!(
            "Loaded project '{}' ({} parts)",
            self.project_name,
            self.parts.len()
        );
        Ok(())
    }

    /// Document for the current state, bound to the current project id
    pub fn to_document(&self) -> ProjectDocument {
        ProjectDocument {
            id: self.project_id.clone(),
            name: self.project_name.clone(),
            description: Some(self.project_description.clone()),
            parts: self.parts.to_vec(),
            updated_date: None,
        }
    }

    /// Save under `name`: creates a stored project the first time, updates it afterwards.
    ///
    /// The store result is applied only after it resolves; on failure the
    /// editor state is left exactly as it was.
    pub async fn save_project<S: ProjectStore>(
        &mut self,
        store: &S,
        name: &str,
        description: &str,
    ) -> Result<ProjectDocument> {
        if name.trim().is_empty() {
            tracing::warn!("Rejected save: empty project name");
            return Err(EditorError::Validation(
                "project name must not be empty".to_string(),
            ));
        }

        let doc = ProjectDocument::new(name, description, self.parts.to_vec());
        let saved = match self.project_id.clone() {
            Some(id) => {
                store.update(&id, doc.clone()).await.map_err(|e| {
                    tracing::warn!("Failed to update project {id}: {e}");
                    e
                })?;
                ProjectDocument {
                    id: Some(id),
                    ..doc
                }
            }
            None => store.create(doc).await.map_err(|e| {
                tracing::warn!("Failed to create project: {e}");
                e
            })?,
        };

        self.project_id = saved.id.clone();
        self.project_name = saved.name.clone();
        self.project_description = saved.description.clone().unwrap_or_default();
        self.publish();
        tracing::info!("Saved project '{}'", self.project_name);
        Ok(saved)
    }

    /// Fetch a stored project and load it
    pub async fn open_project<S: ProjectStore>(&mut self, store: &S, id: &str) -> Result<()> {
        let doc = store.get(id).await.map_err(|e| {
            tracing::warn!("Failed to open project {id}: {e}");
            e
        })?;
        self.load_project(doc)
    }

    /// List stored projects, newest first
    pub async fn list_projects<S: ProjectStore>(&self, store: &S) -> Result<Vec<ProjectDocument>> {
        store.list().await
    }

    /// Delete a stored project. Deleting the open project unbinds it, so the
    /// next save creates a new document.
    pub async fn delete_stored_project<S: ProjectStore>(
        &mut self,
        store: &S,
        id: &str,
    ) -> Result<()> {
        store.delete(id).await?;
        if self.project_id.as_deref() == Some(id) {
            self.project_id = None;
            self.publish();
        }
        tracing::info!("Deleted stored project {id}");
        Ok(())
    }

    /// `{name, parts}` export of the current project
    pub fn export_project(&self) -> Result<ExportDocument> {
        for part in &self.parts {
            if let Some(field) = part.non_finite_field() {
                return Err(EditorError::NonFinite {
                    part_id: part.id.clone(),
                    field,
                });
            }
        }
        Ok(ExportDocument {
            name: self.project_name.clone(),
            parts: self.parts.to_vec(),
        })
    }

    /// Export serialized as pretty JSON
    pub fn export_project_json(&self) -> Result<String> {
        let export = self.export_project()?;
        Ok(serde_json::to_string_pretty(&export)?)
    }

    /// Download file name: whitespace runs become `_`
    pub fn export_file_name(&self) -> String {
        let stem = self
            .project_name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!("{stem}.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::InMemoryProjectStore;
    use shared::{PartPatch, PartType, Vec3Patch};

    #[test]
    fn test_new_project_resets() {
        let mut c = EditorController::default();
        c.add_part(PartType::Gear).unwrap();
        c.project_id = Some("p1".to_string());
        c.project_name = "Old".to_string();

        c.new_project();
        assert!(c.parts().is_empty());
        assert!(c.selected().is_none());
        assert!(c.project_id().is_none());
        assert_eq!(c.project_name(), "Untitled Project");
        assert_eq!(c.project_description(), "");
        assert_eq!(c.history().len(), 1);
        assert!(c.history().current().unwrap().is_empty());
    }

    #[test]
    fn test_export_shape() {
        let mut c = EditorController::default();
        c.add_part(PartType::Gear).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&c.export_project_json().unwrap()).unwrap();
        assert_eq!(json["name"], "Untitled Project");
        assert_eq!(json["parts"][0]["type"], "gear");
        assert_eq!(json["parts"][0]["name"], "Gear 1");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_export_rejects_non_finite() {
        let mut c = EditorController::default();
        let id = c.add_part(PartType::Gear).unwrap();
        c.update_part(&id, &PartPatch::position(Vec3Patch::x(f64::INFINITY)));
        let err = c.export_project().unwrap_err();
        assert!(matches!(err, EditorError::NonFinite { field: "position", .. }));
    }

    #[test]
    fn test_export_file_name() {
        let mut c = EditorController::default();
        assert_eq!(c.export_file_name(), "Untitled_Project.json");
        c.project_name = "Robot  arm v2".to_string();
        assert_eq!(c.export_file_name(), "Robot_arm_v2.json");
    }

    #[tokio::test]
    async fn test_first_save_creates_then_updates() {
        let store = InMemoryProjectStore::new();
        let mut c = EditorController::default();
        c.add_part(PartType::Gear).unwrap();

        let saved = c.save_project(&store, "Gearbox", "demo").await.unwrap();
        let id = saved.id.clone().unwrap();
        assert_eq!(c.project_id(), Some(&id));
        assert_eq!(c.project_name(), "Gearbox");

        c.add_part(PartType::Shaft).unwrap();
        let again = c.save_project(&store, "Gearbox", "demo").await.unwrap();
        assert_eq!(again.id.as_deref(), Some(id.as_str()));

        let stored = store.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].parts.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_name_rejected_without_store_call() {
        let store = InMemoryProjectStore::new();
        let mut c = EditorController::default();
        let err = c.save_project(&store, "   ", "desc").await.unwrap_err();
        assert!(matches!(err, EditorError::Validation(_)));
        assert_eq!(store.calls(), 0);
        assert!(c.project_id().is_none());
    }

    #[tokio::test]
    async fn test_failed_save_leaves_state() {
        let store = InMemoryProjectStore::new();
        store.set_offline(true);
        let mut c = EditorController::default();
        c.add_part(PartType::Gear).unwrap();
        let before = c.view_state();

        let err = c.save_project(&store, "Gearbox", "").await.unwrap_err();
        assert!(matches!(err, EditorError::Persistence(_)));
        assert_eq!(c.view_state(), before);
    }

    #[tokio::test]
    async fn test_delete_bound_project_unbinds() {
        let store = InMemoryProjectStore::new();
        let mut c = EditorController::default();
        let saved = c.save_project(&store, "Rig", "").await.unwrap();
        c.delete_stored_project(&store, saved.id.as_deref().unwrap())
            .await
            .unwrap();
        assert!(c.project_id().is_none());
    }
}

use std::path::{Path, PathBuf};

use chrono::Utc;
use shared::ProjectDocument;

use super::{sort_by_updated_desc, ProjectStore};
use crate::error::{EditorError, Result};

/// One pretty-printed JSON file per project (`<id>.json`) in a directory
#[derive(Debug, Clone)]
pub struct FileProjectStore {
    dir: PathBuf,
}

impl FileProjectStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Result<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(EditorError::persistence(format!("invalid project id: {id}")));
        }
        Ok(self.dir.join(format!("{id}.json")))
    }

    async fn write(&self, path: &Path, doc: &ProjectDocument) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string_pretty(doc)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    async fn read(path: &Path) -> Result<ProjectDocument> {
        let json = tokio::fs::read_to_string(path).await?;
        serde_json::from_str(&json)
            .map_err(|e| EditorError::persistence(format!("{}: {e}", path.display())))
    }
}

impl ProjectStore for FileProjectStore {
    async fn list(&self) -> Result<Vec<ProjectDocument>> {
        let mut projects = Vec::new();
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(projects),
            Err(e) => return Err(e.into()),
        };
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match Self::read(&path).await {
                Ok(doc) => projects.push(doc),
                Err(e) => tracing::warn!("Skipping unreadable project file: {e}"),
            }
        }
        sort_by_updated_desc(&mut projects);
        Ok(projects)
    }

    async fn get(&self, id: &str) -> Result<ProjectDocument> {
        let path = self.path_for(id)?;
        if !tokio::fs::try_exists(&path).await? {
            return Err(EditorError::persistence(format!("project not found: {id}")));
        }
        Self::read(&path).await
    }

    async fn create(&self, mut doc: ProjectDocument) -> Result<ProjectDocument> {
        let id = uuid::Uuid::new_v4().to_string();
        let path = self.path_for(&id)?;
        doc.id = Some(id);
        doc.updated_date = Some(Utc::now());
        self.write(&path, &doc).await?;
        tracing::debug!("Created project file {}", path.display());
        Ok(doc)
    }

    async fn update(&self, id: &str, mut doc: ProjectDocument) -> Result<()> {
        let path = self.path_for(id)?;
        if !tokio::fs::try_exists(&path).await? {
            return Err(EditorError::persistence(format!("project not found: {id}")));
        }
        doc.id = Some(id.to_string());
        doc.updated_date = Some(Utc::now());
        self.write(&path, &doc).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let path = self.path_for(id)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(EditorError::persistence(
                format!("project not found: {id}"),
            )),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_dir_lists_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProjectStore::new(dir.path().join("projects"));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_update_get_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProjectStore::new(dir.path().join("projects"));

        let saved = store
            .create(ProjectDocument::new("Gearbox", "two stage", vec![]))
            .await
            .unwrap();
        let id = saved.id.clone().unwrap();
        assert!(store.dir().join(format!("{id}.json")).exists());

        store
            .update(&id, ProjectDocument::new("Gearbox v2", "", vec![]))
            .await
            .unwrap();
        assert_eq!(store.get(&id).await.unwrap().name, "Gearbox v2");
        assert_eq!(store.list().await.unwrap().len(), 1);

        store.delete(&id).await.unwrap();
        assert!(store.get(&id).await.is_err());
        assert!(store.delete(&id).await.is_err());
    }

    #[tokio::test]
    async fn test_rejects_path_like_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProjectStore::new(dir.path());
        assert!(store.get("../secrets").await.is_err());
    }

    #[tokio::test]
    async fn test_list_skips_garbage_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProjectStore::new(dir.path());
        store
            .create(ProjectDocument::new("ok", "", vec![]))
            .await
            .unwrap();
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        let projects = store.list().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "ok");
    }
}

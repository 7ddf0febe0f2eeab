use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::Utc;
use shared::ProjectDocument;
use tokio::sync::RwLock;

use super::{sort_by_updated_desc, ProjectStore};
use crate::error::{EditorError, Result};

/// Process-local project store.
///
/// Can be switched offline to make every call fail, and counts calls, which
/// lets tests check that rejected commands never reach the store.
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    projects: RwLock<Vec<ProjectDocument>>,
    offline: AtomicBool,
    calls: AtomicUsize,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with documents (ids assigned where missing)
    pub fn with_projects(projects: Vec<ProjectDocument>) -> Self {
        let projects = projects
            .into_iter()
            .map(|mut doc| {
                if doc.id.is_none() {
                    doc.id = Some(uuid::Uuid::new_v4().to_string());
                }
                doc
            })
            .collect();
        Self {
            projects: RwLock::new(projects),
            ..Default::default()
        }
    }

    /// Make every following call fail (or succeed again)
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of store calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin_call(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(EditorError::persistence("project store is offline"));
        }
        Ok(())
    }
}

impl ProjectStore for InMemoryProjectStore {
    async fn list(&self) -> Result<Vec<ProjectDocument>> {
        self.begin_call()?;
        let mut projects = self.projects.read().await.clone();
        sort_by_updated_desc(&mut projects);
        Ok(projects)
    }

    async fn get(&self, id: &str) -> Result<ProjectDocument> {
        self.begin_call()?;
        self.projects
            .read()
            .await
            .iter()
            .find(|p| p.id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| EditorError::persistence(format!("project not found: {id}")))
    }

    async fn create(&self, mut doc: ProjectDocument) -> Result<ProjectDocument> {
        self.begin_call()?;
        doc.id = Some(uuid::Uuid::new_v4().to_string());
        doc.updated_date = Some(Utc::now());
        self.projects.write().await.push(doc.clone());
        Ok(doc)
    }

    async fn update(&self, id: &str, mut doc: ProjectDocument) -> Result<()> {
        self.begin_call()?;
        let mut projects = self.projects.write().await;
        let slot = projects
            .iter_mut()
            .find(|p| p.id.as_deref() == Some(id))
            .ok_or_else(|| EditorError::persistence(format!("project not found: {id}")))?;
        doc.id = Some(id.to_string());
        doc.updated_date = Some(Utc::now());
        *slot = doc;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.begin_call()?;
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|p| p.id.as_deref() != Some(id));
        if projects.len() == before {
            return Err(EditorError::persistence(format!("project not found: {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_id_and_date() {
        let store = InMemoryProjectStore::new();
        let saved = store
            .create(ProjectDocument::new("Rig", "", vec![]))
            .await
            .unwrap();
        assert!(saved.id.is_some());
        assert!(saved.updated_date.is_some());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_and_get() {
        let store = InMemoryProjectStore::new();
        let saved = store
            .create(ProjectDocument::new("Rig", "", vec![]))
            .await
            .unwrap();
        let id = saved.id.clone().unwrap();
        store
            .update(&id, ProjectDocument::new("Rig v2", "second", vec![]))
            .await
            .unwrap();
        let fetched = store.get(&id).await.unwrap();
        assert_eq!(fetched.name, "Rig v2");
        assert_eq!(fetched.id.as_deref(), Some(id.as_str()));
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let store = InMemoryProjectStore::new();
        let err = store
            .update("nope", ProjectDocument::new("x", "", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, EditorError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = InMemoryProjectStore::new();
        let first = store
            .create(ProjectDocument::new("first", "", vec![]))
            .await
            .unwrap();
        store
            .create(ProjectDocument::new("second", "", vec![]))
            .await
            .unwrap();
        store
            .update(
                first.id.as_deref().unwrap(),
                ProjectDocument::new("first", "touched", vec![]),
            )
            .await
            .unwrap();
        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryProjectStore::new();
        let saved = store
            .create(ProjectDocument::new("Rig", "", vec![]))
            .await
            .unwrap();
        let id = saved.id.unwrap();
        store.delete(&id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
        assert!(store.delete(&id).await.is_err());
    }

    #[tokio::test]
    async fn test_offline_fails_and_counts() {
        let store = InMemoryProjectStore::new();
        store.set_offline(true);
        assert!(store.list().await.is_err());
        assert_eq!(store.calls(), 1);
        store.set_offline(false);
        assert!(store.list().await.is_ok());
        assert_eq!(store.calls(), 2);
    }
}

use std::path::PathBuf;

use chrono::Utc;
use shared::ProjectDocument;
use tokio::sync::RwLock;

const DATA_FILE: &str = "projects.json";

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("project not found: {0}")]
    NotFound(String),
    #[error("invalid project: {0}")]
    Invalid(String),
    #[error("storage error: {0}")]
    Io(String),
}

/// Project documents held in memory, optionally mirrored to `projects.json`.
pub struct ProjectRepository {
    projects: RwLock<Vec<ProjectDocument>>,
    data_file: Option<PathBuf>,
}

impl ProjectRepository {
    pub fn in_memory() -> Self {
        Self {
            projects: RwLock::new(Vec::new()),
            data_file: None,
        }
    }

    /// Open a repository backed by `<dir>/projects.json`, loading it if present.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, RepoError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| RepoError::Io(e.to_string()))?;
        let path = dir.join(DATA_FILE);

        let projects = match tokio::fs::read_to_string(&path).await {
            Ok(json) => serde_json::from_str(&json)
                .map_err(|e| RepoError::Io(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(RepoError::Io(e.to_string())),
        };
        tracing::info!("Loaded {} projects from {}", projects.len(), path.display());

        Ok(Self {
            projects: RwLock::new(projects),
            data_file: Some(path),
        })
    }

    /// Most recently updated first
    pub async fn list(&self) -> Vec<ProjectDocument> {
        let mut projects = self.projects.read().await.clone();
        projects.sort_by(|a, b| b.updated_date.cmp(&a.updated_date));
        projects
    }

    pub async fn get(&self, id: &str) -> Result<ProjectDocument, RepoError> {
        self.projects
            .read()
            .await
            .iter()
            .find(|p| p.id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }

    /// Store a new project with a fresh id and timestamp.
    pub async fn create(&self, mut doc: ProjectDocument) -> Result<ProjectDocument, RepoError> {
        validate(&doc)?;
        doc.id = Some(uuid::Uuid::new_v4().to_string());
        doc.updated_date = Some(Utc::now());

        let mut projects = self.projects.write().await;
        let mut next = projects.clone();
        next.push(doc.clone());
        self.persist(&next).await?;
        *projects = next;
        Ok(doc)
    }

    pub async fn update(
        &self,
        id: &str,
        mut doc: ProjectDocument,
    ) -> Result<ProjectDocument, RepoError> {
        validate(&doc)?;
        let mut projects = self.projects.write().await;
        let mut next = projects.clone();
        let slot = next
            .iter_mut()
            .find(|p| p.id.as_deref() == Some(id))
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;
        doc.id = Some(id.to_string());
        doc.updated_date = Some(Utc::now());
        *slot = doc.clone();
        self.persist(&next).await?;
        *projects = next;
        Ok(doc)
    }

    pub async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let mut projects = self.projects.write().await;
        let next: Vec<_> = projects
            .iter()
            .filter(|p| p.id.as_deref() != Some(id))
            .cloned()
            .collect();
        if next.len() == projects.len() {
            return Err(RepoError::NotFound(id.to_string()));
        }
        self.persist(&next).await?;
        *projects = next;
        Ok(())
    }

    /// Write the table to the mirror file. Callers swap the live table in
    /// only after this succeeds.
    async fn persist(&self, projects: &[ProjectDocument]) -> Result<(), RepoError> {
        let Some(path) = &self.data_file else {
            return Ok(());
        };
        let json =
            serde_json::to_vec_pretty(projects).map_err(|e| RepoError::Io(e.to_string()))?;
        tokio::fs::write(path, json)
            .await
            .map_err(|e| RepoError::Io(e.to_string()))
    }
}

fn validate(doc: &ProjectDocument) -> Result<(), RepoError> {
    if doc.name.trim().is_empty() {
        return Err(RepoError::Invalid("name must not be empty".into()));
    }
    Ok(())
}

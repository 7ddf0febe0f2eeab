use reqwest::Url;
use shared::ProjectDocument;

use super::ProjectStore;
use crate::error::{EditorError, Result};

/// Client for the project REST service (`/api/projects`)
#[derive(Debug, Clone)]
pub struct HttpProjectStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProjectStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// `<base>/api/projects` followed by `extra` segments, each percent-encoded
    fn url(&self, extra: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            EditorError::persistence(format!("invalid base url {}: {e}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                EditorError::persistence(format!("base url cannot hold a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(["api", "projects"])
            .extend(extra);
        Ok(url)
    }

    fn projects_url(&self) -> Result<Url> {
        self.url(&[])
    }

    /// Url of one project. Ids the url parser would collapse are rejected.
    fn project_url(&self, id: &str) -> Result<Url> {
        if matches!(id, "" | "." | "..") {
            return Err(EditorError::persistence(format!("invalid project id: '{id}'")));
        }
        self.url(&[id])
    }
}

impl ProjectStore for HttpProjectStore {
    async fn list(&self) -> Result<Vec<ProjectDocument>> {
        let projects = self
            .client
            .get(self.projects_url()?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(projects)
    }

    async fn get(&self, id: &str) -> Result<ProjectDocument> {
        let doc = self
            .client
            .get(self.project_url(id)?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(doc)
    }

    async fn create(&self, doc: ProjectDocument) -> Result<ProjectDocument> {
        let created = self
            .client
            .post(self.projects_url()?)
            .json(&doc)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(created)
    }

    async fn update(&self, id: &str, doc: ProjectDocument) -> Result<()> {
        self.client
            .put(self.project_url(id)?)
            .json(&doc)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete(self.project_url(id)?)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

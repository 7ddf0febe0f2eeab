//! Project persistence: the store contract and its backends.

mod file;
mod http;
mod memory;

use std::future::Future;

use shared::ProjectDocument;

use crate::error::{EditorError, Result};
use crate::state::{EditorSettings, StoreSettings};

pub use file::FileProjectStore;
pub use http::HttpProjectStore;
pub use memory::InMemoryProjectStore;

/// CRUD service over stored projects.
///
/// `create` assigns the id and `updated_date`; `update` refreshes the date.
/// Failures are reported as [`EditorError::Persistence`].
pub trait ProjectStore {
    /// All projects, most recently updated first
    fn list(&self) -> impl Future<Output = Result<Vec<ProjectDocument>>> + Send;

    fn get(&self, id: &str) -> impl Future<Output = Result<ProjectDocument>> + Send;

    fn create(&self, doc: ProjectDocument) -> impl Future<Output = Result<ProjectDocument>> + Send;

    fn update(&self, id: &str, doc: ProjectDocument) -> impl Future<Output = Result<()>> + Send;

    fn delete(&self, id: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Store picked at runtime from [`StoreSettings`]
pub enum AnyProjectStore {
    Memory(InMemoryProjectStore),
    File(FileProjectStore),
    Http(HttpProjectStore),
}

impl AnyProjectStore {
    pub fn from_settings(settings: &EditorSettings) -> Result<Self> {
        let store = match &settings.store {
            StoreSettings::Memory => AnyProjectStore::Memory(InMemoryProjectStore::new()),
            StoreSettings::File { dir } => {
                let dir = dir
                    .clone()
                    .or_else(EditorSettings::data_dir)
                    .ok_or_else(|| EditorError::persistence("no data directory available"))?;
                AnyProjectStore::File(FileProjectStore::new(dir))
            }
            StoreSettings::Http { base_url } => {
                AnyProjectStore::Http(HttpProjectStore::new(base_url.clone()))
            }
        };
        Ok(store)
    }
}

impl ProjectStore for AnyProjectStore {
    async fn list(&self) -> Result<Vec<ProjectDocument>> {
        match self {
            AnyProjectStore::Memory(s) => s.list().await,
            AnyProjectStore::File(s) => s.list().await,
            AnyProjectStore::Http(s) => s.list().await,
        }
    }

    async fn get(&self, id: &str) -> Result<ProjectDocument> {
        match self {
            AnyProjectStore::Memory(s) => s.get(id).await,
            AnyProjectStore::File(s) => s.get(id).await,
            AnyProjectStore::Http(s) => s.get(id).await,
        }
    }

    async fn create(&self, doc: ProjectDocument) -> Result<ProjectDocument> {
        match self {
            AnyProjectStore::Memory(s) => s.create(doc).await,
            AnyProjectStore::File(s) => s.create(doc).await,
            AnyProjectStore::Http(s) => s.create(doc).await,
        }
    }

    async fn update(&self, id: &str, doc: ProjectDocument) -> Result<()> {
        match self {
            AnyProjectStore::Memory(s) => s.update(id, doc).await,
            AnyProjectStore::File(s) => s.update(id, doc).await,
            AnyProjectStore::Http(s) => s.update(id, doc).await,
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        match self {
            AnyProjectStore::Memory(s) => s.delete(id).await,
            AnyProjectStore::File(s) => s.delete(id).await,
            AnyProjectStore::Http(s) => s.delete(id).await,
        }
    }
}

/// Sort newest first; projects without a date go last
pub(crate) fn sort_by_updated_desc(projects: &mut [ProjectDocument]) {
    projects.sort_by(|a, b| b.updated_date.cmp(&a.updated_date));
}

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

mod routes;
mod storage;

use storage::ProjectRepository;

const DEFAULT_BIND: &str = "0.0.0.0:3001";

#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<ProjectRepository>,
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health))
        .route(
            "/api/projects",
            get(routes::list_projects).post(routes::create_project),
        )
        .route(
            "/api/projects/{id}",
            get(routes::get_project)
                .put(routes::update_project)
                .delete(routes::delete_project),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info".into()),
        )
        .init();

    let projects = match std::env::var("PARTFORGE_DATA") {
        Ok(dir) => match ProjectRepository::open(&dir).await {
            Ok(repo) => repo,
            Err(e) => {
                tracing::error!("Failed to open project data in {}: {}", dir, e);
                std::process::exit(1);
            }
        },
        Err(_) => {
            tracing::info!("PARTFORGE_DATA not set, projects are kept in memory");
            ProjectRepository::in_memory()
        }
    };

    let state = AppState {
        projects: Arc::new(projects),
    };

    let bind = std::env::var("PARTFORGE_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let listener = match tokio::net::TcpListener::bind(&bind).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", bind, e);
            std::process::exit(1);
        }
    };
    tracing::info!("Server running on http://{}", bind);
    if let Err(e) = axum::serve(listener, app(state)).await {
        tracing::error!("Server error: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partforge_editor_lib::error::EditorError;
    use partforge_editor_lib::persistence::{HttpProjectStore, ProjectStore};
    use partforge_editor_lib::EditorController;
    use shared::PartType;

    /// Serve the app on an ephemeral port and return its base url
    async fn spawn_app() -> String {
        let state = AppState {
            projects: Arc::new(ProjectRepository::in_memory()),
        };
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_editor_saves_and_opens_over_http() {
        let store = HttpProjectStore::new(spawn_app().await);

        let mut editor = EditorController::default();
        editor.add_part(PartType::Gear).unwrap();
        editor.add_part(PartType::Shaft).unwrap();
        let saved = editor
            .save_project(&store, "Remote", "over the wire")
            .await
            .unwrap();
        let id = saved.id.unwrap();

        // Second save goes through PUT on the same id
        editor.add_part(PartType::Motor).unwrap();
        editor.save_project(&store, "Remote v2", "").await.unwrap();
        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Remote v2");

        let mut other = EditorController::default();
        other.open_project(&store, &id).await.unwrap();
        assert_eq!(other.parts().list(), editor.parts().list());

        other.delete_stored_project(&store, &id).await.unwrap();
        assert!(other.project_id().is_none());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_and_odd_ids_are_persistence_errors() {
        let store = HttpProjectStore::new(spawn_app().await);
        let mut editor = EditorController::default();
        editor.save_project(&store, "Only", "").await.unwrap();

        for id in ["missing", "a/b", "?x=1", ".."] {
            let err = store.get(id).await.unwrap_err();
            assert!(matches!(err, EditorError::Persistence(_)), "{id}: {err}");
            assert!(store.delete(id).await.is_err(), "{id}");
        }
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}

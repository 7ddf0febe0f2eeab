//! Editor controller
//!
//! Owns the part collection, selection and undo history, and applies the
//! commands issued by the presentation layer. Every command runs to
//! completion before the next one: derive new state, mutate parts, fix up the
//! selection, push history for structural edits, then publish a [`ViewState`].

mod history_ops;
mod part_ops;
mod project_ops;
mod transform_ops;
mod view;

pub use view::{part_display_name, short_id, ViewState};

use shared::{Part, PartId, ProjectId};
use tokio::sync::watch;

use crate::state::{EditorSettings, History, PartCollection, SelectionState};

/// State container behind the editor's command surface
pub struct EditorController {
    pub(crate) parts: PartCollection,
    pub(crate) selection: SelectionState,
    pub(crate) history: History,
    pub(crate) settings: EditorSettings,
    /// Bound persisted identifier; `None` until the first save or a load
    pub(crate) project_id: Option<ProjectId>,
    pub(crate) project_name: String,
    pub(crate) project_description: String,
    /// Part being dragged, between `begin_gesture` and `end_gesture`
    pub(crate) gesture: Option<PartId>,
    /// Monotonically increasing version counter for cache invalidation
    pub(crate) version: u64,
    view_tx: watch::Sender<ViewState>,
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl EditorController {
    /// Controller with an empty project
    pub fn new(settings: EditorSettings) -> Self {
        let mut history = History::new(settings.history_limit);
        history.reset(PartCollection::new());
        let project_name = settings.default_project_name.clone();
        let (view_tx, _) = watch::channel(ViewState::default());

        let mut controller = Self {
            parts: PartCollection::new(),
            selection: SelectionState::default(),
            history,
            settings,
            project_id: None,
            project_name,
            project_description: String::new(),
            gesture: None,
            version: 0,
            view_tx,
        };
        controller.publish();
        controller
    }

    /// Current parts
    pub fn parts(&self) -> &PartCollection {
        &self.parts
    }

    pub fn part(&self, id: &str) -> Option<&Part> {
        self.parts.get(id)
    }

    /// Currently selected part id
    pub fn selected(&self) -> Option<&PartId> {
        self.selection.selected()
    }

    /// Selected part record
    pub fn selected_part(&self) -> Option<&Part> {
        self.selection.selected().and_then(|id| self.parts.get(id))
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn project_id(&self) -> Option<&ProjectId> {
        self.project_id.as_ref()
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_description(&self) -> &str {
        &self.project_description
    }

    /// Part being dragged, if a gesture is in progress
    pub fn gesture(&self) -> Option<&PartId> {
        self.gesture.as_ref()
    }

    /// Current version (increments on every published change)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Snapshot of everything the presentation layer renders
    pub fn view_state(&self) -> ViewState {
        ViewState {
            parts: self.parts.to_vec(),
            selected: self.selection.selected().cloned(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            project_id: self.project_id.clone(),
            project_name: self.project_name.clone(),
            project_description: self.project_description.clone(),
            version: self.version,
        }
    }

    /// Receiver that sees a new [`ViewState`] after every command
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.view_tx.subscribe()
    }

    /// Bump version and push the view state to subscribers
    pub(crate) fn publish(&mut self) {
        self.version += 1;
        self.view_tx.send_replace(self.view_state());
    }
}

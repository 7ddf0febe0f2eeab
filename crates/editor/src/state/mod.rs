pub mod factory;
pub mod history;
pub mod parts;
pub mod selection;
pub mod settings;

pub use factory::{create_part, create_part_from_tag, duplicate_part, DUPLICATE_OFFSET};
pub use history::{History, DEFAULT_HISTORY_LIMIT};
pub use parts::{PartCollection, UpdateOutcome, MIN_SCALE};
pub use selection::SelectionState;
pub use settings::{EditorSettings, StoreSettings, DEFAULT_PROJECT_NAME};

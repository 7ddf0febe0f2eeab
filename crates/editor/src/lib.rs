// Library crate: the editor core (part state, history, projects) plus the
// command protocol and headless harness used by tests and the driver binary.

pub mod command;
pub mod controller;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod helpers;
pub mod keyboard;
pub mod persistence;
pub mod state;

pub use controller::{EditorController, ViewState};
pub use error::{EditorError, Result};

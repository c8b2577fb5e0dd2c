//! Application-level modules for the seekbar demo.
//!
//! Contains the centralized demo state and settings persistence.

mod app_state;
mod settings_coordinator;

pub use app_state::{AppState, MARK_SETS};
pub use settings_coordinator::SettingsCoordinator;

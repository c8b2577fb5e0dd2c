//! Range Seekbar Demo Application
//!
//! Interactive demo of the dual-handle discrete range selector built on the
//! egui framework. The demo features:
//! - Touch and mouse dragging with push-through collision handling
//! - Snap-to-mark settling animation on release
//! - Programmatic selection controls with validation feedback
//! - Built-in mark sets and a light/dark palette, persisted across runs
//!
//! The application is built with a modular architecture:
//! - `app/` - Demo state management and settings persistence
//! - `ui/` - Panel rendering and egui input translation
//! - `rendering/` - Low-level widget painting

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod rendering;
mod ui;

use app::{AppState, SettingsCoordinator};
use ui::control_panel::{self, ControlInteraction};
use ui::seekbar_panel;

const MARK_SET_KEY: &str = "mark_set";
const DARK_MODE_KEY: &str = "dark_mode";
const LEFT_INDEX_KEY: &str = "left_index";
const RIGHT_INDEX_KEY: &str = "right_index";

/// Main application entry point that initializes and launches the demo.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 420.0])
            .with_title("Range Seekbar Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Range Seekbar Demo",
        options,
        Box::new(|cc| Ok(Box::new(SeekbarDemoApp::new(cc)))),
    )
}

/// The demo application: one seekbar plus controls exercising its API.
struct SeekbarDemoApp {
    /// Centralized demo state
    state: AppState,
}

impl SeekbarDemoApp {
    /// Creates the demo with mark set, palette, and selection restored from
    /// persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let mark_set: usize = SettingsCoordinator::load_setting_or(cc.storage, MARK_SET_KEY, 0);
        let dark_mode: bool = SettingsCoordinator::load_setting_or(cc.storage, DARK_MODE_KEY, false);
        let mut state = AppState::new(mark_set, dark_mode);

        // Best-effort selection restore. The left setter rejects mark 0 by
        // contract, which is also where a fresh cursor already rests, so 0
        // simply skips the call.
        let max_index = state.seekbar.marks().max_index();
        let right: usize =
            SettingsCoordinator::load_setting_or(cc.storage, RIGHT_INDEX_KEY, max_index);
        if right != max_index {
            state.seekbar.set_right_selection(right).ok();
        }
        let left: usize = SettingsCoordinator::load_setting_or(cc.storage, LEFT_INDEX_KEY, 0);
        if left != 0 {
            state.seekbar.set_left_selection(left).ok();
        }
        state.drain_changes();
        state.event_log.clear();

        Self { state }
    }

    /// Applies panel interactions to the demo state.
    fn handle_control_interaction(&mut self, interaction: ControlInteraction) {
        match interaction {
            ControlInteraction::LeftSelectionRequested(index) => {
                self.state.request_left_selection(index);
            }
            ControlInteraction::RightSelectionRequested(index) => {
                self.state.request_right_selection(index);
            }
            ControlInteraction::MarkSetChosen(index) => {
                self.state.load_mark_set(index);
            }
            ControlInteraction::DarkModeToggled(dark) => {
                self.state.set_dark_mode(dark);
            }
        }
    }
}

impl eframe::App for SeekbarDemoApp {
    /// Called when the app is shutting down - persists preferences.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_setting(storage, MARK_SET_KEY, &self.state.mark_set);
        SettingsCoordinator::save_setting(storage, DARK_MODE_KEY, &self.state.dark_mode);
        SettingsCoordinator::save_setting(storage, LEFT_INDEX_KEY, &self.state.seekbar.left_index());
        SettingsCoordinator::save_setting(
            storage,
            RIGHT_INDEX_KEY,
            &self.state.seekbar.right_index(),
        );
    }

    /// Main update loop: apply visuals, render the widget and controls,
    /// then drain listener notifications into the log.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let visuals = if self.state.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            seekbar_panel::render_seekbar_panel(ui, ctx, &mut self.state.seekbar);
            ui.add_space(8.0);
            ui.separator();
            if let Some(interaction) = control_panel::render_control_panel(ui, &mut self.state) {
                self.handle_control_interaction(interaction);
            }
        });

        self.state.drain_changes();
    }
}

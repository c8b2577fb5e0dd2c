//! Control panel: programmatic selection, mark sets, appearance, log.
//!
//! Exercises the widget's whole external API so rejected calls (left
//! selection 0, out-of-range indices) are visible in the demo.

use eframe::egui;

use crate::app::{AppState, MARK_SETS};

/// Result of control panel interactions that the application must apply.
pub enum ControlInteraction {
    /// "Apply" was clicked for the left cursor
    LeftSelectionRequested(usize),
    /// "Apply" was clicked for the right cursor
    RightSelectionRequested(usize),
    /// A different built-in mark set was chosen
    MarkSetChosen(usize),
    /// The dark mode checkbox was toggled
    DarkModeToggled(bool),
}

/// Renders the controls below the widget.
pub fn render_control_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<ControlInteraction> {
    let mut interaction = None;
    let max_index = state.seekbar.marks().max_index();

    ui.horizontal(|ui| {
        let left = state.seekbar.left_index();
        let right = state.seekbar.right_index();
        ui.label(egui::RichText::new(format!(
            "Selection: {} ({}) .. {} ({})",
            left,
            state.seekbar.marks().label(left),
            right,
            state.seekbar.marks().label(right),
        ))
        .strong());
    });

    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Left to:");
        ui.add(egui::DragValue::new(&mut state.left_request).range(0..=max_index));
        if ui.button("Apply left").clicked() {
            interaction = Some(ControlInteraction::LeftSelectionRequested(state.left_request));
        }

        ui.separator();

        ui.label("Right to:");
        ui.add(egui::DragValue::new(&mut state.right_request).range(0..=max_index));
        if ui.button("Apply right").clicked() {
            interaction = Some(ControlInteraction::RightSelectionRequested(
                state.right_request,
            ));
        }
    });

    ui.horizontal(|ui| {
        let current_set = state.mark_set;
        let mut chosen_set = current_set;
        egui::ComboBox::from_label("Marks")
            .selected_text(MARK_SETS[current_set].0)
            .show_ui(ui, |ui| {
                for (i, (name, _)) in MARK_SETS.iter().enumerate() {
                    ui.selectable_value(&mut chosen_set, i, *name);
                }
            });
        if chosen_set != current_set {
            interaction = Some(ControlInteraction::MarkSetChosen(chosen_set));
        }

        let mut dark = state.dark_mode;
        if ui.checkbox(&mut dark, "Dark mode").changed() {
            interaction = Some(ControlInteraction::DarkModeToggled(dark));
        }
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(egui::Color32::RED, err);
    }

    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Cursor changes:");
        if ui.button("Clear").clicked() {
            state.event_log.clear();
        }
    });
    egui::ScrollArea::vertical()
        .max_height(140.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in &state.event_log {
                ui.label(line);
            }
        });

    interaction
}

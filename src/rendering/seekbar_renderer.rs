//! Seekbar painting: mark labels, track sections, and the two handles.
//!
//! Pure drawing from already-laid-out widget state; no input or mutation
//! happens here.

use eframe::egui;
use rseekbar::{CursorState, RangeSeekbar, SeekbarStyle};

/// Paints the whole widget.
///
/// Marks inside the selected span (cursor positions included) use the
/// selected text color, and the track between the cursors is overpainted
/// in the selected color. A fully selected range collapses to a single
/// selected-color bar.
pub fn render_seekbar(painter: &egui::Painter, seekbar: &RangeSeekbar) {
    let style = seekbar.style();
    let grid = seekbar.marks();
    let track_rect = seekbar.track_rect();
    let left_index = seekbar.left_cursor().continuous_index();
    let right_index = seekbar.right_cursor().continuous_index();

    // Mark labels above the track.
    let text_bottom = track_rect.top() - style.margin_between();
    for i in 0..grid.count() {
        let position = i as f32;
        let selected = (position > left_index && position < right_index)
            || position == left_index
            || position == right_index;
        let color = if selected {
            style.text_color_selected()
        } else {
            style.text_color_normal()
        };
        painter.text(
            egui::pos2(grid.index_to_pixel(position), text_bottom),
            egui::Align2::CENTER_BOTTOM,
            grid.label(i),
            egui::FontId::proportional(style.text_size()),
            color,
        );
    }

    // Track bar plus the selected section between the cursors.
    let radius = style.track_height() / 2.0;
    if left_index == 0.0 && right_index == grid.max_index() as f32 {
        painter.rect_filled(track_rect, radius, style.track_color_selected());
    } else {
        painter.rect_filled(track_rect, radius, style.track_color_normal());
        let selected_rect = egui::Rect::from_min_max(
            egui::pos2(grid.index_to_pixel(left_index), track_rect.top()),
            egui::pos2(grid.index_to_pixel(right_index), track_rect.bottom()),
        );
        // Square edges are fine here: the handles cover them.
        painter.rect_filled(selected_rect, 0.0, style.track_color_selected());
    }

    render_cursor(painter, seekbar.left_cursor(), style);
    render_cursor(painter, seekbar.right_cursor(), style);
}

/// Paints one handle; a pressed handle gets a heavier ring.
fn render_cursor(painter: &egui::Painter, cursor: &CursorState, style: &SeekbarStyle) {
    let rect = cursor.rect();
    let radius = rect.width().min(rect.height()) / 2.0;
    painter.circle_filled(rect.center(), radius, style.track_color_selected());

    let ring_width = if cursor.pressed() { 3.0 } else { 1.5 };
    painter.circle_stroke(
        rect.center(),
        radius - ring_width / 2.0,
        egui::Stroke::new(ring_width, egui::Color32::WHITE),
    );
}

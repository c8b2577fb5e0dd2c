//! Seekbar widget hosting: input translation, ticking, and painting.
//!
//! Bridges egui's event stream onto the widget's raw pointer interface,
//! drives the per-frame animation tick, and hands the laid-out widget to
//! the renderer.

use eframe::egui;
use rseekbar::{PointerEvent, PointerPhase, RangeSeekbar};

use crate::rendering::seekbar_renderer;

/// Pointer id for the synthesized mouse pointer. Touch ids come from the
/// platform and stay far below this.
const MOUSE_POINTER_ID: u64 = u64::MAX;

/// Lays out, updates, and paints the seekbar for this frame.
pub fn render_seekbar_panel(ui: &mut egui::Ui, ctx: &egui::Context, seekbar: &mut RangeSeekbar) {
    let desired_height = seekbar.style().desired_height();
    let (widget_rect, _response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), desired_height),
        egui::Sense::click_and_drag(),
    );

    // Geometry first: hit rects and the pixel<->index mapping must be
    // current before any event is interpreted.
    seekbar.update_layout(widget_rect);

    for event in collect_pointer_events(ctx) {
        seekbar.handle_pointer_event(&event);
    }

    let now = ctx.input(|i| i.time);
    seekbar.tick(now);
    if seekbar.is_animating() {
        ctx.request_repaint();
    }

    seekbar_renderer::render_seekbar(ui.painter(), seekbar);
}

/// Translates this frame's egui input into the widget's pointer vocabulary.
///
/// Touch events map per-finger; mouse input is synthesized as one extra
/// pointer so desktop dragging works the same way.
fn collect_pointer_events(ctx: &egui::Context) -> Vec<PointerEvent> {
    ctx.input(|input| {
        let mut events = Vec::new();
        for event in &input.events {
            match event {
                egui::Event::Touch { id, phase, pos, .. } => {
                    let phase = match phase {
                        egui::TouchPhase::Start => PointerPhase::Down,
                        egui::TouchPhase::Move => PointerPhase::Move,
                        egui::TouchPhase::End => PointerPhase::Up,
                        egui::TouchPhase::Cancel => PointerPhase::Cancel,
                    };
                    events.push(PointerEvent::new(id.0, pos.x, pos.y, phase));
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    let phase = if *pressed {
                        PointerPhase::Down
                    } else {
                        PointerPhase::Up
                    };
                    events.push(PointerEvent::new(MOUSE_POINTER_ID, pos.x, pos.y, phase));
                }
                egui::Event::PointerMoved(pos) => {
                    events.push(PointerEvent::new(
                        MOUSE_POINTER_ID,
                        pos.x,
                        pos.y,
                        PointerPhase::Move,
                    ));
                }
                egui::Event::PointerGone => {
                    events.push(PointerEvent::new(
                        MOUSE_POINTER_ID,
                        0.0,
                        0.0,
                        PointerPhase::Cancel,
                    ));
                }
                _ => {}
            }
        }
        events
    })
}

//! Drag resolver: turns raw pointer-move deltas into cursor movement.
//!
//! Applies, in order: the direction-at-boundary short circuit, the track
//! boundary clamp, collision handling against the other cursor (clamp or
//! push-through displacement), the zero-delta quick return, and finally the
//! pixel-to-index conversion. The quick return is behavioral, not just an
//! optimization: a zero outcome must not invalidate the frame.

use log::debug;

use crate::cursor::{CursorSide, CursorState};
use crate::marks::MarkGrid;

/// Outer pixel limits for the cursor rectangles.
///
/// `min_x` is where the left cursor's left edge rests at mark 0; `max_x`
/// is where the right cursor's right edge rests at the last mark.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackBounds {
    pub min_x: f32,
    pub max_x: f32,
}

/// What a single pointer-move did to the cursor pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Delta was swallowed entirely; nothing changed, no redraw needed.
    Ignored,
    /// The dragged cursor moved.
    Moved,
    /// The dragged cursor moved and pushed the other cursor one mark
    /// outward; a snap animation toward `target` was started on it and the
    /// caller must emit the change notification.
    Displaced { target: usize },
}

/// Resolves one pointer-move for the bound cursor.
///
/// `dragged` is the cursor owning the pointer, `other` its counterpart.
/// The other cursor is displaced only when it is free: not pointer-bound,
/// not at its own extreme mark, and not already snap-animating. In every
/// other collision the dragged cursor is clamped so the two hit
/// rectangles exactly touch.
pub fn resolve_drag(
    dragged: &mut CursorState,
    other: &mut CursorState,
    grid: &MarkGrid,
    bounds: &TrackBounds,
    snap_duration_ms: u64,
    pointer_x: f32,
) -> DragOutcome {
    if !grid.is_laid_out() {
        // Transient zero-width layout: swallow the delta rather than divide by it.
        dragged.take_delta(pointer_x);
        return DragOutcome::Ignored;
    }

    let mut delta = dragged.take_delta(pointer_x);
    let max_index = grid.max_index() as f32;
    let mut displaced: Option<usize> = None;

    match dragged.side() {
        CursorSide::Left => {
            if delta < 0.0 && dragged.continuous_index() == 0.0 {
                return DragOutcome::Ignored;
            }

            // Moving past the track start pins the cursor to mark 0.
            if dragged.rect().left() + delta < bounds.min_x {
                dragged.set_continuous_index(0.0);
                return DragOutcome::Moved;
            }

            if dragged.rect().right() + delta >= other.rect().left() {
                if other.pressed()
                    || other.continuous_index() == max_index
                    || other.is_animating()
                {
                    delta = other.rect().left() - dragged.rect().right();
                } else if other.continuous_index() <= max_index - 1.0 {
                    let target = (other.continuous_index() + 1.0) as usize;
                    other.set_settled_index(target);
                    let from = other.continuous_index();
                    other
                        .animation_mut()
                        .start(from, target, snap_duration_ms);
                    displaced = Some(target);
                    debug!("left drag displaced right cursor to mark {}", target);
                }
            }
        }
        CursorSide::Right => {
            if delta > 0.0 && dragged.continuous_index() == max_index {
                return DragOutcome::Ignored;
            }

            // Clamp against the track end.
            if dragged.rect().right() + delta > bounds.max_x {
                delta = bounds.max_x - dragged.rect().right();
            }

            if dragged.rect().left() + delta < other.rect().right() {
                if other.pressed() || other.continuous_index() == 0.0 || other.is_animating() {
                    delta = other.rect().right() - dragged.rect().left();
                } else if other.continuous_index() >= 1.0 {
                    let target = (other.continuous_index() - 1.0) as usize;
                    other.set_settled_index(target);
                    let from = other.continuous_index();
                    other
                        .animation_mut()
                        .start(from, target, snap_duration_ms);
                    displaced = Some(target);
                    debug!("right drag displaced left cursor to mark {}", target);
                }
            }
        }
    }

    if delta == 0.0 {
        return match displaced {
            Some(target) => DragOutcome::Displaced { target },
            None => DragOutcome::Ignored,
        };
    }

    let new_index = dragged.continuous_index() + delta / grid.part_length();
    dragged.set_continuous_index(new_index);

    match displaced {
        Some(target) => DragOutcome::Displaced { target },
        None => DragOutcome::Moved,
    }
}

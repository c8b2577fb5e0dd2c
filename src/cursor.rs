//! Per-handle cursor state.
//!
//! Each of the two handles tracks a continuous (fractional) position used
//! while dragging or animating, the discrete mark it last settled on, and
//! the pointer currently bound to it. The hit rectangle is derived state,
//! recomputed from the continuous position on every layout pass.

use crate::animation::SnapAnimation;
use crate::input::PointerId;

/// Which of the two handles a piece of state belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorSide {
    Left,
    Right,
}

/// Full state of one handle.
///
/// Invariants are enforced by the owning `RangeSeekbar`, which only ever
/// mutates the pair through pair-safe operations:
/// - `0 <= continuous_index <= max mark index`
/// - the left cursor's continuous index never exceeds the right's
/// - at most one pointer is bound at a time
#[derive(Debug, Clone)]
pub struct CursorState {
    side: CursorSide,
    continuous_index: f32,
    settled_index: usize,
    pointer_id: Option<PointerId>,
    pressed: bool,
    rect: egui::Rect,
    last_x: f32,
    animation: SnapAnimation,
}

impl CursorState {
    /// Creates a cursor resting exactly on `index`.
    pub fn new(side: CursorSide, index: usize) -> Self {
        Self {
            side,
            continuous_index: index as f32,
            settled_index: index,
            pointer_id: None,
            pressed: false,
            rect: egui::Rect::NOTHING,
            last_x: 0.0,
            animation: SnapAnimation::idle(),
        }
    }

    pub fn side(&self) -> CursorSide {
        self.side
    }

    /// Fractional position in mark-index units.
    pub fn continuous_index(&self) -> f32 {
        self.continuous_index
    }

    pub(crate) fn set_continuous_index(&mut self, index: f32) {
        self.continuous_index = index;
    }

    /// The discrete mark this cursor last committed to (what listeners are
    /// told about).
    pub fn settled_index(&self) -> usize {
        self.settled_index
    }

    pub(crate) fn set_settled_index(&mut self, index: usize) {
        self.settled_index = index;
    }

    // ===== Pointer binding =====

    pub fn is_bound(&self) -> bool {
        self.pointer_id.is_some()
    }

    pub fn is_bound_to(&self, id: PointerId) -> bool {
        self.pointer_id == Some(id)
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Binds a pointer and records its x position for delta tracking.
    pub(crate) fn bind(&mut self, id: PointerId, x: f32) {
        self.pointer_id = Some(id);
        self.pressed = true;
        self.last_x = x;
    }

    /// Releases the bound pointer and clears the pressed flag.
    pub(crate) fn unbind(&mut self) {
        self.pointer_id = None;
        self.pressed = false;
        self.last_x = 0.0;
    }

    /// Consumes a pointer-move x position, returning the pixel delta since
    /// the previous one.
    pub(crate) fn take_delta(&mut self, x: f32) -> f32 {
        let delta = x - self.last_x;
        self.last_x = x;
        delta
    }

    // ===== Hit rectangle =====

    /// True if the point lands inside this cursor's hit rectangle.
    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        self.rect.contains(egui::pos2(x, y))
    }

    pub fn rect(&self) -> egui::Rect {
        self.rect
    }

    pub(crate) fn set_rect(&mut self, rect: egui::Rect) {
        self.rect = rect;
    }

    // ===== Snap animation =====

    pub fn is_animating(&self) -> bool {
        self.animation.is_active()
    }

    pub(crate) fn animation_mut(&mut self) -> &mut SnapAnimation {
        &mut self.animation
    }

    /// Read access to the snap animation slot.
    pub fn animation(&self) -> &SnapAnimation {
        &self.animation
    }

    /// Hard reset onto a mark: used when the mark set is replaced.
    pub(crate) fn reset_to(&mut self, index: usize) {
        self.continuous_index = index as f32;
        self.settled_index = index;
        self.animation.abort();
        self.unbind();
    }
}

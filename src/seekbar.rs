//! The seekbar coordinator: owns the mark grid and the cursor pair.
//!
//! The two cursors are logically independent but their transitions are
//! cross-referential (collision, displacement, cascade), so all mutation
//! goes through this one type. Each entry point performs a single atomic
//! update pass over the pair and notifies the listener only after the pair
//! is consistent again; external code never observes a half-updated pair.
//!
//! Exactly two external paths mutate state: `handle_pointer_event` for
//! input and `tick` for animation advancement. Both return whether a
//! redraw is warranted so the embedder can skip idle frames.

use anyhow::{bail, Result};
use log::debug;

use crate::cursor::{CursorSide, CursorState};
use crate::drag::{self, DragOutcome, TrackBounds};
use crate::input::{PointerEvent, PointerPhase};
use crate::marks::MarkGrid;
use crate::snap;
use crate::style::SeekbarStyle;
use crate::traits::CursorChangeListener;

/// Dual-handle discrete range selector.
///
/// Two draggable cursors on a horizontal track snap to labeled marks. The
/// cursors never cross: dragging one into the other either clamps the drag
/// or shoves the other handle one mark outward, and release-time snapping
/// resolves collisions by making the released cursor yield.
pub struct RangeSeekbar {
    grid: MarkGrid,
    left: CursorState,
    right: CursorState,
    style: SeekbarStyle,
    bounds: TrackBounds,
    track_rect: egui::Rect,
    listener: Option<Box<dyn CursorChangeListener>>,
}

impl RangeSeekbar {
    /// Creates a seekbar over the given mark labels with the default style.
    ///
    /// The left cursor starts on the first mark, the right cursor on the
    /// last. Fails if fewer than two labels are supplied.
    pub fn new(labels: Vec<String>) -> Result<Self> {
        Self::with_style(labels, SeekbarStyle::default())
    }

    /// Creates a seekbar with an explicit style.
    pub fn with_style(labels: Vec<String>, style: SeekbarStyle) -> Result<Self> {
        let grid = MarkGrid::new(labels)?;
        let right_start = grid.max_index();
        Ok(Self {
            grid,
            left: CursorState::new(CursorSide::Left, 0),
            right: CursorState::new(CursorSide::Right, right_start),
            style,
            bounds: TrackBounds::default(),
            track_rect: egui::Rect::NOTHING,
            listener: None,
        })
    }

    // ===== Layout =====

    /// Recomputes all derived geometry from the widget's allocated rect.
    ///
    /// Must be called whenever the rect changes (and is cheap enough to
    /// call every frame). The mark conversions, collision math, and hit
    /// rectangles all depend on it; skipping it after a resize corrupts
    /// behavior, not just drawing.
    pub fn update_layout(&mut self, widget_rect: egui::Rect) {
        let left_w = self.style.left_cursor_size().x;
        let right_w = self.style.right_cursor_size().x;

        // Track is inset half a cursor on each side so handles at the
        // extreme marks stay inside the widget.
        let track_left = widget_rect.left() + left_w / 2.0;
        let track_right = widget_rect.right() - right_w / 2.0;
        let track_top = widget_rect.top() + self.style.text_size() + self.style.margin_between();
        self.track_rect = egui::Rect::from_min_max(
            egui::pos2(track_left, track_top),
            egui::pos2(track_right, track_top + self.style.track_height()),
        );

        self.grid.relayout(track_left, track_right);
        self.bounds = TrackBounds {
            min_x: track_left - left_w / 2.0,
            max_x: track_right + right_w / 2.0,
        };
        self.sync_cursor_rects();
    }

    fn sync_cursor_rects(&mut self) {
        if !self.grid.is_laid_out() {
            return;
        }
        let center_y = self.track_rect.center().y;
        let left_center = self.grid.index_to_pixel(self.left.continuous_index());
        self.left.set_rect(egui::Rect::from_center_size(
            egui::pos2(left_center, center_y),
            self.style.left_cursor_size(),
        ));
        let right_center = self.grid.index_to_pixel(self.right.continuous_index());
        self.right.set_rect(egui::Rect::from_center_size(
            egui::pos2(right_center, center_y),
            self.style.right_cursor_size(),
        ));
    }

    // ===== Input =====

    /// Feeds one raw pointer event through the widget.
    ///
    /// Returns true when the event changed visible state and a redraw is
    /// warranted.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let changed = match event.phase {
            PointerPhase::Down => self.handle_pointer_down(event),
            PointerPhase::Move => self.handle_pointer_move(event),
            PointerPhase::Up | PointerPhase::Cancel => self.handle_pointer_up(event),
        };
        if changed {
            self.sync_cursor_rects();
        }
        changed
    }

    /// Hit-tests the down point against the cursors, left first; the first
    /// match wins. A cursor that already owns a pointer ignores further
    /// down events.
    fn handle_pointer_down(&mut self, event: &PointerEvent) -> bool {
        if self.left.hit_test(event.x, event.y) {
            if self.left.pressed() {
                return false;
            }
            self.left.bind(event.id, event.x);
            true
        } else if self.right.hit_test(event.x, event.y) {
            if self.right.pressed() {
                return false;
            }
            self.right.bind(event.id, event.x);
            true
        } else {
            false
        }
    }

    fn handle_pointer_move(&mut self, event: &PointerEvent) -> bool {
        let side = if self.left.pressed() && self.left.is_bound_to(event.id) {
            CursorSide::Left
        } else if self.right.pressed() && self.right.is_bound_to(event.id) {
            CursorSide::Right
        } else {
            return false;
        };

        let duration = self.style.snap_duration_ms();
        // Field-level split so the grid stays readable alongside the pair.
        let (dragged, other) = match side {
            CursorSide::Left => (&mut self.left, &mut self.right),
            CursorSide::Right => (&mut self.right, &mut self.left),
        };
        let outcome = drag::resolve_drag(dragged, other, &self.grid, &self.bounds, duration, event.x);
        match outcome {
            DragOutcome::Ignored => false,
            DragOutcome::Moved => true,
            DragOutcome::Displaced { target } => {
                self.notify(opposite(side), target);
                true
            }
        }
    }

    /// Unbinds the cursor owning this pointer and resolves its snap target.
    ///
    /// The listener fires as soon as the target is decided; the settle
    /// animation then plays out over the following ticks.
    fn handle_pointer_up(&mut self, event: &PointerEvent) -> bool {
        let side = if self.left.pressed() && self.left.is_bound_to(event.id) {
            CursorSide::Left
        } else if self.right.pressed() && self.right.is_bound_to(event.id) {
            CursorSide::Right
        } else {
            return false;
        };

        let duration = self.style.snap_duration_ms();
        let (released, other) = match side {
            CursorSide::Left => (&mut self.left, &mut self.right),
            CursorSide::Right => (&mut self.right, &mut self.left),
        };
        let decided = snap::resolve_release_target(
            side,
            released.continuous_index(),
            other.continuous_index(),
            other.settled_index(),
        );
        if let Some(target) = decided {
            released.set_settled_index(target);
            let from = released.continuous_index();
            released.animation_mut().start(from, target, duration);
            debug!("{:?} cursor released, snapping to mark {}", side, target);
        }
        released.unbind();

        if let Some(target) = decided {
            self.notify(side, target);
        }
        true
    }

    // ===== Animation =====

    /// Advances both cursors' snap animations to `now` (seconds).
    ///
    /// Returns true while anything is still moving so the embedder knows to
    /// keep requesting frames. A finished animation pins the cursor to its
    /// exact target mark.
    pub fn tick(&mut self, now: f64) -> bool {
        use crate::animation::SnapProgress;

        let mut changed = false;
        for cursor in [&mut self.left, &mut self.right] {
            match cursor.animation_mut().position_at(now) {
                SnapProgress::Idle => {}
                SnapProgress::Running(value) | SnapProgress::Finished(value) => {
                    cursor.set_continuous_index(value);
                    changed = true;
                }
            }
        }
        if changed {
            self.sync_cursor_rects();
        }
        changed
    }

    /// True while either cursor has a snap animation in flight.
    pub fn is_animating(&self) -> bool {
        self.left.is_animating() || self.right.is_animating()
    }

    // ===== Programmatic selection =====

    /// Animates the left cursor onto `index`.
    ///
    /// Valid indices are `1..=marks-2`: the first mark is rejected here
    /// even though dragging can settle the cursor there, and the last mark
    /// must stay reachable for the right cursor. If the move would put the
    /// left cursor at or past the right one, the right cursor cascades one
    /// mark further out with its own notification.
    pub fn set_left_selection(&mut self, index: usize) -> Result<()> {
        let max = self.grid.max_index();
        if index == 0 || index >= max {
            bail!("left selection must be within 1..={} (got {})", max - 1, index);
        }
        if self.left.continuous_index() == index as f32 {
            return Ok(());
        }

        let duration = self.style.snap_duration_ms();
        self.left.set_settled_index(index);
        let from = self.left.continuous_index();
        self.left.animation_mut().start(from, index, duration);

        let mut cascade = None;
        if self.right.continuous_index() <= index as f32 {
            let target = index + 1;
            self.right.set_settled_index(target);
            let right_from = self.right.continuous_index();
            self.right.animation_mut().start(right_from, target, duration);
            cascade = Some(target);
            debug!("left selection cascaded right cursor to mark {}", target);
        }

        self.notify(CursorSide::Left, index);
        if let Some(target) = cascade {
            self.notify(CursorSide::Right, target);
        }
        Ok(())
    }

    /// Animates the right cursor onto `index`. Mirror of
    /// `set_left_selection`; valid indices are `1..=marks-1`.
    pub fn set_right_selection(&mut self, index: usize) -> Result<()> {
        let max = self.grid.max_index();
        if index == 0 || index > max {
            bail!("right selection must be within 1..={} (got {})", max, index);
        }
        if self.right.continuous_index() == index as f32 {
            return Ok(());
        }

        let duration = self.style.snap_duration_ms();
        self.right.set_settled_index(index);
        let from = self.right.continuous_index();
        self.right.animation_mut().start(from, index, duration);

        let mut cascade = None;
        if self.left.continuous_index() >= index as f32 {
            let target = index - 1;
            self.left.set_settled_index(target);
            let left_from = self.left.continuous_index();
            self.left.animation_mut().start(left_from, target, duration);
            cascade = Some(target);
            debug!("right selection cascaded left cursor to mark {}", target);
        }

        self.notify(CursorSide::Right, index);
        if let Some(target) = cascade {
            self.notify(CursorSide::Left, target);
        }
        Ok(())
    }

    /// Replaces the whole mark set.
    ///
    /// Resets the cursors to the extremes (left on the first mark, right on
    /// the last), dropping any binding or animation. Fails on fewer than
    /// two labels, leaving everything unchanged. No notifications fire.
    pub fn set_marks(&mut self, labels: Vec<String>) -> Result<()> {
        self.grid.replace_labels(labels)?;
        self.left.reset_to(0);
        self.right.reset_to(self.grid.max_index());
        self.sync_cursor_rects();
        Ok(())
    }

    // ===== Listener =====

    /// Registers the change listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: Box<dyn CursorChangeListener>) {
        self.listener = Some(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    fn notify(&mut self, side: CursorSide, index: usize) {
        if let Some(listener) = self.listener.as_deref_mut() {
            let label = self.grid.label(index);
            match side {
                CursorSide::Left => listener.on_left_cursor_changed(index, label),
                CursorSide::Right => listener.on_right_cursor_changed(index, label),
            }
        }
    }

    // ===== Accessors =====

    /// Mark the left cursor currently rests on (or is heading to).
    pub fn left_index(&self) -> usize {
        self.left.settled_index()
    }

    /// Mark the right cursor currently rests on (or is heading to).
    pub fn right_index(&self) -> usize {
        self.right.settled_index()
    }

    pub fn marks(&self) -> &MarkGrid {
        &self.grid
    }

    pub fn style(&self) -> &SeekbarStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut SeekbarStyle {
        &mut self.style
    }

    /// The track bar area, for painting.
    pub fn track_rect(&self) -> egui::Rect {
        self.track_rect
    }

    pub fn left_cursor(&self) -> &CursorState {
        &self.left
    }

    pub fn right_cursor(&self) -> &CursorState {
        &self.right
    }
}

fn opposite(side: CursorSide) -> CursorSide {
    match side {
        CursorSide::Left => CursorSide::Right,
        CursorSide::Right => CursorSide::Left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerId;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Event = (CursorSide, usize, String);

    /// Listener that records every notification for later inspection.
    struct RecordingListener {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl CursorChangeListener for RecordingListener {
        fn on_left_cursor_changed(&mut self, index: usize, label: &str) {
            self.events
                .borrow_mut()
                .push((CursorSide::Left, index, label.to_string()));
        }

        fn on_right_cursor_changed(&mut self, index: usize, label: &str) {
            self.events
                .borrow_mut()
                .push((CursorSide::Right, index, label.to_string()));
        }
    }

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| i.to_string()).collect()
    }

    /// Seekbar with 6 marks laid out so part length is exactly 100px,
    /// plus a handle on the recorded notifications.
    fn seekbar() -> (RangeSeekbar, Rc<RefCell<Vec<Event>>>) {
        let mut bar = RangeSeekbar::new(labels(6)).unwrap();
        let events = Rc::new(RefCell::new(Vec::new()));
        bar.set_listener(Box::new(RecordingListener {
            events: events.clone(),
        }));
        bar.update_layout(egui::Rect::from_min_max(
            egui::pos2(0.0, 0.0),
            egui::pos2(524.0, 54.0),
        ));
        (bar, events)
    }

    fn down(bar: &mut RangeSeekbar, id: PointerId, x: f32, y: f32) -> bool {
        bar.handle_pointer_event(&PointerEvent::new(id, x, y, PointerPhase::Down))
    }

    fn move_to(bar: &mut RangeSeekbar, id: PointerId, x: f32) -> bool {
        bar.handle_pointer_event(&PointerEvent::new(id, x, 35.0, PointerPhase::Move))
    }

    fn up(bar: &mut RangeSeekbar, id: PointerId, x: f32) -> bool {
        bar.handle_pointer_event(&PointerEvent::new(id, x, 35.0, PointerPhase::Up))
    }

    /// Runs animations to completion (two ticks: capture start, then jump
    /// past the duration).
    fn settle(bar: &mut RangeSeekbar, now: f64) {
        bar.tick(now);
        bar.tick(now + 10.0);
        assert!(!bar.is_animating());
    }

    fn assert_invariants(bar: &RangeSeekbar) {
        let max = bar.marks().max_index() as f32;
        let left = bar.left_cursor().continuous_index();
        let right = bar.right_cursor().continuous_index();
        assert!(left >= 0.0, "left {} below track", left);
        assert!(right <= max, "right {} above track", right);
        assert!(left <= right, "cursors crossed: {} > {}", left, right);
        assert!(bar.left_index() < bar.right_index());
    }

    #[test]
    fn test_construction_state_without_callbacks() {
        let (bar, events) = seekbar();
        assert_eq!(bar.left_index(), 0);
        assert_eq!(bar.right_index(), 5);
        assert!(events.borrow().is_empty());
        assert_invariants(&bar);
    }

    #[test]
    fn test_layout_places_cursors_on_their_marks() {
        let (bar, _) = seekbar();
        // Part length 100; left centered at track start, right at track end.
        assert_eq!(bar.marks().part_length(), 100.0);
        assert_eq!(bar.left_cursor().rect().center().x, 12.0);
        assert_eq!(bar.right_cursor().rect().center().x, 512.0);
    }

    #[test]
    fn test_down_binds_first_hit_left_before_right() {
        let (mut bar, _) = seekbar();
        assert!(down(&mut bar, 1, 12.0, 35.0));
        assert!(bar.left_cursor().is_bound_to(1));
        assert!(!bar.right_cursor().is_bound());

        // A second pointer landing on the already-bound cursor is ignored.
        assert!(!down(&mut bar, 2, 12.0, 35.0));
        assert!(bar.left_cursor().is_bound_to(1));

        // Down outside both hit rects binds nothing.
        assert!(!down(&mut bar, 3, 250.0, 35.0));
    }

    #[test]
    fn test_moves_from_unbound_pointers_are_ignored() {
        let (mut bar, _) = seekbar();
        assert!(!move_to(&mut bar, 9, 300.0));
        assert_eq!(bar.left_cursor().continuous_index(), 0.0);
        assert_eq!(bar.right_cursor().continuous_index(), 5.0);
    }

    #[test]
    fn test_snap_down_and_up_after_release() {
        let (mut bar, events) = seekbar();

        // Drag the left cursor to 2.3: settles back to 2.
        down(&mut bar, 1, 12.0, 35.0);
        move_to(&mut bar, 1, 242.0);
        assert!((bar.left_cursor().continuous_index() - 2.3).abs() < 1e-5);
        up(&mut bar, 1, 242.0);
        assert_eq!(bar.left_index(), 2);
        assert!(bar.left_cursor().is_animating());
        settle(&mut bar, 1.0);
        assert_eq!(bar.left_cursor().continuous_index(), 2.0);
        assert_eq!(
            events.borrow().last().unwrap(),
            &(CursorSide::Left, 2, "2".to_string())
        );

        // Drag on to 2.6: settles forward to 3.
        down(&mut bar, 1, 212.0, 35.0);
        move_to(&mut bar, 1, 272.0);
        up(&mut bar, 1, 272.0);
        assert_eq!(bar.left_index(), 3);
        settle(&mut bar, 2.0);
        assert_eq!(bar.left_cursor().continuous_index(), 3.0);
        assert_invariants(&bar);
    }

    #[test]
    fn test_release_at_exact_midpoint_stays() {
        let (mut bar, events) = seekbar();

        down(&mut bar, 1, 12.0, 35.0);
        move_to(&mut bar, 1, 162.0);
        assert_eq!(bar.left_cursor().continuous_index(), 1.5);
        up(&mut bar, 1, 162.0);

        // Halfway exactly: no target decided, no animation, no callback.
        assert!(!bar.left_cursor().is_animating());
        assert_eq!(bar.left_cursor().continuous_index(), 1.5);
        assert_eq!(bar.left_index(), 0);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_push_through_displaces_free_right_cursor() {
        let (mut bar, events) = seekbar();
        bar.set_left_selection(1).unwrap();
        settle(&mut bar, 0.0);
        bar.set_right_selection(2).unwrap();
        settle(&mut bar, 20.0);
        events.borrow_mut().clear();

        // Drag left toward right; right is free (unbound, not at max, idle).
        down(&mut bar, 1, 112.0, 35.0);
        move_to(&mut bar, 1, 150.0);
        assert!(move_to(&mut bar, 1, 190.0));

        // Right got shoved one mark out, with its callback at decision time.
        assert_eq!(bar.right_index(), 3);
        assert!(bar.right_cursor().is_animating());
        assert_eq!(
            *events.borrow(),
            vec![(CursorSide::Right, 3, "3".to_string())]
        );

        up(&mut bar, 1, 190.0);
        settle(&mut bar, 40.0);
        assert_eq!(bar.left_index(), 2);
        assert_eq!(bar.right_index(), 3);
        assert_ne!(bar.left_index(), bar.right_index());
        assert_invariants(&bar);
    }

    #[test]
    fn test_collision_clamps_against_bound_right_cursor() {
        let (mut bar, events) = seekbar();
        bar.set_left_selection(1).unwrap();
        settle(&mut bar, 0.0);
        bar.set_right_selection(2).unwrap();
        settle(&mut bar, 20.0);
        events.borrow_mut().clear();

        // Right is held by another pointer: the drag clamps edge-to-edge.
        down(&mut bar, 2, 212.0, 35.0);
        down(&mut bar, 1, 112.0, 35.0);
        move_to(&mut bar, 1, 190.0);

        assert!((bar.left_cursor().continuous_index() - 1.76).abs() < 1e-5);
        assert!(
            (bar.left_cursor().rect().right() - bar.right_cursor().rect().left()).abs() < 1e-3
        );
        assert_eq!(bar.right_index(), 2);
        assert!(!bar.right_cursor().is_animating());
        assert!(events.borrow().is_empty());
        assert_invariants(&bar);
    }

    #[test]
    fn test_set_left_selection_cascades_right() {
        let (mut bar, events) = seekbar();
        bar.set_right_selection(1).unwrap();
        settle(&mut bar, 0.0);
        events.borrow_mut().clear();

        bar.set_left_selection(3).unwrap();
        assert_eq!(bar.left_index(), 3);
        assert_eq!(bar.right_index(), 4);
        assert_eq!(
            *events.borrow(),
            vec![
                (CursorSide::Left, 3, "3".to_string()),
                (CursorSide::Right, 4, "4".to_string()),
            ]
        );

        settle(&mut bar, 10.0);
        assert_eq!(bar.left_cursor().continuous_index(), 3.0);
        assert_eq!(bar.right_cursor().continuous_index(), 4.0);
        assert_invariants(&bar);
    }

    #[test]
    fn test_set_right_selection_cascades_left() {
        let (mut bar, events) = seekbar();
        bar.set_left_selection(3).unwrap();
        settle(&mut bar, 0.0);
        events.borrow_mut().clear();

        bar.set_right_selection(2).unwrap();
        assert_eq!(bar.right_index(), 2);
        assert_eq!(bar.left_index(), 1);
        assert_eq!(events.borrow().len(), 2);
        settle(&mut bar, 10.0);
        assert_invariants(&bar);
    }

    #[test]
    fn test_selection_range_validation() {
        let (mut bar, _) = seekbar();
        // Left rejects the first mark even though drags may settle there,
        // and must leave room for the right cursor.
        assert!(bar.set_left_selection(0).is_err());
        assert!(bar.set_left_selection(5).is_err());
        assert!(bar.set_left_selection(4).is_ok());

        assert!(bar.set_right_selection(0).is_err());
        assert!(bar.set_right_selection(6).is_err());

        // Failed calls left no trace.
        let (mut bar, events) = seekbar();
        assert!(bar.set_left_selection(9).is_err());
        assert_eq!(bar.left_index(), 0);
        assert!(!bar.is_animating());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_set_selection_is_idempotent_when_settled() {
        let (mut bar, events) = seekbar();
        bar.set_left_selection(2).unwrap();
        settle(&mut bar, 0.0);
        events.borrow_mut().clear();

        bar.set_left_selection(2).unwrap();
        assert!(!bar.is_animating());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_getters_report_target_during_animation() {
        let (mut bar, _) = seekbar();
        bar.set_left_selection(2).unwrap();
        // Animation has not even ticked yet: the settled index already
        // reports the decided target.
        assert_eq!(bar.left_index(), 2);
        assert_eq!(bar.left_cursor().continuous_index(), 0.0);
    }

    #[test]
    fn test_set_marks_resets_both_cursors() {
        let (mut bar, events) = seekbar();
        bar.set_left_selection(2).unwrap();
        bar.set_right_selection(4).unwrap();
        settle(&mut bar, 0.0);
        events.borrow_mut().clear();

        bar.set_marks(labels(9)).unwrap();
        assert_eq!(bar.left_index(), 0);
        assert_eq!(bar.right_index(), 8);
        assert_eq!(bar.left_cursor().continuous_index(), 0.0);
        assert_eq!(bar.right_cursor().continuous_index(), 8.0);
        assert!(!bar.is_animating());
        assert!(events.borrow().is_empty());

        // Invalid replacement leaves the current grid alone.
        assert!(bar.set_marks(labels(1)).is_err());
        assert_eq!(bar.marks().count(), 9);
    }

    #[test]
    fn test_cancel_behaves_like_release() {
        let (mut bar, _) = seekbar();
        down(&mut bar, 1, 12.0, 35.0);
        move_to(&mut bar, 1, 242.0);
        bar.handle_pointer_event(&PointerEvent::new(1, 242.0, 35.0, PointerPhase::Cancel));

        assert!(!bar.left_cursor().is_bound());
        assert_eq!(bar.left_index(), 2);
        assert!(bar.left_cursor().is_animating());
    }

    #[test]
    fn test_release_replaces_running_animation() {
        let (mut bar, _) = seekbar();

        // Start a programmatic animation, then grab and re-release the
        // cursor mid-flight: the release snap replaces the old animation.
        bar.set_left_selection(2).unwrap();
        bar.tick(0.0);
        bar.tick(0.06);
        let mid = bar.left_cursor().continuous_index();
        assert!((mid - 1.68).abs() < 1e-4, "unexpected mid position {}", mid);

        bar.update_layout(egui::Rect::from_min_max(
            egui::pos2(0.0, 0.0),
            egui::pos2(524.0, 54.0),
        ));
        let grab_x = bar.left_cursor().rect().center().x;
        down(&mut bar, 1, grab_x, 35.0);
        up(&mut bar, 1, grab_x);

        assert!(bar.left_cursor().is_animating());
        settle(&mut bar, 100.0);
        let settled = bar.left_cursor().continuous_index();
        assert_eq!(settled, settled.trunc());
        assert_invariants(&bar);
    }
}

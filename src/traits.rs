//! Listener seam between the seekbar core and its embedder.

/// Receives settled-mark changes from a `RangeSeekbar`.
///
/// Exactly one listener slot exists per widget; registering a new listener
/// replaces the previous one. Callbacks fire synchronously at the moment a
/// new target mark is decided (drag displacement, release snap, or
/// programmatic selection) — not when the settle animation finishes — and
/// never for the initial construction state.
pub trait CursorChangeListener {
    /// Left cursor committed to `index`, whose label is `label`.
    fn on_left_cursor_changed(&mut self, index: usize, label: &str);

    /// Right cursor committed to `index`, whose label is `label`.
    fn on_right_cursor_changed(&mut self, index: usize, label: &str);
}

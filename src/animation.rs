//! Time-based snap interpolation for a single cursor.
//!
//! A snap is a plain `{active, from, to, start_time, duration}` value
//! stepped by the external frame loop through `position_at(now)`; the core
//! owns no timer. The curve decelerates, so the cursor covers most of the
//! distance early and eases into the mark.

/// Default snap duration in milliseconds.
pub const DEFAULT_SNAP_DURATION_MS: u64 = 100;

/// Decelerating ease: fast start, slow settle.
fn decelerate(fraction: f32) -> f32 {
    let inverse = 1.0 - fraction;
    1.0 - inverse * inverse
}

/// Result of stepping a snap animation at a given time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapProgress {
    /// No animation is running.
    Idle,
    /// Animation in flight; the value is the current fractional mark index.
    Running(f32),
    /// Animation just completed; the value is the exact target index and
    /// the animation has been deactivated.
    Finished(f32),
}

/// One in-flight (or idle) snap for one cursor.
///
/// At most one snap runs per cursor; `start` replaces whatever was
/// running. The start time is captured lazily on the first `position_at`
/// call so the core never reads a wall clock itself.
#[derive(Debug, Clone, Copy)]
pub struct SnapAnimation {
    active: bool,
    from_index: f32,
    to_index: usize,
    start_time: Option<f64>,
    duration_ms: u64,
}

impl SnapAnimation {
    /// An inactive animation slot.
    pub fn idle() -> Self {
        Self {
            active: false,
            from_index: 0.0,
            to_index: 0,
            start_time: None,
            duration_ms: DEFAULT_SNAP_DURATION_MS,
        }
    }

    /// Starts (or restarts) an interpolation toward `to_index`.
    pub fn start(&mut self, from_index: f32, to_index: usize, duration_ms: u64) {
        self.active = true;
        self.from_index = from_index;
        self.to_index = to_index;
        self.start_time = None;
        self.duration_ms = duration_ms;
    }

    /// Cancels any in-flight interpolation, leaving the cursor wherever the
    /// last tick put it.
    pub fn abort(&mut self) {
        self.active = false;
        self.start_time = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The mark this animation is (or was last) heading to.
    pub fn target(&self) -> usize {
        self.to_index
    }

    /// Steps the interpolation to `now` (seconds).
    ///
    /// The first call after `start` pins the start time to `now`. Once the
    /// elapsed time reaches the duration the exact target is reported and
    /// the slot deactivates itself.
    pub fn position_at(&mut self, now: f64) -> SnapProgress {
        if !self.active {
            return SnapProgress::Idle;
        }

        let start = *self.start_time.get_or_insert(now);
        let duration = self.duration_ms.max(1) as f64 / 1000.0;
        let linear = ((now - start).max(0.0) / duration).clamp(0.0, 1.0) as f32;

        if linear >= 1.0 {
            self.abort();
            SnapProgress::Finished(self.to_index as f32)
        } else {
            let eased = decelerate(linear);
            SnapProgress::Running(self.from_index + (self.to_index as f32 - self.from_index) * eased)
        }
    }
}

impl Default for SnapAnimation {
    fn default() -> Self {
        Self::idle()
    }
}

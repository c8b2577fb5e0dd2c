//! Centralized application state for the seekbar demo.
//!
//! Owns the widget instance, the listener sink it reports into, and the
//! UI-facing state (event log, error line, control scratch values). All
//! widget mutation goes through intent-revealing methods here so panels
//! never poke the widget directly.

use once_cell::sync::Lazy;
use rseekbar::{CursorChangeListener, CursorSide, RangeSeekbar, SeekbarStyle};
use std::cell::RefCell;
use std::rc::Rc;

/// Built-in mark sets selectable from the control panel.
pub static MARK_SETS: Lazy<Vec<(&str, &[&str])>> = Lazy::new(|| {
    vec![
        ("Price", &["0", "20", "40", "60", "80", "100"] as &[&str]),
        ("Size", &["XS", "S", "M", "L", "XL"]),
        ("Rating", &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]),
    ]
});

/// Most recent log lines kept visible.
const MAX_LOG_LINES: usize = 100;

type ChangeSink = Rc<RefCell<Vec<(CursorSide, usize, String)>>>;

/// Listener that queues notifications for the event log.
///
/// The widget calls this synchronously mid-frame, so notifications are
/// buffered here and drained into the log once per frame.
struct LogListener {
    sink: ChangeSink,
}

impl CursorChangeListener for LogListener {
    fn on_left_cursor_changed(&mut self, index: usize, label: &str) {
        self.sink
            .borrow_mut()
            .push((CursorSide::Left, index, label.to_string()));
    }

    fn on_right_cursor_changed(&mut self, index: usize, label: &str) {
        self.sink
            .borrow_mut()
            .push((CursorSide::Right, index, label.to_string()));
    }
}

/// Main application state for the demo.
pub struct AppState {
    /// The widget under demonstration
    pub seekbar: RangeSeekbar,

    /// Which built-in mark set is loaded
    pub mark_set: usize,

    /// Dark appearance toggle
    pub dark_mode: bool,

    /// Cursor change notifications, newest last
    pub event_log: Vec<String>,

    /// Error from the last rejected API call, if any
    pub error_message: Option<String>,

    /// Control panel scratch: requested left/right selection indices
    pub left_request: usize,
    pub right_request: usize,

    changes: ChangeSink,
}

impl AppState {
    /// Creates the demo state with one of the built-in mark sets loaded.
    pub fn new(mark_set: usize, dark_mode: bool) -> Self {
        let mark_set = mark_set.min(MARK_SETS.len() - 1);
        let labels: Vec<String> = MARK_SETS[mark_set].1.iter().map(|s| s.to_string()).collect();
        let style = if dark_mode {
            SeekbarStyle::dark()
        } else {
            SeekbarStyle::light()
        };

        let mut seekbar =
            RangeSeekbar::with_style(labels, style).expect("built-in mark sets have >= 2 labels");
        let changes: ChangeSink = Rc::new(RefCell::new(Vec::new()));
        seekbar.set_listener(Box::new(LogListener {
            sink: changes.clone(),
        }));

        let right_request = seekbar.marks().max_index();
        Self {
            seekbar,
            mark_set,
            dark_mode,
            event_log: Vec::new(),
            error_message: None,
            left_request: 1,
            right_request,
            changes,
        }
    }

    /// Moves buffered listener notifications into the visible event log.
    ///
    /// Called once per frame after all widget mutation for that frame.
    pub fn drain_changes(&mut self) {
        for (side, index, label) in self.changes.borrow_mut().drain(..) {
            let side = match side {
                CursorSide::Left => "left",
                CursorSide::Right => "right",
            };
            self.event_log
                .push(format!("{} cursor changed: mark {} ({})", side, index, label));
        }
        if self.event_log.len() > MAX_LOG_LINES {
            let excess = self.event_log.len() - MAX_LOG_LINES;
            self.event_log.drain(0..excess);
        }
    }

    /// Applies a programmatic left selection, surfacing rejections.
    pub fn request_left_selection(&mut self, index: usize) {
        match self.seekbar.set_left_selection(index) {
            Ok(()) => self.error_message = None,
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    /// Applies a programmatic right selection, surfacing rejections.
    pub fn request_right_selection(&mut self, index: usize) {
        match self.seekbar.set_right_selection(index) {
            Ok(()) => self.error_message = None,
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    /// Loads one of the built-in mark sets, resetting both cursors.
    pub fn load_mark_set(&mut self, index: usize) {
        if index >= MARK_SETS.len() {
            return;
        }
        let labels: Vec<String> = MARK_SETS[index].1.iter().map(|s| s.to_string()).collect();
        match self.seekbar.set_marks(labels) {
            Ok(()) => {
                self.mark_set = index;
                self.error_message = None;
                self.left_request = 1;
                self.right_request = self.seekbar.marks().max_index();
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    /// Switches between the light and dark widget palettes.
    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
        *self.seekbar.style_mut() = if dark {
            SeekbarStyle::dark()
        } else {
            SeekbarStyle::light()
        };
    }
}

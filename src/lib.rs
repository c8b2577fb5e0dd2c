pub mod animation;
pub mod cursor;
pub mod drag;
pub mod input;
pub mod marks;
pub mod seekbar;
pub mod snap;
pub mod style;
pub mod traits;

// Export the widget and its configuration
pub use seekbar::RangeSeekbar;
pub use style::SeekbarStyle;

// Export the input vocabulary embedders translate into
pub use input::{PointerEvent, PointerId, PointerPhase};

// Export the listener seam
pub use traits::CursorChangeListener;

// Export supporting state types for renderers and tests
pub use animation::{SnapAnimation, SnapProgress, DEFAULT_SNAP_DURATION_MS};
pub use cursor::{CursorSide, CursorState};
pub use marks::MarkGrid;

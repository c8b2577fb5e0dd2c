//! Mark grid: the ordered set of labeled positions along the track.
//!
//! Converts between fractional mark indices and pixel offsets. The grid is
//! laid out against the current track span and must be recomputed whenever
//! the track geometry or the label set changes; a stale `part_length`
//! corrupts the snap and collision math, not just the drawing.

use anyhow::{bail, Result};

/// Ordered mark labels plus the pixel geometry of the track they sit on.
///
/// `part_length` is the pixel distance between two adjacent marks:
/// `track_width / (labels.len() - 1)`. It is zero until the first
/// `relayout` call, and callers are expected to treat a non-positive
/// `part_length` as "no geometry yet" (see `is_laid_out`).
#[derive(Debug, Clone)]
pub struct MarkGrid {
    labels: Vec<String>,
    track_left: f32,
    track_right: f32,
    part_length: f32,
}

impl MarkGrid {
    /// Creates a grid from the given labels.
    ///
    /// Fails if fewer than two labels are supplied; a single mark leaves no
    /// room for two ordered cursors.
    pub fn new(labels: Vec<String>) -> Result<Self> {
        if labels.len() < 2 {
            bail!("mark labels must contain at least 2 entries (got {})", labels.len());
        }
        Ok(Self {
            labels,
            track_left: 0.0,
            track_right: 0.0,
            part_length: 0.0,
        })
    }

    /// Replaces the whole label set, keeping the current track geometry.
    ///
    /// Fails on fewer than two labels; the previous labels are kept on
    /// error. Cursor resets are the coordinator's job.
    pub fn replace_labels(&mut self, labels: Vec<String>) -> Result<()> {
        if labels.len() < 2 {
            bail!("mark labels must contain at least 2 entries (got {})", labels.len());
        }
        self.labels = labels;
        self.recompute_part_length();
        Ok(())
    }

    /// Updates the track span and recomputes `part_length`.
    pub fn relayout(&mut self, track_left: f32, track_right: f32) {
        self.track_left = track_left;
        self.track_right = track_right;
        self.recompute_part_length();
    }

    fn recompute_part_length(&mut self) {
        let width = self.track_right - self.track_left;
        if width > 0.0 {
            self.part_length = width / (self.labels.len() - 1) as f32;
        } else {
            self.part_length = 0.0;
        }
    }

    /// Number of marks.
    pub fn count(&self) -> usize {
        self.labels.len()
    }

    /// Highest valid mark index (`count() - 1`).
    pub fn max_index(&self) -> usize {
        self.labels.len() - 1
    }

    /// Label text at `index`.
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// All labels in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Pixel distance between adjacent marks.
    pub fn part_length(&self) -> f32 {
        self.part_length
    }

    /// True once the grid has been laid out against a non-degenerate track.
    pub fn is_laid_out(&self) -> bool {
        self.part_length > 0.0
    }

    /// Converts a fractional mark index to an X coordinate on the track.
    pub fn index_to_pixel(&self, index: f32) -> f32 {
        self.track_left + index * self.part_length
    }

    /// Converts an X coordinate back to a fractional mark index.
    ///
    /// Returns 0.0 while the track is degenerate (zero-width layout pass).
    pub fn pixel_to_index(&self, x: f32) -> f32 {
        if self.part_length <= 0.0 {
            return 0.0;
        }
        (x - self.track_left) / self.part_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_rejects_too_few_labels() {
        assert!(MarkGrid::new(Vec::new()).is_err());
        assert!(MarkGrid::new(labels(1)).is_err());
        assert!(MarkGrid::new(labels(2)).is_ok());
    }

    #[test]
    fn test_replace_keeps_previous_labels_on_error() {
        let mut grid = MarkGrid::new(labels(3)).unwrap();
        assert!(grid.replace_labels(labels(1)).is_err());
        assert_eq!(grid.count(), 3);
    }

    #[test]
    fn test_part_length_follows_layout() {
        let mut grid = MarkGrid::new(labels(6)).unwrap();
        assert!(!grid.is_laid_out());

        grid.relayout(12.0, 512.0);
        assert_eq!(grid.part_length(), 100.0);

        // Fewer marks over the same span widen the parts.
        grid.replace_labels(labels(2)).unwrap();
        assert_eq!(grid.part_length(), 500.0);
    }

    #[test]
    fn test_index_pixel_round_trip() {
        let mut grid = MarkGrid::new(labels(6)).unwrap();
        grid.relayout(12.0, 512.0);

        assert_eq!(grid.index_to_pixel(0.0), 12.0);
        assert_eq!(grid.index_to_pixel(5.0), 512.0);
        assert_eq!(grid.pixel_to_index(262.0), 2.5);
        let x = grid.index_to_pixel(3.25);
        assert!((grid.pixel_to_index(x) - 3.25).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_track_is_guarded() {
        let mut grid = MarkGrid::new(labels(4)).unwrap();
        grid.relayout(100.0, 100.0);
        assert!(!grid.is_laid_out());
        assert_eq!(grid.pixel_to_index(250.0), 0.0);
    }
}

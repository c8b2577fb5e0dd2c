//! Appearance and geometry configuration for the seekbar.
//!
//! Colors and dimensions are validated on every set: an invisible track or
//! a zero-height bar is a configuration bug, so the setters reject the
//! value and keep the previous one instead of silently drawing nothing.

use anyhow::{bail, Result};
use egui::{Color32, Vec2};

use crate::animation::DEFAULT_SNAP_DURATION_MS;

/// Complete visual configuration of a seekbar.
///
/// Construction defaults match the classic widget: pink selected range on
/// a light gray track, black mark labels. Mutations go through validated
/// setters; read access is direct.
#[derive(Debug, Clone)]
pub struct SeekbarStyle {
    text_color_normal: Color32,
    text_color_selected: Color32,
    track_color_normal: Color32,
    track_color_selected: Color32,
    track_height: f32,
    text_size: f32,
    margin_between: f32,
    left_cursor_size: Vec2,
    right_cursor_size: Vec2,
    snap_duration_ms: u64,
}

impl Default for SeekbarStyle {
    fn default() -> Self {
        Self {
            text_color_normal: Color32::BLACK,
            text_color_selected: Color32::from_rgb(242, 79, 115),
            track_color_normal: Color32::from_rgb(218, 215, 215),
            track_color_selected: Color32::from_rgb(242, 79, 115),
            track_height: 10.0,
            text_size: 15.0,
            margin_between: 15.0,
            left_cursor_size: Vec2::splat(24.0),
            right_cursor_size: Vec2::splat(24.0),
            snap_duration_ms: DEFAULT_SNAP_DURATION_MS,
        }
    }
}

impl SeekbarStyle {
    /// The default palette on a light background.
    pub fn light() -> Self {
        Self::default()
    }

    /// Palette adjusted for dark backgrounds.
    pub fn dark() -> Self {
        Self {
            text_color_normal: Color32::from_rgb(200, 200, 200),
            track_color_normal: Color32::from_rgb(70, 68, 68),
            ..Self::default()
        }
    }

    // ===== Colors =====

    pub fn text_color_normal(&self) -> Color32 {
        self.text_color_normal
    }

    pub fn set_text_color_normal(&mut self, color: Color32) -> Result<()> {
        Self::check_visible(color, "mark text")?;
        self.text_color_normal = color;
        Ok(())
    }

    pub fn text_color_selected(&self) -> Color32 {
        self.text_color_selected
    }

    pub fn set_text_color_selected(&mut self, color: Color32) -> Result<()> {
        Self::check_visible(color, "selected mark text")?;
        self.text_color_selected = color;
        Ok(())
    }

    pub fn track_color_normal(&self) -> Color32 {
        self.track_color_normal
    }

    pub fn set_track_color_normal(&mut self, color: Color32) -> Result<()> {
        Self::check_visible(color, "track")?;
        self.track_color_normal = color;
        Ok(())
    }

    pub fn track_color_selected(&self) -> Color32 {
        self.track_color_selected
    }

    pub fn set_track_color_selected(&mut self, color: Color32) -> Result<()> {
        Self::check_visible(color, "selected track section")?;
        self.track_color_selected = color;
        Ok(())
    }

    fn check_visible(color: Color32, what: &str) -> Result<()> {
        if color.a() == 0 {
            bail!("{} color is fully transparent, which would make it invisible", what);
        }
        Ok(())
    }

    // ===== Dimensions =====

    pub fn track_height(&self) -> f32 {
        self.track_height
    }

    pub fn set_track_height(&mut self, height: f32) -> Result<()> {
        if height <= 0.0 {
            bail!("track height must be positive (got {})", height);
        }
        self.track_height = height;
        Ok(())
    }

    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    pub fn set_text_size(&mut self, size: f32) -> Result<()> {
        if size <= 0.0 {
            bail!("mark text size must be positive (got {})", size);
        }
        self.text_size = size;
        Ok(())
    }

    pub fn margin_between(&self) -> f32 {
        self.margin_between
    }

    /// Space between the mark text row and the track. Zero is allowed.
    pub fn set_margin_between(&mut self, margin: f32) -> Result<()> {
        if margin < 0.0 {
            bail!("margin between text and track cannot be negative (got {})", margin);
        }
        self.margin_between = margin;
        Ok(())
    }

    pub fn left_cursor_size(&self) -> Vec2 {
        self.left_cursor_size
    }

    pub fn set_left_cursor_size(&mut self, size: Vec2) -> Result<()> {
        Self::check_cursor_size(size, "left")?;
        self.left_cursor_size = size;
        Ok(())
    }

    pub fn right_cursor_size(&self) -> Vec2 {
        self.right_cursor_size
    }

    pub fn set_right_cursor_size(&mut self, size: Vec2) -> Result<()> {
        Self::check_cursor_size(size, "right")?;
        self.right_cursor_size = size;
        Ok(())
    }

    fn check_cursor_size(size: Vec2, which: &str) -> Result<()> {
        if size.x <= 0.0 || size.y <= 0.0 {
            bail!("{} cursor size must be positive (got {}x{})", which, size.x, size.y);
        }
        Ok(())
    }

    // ===== Animation =====

    pub fn snap_duration_ms(&self) -> u64 {
        self.snap_duration_ms
    }

    pub fn set_snap_duration_ms(&mut self, duration_ms: u64) {
        self.snap_duration_ms = duration_ms;
    }

    // ===== Measurement =====

    /// Height the widget needs: the taller of track and cursors, plus the
    /// text row and the margin separating them.
    pub fn desired_height(&self) -> f32 {
        let cursor_h = self.left_cursor_size.y.max(self.right_cursor_size.y);
        self.track_height.max(cursor_h) + self.margin_between + self.text_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_color_is_rejected() {
        let mut style = SeekbarStyle::default();
        let before = style.track_color_normal();

        assert!(style.set_track_color_normal(Color32::TRANSPARENT).is_err());
        assert_eq!(style.track_color_normal(), before);

        assert!(style
            .set_text_color_selected(Color32::from_rgba_unmultiplied(255, 0, 0, 0))
            .is_err());
    }

    #[test]
    fn test_nonpositive_dimensions_are_rejected() {
        let mut style = SeekbarStyle::default();
        assert!(style.set_track_height(0.0).is_err());
        assert!(style.set_track_height(-3.0).is_err());
        assert!(style.set_text_size(0.0).is_err());
        assert!(style.set_left_cursor_size(Vec2::new(0.0, 24.0)).is_err());
        assert_eq!(style.track_height(), 10.0);
    }

    #[test]
    fn test_zero_margin_is_allowed() {
        let mut style = SeekbarStyle::default();
        assert!(style.set_margin_between(0.0).is_ok());
        assert!(style.set_margin_between(-1.0).is_err());
        assert_eq!(style.margin_between(), 0.0);
    }

    #[test]
    fn test_desired_height_takes_tallest_element() {
        let mut style = SeekbarStyle::default();
        // Cursors (24) dominate the track (10): 24 + 15 + 15.
        assert_eq!(style.desired_height(), 54.0);

        style.set_track_height(40.0).unwrap();
        assert_eq!(style.desired_height(), 70.0);
    }
}

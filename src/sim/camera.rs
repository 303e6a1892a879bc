//! Horizontal camera
//!
//! The camera has no state of its own: the offset is recomputed from the
//! player every tick, centered and clamped to the world, with no easing.

use glam::Vec2;

/// Viewport offset for a player centered at `player_center_x`.
///
/// Clamped to `[0, world_width - viewport_width]`; a world narrower than the
/// viewport pins the offset at 0.
#[inline]
pub fn camera_offset(player_center_x: f32, viewport_width: f32, world_width: f32) -> f32 {
    let max_offset = (world_width - viewport_width).max(0.0);
    (player_center_x - viewport_width / 2.0).clamp(0.0, max_offset)
}

/// Viewport over a world of fixed width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub viewport: Vec2,
    pub world_width: f32,
}

impl Camera {
    pub fn new(viewport: Vec2, world_width: f32) -> Self {
        Self {
            viewport,
            world_width,
        }
    }

    pub fn offset_for(&self, player_center_x: f32) -> f32 {
        camera_offset(player_center_x, self.viewport.x, self.world_width)
    }

    /// Map a world position into viewport space for the given offset
    #[inline]
    pub fn world_to_screen(offset_x: f32, pos: Vec2) -> Vec2 {
        Vec2::new(pos.x - offset_x, pos.y)
    }

    /// Whether a horizontal span `[left, right)` is at least partly visible
    pub fn is_visible(&self, offset_x: f32, left: f32, right: f32) -> bool {
        right > offset_x && left < offset_x + self.viewport.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_centers_player() {
        assert_eq!(camera_offset(1500.0, 800.0, 3000.0), 1100.0);
    }

    #[test]
    fn test_offset_clamped_at_edges() {
        assert_eq!(camera_offset(100.0, 800.0, 3000.0), 0.0);
        assert_eq!(camera_offset(2990.0, 800.0, 3000.0), 2200.0);
    }

    #[test]
    fn test_narrow_world_pins_offset() {
        assert_eq!(camera_offset(300.0, 800.0, 500.0), 0.0);
    }

    #[test]
    fn test_world_to_screen() {
        let p = Camera::world_to_screen(250.0, Vec2::new(300.0, 40.0));
        assert_eq!(p, Vec2::new(50.0, 40.0));
    }

    #[test]
    fn test_visibility() {
        let cam = Camera::new(Vec2::new(800.0, 600.0), 3000.0);
        assert!(cam.is_visible(100.0, 50.0, 120.0));
        assert!(!cam.is_visible(100.0, 20.0, 100.0));
        assert!(!cam.is_visible(100.0, 900.0, 950.0));
    }
}

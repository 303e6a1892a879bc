//! Coin Dash - a side-scrolling coin-collecting platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, platforms, coins, camera)
//! - `driver`: Frame driver, clock and intent polling
//! - `renderer`: Interchangeable vertex back-ends over frame snapshots
//! - `assets`: Asset manifest loading
//! - `settings`: Tunable configuration

pub mod assets;
pub mod driver;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetSource, Assets};
pub use driver::{FrameDriver, Game};
pub use error::LoadError;
pub use settings::{BackendKind, Settings};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// World dimensions (pixels)
    pub const WORLD_WIDTH: f32 = 3000.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Player bounding box
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;

    /// Coin bounding box (square)
    pub const COIN_SIZE: f32 = 20.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Horizontal acceleration per tick while a direction is held
    pub const MOVE_ACCEL: f32 = 0.5;
    /// Horizontal speed cap
    pub const MAX_VX: f32 = 5.0;
    /// Velocity multiplier per tick with no direction held
    pub const FRICTION: f32 = 0.8;
    /// Below this |vx| the player counts as stopped
    pub const STOP_THRESHOLD: f32 = 0.1;
    /// Vertical velocity applied on jump (negative is up)
    pub const JUMP_VELOCITY: f32 = -12.0;

    /// Milliseconds between run-cycle frames
    pub const ANIM_FRAME_INTERVAL: f32 = 100.0;
    /// Animation phase while idle or airborne
    pub const IDLE_PHASE: u8 = 0;
    /// Run cycle phases (inclusive)
    pub const RUN_PHASE_FIRST: u8 = 1;
    pub const RUN_PHASE_LAST: u8 = 11;

    /// Ground strip tiling
    pub const GROUND_TILE_WIDTH: f32 = 60.0;
    pub const GROUND_TILE_HEIGHT: f32 = 40.0;
}

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap on both axes; rectangles sharing only an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_x(other) && self.top() < other.bottom() && self.bottom() > other.top()
    }

    /// Strict overlap of the horizontal extents only
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert_eq!(r.right(), 6.0);
        assert_eq!(r.bottom(), 8.0);
        assert_eq!(r.center(), Vec2::new(4.0, 5.5));
    }
}

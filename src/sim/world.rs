//! Static world geometry
//!
//! The world is a fixed-size box with a ground strip along the floor and a
//! handful of floating platforms. Nothing here changes after construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::consts::*;

/// Floating platforms of the default level: (x, y, width, height)
pub const FLOATING_PLATFORMS: [(f32, f32, f32, f32); 9] = [
    (300.0, 450.0, 150.0, 20.0),
    (550.0, 380.0, 120.0, 20.0),
    (800.0, 300.0, 150.0, 20.0),
    (1100.0, 420.0, 200.0, 20.0),
    (1400.0, 340.0, 120.0, 20.0),
    (1650.0, 260.0, 150.0, 20.0),
    (1950.0, 400.0, 180.0, 20.0),
    (2250.0, 320.0, 150.0, 20.0),
    (2550.0, 440.0, 200.0, 20.0),
];

/// Coin positions of the default level (top-left corners)
pub const COIN_SPAWNS: [(f32, f32); 13] = [
    (200.0, 520.0),
    (365.0, 410.0),
    (600.0, 340.0),
    (865.0, 260.0),
    (1000.0, 520.0),
    (1190.0, 380.0),
    (1450.0, 300.0),
    (1550.0, 520.0),
    (1715.0, 220.0),
    (2030.0, 360.0),
    (2315.0, 280.0),
    (2640.0, 400.0),
    (2800.0, 520.0),
];

/// Which part of the level a platform belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Tile of the contiguous strip along the world floor
    Ground,
    /// Isolated elevated rectangle
    Floating,
}

/// An immovable platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, kind: PlatformKind) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            kind,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.rect.top()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.rect.bottom()
    }
}

/// World bounds plus the platform set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    ground: Vec<Platform>,
    floating: Vec<Platform>,
}

impl World {
    pub fn new(width: f32, height: f32, ground: Vec<Platform>, floating: Vec<Platform>) -> Self {
        Self {
            width,
            height,
            ground,
            floating,
        }
    }

    /// The built-in level: full-width ground strip plus `FLOATING_PLATFORMS`
    pub fn default_level() -> Self {
        let ground = ground_strip(WORLD_WIDTH, WORLD_HEIGHT, GROUND_TILE_WIDTH, GROUND_TILE_HEIGHT);
        let floating = FLOATING_PLATFORMS
            .iter()
            .map(|&(x, y, w, h)| Platform::new(x, y, w, h, PlatformKind::Floating))
            .collect();
        Self::new(WORLD_WIDTH, WORLD_HEIGHT, ground, floating)
    }

    pub fn ground(&self) -> &[Platform] {
        &self.ground
    }

    pub fn floating(&self) -> &[Platform] {
        &self.floating
    }

    /// All platforms in collision order: ground tiles first, then floating
    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.ground.iter().chain(self.floating.iter())
    }

    /// Y coordinate of the ground surface (world floor if there is no ground)
    pub fn ground_top(&self) -> f32 {
        self.ground
            .iter()
            .map(Platform::top)
            .fold(self.height, f32::min)
    }

    /// Size of the world as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Tile the floor of a `width` x `height` world with `tile_w` x `tile_h` tiles.
/// The last tile is trimmed so the strip ends exactly at the world edge.
pub fn ground_strip(width: f32, height: f32, tile_w: f32, tile_h: f32) -> Vec<Platform> {
    let top = height - tile_h;
    let mut tiles = Vec::with_capacity((width / tile_w).ceil() as usize);
    let mut x = 0.0;
    while x < width {
        let w = tile_w.min(width - x);
        tiles.push(Platform::new(x, top, w, tile_h, PlatformKind::Ground));
        x += tile_w;
    }
    tiles
}

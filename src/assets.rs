//! Render asset metadata
//!
//! Pixel data is the host's business. What the core needs is the layout of
//! the player sprite sheet and where the tile art lives in the atlas, so the
//! sprite back-end can emit UVs. Loading must succeed before the first tick.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::RUN_PHASE_LAST;
use crate::error::LoadError;

/// Normalized texture rectangle: [u0, v0, u1, v1]
pub type UvRect = [f32; 4];

/// Grid layout of the player sprite sheet. Frame `i` is the run/idle phase `i`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub frame_width: u32,
    pub frame_height: u32,
    pub columns: u32,
    pub rows: u32,
}

impl SpriteSheet {
    /// Total frames in the grid (computed wide so huge grids cannot overflow)
    pub fn frame_count(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }

    /// UV rectangle of `frame` (wraps past the last frame).
    /// An empty grid maps every frame to the whole texture.
    pub fn frame_uv(&self, frame: u32) -> UvRect {
        if self.columns == 0 || self.rows == 0 {
            return [0.0, 0.0, 1.0, 1.0];
        }
        let frame = u64::from(frame) % self.frame_count();
        let columns = u64::from(self.columns);
        let col = frame % columns;
        let row = frame / columns;
        let du = 1.0 / self.columns as f32;
        let dv = 1.0 / self.rows as f32;
        let u0 = col as f32 * du;
        let v0 = row as f32 * dv;
        [u0, v0, u0 + du, v0 + dv]
    }
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self {
            frame_width: 32,
            frame_height: 48,
            columns: 12,
            rows: 1,
        }
    }
}

/// Locations of the static art in the tile atlas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileAtlas {
    pub ground: UvRect,
    pub platform: UvRect,
    pub coin: UvRect,
}

impl Default for TileAtlas {
    fn default() -> Self {
        Self {
            ground: [0.0, 0.0, 0.5, 0.5],
            platform: [0.5, 0.0, 1.0, 0.5],
            coin: [0.0, 0.5, 0.5, 1.0],
        }
    }
}

/// Everything the render back-ends need, resolved before the first tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assets {
    pub player_sheet: SpriteSheet,
    pub tiles: TileAtlas,
}

impl Assets {
    /// Reject manifests the renderer could not use
    pub fn validate(&self) -> Result<(), LoadError> {
        let sheet = &self.player_sheet;
        if sheet.frame_width == 0 || sheet.frame_height == 0 {
            return Err(LoadError::Invalid("sprite frame size must be non-zero".into()));
        }
        if sheet.columns == 0 || sheet.rows == 0 {
            return Err(LoadError::Invalid("sprite sheet grid must be non-empty".into()));
        }
        let needed = u64::from(RUN_PHASE_LAST) + 1;
        if sheet.frame_count() < needed {
            return Err(LoadError::Invalid(format!(
                "sprite sheet has {} frames, animation needs {}",
                sheet.frame_count(),
                needed
            )));
        }
        for (name, uv) in [
            ("ground", self.tiles.ground),
            ("platform", self.tiles.platform),
            ("coin", self.tiles.coin),
        ] {
            let in_range = uv.iter().all(|c| (0.0..=1.0).contains(c));
            if !in_range || uv[0] >= uv[2] || uv[1] >= uv[3] {
                return Err(LoadError::Invalid(format!("bad {name} uv rect {uv:?}")));
            }
        }
        Ok(())
    }
}

/// Anything that can produce the asset set
pub trait AssetSource {
    fn load(&mut self) -> Result<Assets, LoadError>;
}

/// Compiled-in defaults matching the stock sprite sheet
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAssets;

impl AssetSource for BuiltinAssets {
    fn load(&mut self) -> Result<Assets, LoadError> {
        Ok(Assets::default())
    }
}

/// JSON manifest on disk
#[derive(Debug, Clone)]
pub struct ManifestFile {
    path: PathBuf,
}

impl ManifestFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AssetSource for ManifestFile {
    fn load(&mut self) -> Result<Assets, LoadError> {
        let json = std::fs::read_to_string(&self.path).map_err(|e| LoadError::io(&self.path, e))?;
        let assets = parse_manifest(&json).map_err(|e| LoadError::parse(&self.path, e))?;
        assets.validate()?;
        log::info!("Loaded asset manifest from {}", self.path.display());
        Ok(assets)
    }
}

/// Parse a manifest document without validating it
pub fn parse_manifest(json: &str) -> Result<Assets, serde_json::Error> {
    serde_json::from_str(json)
}

//! Sprite-sheet back-end: textured quads sampled from the loaded atlas

use glam::Vec2;

use super::shapes::textured_quad;
use super::vertex::colors;
use super::{DrawList, RenderBackend};
use crate::Rect;
use crate::assets::Assets;
use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::sim::{Camera, Facing, FrameSnapshot, PlatformKind, World};

pub struct SpriteBackend {
    world: World,
    camera: Camera,
    assets: Assets,
}

impl SpriteBackend {
    pub fn new(world: World, assets: Assets) -> Self {
        let camera = Camera::new(Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT), world.width);
        Self {
            world,
            camera,
            assets,
        }
    }
}

impl RenderBackend for SpriteBackend {
    fn name(&self) -> &'static str {
        "sprite"
    }

    fn build(&mut self, frame: &FrameSnapshot, out: &mut DrawList) {
        let offset_x = frame.camera_x;
        let tiles = &self.assets.tiles;

        for platform in self.world.platforms() {
            let r = &platform.rect;
            if !self.camera.is_visible(offset_x, r.left(), r.right()) {
                continue;
            }
            let uv = match platform.kind {
                PlatformKind::Ground => tiles.ground,
                PlatformKind::Floating => tiles.platform,
            };
            let screen = Rect {
                pos: Camera::world_to_screen(offset_x, r.pos),
                size: r.size,
            };
            out.textured
                .extend(textured_quad(&screen, uv, colors::WHITE, false));
        }

        for coin in frame.coins.iter().filter(|c| !c.collected) {
            if !self
                .camera
                .is_visible(offset_x, coin.pos.x, coin.pos.x + coin.size)
            {
                continue;
            }
            let screen = Rect {
                pos: Camera::world_to_screen(offset_x, coin.pos),
                size: Vec2::splat(coin.size),
            };
            out.textured
                .extend(textured_quad(&screen, tiles.coin, colors::WHITE, false));
        }

        let player = &frame.player;
        let screen = Rect {
            pos: Camera::world_to_screen(offset_x, player.pos),
            size: player.size,
        };
        let uv = self.assets.player_sheet.frame_uv(u32::from(player.phase));
        let flip = player.facing == Facing::Left;
        out.textured
            .extend(textured_quad(&screen, uv, colors::WHITE, flip));
    }
}

//! Procedural back-end: the character is built from colored quads
//!
//! Legs swing with the run phase and the eye sits on the facing side, so the
//! animation reads without any sprite art.

use glam::Vec2;
use std::f32::consts::TAU;

use super::shapes::{circle, quad};
use super::vertex::colors;
use super::{DrawList, RenderBackend};
use crate::Rect;
use crate::consts::{IDLE_PHASE, RUN_PHASE_LAST, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::sim::{Camera, Facing, FrameSnapshot, PlatformKind, PlayerView, World};

/// Grass strip drawn on top of ground tiles
const GRASS_HEIGHT: f32 = 6.0;
/// Peak horizontal leg offset while running
const LEG_SWING: f32 = 5.0;
const COIN_SEGMENTS: u32 = 16;

pub struct VectorBackend {
    world: World,
    camera: Camera,
}

impl VectorBackend {
    pub fn new(world: World) -> Self {
        let camera = Camera::new(Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT), world.width);
        Self { world, camera }
    }

    fn draw_platforms(&self, offset_x: f32, out: &mut DrawList) {
        for platform in self.world.platforms() {
            let r = &platform.rect;
            if !self.camera.is_visible(offset_x, r.left(), r.right()) {
                continue;
            }
            let screen = to_screen(r, offset_x);
            match platform.kind {
                PlatformKind::Ground => {
                    out.solid.extend(quad(&screen, colors::GROUND));
                    let grass = Rect {
                        pos: screen.pos,
                        size: Vec2::new(screen.size.x, GRASS_HEIGHT.min(screen.size.y)),
                    };
                    out.solid.extend(quad(&grass, colors::GROUND_GRASS));
                }
                PlatformKind::Floating => out.solid.extend(quad(&screen, colors::PLATFORM)),
            }
        }
    }

    fn draw_coins(&self, frame: &FrameSnapshot, out: &mut DrawList) {
        for coin in frame.coins.iter().filter(|c| !c.collected) {
            if !self
                .camera
                .is_visible(frame.camera_x, coin.pos.x, coin.pos.x + coin.size)
            {
                continue;
            }
            let radius = coin.size / 2.0;
            let center = Camera::world_to_screen(frame.camera_x, coin.pos) + Vec2::splat(radius);
            out.solid
                .extend(circle(center, radius, colors::COIN, COIN_SEGMENTS));
            let shine = center + Vec2::new(-radius * 0.3, -radius * 0.3);
            out.solid
                .extend(circle(shine, radius * 0.3, colors::COIN_SHINE, 8));
        }
    }

    fn draw_player(&self, player: &PlayerView, offset_x: f32, out: &mut DrawList) {
        let origin = Camera::world_to_screen(offset_x, player.pos);
        let w = player.size.x;
        let h = player.size.y;

        let swing = if player.phase == IDLE_PHASE {
            0.0
        } else {
            (player.phase as f32 / RUN_PHASE_LAST as f32 * TAU).sin() * LEG_SWING
        };

        // Legs: bottom quarter, two columns moving in opposition
        let leg_h = h * 0.25;
        let leg_w = w * 0.3;
        let leg_y = origin.y + h - leg_h;
        let left_leg = Rect::new(origin.x + w * 0.15 + swing, leg_y, leg_w, leg_h);
        let right_leg = Rect::new(origin.x + w * 0.55 - swing, leg_y, leg_w, leg_h);
        out.solid.extend(quad(&left_leg, colors::PLAYER_LEGS));
        out.solid.extend(quad(&right_leg, colors::PLAYER_LEGS));

        // Torso
        let body = Rect::new(origin.x, origin.y + h * 0.35, w, h * 0.4);
        out.solid.extend(quad(&body, colors::PLAYER_BODY));

        // Head
        let head = Rect::new(origin.x + w * 0.15, origin.y, w * 0.7, h * 0.35);
        out.solid.extend(quad(&head, colors::PLAYER_SKIN));

        // Eye on the facing side
        let eye_x = match player.facing {
            Facing::Right => head.right() - w * 0.2,
            Facing::Left => head.left() + w * 0.1,
        };
        let eye = Rect::new(eye_x, origin.y + h * 0.12, w * 0.1, h * 0.08);
        out.solid.extend(quad(&eye, colors::PLAYER_EYE));
    }
}

fn to_screen(rect: &Rect, offset_x: f32) -> Rect {
    Rect {
        pos: Camera::world_to_screen(offset_x, rect.pos),
        size: rect.size,
    }
}

impl RenderBackend for VectorBackend {
    fn name(&self) -> &'static str {
        "vector"
    }

    fn build(&mut self, frame: &FrameSnapshot, out: &mut DrawList) {
        let background = Rect::new(0.0, 0.0, self.camera.viewport.x, self.camera.viewport.y);
        out.solid.extend(quad(&background, colors::SKY));
        self.draw_platforms(frame.camera_x, out);
        self.draw_coins(frame, out);
        self.draw_player(&frame.player, frame.camera_x, out);
    }
}

//! Player physics and platform collision
//!
//! The hard part of the platformer. One step runs, in this exact order:
//! accelerate, jump, gravity, integrate, clamp to the world, land on
//! platforms, floor backstop, animate.

use serde::{Deserialize, Serialize};

use super::state::Player;
use super::tick::Intent;
use super::world::{Platform, World};
use crate::consts::*;

/// How simultaneous platform matches in one step are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// Resolve each match in iteration order; the last one wins
    #[default]
    LastMatch,
    /// Snap to the highest matching surface (least penetration).
    /// Changes behavior relative to `LastMatch` when platforms overlap.
    HighestSurface,
}

/// Physics tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub move_accel: f32,
    pub max_vx: f32,
    pub friction: f32,
    pub stop_threshold: f32,
    pub jump_velocity: f32,
    /// Milliseconds per run-cycle frame
    pub anim_frame_interval: f32,
    pub collision_policy: CollisionPolicy,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_accel: MOVE_ACCEL,
            max_vx: MAX_VX,
            friction: FRICTION,
            stop_threshold: STOP_THRESHOLD,
            jump_velocity: JUMP_VELOCITY,
            anim_frame_interval: ANIM_FRAME_INTERVAL,
            collision_policy: CollisionPolicy::LastMatch,
        }
    }
}

/// Advance the player by one step. Returns true if a jump started this step.
pub fn step_player(
    player: &mut Player,
    world: &World,
    intent: &Intent,
    dt: f32,
    cfg: &PhysicsConfig,
) -> bool {
    apply_horizontal(player, intent, cfg);
    let jumped = apply_jump(player, intent, cfg);

    // Gravity applies even while grounded; the landing pass below undoes it
    player.vel.y += cfg.gravity;

    player.pos.x += player.vel.x;
    player.pos.y += player.vel.y;

    clamp_to_world(player, world);
    resolve_platforms(player, world, cfg.collision_policy);
    floor_backstop(player, world);
    advance_animation(player, dt, cfg);

    jumped
}

/// Accelerate toward held direction (left wins ties) or apply friction
pub(crate) fn apply_horizontal(player: &mut Player, intent: &Intent, cfg: &PhysicsConfig) {
    let vx = &mut player.vel.x;
    if intent.left {
        *vx = (*vx - cfg.move_accel).max(-cfg.max_vx);
    } else if intent.right {
        *vx = (*vx + cfg.move_accel).min(cfg.max_vx);
    } else {
        *vx *= cfg.friction;
        if vx.abs() < cfg.stop_threshold {
            *vx = 0.0;
        }
    }
}

/// Start a jump if grounded and jump is held
pub(crate) fn apply_jump(player: &mut Player, intent: &Intent, cfg: &PhysicsConfig) -> bool {
    if intent.jump && player.on_ground {
        player.vel.y = cfg.jump_velocity;
        player.on_ground = false;
        true
    } else {
        false
    }
}

/// Hard walls at both world edges; velocity is left alone
pub(crate) fn clamp_to_world(player: &mut Player, world: &World) {
    let max_x = (world.width - player.size.x).max(0.0);
    player.pos.x = player.pos.x.clamp(0.0, max_x);
}

/// Whether the player should land on `platform` this step.
///
/// Requires horizontal overlap, the player's bottom edge inside the
/// platform's vertical extent, and non-upward motion (platforms are
/// one-way from below).
pub(crate) fn lands_on(player: &Player, platform: &Platform) -> bool {
    let bounds = player.bounds();
    let bottom = bounds.bottom();
    player.vel.y >= 0.0
        && bounds.overlaps_x(&platform.rect)
        && bottom >= platform.top()
        && bottom <= platform.bottom()
}

fn snap_onto(player: &mut Player, surface_y: f32) {
    player.pos.y = surface_y - player.size.y;
    player.vel.y = 0.0;
    player.on_ground = true;
}

/// Recompute `on_ground` against every platform
pub(crate) fn resolve_platforms(player: &mut Player, world: &World, policy: CollisionPolicy) {
    player.on_ground = false;

    match policy {
        CollisionPolicy::LastMatch => {
            // Each match snaps immediately, so later tests see the snapped position
            for platform in world.platforms() {
                if lands_on(player, platform) {
                    snap_onto(player, platform.top());
                }
            }
        }
        CollisionPolicy::HighestSurface => {
            let surface = world
                .platforms()
                .filter(|p| lands_on(player, p))
                .map(Platform::top)
                .reduce(f32::min);
            if let Some(top) = surface {
                snap_onto(player, top);
            }
        }
    }
}

/// Last line of defense against a missed landing
pub(crate) fn floor_backstop(player: &mut Player, world: &World) {
    if player.pos.y + player.size.y > world.height {
        snap_onto(player, world.height);
    }
}

/// Run cycle while moving on the ground, idle frame otherwise
pub(crate) fn advance_animation(player: &mut Player, dt: f32, cfg: &PhysicsConfig) {
    if player.vel.x.abs() > cfg.stop_threshold && player.on_ground {
        player.anim_timer += dt;
        if player.anim_timer > cfg.anim_frame_interval {
            player.anim_timer = 0.0;
            player.phase = if player.phase >= RUN_PHASE_LAST || player.phase < RUN_PHASE_FIRST {
                RUN_PHASE_FIRST
            } else {
                player.phase + 1
            };
        }
    } else {
        player.phase = IDLE_PHASE;
        player.anim_timer = 0.0;
    }
}

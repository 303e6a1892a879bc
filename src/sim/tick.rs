//! Simulation tick
//!
//! Advances the session by one frame: physics, coin pickup, camera. Always in
//! that order.

use serde::{Deserialize, Serialize};

use super::collect::collect_coins;
use super::physics::step_player;
use super::state::{GameEvent, GameState};

/// Input intent for a single tick, already normalized from whatever device
/// produced it. Left and right may both be held; physics gives left priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Intent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Advance the game state by one frame of `dt` milliseconds
pub fn tick(state: &mut GameState, intent: &Intent, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    let was_grounded = state.player.on_ground;
    if step_player(&mut state.player, &state.world, intent, dt, &state.config) {
        state.events.push(GameEvent::Jumped);
    }
    if !was_grounded && state.player.on_ground {
        state.events.push(GameEvent::Landed);
    }

    let player_box = state.player.bounds();
    for index in collect_coins(&player_box, &mut state.coins, &mut state.score) {
        state.events.push(GameEvent::CoinCollected { index });
    }

    state.camera_x = state.camera().offset_for(state.player.center_x());
}

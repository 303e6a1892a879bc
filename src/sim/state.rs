//! Game state and core simulation types
//!
//! The session owns everything the simulation touches. Entities never point at
//! each other; lookups are plain iteration over small fixed sets.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::physics::PhysicsConfig;
use super::world::{COIN_SPAWNS, World};
use crate::Rect;
use crate::consts::*;

/// Direction the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Derived from the sign of horizontal velocity (standing still faces right)
    pub fn from_velocity(vx: f32) -> Self {
        if vx < 0.0 { Facing::Left } else { Facing::Right }
    }
}

/// The controllable character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Recomputed every step by the collision pass
    pub on_ground: bool,
    /// Animation frame index (`IDLE_PHASE` or a run phase)
    pub phase: u8,
    /// Milliseconds accumulated toward the next run phase
    pub anim_timer: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            on_ground: false,
            phase: IDLE_PHASE,
            anim_timer: 0.0,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn facing(&self) -> Facing {
        Facing::from_velocity(self.vel.x)
    }
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub size: f32,
    /// Monotonic: only ever goes false -> true
    pub collected: bool,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: COIN_SIZE,
            collected: false,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: Vec2::splat(self.size),
        }
    }
}

/// Events emitted during a tick (cleared at the start of the next one)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player left the ground under jump intent
    Jumped,
    /// Player came to rest on a surface after being airborne
    Landed,
    /// Coin at this index was collected
    CoinCollected { index: usize },
}

/// Complete simulation session (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub world: World,
    pub config: PhysicsConfig,
    pub player: Player,
    /// Coins in spawn order (never removed, so render order stays stable)
    pub coins: Vec<Coin>,
    /// Coins collected so far
    pub score: u32,
    /// Horizontal camera offset, derived from the player every tick
    pub camera_x: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session over `world` with coins at `coin_spawns`
    pub fn new(world: World, coin_spawns: &[(f32, f32)], config: PhysicsConfig) -> Self {
        let spawn_y = world.ground_top() - PLAYER_HEIGHT;
        let mut state = Self {
            world,
            config,
            player: Player::new(Vec2::new(100.0, spawn_y)),
            coins: coin_spawns.iter().map(|&(x, y)| Coin::new(x, y)).collect(),
            score: 0,
            camera_x: 0.0,
            time_ticks: 0,
            events: Vec::new(),
        };
        state.camera_x = state.camera().offset_for(state.player.center_x());
        state
    }

    /// The built-in level with the given tuning
    pub fn default_level(config: PhysicsConfig) -> Self {
        Self::new(World::default_level(), &COIN_SPAWNS, config)
    }

    pub fn camera(&self) -> super::Camera {
        super::Camera::new(Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT), self.world.width)
    }

    pub fn coins_remaining(&self) -> usize {
        self.coins.iter().filter(|c| !c.collected).count()
    }

    /// Read-only view handed to render sinks
    pub fn snapshot(&self, dt: f32) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.time_ticks,
            dt,
            player: PlayerView {
                pos: self.player.pos,
                vel: self.player.vel,
                size: self.player.size,
                on_ground: self.player.on_ground,
                phase: self.player.phase,
                facing: self.player.facing(),
            },
            camera_x: self.camera_x,
            coins: self
                .coins
                .iter()
                .map(|c| CoinView {
                    pos: c.pos,
                    size: c.size,
                    collected: c.collected,
                })
                .collect(),
            score: self.score,
            coin_total: u32::try_from(self.coins.len()).unwrap_or(u32::MAX),
            events: self.events.clone(),
        }
    }
}

/// Player fields exposed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub on_ground: bool,
    pub phase: u8,
    pub facing: Facing,
}

/// Coin fields exposed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinView {
    pub pos: Vec2,
    pub size: f32,
    pub collected: bool,
}

/// State after one tick, as seen by a render sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    /// Elapsed milliseconds fed into this tick
    pub dt: f32,
    pub player: PlayerView,
    pub camera_x: f32,
    pub coins: Vec<CoinView>,
    pub score: u32,
    pub coin_total: u32,
    pub events: Vec<GameEvent>,
}

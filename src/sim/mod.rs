//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the `dt` passed to `tick`
//! - No randomness
//! - Stable iteration order (ground tiles, then floating platforms, coins by index)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collect;
pub mod physics;
pub mod state;
pub mod tick;
pub mod world;

pub use camera::{Camera, camera_offset};
pub use collect::collect_coins;
pub use physics::{CollisionPolicy, PhysicsConfig, step_player};
pub use state::{Coin, CoinView, Facing, FrameSnapshot, GameEvent, GameState, Player, PlayerView};
pub use tick::{Intent, tick};
pub use world::{COIN_SPAWNS, FLOATING_PLATFORMS, Platform, PlatformKind, World};

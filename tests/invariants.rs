//! Simulation invariants over arbitrary input sequences

use coin_dash::consts::*;
use coin_dash::sim::{CollisionPolicy, GameState, Intent, PhysicsConfig, tick};
use proptest::prelude::*;

fn intent_strategy() -> impl Strategy<Value = Intent> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(left, right, jump)| Intent {
        left,
        right,
        jump,
    })
}

fn frames_strategy() -> impl Strategy<Value = Vec<(f32, Intent)>> {
    prop::collection::vec((0.0f32..100.0, intent_strategy()), 1..400)
}

fn policy_strategy() -> impl Strategy<Value = CollisionPolicy> {
    prop_oneof![
        Just(CollisionPolicy::LastMatch),
        Just(CollisionPolicy::HighestSurface)
    ]
}

proptest! {
    #[test]
    fn state_stays_in_bounds(frames in frames_strategy(), policy in policy_strategy()) {
        let config = PhysicsConfig { collision_policy: policy, ..Default::default() };
        let mut state = GameState::default_level(config);
        let max_x = state.world.width - state.player.size.x;
        let max_cam = state.world.width - VIEWPORT_WIDTH;

        for (dt, intent) in &frames {
            tick(&mut state, intent, *dt);
            let p = &state.player;
            prop_assert!(p.vel.x >= -MAX_VX && p.vel.x <= MAX_VX, "vx out of range: {}", p.vel.x);
            prop_assert!(p.pos.x >= 0.0 && p.pos.x <= max_x, "x out of range: {}", p.pos.x);
            prop_assert!(p.pos.y + p.size.y <= state.world.height, "below floor: {}", p.pos.y);
            prop_assert!(state.camera_x >= 0.0 && state.camera_x <= max_cam);
            prop_assert!(p.phase <= RUN_PHASE_LAST);
        }
    }

    #[test]
    fn collection_is_monotonic(frames in frames_strategy()) {
        let mut state = GameState::default_level(PhysicsConfig::default());
        let mut prev_score = 0;
        let mut prev_flags: Vec<bool> = state.coins.iter().map(|c| c.collected).collect();

        for (dt, intent) in &frames {
            tick(&mut state, intent, *dt);
            prop_assert!(state.score >= prev_score);
            for (was, coin) in prev_flags.iter().zip(&state.coins) {
                prop_assert!(!*was || coin.collected);
            }
            let collected = state.coins.iter().filter(|c| c.collected).count() as u32;
            prop_assert_eq!(collected, state.score);
            prev_score = state.score;
            prev_flags = state.coins.iter().map(|c| c.collected).collect();
        }
    }

    #[test]
    fn replay_is_deterministic(frames in frames_strategy()) {
        let mut a = GameState::default_level(PhysicsConfig::default());
        let mut b = GameState::default_level(PhysicsConfig::default());

        for (dt, intent) in &frames {
            tick(&mut a, intent, *dt);
            tick(&mut b, intent, *dt);
            let (sa, sb) = (a.snapshot(*dt), b.snapshot(*dt));
            prop_assert_eq!(sa.player.pos.x.to_bits(), sb.player.pos.x.to_bits());
            prop_assert_eq!(sa.player.pos.y.to_bits(), sb.player.pos.y.to_bits());
            prop_assert_eq!(sa.player.vel.x.to_bits(), sb.player.vel.x.to_bits());
            prop_assert_eq!(sa.player.vel.y.to_bits(), sb.player.vel.y.to_bits());
            prop_assert_eq!(sa, sb);
        }
    }

    #[test]
    fn friction_never_flips_sign(start in -MAX_VX..MAX_VX, ticks in 1usize..80) {
        let mut state = GameState::default_level(PhysicsConfig::default());
        tick(&mut state, &Intent::default(), 0.0);
        state.player.vel.x = start;
        let sign = start.signum();

        for _ in 0..ticks {
            tick(&mut state, &Intent::default(), 16.0);
            let vx = state.player.vel.x;
            prop_assert!(vx == 0.0 || vx.signum() == sign);
            prop_assert!(vx.abs() <= start.abs());
        }
    }
}

#[test]
fn friction_reaches_exact_zero() {
    let mut state = GameState::default_level(PhysicsConfig::default());
    state.player.vel.x = -MAX_VX;
    for _ in 0..40 {
        tick(&mut state, &Intent::default(), 16.0);
    }
    assert_eq!(state.player.vel.x, 0.0);
}

//! Coin Dash headless runner
//!
//! Composes a game from settings, plays a scripted run against a simulated
//! display clock and prints the final snapshot as JSON.
//!
//! Usage: `coin-dash [settings.json]`

use coin_dash::assets::{AssetSource, BuiltinAssets, ManifestFile};
use coin_dash::driver::ScriptedIntent;
use coin_dash::sim::Intent;
use coin_dash::{Game, Settings};

fn main() {
    env_logger::init();
    log::info!("Coin Dash (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Settings::default()
        }),
        None => Settings::default(),
    };

    let mut source: Box<dyn AssetSource> = match &settings.asset_manifest {
        Some(path) => Box::new(ManifestFile::new(path)),
        None => Box::new(BuiltinAssets),
    };

    let script = demo_script(settings.frame_limit);
    let mut game = match Game::start(&settings, source.as_mut(), script) {
        Ok(game) => game,
        Err(_) => std::process::exit(1),
    };

    let interval = settings.frame_interval_ms();
    for frame in 0..settings.frame_limit {
        game.frame(f64::from(frame) * interval);
    }

    let state = game.state();
    log::info!(
        "Finished {} ticks: {}/{} coins",
        state.time_ticks,
        state.score,
        state.coins.len()
    );

    match serde_json::to_string_pretty(&state.snapshot(0.0)) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
}

/// Run right the whole way, hopping every 45 frames
fn demo_script(frames: u32) -> ScriptedIntent {
    let intents = (0..frames)
        .map(|i| Intent {
            left: false,
            right: true,
            jump: i % 45 < 10,
        })
        .collect();
    ScriptedIntent::new(intents)
}

//! Frame driver
//!
//! Runs one simulation tick per host callback. The host supplies a monotonic
//! timestamp; the driver turns it into `dt`, polls one intent snapshot, ticks
//! the session and hands the resulting snapshot to the render sink.

use std::sync::{Arc, Mutex};

use crate::assets::{AssetSource, Assets};
use crate::error::LoadError;
use crate::renderer::{Renderer, create_renderer};
use crate::settings::Settings;
use crate::sim::{FrameSnapshot, GameEvent, GameState, Intent, tick};

/// Where the driver gets input intent. Polled exactly once per tick.
pub trait IntentSource {
    fn poll(&mut self) -> Intent;
}

/// A constant intent
impl IntentSource for Intent {
    fn poll(&mut self) -> Intent {
        *self
    }
}

/// Recorded intent sequence, one entry per tick. Idle once exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedIntent {
    frames: Vec<Intent>,
    cursor: usize,
}

impl ScriptedIntent {
    pub fn new(frames: Vec<Intent>) -> Self {
        Self { frames, cursor: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.cursor)
    }
}

impl IntentSource for ScriptedIntent {
    fn poll(&mut self) -> Intent {
        match self.frames.get(self.cursor) {
            Some(&intent) => {
                self.cursor += 1;
                intent
            }
            None => Intent::default(),
        }
    }
}

/// Intent shared with input handlers on other threads.
///
/// Handlers mutate it whenever events arrive; `poll` copies the whole record
/// under the lock so a tick never sees a half-applied update.
#[derive(Debug, Clone, Default)]
pub struct SharedIntent {
    inner: Arc<Mutex<Intent>>,
}

impl SharedIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a change from an input handler
    pub fn update(&self, f: impl FnOnce(&mut Intent)) {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard);
    }

    pub fn snapshot(&self) -> Intent {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl IntentSource for SharedIntent {
    fn poll(&mut self) -> Intent {
        self.snapshot()
    }
}

/// Consumer of per-tick state
pub trait RenderSink {
    fn present(&mut self, frame: &FrameSnapshot);
}

/// Keeps every snapshot (tests and headless replays)
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    pub frames: Vec<FrameSnapshot>,
}

impl RenderSink for FrameRecorder {
    fn present(&mut self, frame: &FrameSnapshot) {
        self.frames.push(frame.clone());
    }
}

/// Turns host timestamps into per-tick `dt`
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// Milliseconds since the previous call. The first call returns 0 so the
    /// simulation never sees the time spent before the loop started; a clock
    /// that steps backwards also yields 0.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last = Some(now_ms);
        dt as f32
    }
}

/// Owns the session and the clock
#[derive(Debug, Clone)]
pub struct FrameDriver {
    state: GameState,
    clock: FrameClock,
}

impl FrameDriver {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            clock: FrameClock::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one tick for the host callback at `now_ms`
    pub fn frame(&mut self, now_ms: f64, input: &mut impl IntentSource) -> FrameSnapshot {
        let dt = self.clock.delta(now_ms);
        let intent = input.poll();
        if self.state.time_ticks == 0 {
            log::debug!("First tick at t={now_ms:.1}ms");
        }

        tick(&mut self.state, &intent, dt);

        for event in &self.state.events {
            match event {
                GameEvent::CoinCollected { index } => log::info!(
                    "Coin {} collected ({}/{})",
                    index,
                    self.state.score,
                    self.state.coins.len()
                ),
                GameEvent::Landed => log::debug!(
                    "Landed at ({:.1}, {:.1})",
                    self.state.player.pos.x,
                    self.state.player.pos.y
                ),
                GameEvent::Jumped => log::trace!("Jump"),
            }
        }

        self.state.snapshot(dt)
    }

    /// `frame`, then present the result
    pub fn run_frame(
        &mut self,
        now_ms: f64,
        input: &mut impl IntentSource,
        sink: &mut impl RenderSink,
    ) {
        let snapshot = self.frame(now_ms, input);
        sink.present(&snapshot);
    }
}

/// A fully composed game: driver, intent source and render back-end
pub struct Game<I: IntentSource> {
    driver: FrameDriver,
    input: I,
    renderer: Renderer,
    assets: Assets,
}

impl<I: IntentSource> Game<I> {
    /// Load assets, build the session and pick the back-end.
    ///
    /// Nothing is ticked if loading fails; the error is logged and returned.
    pub fn start(
        settings: &Settings,
        assets: &mut dyn AssetSource,
        input: I,
    ) -> Result<Self, LoadError> {
        let assets = assets
            .load()
            .and_then(|assets| assets.validate().map(|()| assets))
            .inspect_err(|e| {
                log::error!("Asset loading failed, not starting: {e}");
            })?;

        let state = GameState::default_level(settings.physics.clone());
        let renderer = create_renderer(settings.backend, &state.world, &assets);
        log::info!(
            "Session started: {} coins, {} platforms, {} back-end",
            state.coins.len(),
            state.world.platforms().count(),
            settings.backend.as_str()
        );

        Ok(Self {
            driver: FrameDriver::new(state),
            input,
            renderer,
            assets,
        })
    }

    /// Host callback: tick once and render
    pub fn frame(&mut self, now_ms: f64) {
        self.driver
            .run_frame(now_ms, &mut self.input, &mut self.renderer);
    }

    pub fn state(&self) -> &GameState {
        self.driver.state()
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::BuiltinAssets;
    use crate::settings::BackendKind;
    use crate::sim::PhysicsConfig;

    struct FailingAssets;

    impl AssetSource for FailingAssets {
        fn load(&mut self) -> Result<Assets, LoadError> {
            Err(LoadError::Invalid("sheet missing".into()))
        }
    }

    struct ZeroGrid;

    impl AssetSource for ZeroGrid {
        fn load(&mut self) -> Result<Assets, LoadError> {
            let mut assets = Assets::default();
            assets.player_sheet.columns = 0;
            Ok(assets)
        }
    }

    #[test]
    fn test_clock_first_delta_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.delta(12_345.0), 0.0);
        assert_eq!(clock.delta(12_361.0), 16.0);
        // Backwards step clamps to 0
        assert_eq!(clock.delta(12_300.0), 0.0);
        assert_eq!(clock.delta(12_310.0), 10.0);
    }

    #[test]
    fn test_scripted_intent_runs_out_idle() {
        let jump = Intent {
            jump: true,
            ..Default::default()
        };
        let mut script = ScriptedIntent::new(vec![jump]);
        assert_eq!(script.remaining(), 1);
        assert_eq!(script.poll(), jump);
        assert_eq!(script.poll(), Intent::default());
        assert_eq!(script.remaining(), 0);
        for _ in 0..10 {
            assert_eq!(script.poll(), Intent::default());
        }
        assert_eq!(script.cursor, 1);
    }

    #[test]
    fn test_shared_intent_snapshot() {
        let shared = SharedIntent::new();
        let handle = shared.clone();
        let worker = std::thread::spawn(move || {
            handle.update(|i| {
                i.right = true;
                i.jump = true;
            });
        });
        worker.join().unwrap();

        let mut source = shared.clone();
        let intent = source.poll();
        assert!(intent.right && intent.jump && !intent.left);
    }

    #[test]
    fn test_first_frame_uses_zero_dt() {
        let mut driver = FrameDriver::new(GameState::default_level(PhysicsConfig::default()));
        let mut input = Intent::default();
        let mut sink = FrameRecorder::default();

        driver.run_frame(50_000.0, &mut input, &mut sink);
        driver.run_frame(50_016.0, &mut input, &mut sink);

        assert_eq!(sink.frames.len(), 2);
        assert_eq!(sink.frames[0].dt, 0.0);
        assert_eq!(sink.frames[1].dt, 16.0);
        assert_eq!(sink.frames[1].tick, 2);
    }

    #[test]
    fn test_intent_polled_once_per_frame() {
        struct Counting(u32);
        impl IntentSource for Counting {
            fn poll(&mut self) -> Intent {
                self.0 += 1;
                Intent::default()
            }
        }

        let mut driver = FrameDriver::new(GameState::default_level(PhysicsConfig::default()));
        let mut input = Counting(0);
        for i in 0..5 {
            driver.frame(i as f64 * 16.0, &mut input);
        }
        assert_eq!(input.0, 5);
    }

    #[test]
    fn test_start_fails_without_assets() {
        let result = Game::start(&Settings::default(), &mut FailingAssets, Intent::default());
        assert!(matches!(result, Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_start_rejects_invalid_assets_from_any_source() {
        let settings = Settings {
            backend: BackendKind::Sprite,
            ..Default::default()
        };
        let result = Game::start(&settings, &mut ZeroGrid, Intent::default());
        assert!(matches!(result, Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_game_runs_with_either_backend() {
        for backend in [BackendKind::Vector, BackendKind::Sprite] {
            let settings = Settings {
                backend,
                ..Default::default()
            };
            let right = Intent {
                right: true,
                ..Default::default()
            };
            let mut game = Game::start(&settings, &mut BuiltinAssets, right).unwrap();
            for i in 0..30 {
                game.frame(i as f64 * 16.0);
            }
            assert_eq!(game.state().time_ticks, 30);
            assert_eq!(game.renderer().frames_presented(), 30);
            assert_eq!(game.renderer().backend_name(), backend.as_str());
            assert!(!game.renderer().draw_list().is_empty());
        }
    }
}

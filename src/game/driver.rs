//! Frame Driver
//!
//! Single-threaded cooperative loop: pull an input snapshot, run one world
//! update, hand the renderer a read-only view. Nothing suspends inside a
//! frame, so timed effects are plain timestamp comparisons made by
//! [`World::update`].

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::game::state::{FrameReport, World};
use crate::game::systems::BuildOutcome;
use crate::game::view::FrameView;
use crate::input::{ControlState, InputSnapshot};

/// Draws one frame from a read-only view.
pub trait Renderer {
    fn render(&mut self, view: &FrameView<'_>);
}

/// Renderer that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &FrameView<'_>) {}
}

/// Source of per-frame input. `None` ends the run.
pub trait InputSource {
    fn next_input(&mut self) -> Option<InputSnapshot>;
}

/// Live controls never end a run on their own.
impl InputSource for ControlState {
    fn next_input(&mut self) -> Option<InputSnapshot> {
        Some(self.snapshot())
    }
}

/// Pre-recorded inputs, one per frame.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<InputSnapshot>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<InputSnapshot>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Frames not yet consumed.
    pub fn remaining(&self) -> usize {
        self.frames.len() - self.cursor
    }
}

impl InputSource for ScriptedInput {
    fn next_input(&mut self) -> Option<InputSnapshot> {
        let input = self.frames.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(input)
    }
}

/// Monotonic session time handed to each frame.
pub trait FrameClock {
    fn now(&mut self) -> Duration;
}

/// Advances by a fixed step on every call. Deterministic.
#[derive(Debug, Clone, Copy)]
pub struct FixedStepClock {
    step: Duration,
    elapsed: Duration,
}

impl FixedStepClock {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            elapsed: Duration::ZERO,
        }
    }

    /// ~60 frames per second
    pub fn sixty_hz() -> Self {
        Self::new(Duration::from_micros(16_667))
    }
}

impl FrameClock for FixedStepClock {
    fn now(&mut self) -> Duration {
        self.elapsed += self.step;
        self.elapsed
    }
}

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct RealtimeClock {
    start: Instant,
}

impl RealtimeClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for RealtimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for RealtimeClock {
    fn now(&mut self) -> Duration {
        self.start.elapsed()
    }
}

/// Totals over a [`FrameDriver::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub projectiles_spawned: usize,
    pub blocks_placed: usize,
    pub nodes_depleted: usize,
    pub materials_earned: i32,
}

impl RunSummary {
    fn record(&mut self, report: &FrameReport) {
        self.frames += 1;
        self.projectiles_spawned += report.projectiles_spawned;
        if matches!(report.build, Some(BuildOutcome::Placed { .. })) {
            self.blocks_placed += 1;
        }
        self.nodes_depleted += report.nodes_depleted;
        self.materials_earned += report.materials_earned;
    }
}

/// Owns the world and a renderer and runs them frame by frame.
pub struct FrameDriver<R: Renderer> {
    world: World,
    renderer: R,
}

impl<R: Renderer> FrameDriver<R> {
    pub fn new(world: World, renderer: R) -> Self {
        Self { world, renderer }
    }

    /// Update then render one frame.
    pub fn frame(&mut self, input: &InputSnapshot, now: Duration) -> FrameReport {
        let report = self.world.update(input, now);
        self.renderer.render(&self.world.view());
        report
    }

    /// Run frames until `input` runs dry.
    pub fn run<I, C>(&mut self, input: &mut I, clock: &mut C) -> RunSummary
    where
        I: InputSource + ?Sized,
        C: FrameClock + ?Sized,
    {
        let mut summary = RunSummary::default();
        info!("[Driver] Run started at frame {}", self.world.frame());

        while let Some(snapshot) = input.next_input() {
            let report = self.frame(&snapshot, clock.now());
            if report.collision_reverted {
                debug!("[Driver] Frame {}: move reverted by collision", report.frame);
            }
            summary.record(&report);
        }

        info!(
            "[Driver] Run finished: {} frames, {} shots, {} blocks, {} materials earned",
            summary.frames,
            summary.projectiles_spawned,
            summary.blocks_placed,
            summary.materials_earned
        );
        summary
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::WorldConfig;

    /// Records the HUD line and entity counts of every rendered frame.
    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<(u64, String, usize)>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, view: &FrameView<'_>) {
            self.frames
                .push((view.frame, view.hud.to_string(), view.projectiles.len()));
        }
    }

    fn driver() -> FrameDriver<RecordingRenderer> {
        let config = WorldConfig {
            rng_seed: Some(3),
            ..WorldConfig::default()
        };
        FrameDriver::new(World::new(config), RecordingRenderer::default())
    }

    #[test]
    fn test_frame_updates_then_renders() {
        let mut driver = driver();
        let report = driver.frame(
            &InputSnapshot {
                fire: true,
                ..InputSnapshot::idle()
            },
            Duration::from_millis(16),
        );

        assert_eq!(report.frame, 1);
        let (frame, hud, projectiles) = &driver.renderer().frames[0];
        assert_eq!(*frame, 1);
        assert_eq!(*projectiles, 1);
        assert!(hud.starts_with("Pistol 11/12"));
    }

    #[test]
    fn test_run_until_script_ends() {
        let mut driver = driver();
        let mut script = ScriptedInput::new(vec![InputSnapshot::idle(); 30]);
        let mut clock = FixedStepClock::sixty_hz();

        let summary = driver.run(&mut script, &mut clock);
        assert_eq!(summary.frames, 30);
        assert_eq!(script.remaining(), 0);
        assert_eq!(driver.world().frame(), 30);
        assert_eq!(driver.renderer().frames.len(), 30);
    }

    #[test]
    fn test_run_summary_counts_actions() {
        let mut driver = driver();
        let mut frames = vec![InputSnapshot::idle(); 120];
        frames.push(InputSnapshot {
            build: true,
            fire: true,
            ..InputSnapshot::idle()
        });
        let mut script = ScriptedInput::new(frames);

        let summary = driver.run(&mut script, &mut FixedStepClock::sixty_hz());
        assert_eq!(summary.frames, 121);
        assert_eq!(summary.projectiles_spawned, 1);
        assert_eq!(summary.blocks_placed, 1);
        assert_eq!(driver.world().materials.get(), 90);
    }

    #[test]
    fn test_fixed_step_clock() {
        let mut clock = FixedStepClock::new(Duration::from_millis(10));
        assert_eq!(clock.now(), Duration::from_millis(10));
        assert_eq!(clock.now(), Duration::from_millis(20));
    }

    #[test]
    fn test_control_state_is_endless_source() {
        let mut controls = ControlState::new();
        for _ in 0..3 {
            assert!(controls.next_input().is_some());
        }
    }
}

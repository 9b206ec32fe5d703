//! Brickfire Arena
//!
//! Windowed host for the arena simulation. Keys are mapped through
//! `InputConfig`, the simulation runs at a fixed 60 Hz pace and the HUD is
//! shown in the window title.
//!
//! Usage: `brickfire_arena [config.json] [--headless <frames>]`
//!
//! With `--headless` no window is created; a scripted input drives the given
//! number of frames and the HUD is logged instead.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

use brickfire_engine::game::{
    FixedStepClock, FrameClock, FrameDriver, FrameView, InputConfig, RealtimeClock, Renderer,
    ScriptedInput, World, WorldConfig,
};
use brickfire_engine::input::{ControlState, InputSnapshot};
use log::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

const USAGE: &str = "usage: brickfire_arena [config.json] [--headless <frames>]";

/// Target simulation step (~60 Hz). Movement is per frame, so frames must be paced.
const FRAME_STEP: Duration = Duration::from_micros(16_667);

/// Command line options.
#[derive(Debug, Default, PartialEq)]
struct Options {
    config_path: Option<PathBuf>,
    headless: Option<u64>,
}

impl Options {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut options = Options::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--headless" => {
                    let frames = args
                        .next()
                        .ok_or_else(|| "--headless needs a frame count".to_string())?;
                    let frames = frames
                        .parse()
                        .map_err(|_| format!("invalid frame count '{frames}'"))?;
                    options.headless = Some(frames);
                }
                flag if flag.starts_with("--") => return Err(format!("unknown flag '{flag}'")),
                path => {
                    if options.config_path.is_some() {
                        return Err(format!("unexpected argument '{path}'"));
                    }
                    options.config_path = Some(PathBuf::from(path));
                }
            }
        }

        Ok(options)
    }
}

/// Shows the HUD line in the window title.
#[derive(Default)]
struct TitleHudRenderer {
    window: Option<Arc<Window>>,
    title: String,
}

impl TitleHudRenderer {
    fn attach(&mut self, window: Arc<Window>) {
        self.window = Some(window);
        self.title.clear();
    }
}

impl Renderer for TitleHudRenderer {
    fn render(&mut self, view: &FrameView<'_>) {
        let Some(window) = &self.window else {
            return;
        };
        let title = format!(
            "Brickfire | {} | HP {} | {} shots {} blocks {} nodes",
            view.hud,
            view.player.health,
            view.projectiles.len(),
            view.blocks.len(),
            view.resources.len()
        );
        // Only touch the window when the text changes
        if title != self.title {
            window.set_title(&title);
            self.title = title;
        }
    }
}

/// Logs the HUD every `interval` frames.
struct LogRenderer {
    interval: u64,
}

impl Renderer for LogRenderer {
    fn render(&mut self, view: &FrameView<'_>) {
        if view.frame % self.interval == 0 {
            info!(
                "[Frame {}] {} | pos=({:.0}, {:.0}) shots={} blocks={} nodes={}",
                view.frame,
                view.hud,
                view.player.position.x,
                view.player.position.y,
                view.projectiles.len(),
                view.blocks.len(),
                view.resources.len()
            );
        }
    }
}

struct ArenaApp {
    driver: FrameDriver<TitleHudRenderer>,
    controls: ControlState,
    bindings: InputConfig,
    clock: RealtimeClock,
    next_frame: Duration,
    window: Option<Arc<Window>>,
}

impl ArenaApp {
    fn new(config: WorldConfig) -> Self {
        Self {
            driver: FrameDriver::new(World::new(config), TitleHudRenderer::default()),
            controls: ControlState::new(),
            bindings: InputConfig::default(),
            clock: RealtimeClock::new(),
            next_frame: Duration::ZERO,
            window: None,
        }
    }
}

impl ApplicationHandler for ArenaApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let bounds = self.driver.world().config.bounds;
        let attrs = WindowAttributes::default()
            .with_title("Brickfire")
            .with_inner_size(LogicalSize::new(bounds.width as f64, bounds.height as f64));
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let window = Arc::new(window);
                self.driver.renderer_mut().attach(Arc::clone(&window));
                self.window = Some(window);
                self.next_frame = self.clock.now();
            }
            Err(err) => {
                error!("Failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Focused(false) => self.controls.reset(),
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return;
                };
                let pressed = event.state == ElementState::Pressed;
                if key == self.bindings.exit && pressed {
                    event_loop.exit();
                    return;
                }
                if event.repeat {
                    return;
                }
                if let Some(control) = self.bindings.control_for(key) {
                    self.controls.handle(control, pressed);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            return;
        }

        let now = self.clock.now();
        if now < self.next_frame {
            return;
        }
        self.next_frame += FRAME_STEP;
        // Don't try to catch up after a long stall
        if self.next_frame < now {
            self.next_frame = now + FRAME_STEP;
        }

        let input = self.controls.snapshot();
        self.driver.frame(&input, now);
    }
}

/// A short demo: walk back and forth, shoot, build, jump and cycle weapons.
fn demo_script(frames: u64) -> ScriptedInput {
    let inputs = (0..frames)
        .map(|i| InputSnapshot {
            move_left: (i / 90) % 2 == 1,
            move_right: (i / 90) % 2 == 0,
            jump: i % 120 == 60,
            fire: i % 20 == 0,
            build: i % 45 == 30,
            reload: i % 400 == 399,
            select_weapon: (i % 300 == 150).then_some(((i / 300) % 4 + 1) as u8),
            select_building: (i % 500 == 250).then_some(((i / 500) % 3 + 1) as u8),
        })
        .collect();
    ScriptedInput::new(inputs)
}

fn run_headless(config: WorldConfig, frames: u64) {
    info!("Running {} headless frames", frames);
    let mut driver = FrameDriver::new(World::new(config), LogRenderer { interval: 60 });
    let summary = driver.run(&mut demo_script(frames), &mut FixedStepClock::sixty_hz());

    let world = driver.world();
    println!(
        "{} frames | {} shots | {} blocks | {} nodes depleted | materials {}",
        summary.frames,
        summary.projectiles_spawned,
        summary.blocks_placed,
        summary.nodes_depleted,
        world.materials.get()
    );
}

fn run_windowed(config: WorldConfig) -> Result<(), winit::error::EventLoopError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = ArenaApp::new(config);
    event_loop.run_app(&mut app)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(msg) => {
            error!("{msg}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    let config = match &options.config_path {
        Some(path) => match WorldConfig::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                error!("{err}");
                process::exit(1);
            }
        },
        None => WorldConfig::default(),
    };
    if config.rng_seed.is_none() && options.headless.is_some() {
        warn!("Headless run without rng_seed: projectile jitter is not reproducible");
    }

    if let Some(frames) = options.headless {
        run_headless(config, frames);
        return;
    }

    println!("===========================================");
    println!("   Brickfire Arena");
    println!("===========================================");
    println!();
    println!("Controls: A/D Move, W Jump, Space Fire, R Reload");
    println!("1-4: Weapons, E: Build, F1-F3: Buildings, ESC: Exit");
    println!();

    let started = Instant::now();
    if let Err(err) = run_windowed(config) {
        error!("Event loop failed: {err}");
        process::exit(1);
    }
    info!("Session ended after {:.1}s", started.elapsed().as_secs_f32());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_options() {
        assert_eq!(Options::parse(args(&[])).unwrap(), Options::default());

        let options = Options::parse(args(&["arena.json", "--headless", "120"])).unwrap();
        assert_eq!(options.config_path, Some(PathBuf::from("arena.json")));
        assert_eq!(options.headless, Some(120));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Options::parse(args(&["--headless"])).is_err());
        assert!(Options::parse(args(&["--headless", "many"])).is_err());
        assert!(Options::parse(args(&["--fast"])).is_err());
        assert!(Options::parse(args(&["a.json", "b.json"])).is_err());
    }

    #[test]
    fn test_demo_script_length() {
        let script = demo_script(600);
        assert_eq!(script.remaining(), 600);
    }
}

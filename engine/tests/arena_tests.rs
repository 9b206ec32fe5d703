//! Arena Tests - Full Frames Through the Public API
//!
//! Drives `World` and `FrameDriver` the way a host does: key events into a
//! `ControlState`, one snapshot per frame, injected frame times.

use std::time::Duration;

use brickfire_engine::game::{
    BuildOutcome, CollisionResponse, FireOutcome, FixedStepClock, FrameDriver, FrameView,
    InputConfig, NullRenderer, Renderer, ScriptedInput, World, WorldConfig,
};
use brickfire_engine::input::{Control, ControlState, InputSnapshot};
use glam::Vec2;
use winit::keyboard::KeyCode;

fn seeded() -> WorldConfig {
    WorldConfig {
        rng_seed: Some(11),
        ..WorldConfig::default()
    }
}

fn frame_time(frame: u64) -> Duration {
    Duration::from_millis(16 * frame)
}

/// Run idle frames until the player stands on the ground.
fn settle(world: &mut World) -> u64 {
    let mut frame = 0;
    while !world.player.can_jump && frame < 200 {
        frame += 1;
        world.update(&InputSnapshot::idle(), frame_time(frame));
    }
    frame
}

// ============================================================================
// Combat
// ============================================================================

#[test]
fn test_empty_pool_reloads_then_refills() {
    let mut world = World::new(seeded());
    let mut frame = settle(&mut world);
    let fire = InputSnapshot {
        fire: true,
        ..InputSnapshot::idle()
    };

    // Pistol: 12 rounds, one shot per 250 ms
    let mut shots = 0;
    while world.player.ammo() > 0 {
        frame += 1;
        if let Some(FireOutcome::Fired { .. }) = world.update(&fire, frame_time(frame)).fire {
            shots += 1;
        }
    }
    assert_eq!(shots, 12);
    assert!(world.player.is_reloading());
    let emptied_at = frame_time(frame);

    // Ammo stays at zero during the reload
    while frame_time(frame + 1) < emptied_at + Duration::from_millis(2000) {
        frame += 1;
        let report = world.update(&fire, frame_time(frame));
        assert_eq!(report.fire, Some(FireOutcome::Reloading));
        assert_eq!(world.player.ammo(), 0);
    }

    frame += 1;
    let report = world.update(&InputSnapshot::idle(), frame_time(frame));
    assert_eq!(report.reload_finished, Some(1));
    assert_eq!(world.player.ammo(), 12);
}

#[test]
fn test_weapon_switch_through_keys() {
    let bindings = InputConfig::default();
    let mut controls = ControlState::new();
    let mut world = World::new(seeded());

    let press = |controls: &mut ControlState, key: KeyCode| {
        if let Some(control) = bindings.control_for(key) {
            controls.handle(control, true);
            controls.handle(control, false);
        }
    };

    press(&mut controls, KeyCode::Digit3);
    world.update(&controls.snapshot(), frame_time(1));
    assert_eq!(world.player.current_weapon(), 3);

    controls.handle(Control::Fire, true);
    let report = world.update(&controls.snapshot(), frame_time(2));
    assert_eq!(report.fire, Some(FireOutcome::Fired { projectiles: 5 }));
    assert_eq!(world.projectiles.len(), 5);

    // Edge-triggered selection is consumed by the snapshot that reported it
    press(&mut controls, KeyCode::Digit1);
    controls.handle(Control::Fire, false);
    world.update(&controls.snapshot(), frame_time(3));
    assert_eq!(world.player.current_weapon(), 1);
    assert_eq!(world.player.loadout.ammo_of(3), 5);
    assert_eq!(world.player.ammo(), 12);
}

// ============================================================================
// Building
// ============================================================================

#[test]
fn test_build_spends_until_broke() {
    let mut config = WorldConfig {
        starting_materials: 25,
        ..seeded()
    };
    config.physics.collision_response = CollisionResponse::AllowEscape;
    let mut world = World::new(config);
    let mut frame = settle(&mut world);
    let build_right = InputSnapshot {
        build: true,
        move_right: true,
        ..InputSnapshot::idle()
    };

    let mut placed = 0;
    let mut refused = 0;
    for _ in 0..40 {
        frame += 1;
        match world.update(&build_right, frame_time(frame)).build {
            Some(BuildOutcome::Placed { .. }) => placed += 1,
            Some(BuildOutcome::InsufficientMaterials { .. }) => refused += 1,
            _ => {}
        }
        assert!(world.materials.get() >= 0);
    }

    assert_eq!(placed, 2);
    assert!(refused > 0);
    assert_eq!(world.materials.get(), 5);
    assert_eq!(world.buildings.len(), 2);
}

#[test]
fn test_block_underfoot_pins_player_by_default() {
    let mut world = World::new(seeded());
    let mut frame = settle(&mut world);
    let start = world.player.position;
    let build_right = InputSnapshot {
        build: true,
        move_right: true,
        ..InputSnapshot::idle()
    };

    for _ in 0..20 {
        frame += 1;
        world.update(&build_right, frame_time(frame));
    }

    assert_eq!(world.buildings.len(), 1);
    assert_eq!(world.materials.get(), 90);
    assert_eq!(world.player.position.y, start.y);
    assert!(world.player.position.x < start.x + 40.0);
}

#[test]
fn test_blocks_never_share_a_cell() {
    let mut world = World::new(seeded());
    let mut frame = settle(&mut world);
    let build = InputSnapshot {
        build: true,
        ..InputSnapshot::idle()
    };

    for _ in 0..10 {
        frame += 1;
        world.update(&build, frame_time(frame));
    }

    let blocks = world.buildings.blocks();
    assert_eq!(blocks.len(), 1);
    assert_eq!(world.materials.get(), 90);
    assert_eq!(blocks[0].position, Vec2::new(400.0, 520.0));
}

// ============================================================================
// Resources
// ============================================================================

#[test]
fn test_standing_next_to_a_node_depletes_it() {
    let mut config = seeded();
    config.resources.nodes.truncate(1);
    config.resources.nodes[0].position = Vec2::new(420.0, 530.0);
    config.resources.nodes[0].health = 30;
    let mut world = World::new(config);

    let mut earned = 0;
    for frame in 1..=200 {
        earned += world.update(&InputSnapshot::idle(), frame_time(frame)).materials_earned;
    }

    assert!(world.resources.is_empty());
    assert_eq!(earned, 25);
    assert_eq!(world.materials.get(), 125);
}

// ============================================================================
// Frame driver
// ============================================================================

struct CountingRenderer {
    frames: u64,
    max_projectiles: usize,
}

impl Renderer for CountingRenderer {
    fn render(&mut self, view: &FrameView<'_>) {
        self.frames += 1;
        self.max_projectiles = self.max_projectiles.max(view.projectiles.len());
        assert!(view.player.position.y + view.player.size.y <= view.ground_y + 1e-3);
    }
}

#[test]
fn test_driver_renders_every_frame() {
    let inputs: Vec<InputSnapshot> = (0..300)
        .map(|i| InputSnapshot {
            fire: i % 10 == 0,
            jump: i % 50 == 0,
            move_left: i % 7 == 0,
            ..InputSnapshot::idle()
        })
        .collect();
    let renderer = CountingRenderer {
        frames: 0,
        max_projectiles: 0,
    };
    let mut driver = FrameDriver::new(World::new(seeded()), renderer);

    let summary = driver.run(&mut ScriptedInput::new(inputs), &mut FixedStepClock::sixty_hz());
    assert_eq!(summary.frames, 300);
    assert_eq!(driver.renderer().frames, 300);
    assert!(summary.projectiles_spawned > 0);
    assert!(driver.renderer().max_projectiles > 0);
}

#[test]
fn test_json_config_drives_world() {
    let config = WorldConfig::from_json_str(
        r#"{
            "bounds": { "width": 400.0, "height": 300.0 },
            "ground_offset": 20.0,
            "starting_materials": 0,
            "rng_seed": 5
        }"#,
    )
    .unwrap();
    let mut driver = FrameDriver::new(World::new(config), NullRenderer);

    let mut frame = 0;
    while !driver.world().player.can_jump {
        frame += 1;
        driver.frame(&InputSnapshot::idle(), frame_time(frame));
    }
    assert_eq!(driver.world().player.bottom(), 280.0);

    let report = driver.frame(
        &InputSnapshot {
            build: true,
            ..InputSnapshot::idle()
        },
        frame_time(frame + 1),
    );
    assert!(matches!(
        report.build,
        Some(BuildOutcome::InsufficientMaterials { cost: 10, balance: 0 })
    ));
}

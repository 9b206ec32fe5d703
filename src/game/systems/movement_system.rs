//! Movement system — per-tick player physics.
//!
//! Horizontal motion is direct: a held move control displaces the player by
//! `move_speed` and sets its facing. Vertical motion integrates gravity into
//! the vertical velocity and clamps the lower edge to the ground line. There
//! is no friction, no air control limit and no double jump.

use crate::game::config::PhysicsConfig;
use crate::game::player::{Facing, Player};
use crate::input::InputSnapshot;

/// Stateless movement step.
pub struct MovementSystem;

impl MovementSystem {
    /// Advance the player by one tick.
    ///
    /// `world_width` keeps the body horizontally inside the arena and
    /// `ground_y` is the ground line. Returns `true` on ground contact.
    pub fn update(
        player: &mut Player,
        input: &InputSnapshot,
        physics: &PhysicsConfig,
        world_width: f32,
        ground_y: f32,
    ) -> bool {
        if input.move_left {
            player.position.x -= physics.move_speed;
            player.facing = Facing::Left;
        }
        if input.move_right {
            player.position.x += physics.move_speed;
            player.facing = Facing::Right;
        }
        let max_x = (world_width - player.size.x).max(0.0);
        player.position.x = player.position.x.clamp(0.0, max_x);

        // Jump only from a grounded state; cleared until the next ground contact
        if input.jump && player.can_jump {
            player.vertical_velocity = physics.jump_impulse;
            player.can_jump = false;
        }

        player.vertical_velocity += physics.gravity;
        player.position.y += player.vertical_velocity;

        // Ground collision
        if player.bottom() >= ground_y {
            player.position.y = ground_y - player.size.y;
            player.vertical_velocity = 0.0;
            player.can_jump = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::WorldConfig;

    const GROUND: f32 = 550.0;
    const WIDTH: f32 = 800.0;

    fn grounded_player() -> Player {
        let mut player = Player::new(&WorldConfig::default());
        player.position.y = GROUND - player.size.y;
        player.can_jump = true;
        player
    }

    fn step(player: &mut Player, input: InputSnapshot) -> bool {
        MovementSystem::update(player, &input, &PhysicsConfig::default(), WIDTH, GROUND)
    }

    #[test]
    fn test_falls_and_lands() {
        let mut player = Player::new(&WorldConfig::default());
        assert!(!player.can_jump);

        let mut landed = false;
        for _ in 0..100 {
            landed = step(&mut player, InputSnapshot::idle());
            assert!(player.bottom() <= GROUND);
            if landed {
                break;
            }
        }
        assert!(landed);
        assert!(player.can_jump);
        assert_eq!(player.vertical_velocity, 0.0);
        assert_eq!(player.bottom(), GROUND);
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut player = Player::new(&WorldConfig::default());
        step(&mut player, InputSnapshot::idle());
        assert_eq!(player.vertical_velocity, 0.5);
        assert_eq!(player.position.y, 300.5);
        step(&mut player, InputSnapshot::idle());
        assert_eq!(player.vertical_velocity, 1.0);
        assert_eq!(player.position.y, 301.5);
    }

    #[test]
    fn test_jump_applies_impulse_once() {
        let mut player = grounded_player();
        let jump = InputSnapshot {
            jump: true,
            ..InputSnapshot::idle()
        };

        step(&mut player, jump);
        assert!(!player.can_jump);
        assert_eq!(player.vertical_velocity, -12.0 + 0.5);

        // Second jump input while airborne only adds gravity
        step(&mut player, jump);
        assert_eq!(player.vertical_velocity, -12.0 + 1.0);
    }

    #[test]
    fn test_jump_needs_can_jump() {
        let mut player = grounded_player();
        player.can_jump = false;
        player.position.y -= 100.0;

        step(
            &mut player,
            InputSnapshot {
                jump: true,
                ..InputSnapshot::idle()
            },
        );
        assert_eq!(player.vertical_velocity, 0.5);
    }

    #[test]
    fn test_horizontal_move_sets_facing() {
        let mut player = grounded_player();

        step(
            &mut player,
            InputSnapshot {
                move_left: true,
                ..InputSnapshot::idle()
            },
        );
        assert_eq!(player.position.x, 395.0);
        assert_eq!(player.facing, Facing::Left);

        step(
            &mut player,
            InputSnapshot {
                move_right: true,
                ..InputSnapshot::idle()
            },
        );
        assert_eq!(player.position.x, 400.0);
        assert_eq!(player.facing, Facing::Right);
    }

    #[test]
    fn test_stays_inside_world_horizontally() {
        let mut player = grounded_player();
        player.position.x = 2.0;
        step(
            &mut player,
            InputSnapshot {
                move_left: true,
                ..InputSnapshot::idle()
            },
        );
        assert_eq!(player.position.x, 0.0);

        player.position.x = WIDTH - player.size.x;
        step(
            &mut player,
            InputSnapshot {
                move_right: true,
                ..InputSnapshot::idle()
            },
        );
        assert_eq!(player.position.x, WIDTH - player.size.x);
    }
}

//! Collision system — player vs placed blocks.
//!
//! Naive full revert: when the moved player overlaps a block, the player goes
//! back to its pre-move position on both axes, even if only one axis caused
//! the overlap. A revert while falling zeroes the vertical velocity but never
//! grants a jump; only the ground does that.
//!
//! [`CollisionResponse::AllowEscape`] relaxes the check for blocks that
//! already overlapped the pre-move body, so a player can leave a block placed
//! on its own cell.

use glam::Vec2;
use log::trace;

use crate::game::config::CollisionResponse;
use crate::game::player::Player;
use crate::game::state::Block;
use crate::physics::Aabb2;

/// Stateless collision step.
pub struct CollisionSystem;

impl CollisionSystem {
    /// Resolve the player against `blocks`. `previous` is the player's
    /// position captured before movement. Returns `true` if the move was
    /// reverted.
    pub fn resolve_player_blocks(
        player: &mut Player,
        previous: Vec2,
        blocks: &[Block],
        response: CollisionResponse,
    ) -> bool {
        let before = Aabb2::from_pos_size(previous, player.size);
        let after = player.bounds();

        let hit = blocks.iter().find(|block| {
            let bounds = block.bounds();
            match response {
                CollisionResponse::FullRevert => bounds.overlaps(&after),
                CollisionResponse::AllowEscape => {
                    bounds.overlaps(&after) && !bounds.overlaps(&before)
                }
            }
        });
        let Some(block) = hit else {
            return false;
        };

        trace!(
            "[Collision] Player blocked by cell ({}, {})",
            block.cell.x, block.cell.y
        );
        player.position = previous;
        if player.vertical_velocity > 0.0 {
            player.vertical_velocity = 0.0;
        }
        true
    }
}

//! Input Configuration
//!
//! Key bindings as data. The host feeds winit key codes through
//! [`InputConfig::control_for`] and forwards the result to a
//! [`ControlState`](crate::input::ControlState).

use winit::keyboard::KeyCode;

use crate::input::Control;

/// Movement key bindings.
#[derive(Clone, Debug)]
pub struct MovementBindings {
    pub left: [KeyCode; 2],
    pub right: [KeyCode; 2],
    pub jump: [KeyCode; 2],
}

/// Combat key bindings. `weapon_keys[i]` selects weapon id `i + 1`.
#[derive(Clone, Debug)]
pub struct CombatBindings {
    pub fire: KeyCode,
    pub reload: KeyCode,
    pub weapon_keys: [KeyCode; 4],
}

/// Building key bindings. `building_keys[i]` selects building id `i + 1`.
#[derive(Clone, Debug)]
pub struct BuildingBindings {
    pub place: KeyCode,
    pub building_keys: [KeyCode; 4],
}

/// Centralized input configuration containing all key bindings.
#[derive(Clone, Debug)]
pub struct InputConfig {
    pub movement: MovementBindings,
    pub combat: CombatBindings,
    pub building: BuildingBindings,
    pub exit: KeyCode,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            movement: MovementBindings {
                left: [KeyCode::KeyA, KeyCode::ArrowLeft],
                right: [KeyCode::KeyD, KeyCode::ArrowRight],
                jump: [KeyCode::KeyW, KeyCode::ArrowUp],
            },
            combat: CombatBindings {
                fire: KeyCode::Space,
                reload: KeyCode::KeyR,
                weapon_keys: [
                    KeyCode::Digit1,
                    KeyCode::Digit2,
                    KeyCode::Digit3,
                    KeyCode::Digit4,
                ],
            },
            building: BuildingBindings {
                place: KeyCode::KeyE,
                building_keys: [KeyCode::F1, KeyCode::F2, KeyCode::F3, KeyCode::F4],
            },
            exit: KeyCode::Escape,
        }
    }
}

impl InputConfig {
    /// Map a key to the control it is bound to.
    ///
    /// Returns `None` for unbound keys (including `exit`, which the host
    /// handles itself).
    pub fn control_for(&self, key: KeyCode) -> Option<Control> {
        if self.movement.left.contains(&key) {
            return Some(Control::MoveLeft);
        }
        if self.movement.right.contains(&key) {
            return Some(Control::MoveRight);
        }
        if self.movement.jump.contains(&key) {
            return Some(Control::Jump);
        }
        if key == self.combat.fire {
            return Some(Control::Fire);
        }
        if key == self.combat.reload {
            return Some(Control::Reload);
        }
        if key == self.building.place {
            return Some(Control::Build);
        }
        if let Some(slot) = self.combat.weapon_keys.iter().position(|k| *k == key) {
            return Some(Control::SelectWeapon(slot as u8 + 1));
        }
        if let Some(slot) = self.building.building_keys.iter().position(|k| *k == key) {
            return Some(Control::SelectBuilding(slot as u8 + 1));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        let config = InputConfig::default();
        assert_eq!(config.control_for(KeyCode::KeyA), Some(Control::MoveLeft));
        assert_eq!(config.control_for(KeyCode::ArrowRight), Some(Control::MoveRight));
        assert_eq!(config.control_for(KeyCode::KeyW), Some(Control::Jump));
    }

    #[test]
    fn test_selection_keys_are_one_based() {
        let config = InputConfig::default();
        assert_eq!(config.control_for(KeyCode::Digit1), Some(Control::SelectWeapon(1)));
        assert_eq!(config.control_for(KeyCode::Digit3), Some(Control::SelectWeapon(3)));
        assert_eq!(config.control_for(KeyCode::F2), Some(Control::SelectBuilding(2)));
    }

    #[test]
    fn test_action_keys() {
        let config = InputConfig::default();
        assert_eq!(config.control_for(KeyCode::Space), Some(Control::Fire));
        assert_eq!(config.control_for(KeyCode::KeyE), Some(Control::Build));
        assert_eq!(config.control_for(KeyCode::KeyR), Some(Control::Reload));
    }

    #[test]
    fn test_unbound_keys() {
        let config = InputConfig::default();
        assert_eq!(config.control_for(KeyCode::KeyQ), None);
        assert_eq!(config.control_for(KeyCode::Escape), None);
    }
}

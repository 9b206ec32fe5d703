//! Control State Module
//!
//! Tracks the named game controls between frames and produces the per-frame
//! [`InputSnapshot`] consumed by the simulation. Decoupled from the windowing
//! system: the host maps its own key events onto [`Control`] values.
//!
//! Held controls (movement, jump, fire, build) stay active for as long as the
//! key is down. Reload and the selection controls are edge-triggered: a press
//! is reported by exactly one snapshot, no matter how long the key is held.

/// A named control the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MoveLeft,
    MoveRight,
    Jump,
    Fire,
    /// Place the selected building
    Build,
    Reload,
    /// Select weapon by catalog id (1..N)
    SelectWeapon(u8),
    /// Select building by catalog id (1..N)
    SelectBuilding(u8),
}

/// Input state for a single simulation frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub fire: bool,
    pub build: bool,
    pub reload: bool,
    pub select_weapon: Option<u8>,
    pub select_building: Option<u8>,
}

impl InputSnapshot {
    /// Snapshot with every control released.
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Accumulates control events between frames.
#[derive(Debug, Clone, Default)]
pub struct ControlState {
    move_left: bool,
    move_right: bool,
    jump: bool,
    fire: bool,
    build: bool,
    reload_pressed: bool,
    weapon_pressed: Option<u8>,
    building_pressed: Option<u8>,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a press or release of `control`.
    pub fn handle(&mut self, control: Control, pressed: bool) {
        match control {
            Control::MoveLeft => self.move_left = pressed,
            Control::MoveRight => self.move_right = pressed,
            Control::Jump => self.jump = pressed,
            Control::Fire => self.fire = pressed,
            Control::Build => self.build = pressed,
            Control::Reload if pressed => self.reload_pressed = true,
            Control::SelectWeapon(id) if pressed => self.weapon_pressed = Some(id),
            Control::SelectBuilding(id) if pressed => self.building_pressed = Some(id),
            // Releases of edge-triggered controls carry no information.
            Control::Reload | Control::SelectWeapon(_) | Control::SelectBuilding(_) => {}
        }
    }

    /// Produce the snapshot for this frame and consume pending edges.
    pub fn snapshot(&mut self) -> InputSnapshot {
        InputSnapshot {
            move_left: self.move_left,
            move_right: self.move_right,
            jump: self.jump,
            fire: self.fire,
            build: self.build,
            reload: std::mem::take(&mut self.reload_pressed),
            select_weapon: self.weapon_pressed.take(),
            select_building: self.building_pressed.take(),
        }
    }

    /// Release every control (e.g. when the window loses focus).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

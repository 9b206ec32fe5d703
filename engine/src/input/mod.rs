//! Input Module
//!
//! Platform-agnostic control tracking. The simulation reads one
//! [`InputSnapshot`] per frame and never sees raw device events.
//!
//! # Example
//!
//! ```rust,ignore
//! use brickfire_engine::input::{Control, ControlState};
//!
//! let mut controls = ControlState::new();
//! controls.handle(Control::MoveRight, true);
//! controls.handle(Control::SelectWeapon(3), true);
//!
//! let snapshot = controls.snapshot();
//! assert!(snapshot.move_right);
//! assert_eq!(snapshot.select_weapon, Some(3));
//! ```

pub mod controls;

pub use controls::{Control, ControlState, InputSnapshot};

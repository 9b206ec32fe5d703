//! Economy Module
//!
//! Material income from harvesting and spending on structures.

pub mod materials;

pub use materials::{MaterialBalance, STARTING_MATERIALS};

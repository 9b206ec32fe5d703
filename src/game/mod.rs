//! Game Module
//!
//! The arena simulation built on top of the engine: catalogs, configuration,
//! the player, per-frame systems, the world state and the frame driver.

pub mod catalog;
pub mod config;
pub mod driver;
pub mod economy;
pub mod player;
pub mod state;
pub mod systems;
pub mod view;

pub use catalog::{
    BuildingCatalog, BuildingDef, BuildingId, BuildingShape, WeaponArchetype, WeaponCatalog,
    WeaponDef, WeaponId,
};
pub use config::{CollisionResponse, ConfigError, InputConfig, ReloadSwitchPolicy, WorldConfig};
pub use driver::{
    FixedStepClock, FrameClock, FrameDriver, InputSource, NullRenderer, RealtimeClock, Renderer,
    RunSummary, ScriptedInput,
};
pub use economy::MaterialBalance;
pub use player::{Facing, Loadout, Player, ReloadTimer};
pub use state::{Block, BlockKind, FrameReport, Projectile, ResourceKind, ResourceNode, World};
pub use systems::{BuildOutcome, FireOutcome};
pub use view::{FrameView, HudView, PlayerView};

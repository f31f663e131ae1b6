pub mod animation;
pub mod contract;
pub mod error;
pub mod rate_limit;
pub mod sector_map;
pub mod shared_wheel_game;
pub mod spin_config;
pub mod spin_resolver;

pub use error::{BetError, ConfigError, GameError, SpinError, Violation};
pub use sector_map::{Sector, SectorMap, WheelColor, COLOR_SECTORS};
pub use spin_config::SpinConfig;
pub use spin_resolver::{resolve, SpinRequest, SpinResolver, SpinResult, WheelState};

pub mod config;
pub mod core;

pub use config::{ConfigError, RomanizerConfig};
pub use crate::core::cleanup::cleanup_hyphens;
pub use crate::core::romanizer::{romanize, romanize_syllable, Romanizer};
pub use crate::core::surname::SurnameTable;
pub use crate::core::unicode::{decompose_syllable, is_hangul_syllable};

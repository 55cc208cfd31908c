mod config;
mod load;

pub use crate::config::{Board, Config, Dump};
pub use load::{ConfigError, ConfigType};

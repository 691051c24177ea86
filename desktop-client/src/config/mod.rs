mod main_config;
mod display_config;
mod speed_config;

pub use main_config::{get_config_store, Config};
pub use display_config::DisplayConfig;
pub use speed_config::SpeedConfig;

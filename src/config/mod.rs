/// Display settings and seed records loading from config.toml
pub mod settings;

pub use settings::{AppConfig, DisplayConfig, config_path, load_config, load_default_config};

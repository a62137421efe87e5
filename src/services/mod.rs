mod config_template;

pub use config_template::starter_config;

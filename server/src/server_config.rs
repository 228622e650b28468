use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::leaderboard::DEFAULT_TOP_SCORES_LIMIT;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "snake_leaderboard_server_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, ServerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub default_top_scores_limit: usize,
    pub max_top_scores_limit: usize,
    pub seed_demo_data: bool,
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bind_address.is_empty() {
            return Err("bind_address must not be empty".to_string());
        }
        if self.default_top_scores_limit == 0 {
            return Err("default_top_scores_limit must be greater than 0".to_string());
        }
        if self.max_top_scores_limit < self.default_top_scores_limit {
            return Err("max_top_scores_limit must not be less than default_top_scores_limit".to_string());
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            default_top_scores_limit: DEFAULT_TOP_SCORES_LIMIT,
            max_top_scores_limit: 100,
            seed_demo_data: true,
        }
    }
}

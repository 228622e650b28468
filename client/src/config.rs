use std::time::Duration;
use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::{MAX_SCORE_PER_FOOD, SnakeSessionSettings, WallCollisionMode};
use common::leaderboard::DEFAULT_TOP_SCORES_LIMIT;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "snake_client_config.yaml";

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(CONFIG_FILE)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub leaderboard: LeaderboardConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.leaderboard.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub tick_interval_ms: u32,
    pub wall_collision_mode: WallCollisionMode,
    pub score_per_food: u32,
}

impl GameConfig {
    pub fn session_settings(&self) -> SnakeSessionSettings {
        SnakeSessionSettings {
            tick_interval: Duration::from_millis(self.tick_interval_ms as u64),
            wall_collision_mode: self.wall_collision_mode,
            score_per_food: self.score_per_food,
            ..SnakeSessionSettings::default()
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.tick_interval_ms < 50 {
            return Err("tick_interval_ms must be at least 50".to_string());
        }
        if self.tick_interval_ms > 1000 {
            return Err("tick_interval_ms must not exceed 1000".to_string());
        }
        if self.score_per_food == 0 {
            return Err("score_per_food must be greater than 0".to_string());
        }
        if self.score_per_food > MAX_SCORE_PER_FOOD {
            return Err(format!("score_per_food must not exceed {}", MAX_SCORE_PER_FOOD));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LeaderboardConfig {
    pub top_scores_limit: usize,
    pub seed_demo_data: bool,
}

impl Validate for LeaderboardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.top_scores_limit == 0 {
            return Err("top_scores_limit must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig {
                tick_interval_ms: 150,
                wall_collision_mode: WallCollisionMode::Death,
                score_per_food: 10,
            },
            leaderboard: LeaderboardConfig {
                top_scores_limit: DEFAULT_TOP_SCORES_LIMIT,
                seed_demo_data: true,
            },
        }
    }
}

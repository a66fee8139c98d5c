use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub db_connection_pool_max_size: usize,
    pub db_connection_pool_idle_size: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommunityConfig {
    pub leaderboard_limit: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    // global
    pub log_level: String,

    pub database: DatabaseConfig,
    pub community: CommunityConfig,
}

impl Config {
    pub fn load_toml() -> Result<Self> {
        let config_str = fs::read_to_string("config.toml")?;
        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }
}

use crate::cli::Cli;
use crate::error::TableResult;
use crate::storage::Sources;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::Level;

const TRACE_LEVELS: [&'static str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];
const LOCAL_SETTINGS_YAML_FILE: &str = ".env.local.yaml";

// All settings may be configured via environment variables. Example:
// PORT="3000" would set port to 3000.
// A local '.env.local.yaml' file and command line flags take precedence.
#[derive(Deserialize, Debug)]
pub struct Settings {
    #[serde(default = "default_trace_level")]
    trace_level: String,
    #[serde(default = "default_port")]
    pub port: u16,
    // Label of the live season
    #[serde(default = "default_current_year")]
    pub current_year: String,
    #[serde(default = "default_womens_table_url")]
    pub womens_table_url: String,
    #[serde(default = "default_mens_table_url")]
    pub mens_table_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_fetch_timeout_sec")]
    pub fetch_timeout_sec: u64,
    #[serde(default = "default_cache_ttl_sec")]
    pub cache_ttl_sec: u64,
    #[serde(default = "default_cache_cleanup_interval_sec")]
    pub cache_cleanup_interval_sec: u64,
}

impl Settings {
    pub fn new(cli: &Cli) -> TableResult<Self> {
        let figment = match Path::new(LOCAL_SETTINGS_YAML_FILE).exists() {
            true => {
                println!(
                    "\n######################################\n\
                       ##   Found '.env.local.yaml' file,  ##\n\
                       ##   loading local configuration.   ##\n\
                       ######################################\n\
                    "
                );
                Figment::new().merge(Yaml::file(LOCAL_SETTINGS_YAML_FILE))
            }
            false => Figment::new(),
        };

        Self::from_figment(figment.merge(Env::raw()).merge(Serialized::defaults(cli)))
    }

    pub fn from_figment(figment: Figment) -> TableResult<Self> {
        Ok(figment.extract()?)
    }

    pub fn get_trace_level(&self) -> Level {
        get_trace_level(&self.trace_level)
    }

    pub fn sources(&self) -> Sources {
        Sources {
            women: self.womens_table_url.clone(),
            men: self.mens_table_url.clone(),
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_sec)
    }

    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.cache_ttl_sec as i64)
    }

    pub fn cache_cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cache_cleanup_interval_sec)
    }
}

fn get_trace_level(level_str: &str) -> Level {
    match level_str {
        level if level == TRACE_LEVELS[0] => Level::TRACE,
        level if level == TRACE_LEVELS[1] => Level::DEBUG,
        level if level == TRACE_LEVELS[2] => Level::INFO,
        level if level == TRACE_LEVELS[3] => Level::WARN,
        level if level == TRACE_LEVELS[4] => Level::ERROR,
        // Default trace level
        _ => Level::INFO,
    }
}

fn default_trace_level() -> String {
    "INFO".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_current_year() -> String {
    "2022".to_string()
}

fn default_womens_table_url() -> String {
    "https://www.espncricinfo.com/series/the-hundred-women-s-competition-2022-1299144/points-table-standings".to_string()
}

fn default_mens_table_url() -> String {
    "https://www.espncricinfo.com/series/the-hundred-men-s-competition-2022-1299141/points-table-standings".to_string()
}

fn default_user_agent() -> String {
    "https://sean.mcgivern.me.uk/the-hundred-combined-table/".to_string()
}

fn default_fetch_timeout_sec() -> u64 {
    10
}

fn default_cache_ttl_sec() -> u64 {
    600
}

fn default_cache_cleanup_interval_sec() -> u64 {
    300
}

use log::LevelFilter;
use serde::Deserialize;
use std::{
    env,
    fs::read_to_string,
    net::{IpAddr, Ipv4Addr},
    path::Path,
};

/// Environment variable key to load the config from
const CONFIG_ENV_KEY: &str = "IT_CONFIG_JSON";

pub fn load_config() -> Option<Config> {
    // Attempt to load the config from the env
    if let Ok(env) = env::var(CONFIG_ENV_KEY) {
        let config: Config = match serde_json::from_str(&env) {
            Ok(value) => value,
            Err(err) => {
                eprintln!("Failed to load env config (Using default): {err:?}");
                return None;
            }
        };
        return Some(config);
    }

    // Attempt to load the config from disk
    let file = Path::new("config.json");
    if !file.exists() {
        return None;
    }

    let data = match read_to_string(file) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Failed to load config file (Using defaults): {err:?}");
            return None;
        }
    };

    let config: Config = match serde_json::from_str(&data) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Failed to load config file (Using default): {err:?}");
            return None;
        }
    };

    Some(config)
}

pub type Port = u16;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: IpAddr,
    pub port: Port,
    pub logging: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            logging: LevelFilter::Info,
        }
    }
}

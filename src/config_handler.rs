use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    pub cohort: String,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    "https://fsa-puppy-bowl.herokuapp.com/api".to_string()
}

impl Config {
    /// Base resource URL for the roster collection, with the cohort
    /// interpolated into the path.
    pub fn players_url(&self) -> String {
        format!("{}/{}/players", self.api_base_url, self.cohort)
    }
}

pub fn get_config() -> anyhow::Result<Config> {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./deployment/config.json".to_string());
    let data = fs::read_to_string(&path)
        .with_context(|| format!("Unable to read config at {path}"))?;
    let mut result: Config = serde_json::from_str(&data)
        .with_context(|| format!("Could not parse JSON at {path}"))?;
    if let Ok(cohort) = std::env::var("COHORT") {
        result.cohort = cohort;
        println!("[CONFIG] COHORT {}", result.cohort);
    }
    println!("[CONFIG] {:?}", result);
    Ok(result)
}

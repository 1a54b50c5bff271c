// SPDX-License-Identifier: MIT
//
// Where n-pad keeps its files.
//
//   config  <config_dir>/n-pad/config.toml   (override: N_PAD_CONFIG_DIR)
//   log     <cache_dir>/n-pad/n-pad.log      (override: N_PAD_CACHE_DIR)

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};

const APP_DIR: &str = "n-pad";

pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("N_PAD_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let strategy = choose_base_strategy().context("cannot locate the config directory")?;
    Ok(strategy.config_dir().join(APP_DIR))
}

pub fn cache_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("N_PAD_CACHE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let strategy = choose_base_strategy().context("cannot locate the cache directory")?;
    Ok(strategy.cache_dir().join(APP_DIR))
}

pub fn default_config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn default_log_file() -> Result<PathBuf> {
    Ok(cache_dir()?.join("n-pad.log"))
}

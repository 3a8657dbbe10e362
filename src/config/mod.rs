// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for hu.
//!
//! This module handles discovering, loading and validating `hu.toml`.

pub mod default;
mod loader;
mod schema;

pub use loader::{find_config_file, load_config, load_config_from, parse_config, CONFIG_FILES};
pub use schema::*;

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hugo project context.
//!
//! Every command runs against a project root that is expected to hold a
//! Hugo configuration file. This module finds and validates that root.

mod detector;

pub use detector::{detect_config, HugoProject, HUGO_CONFIG_DIR, HUGO_CONFIG_FILES};

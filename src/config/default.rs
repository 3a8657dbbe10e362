// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Example configuration written by `hu init`.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r##"# hu configuration
# Command-line flags take precedence over these values.

# Broken link checker (hu 404-links)
[links]
content_dir = "content"
# Glob patterns of links that are never reported
ignore = []
# Verify /path/file.ext links against static/ and the content directory
check_static = false

# Social preview images (hu svg)
[svg]
content_dir = "content"
width = 1200
height = 630
bg = "#f3f4f6"
fg = "#0b1220"
"##
}

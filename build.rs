// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Outside a git checkout vergen emits placeholders; `hu version` hides them.
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()?;
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}

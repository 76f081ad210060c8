//! `sb version` -- print version and platform info.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Version string. Set at compile time via Cargo.toml (workspace version).
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Execute the `sb version` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;

    if ctx.json {
        let info = serde_json::json!({
            "version": VERSION,
            "os": os,
            "arch": arch,
        });
        output_json(&info);
    } else {
        println!("sb version {} {}/{}", VERSION, os, arch);
    }

    Ok(())
}

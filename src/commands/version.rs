//! Version command implementation

use crate::agent::AgentRegistry;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("instill {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  Supported agents: {}", AgentRegistry::builtin().all().len());

    Ok(())
}

fn rustc_version() -> &'static str {
    // Minimum supported version from Cargo.toml
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

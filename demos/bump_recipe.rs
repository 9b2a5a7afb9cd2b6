//! Example: Rewrite the version in the conanfile.py of the current project
//!
//! Run with: cargo run --example bump_recipe -- 7.31.67

use anyhow::Result;
use recipe_version::providers::{VersionProvider, conanfile_provider::ConanfileProvider};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let new_version = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: bump_recipe <new-version>"))?;

    let provider = ConanfileProvider::new("./");

    let current = provider.get_version()?;
    println!("Current version: {}", current);

    provider.set_version(&new_version)?;
    println!("New version: {}", provider.get_version()?);

    Ok(())
}

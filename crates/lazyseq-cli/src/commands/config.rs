//! Configuration commands.

use anyhow::{Context, Result};
use lazyseq_config::LazyseqConfig;

/// Show the effective configuration.
pub fn show(config: &LazyseqConfig, format: &str) -> Result<()> {
    match format {
        "toml" => {
            let rendered = config.to_toml().context("Failed to render configuration")?;
            print!("{rendered}");
        }
        "text" => {
            println!("lazyseq configuration");
            println!("=====================\n");

            println!("Display:");
            println!("  Offset: {}", config.display.offset);
            println!("  Count: {}", config.display.count);
            println!("  Separator: {:?}", config.display.separator);
            println!();

            println!("Limits:");
            println!("  Max materialize: {}", config.limits.max_materialize);
        }
        other => anyhow::bail!("Unknown format '{other}' (expected 'toml' or 'text')"),
    }

    Ok(())
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lifelog_core` linkage and
//!   configuration loading.
//! - Keep output deterministic for quick local sanity checks.

use std::path::Path;

fn main() {
    let config_path = std::env::var("LIFELOG_CONFIG").unwrap_or_else(|_| "lifelog.toml".to_string());
    let config = match lifelog_core::Config::load(Path::new(&config_path)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("lifelog: {err}");
            std::process::exit(1);
        }
    };

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = lifelog_core::init_logging(&config.log_level, log_dir) {
            eprintln!("lifelog: {err}");
            std::process::exit(1);
        }
    }

    println!("lifelog_core version={}", lifelog_core::core_version());
    println!(
        "store_url={}",
        if config.store_url.is_empty() {
            "(unset)"
        } else {
            &config.store_url
        }
    );
}

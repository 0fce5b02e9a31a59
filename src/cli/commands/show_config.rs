//! Print the effective policy

use std::path::Path;

use branchlint::config;
use branchlint::core::models::PolicyOverrides;
use branchlint::output::OutputMode;
use branchlint::paths;

/// Print the policy that `lint` would use, with its origin
pub fn show_config(config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let root = paths::project_root(&std::env::current_dir()?);
    let loaded = config::load_policy(config_path, &root)?;

    match mode {
        OutputMode::Human => {
            println!("# source: {}", loaded.source);
            print!("{}", config::render_toml(&loaded.policy)?);
        },
        OutputMode::Json => {
            let json = serde_json::json!({
                "source": loaded.source.to_string(),
                "policy": PolicyOverrides::from(&loaded.policy),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        },
    }

    Ok(())
}

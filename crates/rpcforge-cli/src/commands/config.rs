//! `rpcforge config`: inspect the effective configuration.

use serde_json::Value;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            println!("{}", get_config_value(&config, &key)?);
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            print!("{serialised}");
        }

        ConfigCommands::Path => {
            println!(
                "{}",
                AppConfig::active_path(global.config.as_deref()).display()
            );
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `layout.facade_dir` or `projects.treasurecore.core_proxy`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let tree = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let value = key
        .split('.')
        .try_fold(&tree, |node, part| node.get(part))
        .ok_or_else(|| CliError::invalid_input(format!("Unknown config key: '{key}'")))?;

    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        let mut config = AppConfig::default();
        config.defaults.author = Some("jane".into());
        assert_eq!(get_config_value(&config, "defaults.author").unwrap(), "jane");
        assert_eq!(get_config_value(&config, "output.format").unwrap(), "auto");
        assert_eq!(get_config_value(&config, "output.no_color").unwrap(), "false");
        assert_eq!(get_config_value(&config, "generate.on_duplicate").unwrap(), "skip");
    }

    #[test]
    fn unset_optional_is_empty() {
        let config = AppConfig::default();
        assert_eq!(get_config_value(&config, "defaults.root").unwrap(), "");
    }

    #[test]
    fn unknown_key_is_user_error() {
        let err = get_config_value(&AppConfig::default(), "defaults.colour").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}

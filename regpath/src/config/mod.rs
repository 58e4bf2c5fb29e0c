use libregpath::Config;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config file path, respecting REGPATH_CONFIG environment variable
pub fn get_config_path() -> PathBuf {
    if let Ok(config_path) = env::var("REGPATH_CONFIG") {
        return PathBuf::from(config_path);
    }

    // Default to ~/.config/regpath/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("regpath").join("config.yaml")
    } else {
        // Fallback to current directory
        PathBuf::from("config.yaml")
    }
}

/// Load configuration from defaults, the config file and the environment
///
/// A missing file is skipped unless `required` is set, which is the case for
/// paths given through `--config` or `REGPATH_CONFIG`.
pub fn load_config(config_path: &Path, required: bool) -> Result<Config, String> {
    if required && !config_path.exists() {
        return Err(format!(
            "Config file not found: {}",
            config_path.display()
        ));
    }
    let file = config_path.exists().then_some(config_path);
    Config::load(file).map_err(|e| match std::error::Error::source(&e) {
        Some(cause) => format!("{} ({}): {}", e, config_path.display(), cause),
        None => format!("{} ({})", e, config_path.display()),
    })
}

/// Save configuration to a file as YAML
pub fn save_config(config: &Config, config_path: &Path) -> Result<(), String> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = config_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let yaml =
        serde_yaml::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))?;

    fs::write(config_path, yaml).map_err(|e| format!("Failed to write config file: {}", e))
}

/// Initialize a new config file with default values
pub fn init_config(config_path: &Path) -> Result<(), String> {
    if config_path.exists() {
        return Err(format!(
            "Config file already exists at {}. Edit it directly or remove it to recreate.",
            config_path.display()
        ));
    }

    save_config(&Config::default(), config_path)
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

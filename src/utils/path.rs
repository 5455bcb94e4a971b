use std::path::PathBuf;

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (always ~/.config/polaris-login, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    get_home_dir().join(".config").join("polaris-login")
}

/// Get the config file path (always ~/.config/polaris-login/config.toml, regardless of OS)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Get the cache directory used for log files
pub fn get_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("polaris-login")
}

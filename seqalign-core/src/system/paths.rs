use std::path::PathBuf;
use std::sync::OnceLock;

// Cache the paths to avoid repeated environment lookups
static SEQALIGN_HOME: OnceLock<PathBuf> = OnceLock::new();

/// Get the seqalign home directory
/// Checks SEQALIGN_HOME environment variable, falls back to ${HOME}/.seqalign
pub fn seqalign_home() -> PathBuf {
    SEQALIGN_HOME
        .get_or_init(|| {
            if let Ok(path) = std::env::var("SEQALIGN_HOME") {
                PathBuf::from(path)
            } else {
                let home = std::env::var("HOME").unwrap_or_else(|_| {
                    std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
                });
                PathBuf::from(home).join(".seqalign")
            }
        })
        .clone()
}

/// Path of the config file picked up when no `--config` is given
pub fn default_config_path() -> PathBuf {
    seqalign_home().join("config.toml")
}

/// Check if a custom home directory is configured
pub fn is_custom_home() -> bool {
    std::env::var("SEQALIGN_HOME").is_ok()
}

/// Get a human-readable description of the current path configuration
pub fn describe_paths() -> String {
    format!(
        "seqalign Paths:\n  \
        Home: {}\n  \
        Config: {}\n  \
        Custom: {}",
        seqalign_home().display(),
        default_config_path().display(),
        if is_custom_home() {
            "Yes"
        } else {
            "No (using defaults)"
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_inside_home() {
        let config = default_config_path();
        assert!(config.starts_with(seqalign_home()));
        assert!(config.ends_with("config.toml"));
    }

    #[test]
    fn test_home_is_cached() {
        assert_eq!(seqalign_home(), seqalign_home());
    }

    #[test]
    fn test_describe_paths() {
        let description = describe_paths();
        assert!(description.contains("seqalign Paths:"));
        assert!(description.contains("Home:"));
        assert!(description.contains("Config:"));
    }
}

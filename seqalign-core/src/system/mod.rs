pub mod paths;

// Re-export commonly used functions
pub use paths::{default_config_path, describe_paths, is_custom_home, seqalign_home};

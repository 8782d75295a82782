//! Core utilities and types shared across all seqalign crates

pub mod config;
pub mod error;
pub mod system;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, load_default_config, save_config, Config};
pub use error::{SeqAlignError, SeqAlignResult};

// Re-export core types
pub use types::OutputFormat;

// Re-export system utilities
pub use system::{default_config_path, seqalign_home};


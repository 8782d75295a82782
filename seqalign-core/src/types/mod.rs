/// Core types shared across all seqalign modules
pub mod format;

// Re-export commonly used types at module level
pub use format::OutputFormat;

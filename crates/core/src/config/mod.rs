//! Configuration management for runc

mod settings;

// Re-export main types
pub use settings::Settings;

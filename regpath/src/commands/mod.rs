/// Config command handlers
pub mod config;

/// Path validation, decomposition and resolution commands
pub mod path;

/// Version command handlers
pub mod version;

//! cmdify - Thin wrappers around common POSIX commands
//!
//! This crate provides:
//! - Direct process execution with independent stdout/stderr capture
//! - Shell-interpreted command lines via a detected interpreter (`<shell> -c`)
//! - Shell detection from process environment variables
//! - Convenience operations (`ls`, `pwd`, `host`, `mkdir`, `touch`)

pub mod commands;
pub mod executor;
pub mod shells;

pub use executor::{CommandExecutor, CommandResult, ExecutorConfig, ExecutorError};
pub use shells::{detect_shells, detect_shells_from_env, EnvLookup, SystemEnv};

/// Current version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_library_exports() {
        // Verify all main types are exported
        let _config = ExecutorConfig::default();
        let _executor = CommandExecutor::default();
        let _shells = detect_shells_from_env();
    }
}

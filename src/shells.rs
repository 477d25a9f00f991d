//! Shell detection from process environment variables

use std::collections::HashMap;
use std::env;
use tracing::debug;

/// Lookup capability for environment variables.
///
/// The detector takes this as an explicit input instead of reading
/// process-global state, so tests can drive it with a plain map.
pub trait EnvLookup {
    /// Get the value of an environment variable, if set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvLookup for SystemEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Build the ordered list of shell-candidate names from the environment.
///
/// Reads, in fixed order: `SHELL` (basename appended first), then the
/// `BASH_VERSION`, `ZSH_VERSION`, and `SHLVL` markers, appending the literal
/// names `"bash"`, `"zsh"`, and `"sh"` for whichever are set to a non-empty
/// value. No de-duplication and no check that the interpreter exists on the
/// execution path; the list may legitimately be empty.
pub fn detect_shells<E: EnvLookup>(env: &E) -> Vec<String> {
    let mut shells = Vec::new();

    // SHELL typically contains the user's default shell as a path
    if let Some(shell_path) = env.var("SHELL").filter(|v| !v.is_empty()) {
        if let Some(base) = shell_path.rsplit('/').next() {
            shells.push(base.to_string());
        }
    }

    // Marker values are ignored; only presence matters
    if env.var("BASH_VERSION").is_some_and(|v| !v.is_empty()) {
        shells.push("bash".to_string());
    }

    if env.var("ZSH_VERSION").is_some_and(|v| !v.is_empty()) {
        shells.push("zsh".to_string());
    }

    if env.var("SHLVL").is_some_and(|v| !v.is_empty()) {
        shells.push("sh".to_string());
    }

    debug!("Detected {} shell candidate(s)", shells.len());

    shells
}

/// Detect shell candidates from the real process environment.
pub fn detect_shells_from_env() -> Vec<String> {
    detect_shells(&SystemEnv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_shell_path_basename_first() {
        let shells = detect_shells(&env(&[("SHELL", "/usr/bin/zsh")]));
        assert_eq!(shells, vec!["zsh"]);
    }

    #[test]
    fn test_markers_append_fixed_names() {
        let shells = detect_shells(&env(&[
            ("BASH_VERSION", "5.2.21(1)-release"),
            ("ZSH_VERSION", "5.9"),
            ("SHLVL", "2"),
        ]));
        assert_eq!(shells, vec!["bash", "zsh", "sh"]);
    }

    #[test]
    fn test_marker_value_is_ignored() {
        // Any non-empty value counts, even a nonsensical one
        let shells = detect_shells(&env(&[("SHLVL", "not-a-number")]));
        assert_eq!(shells, vec!["sh"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let shells = detect_shells(&env(&[
            ("SHELL", "/bin/bash"),
            ("BASH_VERSION", "5.0"),
        ]));
        assert_eq!(shells, vec!["bash", "bash"]);
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let shells = detect_shells(&env(&[
            ("SHELL", ""),
            ("BASH_VERSION", ""),
            ("ZSH_VERSION", ""),
            ("SHLVL", ""),
        ]));
        assert!(shells.is_empty());
    }

    #[test]
    fn test_empty_environment() {
        let shells = detect_shells(&HashMap::new());
        assert!(shells.is_empty());
    }
}

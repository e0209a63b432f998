// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the application's config directory.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`ICED_STOREFRONT_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs::config_dir()`
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedStorefront";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_STOREFRONT_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Must be called at most once, before any path resolution.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_cli_overrides(config_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory, honoring the override chain.
///
/// The `override_dir` parameter (highest priority) exists so tests can pin
/// an explicit directory without touching process-global state.
pub fn get_app_config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir);
    }

    if let Some(dir) = get_cli_config_dir() {
        return Some(dir);
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let dir = get_app_config_dir_with_override(Some(PathBuf::from("/tmp/storefront-test")));
        assert_eq!(dir, Some(PathBuf::from("/tmp/storefront-test")));
    }

    #[test]
    fn falls_back_to_some_directory() {
        // Whatever the environment, resolution should not panic.
        let _ = get_app_config_dir_with_override(None);
    }
}

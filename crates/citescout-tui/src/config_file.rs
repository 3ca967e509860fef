use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub server: Option<ServerConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub theme: Option<String>,
}

/// Platform config path: `<config_dir>/citescout/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("citescout").join("config.toml"))
}

/// Load config by cascading CWD `.citescout.toml` over the platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".citescout.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        server: Some(ServerConfig {
            base_url: overlay
                .server
                .as_ref()
                .and_then(|s| s.base_url.clone())
                .or_else(|| base.server.as_ref().and_then(|s| s.base_url.clone())),
            timeout_secs: overlay
                .server
                .as_ref()
                .and_then(|s| s.timeout_secs)
                .or_else(|| base.server.as_ref().and_then(|s| s.timeout_secs)),
        }),
        display: Some(DisplayConfig {
            theme: overlay
                .display
                .as_ref()
                .and_then(|d| d.theme.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.theme.clone())),
        }),
    }
}

impl ConfigFile {
    pub fn base_url(&self) -> Option<String> {
        self.server.as_ref().and_then(|s| s.base_url.clone())
    }

    pub fn timeout_secs(&self) -> Option<u64> {
        self.server.as_ref().and_then(|s| s.timeout_secs)
    }

    pub fn theme(&self) -> Option<String> {
        self.display.as_ref().and_then(|d| d.theme.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(s: &str) -> ConfigFile {
        toml::from_str(s).unwrap()
    }

    #[test]
    fn overlay_wins_where_set() {
        let base = parsed("[server]\nbase_url = \"http://a\"\ntimeout_secs = 5\n");
        let overlay = parsed("[server]\nbase_url = \"http://b\"\n");

        let merged = merge(base, overlay);
        assert_eq!(merged.base_url().as_deref(), Some("http://b"));
        assert_eq!(merged.timeout_secs(), Some(5));
    }

    #[test]
    fn overlay_fills_missing_sections_from_base() {
        let base = parsed("[display]\ntheme = \"modern\"\n");
        let overlay = parsed("[server]\nbase_url = \"http://b\"\n");

        let merged = merge(base, overlay);
        assert_eq!(merged.theme().as_deref(), Some("modern"));
        assert_eq!(merged.base_url().as_deref(), Some("http://b"));
    }

    #[test]
    fn empty_config_has_no_values() {
        let cfg = ConfigFile::default();
        assert!(cfg.base_url().is_none());
        assert!(cfg.timeout_secs().is_none());
        assert!(cfg.theme().is_none());
    }
}

//! `.devsearch.toml` config loading.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/search";

const CONFIG_FILE: &str = ".devsearch.toml";

/// Known keys in `.devsearch.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["endpoint"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Absolute URL of the search endpoint.
    pub endpoint: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Platform-aware home directory: `HOME` on Unix, `USERPROFILE` on Windows.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")).ok().map(PathBuf::from)
}

/// Platform-aware config directory: `~/.config/devsearch` on Unix, `%APPDATA%/devsearch` on Windows.
pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var("APPDATA").ok().map(|a| PathBuf::from(a).join("devsearch"))
    } else {
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| home_dir().map(|h| h.join(".config")))
            .map(|c| c.join("devsearch"))
    }
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Parse config file contents. Unknown keys are warned about, not rejected.
pub fn parse_config(content: &str) -> Result<SearchConfig, ConfigError> {
    let table = content.parse::<toml::Table>().map_err(|e| ConfigError::Parse(e.to_string()))?;
    let mut config = SearchConfig::default();

    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        let suggestion = KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k));
        match suggestion {
            Some(s) if edit_distance(key, s) <= 3 => warn!(
                key = key.as_str(),
                suggestion = *s,
                "Unknown key in {CONFIG_FILE}, did you mean '{s}'?"
            ),
            _ => warn!(
                key = key.as_str(),
                "Unknown key in {CONFIG_FILE} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            ),
        }
    }

    if let Some(value) = table.get("endpoint") {
        match value.as_str() {
            Some(endpoint) => config.endpoint = endpoint.to_string(),
            None => return Err(ConfigError::Parse("'endpoint' must be a string".to_string())),
        }
    }

    Ok(config)
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<SearchConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&content)
}

/// Load config from `<dir>/.devsearch.toml`, then `<config_dir>/config.toml`.
///
/// Falls back to defaults; a broken file is warned about and skipped.
pub fn load_config(dir: &Path) -> SearchConfig {
    let candidates = [Some(dir.join(CONFIG_FILE)), config_dir().map(|d| d.join("config.toml"))];

    for path in candidates.into_iter().flatten() {
        if !path.exists() {
            continue;
        }
        debug!(path = %path.display(), "Loading config");
        match read_config(&path) {
            Ok(config) => return config,
            Err(e) => warn!(path = %path.display(), "Ignoring config: {e}"),
        }
    }

    SearchConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), SearchConfig::default());
    }

    #[test]
    fn reads_endpoint() {
        let config = parse_config("endpoint = \"https://devsearch.example/search\"\n").unwrap();
        assert_eq!(config.endpoint, "https://devsearch.example/search");
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let config = parse_config("endpont = \"x\"\npage_size = 20\n").unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn non_string_endpoint_is_an_error() {
        assert!(matches!(parse_config("endpoint = 5"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(matches!(parse_config("endpoint = "), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn edit_distance_suggests_close_keys() {
        assert_eq!(edit_distance("endpont", "endpoint"), 1);
        assert_eq!(edit_distance("endpoint", "endpoint"), 0);
    }

    #[test]
    fn load_prefers_project_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".devsearch.toml"), "endpoint = \"http://localhost:8080/search\"").unwrap();
        assert_eq!(load_config(dir.path()).endpoint, "http://localhost:8080/search");
    }

    #[test]
    fn broken_project_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".devsearch.toml"), "endpoint = [").unwrap();
        // Falls through to the user config or defaults; never panics.
        let config = load_config(dir.path());
        assert!(!config.endpoint.is_empty());
    }

    #[test]
    fn read_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }
}

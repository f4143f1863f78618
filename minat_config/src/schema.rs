use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use minat_search::RankingOptions;
use minat_search::engine::SearchConfig;

/// Environment variable that overrides the configured Gemini API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

const API_KEY_PLACEHOLDER: &str = "your-gemini-api-key-here";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ranking: RankingOptions,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "GeminiConfig::default_model")]
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: Self::default_model(),
        }
    }
}

impl GeminiConfig {
    fn default_model() -> String {
        minat_providers::DEFAULT_MODEL.to_string()
    }

    /// The API key, unless it is blank or still the template placeholder.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        let key = self.api_key.trim();
        (!key.is_empty() && key != API_KEY_PLACEHOLDER).then_some(key)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CatalogConfig {
    #[serde(default = "CatalogConfig::default_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

impl CatalogConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("List Mata Kuliah UBM.xlsx - Sheet1.csv")
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("minat"))
    }

    /// Load `~/minat/config.json`, then apply the API key environment override.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'minat init' to create config.",
                config_path.display()
            );
        }

        let config = Self::from_path(&config_path)?;
        Ok(config.with_api_key_override(std::env::var(API_KEY_ENV).ok()))
    }

    /// Like [`Config::load`], but falls back to defaults when no file exists.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");

        let config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            Self::default()
        };
        Ok(config.with_api_key_override(std::env::var(API_KEY_ENV).ok()))
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Replace the configured API key with `key` when it is non-blank.
    #[must_use]
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            debug!("Using Gemini API key from {}", API_KEY_ENV);
            self.providers.gemini.api_key = key;
        }
        self
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Default configuration rendered as the `init` template.
    pub fn template() -> anyhow::Result<String> {
        let mut config = Self::default();
        config.providers.gemini.api_key = API_KEY_PLACEHOLDER.to_string();
        Ok(serde_json::to_string_pretty(&config)?)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, Self::template()?)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Add your Gemini API key (or set {API_KEY_ENV})");
        println!("   2. Point catalog.path at the course list CSV");
        println!("   3. Run 'minat recommend \"saya suka menggambar\"'");
        println!();
        println!("🔧 Configuration options:");
        println!("   - ranking.min_score: relevance floor for catalog matches (default 0.15)");
        println!("   - ranking.top_k: maximum number of courses shown (default 5)");
        println!("   - search.negation_markers: phrases that exclude the next word");
        println!("   - search.lexicon: replace the built-in interest keywords");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").expect("empty object should deserialize");
        assert!((config.ranking.min_score - 0.15).abs() < f64::EPSILON);
        assert_eq!(config.ranking.top_k, 5);
        assert_eq!(config.providers.gemini.model, "gemini-pro");
        assert!(config.providers.gemini.api_key().is_none());
        assert_eq!(config.search.negation_markers.len(), 4);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn template_round_trips_without_key() {
        let template = Config::template().expect("template should render");
        let config: Config = serde_json::from_str(&template).expect("template should parse");
        // The placeholder is not a usable key.
        assert!(config.providers.gemini.api_key().is_none());
        assert!(config.search.lexicon.is_none());
    }

    #[test]
    fn env_key_overrides_config() {
        let config = Config::default().with_api_key_override(Some("secret".to_string()));
        assert_eq!(config.providers.gemini.api_key(), Some("secret"));

        let unchanged = config.with_api_key_override(Some("  ".to_string()));
        assert_eq!(unchanged.providers.gemini.api_key(), Some("secret"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn reads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        write!(
            file,
            r#"{{"ranking": {{"top_k": 3}}, "search": {{"lexicon": [{{"keyword": "kopi", "expansion": "barista"}}]}}}}"#
        )
        .expect("temp file should be writable");

        let config = Config::from_path(file.path()).expect("partial config should load");
        assert_eq!(config.ranking.top_k, 3);
        assert!((config.ranking.min_score - 0.15).abs() < f64::EPSILON);
        assert_eq!(config.search.lexicon.as_ref().map(minat_search::Lexicon::len), Some(1));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn invalid_file_names_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        file.write_all(b"not json")
            .expect("temp file should be writable");

        let err = Config::from_path(file.path()).expect_err("malformed JSON should be rejected");
        let message = format!("{err:#}");
        assert!(message.contains("Invalid config file"));
        assert!(message.contains(&file.path().display().to_string()));
    }
}

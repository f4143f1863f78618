//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use anyhow::Context;
use minat_catalog::Catalog;
use minat_config::{API_KEY_ENV, Config};
use minat_core::{ChatMessage, LLMProvider, util::fallback_prompt};
use minat_providers::GeminiProvider;
use std::path::PathBuf;
use tracing::{info, warn};

mod info;
mod init;
mod programs;
mod recommend;
mod version;

pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use programs::{ProgramsInput, ProgramsStrategy};
pub use recommend::{RecommendInput, RecommendStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Load the catalog from `path`, or from the configured location.
fn load_catalog(config: &Config, path: Option<PathBuf>) -> anyhow::Result<Catalog> {
    let path = path.unwrap_or_else(|| config.catalog.path.clone());
    info!("Loading catalog from {}", path.display());
    Catalog::from_path(&path)
        .with_context(|| format!("Cannot load course catalog {}", path.display()))
}

/// Ask the AI assistant about `query`.
///
/// Never fails: a missing key or a provider error becomes a message for the
/// user.
async fn ask_assistant(config: &Config, query: &str) -> String {
    let gemini = &config.providers.gemini;
    let Some(api_key) = gemini.api_key() else {
        return format!(
            "⚠️ API Key belum dipasang. Set {API_KEY_ENV} atau providers.gemini.api_key di config."
        );
    };

    let provider = GeminiProvider::new(api_key.to_string());
    let messages = [ChatMessage::user(fallback_prompt(query))];

    match provider.chat(&messages, &gemini.model).await {
        Ok(response) => response.content,
        Err(e) => {
            warn!("AI assistant request failed: {e:#}");
            format!("Maaf, AI sedang istirahat. Error: {e}")
        }
    }
}

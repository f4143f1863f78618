use minat_config::{API_KEY_ENV, Config};

/// Strategy for displaying the effective configuration.
///
/// Prints the Gemini settings (key masked), catalog location, ranking
/// options and query-processing settings.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== minat Configuration ===\n");

        println!("Gemini:");
        let key = config
            .providers
            .gemini
            .api_key()
            .map_or_else(|| format!("(not set, see {API_KEY_ENV})"), mask_key);
        println!("  API Key: {key}");
        println!("  Model: {}", config.providers.gemini.model);
        println!();

        println!("Catalog:");
        let path = &config.catalog.path;
        let status = if path.exists() { "found" } else { "missing" };
        println!("  Path: {} ({status})", path.display());
        println!();

        println!("Ranking:");
        println!("  Min Score: {}", config.ranking.min_score);
        println!("  Top K: {}", config.ranking.top_k);
        println!();

        println!("Search:");
        println!(
            "  Negation Markers: {}",
            config.search.negation_markers.join(", ")
        );
        println!(
            "  Question Markers: {}",
            config.search.question_markers.join(", ")
        );
        println!("  Expansion: {}", config.search.expansion.enabled);
        match &config.search.lexicon {
            Some(lexicon) => println!("  Lexicon: custom ({} entries)", lexicon.len()),
            None => println!("  Lexicon: built-in"),
        }

        Ok(())
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

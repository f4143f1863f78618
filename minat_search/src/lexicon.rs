//! Interest keywords and the domain terms they expand to.

use serde::{Deserialize, Serialize};

/// Built-in keyword table, in matching order.
const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    (
        "menggambar",
        "desain visual art seni fotografi kreatif sketsa ilustrasi grafis",
    ),
    (
        "jualan",
        "marketing bisnis manajemen pemasaran retail sales perdagangan kewirausahaan",
    ),
    (
        "ngoding",
        "teknologi informasi sistem komputer data algoritma programming python web",
    ),
    (
        "hitung",
        "akuntansi statistika matematika ekonomi keuangan pajak finance analisis",
    ),
    (
        "jalan-jalan",
        "pariwisata hospitality hotel tour travel guide tourism wisata",
    ),
    ("masak", "food beverage tata boga kitchen pastry culinary"),
    (
        "game",
        "game development interactive design programming unity multimedia",
    ),
    ("tidur", "santai istirahat kesehatan mental psikologi"),
    ("duit", "investasi keuangan bisnis entrepreneur kaya"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Lower-case interest phrase looked up in the query.
    pub keyword: String,
    /// Space-separated domain terms appended when the keyword matches.
    pub expansion: String,
}

impl LexiconEntry {
    #[must_use]
    pub fn new(keyword: impl Into<String>, expansion: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            expansion: expansion.into(),
        }
    }
}

/// Ordered, read-only keyword table.
///
/// Order matters: expansions are appended in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    #[must_use]
    pub const fn new(entries: Vec<LexiconEntry>) -> Self {
        Self { entries }
    }

    /// The built-in table of study interests.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_ENTRIES
                .iter()
                .map(|(keyword, expansion)| LexiconEntry::new(*keyword, *expansion))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.iter()
    }

    /// Entries whose keyword occurs anywhere in `text`, in declaration order.
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a LexiconEntry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| !entry.keyword.is_empty() && text.contains(&entry.keyword))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keeps_declared_order() {
        let lexicon = Lexicon::builtin();
        let keywords: Vec<&str> = lexicon.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords.first(), Some(&"menggambar"));
        assert_eq!(keywords.last(), Some(&"duit"));
        assert_eq!(lexicon.len(), 9);
    }

    #[test]
    fn matches_by_substring() {
        let lexicon = Lexicon::builtin();
        // "gamer" contains "game"
        let matched: Vec<&str> = lexicon
            .matches("aku gamer yang suka masak")
            .map(|e| e.keyword.as_str())
            .collect();
        assert_eq!(matched, vec!["masak", "game"]);
    }

    #[test]
    fn empty_keyword_never_matches() {
        let lexicon = Lexicon::new(vec![LexiconEntry::new("", "noise")]);
        assert_eq!(lexicon.matches("anything").count(), 0);
    }

    #[test]
    fn size_tracks_entries() {
        let lexicon = Lexicon::new(Vec::new());
        assert_eq!(lexicon.len(), 0);
        assert!(lexicon.is_empty());
        assert!(!Lexicon::default().is_empty());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn deserializes_from_ordered_list() {
        let json = r#"[{"keyword":"b","expansion":"bee"},{"keyword":"a","expansion":"ay"}]"#;
        let lexicon: Lexicon = serde_json::from_str(json).expect("valid JSON should deserialize");
        let keywords: Vec<&str> = lexicon.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["b", "a"]);
    }
}

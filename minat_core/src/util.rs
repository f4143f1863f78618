//! Prompt text for the generative-AI fallback.

/// Persona given to the AI assistant.
pub const ASSISTANT_PERSONA: &str = "Kamu adalah Asisten Akademik Virtual untuk Universitas Bunda Mulia (UBM). \
Gaya bicaramu santai, ramah, mendukung mahasiswa, dan kekinian (tapi tetap sopan).";

/// Build the single-turn prompt sent when the catalog has no good match.
#[must_use]
pub fn fallback_prompt(query: &str) -> String {
    format!(
        "{ASSISTANT_PERSONA}\n\n\
         User bertanya: \"{query}\"\n\n\
         Jawablah pertanyaan tersebut. Jika itu tentang saran akademik, berikan motivasi. \
         Jika pertanyaan umum, jawab dengan ringkas dan jelas."
    )
}

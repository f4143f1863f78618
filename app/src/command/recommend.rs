use minat_catalog::CatalogFilter;
use minat_config::Config;
use minat_core::ScoredMatch;
use minat_search::Recommender;
use minat_search::advice::{course_tip, program_description};
use std::path::PathBuf;
use tracing::{debug, info};

use super::{ask_assistant, load_catalog};

/// Input parameters for the Recommend command strategy.
#[derive(Debug, Clone)]
pub struct RecommendInput {
    /// Free-text interest or question
    pub query: String,
    /// Exact program name to restrict to
    pub program: Option<String>,
    /// Semester to restrict to
    pub semester: Option<u32>,
    /// Overrides `ranking.min_score`
    pub min_score: Option<f64>,
    /// Overrides `ranking.top_k`
    pub top_k: Option<usize>,
    /// Overrides `catalog.path`
    pub catalog: Option<PathBuf>,
    /// Skip the AI assistant entirely
    pub no_ai: bool,
}

impl RecommendInput {
    fn filter(&self) -> CatalogFilter {
        let mut filter = CatalogFilter::all();
        if let Some(program) = &self.program {
            filter = filter.with_program(program.clone());
        }
        if let Some(semester) = self.semester {
            filter = filter.with_semester(semester);
        }
        filter
    }
}

/// Strategy for ranking catalog courses against a query.
///
/// Falls back to the AI assistant when nothing clears the threshold, and
/// adds the assistant's opinion to question-like queries that did match.
#[derive(Debug, Clone, Copy)]
pub struct RecommendStrategy;

impl super::CommandStrategy for RecommendStrategy {
    type Input = RecommendInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let catalog = load_catalog(&config, input.catalog.clone())?;

        let filter = input.filter();
        let subset = catalog.filter(&filter);
        debug!("{} of {} courses pass {:?}", subset.len(), catalog.len(), filter);
        if subset.is_empty() {
            println!("No courses match the filter.");
            return Ok(());
        }

        let options = config.ranking.with_overrides(input.min_score, input.top_k);
        let recommender = Recommender::new(config.search.clone(), config.ranking);
        let recommendation = recommender.recommend_with(&input.query, subset, options)?;

        if recommendation.needs_fallback() {
            println!("Hmm, tidak ada mata kuliah spesifik yang cocok di database...");
            if input.no_ai {
                return Ok(());
            }
            info!("No catalog match, asking the AI assistant");
            let answer = ask_assistant(&config, &input.query).await;
            println!();
            println!("🤖 Jawaban Asisten AI:");
            println!("{answer}");
            return Ok(());
        }

        println!(
            "Ditemukan {} Mata Kuliah yang cocok!",
            recommendation.matches.len()
        );
        for scored in &recommendation.matches {
            println!();
            print!("{}", render_card(scored));
        }

        if recommendation.intent.is_question() && !input.no_ai {
            info!("Question detected, adding AI tips");
            let answer = ask_assistant(&config, &input.query).await;
            println!();
            println!("---");
            println!("🤖 Pendapat Asisten AI:");
            println!("{answer}");
        }

        Ok(())
    }
}

fn render_card(scored: &ScoredMatch<'_>) -> String {
    let course = scored.course;
    format!(
        "📘 {}\n   🎓 {} | 📅 Sem {} | ⭐ {}% Match\n   Jurusan: {}\n   💡 {}\n",
        course.course_name(),
        course.program_name(),
        course.semester(),
        scored.percent(),
        program_description(course.program_name()),
        course_tip(course.course_name()),
    )
}

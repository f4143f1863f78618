use minat_config::Config;
use minat_search::advice::program_description;
use std::path::PathBuf;

use super::load_catalog;

/// Input parameters for the Programs command strategy.
#[derive(Debug, Clone)]
pub struct ProgramsInput {
    /// Overrides `catalog.path`
    pub catalog: Option<PathBuf>,
}

/// Strategy for listing the programs and semesters a catalog offers.
#[derive(Debug, Clone, Copy)]
pub struct ProgramsStrategy;

impl super::CommandStrategy for ProgramsStrategy {
    type Input = ProgramsInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let catalog = load_catalog(&config, input.catalog)?;

        println!("Programs ({} courses):", catalog.len());
        for program in catalog.programs() {
            let name = if program.is_empty() { "(none)" } else { program };
            println!("  {name}");
            println!("    {}", program_description(program));
        }
        println!();

        let semesters: Vec<String> = catalog
            .semesters()
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("Semesters: {}", semesters.join(", "));

        Ok(())
    }
}

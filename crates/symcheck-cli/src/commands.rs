use std::borrow::Cow;
use std::path::Path;

use eyre::Result;
use symcheck_catalogue::Catalogue;
use symcheck_catalogue::file::{parse_records, to_catalogue_json};
use symcheck_matching::rank_conditions;
use symcheck_matching::search::filter_symptoms;

use crate::cli::{CatalogueCommands, Cli, Commands};
use crate::config::CatalogueSource;
use crate::render;

/// Execute a parsed command line and return what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Symptoms { search, output } => {
            let catalogue = active_catalogue(cli)?;
            let term = search.as_deref().unwrap_or("");
            let symptoms = filter_symptoms(catalogue.symptoms(), term);
            if output.json {
                Ok(serde_json::to_string_pretty(&symptoms)?)
            } else {
                Ok(render::render_symptoms(&symptoms))
            }
        }
        Commands::Conditions { output } => {
            let catalogue = active_catalogue(cli)?;
            if output.json {
                Ok(serde_json::to_string_pretty(catalogue.conditions())?)
            } else {
                Ok(render::render_condition_list(catalogue.conditions()))
            }
        }
        Commands::Check {
            symptoms,
            verbose_scores,
            output,
        } => {
            let catalogue = active_catalogue(cli)?;
            check(&catalogue, symptoms, *verbose_scores, output.json)
        }
        Commands::Catalogue { command } => run_catalogue(command),
    }
}

fn active_catalogue(cli: &Cli) -> Result<Cow<'static, Catalogue>> {
    CatalogueSource::from_flag(cli.catalogue.as_deref()).load()
}

fn check(
    catalogue: &Catalogue,
    symptoms: &[String],
    verbose_scores: bool,
    json: bool,
) -> Result<String> {
    for id in symptoms {
        if catalogue.symptom(id).is_none() {
            tracing::warn!(symptom = %id, "unknown symptom id, it will not match");
        }
    }
    let ranked = rank_conditions(catalogue, symptoms);
    tracing::info!(
        selected = symptoms.len(),
        results = ranked.len(),
        "symptom check complete"
    );
    if json {
        Ok(serde_json::to_string_pretty(&ranked)?)
    } else {
        Ok(render::render_results(&ranked, verbose_scores))
    }
}

fn run_catalogue(command: &CatalogueCommands) -> Result<String> {
    match command {
        CatalogueCommands::Validate { path } => validate_file(path),
        CatalogueCommands::Export { output } => {
            let json = to_catalogue_json(Catalogue::builtin())?;
            match output {
                Some(path) => {
                    std::fs::write(path, &json).map_err(|e| {
                        eyre::eyre!("failed to write catalogue to {}: {e}", path.display())
                    })?;
                    tracing::info!(path = %path.display(), "catalogue exported");
                    Ok(format!("Wrote built-in catalogue to {}", path.display()))
                }
                None => Ok(json),
            }
        }
    }
}

/// Report every problem in a catalogue file, failing if there are any.
pub fn validate_file(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read catalogue at {}: {e}", path.display()))?;
    let (symptoms, conditions) = parse_records(&contents)?;

    let problems = Catalogue::validate_parts(&symptoms, &conditions);
    if !problems.is_empty() {
        return Err(eyre::eyre!(
            "{}\n{}",
            path.display(),
            render::render_problems(&problems)
        ));
    }
    Ok(format!(
        "{} is valid: {} symptoms, {} conditions",
        path.display(),
        symptoms.len(),
        conditions.len()
    ))
}

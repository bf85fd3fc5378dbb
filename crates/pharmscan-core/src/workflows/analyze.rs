use crate::core::models::ligand::LigandPoseSet;
use crate::core::models::pharmacophore::Pharmacophore;
use crate::core::models::receptor::Receptor;
use crate::engine::classifier::Classifier;
use crate::engine::config::AnalysisConfig;
use crate::engine::dedup::{RetainedSet, deduplicate};
use crate::engine::error::EngineError;
use crate::engine::generator::generate;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::ranker::RankedPharmacophores;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Number of raw interaction candidates produced by classification.
    pub candidate_count: usize,
    /// The deduplicated interactions the pharmacophores were built from.
    pub retained: RetainedSet,
    /// Number of pharmacophores accepted by the generator before ranking.
    pub total_generated: usize,
    /// The `top_n` best pharmacophores, highest score first.
    pub pharmacophores: Vec<Pharmacophore>,
}

/// Runs the full analysis with the standard rulebook.
///
/// # Errors
///
/// Returns [`EngineError::Config`] for an invalid pharmacophore size and
/// [`EngineError::OutOfRange`] when fewer than `config.top_n` pharmacophores exist.
#[instrument(skip_all, name = "analysis_workflow")]
pub fn run(
    receptor: &Receptor,
    ligands: &LigandPoseSet,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<AnalysisResult, EngineError> {
    run_with_classifier(&Classifier::default(), receptor, ligands, config, reporter)
}

/// Runs the full analysis with a caller-supplied classifier.
pub fn run_with_classifier(
    classifier: &Classifier<'_>,
    receptor: &Receptor,
    ligands: &LigandPoseSet,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<AnalysisResult, EngineError> {
    info!(
        receptor_atoms = receptor.len(),
        receptor_residues = receptor.residues().len(),
        poses = ligands.pose_count(),
        ligand_atoms = ligands.atom_count(),
        size = config.pharmacophore_size,
        top_n = config.top_n,
        "Starting pharmacophore analysis."
    );

    let candidates = reporter.phase("Classifying Interactions", || {
        let candidates = classifier.classify_with_progress(receptor, ligands, reporter);
        reporter.report(Progress::Message(format!(
            "{} candidate interaction(s)",
            candidates.len()
        )));
        candidates
    });

    let retained = reporter.phase("Deduplicating", || {
        let retained = deduplicate(&candidates);
        reporter.report(Progress::Message(format!(
            "{} retained interaction(s)",
            retained.len()
        )));
        retained
    });

    let generated = reporter.phase("Generating Pharmacophores", || {
        let generated = generate(&retained, config.pharmacophore_size)?;
        reporter.report(Progress::Message(format!(
            "{} pharmacophore(s) accepted",
            generated.len()
        )));
        Ok::<_, EngineError>(generated)
    })?;
    let total_generated = generated.len();

    let pharmacophores = reporter.phase("Ranking", || {
        let top = RankedPharmacophores::rank(generated).into_top(config.top_n)?;
        reporter.report(Progress::Message(format!("{} ranked", top.len())));
        Ok::<_, EngineError>(top)
    })?;
    info!(
        ranked = total_generated,
        returned = pharmacophores.len(),
        best_score = pharmacophores.first().map(|p| p.score()),
        "Analysis complete."
    );

    Ok(AnalysisResult {
        candidate_count: candidates.len(),
        retained,
        total_generated,
        pharmacophores,
    })
}

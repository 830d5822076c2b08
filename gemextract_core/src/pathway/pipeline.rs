//! The extraction pipeline: classify, build the core set, then verify and collect evidence
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::configuration::{
    AuxiliaryGroup, Configuration, ConfigurationError, PathwayConfiguration,
};
use crate::metabolic_model::view::{NetworkError, NetworkView};
use crate::pathway::classify::{classify, Classification};
use crate::pathway::core_set::{build_core_set, CoreSet};
use crate::pathway::evidence::{extract, GeneEvidence};
use crate::pathway::verify::{verify, Verification};

/// An auxiliary identifier which the network doesn't contain
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct MissingIdentifier {
    pub group: String,
    pub reaction: String,
}

/// Every non-fatal condition met during a run
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct Diagnostics {
    /// Reactions which matched a phase keyword but were vetoed by an exclusion keyword
    pub excluded_false_positives: usize,
    pub missing_auxiliary: Vec<MissingIdentifier>,
    pub empty_phases: Vec<String>,
    /// Classified reactions which cite no gene in the configured namespace
    pub reactions_without_evidence: Vec<String>,
}

impl Diagnostics {
    /// True if nothing worth a human's attention happened
    pub fn is_clean(&self) -> bool {
        self.excluded_false_positives == 0
            && self.missing_auxiliary.is_empty()
            && self.empty_phases.is_empty()
            && self.reactions_without_evidence.is_empty()
    }
}

/// Everything the pipeline derived from one network
#[derive(Clone, Debug)]
pub struct PathwayExtraction {
    pub network_reactions: usize,
    pub network_genes: usize,
    /// Primary phase classification
    pub classification: Classification,
    /// Keyword pass for the auxiliary energy-production reactions
    pub energy: Classification,
    pub core: CoreSet,
    pub verification: Verification,
    pub evidence: GeneEvidence,
    pub diagnostics: Diagnostics,
}

impl PathwayExtraction {
    /// Ids of the phase-classified reactions, in network order
    pub fn pathway_reactions(&self) -> &IndexSet<String> {
        &self.classification.matched
    }
}

/// Run the extraction pipeline over `view`
///
/// The network is validated first; a structurally invalid network is the only thing which
/// stops the pipeline. Missing auxiliary identifiers, empty phases and reactions without
/// gene evidence end up in [`PathwayExtraction::diagnostics`].
///
/// # Examples
/// ```rust
/// use gemextract_core::configuration::PathwayConfiguration;
/// use gemextract_core::metabolic_model::model::Model;
/// use gemextract_core::pathway::pipeline::extract_pathway;
///
/// let model = Model::new_empty();
/// let extraction = extract_pathway(&model, &PathwayConfiguration::default()).unwrap();
/// assert!(extraction.core.is_empty());
/// assert_eq!(extraction.diagnostics.empty_phases.len(), 4);
/// ```
pub fn extract_pathway<V: NetworkView + Sync + ?Sized>(
    view: &V,
    config: &PathwayConfiguration,
) -> Result<PathwayExtraction, PipelineError> {
    extract_pathway_with_processes(view, config, Configuration::current().processes)
}

/// [`extract_pathway`] with an explicit worker count instead of the process-wide one
///
/// With more than one process, verification and evidence extraction run side by side in a
/// dedicated pool of `processes` threads.
pub fn extract_pathway_with_processes<V: NetworkView + Sync + ?Sized>(
    view: &V,
    config: &PathwayConfiguration,
    processes: u32,
) -> Result<PathwayExtraction, PipelineError> {
    config.check()?;
    view.validate()?;
    let config = config.normalized();

    let classification = classify(view, &config.phase_scan());
    info!(
        reactions = classification.matched.len(),
        excluded = classification.excluded_count,
        "classified pathway reactions"
    );
    for (phase, reactions) in &classification.phases {
        info!(phase = %phase, reactions = reactions.len(), "phase breakdown");
    }

    let energy = classify(view, &config.energy_scan());
    let energy_group = AuxiliaryGroup::new(
        config.auxiliary_scan.label.clone(),
        energy
            .matched
            .iter()
            .map(|id| {
                let label = view
                    .reaction(id)
                    .map(|r| r.name_or_empty().to_string())
                    .unwrap_or_default();
                (id.clone(), label)
            })
            .collect(),
    );
    let mut groups = Vec::with_capacity(config.auxiliary_groups.len() + 1);
    groups.push(energy_group);
    groups.extend(config.auxiliary_groups.iter().cloned());

    let core = build_core_set(view, &classification.matched, &groups);
    for group in &core.groups {
        info!(
            group = %group.label,
            added = group.added.len(),
            missing = group.missing.len(),
            "merged auxiliary reactions"
        );
    }
    info!(reactions = core.len(), "core set built");

    let mut phase_sets: IndexMap<String, IndexSet<String>> = classification.phases.clone();
    for (phase, reactions) in &energy.phases {
        phase_sets.insert(phase.clone(), reactions.clone());
    }

    // Verification and evidence only read immutable data
    let (verification, evidence) = if processes > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(processes as usize)
            .build()?;
        pool.install(|| {
            rayon::join(
                || verify(view, &core.reactions, &phase_sets),
                || extract(view, &classification.matched, &config.gene_namespace),
            )
        })
    } else {
        (
            verify(view, &core.reactions, &phase_sets),
            extract(view, &classification.matched, &config.gene_namespace),
        )
    };

    let diagnostics = Diagnostics {
        excluded_false_positives: classification.excluded_count,
        missing_auxiliary: core
            .groups
            .iter()
            .flat_map(|group| {
                group.missing.iter().map(|id| MissingIdentifier {
                    group: group.label.clone(),
                    reaction: id.clone(),
                })
            })
            .collect(),
        empty_phases: verification.empty_phases(),
        reactions_without_evidence: evidence.unsupported_reactions.clone(),
    };
    for phase in &diagnostics.empty_phases {
        warn!(phase = %phase, "no reaction classified into phase");
    }
    info!(genes = evidence.gene_count(), "gene evidence extracted");

    Ok(PathwayExtraction {
        network_reactions: view.reaction_count(),
        network_genes: view.gene_count(),
        classification,
        energy,
        core,
        verification,
        evidence,
        diagnostics,
    })
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Network is malformed")]
    MalformedNetwork(#[from] NetworkError),
    #[error("Pathway configuration is invalid")]
    InvalidConfiguration(#[from] ConfigurationError),
    #[error("Unable to start the worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

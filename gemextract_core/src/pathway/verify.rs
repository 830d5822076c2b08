//! Completeness checks over the core set
use indexmap::{IndexMap, IndexSet};

use crate::metabolic_model::view::NetworkView;

#[derive(Clone, Debug, Default)]
pub struct Verification {
    /// Compartment code to number of metabolite participations, largest first
    pub compartments: IndexMap<String, usize>,
    /// Phase name to whether at least one reaction was classified into it
    pub phase_status: IndexMap<String, bool>,
}

impl Verification {
    /// Sum of the compartment histogram
    pub fn total_participations(&self) -> usize {
        self.compartments.values().sum()
    }

    /// Phases without a single classified reaction
    pub fn empty_phases(&self) -> Vec<String> {
        self.phase_status
            .iter()
            .filter(|(_, present)| !**present)
            .map(|(phase, _)| phase.clone())
            .collect()
    }
}

/// Count compartment participations over `core` and check each phase in `phase_sets`
///
/// Every stoichiometry entry of every core reaction counts once, so a metabolite used by
/// several reactions is counted for each of them. This is a diagnostic: empty phases are
/// reported, never treated as failures.
pub fn verify<V: NetworkView + ?Sized>(
    view: &V,
    core: &IndexSet<String>,
    phase_sets: &IndexMap<String, IndexSet<String>>,
) -> Verification {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for reaction in core.iter().filter_map(|id| view.reaction(id)) {
        for metabolite_id in reaction.metabolites.keys() {
            // Validation guarantees the metabolite exists
            if let Some(metabolite) = view.metabolite(metabolite_id) {
                *counts
                    .entry(metabolite.compartment_code().to_string())
                    .or_insert(0) += 1;
            }
        }
    }
    counts.sort_by(|code_a, count_a, code_b, count_b| {
        count_b.cmp(count_a).then_with(|| code_a.cmp(code_b))
    });

    let phase_status = phase_sets
        .iter()
        .map(|(phase, reactions)| (phase.clone(), !reactions.is_empty()))
        .collect();

    Verification {
        compartments: counts,
        phase_status,
    }
}

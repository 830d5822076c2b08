//! Gene evidence: which classified reactions cite which genes
use indexmap::{IndexMap, IndexSet};

use crate::metabolic_model::view::NetworkView;

#[derive(Clone, Debug, Default)]
pub struct GeneEvidence {
    /// Gene id to the ids of the reactions citing it, in network order
    pub index: IndexMap<String, Vec<String>>,
    /// Gene id to its display name (the gene name, or the id if the name is empty)
    pub display_names: IndexMap<String, String>,
    /// Classified reactions which cite no gene in the namespace
    pub unsupported_reactions: Vec<String>,
}

impl GeneEvidence {
    pub fn gene_count(&self) -> usize {
        self.index.len()
    }

    /// Gene ids sorted by id, independent of the order genes were first seen in
    pub fn sorted_gene_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.index.keys().map(|id| id.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// The first `n` genes by id, with their number of supporting reactions
    pub fn preview(&self, n: usize) -> Vec<(&str, usize)> {
        self.sorted_gene_ids()
            .into_iter()
            .take(n)
            .map(|id| (id, self.index.get(id).map(|r| r.len()).unwrap_or(0)))
            .collect()
    }

    /// Display name of a gene, the id itself if it is not in the index
    pub fn display_name<'a>(&'a self, gene_id: &'a str) -> &'a str {
        self.display_names
            .get(gene_id)
            .map(|s| s.as_str())
            .unwrap_or(gene_id)
    }
}

/// Build the gene evidence index over the phase-classified reactions
///
/// Only genes whose id starts with `namespace` are kept; other genes are dropped silently.
/// Auxiliary reactions never contribute evidence, only the reactions in `phase_union`.
pub fn extract<V: NetworkView + ?Sized>(
    view: &V,
    phase_union: &IndexSet<String>,
    namespace: &str,
) -> GeneEvidence {
    let mut index: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut unsupported_reactions = Vec::new();

    for reaction in phase_union.iter().filter_map(|id| view.reaction(id)) {
        let mut cited = false;
        for gene in reaction
            .genes()
            .into_iter()
            .filter(|g| g.starts_with(namespace))
        {
            index.entry(gene).or_default().push(reaction.id.clone());
            cited = true;
        }
        if !cited {
            unsupported_reactions.push(reaction.id.clone());
        }
    }

    let display_names = index
        .keys()
        .map(|id| {
            let name = view
                .gene(id)
                .map(|g| g.display_name().to_string())
                .unwrap_or_else(|| id.clone());
            (id.clone(), name)
        })
        .collect();

    GeneEvidence {
        index,
        display_names,
        unsupported_reactions,
    }
}

//! Tabular records built from a [`PathwayExtraction`]
//!
//! Nothing here writes files, see [`crate::io::tabular`] for that.
use indexmap::IndexMap;
use serde::Serialize;

use crate::configuration::PathwayConfiguration;
use crate::metabolic_model::view::NetworkView;
use crate::pathway::pipeline::{Diagnostics, PathwayExtraction};

/// Written in place of an empty GPR or gene list
pub const NONE_SENTINEL: &str = "None";

/// One row per evidence gene, meant as input for an ortholog lookup
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct GeneEvidenceRow {
    #[serde(rename = "ENSG_ID")]
    pub gene_id: String,
    #[serde(rename = "Gene_Symbol")]
    pub symbol: String,
    #[serde(rename = "Reaction_Count")]
    pub reaction_count: usize,
    #[serde(rename = "Reactions")]
    pub reactions: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ReactionDetailRow {
    #[serde(rename = "Reaction_ID")]
    pub reaction_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Equation")]
    pub equation: String,
    #[serde(rename = "GPR")]
    pub gpr: String,
    #[serde(rename = "Genes_ENSG")]
    pub genes: String,
    #[serde(rename = "Reversible")]
    pub reversible: bool,
    #[serde(rename = "LB")]
    pub lower_bound: f64,
    #[serde(rename = "UB")]
    pub upper_bound: f64,
}

/// A row type written as one CSV table
///
/// `HEADER` lists the column names in field order. It is written on its own when a table
/// has no rows.
pub trait TableRecord: Serialize {
    const HEADER: &'static [&'static str];
}

impl TableRecord for GeneEvidenceRow {
    const HEADER: &'static [&'static str] =
        &["ENSG_ID", "Gene_Symbol", "Reaction_Count", "Reactions", "Notes"];
}

impl TableRecord for ReactionDetailRow {
    const HEADER: &'static [&'static str] = &[
        "Reaction_ID",
        "Name",
        "Equation",
        "GPR",
        "Genes_ENSG",
        "Reversible",
        "LB",
        "UB",
    ];
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Summary {
    pub network_reactions: usize,
    pub network_genes: usize,
    /// Reactions placed in at least one pathway phase
    pub pathway_reactions: usize,
    pub phase_reactions: IndexMap<String, usize>,
    /// Auxiliary group label to the reactions it added to the core set
    pub auxiliary_added: IndexMap<String, usize>,
    pub core_reactions: usize,
    pub genes: usize,
    pub compartments: usize,
    pub diagnostics: Diagnostics,
}

/// Join the first `limit` reaction ids, marking truncated lists with a trailing "..."
fn truncated_list(reactions: &[String], limit: usize) -> String {
    let shown = reactions
        .iter()
        .take(limit)
        .map(|s| s.as_str())
        .collect::<Vec<&str>>()
        .join(", ");
    if reactions.len() > limit {
        format!("{}...", shown)
    } else {
        shown
    }
}

/// Gene evidence rows sorted by gene id
pub fn gene_evidence_rows(
    extraction: &PathwayExtraction,
    config: &PathwayConfiguration,
) -> Vec<GeneEvidenceRow> {
    let evidence = &extraction.evidence;
    evidence
        .sorted_gene_ids()
        .into_iter()
        .map(|gene_id| {
            let reactions = evidence
                .index
                .get(gene_id)
                .map(|r| r.as_slice())
                .unwrap_or_default();
            GeneEvidenceRow {
                gene_id: gene_id.to_string(),
                symbol: evidence.display_name(gene_id).to_string(),
                reaction_count: reactions.len(),
                reactions: truncated_list(reactions, config.evidence_list_limit),
                notes: config.gene_note.clone(),
            }
        })
        .collect()
}

/// Detail rows for the phase-classified reactions, sorted by reaction id
pub fn reaction_detail_rows<V: NetworkView + ?Sized>(
    view: &V,
    extraction: &PathwayExtraction,
    config: &PathwayConfiguration,
) -> Vec<ReactionDetailRow> {
    let mut ids: Vec<&String> = extraction.pathway_reactions().iter().collect();
    ids.sort();
    ids.into_iter()
        .filter_map(|id| view.reaction(id))
        .map(|reaction| {
            let genes: Vec<String> = reaction
                .genes()
                .into_iter()
                .filter(|g| g.starts_with(&config.gene_namespace))
                .collect();
            ReactionDetailRow {
                reaction_id: reaction.id.clone(),
                name: reaction.name_or_empty().to_string(),
                equation: reaction.build_reaction_string(),
                gpr: reaction
                    .gene_reaction_rule()
                    .unwrap_or_else(|| NONE_SENTINEL.to_string()),
                genes: if genes.is_empty() {
                    NONE_SENTINEL.to_string()
                } else {
                    genes.join("; ")
                },
                reversible: reaction.reversibility(),
                lower_bound: reaction.lower_bound,
                upper_bound: reaction.upper_bound,
            }
        })
        .collect()
}

pub fn summary(extraction: &PathwayExtraction) -> Summary {
    Summary {
        network_reactions: extraction.network_reactions,
        network_genes: extraction.network_genes,
        pathway_reactions: extraction.pathway_reactions().len(),
        phase_reactions: extraction
            .classification
            .phases
            .iter()
            .map(|(phase, reactions)| (phase.clone(), reactions.len()))
            .collect(),
        auxiliary_added: extraction
            .core
            .groups
            .iter()
            .map(|group| (group.label.clone(), group.added.len()))
            .collect(),
        core_reactions: extraction.core.len(),
        genes: extraction.evidence.gene_count(),
        compartments: extraction.verification.compartments.len(),
        diagnostics: extraction.diagnostics.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metabolic_model::model::Model;
    use crate::pathway::pipeline::extract_pathway;
    use std::path::PathBuf;

    fn toy_model() -> Model {
        let data_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test_data")
            .join("test_models")
            .join("butyrate_toy.json");
        Model::read_json(data_path).unwrap()
    }

    #[test]
    fn truncation() {
        let reactions: Vec<String> = (1..=7).map(|i| format!("R{}", i)).collect();
        assert_eq!(truncated_list(&reactions, 5), "R1, R2, R3, R4, R5...");
        assert_eq!(truncated_list(&reactions[..2], 5), "R1, R2");
        assert_eq!(truncated_list(&reactions[..5], 5), "R1, R2, R3, R4, R5");
    }

    #[test]
    fn gene_rows() {
        let model = toy_model();
        let config = PathwayConfiguration::default();
        let extraction = extract_pathway(&model, &config).unwrap();
        let rows = gene_evidence_rows(&extraction, &config);
        let ids: Vec<&str> = rows.iter().map(|r| r.gene_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "ENSG00000005187",
                "ENSG00000122971",
                "ENSG00000155380",
                "ENSG00000183549"
            ]
        );
        assert_eq!(rows[0].symbol, "ACSM3");
        assert_eq!(rows[0].reactions, "MAR_A1");
        // The ACADS gene has an empty name in the model
        assert_eq!(rows[1].symbol, "ENSG00000122971");
        assert_eq!(rows[2].reaction_count, 1);
        assert_eq!(rows[3].notes, "Butyrate pathway gene");
    }

    #[test]
    fn reaction_rows() {
        let model = toy_model();
        let config = PathwayConfiguration::default();
        let extraction = extract_pathway(&model, &config).unwrap();
        let rows = reaction_detail_rows(&model, &extraction, &config);
        let ids: Vec<&str> = rows.iter().map(|r| r.reaction_id.as_str()).collect();
        assert_eq!(ids, vec!["MAR09809", "MAR_A1", "MAR_O1", "MAR_T1"]);

        let exchange = &rows[0];
        assert_eq!(exchange.gpr, NONE_SENTINEL);
        assert_eq!(exchange.genes, NONE_SENTINEL);
        assert!(exchange.reversible);
        assert_eq!(exchange.equation, "but_e <=>");

        let activation = &rows[1];
        assert_eq!(activation.genes, "ENSG00000005187; ENSG00000183549");
        assert_eq!(
            activation.gpr,
            "(ENSG00000005187 or ENSG00000183549)"
        );
        assert!(!activation.reversible);
        assert_eq!(activation.lower_bound, 0.0);

        // The RefSeq id is filtered from the gene column but kept in the rule
        let oxidation = &rows[2];
        assert_eq!(oxidation.genes, "ENSG00000122971");
        assert_eq!(oxidation.gpr, "(ENSG00000122971 or NM_000017)");
    }

    #[test]
    fn summary_record() {
        let model = toy_model();
        let extraction = extract_pathway(&model, &PathwayConfiguration::default()).unwrap();
        let summary = summary(&extraction);
        assert_eq!(summary.network_reactions, 8);
        assert_eq!(summary.network_genes, 9);
        assert_eq!(summary.pathway_reactions, 4);
        assert_eq!(summary.phase_reactions.get("transport"), Some(&1));
        assert_eq!(summary.phase_reactions.get("activation"), Some(&1));
        assert_eq!(summary.phase_reactions.get("oxidation"), Some(&3));
        assert_eq!(summary.auxiliary_added.get("OXPHOS"), Some(&1));
        assert_eq!(summary.auxiliary_added.get("Exchange"), Some(&1));
        assert_eq!(summary.auxiliary_added.get("Biomass/ATPM"), Some(&0));
        assert_eq!(summary.core_reactions, 6);
        assert_eq!(summary.genes, 4);
        assert_eq!(summary.compartments, 3);
        assert_eq!(summary.diagnostics.excluded_false_positives, 1);
        assert_eq!(summary.diagnostics.missing_auxiliary.len(), 7);
        assert!(summary.diagnostics.empty_phases.is_empty());
        assert_eq!(
            summary.diagnostics.reactions_without_evidence,
            vec!["MAR09809"]
        );
    }
}

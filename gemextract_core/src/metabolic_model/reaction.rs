//! This module provides a struct for representing reactions
use super::model::Gpr;
use crate::configuration::Configuration;
use derive_builder::Builder;
use indexmap::{IndexMap, IndexSet};

/// Represents a reaction in the metabolic model
#[derive(Builder, Debug, Clone)]
pub struct Reaction {
    /// Used to identify the reaction
    pub id: String,
    /// Metabolite stoichiometry of the reaction
    #[builder(default = "IndexMap::new()")]
    pub metabolites: IndexMap<String, f64>,
    /// Human-readable reaction name
    #[builder(default = "None")]
    pub name: Option<String>,
    /// Gene Protein Reaction rule linking the reaction to its genes
    #[builder(default = "None")]
    pub gpr: Option<Gpr>,
    /// Lower flux bound
    #[builder(default = "Configuration::current().lower_bound")]
    pub lower_bound: f64,
    /// Upper flux bound
    #[builder(default = "Configuration::current().upper_bound")]
    pub upper_bound: f64,
    /// Reaction subsystem
    #[builder(default = "None")]
    pub subsystem: Option<String>,
    /// Notes about the reaction
    #[builder(default = "None")]
    pub notes: Option<String>,
    /// Reaction Annotations
    #[builder(default = "None")]
    pub annotation: Option<String>,
}

impl Reaction {
    /// Reaction name, or an empty string if the reaction has none
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Ids of the genes in the GPR, in order of first appearance
    pub fn genes(&self) -> IndexSet<String> {
        let mut genes = IndexSet::new();
        if let Some(ref gpr) = self.gpr {
            gpr.collect_gene_ids(&mut genes);
        }
        genes
    }

    /// The GPR rule as a string, None if the reaction has no rule
    pub fn gene_reaction_rule(&self) -> Option<String> {
        self.gpr.as_ref().map(|rule| rule.to_string_id())
    }

    /// Whether the reaction can carry flux in both directions
    pub fn reversibility(&self) -> bool {
        self.lower_bound < 0f64 && self.upper_bound > 0f64
    }

    /// Human-readable equation built from the stoichiometry, e.g. `2.0 a_c + b_c --> c_c`
    ///
    /// # Note:
    /// Reversible reactions use `<=>`, reactions which can only run backwards use `<--`.
    /// Coefficients are only written when they differ from 1.
    pub fn build_reaction_string(&self) -> String {
        let format_bit = |id: &str, coefficient: f64| -> String {
            let magnitude = coefficient.abs();
            if (magnitude - 1f64).abs() < f64::EPSILON {
                id.to_string()
            } else {
                format!("{:?} {}", magnitude, id)
            }
        };
        let reactants: Vec<String> = self
            .metabolites
            .iter()
            .filter(|(_, coef)| **coef < 0f64)
            .map(|(id, coef)| format_bit(id, *coef))
            .collect();
        let products: Vec<String> = self
            .metabolites
            .iter()
            .filter(|(_, coef)| **coef > 0f64)
            .map(|(id, coef)| format_bit(id, *coef))
            .collect();
        let arrow = if self.reversibility() {
            "<=>"
        } else if self.lower_bound < 0f64 && self.upper_bound <= 0f64 {
            "<--"
        } else {
            "-->"
        };
        format!(
            "{} {} {}",
            reactants.join(" + "),
            arrow,
            products.join(" + ")
        )
        .trim()
        .to_string()
    }
}

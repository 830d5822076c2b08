//! Read-only interface over a reaction network
//!
//! The pathway extraction never touches a [`Model`](super::model::Model) directly, it only
//! asks a [`NetworkView`] for reactions, metabolites and genes. Any other representation of
//! a network can be classified by implementing this trait.
use thiserror::Error;

use crate::metabolic_model::gene::Gene;
use crate::metabolic_model::metabolite::Metabolite;
use crate::metabolic_model::reaction::Reaction;

pub trait NetworkView {
    /// All reactions, in the network's stable iteration order
    fn reactions(&self) -> Box<dyn Iterator<Item = &Reaction> + '_>;

    /// All metabolites, in the network's stable iteration order
    fn metabolites(&self) -> Box<dyn Iterator<Item = &Metabolite> + '_>;

    /// All genes, in the network's stable iteration order
    fn genes(&self) -> Box<dyn Iterator<Item = &Gene> + '_>;

    fn reaction(&self, id: &str) -> Option<&Reaction>;

    fn metabolite(&self, id: &str) -> Option<&Metabolite>;

    fn gene(&self, id: &str) -> Option<&Gene>;

    fn reaction_count(&self) -> usize;

    fn gene_count(&self) -> usize;

    /// Check that the network is structurally usable
    ///
    /// # Errors
    /// Returns the first [`NetworkError`] found: an entity without an identifier, or a
    /// reaction referencing a metabolite or gene the network doesn't contain.
    fn validate(&self) -> Result<(), NetworkError> {
        if let Some(position) = self.metabolites().position(|m| m.id.trim().is_empty()) {
            return Err(NetworkError::MissingMetaboliteId { position });
        }
        if let Some(position) = self.genes().position(|g| g.id.trim().is_empty()) {
            return Err(NetworkError::MissingGeneId { position });
        }
        for (position, reaction) in self.reactions().enumerate() {
            if reaction.id.trim().is_empty() {
                return Err(NetworkError::MissingReactionId { position });
            }
            for metabolite in reaction.metabolites.keys() {
                if self.metabolite(metabolite).is_none() {
                    return Err(NetworkError::UnknownMetabolite {
                        reaction: reaction.id.clone(),
                        metabolite: metabolite.clone(),
                    });
                }
            }
            for gene in reaction.genes() {
                if self.gene(&gene).is_none() {
                    return Err(NetworkError::UnknownGene {
                        reaction: reaction.id.clone(),
                        gene,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Structural problems which make a network unusable
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NetworkError {
    #[error("Reaction at position {position} has no identifier")]
    MissingReactionId { position: usize },
    #[error("Metabolite at position {position} has no identifier")]
    MissingMetaboliteId { position: usize },
    #[error("Gene at position {position} has no identifier")]
    MissingGeneId { position: usize },
    #[error("Reaction {reaction} references metabolite {metabolite}, which is not in the network")]
    UnknownMetabolite { reaction: String, metabolite: String },
    #[error("Reaction {reaction} references gene {gene}, which is not in the network")]
    UnknownGene { reaction: String, gene: String },
}

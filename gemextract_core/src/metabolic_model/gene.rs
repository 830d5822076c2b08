//! This module provides the Gene struct, representing a gene associated with a reaction
use std::fmt::{Display, Formatter};
use derive_builder::Builder;

/// Structure Representing a Gene
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
pub struct Gene {
    /// Used to identify the gene, usually namespace prefixed (e.g. ENSG00000155380)
    pub id: String,
    /// Human Readable Gene Name, often the gene symbol
    #[builder(default = "None")]
    pub name: Option<String>,
    /// Notes about the gene
    #[builder(default = "None")]
    pub notes: Option<String>,
    /// Gene Annotations
    #[builder(default = "None")]
    pub annotation: Option<String>,
}

impl Gene {
    pub fn new(id: String, name: Option<String>) -> Gene {
        Gene {
            id,
            name,
            notes: None,
            annotation: None,
        }
    }

    /// Name to show for this gene, falls back to the id when the name is missing or empty
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.id,
        }
    }
}

impl Display for Gene {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let gene = GeneBuilder::default()
            .id("ENSG00000155380".to_string())
            .build()
            .unwrap();
        assert_eq!(gene.id, "ENSG00000155380");
        assert!(gene.name.is_none());
        assert!(gene.notes.is_none());
        assert!(gene.annotation.is_none());
    }

    #[test]
    fn display_name() {
        let named = Gene::new("ENSG00000155380".to_string(), Some("SLC16A1".to_string()));
        assert_eq!(named.display_name(), "SLC16A1");
        let empty = Gene::new("ENSG00000122971".to_string(), Some("  ".to_string()));
        assert_eq!(empty.display_name(), "ENSG00000122971");
        let unnamed = Gene::new("ENSG00000161267".to_string(), None);
        assert_eq!(unnamed.display_name(), "ENSG00000161267");
        assert_eq!(format!("{}", named), "ENSG00000155380");
    }
}

//! This module provides the metabolite struct representing a metabolite

use derive_builder::Builder;

/// Compartment key used for metabolites which don't declare a compartment
pub const UNASSIGNED_COMPARTMENT: &str = "unassigned";

/// Represents a metabolite
#[derive(Builder, Debug, Clone)]
pub struct Metabolite {
    /// Used to identify the metabolite (must be unique)
    pub id: String,
    /// Human Readable name of the metabolite
    #[builder(default = "None")]
    pub name: Option<String>,
    /// Which compartment the metabolite is in
    #[builder(default = "None")]
    pub compartment: Option<String>,
    /// Electrical charge of the Metabolite
    #[builder(default = "0")]
    pub charge: i32,
    /// Chemical Formula of the metabolite
    #[builder(default = "None")]
    pub formula: Option<String>,
    /// Notes about the metabolite
    #[builder(default = "None")]
    pub notes: Option<String>,
    /// Metabolite annotations
    #[builder(default = "None")]
    pub annotation: Option<String>,
}

impl Metabolite {
    /// Compartment code of the metabolite, or [`UNASSIGNED_COMPARTMENT`]
    pub fn compartment_code(&self) -> &str {
        match self.compartment.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => UNASSIGNED_COMPARTMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compartment_code() {
        let met = MetaboliteBuilder::default()
            .id("but_c".to_string())
            .compartment(Some("c".to_string()))
            .build()
            .unwrap();
        assert_eq!(met.compartment_code(), "c");
        assert_eq!(met.charge, 0);

        let loose = MetaboliteBuilder::default()
            .id("but".to_string())
            .build()
            .unwrap();
        assert_eq!(loose.compartment_code(), UNASSIGNED_COMPARTMENT);
    }
}

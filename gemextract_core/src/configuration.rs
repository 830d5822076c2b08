//! Process-wide defaults and the pathway extraction configuration
use std::fs;
use std::path::Path;
use std::sync::{LazyLock, PoisonError, RwLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pathway::classify::KeywordScan;

pub static CONFIGURATION: LazyLock<RwLock<Configuration>> =
    LazyLock::new(|| RwLock::new(Configuration::default()));

/// Defaults shared by everything built in this process
#[derive(Clone, Debug)]
pub struct Configuration {
    /// Lower bound given to reactions which don't specify one
    pub lower_bound: f64,
    /// Upper bound given to reactions which don't specify one
    pub upper_bound: f64,
    /// Size of the worker pool the pipeline runs its parallel steps in, 1 keeps everything on
    /// the calling thread
    pub processes: u32,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            lower_bound: -1000.,
            upper_bound: 1000.,
            processes: 1,
        }
    }
}

impl Configuration {
    /// Snapshot of the current process-wide configuration
    pub fn current() -> Configuration {
        CONFIGURATION
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Set the number of processes the pipeline may use
    pub fn set_processes(processes: u32) {
        CONFIGURATION
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .processes = processes.max(1);
    }
}

// region Pathway Configuration

/// Keyword pass over id, name and subsystem used to pull in energy-production reactions
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuxiliaryScan {
    /// Phase name reported in the phase status
    pub phase: String,
    /// Label of the auxiliary group the matches are merged in as
    pub label: String,
    /// Substrings searched for
    pub keywords: Vec<String>,
}

/// Reactions named explicitly by identifier, merged into the core set
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuxiliaryGroup {
    pub label: String,
    /// Reaction id to a human readable label
    pub reactions: IndexMap<String, String>,
}

impl AuxiliaryGroup {
    pub fn new<S: Into<String>>(label: S, reactions: IndexMap<String, String>) -> Self {
        AuxiliaryGroup {
            label: label.into(),
            reactions,
        }
    }
}

/// Everything the extraction pipeline needs to know about the pathway being extracted
///
/// The default value describes butyrate uptake, activation and β-oxidation in Human-GEM,
/// with OXPHOS, exchange and biomass reactions as auxiliary groups. Fields missing from a
/// JSON configuration file fall back to these defaults.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathwayConfiguration {
    /// Phase name to the substrings marking a reaction as part of that phase
    pub phases: IndexMap<String, Vec<String>>,
    /// Substrings which veto a reaction regardless of which phase matched
    pub exclusions: Vec<String>,
    pub auxiliary_scan: AuxiliaryScan,
    /// Explicit identifier groups, applied in order after the auxiliary scan
    pub auxiliary_groups: Vec<AuxiliaryGroup>,
    /// Prefix a gene id needs to count as evidence (e.g. "ENSG")
    pub gene_namespace: String,
    /// Number of entries shown in bounded listings
    pub preview_size: usize,
    /// Number of reactions listed per gene in the gene evidence table
    pub evidence_list_limit: usize,
    /// Free text note attached to every gene evidence row
    pub gene_note: String,
    /// Compartment code to long name, only used for presentation
    pub compartment_names: IndexMap<String, String>,
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn to_owned_map(items: &[(&str, &str)]) -> IndexMap<String, String> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Default for PathwayConfiguration {
    fn default() -> Self {
        let mut phases = IndexMap::new();
        phases.insert(
            "transport".to_string(),
            to_owned_vec(&[
                "mct1",
                "mct4",
                "smct",
                "slc16a1",
                "slc5a8",
                "slc5a12",
                "monocarboxylate transport",
                "butyrate transport",
            ]),
        );
        phases.insert(
            "activation".to_string(),
            to_owned_vec(&[
                "butyryl-coa",
                "butanoyl-coa",
                "butyrate:coa",
                "acsm",
                "acss",
                "butyryl coa",
            ]),
        );
        phases.insert(
            "oxidation".to_string(),
            to_owned_vec(&[
                "butyr",
                "c4:0",
                "c4",
                "acads",
                "echs1",
                "hadha",
                "hadhb",
                "acat1",
                "butanoyl",
                "β-oxidation",
            ]),
        );
        PathwayConfiguration {
            phases,
            exclusions: to_owned_vec(&[
                // GABA pathway
                "aminobut",
                // pyrimidine degradation
                "ureidobut",
                // leucine metabolism
                "methylbut",
                // ketone bodies
                "hydroxybut",
            ]),
            auxiliary_scan: AuxiliaryScan {
                phase: "oxphos".to_string(),
                label: "OXPHOS".to_string(),
                keywords: to_owned_vec(&[
                    "oxphos",
                    "respiratory chain",
                    "atp synthase",
                    "complex i",
                    "complex ii",
                    "complex iii",
                    "complex iv",
                    "complex v",
                    "nadh dehydrogenase",
                    "succinate dehydrogenase",
                    "cytochrome c oxidase",
                    "ubiquinol",
                ]),
            },
            auxiliary_groups: vec![
                AuxiliaryGroup::new(
                    "Exchange",
                    to_owned_map(&[
                        ("MAR09809", "Exchange of butyrate"),
                        ("MAR09086", "Exchange of acetate"),
                        ("MAR09808", "Exchange of propanoate"),
                        ("MAR09048", "Exchange of O2"),
                        ("MAR09058", "Exchange of CO2"),
                        ("MAR09047", "Exchange of H2O"),
                    ]),
                ),
                AuxiliaryGroup::new(
                    "Biomass/ATPM",
                    to_owned_map(&[
                        ("MAR09931", "Biomass"),
                        ("MAR09932", "Biomass"),
                        ("MAR04413", "ATP maintenance"),
                    ]),
                ),
            ],
            gene_namespace: "ENSG".to_string(),
            preview_size: 10,
            evidence_list_limit: 5,
            gene_note: "Butyrate pathway gene".to_string(),
            compartment_names: to_owned_map(&[
                ("c", "Cytosol"),
                ("m", "Mitochondria"),
                ("e", "Extracellular"),
                ("l", "Lumen"),
                ("lum", "Lumen"),
                ("b", "Blood"),
                ("n", "Nucleus"),
                ("r", "Endoplasmic reticulum"),
                ("x", "Peroxisome"),
                ("g", "Golgi"),
            ]),
        }
    }
}

impl PathwayConfiguration {
    /// Read a pathway configuration from a JSON file
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) => return Err(ConfigurationError::UnableToRead(format!("{:?}", err))),
        };
        let config: PathwayConfiguration = serde_json::from_str(&data)?;
        config.check()?;
        Ok(config)
    }

    /// Reject configurations the classifier can't work with
    pub fn check(&self) -> Result<(), ConfigurationError> {
        if self.phases.is_empty() {
            return Err(ConfigurationError::NoPhases);
        }
        if self.phases.contains_key(&self.auxiliary_scan.phase) {
            return Err(ConfigurationError::DuplicatePhase(
                self.auxiliary_scan.phase.clone(),
            ));
        }
        let empty_keyword = self
            .phases
            .values()
            .chain(std::iter::once(&self.exclusions))
            .chain(std::iter::once(&self.auxiliary_scan.keywords))
            .flatten()
            .any(|kw| kw.is_empty());
        if empty_keyword {
            // An empty substring would match every reaction
            return Err(ConfigurationError::EmptyKeyword);
        }
        Ok(())
    }

    /// Copy of this configuration with every keyword lowercased
    pub fn normalized(&self) -> Self {
        let lower = |kws: &Vec<String>| -> Vec<String> {
            kws.iter().map(|k| k.to_lowercase()).collect()
        };
        let mut config = self.clone();
        config.phases = self
            .phases
            .iter()
            .map(|(phase, kws)| (phase.clone(), lower(kws)))
            .collect();
        config.exclusions = lower(&self.exclusions);
        config.auxiliary_scan.keywords = lower(&self.auxiliary_scan.keywords);
        config
    }

    /// Scan used to place reactions into the primary pathway phases
    pub fn phase_scan(&self) -> KeywordScan {
        KeywordScan {
            phases: self.phases.clone(),
            exclusions: self.exclusions.clone(),
            include_subsystem: false,
        }
    }

    /// Scan used to find the auxiliary energy-production reactions
    pub fn energy_scan(&self) -> KeywordScan {
        let mut phases = IndexMap::new();
        phases.insert(
            self.auxiliary_scan.phase.clone(),
            self.auxiliary_scan.keywords.clone(),
        );
        KeywordScan {
            phases,
            exclusions: Vec::new(),
            include_subsystem: true,
        }
    }

    /// Long name of a compartment code, or the code itself if unknown
    pub fn compartment_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.compartment_names
            .get(code)
            .map(|s| s.as_str())
            .unwrap_or(code)
    }
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Unable to read configuration file due to {0}")]
    UnableToRead(String),
    #[error("Unable to parse configuration")]
    UnableToParse(#[from] serde_json::Error),
    #[error("Configuration defines no pathway phases")]
    NoPhases,
    #[error("Phase {0} is defined both as a pathway phase and by the auxiliary scan")]
    DuplicatePhase(String),
    #[error("Keywords must not be empty")]
    EmptyKeyword,
}

// endregion Pathway Configuration

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration() {
        let config = PathwayConfiguration::default();
        assert!(config.check().is_ok());
        let phases: Vec<&String> = config.phases.keys().collect();
        assert_eq!(phases, vec!["transport", "activation", "oxidation"]);
        assert_eq!(config.auxiliary_scan.phase, "oxphos");
        assert_eq!(config.gene_namespace, "ENSG");
        assert_eq!(config.auxiliary_groups.len(), 2);
        assert_eq!(
            config.auxiliary_groups[0].reactions.get("MAR09809").unwrap(),
            "Exchange of butyrate"
        );
    }

    #[test]
    fn partial_json_uses_defaults() {
        let data = r#"{
"gene_namespace":"ENSCAFG",
"exclusions":["hydroxybut"]
}"#;
        let config: PathwayConfiguration = serde_json::from_str(data).unwrap();
        assert_eq!(config.gene_namespace, "ENSCAFG");
        assert_eq!(config.exclusions, vec!["hydroxybut".to_string()]);
        assert_eq!(config.phases.len(), 3);
        assert_eq!(config.preview_size, 10);
    }

    #[test]
    fn normalized_lowercases_keywords() {
        let mut config = PathwayConfiguration::default();
        config
            .phases
            .insert("extra".to_string(), vec!["SLC16A3".to_string()]);
        config.exclusions.push("MethylMalonyl".to_string());
        config.auxiliary_scan.keywords = vec!["ATP Synthase".to_string()];
        let normalized = config.normalized();
        assert_eq!(normalized.phases.get("extra").unwrap(), &vec!["slc16a3"]);
        assert!(normalized.exclusions.contains(&"methylmalonyl".to_string()));
        assert_eq!(normalized.auxiliary_scan.keywords, vec!["atp synthase"]);
    }

    #[test]
    fn invalid_configurations() {
        let mut config = PathwayConfiguration::default();
        config.phases.clear();
        assert!(matches!(config.check(), Err(ConfigurationError::NoPhases)));

        let mut config = PathwayConfiguration::default();
        config
            .phases
            .insert("oxphos".to_string(), vec!["atp".to_string()]);
        assert!(matches!(
            config.check(),
            Err(ConfigurationError::DuplicatePhase(_))
        ));

        let mut config = PathwayConfiguration::default();
        config.exclusions.push(String::new());
        assert!(matches!(
            config.check(),
            Err(ConfigurationError::EmptyKeyword)
        ));
    }

    #[test]
    fn energy_scan_reads_subsystem() {
        let config = PathwayConfiguration::default();
        let scan = config.energy_scan();
        assert!(scan.include_subsystem);
        assert!(scan.exclusions.is_empty());
        assert!(scan.phases.contains_key("oxphos"));
        assert!(!config.phase_scan().include_subsystem);
    }

    #[test]
    fn compartment_names() {
        let config = PathwayConfiguration::default();
        assert_eq!(config.compartment_name("m"), "Mitochondria");
        assert_eq!(config.compartment_name("zz"), "zz");
    }
}

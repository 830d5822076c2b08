//! Keyword classification of reactions into pathway phases
use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::metabolic_model::reaction::Reaction;
use crate::metabolic_model::view::NetworkView;

/// Keywords used for one classification pass
///
/// Keywords are matched as lowercase substrings of the reaction text, not as words, so an
/// exclusion keyword only vetoes a risky inclusion keyword if it contains it
/// (e.g. `hydroxybut` against `butyr`).
#[derive(Clone, Debug, Default)]
pub struct KeywordScan {
    /// Phase name to its (lowercase) keywords
    pub phases: IndexMap<String, Vec<String>>,
    /// Lowercase keywords which veto a reaction from every phase
    pub exclusions: Vec<String>,
    /// Whether the subsystem is part of the searched text
    pub include_subsystem: bool,
}

impl KeywordScan {
    /// Lowercase text searched for keywords: id and name, optionally the subsystem
    fn haystack(&self, reaction: &Reaction) -> String {
        let mut text = format!("{} {}", reaction.id, reaction.name_or_empty());
        if self.include_subsystem {
            if let Some(ref subsystem) = reaction.subsystem {
                text.push(' ');
                text.push_str(subsystem);
            }
        }
        text.to_lowercase()
    }
}

/// Result of a classification pass
#[derive(Clone, Debug, Default)]
pub struct Classification {
    /// Phase name to the ids of its reactions, every phase of the scan is present
    pub phases: IndexMap<String, IndexSet<String>>,
    /// Ids of every reaction placed in at least one phase, in network order
    pub matched: IndexSet<String>,
    /// Reactions which matched an inclusion keyword but were vetoed by an exclusion keyword
    pub excluded_count: usize,
}

impl Classification {
    /// Number of reactions classified into `phase`, 0 for unknown phases
    pub fn phase_count(&self, phase: &str) -> usize {
        self.phases.get(phase).map(|set| set.len()).unwrap_or(0)
    }
}

/// Classify every reaction of `view` into the phases of `scan`
///
/// A reaction containing any inclusion keyword and no exclusion keyword is added to every
/// phase whose own keywords matched, so it can belong to several phases. A reaction
/// containing both is counted in [`Classification::excluded_count`] and added nowhere.
///
/// # Examples
/// ```rust
/// use gemextract_core::metabolic_model::model::Model;
/// use gemextract_core::metabolic_model::reaction::ReactionBuilder;
/// use gemextract_core::pathway::classify::{classify, KeywordScan};
///
/// let mut model = Model::new_empty();
/// model.add_reaction(
///     ReactionBuilder::default()
///         .id("R3".to_string())
///         .name(Some("3-hydroxybutyrate dehydrogenase".to_string()))
///         .build()
///         .unwrap(),
/// );
/// let mut scan = KeywordScan::default();
/// scan.phases.insert("oxidation".to_string(), vec!["butyr".to_string()]);
/// scan.exclusions.push("hydroxybut".to_string());
///
/// let classification = classify(&model, &scan);
/// assert_eq!(classification.excluded_count, 1);
/// assert!(classification.matched.is_empty());
/// ```
pub fn classify<V: NetworkView + ?Sized>(view: &V, scan: &KeywordScan) -> Classification {
    let mut phases: IndexMap<String, IndexSet<String>> = scan
        .phases
        .keys()
        .map(|phase| (phase.clone(), IndexSet::new()))
        .collect();
    let mut matched = IndexSet::new();
    let mut excluded_count = 0usize;

    for reaction in view.reactions() {
        let haystack = scan.haystack(reaction);
        let phase_hits: Vec<&String> = scan
            .phases
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|kw| haystack.contains(kw.as_str())))
            .map(|(phase, _)| phase)
            .collect();
        if phase_hits.is_empty() {
            continue;
        }
        if scan
            .exclusions
            .iter()
            .any(|kw| haystack.contains(kw.as_str()))
        {
            trace!(reaction = %reaction.id, "vetoed by exclusion keyword");
            excluded_count += 1;
            continue;
        }
        for phase in phase_hits {
            if let Some(set) = phases.get_mut(phase) {
                set.insert(reaction.id.clone());
            }
        }
        matched.insert(reaction.id.clone());
    }

    Classification {
        phases,
        matched,
        excluded_count,
    }
}

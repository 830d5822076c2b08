//! Merging phase-classified reactions with auxiliary reactions named by identifier
use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

use crate::configuration::AuxiliaryGroup;
use crate::metabolic_model::view::NetworkView;

/// What happened to each identifier of one auxiliary group
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct GroupOutcome {
    pub label: String,
    /// Ids which were not in the core set before this group
    pub added: Vec<String>,
    /// Ids already present, through a phase or an earlier group
    pub already_present: Vec<String>,
    /// Ids the network doesn't contain
    pub missing: Vec<String>,
}

/// The curated sub-network: phase-classified and auxiliary reactions, each at most once
#[derive(Clone, Debug, Default)]
pub struct CoreSet {
    /// Reaction ids in insertion order
    pub reactions: IndexSet<String>,
    /// One outcome per auxiliary group, in application order
    pub groups: Vec<GroupOutcome>,
}

impl CoreSet {
    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.reactions.contains(id)
    }

    /// Total number of reactions added by auxiliary groups
    pub fn auxiliary_added(&self) -> usize {
        self.groups.iter().map(|g| g.added.len()).sum()
    }
}

/// Build the core set from the union of the phase-classified reactions and `groups`
///
/// Groups are applied in order. Identifiers missing from the network are recorded and
/// skipped. Final membership doesn't depend on the group order, but the number of
/// reactions a group reports as added does: a later group doesn't count reactions an
/// earlier one already brought in.
pub fn build_core_set<V: NetworkView + ?Sized>(
    view: &V,
    phase_union: &IndexSet<String>,
    groups: &[AuxiliaryGroup],
) -> CoreSet {
    let mut reactions = phase_union.clone();
    let mut outcomes = Vec::with_capacity(groups.len());

    for group in groups {
        let mut outcome = GroupOutcome {
            label: group.label.clone(),
            ..Default::default()
        };
        for id in group.reactions.keys() {
            if view.reaction(id).is_none() {
                debug!(group = %group.label, reaction = %id, "auxiliary reaction not in network");
                outcome.missing.push(id.clone());
            } else if reactions.insert(id.clone()) {
                outcome.added.push(id.clone());
            } else {
                outcome.already_present.push(id.clone());
            }
        }
        outcomes.push(outcome);
    }

    CoreSet {
        reactions,
        groups: outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metabolic_model::model::Model;
    use crate::metabolic_model::reaction::ReactionBuilder;
    use indexmap::IndexMap;

    fn model_with(ids: &[&str]) -> Model {
        let mut model = Model::new_empty();
        for id in ids {
            model.add_reaction(ReactionBuilder::default().id(id.to_string()).build().unwrap());
        }
        model
    }

    fn group(label: &str, ids: &[&str]) -> AuxiliaryGroup {
        let reactions: IndexMap<String, String> = ids
            .iter()
            .map(|id| (id.to_string(), format!("{} reaction", label)))
            .collect();
        AuxiliaryGroup::new(label, reactions)
    }

    fn union(ids: &[&str]) -> IndexSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn phase_and_auxiliary_match_once() {
        let model = model_with(&["R1", "R2", "MAR09809"]);
        let core = build_core_set(
            &model,
            &union(&["R1", "MAR09809"]),
            &[group("Exchange", &["MAR09809", "R2"])],
        );
        assert_eq!(core.len(), 3);
        assert_eq!(core.reactions.iter().filter(|id| *id == "MAR09809").count(), 1);
        assert_eq!(core.groups[0].added, vec!["R2"]);
        assert_eq!(core.groups[0].already_present, vec!["MAR09809"]);
        assert_eq!(core.auxiliary_added(), 1);
    }

    #[test]
    fn missing_identifier_is_skipped() {
        let model = model_with(&["R1", "R2"]);
        let core = build_core_set(
            &model,
            &union(&["R1", "R2"]),
            &[group("Exchange", &["EX99"])],
        );
        assert_eq!(core.len(), 2);
        assert!(!core.contains("EX99"));
        assert!(core.groups[0].added.is_empty());
        assert_eq!(core.groups[0].missing, vec!["EX99"]);
    }

    #[test]
    fn group_order_changes_deltas_not_membership() {
        let model = model_with(&["R1", "A", "B", "C"]);
        let first = group("first", &["A", "B", "missing"]);
        let second = group("second", &["B", "C"]);

        let forward = build_core_set(&model, &union(&["R1"]), &[first.clone(), second.clone()]);
        let backward = build_core_set(&model, &union(&["R1"]), &[second, first]);

        let mut forward_ids: Vec<&String> = forward.reactions.iter().collect();
        let mut backward_ids: Vec<&String> = backward.reactions.iter().collect();
        forward_ids.sort();
        backward_ids.sort();
        assert_eq!(forward_ids, backward_ids);

        // Total added equals the matched identifiers not already in the phase union
        assert_eq!(forward.auxiliary_added(), 3);
        assert_eq!(backward.auxiliary_added(), 3);

        assert_eq!(forward.groups[0].added, vec!["A", "B"]);
        assert_eq!(forward.groups[1].added, vec!["C"]);
        assert_eq!(backward.groups[0].added, vec!["B", "C"]);
        assert_eq!(backward.groups[1].added, vec!["A"]);
    }
}

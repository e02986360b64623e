//! Collaboration state mirror: a read-only local reflection of remote participants'
//! presence, kept in sync by whatever transport delivers mirror updates (out of scope
//! here; see `spec.md` §1 non-goals — this crate only holds and exposes the mirrored
//! state, it never originates or transports it).

use std::collections::BTreeMap;

use serde_json::Value;

/// Mirrors every known remote participant's last-reported state.
#[derive(Debug, Clone, Default)]
pub struct CollaborationMirror {
    participants: BTreeMap<String, Value>,
}

impl CollaborationMirror {
    /// Creates an empty mirror.
    pub fn new() -> Self {
        Self {
            participants: BTreeMap::new(),
        }
    }

    /// Replaces `participant_id`'s mirrored state wholesale (the transport is assumed
    /// to deliver full snapshots per participant, not incremental patches).
    pub fn apply_participant_state(&mut self, participant_id: impl Into<String>, state: Value) {
        self.participants.insert(participant_id.into(), state);
    }

    /// Removes a participant, e.g. on their disconnect.
    pub fn remove_participant(&mut self, participant_id: &str) {
        self.participants.remove(participant_id);
    }

    /// The mirrored state for a single participant.
    pub fn participant(&self, participant_id: &str) -> Option<&Value> {
        self.participants.get(participant_id)
    }

    /// Every mirrored participant, in id order.
    pub fn participants(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.participants.iter().map(|(id, state)| (id.as_str(), state))
    }

    /// Number of mirrored participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether no participants are currently mirrored.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_then_remove_round_trips() {
        let mut mirror = CollaborationMirror::new();
        mirror.apply_participant_state("alice", serde_json::json!({"cursor": [10, 20]}));
        assert_eq!(mirror.len(), 1);
        assert_eq!(mirror.participant("alice"), Some(&serde_json::json!({"cursor": [10, 20]})));
        mirror.remove_participant("alice");
        assert!(mirror.is_empty());
    }

    #[test]
    fn reapplying_replaces_rather_than_merges() {
        let mut mirror = CollaborationMirror::new();
        mirror.apply_participant_state("alice", serde_json::json!({"cursor": [10, 20], "color": "red"}));
        mirror.apply_participant_state("alice", serde_json::json!({"cursor": [30, 40]}));
        assert_eq!(mirror.participant("alice"), Some(&serde_json::json!({"cursor": [30, 40]})));
    }
}

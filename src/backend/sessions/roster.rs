/**
 * Session Roster
 *
 * The set of users attached to one session. Each (session, user) pair is in
 * one of two states:
 *
 * ```text
 * NotParticipant --join--> Participant --leave--> NotParticipant
 * ```
 *
 * Joining twice and leaving without having joined are both rejected. The
 * roster never holds the same user twice.
 */

use std::collections::BTreeSet;

use thiserror::Error;

/// A rejected roster transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("User {user_id} already participates in this session")]
    AlreadyParticipating { user_id: i64 },

    #[error("User {user_id} does not participate in this session")]
    NotParticipating { user_id: i64 },
}

/// Participants of a single session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    participants: BTreeSet<i64>,
}

impl Roster {
    /// Build a roster from stored participant ids; duplicates collapse
    pub fn new(participants: impl IntoIterator<Item = i64>) -> Self {
        Self {
            participants: participants.into_iter().collect(),
        }
    }

    pub fn contains(&self, user_id: i64) -> bool {
        self.participants.contains(&user_id)
    }

    /// Add `user_id`, rejecting a second join
    pub fn join(&mut self, user_id: i64) -> Result<(), RosterError> {
        if !self.participants.insert(user_id) {
            return Err(RosterError::AlreadyParticipating { user_id });
        }
        Ok(())
    }

    /// Remove `user_id`, rejecting a non-member
    pub fn leave(&mut self, user_id: i64) -> Result<(), RosterError> {
        if !self.participants.remove(&user_id) {
            return Err(RosterError::NotParticipating { user_id });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Participant ids in ascending order
    pub fn participants(&self) -> Vec<i64> {
        self.participants.iter().copied().collect()
    }
}

//! The idempotent toggle transition.
//!
//! Engagement is set membership: engage is add-if-absent, disengage is
//! remove-if-present. Each (user, target) pair is therefore a two-state
//! machine whose transitions converge; repeating an action cannot add a
//! second copy of a member or fail on an absent one.
//!
//! Concurrent opposite actions on the same pair are last-write-wins with no
//! defined winner. That race is accepted; what the set semantics rule out
//! is corruption from repeated identical actions.

use std::hash::Hash;

use im::HashSet as ImHashSet;

use super::action::ToggleAction;

/// Result of applying a toggle to a membership set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Whether the set actually changed (false for a converging repeat).
    pub changed: bool,

    /// Membership count after the toggle, so callers can update counters
    /// without a second read.
    pub count: usize,
}

/// Apply a directional toggle to a membership set.
#[must_use]
pub fn apply<T>(set: &mut ImHashSet<T>, member: T, action: ToggleAction) -> ToggleOutcome
where
    T: Hash + Eq + Clone,
{
    let changed = match action {
        ToggleAction::Engage => set.insert(member).is_none(),
        ToggleAction::Disengage => set.remove(&member).is_some(),
    };
    ToggleOutcome { changed, count: set.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UserId;

    #[test]
    fn test_engage_is_idempotent() {
        let mut set = ImHashSet::new();
        let user = UserId::new(1);

        let first = apply(&mut set, user, ToggleAction::Engage);
        assert_eq!(first, ToggleOutcome { changed: true, count: 1 });

        let second = apply(&mut set, user, ToggleAction::Engage);
        assert_eq!(second, ToggleOutcome { changed: false, count: 1 });
    }

    #[test]
    fn test_disengage_absent_member_is_noop() {
        let mut set: ImHashSet<UserId> = ImHashSet::new();
        let outcome = apply(&mut set, UserId::new(1), ToggleAction::Disengage);
        assert_eq!(outcome, ToggleOutcome { changed: false, count: 0 });
    }

    #[test]
    fn test_engage_disengage_round_trip() {
        let mut set = ImHashSet::new();
        let user = UserId::new(1);

        apply(&mut set, user, ToggleAction::Engage);
        let out = apply(&mut set, user, ToggleAction::Disengage);
        assert_eq!(out, ToggleOutcome { changed: true, count: 0 });
        assert!(!set.contains(&user));
    }

    #[test]
    fn test_independent_members() {
        let mut set = ImHashSet::new();
        apply(&mut set, UserId::new(1), ToggleAction::Engage);
        apply(&mut set, UserId::new(2), ToggleAction::Engage);
        let out = apply(&mut set, UserId::new(1), ToggleAction::Disengage);
        assert_eq!(out.count, 1);
        assert!(set.contains(&UserId::new(2)));
    }
}

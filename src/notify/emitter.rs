//! Notification emission.
//!
//! The emitter decides whether an action notifies anyone and constructs the
//! record. Two contracts hold everywhere it is used:
//!
//! - emit if and only if the actor is not the target's owner
//! - emission is best-effort: a failed write is logged and swallowed, and
//!   the triggering action still succeeds

use super::notification::{Notification, NotificationKind};
use crate::core::{TargetRef, UserId};
use crate::store::NotificationStore;

/// Emits notifications for cross-user actions.
pub struct NotificationEmitter<'a> {
    store: &'a dyn NotificationStore,
}

impl<'a> NotificationEmitter<'a> {
    #[must_use]
    pub fn new(store: &'a dyn NotificationStore) -> Self {
        Self { store }
    }

    /// Notify `owner` that `actor` acted on their content.
    ///
    /// Skipped entirely when the actor owns the target or the target has no
    /// owner. Persistence failures are logged at `warn` and swallowed.
    pub fn emit(
        &self,
        kind: NotificationKind,
        target: TargetRef,
        owner: Option<UserId>,
        actor: UserId,
    ) {
        let Some(owner) = owner else { return };
        if owner == actor {
            return;
        }

        let message = message_for(kind, target);
        let result = self.store.allocate_id().and_then(|id| {
            self.store.create(Notification::new(
                id,
                kind,
                message,
                target,
                owner,
                Some(actor),
            ))
        });

        match result {
            Ok(()) => log::debug!("notified {owner} of {kind} on {target} by {actor}"),
            Err(err) => log::warn!("dropping {kind} notification for {owner} on {target}: {err}"),
        }
    }

    /// Withdraw notifications `actor` previously triggered on this target.
    ///
    /// Called when an engagement is undone, so a like/unlike cycle leaves
    /// at most one notification behind instead of piling them up.
    /// Best-effort, same as `emit`.
    pub fn retract(
        &self,
        kind: NotificationKind,
        target: TargetRef,
        owner: Option<UserId>,
        actor: UserId,
    ) {
        let Some(owner) = owner else { return };
        if owner == actor {
            return;
        }

        let result = self.store.find_for_user(owner).and_then(|notifications| {
            for notification in notifications
                .into_iter()
                .filter(|n| {
                    n.kind == kind && n.target == target && n.triggered_by == Some(actor)
                })
            {
                self.store.delete(notification.id)?;
            }
            Ok(())
        });

        if let Err(err) = result {
            log::warn!("failed to retract {kind} notification for {owner} on {target}: {err}");
        }
    }
}

fn message_for(kind: NotificationKind, target: TargetRef) -> String {
    match kind {
        NotificationKind::Like => format!("Your {} received a new like", target.noun()),
        NotificationKind::Comment => format!("New comment on your {}", target.noun()),
        NotificationKind::Follow => "You have a new follower".to_string(),
        NotificationKind::Mention => format!("You were mentioned on a {}", target.noun()),
        NotificationKind::System => format!("Update about a {}", target.noun()),
    }
}

//! Comment thread management.
//!
//! The write path validates content before any persistence call, appends
//! the comment, and notifies the target's owner (best-effort, via the
//! emitter). The read path lists a target's thread newest-first with each
//! author's public profile joined in.

use super::comment::{Comment, CommentView};
use crate::core::{CommentId, TargetRef, UserId};
use crate::notify::{NotificationEmitter, NotificationKind};
use crate::store::{CommentStore, NotificationStore, OwnerResolver, StoreError, UserStore};

/// Failure from a comment operation.
#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    /// Content was empty or whitespace-only.
    #[error("comment content must not be empty")]
    EmptyContent,

    #[error("comment target not found: {0}")]
    TargetNotFound(TargetRef),

    #[error("comment not found: {0}")]
    NotFound(CommentId),

    /// Only the author (or, for deletes, an admin) may touch a comment.
    #[error("{user} may not modify comment {comment}")]
    NotAuthor { user: UserId, comment: CommentId },

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Appends, edits, deletes, and lists comments on a target.
pub struct CommentThreads<'a> {
    comments: &'a dyn CommentStore,
    users: &'a dyn UserStore,
    owners: &'a dyn OwnerResolver,
    notifications: &'a dyn NotificationStore,
}

impl<'a> CommentThreads<'a> {
    #[must_use]
    pub fn new(
        comments: &'a dyn CommentStore,
        users: &'a dyn UserStore,
        owners: &'a dyn OwnerResolver,
        notifications: &'a dyn NotificationStore,
    ) -> Self {
        Self { comments, users, owners, notifications }
    }

    /// Append a comment to a target.
    ///
    /// Whitespace-only content is rejected before anything is persisted.
    /// On success the target's owner is notified (unless the author owns
    /// the target, or it has no owner).
    pub fn submit(
        &self,
        author: UserId,
        target: TargetRef,
        content: &str,
    ) -> Result<Comment, CommentError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(CommentError::EmptyContent);
        }

        let owner = match self.owners.owner_of(target) {
            Ok(owner) => owner,
            Err(StoreError::NotFound { .. }) => return Err(CommentError::TargetNotFound(target)),
            Err(err) => return Err(err.into()),
        };

        let id = self.comments.allocate_id()?;
        let comment = Comment::new(id, target, author, content);
        self.comments.create(comment.clone())?;
        log::debug!("{author} commented on {target}");

        NotificationEmitter::new(self.notifications).emit(
            NotificationKind::Comment,
            target,
            owner,
            author,
        );

        Ok(comment)
    }

    /// A target's comments, newest first, with author profiles joined.
    ///
    /// Authors whose account no longer resolves are shown as deleted.
    pub fn thread(&self, target: TargetRef) -> Result<Vec<CommentView>, CommentError> {
        let mut comments = self.comments.find_for_target(target)?;
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        comments
            .into_iter()
            .map(|comment| {
                let author = self.users.find(comment.author)?;
                let (author_name, author_avatar) = match author {
                    Some(user) => (user.username, user.avatar_url),
                    None => ("[deleted]".to_string(), None),
                };
                Ok(CommentView { comment, author_name, author_avatar })
            })
            .collect()
    }

    /// Replace a comment's content. Author-only; content rules match
    /// `submit`.
    pub fn edit(
        &self,
        actor: UserId,
        id: CommentId,
        content: &str,
    ) -> Result<Comment, CommentError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(CommentError::EmptyContent);
        }

        let mut comment = self
            .comments
            .find(id)?
            .ok_or(CommentError::NotFound(id))?;
        if comment.author != actor {
            return Err(CommentError::NotAuthor { user: actor, comment: id });
        }

        comment.content = content.to_string();
        comment.updated_at = chrono::Utc::now();
        self.comments.update(id, comment.clone())?;
        Ok(comment)
    }

    /// Delete a comment. Allowed for the author and for admins.
    pub fn delete(&self, actor: UserId, id: CommentId) -> Result<(), CommentError> {
        let comment = self
            .comments
            .find(id)?
            .ok_or(CommentError::NotFound(id))?;

        if comment.author != actor {
            let user = self
                .users
                .find(actor)?
                .ok_or(CommentError::UserNotFound(actor))?;
            if !user.is_admin {
                return Err(CommentError::NotAuthor { user: actor, comment: id });
            }
        }

        self.comments.delete(id)?;
        Ok(())
    }
}

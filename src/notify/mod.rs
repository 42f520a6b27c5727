//! Cross-user notification records, emission, and the inbox read side.

pub mod emitter;
pub mod inbox;
pub mod notification;

pub use emitter::NotificationEmitter;
pub use inbox::{Inbox, InboxError};
pub use notification::{Notification, NotificationKind};

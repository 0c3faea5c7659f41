//! Toast queue shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any component can publish a message through `util::notify`; the toast host
//! in the app shell renders the queue. Each toast removes itself after
//! [`DISPLAY_MS`].

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// How long a toast stays visible.
pub const DISPLAY_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub items: Vec<Notification>,
    pub next_id: u64,
}

impl NotificationState {
    /// Queue a message and return its id for later dismissal.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, message: message.into(), kind });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

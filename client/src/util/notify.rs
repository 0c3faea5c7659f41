//! Toast publishing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components grab a [`Notifier`] during setup (while the reactive owner is
//! available) and move the `Copy` handle into async tasks. Each published
//! toast schedules its own removal after `DISPLAY_MS`.

use leptos::prelude::*;

use crate::state::notifications::{NotificationKind, NotificationState};

#[derive(Clone, Copy)]
pub struct Notifier(RwSignal<NotificationState>);

impl Notifier {
    #[must_use]
    pub fn new(state: RwSignal<NotificationState>) -> Self {
        Self(state)
    }

    pub fn push(self, message: impl Into<String>, kind: NotificationKind) {
        let mut id = 0;
        self.0.update(|s| id = s.push(message, kind));

        #[cfg(feature = "hydrate")]
        {
            let state = self.0;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::state::notifications::DISPLAY_MS).await;
                state.update(|s| s.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }

    pub fn success(self, message: impl Into<String>) {
        self.push(message, NotificationKind::Success);
    }

    pub fn error(self, message: impl Into<String>) {
        self.push(message, NotificationKind::Error);
    }
}

/// Notifier bound to the app-wide toast queue.
pub fn use_notifier() -> Notifier {
    Notifier::new(expect_context::<RwSignal<NotificationState>>())
}

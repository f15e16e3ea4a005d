//! Toast notification state.
//!
//! Pages push toasts for operation outcomes; the toaster component renders
//! the queue and dismisses entries on click or timeout.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use uuid::Uuid;

/// Only the newest toast stays visible; pushing beyond this evicts the
/// oldest entry.
pub const TOAST_LIMIT: usize = 1;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Destructive,
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

/// Queue of visible toasts, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastsState {
    pub toasts: Vec<Toast>,
}

impl ToastsState {
    /// Queue a toast and return its id for targeted dismissal.
    pub fn push(&mut self, title: &str, message: &str, variant: ToastVariant) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            title: title.to_owned(),
            message: message.to_owned(),
            variant,
        });
        while self.toasts.len() > TOAST_LIMIT {
            self.toasts.remove(0);
        }
        id
    }

    /// Remove the toast with `id`. Unknown ids are ignored; a timeout can
    /// race a manual dismissal.
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

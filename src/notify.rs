//! Notification Sink
//!
//! Transient user feedback entries. The sink only owns state; rendering and
//! auto-dismiss live in the `Toaster` component.

use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Variant {
    Success,
    Error,
    Info,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

/// Handle to the notification list, `Copy` so closures can capture it freely.
#[derive(Clone, Copy)]
pub struct Notifier {
    entries: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn entries(&self) -> RwSignal<Vec<Notification>> {
        self.entries
    }

    /// Push one entry and return its id.
    pub fn notify(
        &self,
        variant: Variant,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.entries.update(|entries| {
            entries.push(Notification {
                id,
                title: title.into(),
                description: description.into(),
                variant,
            })
        });
        id
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.notify(Variant::Success, title, description);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.notify(Variant::Error, title, description);
    }

    pub fn dismiss(&self, id: u64) {
        self.entries.update(|entries| entries.retain(|n| n.id != id));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the notifier from context
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_arrival_order_and_ids_are_unique() {
        let notifier = Notifier::new();
        notifier.error("Failed to load recipes", "HTTP 500 Internal Server Error");
        notifier.success("Recipe deleted", "The recipe was removed.");

        let entries = notifier.entries().get_untracked();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].variant, Variant::Error);
        assert_eq!(entries[1].variant, Variant::Success);
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn dismiss_removes_only_the_given_entry() {
        let notifier = Notifier::new();
        let first = notifier.notify(Variant::Info, "a", "b");
        notifier.notify(Variant::Info, "c", "d");

        notifier.dismiss(first);

        let entries = notifier.entries().get_untracked();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "c");
    }
}

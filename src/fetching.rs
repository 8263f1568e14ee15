//! List Resource Controller
//!
//! Owns the lifecycle of one fetched backend collection: initial load with a
//! fetch-once guard, per-item deletion with local list update, and explicit
//! refresh. Every failure is absorbed into a notification; the previous list
//! survives unchanged.

use std::future::Future;

use leptos::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::models::Resource;
use crate::notify::Notifier;

/// Load lifecycle of a collection.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    /// Initial load succeeded; further `load` calls are no-ops until `refresh`.
    Loaded,
}

/// Signal pair driving one entity list view.
pub struct ListResource<T: Resource> {
    pub items: RwSignal<Vec<T>>,
    pub state: RwSignal<LoadState>,
}

impl<T: Resource> Clone for ListResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Resource> Copy for ListResource<T> {}

impl<T: Resource> Default for ListResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> ListResource<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            state: RwSignal::new(LoadState::NotLoaded),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.get() == LoadState::Loading
    }

    /// Fetch the collection. No-op once a load has succeeded.
    pub async fn load(&self, api: &ApiClient, notify: &Notifier) {
        self.load_with(notify, || api.list::<T>(T::ENDPOINT)).await
    }

    /// [`Self::load`] with the fetch step supplied by the caller.
    pub async fn load_with<F, Fut>(&self, notify: &Notifier, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, ApiError>>,
    {
        if self.state.get_untracked() == LoadState::Loaded {
            return;
        }
        self.state.set(LoadState::Loading);
        match fetch().await {
            Ok(rows) => {
                notify.success(
                    format!("{} loaded", T::LABEL),
                    format!("{} records fetched.", rows.len()),
                );
                self.items.set(rows);
                self.state.set(LoadState::Loaded);
            }
            Err(err) => {
                notify.error(
                    format!("Failed to load {}", T::LABEL.to_lowercase()),
                    err.to_string(),
                );
                // Back to NotLoaded so the next load retries.
                self.state.set(LoadState::NotLoaded);
            }
        }
    }

    /// Delete one record remotely, then drop it from the local list.
    pub async fn delete_item(&self, api: &ApiClient, notify: &Notifier, id: &T::Id) {
        self.delete_with(notify, id, || api.delete(T::ENDPOINT, id))
            .await
    }

    /// [`Self::delete_item`] with the delete step supplied by the caller.
    pub async fn delete_with<F, Fut>(&self, notify: &Notifier, id: &T::Id, delete: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), ApiError>>,
    {
        match delete().await {
            Ok(()) => {
                self.items.update(|items| items.retain(|item| item.id() != *id));
                notify.success(
                    format!("{} deleted", T::LABEL_ONE),
                    format!("The {} was removed.", T::LABEL_ONE.to_lowercase()),
                );
            }
            Err(err) => {
                notify.error(
                    format!("Failed to delete {}", T::LABEL_ONE.to_lowercase()),
                    err.to_string(),
                );
            }
        }
    }

    /// Drop the fetch-once guard and reload from the backend.
    pub async fn refresh(&self, api: &ApiClient, notify: &Notifier) {
        self.state.set(LoadState::NotLoaded);
        self.load(api, notify).await;
    }

    /// [`Self::refresh`] with the fetch step supplied by the caller.
    pub async fn refresh_with<F, Fut>(&self, notify: &Notifier, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, ApiError>>,
    {
        self.state.set(LoadState::NotLoaded);
        self.load_with(notify, fetch).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::notify::Variant;
    use std::cell::Cell;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
        }
    }

    fn sample() -> Vec<Category> {
        vec![
            category(1, "Starters"),
            category(2, "Desserts"),
            category(3, "Mains"),
        ]
    }

    #[tokio::test]
    async fn load_fetches_at_most_once_until_refreshed() {
        let resource = ListResource::<Category>::new();
        let notifier = Notifier::new();
        let calls = Cell::new(0u32);

        for _ in 0..2 {
            let rows = sample();
            resource
                .load_with(&notifier, || {
                    calls.set(calls.get() + 1);
                    async move { Ok::<_, ApiError>(rows) }
                })
                .await;
        }

        assert_eq!(calls.get(), 1);
        assert_eq!(resource.state.get_untracked(), LoadState::Loaded);
        assert_eq!(resource.items.get_untracked().len(), 3);

        resource
            .refresh_with(&notifier, || {
                calls.set(calls.get() + 1);
                async move { Ok::<_, ApiError>(vec![category(9, "New")]) }
            })
            .await;

        assert_eq!(calls.get(), 2);
        assert_eq!(resource.items.get_untracked(), vec![category(9, "New")]);
    }

    #[tokio::test]
    async fn failed_load_keeps_items_and_allows_retry() {
        let resource = ListResource::<Category>::new();
        let notifier = Notifier::new();

        resource
            .load_with(&notifier, || async {
                Err::<Vec<Category>, _>(ApiError::Status {
                    status: 500,
                    message: "backend down".to_string(),
                })
            })
            .await;

        assert_eq!(resource.state.get_untracked(), LoadState::NotLoaded);
        assert!(resource.items.get_untracked().is_empty());
        let entries = notifier.entries().get_untracked();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].variant, Variant::Error);
        assert!(entries[0].description.contains("backend down"));

        let rows = sample();
        resource
            .load_with(&notifier, || async move { Ok::<_, ApiError>(rows) })
            .await;
        assert_eq!(resource.state.get_untracked(), LoadState::Loaded);
        assert_eq!(resource.items.get_untracked().len(), 3);
    }

    #[tokio::test]
    async fn successful_delete_filters_by_id_and_keeps_order() {
        let resource = ListResource::<Category>::new();
        let notifier = Notifier::new();
        resource.items.set(sample());

        resource
            .delete_with(&notifier, &2, || async { Ok::<(), ApiError>(()) })
            .await;

        let items = resource.items.get_untracked();
        assert_eq!(items, vec![category(1, "Starters"), category(3, "Mains")]);
        let entries = notifier.entries().get_untracked();
        assert_eq!(entries.last().unwrap().variant, Variant::Success);
    }

    #[tokio::test]
    async fn failed_delete_leaves_items_untouched() {
        let resource = ListResource::<Category>::new();
        let notifier = Notifier::new();
        resource.items.set(sample());

        resource
            .delete_with(&notifier, &2, || async {
                Err::<(), _>(ApiError::Transport("connection reset".to_string()))
            })
            .await;

        assert_eq!(resource.items.get_untracked(), sample());
        let entries = notifier.entries().get_untracked();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].variant, Variant::Error);
    }

    #[tokio::test]
    async fn delete_does_not_touch_load_state() {
        let resource = ListResource::<Category>::new();
        let notifier = Notifier::new();
        resource.items.set(sample());
        resource.state.set(LoadState::Loaded);

        resource
            .delete_with(&notifier, &1, || async { Ok::<(), ApiError>(()) })
            .await;

        assert_eq!(resource.state.get_untracked(), LoadState::Loaded);
    }
}

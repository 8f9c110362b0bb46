//! Gallery provider and context wiring.
//!
//! This module owns the long-lived [`ViewStateController`], the reactive mirror of its state, and
//! the displayed search results. UI composition stays in [`crate::components`].

use std::sync::OnceLock;

use gallery_host_web::WebLocationStore;
use gallery_state::{DeferredResults, SearchScheduler, ViewField, ViewState, ViewStateController};
use icon_catalog::Catalog;
use leptos::*;

use crate::{icon::provide_icon_style, search_executor};

#[derive(Clone, Copy)]
/// Leptos context for reading gallery state and applying field changes.
pub struct GalleryContext {
    /// Icon catalog shown by the gallery.
    pub catalog: &'static Catalog,
    /// State container that persists every change to the address bar.
    pub controller: StoredValue<ViewStateController>,
    /// Reactive mirror of the controller state.
    pub state: RwSignal<ViewState>,
    /// Latest-request-wins bookkeeping for the deferred filter pass.
    pub scheduler: StoredValue<SearchScheduler>,
    /// Names shown in the grid and the query they were filtered with.
    pub results: RwSignal<DeferredResults<String>>,
}

impl GalleryContext {
    /// Creates the reactive context around a catalog and an attached controller.
    ///
    /// The initial results are computed synchronously so the first paint shows the full grid.
    pub fn new(catalog: &'static Catalog, controller: ViewStateController) -> Self {
        let initial = controller.state().clone();
        let results = DeferredResults::new(initial.query(), catalog.filter_names(initial.query()));
        Self {
            catalog,
            controller: store_value(controller),
            state: create_rw_signal(initial),
            scheduler: store_value(SearchScheduler::default()),
            results: create_rw_signal(results),
        }
    }

    /// Sets one field, persisting it and refreshing the reactive mirror.
    pub fn set_field(&self, field: ViewField, value: impl Into<String>) {
        self.apply_fields([(field, value.into())]);
    }

    /// Applies several field changes in one action.
    pub fn apply_fields(&self, updates: impl IntoIterator<Item = (ViewField, String)>) {
        let outcome = self.controller.try_update_value(|controller| {
            let result = controller.apply(updates);
            (result, controller.state().clone())
        });
        let Some((result, snapshot)) = outcome else {
            return;
        };
        if let Err(err) = result {
            logging::warn!("gallery address sync failed: {err}");
        }
        if self.state.with_untracked(|state| *state != snapshot) {
            self.state.set(snapshot);
        }
    }

    /// Returns `true` while the grid still shows results for an older query.
    pub fn results_pending(&self) -> bool {
        let live_query = self.state.with(|state| state.query().to_string());
        self.results.with(|results| results.lags(&live_query))
    }
}

/// Returns the bundled catalog, or an empty one when the bundled data fails to decode.
pub fn load_catalog() -> &'static Catalog {
    static EMPTY: OnceLock<Catalog> = OnceLock::new();
    match icon_catalog::bundled() {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::error!("icon catalog failed to load: {err}");
            EMPTY.get_or_init(Catalog::default)
        }
    }
}

fn attach_controller() -> ViewStateController {
    match ViewStateController::attach(WebLocationStore) {
        Ok(controller) => controller,
        Err(err) => {
            logging::warn!("address bar unavailable, using default view state: {err}");
            ViewStateController::new(ViewState::default())
        }
    }
}

#[component]
/// Provides [`GalleryContext`] and the ambient icon style to descendant components.
pub fn GalleryProvider(children: Children) -> impl IntoView {
    let gallery = GalleryContext::new(load_catalog(), attach_controller());

    provide_context(gallery);
    provide_icon_style(gallery.state);
    search_executor::install(gallery);

    children().into_view()
}

/// Returns the current [`GalleryContext`].
///
/// # Panics
///
/// Panics if called outside [`GalleryProvider`].
pub fn use_gallery() -> GalleryContext {
    use_context::<GalleryContext>().expect("GalleryContext not provided")
}

#[cfg(test)]
pub(crate) mod tests {
    use gallery_state::{MemoryQueryStore, QueryParamStore, StoreError};
    use pretty_assertions::assert_eq;

    use super::*;

    /// Context over the bundled catalog, synchronized into an in-memory address.
    pub(crate) fn gallery_at(href: &str) -> (GalleryContext, MemoryQueryStore) {
        let store = MemoryQueryStore::new(href);
        let controller = ViewStateController::attach(store.clone()).expect("attach");
        let catalog = icon_catalog::bundled().expect("bundled catalog");
        (GalleryContext::new(catalog, controller), store)
    }

    struct ReadOnlyAddress;

    impl QueryParamStore for ReadOnlyAddress {
        fn current_href(&self) -> Result<String, StoreError> {
            Ok("http://localhost/".to_string())
        }

        fn replace_href(&self, _href: &str) -> Result<(), StoreError> {
            Err(StoreError::Replace("history locked".to_string()))
        }
    }

    #[test]
    fn set_field_updates_address_and_reactive_state() {
        let _ = create_runtime();
        let (gallery, store) = gallery_at("http://localhost/?query=nav");

        assert_eq!(
            gallery.results.with_untracked(|results| results.items().to_vec()),
            vec!["home", "menu", "search"]
        );

        gallery.set_field(ViewField::SelectedIcon, "home");
        gallery.set_field(ViewField::Size, "32");

        assert_eq!(gallery.state.get_untracked().selected_icon(), Some("home"));
        assert_eq!(gallery.state.get_untracked().size(), "32");
        assert_eq!(store.read_param("icon").expect("read"), Some("home".to_string()));
        assert_eq!(store.read_param("size").expect("read"), Some("32".to_string()));
        assert_eq!(store.read_param("query").expect("read"), Some("nav".to_string()));
    }

    #[test]
    fn unchanged_field_leaves_address_untouched() {
        let _ = create_runtime();
        let (gallery, store) = gallery_at("http://localhost/?size=40");
        let writes = store.replacements().len();

        gallery.set_field(ViewField::Size, "40");

        assert_eq!(store.replacements().len(), writes);
    }

    #[test]
    fn store_failure_still_refreshes_reactive_state() {
        let _ = create_runtime();
        let mut controller = ViewStateController::new(ViewState::default());
        controller.observe(gallery_state::AddressSync::new(ReadOnlyAddress));
        let catalog = icon_catalog::bundled().expect("bundled catalog");
        let gallery = GalleryContext::new(catalog, controller);

        gallery.set_field(ViewField::Color, "#ff0000");

        assert_eq!(gallery.state.get_untracked().color(), "#ff0000");
        assert_eq!(
            gallery.controller.with_value(|controller| controller.state().color().to_string()),
            "#ff0000"
        );
    }
}

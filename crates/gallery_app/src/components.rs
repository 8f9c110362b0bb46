//! Gallery UI composition.

mod controls;
mod detail;
mod search_pane;
mod sidebar;

use gallery_ui::prelude::*;
use leptos::*;

use self::{
    controls::StyleControls, detail::DetailPanel, search_pane::SearchPane, sidebar::Sidebar,
};
use crate::{icon::CatalogIcon, runtime_context::GalleryProvider, shortcuts};

/// CSS size used for toolbar and link decoration icons.
pub(crate) const CHROME_ICON_SIZE: &str = "16px";

#[component]
/// Full gallery page: provider, sidebar, search grid, style controls, and detail panel.
pub fn GalleryEntry() -> impl IntoView {
    view! {
        <GalleryProvider>
            <GalleryShell />
        </GalleryProvider>
    }
}

#[component]
/// Gallery layout. Must be rendered inside [`GalleryProvider`].
pub fn GalleryShell() -> impl IntoView {
    let sidebar_open = create_rw_signal(true);
    shortcuts::install_search_shortcut();

    view! {
        <div
            class="gallery-shell"
            data-sidebar=move || if sidebar_open.get() { "open" } else { "closed" }
        >
            <Sidebar open=sidebar_open />
            <main class="gallery-main">
                <Cluster layout_class="gallery-toolbar" justify=LayoutJustify::Between>
                    <IconButton
                        aria_label="Toggle sidebar"
                        on_click=Callback::new(move |_| sidebar_open.update(|open| *open = !*open))
                    >
                        <CatalogIcon name="sidebar" size=CHROME_ICON_SIZE />
                    </IconButton>
                    <StyleControls />
                </Cluster>
                <SearchPane />
            </main>
            <DetailPanel />
        </div>
    }
}

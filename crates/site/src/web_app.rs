use gallery_app::{manifest, GalleryEntry};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=manifest::document_title() />
        <Meta name="description" content=manifest::GALLERY_TAGLINE />

        <Router>
            <div class="site-root">
                <Routes>
                    <Route path="" view=GalleryEntry />
                    <Route path="/*any" view=GalleryEntry />
                </Routes>
            </div>
        </Router>
    }
}

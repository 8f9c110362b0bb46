use gallery_state::{DeferredResults, ViewField};
use gallery_ui::prelude::*;
use leptos::*;

use super::CHROME_ICON_SIZE;
use crate::{
    icon::CatalogIcon,
    manifest::SIDEBAR_LINKS,
    runtime_context::{use_gallery, GalleryContext},
    shortcuts::SEARCH_FIELD_ID,
};

fn request_icon_href() -> Option<&'static str> {
    SIDEBAR_LINKS
        .iter()
        .find(|link| link.id == "request-icon")
        .map(|link| link.href)
}

/// Per-name selection flags; a change only notifies the previously and newly selected cells.
pub(crate) fn selection_selector(gallery: GalleryContext) -> Selector<String> {
    create_selector(move || {
        gallery
            .state
            .with(|state| state.get(ViewField::SelectedIcon).to_string())
    })
}

#[component]
pub(super) fn SearchPane() -> impl IntoView {
    let gallery = use_gallery();
    let query = Signal::derive(move || gallery.state.with(|state| state.query().to_string()));
    let min_cell_px = create_memo(move |_| gallery.state.with(|state| state.grid_cell_min_px()));
    let selection = selection_selector(gallery);
    let names = move || gallery.results.with(|results| results.items().to_vec());
    let no_results = move || gallery.results.with(DeferredResults::is_empty);

    view! {
        <Stack layout_class="gallery-search-pane">
            <TextField
                id=SEARCH_FIELD_ID
                input_type="search"
                placeholder=gallery.catalog.search_placeholder()
                aria_label="Search icons"
                value=query
                on_input=Callback::new(move |ev| {
                    gallery.set_field(ViewField::Query, event_target_value(&ev));
                })
            />
            <IconGrid
                min_cell_px
                busy=Signal::derive(move || gallery.results_pending())
                aria_label="Icons"
            >
                <For each=names key=|name| name.clone() let:name>
                    <GridCell name=name.clone() selected=selection.clone() />
                </For>
            </IconGrid>
            <Show when=no_results>
                <Stack layout_class="gallery-empty" align=LayoutAlign::Center gap=LayoutGap::Sm>
                    <Text tone=TextTone::Secondary>
                        {move || format!("No icons found for \u{201c}{}\u{201d}", query.get())}
                    </Text>
                    {request_icon_href()
                        .map(|href| {
                            view! {
                                <LinkRow href label="Request an icon">
                                    <CatalogIcon name="plus" size=CHROME_ICON_SIZE />
                                </LinkRow>
                            }
                        })}
                </Stack>
            </Show>
        </Stack>
    }
}

#[component]
fn GridCell(name: String, selected: Selector<String>) -> impl IntoView {
    let gallery = use_gallery();
    let is_selected = {
        let name = name.clone();
        Signal::derive(move || selected.selected(name.clone()))
    };
    let on_click = {
        let name = name.clone();
        Callback::new(move |_| gallery.set_field(ViewField::SelectedIcon, name.clone()))
    };

    view! {
        <IconGridItem>
            <Button
                variant=ButtonVariant::Tile
                aria_label=name.clone()
                title=name.clone()
                selected=is_selected
                on_click
            >
                <CatalogIcon name=name.clone() />
                <Text role=TextRole::Label tone=TextTone::Secondary truncate=true>
                    {name}
                </Text>
            </Button>
        </IconGridItem>
    }
}

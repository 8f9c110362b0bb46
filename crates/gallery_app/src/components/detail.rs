use gallery_host_web::{download_text_file, write_clipboard_text, WebLocationStore, SVG_MIME_TYPE};
use gallery_state::{QueryParamStore, ViewField};
use gallery_ui::prelude::*;
use icon_catalog::{download_file_name, svg_snippet, IconEntry};
use leptos::*;

use super::CHROME_ICON_SIZE;
use crate::{
    icon::CatalogIcon,
    runtime_context::{use_gallery, GalleryContext},
};

/// Status line shown after a detail-panel action.
fn action_status(action: &str, result: &Result<(), String>) -> String {
    match result {
        Ok(()) => format!("{action} done"),
        Err(err) => format!("{action} failed: {err}"),
    }
}

fn copy_to_clipboard(status: RwSignal<String>, action: &'static str, text: String) {
    spawn_local(async move {
        let result = write_clipboard_text(&text).await;
        if let Err(err) = &result {
            logging::warn!("{action} failed: {err}");
        }
        status.set(action_status(action, &result));
    });
}

/// Catalog entry for the `icon` field, `None` when the field is empty or names no icon.
pub(crate) fn selected_entry(gallery: GalleryContext) -> Memo<Option<&'static IconEntry>> {
    create_memo(move |_| {
        gallery.state.with(|state| {
            state
                .selected_icon()
                .and_then(|name| gallery.catalog.get(name))
        })
    })
}

#[component]
/// Detail panel for the selected icon. Renders nothing when the selection is empty or unknown.
pub(super) fn DetailPanel() -> impl IntoView {
    let selected = selected_entry(use_gallery());

    move || selected.get().map(|entry| view! { <IconDetail entry /> })
}

#[component]
fn IconDetail(entry: &'static IconEntry) -> impl IntoView {
    let gallery = use_gallery();
    let status = create_rw_signal(String::new());
    let snippet = Signal::derive(move || {
        gallery
            .state
            .with(|state| svg_snippet(entry, &state.style_params()))
    });

    let copy_link = Callback::new(move |_| match WebLocationStore.current_href() {
        Ok(href) => copy_to_clipboard(status, "Copy link", href),
        Err(err) => {
            logging::warn!("copy link failed: {err}");
            status.set(action_status("Copy link", &Err(err.to_string())));
        }
    });
    let copy_svg = Callback::new(move |_| {
        copy_to_clipboard(status, "Copy SVG", snippet.get_untracked());
    });
    let download_svg = Callback::new(move |_| {
        let result = download_text_file(
            &download_file_name(entry),
            SVG_MIME_TYPE,
            &snippet.get_untracked(),
        );
        if let Err(err) = &result {
            logging::warn!("download failed: {err}");
        }
        status.set(action_status("Download", &result));
    });
    let close = Callback::new(move |_| gallery.set_field(ViewField::SelectedIcon, ""));

    let tag_buttons = entry
        .tags
        .iter()
        .map(|tag| {
            let tag = tag.clone();
            let query = tag.clone();
            view! {
                <Button
                    variant=ButtonVariant::Tile
                    on_click=Callback::new(move |_| {
                        gallery.set_field(ViewField::Query, query.clone());
                    })
                >
                    {tag}
                </Button>
            }
        })
        .collect_view();
    let tags = (!entry.tags.is_empty()).then(|| {
        view! {
            <Stack gap=LayoutGap::Sm>
                <Text role=TextRole::Label>"Tags"</Text>
                <Cluster gap=LayoutGap::Sm ui_slot="tags">{tag_buttons}</Cluster>
            </Stack>
        }
    });

    view! {
        <Panel layout_class="gallery-detail" aria_label=format!("{} details", entry.name)>
            <Stack gap=LayoutGap::Md>
                <Cluster justify=LayoutJustify::Between>
                    <Heading>{entry.name.clone()}</Heading>
                    <Cluster gap=LayoutGap::Sm>
                        <IconButton aria_label="Copy link" on_click=copy_link>
                            <CatalogIcon name="link" size=CHROME_ICON_SIZE />
                        </IconButton>
                        <IconButton aria_label="Close details" on_click=close>
                            <CatalogIcon name="x" size=CHROME_ICON_SIZE />
                        </IconButton>
                    </Cluster>
                </Cluster>
                <PreviewStage>
                    <CatalogIcon name=entry.name.clone() />
                </PreviewStage>
                <CodeBlock code=snippet aria_label="SVG markup" />
                <Cluster gap=LayoutGap::Sm>
                    <Button on_click=copy_svg>
                        <CatalogIcon name="copy" size=CHROME_ICON_SIZE />
                        "Copy SVG"
                    </Button>
                    <Button on_click=download_svg>
                        <CatalogIcon name="download" size=CHROME_ICON_SIZE />
                        "Download SVG"
                    </Button>
                </Cluster>
                <Text role=TextRole::Label tone=TextTone::Secondary>
                    <span aria-live="polite">{move || status.get()}</span>
                </Text>
                {tags}
            </Stack>
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::runtime_context::tests::gallery_at;

    #[test]
    fn status_line_reports_outcome() {
        assert_eq!(action_status("Copy SVG", &Ok(())), "Copy SVG done");
        assert_eq!(
            action_status("Download", &Err("blocked".to_string())),
            "Download failed: blocked"
        );
    }

    #[test]
    fn unknown_selection_resolves_to_nothing_until_a_known_icon_is_picked() {
        let _ = create_runtime();
        let (gallery, _store) = gallery_at("http://localhost/?icon=ghost");
        let selected = selected_entry(gallery);

        assert_eq!(
            gallery
                .state
                .with(|state| state.selected_icon().map(str::to_string)),
            Some("ghost".to_string())
        );
        assert!(selected.get().is_none());

        gallery.set_field(ViewField::SelectedIcon, "home");
        assert_eq!(selected.get().map(|entry| entry.name.as_str()), Some("home"));

        gallery.set_field(ViewField::SelectedIcon, "");
        assert!(selected.get().is_none());
    }
}

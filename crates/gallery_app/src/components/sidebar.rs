use gallery_ui::prelude::*;
use leptos::*;

use super::CHROME_ICON_SIZE;
use crate::{
    icon::CatalogIcon,
    manifest::{
        action_links, external_links, LinkStyle, GALLERY_TAGLINE, GALLERY_TITLE, GALLERY_VERSION,
    },
};

fn action_icon(id: &str) -> &'static str {
    match id {
        "download-all" => "download",
        _ => "arrow-up-right",
    }
}

#[component]
pub(super) fn Sidebar(open: RwSignal<bool>) -> impl IntoView {
    let actions = action_links()
        .map(|link| {
            let variant = match link.style {
                LinkStyle::Primary => ButtonVariant::Standard,
                LinkStyle::Button | LinkStyle::External => ButtonVariant::Quiet,
            };
            view! {
                <LinkRow href=link.href label=link.label variant>
                    <CatalogIcon name=action_icon(link.id) size=CHROME_ICON_SIZE />
                </LinkRow>
            }
        })
        .collect_view();

    let external = external_links()
        .map(|link| {
            view! {
                <LinkRow href=link.href label=link.label>
                    <CatalogIcon name="arrow-up-right" size=CHROME_ICON_SIZE />
                </LinkRow>
            }
        })
        .collect_view();

    view! {
        <aside
            class="gallery-sidebar"
            aria-label="About"
            hidden=move || !open.get()
        >
            <Stack gap=LayoutGap::Lg padding=LayoutPadding::Md>
                <Stack gap=LayoutGap::Sm>
                    <Cluster gap=LayoutGap::Sm>
                        <Heading>{GALLERY_TITLE}</Heading>
                        <Text role=TextRole::Label tone=TextTone::Secondary>
                            {format!("v{GALLERY_VERSION}")}
                        </Text>
                    </Cluster>
                    <Text tone=TextTone::Secondary>{GALLERY_TAGLINE}</Text>
                </Stack>
                <Stack gap=LayoutGap::Sm ui_slot="actions">{actions}</Stack>
                <Stack gap=LayoutGap::Sm ui_slot="links">{external}</Stack>
            </Stack>
        </aside>
    }
}

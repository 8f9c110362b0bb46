//! Catalog-backed icon rendering.

use gallery_state::ViewState;
use icon_catalog::{IconStyle, ICON_VIEW_BOX};
use leptos::*;

use crate::runtime_context::use_gallery;

#[derive(Clone, Copy)]
/// Ambient presentation parameters every [`CatalogIcon`] inherits.
pub struct IconStyleScope(pub Memo<IconStyle>);

/// Provides an [`IconStyleScope`] derived from the live view state.
///
/// The scope is memoized, so fields that do not affect presentation (query, selection) never
/// re-render icons.
pub fn provide_icon_style(state: RwSignal<ViewState>) -> IconStyleScope {
    let scope = IconStyleScope(create_memo(move |_| {
        state.with(|state| IconStyle::ambient(&state.style_params()))
    }));
    provide_context(scope);
    scope
}

fn ambient_style() -> IconStyle {
    use_context::<IconStyleScope>()
        .map(|scope| scope.0.get())
        .unwrap_or_default()
}

/// Inline CSS for one icon instance: overrides win over the ambient scope.
pub fn icon_inline_css(ambient: IconStyle, size: Option<&str>, color: Option<&str>) -> String {
    ambient.with_overrides(size, color).to_inline_css()
}

#[component]
/// Renders one catalog icon by name, or nothing when the name is unknown.
pub fn CatalogIcon(
    #[prop(into)] name: MaybeSignal<String>,
    /// CSS size override (`"16px"`), replacing the ambient size.
    #[prop(optional)]
    size: Option<&'static str>,
    /// CSS color override, replacing the ambient stroke color.
    #[prop(optional)]
    color: Option<&'static str>,
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    let gallery = use_gallery();

    move || {
        let name = name.get();
        let entry = gallery.catalog.get(&name)?;
        let style = icon_inline_css(ambient_style(), size, color);
        Some(view! {
            <svg
                class=class.unwrap_or("gallery-icon")
                data-icon=name
                xmlns="http://www.w3.org/2000/svg"
                viewBox=ICON_VIEW_BOX
                fill="none"
                focusable="false"
                aria-hidden="true"
                style=style
                inner_html=entry.markup.clone()
            />
        })
    }
}

#[cfg(test)]
mod tests {
    use gallery_state::ViewField;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ambient_style_follows_view_state_with_pixel_units() {
        let state = ViewState::from_lookup(|key| {
            (key == ViewField::Size.param_name()).then(|| "40".to_string())
        });
        let css = icon_inline_css(IconStyle::ambient(&state.style_params()), None, None);
        assert_eq!(
            css,
            "width:40px;height:40px;stroke:currentColor;stroke-width:2px;stroke-linecap:round;stroke-linejoin:round"
        );
    }

    #[test]
    fn query_and_selection_changes_do_not_restyle_icons() {
        let _ = create_runtime();
        let state = create_rw_signal(ViewState::default());
        let scope = provide_icon_style(state);
        let evaluations = store_value(0_usize);
        create_effect(move |_| {
            let _ = scope.0.get();
            evaluations.update_value(|count| *count += 1);
        });

        for query in ["a", "ar", "arr", "arro", "arrow"] {
            state.update(|state| {
                *state = ViewState::from_lookup(|key| {
                    (key == ViewField::Query.param_name()).then(|| query.to_string())
                });
            });
        }
        state.update(|state| {
            *state = ViewState::from_lookup(|key| {
                (key == ViewField::SelectedIcon.param_name()).then(|| "home".to_string())
            });
        });
        assert_eq!(evaluations.get_value(), 1);

        state.set(ViewState::from_lookup(|key| {
            (key == ViewField::Size.param_name()).then(|| "48".to_string())
        }));
        assert_eq!(evaluations.get_value(), 2);
        assert_eq!(scope.0.get_untracked().size, "48px");
    }

    #[test]
    fn overrides_take_precedence_over_ambient_values() {
        let css = icon_inline_css(IconStyle::default(), Some("16px"), Some("#ff0000"));
        assert!(css.starts_with("width:16px;height:16px;stroke:#ff0000;"));
        assert!(css.contains("stroke-width:2px"));
    }
}

use super::*;

#[component]
/// Bordered content region.
pub fn Panel(
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-padding=padding.token()
        >
            {children()}
        </section>
    }
}

#[component]
/// Inline run of text with a role and tone.
pub fn Text(
    #[prop(optional)] role: TextRole,
    #[prop(optional)] tone: TextTone,
    /// Clip overflowing text with an ellipsis instead of wrapping.
    #[prop(optional)]
    truncate: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-text"
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
            data-ui-truncate=bool_token(truncate)
        >
            {children()}
        </span>
    }
}

#[component]
/// Section heading; `level` 3 renders a subheading, anything else a panel title.
pub fn Heading(#[prop(default = 2)] level: u8, children: Children) -> impl IntoView {
    let body = children();
    let heading = if level == 3 {
        view! { <h3 class="ui-heading" data-ui-variant="subtitle">{body}</h3> }.into_view()
    } else {
        view! { <h2 class="ui-heading" data-ui-variant=TextRole::Title.token()>{body}</h2> }
            .into_view()
    };
    view! {
        <div data-ui-primitive="true" data-ui-kind="heading" data-ui-level=level>
            {heading}
        </div>
    }
}

#[component]
/// Preformatted, selectable code listing.
pub fn CodeBlock(
    #[prop(into)] code: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    view! {
        <pre
            class="ui-code-block"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="code-block"
            data-ui-variant=TextRole::Code.token()
        >
            <code>{move || code.get()}</code>
        </pre>
    }
}

#[component]
/// Centered stage that shows one artwork at its natural size.
pub fn PreviewStage(
    #[prop(optional, into)] caption: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <figure class="ui-preview-stage" data-ui-primitive="true" data-ui-kind="preview-stage">
            <div data-ui-slot="artwork">{children()}</div>
            {caption.map(|caption| view! { <figcaption data-ui-slot="caption">{caption}</figcaption> })}
        </figure>
    }
}

#[component]
/// Small color dot previewing a CSS color value.
pub fn Swatch(#[prop(into)] color: MaybeSignal<String>) -> impl IntoView {
    view! {
        <span
            class="ui-swatch"
            aria-hidden="true"
            style=move || format!("background-color:{}", color.get())
            data-ui-primitive="true"
            data-ui-kind="swatch"
        ></span>
    }
}

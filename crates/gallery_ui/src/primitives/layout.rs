use super::*;

#[derive(Clone, Copy)]
enum FlowAxis {
    Column,
    Row,
}

impl FlowAxis {
    fn kind(self) -> &'static str {
        match self {
            Self::Column => "stack",
            Self::Row => "cluster",
        }
    }

    fn base_class(self) -> &'static str {
        match self {
            Self::Column => "ui-flow ui-stack",
            Self::Row => "ui-flow ui-cluster",
        }
    }
}

struct FlowTokens {
    gap: LayoutGap,
    align: LayoutAlign,
    justify: LayoutJustify,
    padding: LayoutPadding,
    layout_class: Option<&'static str>,
    ui_slot: Option<&'static str>,
}

fn flow(axis: FlowAxis, tokens: FlowTokens, children: Children) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class(axis.base_class(), tokens.layout_class)
            data-ui-primitive="true"
            data-ui-kind=axis.kind()
            data-ui-slot=tokens.ui_slot
            data-ui-gap=tokens.gap.token()
            data-ui-align=tokens.align.token()
            data-ui-justify=tokens.justify.token()
            data-ui-padding=tokens.padding.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Column flow.
pub fn Stack(
    #[prop(optional)] gap: LayoutGap,
    #[prop(optional)] align: LayoutAlign,
    #[prop(optional)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let tokens = FlowTokens {
        gap,
        align,
        justify: LayoutJustify::Start,
        padding,
        layout_class,
        ui_slot,
    };
    flow(FlowAxis::Column, tokens, children)
}

#[component]
/// Wrapping row flow, vertically centered unless told otherwise.
pub fn Cluster(
    #[prop(optional)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(optional)] justify: LayoutJustify,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let tokens = FlowTokens {
        gap,
        align,
        justify,
        padding: LayoutPadding::None,
        layout_class,
        ui_slot,
    };
    flow(FlowAxis::Row, tokens, children)
}

#[component]
/// Auto-filling list grid whose columns never shrink below `min_cell_px`.
///
/// `busy` marks the grid while its contents lag behind the input that drives them.
pub fn IconGrid(
    #[prop(into)] min_cell_px: MaybeSignal<i64>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-icon-grid", layout_class)
            role="list"
            aria-label=aria_label
            aria-busy=move || bool_token(busy.get())
            style=move || grid_columns_style(min_cell_px.get())
            data-ui-primitive="true"
            data-ui-kind="icon-grid"
            data-ui-state=move || if busy.get() { "pending" } else { "idle" }
        >
            {children()}
        </div>
    }
}

#[component]
/// One cell of an [`IconGrid`].
pub fn IconGridItem(children: Children) -> impl IntoView {
    view! {
        <div class="ui-icon-grid-item" role="listitem" data-ui-primitive="true" data-ui-kind="icon-grid-item">
            {children()}
        </div>
    }
}

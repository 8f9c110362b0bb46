use gallery_state::{
    ControlRange, StrokeLinecap, StrokeLinejoin, ViewField, SIZE_RANGE, STROKE_WIDTH_RANGE,
};
use gallery_ui::prelude::*;
use leptos::*;

use crate::runtime_context::{use_gallery, GalleryContext};

/// Style fields restored by the reset button.
const STYLE_FIELDS: [ViewField; 5] = [
    ViewField::Size,
    ViewField::StrokeWidth,
    ViewField::StrokeLinecap,
    ViewField::StrokeLinejoin,
    ViewField::Color,
];

fn default_style_updates() -> Vec<(ViewField, String)> {
    STYLE_FIELDS
        .into_iter()
        .map(|field| (field, field.default_value().to_string()))
        .collect()
}

fn readout(value: &str) -> String {
    format!("{value}px")
}

fn field_value(gallery: GalleryContext, field: ViewField) -> Signal<String> {
    Signal::derive(move || gallery.state.with(|state| state.get(field).to_string()))
}

fn field_setter(gallery: GalleryContext, field: ViewField) -> Callback<web_sys::Event> {
    Callback::new(move |ev| gallery.set_field(field, event_target_value(&ev)))
}

#[component]
fn RangeControl(label: &'static str, field: ViewField, range: ControlRange) -> impl IntoView {
    let gallery = use_gallery();
    let value = field_value(gallery, field);

    view! {
        <RangeField
            id=format!("{}-control", field.param_name())
            label=label
            readout=Signal::derive(move || readout(&value.get()))
            min=range.min
            max=range.max
            step=range.step
            tick=range.tick
            value
            on_input=field_setter(gallery, field)
        />
    }
}

#[component]
fn KeywordControl(
    label: &'static str,
    field: ViewField,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let gallery = use_gallery();

    view! {
        <SelectField
            label=label
            value=field_value(gallery, field)
            on_change=field_setter(gallery, field)
        >
            {options
                .into_iter()
                .map(|(token, label)| view! { <option value=token>{label}</option> })
                .collect_view()}
        </SelectField>
    }
}

#[component]
pub(super) fn StyleControls() -> impl IntoView {
    let gallery = use_gallery();
    let color = field_value(gallery, ViewField::Color);
    let linecaps = StrokeLinecap::ALL
        .iter()
        .map(|cap| (cap.token(), cap.label()))
        .collect::<Vec<_>>();
    let linejoins = StrokeLinejoin::ALL
        .iter()
        .map(|join| (join.token(), join.label()))
        .collect::<Vec<_>>();

    view! {
        <Cluster layout_class="gallery-style-controls" gap=LayoutGap::Lg align=LayoutAlign::Start>
            <RangeControl label="Size" field=ViewField::Size range=SIZE_RANGE />
            <RangeControl label="Stroke width" field=ViewField::StrokeWidth range=STROKE_WIDTH_RANGE />
            <KeywordControl label="Line cap" field=ViewField::StrokeLinecap options=linecaps />
            <KeywordControl label="Line join" field=ViewField::StrokeLinejoin options=linejoins />
            <Cluster gap=LayoutGap::Sm align=LayoutAlign::Start>
                <Swatch color />
                <TextField
                    label="Color"
                    value=color
                    on_input=field_setter(gallery, ViewField::Color)
                />
            </Cluster>
            <Button
                variant=ButtonVariant::Quiet
                on_click=Callback::new(move |_| gallery.apply_fields(default_style_updates()))
            >
                "Reset"
            </Button>
        </Cluster>
    }
}

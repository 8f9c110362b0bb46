use super::*;

/// Wraps `control` in a `<label>` when a caption is given, so the caption names the control.
fn labeled(label: Option<String>, readout: Option<Signal<String>>, control: View) -> View {
    let Some(label) = label else {
        return control;
    };
    view! {
        <label class="ui-labeled-field" data-ui-primitive="true" data-ui-kind="labeled-field">
            <span data-ui-slot="caption">
                <span data-ui-slot="label">{label}</span>
                {readout.map(|readout| view! { <output data-ui-slot="readout">{move || readout.get()}</output> })}
            </span>
            {control}
        </label>
    }
    .into_view()
}

#[component]
/// Text button; `selected` drives `aria-pressed` for toggle-like tiles.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] aria_label: Option<MaybeSignal<String>>,
    #[prop(optional, into)] title: Option<MaybeSignal<String>>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-button"
            aria-label=move || aria_label.as_ref().map(|label| label.get())
            title=move || title.as_ref().map(|title| title.get())
            aria-pressed=move || bool_token(selected.get())
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Square button whose only content is an icon; `aria_label` is required.
pub fn IconButton(
    #[prop(into)] aria_label: String,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-icon-button"
            title=aria_label.clone()
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-variant=ButtonVariant::Quiet.token()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Link that opens in a new tab, with a trailing decoration slot.
pub fn LinkRow(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    #[prop(optional)] variant: Option<ButtonVariant>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            class="ui-link-row"
            href=href
            target="_blank"
            rel="noopener noreferrer"
            data-ui-primitive="true"
            data-ui-kind="link-row"
            data-ui-variant=variant.map(ButtonVariant::token)
        >
            <span data-ui-slot="label">{label}</span>
            <span data-ui-slot="trailing" aria-hidden="true">{children()}</span>
        </a>
    }
}

#[component]
/// Single-line text input, optionally captioned by `label`.
pub fn TextField(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let input = view! {
        <input
            class="ui-field"
            id=id
            type=input_type.unwrap_or("text")
            placeholder=placeholder
            aria-label=aria_label
            autocomplete="off"
            spellcheck="false"
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        />
    };
    labeled(label, None, input.into_view())
}

#[component]
/// Drop-down of `<option>` children, optionally captioned by `label`.
pub fn SelectField(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    children: Children,
) -> impl IntoView {
    let select = view! {
        <select
            class="ui-field"
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="select"
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
        >
            {children()}
        </select>
    };
    labeled(label, None, select.into_view())
}

#[component]
/// Slider bounded by `min`/`max`, with an optional caption, live readout, and tick mark.
///
/// When `tick` is set, a `<datalist>` with id `{id}-ticks` is rendered beside the input so
/// browsers can draw a marker at that value. `data-ui-percent` exposes the fill position.
pub fn RangeField(
    #[prop(into)] id: String,
    min: &'static str,
    max: &'static str,
    step: &'static str,
    #[prop(optional)] tick: Option<&'static str>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] readout: Option<Signal<String>>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let value = Signal::derive(move || value.get());
    let percent = Signal::derive(move || value.with(|value| range_percent(value, min, max)));
    let list_id = tick.map(|_| format!("{id}-ticks"));
    let ticks = tick.zip(list_id.clone()).map(|(tick, list_id)| {
        view! {
            <datalist id=list_id>
                <option value=tick></option>
            </datalist>
        }
    });

    let slider = view! {
        <input
            class="ui-field"
            id=id
            type="range"
            min=min
            max=max
            step=step
            list=list_id
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="range"
            data-ui-percent=move || format!("{:.2}", percent.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        />
        {ticks}
    };
    labeled(label, readout, slider.into_view())
}

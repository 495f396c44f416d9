use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Labelled native `<select>` over a fixed list of `(value, label)` pairs.
#[component]
pub fn OptionSelect(
    /// Label shown above the select
    #[prop(into)]
    label: String,
    choices: Vec<(&'static str, &'static str)>,
    /// Currently selected value
    value: Signal<String>,
    on_change: Callback<String>,
    disabled: Signal<bool>,
    /// Hint lines rendered under the select
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="setting-group">
            <label>{label}</label>
            <select
                class="input"
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(select_value(&ev))
            >
                {choices
                    .into_iter()
                    .map(|(v, l)| view! {
                        <option value=v prop:selected=move || value.get() == v>{l}</option>
                    })
                    .collect::<Vec<_>>()}
            </select>
            {children.map(|c| c())}
        </div>
    }
}

/// Value of the `<select>` that fired the event.
fn select_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

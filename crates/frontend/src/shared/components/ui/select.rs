use leptos::prelude::*;

/// Labelled select over `(value, label)` options with an empty first choice
#[component]
pub fn Select(
    #[prop(into)]
    label: String,
    /// Current value, empty for none selected
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Text of the empty choice
    #[prop(into)]
    placeholder: String,
    #[prop(optional)]
    required: bool,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="form-group">
            <label class="form-label" for=label_for>
                {label}
            </label>
            <select
                id=id
                class="form-select"
                required=required
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

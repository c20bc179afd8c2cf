use leptos::prelude::*;

/// Labelled multi-line input
#[component]
pub fn Textarea(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Rows attribute, 3 by default
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="form-group">
            <label class="form-label" for=label_for>
                {label}
            </label>
            <textarea
                id=id
                class="form-textarea"
                placeholder=move || placeholder.get().unwrap_or_default()
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

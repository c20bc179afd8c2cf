use leptos::prelude::*;

/// Labelled form input bound to a string value
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", "email", "tel"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Step attribute for number inputs
    #[prop(optional, into)]
    step: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let label_for = id.clone();

    view! {
        <div class="form-group">
            <label class="form-label" for=label_for>
                {label}
            </label>
            <input
                id=id
                class="form-input"
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                step=move || step.get()
                min=move || step.get().map(|_| "0".to_string())
                required=required
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

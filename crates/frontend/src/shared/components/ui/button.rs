use leptos::prelude::*;

fn variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("primary") {
        "secondary" => "btn--secondary",
        "outline" => "btn--outline",
        "success" => "btn--success",
        "danger" => "btn--danger",
        _ => "btn--primary",
    }
}

/// Button with variants (primary, secondary, outline, success, danger)
/// and an optional "small" size
#[component]
pub fn Button(
    /// Button variant, "primary" by default
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "small" or regular
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let classes = move || {
        let size_class = if size.get().as_deref() == Some("small") {
            "btn--small"
        } else {
            ""
        };
        format!(
            "btn {} {} {}",
            variant_class(variant.get().as_deref()),
            size_class,
            class.get().unwrap_or_default()
        )
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=classes
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

use leptos::prelude::*;

/// Small pill label; variants "success", "warning", "danger", "neutral" (default)
#[component]
pub fn Badge(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "success" => "badge--success",
        "warning" => "badge--warning",
        "danger" => "badge--danger",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

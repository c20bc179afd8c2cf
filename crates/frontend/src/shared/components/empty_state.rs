use crate::shared::components::ui::Button;
use leptos::prelude::*;
use thaw::Spinner;

/// Placeholder for an empty list, with a button opening the create form
#[component]
pub fn EmptyState(
    title: &'static str,
    hint: &'static str,
    button_label: &'static str,
    on_create: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2>{title}</h2>
            <p>{hint}</p>
            <Button on_click=Callback::new(move |_| on_create.run(()))>
                {button_label}
            </Button>
        </div>
    }
}

/// Spinner shown while a page loads
#[component]
pub fn LoadingState(message: &'static str) -> impl IntoView {
    view! {
        <div class="loading-container">
            <Spinner />
            <p>{message}</p>
        </div>
    }
}

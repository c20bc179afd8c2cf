use crate::shared::icons::icon;
use crate::shared::motion;
use leptos::prelude::*;

/// Clickable counter tile of the dashboard
#[component]
pub fn StatCard(
    /// Label displayed under the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Background of the icon badge
    color: &'static str,
    /// Counter value
    #[prop(into)]
    value: Signal<usize>,
    /// Position in the grid, drives the entrance stagger
    #[prop(optional)]
    index: usize,
    on_click: Callback<()>,
) -> impl IntoView {
    let style = format!(
        "{} {} cursor: pointer;",
        motion::animation_style("slide-in", motion::DURATION_BASE_MS, motion::stagger_delay(index)),
        motion::transition_style("transform", motion::DURATION_FAST_MS)
    );

    view! {
        <div class="stat-card" style=style on:click=move |_| on_click.run(())>
            <div class="stat-card__icon" style=format!("background: {};", color)>
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">{move || value.get()}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}

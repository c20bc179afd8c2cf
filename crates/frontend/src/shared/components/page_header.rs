use crate::shared::icons::icon;
use crate::shared::motion;
use leptos::prelude::*;

/// Title row of every page, with the page actions on the right
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Icon name from the icon() helper
    #[prop(optional)]
    icon_name: Option<&'static str>,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Children content (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    let title_style = motion::animation_style("slide-in-left", motion::DURATION_BASE_MS, 0);

    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title" style=title_style>
                        {icon_name.map(|name| view! { <span class="page-header__icon">{icon(name)}</span> })}
                        {title}
                    </h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}

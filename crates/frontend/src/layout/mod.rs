pub mod navbar;

use leptos::prelude::*;
use navbar::Navbar;

/// Application frame: navbar on top, routed page below
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <Navbar />
            <main class="main-content">
                {children()}
            </main>
        </div>
    }
}

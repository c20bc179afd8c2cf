use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::dashboards::d001_inventory_summary::api::fetch_stats;
use crate::dashboards::d001_inventory_summary::state::DashboardStats;
use crate::shared::components::ui::Button;
use crate::shared::components::{LoadingState, PageHeader, StatCard};
use crate::shared::icons::icon;

#[component]
#[allow(non_snake_case)]
pub fn InventoryDashboard() -> impl IntoView {
    let stats = RwSignal::new(DashboardStats::default());
    let loading = RwSignal::new(true);

    spawn_local(async move {
        let result = fetch_stats().await;
        let _ = stats.try_set(result);
        let _ = loading.try_set(false);
    });

    let navigate = StoredValue::new_local(use_navigate());
    let go = move |path: &'static str| {
        Callback::new(move |_| navigate.with_value(|nav| nav(path, NavigateOptions::default())))
    };
    let to_products = go("/productos");
    let to_low_stock = go("/productos");
    let to_categories = go("/categorias");
    let to_suppliers = go("/proveedores");

    view! {
        <div class="page dashboard-page">
            <PageHeader title="Dashboard de Inventario" icon_name="dashboard">
                {()}
            </PageHeader>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingState message="Cargando dashboard..." /> }
            >
                <div class="stats-grid">
                    <StatCard
                        label="Total Productos"
                        icon_name="products"
                        color="var(--color-primary)"
                        value=Signal::derive(move || stats.get().total_productos)
                        index=0
                        on_click=to_products
                    />
                    <StatCard
                        label="Productos Bajo Stock"
                        icon_name="warning"
                        color="var(--color-warning)"
                        value=Signal::derive(move || stats.get().productos_bajo_stock)
                        index=1
                        on_click=to_low_stock
                    />
                    <StatCard
                        label="Categorías"
                        icon_name="categories"
                        color="var(--color-success)"
                        value=Signal::derive(move || stats.get().total_categorias)
                        index=2
                        on_click=to_categories
                    />
                    <StatCard
                        label="Proveedores"
                        icon_name="suppliers"
                        color="var(--color-info)"
                        value=Signal::derive(move || stats.get().total_proveedores)
                        index=3
                        on_click=to_suppliers
                    />
                </div>

                <Show when=move || stats.get().show_low_stock_alert()>
                    <div class="alert alert--warning">
                        <span class="alert__icon">{icon("warning")}</span>
                        <div class="alert__content">
                            <h3>"Atención: Productos con bajo stock"</h3>
                            <p>{move || stats.get().low_stock_message()}</p>
                        </div>
                        <Button variant="primary".to_string() on_click=Callback::new(move |_| to_low_stock.run(()))>
                            "Ver Productos"
                        </Button>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

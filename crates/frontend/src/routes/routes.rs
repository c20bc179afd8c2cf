use crate::dashboards::InventoryDashboard;
use crate::domain::a001_category::ui::CategoryList;
use crate::domain::a002_supplier::ui::SupplierList;
use crate::domain::a003_product::ui::ProductList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"Página no encontrada"</h1>
            <a href="/">"Volver al Dashboard"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=InventoryDashboard />
                    <Route path=path!("/productos") view=ProductList />
                    <Route path=path!("/categorias") view=CategoryList />
                    <Route path=path!("/proveedores") view=SupplierList />
                </Routes>
            </Shell>
        </Router>
    }
}

pub mod state;

use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierDto};
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use self::state::{
    format_price, select_options, stock_class, ProductController, ProductStore, ProductViewModel,
    MESSAGES,
};
use crate::shared::components::ui::{Badge, Button, Input, Select, Textarea};
use crate::shared::components::{CardAnimated, EmptyState, LoadingState, PageHeader};
use crate::shared::crud::{CrudApi, RestResource};
use crate::shared::dialogs::BrowserDialogs;
use crate::shared::draft_binding::{draft_field, draft_setter};
use crate::shared::list_view_model::{edit_title, page_title};
use crate::shared::motion;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let vm: ProductStore = RwSignal::new(ProductViewModel::new());
    let controller = StoredValue::new_local(
        ProductController::new(RestResource::new(), vm, BrowserDialogs, MESSAGES)
            .surface_load_errors(),
    );
    let categories = RwSignal::new(Vec::<Category>::new());
    let suppliers = RwSignal::new(Vec::<Supplier>::new());

    let ctl = controller.get_value();
    spawn_local(async move { ctl.load().await });

    // Options of the two selects; a failure leaves the select empty
    spawn_local(async move {
        let category_api: RestResource<Category, CategoryDto> = RestResource::new();
        let supplier_api: RestResource<Supplier, SupplierDto> = RestResource::new();
        let (category_result, supplier_result) =
            futures::join!(category_api.list(), supplier_api.list());
        match category_result {
            Ok(list) => {
                let _ = categories.try_set(list);
            }
            Err(e) => log::error!("Error al cargar categorías: {}", e),
        }
        match supplier_result {
            Ok(list) => {
                let _ = suppliers.try_set(list);
            }
            Err(e) => log::error!("Error al cargar proveedores: {}", e),
        }
    });

    let items = Memo::new(move |_| vm.with(|m| m.items.clone()));
    let is_loading = Memo::new(move |_| vm.with(|m| m.is_loading()));
    let error = Memo::new(move |_| vm.with(|m| m.error().map(str::to_string)));
    let form_visible = Memo::new(move |_| vm.with(|m| m.is_form_visible()));
    let is_creating = Memo::new(move |_| vm.with(|m| m.is_creating()));
    let show_empty = Memo::new(move |_| vm.with(|m| m.show_empty_state()));
    let detail = Memo::new(move |_| vm.with(|m| m.detail_item().cloned()));

    let toggle_create = Callback::new(move |_| vm.update(|m| m.toggle_create_form()));
    let on_detail = Callback::new(move |id: EntityId| vm.update(|m| m.show_detail(id)));
    let on_edit = Callback::new(move |id: EntityId| vm.update(|m| m.edit(id)));
    let on_delete = Callback::new(move |id: EntityId| {
        let ctl = controller.get_value();
        spawn_local(async move { ctl.delete(id).await });
    });
    let on_submit = Callback::new(move |_| {
        let ctl = controller.get_value();
        spawn_local(async move {
            ctl.submit().await;
        });
    });

    view! {
        <div class="page productos-page">
            <PageHeader title={page_title::<Product>()} icon_name="products">
                <Button variant="primary".to_string() on_click=Callback::new(move |_| toggle_create.run(()))>
                    {move || if is_creating.get() { "Cancelar" } else { "+ Nuevo Producto" }}
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <Show when=move || form_visible.get()>
                <ProductForm vm=vm categories=categories suppliers=suppliers on_submit=on_submit />
            </Show>

            {move || detail.get().map(|product| view! {
                <ProductDetail
                    product=product
                    on_close=Callback::new(move |_| vm.update(|m| m.close_detail()))
                />
            })}

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <LoadingState message="Cargando productos..." /> }
            >
                <Show when=move || show_empty.get()>
                    <EmptyState
                        title="No hay productos registrados"
                        hint="Comienza agregando tu primer producto al inventario"
                        button_label="+ Crear Producto"
                        on_create=toggle_create
                    />
                </Show>
                <div class="productos-grid">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, product)| view! {
                                <ProductCard
                                    product=product
                                    index=index
                                    on_detail=on_detail
                                    on_edit=on_edit
                                    on_delete=on_delete
                                />
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProductCard(
    product: Product,
    index: usize,
    on_detail: Callback<EntityId>,
    on_edit: Callback<EntityId>,
    on_delete: Callback<EntityId>,
) -> impl IntoView {
    let id = product.id;
    let card_class = if product.needs_restock {
        "producto-card producto-card--bajo-stock"
    } else {
        "producto-card"
    };

    view! {
        <CardAnimated delay_ms=motion::stagger_delay(index) class=card_class>
            <div class="card-header">
                <h3>{product.name.clone()}</h3>
                {product.needs_restock.then(|| view! {
                    <Badge variant="warning".to_string()>"Bajo Stock"</Badge>
                })}
            </div>
            <div class="card-body">
                <p><strong>"Categoría: "</strong>{product.category_name.clone().unwrap_or_default()}</p>
                <p><strong>"Proveedor: "</strong>{product.supplier_name.clone().unwrap_or_default()}</p>
                <p><strong>"Precio: "</strong>{format_price(product.price)}</p>
                <p>
                    <strong>"Stock: "</strong>
                    <span class=stock_class(&product)>
                        {format!("{} / {}", product.stock, product.min_stock)}
                    </span>
                </p>
                {product
                    .description
                    .clone()
                    .filter(|d| !d.is_empty())
                    .map(|d| view! { <p class="card-description">{d}</p> })}
            </div>
            <div class="card-actions">
                <Button variant="secondary".to_string() size="small".to_string() on_click=Callback::new(move |_| on_detail.run(id))>
                    "Ver Detalles"
                </Button>
                <Button variant="outline".to_string() size="small".to_string() on_click=Callback::new(move |_| on_edit.run(id))>
                    "Editar"
                </Button>
                <Button variant="danger".to_string() size="small".to_string() on_click=Callback::new(move |_| on_delete.run(id))>
                    "Eliminar"
                </Button>
            </div>
        </CardAnimated>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProductDetail(product: Product, on_close: Callback<()>) -> impl IntoView {
    let updated = product
        .updated_at
        .or(product.created_at)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string());

    view! {
        <div class="detalle-panel">
            <div class="detalle-panel__header">
                <h2>{product.name.clone()}</h2>
                <Button variant="secondary".to_string() size="small".to_string() on_click=Callback::new(move |_| on_close.run(()))>
                    "Cerrar"
                </Button>
            </div>
            <dl class="detalle-panel__body">
                <dt>"Descripción"</dt>
                <dd>{product.description.clone().filter(|d| !d.is_empty()).unwrap_or_else(|| "Sin descripción".to_string())}</dd>
                <dt>"Categoría"</dt>
                <dd>{product.category_name.clone().unwrap_or_default()}</dd>
                <dt>"Proveedor"</dt>
                <dd>{product.supplier_name.clone().unwrap_or_default()}</dd>
                <dt>"Precio"</dt>
                <dd>{format_price(product.price)}</dd>
                <dt>"Stock actual"</dt>
                <dd class=stock_class(&product)>{product.stock}</dd>
                <dt>"Stock mínimo"</dt>
                <dd>{product.min_stock}</dd>
                {updated.map(|u| view! {
                    <dt>"Última actualización"</dt>
                    <dd>{u}</dd>
                })}
            </dl>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProductForm(
    vm: ProductStore,
    categories: RwSignal<Vec<Category>>,
    suppliers: RwSignal<Vec<Supplier>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let is_editing = move || vm.with(|m| m.is_editing());
    let category_options = Signal::derive(move || categories.with(|c| select_options(c)));
    let supplier_options = Signal::derive(move || suppliers.with(|s| select_options(s)));

    view! {
        <div class="form-container">
            <h2>{move || if is_editing() { edit_title::<Product>() } else { "Nuevo Producto".to_string() }}</h2>
            <form on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }>
                <Input
                    id="producto-nombre"
                    label="Nombre *"
                    value=draft_field(vm, |d| &d.name)
                    on_input=draft_setter(vm, |d, v| d.name = v)
                    required=true
                />
                <Textarea
                    id="producto-descripcion"
                    label="Descripción"
                    value=draft_field(vm, |d| &d.description)
                    on_input=draft_setter(vm, |d, v| d.description = v)
                />
                <div class="form-row">
                    <Input
                        id="producto-precio"
                        label="Precio *"
                        input_type="number".to_string()
                        step="0.01".to_string()
                        value=draft_field(vm, |d| &d.price)
                        on_input=draft_setter(vm, |d, v| d.price = v)
                        required=true
                    />
                    <Input
                        id="producto-stock"
                        label="Stock *"
                        input_type="number".to_string()
                        step="1".to_string()
                        value=draft_field(vm, |d| &d.stock)
                        on_input=draft_setter(vm, |d, v| d.stock = v)
                        required=true
                    />
                    <Input
                        id="producto-stock-minimo"
                        label="Stock Mínimo *"
                        input_type="number".to_string()
                        step="1".to_string()
                        value=draft_field(vm, |d| &d.min_stock)
                        on_input=draft_setter(vm, |d, v| d.min_stock = v)
                        required=true
                    />
                </div>
                <div class="form-row">
                    <Select
                        id="producto-categoria"
                        label="Categoría *"
                        placeholder="Seleccionar categoría"
                        options=category_options
                        value=draft_field(vm, |d| &d.category_id)
                        on_change=draft_setter(vm, |d, v| d.category_id = v)
                        required=true
                    />
                    <Select
                        id="producto-proveedor"
                        label="Proveedor *"
                        placeholder="Seleccionar proveedor"
                        options=supplier_options
                        value=draft_field(vm, |d| &d.supplier_id)
                        on_change=draft_setter(vm, |d, v| d.supplier_id = v)
                        required=true
                    />
                </div>
                <div class="form-actions">
                    <Button variant="success".to_string() button_type="submit".to_string()>
                        {move || if is_editing() { "Actualizar" } else { "Crear" }}
                    </Button>
                    <Button variant="secondary".to_string() on_click=Callback::new(move |_| vm.update(|m| m.cancel()))>
                        "Cancelar"
                    </Button>
                </div>
            </form>
        </div>
    }
}

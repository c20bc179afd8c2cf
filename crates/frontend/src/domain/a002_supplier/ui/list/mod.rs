pub mod state;

use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use self::state::{SupplierController, SupplierStore, SupplierViewModel, MESSAGES};
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::components::{CardAnimated, EmptyState, LoadingState, PageHeader};
use crate::shared::crud::RestResource;
use crate::shared::dialogs::BrowserDialogs;
use crate::shared::draft_binding::{draft_field, draft_setter};
use crate::shared::icons::icon;
use crate::shared::list_view_model::{edit_title, page_title};
use crate::shared::motion;

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let vm: SupplierStore = RwSignal::new(SupplierViewModel::new());
    let controller = StoredValue::new_local(SupplierController::new(
        RestResource::new(),
        vm,
        BrowserDialogs,
        MESSAGES,
    ));

    let run_load = move || {
        let ctl = controller.get_value();
        spawn_local(async move { ctl.load().await });
    };
    run_load();

    let items = Memo::new(move |_| vm.with(|m| m.items.clone()));
    let is_loading = Memo::new(move |_| vm.with(|m| m.is_loading()));
    let form_visible = Memo::new(move |_| vm.with(|m| m.is_form_visible()));
    let is_creating = Memo::new(move |_| vm.with(|m| m.is_creating()));
    let show_empty = Memo::new(move |_| vm.with(|m| m.show_empty_state()));

    let toggle_create = Callback::new(move |_| vm.update(|m| m.toggle_create_form()));
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
        <div class="page proveedores-page">
            <PageHeader title={page_title::<Supplier>()} icon_name="suppliers">
                <Button variant="primary".to_string() on_click=Callback::new(move |_| toggle_create.run(()))>
                    {move || if is_creating.get() { "Cancelar" } else { "+ Nuevo Proveedor" }}
                </Button>
            </PageHeader>

            <Show when=move || form_visible.get()>
                <SupplierForm vm=vm on_submit=on_submit />
            </Show>

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <LoadingState message="Cargando proveedores..." /> }
            >
                <Show when=move || show_empty.get()>
                    <EmptyState
                        title="No hay proveedores registrados"
                        hint="Registra tu primer proveedor para asignarlo a los productos"
                        button_label="+ Crear Proveedor"
                        on_create=toggle_create
                    />
                </Show>
                <div class="cards-grid">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, supplier)| view! {
                                <SupplierCard supplier=supplier index=index on_edit=on_edit on_delete=on_delete />
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

/// One contact line of a supplier card, skipped when the field is empty
fn contact_line(icon_name: &'static str, value: Option<String>) -> Option<impl IntoView> {
    value.filter(|v| !v.is_empty()).map(|v| {
        view! {
            <p class="contact-line">
                <span class="contact-line__icon">{icon(icon_name)}</span>
                {v}
            </p>
        }
    })
}

#[component]
#[allow(non_snake_case)]
fn SupplierCard(
    supplier: Supplier,
    index: usize,
    on_edit: Callback<EntityId>,
    on_delete: Callback<EntityId>,
) -> impl IntoView {
    let id = supplier.id;

    view! {
        <CardAnimated delay_ms=motion::stagger_delay(index) class="proveedor-card">
            <div class="card-header">
                <h3>{supplier.name.clone()}</h3>
            </div>
            <div class="card-body">
                {contact_line("user", supplier.contact.clone())}
                {contact_line("phone", supplier.phone.clone())}
                {contact_line("email", supplier.email.clone())}
                {contact_line("location", supplier.address.clone())}
            </div>
            <div class="card-actions">
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
fn SupplierForm(vm: SupplierStore, on_submit: Callback<()>) -> impl IntoView {
    let is_editing = move || vm.with(|m| m.is_editing());

    view! {
        <div class="form-container">
            <h2>{move || if is_editing() { edit_title::<Supplier>() } else { "Nuevo Proveedor".to_string() }}</h2>
            <form on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }>
                <Input
                    id="proveedor-nombre"
                    label="Nombre *"
                    value=draft_field(vm, |d| &d.name)
                    on_input=draft_setter(vm, |d, v| d.name = v)
                    required=true
                />
                <div class="form-row">
                    <Input
                        id="proveedor-contacto"
                        label="Contacto"
                        value=draft_field(vm, |d| &d.contact)
                        on_input=draft_setter(vm, |d, v| d.contact = v)
                    />
                    <Input
                        id="proveedor-telefono"
                        label="Teléfono"
                        input_type="tel".to_string()
                        value=draft_field(vm, |d| &d.phone)
                        on_input=draft_setter(vm, |d, v| d.phone = v)
                    />
                </div>
                <Input
                    id="proveedor-email"
                    label="Email"
                    input_type="email".to_string()
                    value=draft_field(vm, |d| &d.email)
                    on_input=draft_setter(vm, |d, v| d.email = v)
                />
                <Textarea
                    id="proveedor-direccion"
                    label="Dirección"
                    rows=2
                    value=draft_field(vm, |d| &d.address)
                    on_input=draft_setter(vm, |d, v| d.address = v)
                />
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

pub mod state;

use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use self::state::{CategoryController, CategoryStore, CategoryViewModel, MESSAGES};
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::components::{CardAnimated, EmptyState, LoadingState, PageHeader};
use crate::shared::crud::RestResource;
use crate::shared::dialogs::BrowserDialogs;
use crate::shared::draft_binding::{draft_field, draft_setter};
use crate::shared::list_view_model::{edit_title, page_title};
use crate::shared::motion;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let vm: CategoryStore = RwSignal::new(CategoryViewModel::new());
    let controller = StoredValue::new_local(CategoryController::new(
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
        <div class="page categorias-page">
            <PageHeader title={page_title::<Category>()} icon_name="categories">
                <Button variant="primary".to_string() on_click=Callback::new(move |_| toggle_create.run(()))>
                    {move || if is_creating.get() { "Cancelar" } else { "+ Nueva Categoría" }}
                </Button>
            </PageHeader>

            <Show when=move || form_visible.get()>
                <CategoryForm vm=vm on_submit=on_submit />
            </Show>

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <LoadingState message="Cargando categorías..." /> }
            >
                <Show when=move || show_empty.get()>
                    <EmptyState
                        title="No hay categorías registradas"
                        hint="Crea tu primera categoría para organizar los productos"
                        button_label="+ Crear Categoría"
                        on_create=toggle_create
                    />
                </Show>
                <div class="cards-grid">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, category)| view! {
                                <CategoryCard category=category index=index on_edit=on_edit on_delete=on_delete />
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
fn CategoryCard(
    category: Category,
    index: usize,
    on_edit: Callback<EntityId>,
    on_delete: Callback<EntityId>,
) -> impl IntoView {
    let id = category.id;

    view! {
        <CardAnimated delay_ms=motion::stagger_delay(index) class="categoria-card">
            <div class="card-header">
                <h3>{category.name.clone()}</h3>
            </div>
            <div class="card-body">
                {match category.description.clone().filter(|d| !d.is_empty()) {
                    Some(d) => view! { <p class="card-description">{d}</p> }.into_any(),
                    None => view! { <p class="card-description card-description--empty">"Sin descripción"</p> }.into_any(),
                }}
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
fn CategoryForm(vm: CategoryStore, on_submit: Callback<()>) -> impl IntoView {
    let is_editing = move || vm.with(|m| m.is_editing());

    view! {
        <div class="form-container">
            <h2>{move || if is_editing() { edit_title::<Category>() } else { "Nueva Categoría".to_string() }}</h2>
            <form on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }>
                <Input
                    id="categoria-nombre"
                    label="Nombre *"
                    value=draft_field(vm, |d| &d.name)
                    on_input=draft_setter(vm, |d, v| d.name = v)
                    required=true
                />
                <Textarea
                    id="categoria-descripcion"
                    label="Descripción"
                    value=draft_field(vm, |d| &d.description)
                    on_input=draft_setter(vm, |d, v| d.description = v)
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

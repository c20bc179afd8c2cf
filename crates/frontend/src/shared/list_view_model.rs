//! State of an entity list page: loaded items, the create/edit form and the
//! detail panel, changed only through the named transitions below.

use contracts::domain::common::{EntityId, InventoryEntity};

/// Editable copy of a record as typed into the form
pub trait FormDraft: Clone + Default {
    type Entity;
    type Payload;

    /// Draft pre-filled from an existing record
    fn from_entity(entity: &Self::Entity) -> Self;

    /// A field marked required in the form is empty
    fn missing_required(&self) -> bool;

    /// Payload sent to the API
    fn to_payload(&self) -> Self::Payload;
}

/// Header of the list page, e.g. "Gestión de Productos"
pub fn page_title<E: InventoryEntity>() -> String {
    format!("Gestión de {}", E::list_name())
}

/// Heading of the form in edit mode, e.g. "Editar Producto"
pub fn edit_title<E: InventoryEntity>() -> String {
    format!("Editar {}", E::element_name())
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EntityId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormState<D> {
    Hidden,
    Visible { mode: FormMode, draft: D },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailState {
    Hidden,
    Visible(EntityId),
}

/// API call a form submission turns into
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRequest<P> {
    Create(P),
    Update(EntityId, P),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListViewModel<E, D> {
    pub status: LoadStatus,
    pub items: Vec<E>,
    pub form: FormState<D>,
    pub detail: DetailState,
}

impl<E, D> Default for ListViewModel<E, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, D> ListViewModel<E, D> {
    pub fn new() -> Self {
        Self {
            status: LoadStatus::Loading,
            items: Vec::new(),
            form: FormState::Hidden,
            detail: DetailState::Hidden,
        }
    }

    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Replace the items with a fresh server list, keeping the server order
    ///
    /// On failure the previous items stay; `surface_errors` decides whether
    /// the page shows the error or quietly renders what it has.
    pub fn finish_load(&mut self, result: Result<Vec<E>, String>, surface_errors: bool) {
        match result {
            Ok(items) => {
                self.items = items;
                self.status = LoadStatus::Ready;
            }
            Err(e) if surface_errors => self.status = LoadStatus::Error(e),
            Err(_) => self.status = LoadStatus::Ready,
        }
    }

    pub fn cancel(&mut self) {
        self.form = FormState::Hidden;
    }

    pub fn submit_succeeded(&mut self) {
        self.form = FormState::Hidden;
    }

    pub fn close_detail(&mut self) {
        self.detail = DetailState::Hidden;
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_form_visible(&self) -> bool {
        matches!(self.form, FormState::Visible { .. })
    }

    pub fn is_editing(&self) -> bool {
        matches!(
            self.form,
            FormState::Visible {
                mode: FormMode::Edit(_),
                ..
            }
        )
    }

    /// The create form is open (the header button then reads "Cancelar")
    pub fn is_creating(&self) -> bool {
        matches!(
            self.form,
            FormState::Visible {
                mode: FormMode::Create,
                ..
            }
        )
    }

    pub fn draft(&self) -> Option<&D> {
        match &self.form {
            FormState::Visible { draft, .. } => Some(draft),
            FormState::Hidden => None,
        }
    }

    pub fn show_empty_state(&self) -> bool {
        self.status == LoadStatus::Ready && self.items.is_empty() && !self.is_form_visible()
    }
}

impl<E, D> ListViewModel<E, D>
where
    E: InventoryEntity,
    D: FormDraft<Entity = E>,
{
    pub fn toggle_create_form(&mut self) {
        self.form = if self.is_creating() {
            FormState::Hidden
        } else {
            FormState::Visible {
                mode: FormMode::Create,
                draft: D::default(),
            }
        };
        self.detail = DetailState::Hidden;
    }

    /// Open the form on record `id`; unknown ids leave the state untouched
    pub fn edit(&mut self, id: EntityId) {
        let Some(entity) = self.items.iter().find(|e| e.id() == id) else {
            return;
        };
        self.form = FormState::Visible {
            mode: FormMode::Edit(id),
            draft: D::from_entity(entity),
        };
        self.detail = DetailState::Hidden;
    }

    pub fn update_draft(&mut self, f: impl FnOnce(&mut D)) {
        if let FormState::Visible { draft, .. } = &mut self.form {
            f(draft);
        }
    }

    pub fn submit_request(&self) -> Option<SubmitRequest<D::Payload>> {
        let FormState::Visible { mode, draft } = &self.form else {
            return None;
        };
        if draft.missing_required() {
            return None;
        }
        let payload = draft.to_payload();
        Some(match mode {
            FormMode::Create => SubmitRequest::Create(payload),
            FormMode::Edit(id) => SubmitRequest::Update(*id, payload),
        })
    }

    pub fn show_detail(&mut self, id: EntityId) {
        if self.items.iter().any(|e| e.id() == id) {
            self.detail = DetailState::Visible(id);
            self.form = FormState::Hidden;
        }
    }

    pub fn delete_succeeded(&mut self, id: EntityId) {
        if self.detail == DetailState::Visible(id) {
            self.detail = DetailState::Hidden;
        }
    }

    /// Record shown in the detail panel, looked up in the loaded items
    pub fn detail_item(&self) -> Option<&E> {
        if self.is_form_visible() {
            return None;
        }
        match self.detail {
            DetailState::Visible(id) => self.items.iter().find(|e| e.id() == id),
            DetailState::Hidden => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Item {
        pub id: EntityId,
        pub name: String,
    }

    impl InventoryEntity for Item {
        fn id(&self) -> EntityId {
            self.id
        }
        fn name(&self) -> &str {
            &self.name
        }
        fn collection_name() -> &'static str {
            "items"
        }
        fn element_name() -> &'static str {
            "Item"
        }
        fn list_name() -> &'static str {
            "Items"
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct ItemDraft {
        pub name: String,
    }

    impl FormDraft for ItemDraft {
        type Entity = Item;
        type Payload = String;

        fn from_entity(entity: &Item) -> Self {
            Self {
                name: entity.name.clone(),
            }
        }
        fn missing_required(&self) -> bool {
            self.name.is_empty()
        }
        fn to_payload(&self) -> String {
            self.name.clone()
        }
    }

    pub fn item(id: EntityId, name: &str) -> Item {
        Item {
            id,
            name: name.into(),
        }
    }

    fn loaded() -> ListViewModel<Item, ItemDraft> {
        let mut vm = ListViewModel::new();
        vm.finish_load(Ok(vec![item(1, "uno"), item(2, "dos")]), false);
        vm
    }

    #[test]
    fn test_titles_from_entity_names() {
        assert_eq!(page_title::<Item>(), "Gestión de Items");
        assert_eq!(edit_title::<Item>(), "Editar Item");
    }

    #[test]
    fn test_new_is_loading_and_hidden() {
        let vm: ListViewModel<Item, ItemDraft> = ListViewModel::new();
        assert!(vm.is_loading());
        assert!(vm.items.is_empty());
        assert_eq!(vm.form, FormState::Hidden);
        assert_eq!(vm.detail, DetailState::Hidden);
        assert!(!vm.show_empty_state());
    }

    #[test]
    fn test_finish_load_keeps_server_order() {
        let mut vm: ListViewModel<Item, ItemDraft> = ListViewModel::new();
        vm.finish_load(Ok(vec![item(3, "c"), item(1, "a")]), false);
        assert_eq!(vm.status, LoadStatus::Ready);
        assert_eq!(vm.items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn test_finish_load_error_surfaces_only_when_asked() {
        let mut vm = loaded();
        vm.begin_load();
        vm.finish_load(Err("Error al cargar productos".into()), true);
        assert_eq!(vm.error(), Some("Error al cargar productos"));
        assert_eq!(vm.items.len(), 2);

        let mut vm = loaded();
        vm.finish_load(Err("boom".into()), false);
        assert_eq!(vm.status, LoadStatus::Ready);
        assert_eq!(vm.items.len(), 2);
    }

    #[test]
    fn test_toggle_create_form() {
        let mut vm = loaded();
        vm.show_detail(1);
        vm.toggle_create_form();
        assert!(vm.is_creating());
        assert_eq!(vm.draft(), Some(&ItemDraft::default()));
        assert_eq!(vm.detail, DetailState::Hidden);

        vm.toggle_create_form();
        assert_eq!(vm.form, FormState::Hidden);
    }

    #[test]
    fn test_toggle_while_editing_opens_empty_create_form() {
        let mut vm = loaded();
        vm.edit(2);
        vm.toggle_create_form();
        assert!(vm.is_creating());
        assert_eq!(vm.draft(), Some(&ItemDraft::default()));
    }

    #[test]
    fn test_edit_copies_record() {
        let mut vm = loaded();
        vm.show_detail(1);
        vm.edit(2);
        assert!(vm.is_editing());
        assert_eq!(vm.draft().map(|d| d.name.as_str()), Some("dos"));
        assert_eq!(vm.detail, DetailState::Hidden);
    }

    #[test]
    fn test_edit_unknown_id_is_ignored() {
        let mut vm = loaded();
        vm.edit(99);
        assert_eq!(vm.form, FormState::Hidden);
    }

    #[test]
    fn test_edit_then_cancel_leaves_items() {
        let mut vm = loaded();
        let before = vm.items.clone();
        vm.edit(1);
        vm.update_draft(|d| d.name = "cambiado".into());
        vm.cancel();
        assert_eq!(vm.form, FormState::Hidden);
        assert_eq!(vm.items, before);
    }

    #[test]
    fn test_update_draft_requires_visible_form() {
        let mut vm = loaded();
        vm.update_draft(|d| d.name = "x".into());
        assert_eq!(vm.draft(), None);
    }

    #[test]
    fn test_submit_request() {
        let mut vm = loaded();
        assert_eq!(vm.submit_request(), None);

        vm.toggle_create_form();
        assert_eq!(vm.submit_request(), None);

        vm.update_draft(|d| d.name = "tres".into());
        assert_eq!(
            vm.submit_request(),
            Some(SubmitRequest::Create("tres".to_string()))
        );

        vm.edit(1);
        assert_eq!(
            vm.submit_request(),
            Some(SubmitRequest::Update(1, "uno".to_string()))
        );

        vm.submit_succeeded();
        assert_eq!(vm.form, FormState::Hidden);
    }

    #[test]
    fn test_detail_item_hidden_while_form_open() {
        let mut vm = loaded();
        vm.show_detail(2);
        assert_eq!(vm.detail_item().map(|i| i.id), Some(2));

        vm.form = FormState::Visible {
            mode: FormMode::Create,
            draft: ItemDraft::default(),
        };
        assert_eq!(vm.detail_item(), None);
    }

    #[test]
    fn test_show_detail_closes_form() {
        let mut vm = loaded();
        vm.edit(1);
        vm.show_detail(2);
        assert_eq!(vm.form, FormState::Hidden);
        assert_eq!(vm.detail, DetailState::Visible(2));

        vm.close_detail();
        assert_eq!(vm.detail_item(), None);
    }

    #[test]
    fn test_delete_succeeded_clears_matching_detail() {
        let mut vm = loaded();
        vm.show_detail(2);
        vm.delete_succeeded(1);
        assert_eq!(vm.detail, DetailState::Visible(2));
        vm.delete_succeeded(2);
        assert_eq!(vm.detail, DetailState::Hidden);
    }

    #[test]
    fn test_show_empty_state() {
        let mut vm: ListViewModel<Item, ItemDraft> = ListViewModel::new();
        vm.finish_load(Ok(Vec::new()), false);
        assert!(vm.show_empty_state());

        vm.toggle_create_form();
        assert!(!vm.show_empty_state());
    }
}

//! Async orchestration of a list page: loading, saving and deleting records
//! against a [`CrudApi`], with the results applied to a [`ListViewModel`].

use contracts::domain::common::{EntityId, InventoryEntity};
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use super::crud::CrudApi;
use super::dialogs::Dialogs;
use super::list_view_model::{FormDraft, ListViewModel, SubmitRequest};

/// Holder of a [`ListViewModel`]
///
/// Both methods return `None` once the holder is gone, so results arriving
/// after the page was torn down are dropped.
pub trait ViewModelStore: Clone {
    type Entity;
    type Draft;

    fn apply<R>(&self, f: impl FnOnce(&mut ListViewModel<Self::Entity, Self::Draft>) -> R)
        -> Option<R>;

    fn inspect<R>(&self, f: impl FnOnce(&ListViewModel<Self::Entity, Self::Draft>) -> R) -> Option<R>;
}

impl<E, D> ViewModelStore for RwSignal<ListViewModel<E, D>>
where
    E: Send + Sync + 'static,
    D: Send + Sync + 'static,
{
    type Entity = E;
    type Draft = D;

    fn apply<R>(&self, f: impl FnOnce(&mut ListViewModel<E, D>) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&ListViewModel<E, D>) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<E, D> ViewModelStore for Rc<RefCell<ListViewModel<E, D>>> {
    type Entity = E;
    type Draft = D;

    fn apply<R>(&self, f: impl FnOnce(&mut ListViewModel<E, D>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn inspect<R>(&self, f: impl FnOnce(&ListViewModel<E, D>) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

/// User-facing texts of one entity page
#[derive(Clone, Copy, Debug)]
pub struct ListMessages {
    pub load_error: &'static str,
    pub save_error: &'static str,
    pub delete_error: &'static str,
    pub delete_confirm: &'static str,
}

pub struct ListController<A, S, G> {
    api: Rc<A>,
    store: S,
    dialogs: Rc<G>,
    messages: ListMessages,
    surface_load_errors: bool,
}

impl<A, S: Clone, G> Clone for ListController<A, S, G> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            store: self.store.clone(),
            dialogs: Rc::clone(&self.dialogs),
            messages: self.messages,
            surface_load_errors: self.surface_load_errors,
        }
    }
}

impl<A, S, G> ListController<A, S, G>
where
    A: CrudApi,
    A::Entity: InventoryEntity,
    S: ViewModelStore<Entity = A::Entity>,
    S::Draft: FormDraft<Entity = A::Entity, Payload = A::Payload>,
    G: Dialogs,
{
    pub fn new(api: A, store: S, dialogs: G, messages: ListMessages) -> Self {
        Self {
            api: Rc::new(api),
            store,
            dialogs: Rc::new(dialogs),
            messages,
            surface_load_errors: false,
        }
    }

    /// Show load failures on the page instead of only logging them
    pub fn surface_load_errors(mut self) -> Self {
        self.surface_load_errors = true;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn load(&self) {
        self.store.apply(|vm| vm.begin_load());
        let result = self.api.list().await;
        if let Err(e) = &result {
            log::error!("{}: {}", self.messages.load_error, e);
        }
        let message = self.messages.load_error;
        let surface = self.surface_load_errors;
        self.store
            .apply(move |vm| vm.finish_load(result.map_err(|_| message.to_string()), surface));
    }

    /// Send the open form; returns `true` when the record was saved
    ///
    /// Nothing is sent while the form is hidden or a required field is
    /// empty. On failure the form stays open with its draft.
    pub async fn submit(&self) -> bool {
        let Some(request) = self.store.inspect(|vm| vm.submit_request()).flatten() else {
            return false;
        };

        let result = match &request {
            SubmitRequest::Create(payload) => self.api.create(payload).await,
            SubmitRequest::Update(id, payload) => self.api.update(*id, payload).await,
        };

        match result {
            Ok(()) => {
                self.store.apply(|vm| vm.submit_succeeded());
                self.load().await;
                true
            }
            Err(e) => {
                log::error!("{}: {}", self.messages.save_error, e);
                self.dialogs.alert(self.messages.save_error);
                false
            }
        }
    }

    /// Delete after confirmation; a declined prompt sends nothing
    pub async fn delete(&self, id: EntityId) {
        if !self.dialogs.confirm(self.messages.delete_confirm) {
            return;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                self.store.apply(|vm| vm.delete_succeeded(id));
                self.load().await;
            }
            Err(e) => {
                log::error!("{}: {}", self.messages.delete_error, e);
                self.dialogs.alert(self.messages.delete_error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view_model::tests::{item, Item, ItemDraft};
    use crate::shared::list_view_model::{DetailState, FormState, LoadStatus};
    use async_trait::async_trait;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Create(String),
        Update(EntityId, String),
        Delete(EntityId),
    }

    /// In-memory collection recording every call
    #[derive(Default)]
    struct MockApi {
        items: RefCell<Vec<Item>>,
        calls: RefCell<Vec<Call>>,
        fail_list: Cell<bool>,
        fail_writes: Cell<bool>,
    }

    impl MockApi {
        fn with_items(items: Vec<Item>) -> Self {
            let api = Self::default();
            *api.items.borrow_mut() = items;
            api
        }

        fn mutations(&self) -> Vec<Call> {
            self.calls
                .borrow()
                .iter()
                .filter(|c| **c != Call::List)
                .cloned()
                .collect()
        }

        fn list_calls(&self) -> usize {
            self.calls.borrow().iter().filter(|c| **c == Call::List).count()
        }
    }

    #[async_trait(?Send)]
    impl CrudApi for Rc<MockApi> {
        type Entity = Item;
        type Payload = String;

        async fn list(&self) -> Result<Vec<Item>, String> {
            self.calls.borrow_mut().push(Call::List);
            if self.fail_list.get() {
                return Err("network down".into());
            }
            Ok(self.items.borrow().clone())
        }

        async fn create(&self, payload: &String) -> Result<(), String> {
            self.calls.borrow_mut().push(Call::Create(payload.clone()));
            if self.fail_writes.get() {
                return Err("HTTP 500".into());
            }
            let mut items = self.items.borrow_mut();
            let id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
            items.push(item(id, payload));
            Ok(())
        }

        async fn update(&self, id: EntityId, payload: &String) -> Result<(), String> {
            self.calls
                .borrow_mut()
                .push(Call::Update(id, payload.clone()));
            if self.fail_writes.get() {
                return Err("HTTP 500".into());
            }
            for i in self.items.borrow_mut().iter_mut().filter(|i| i.id == id) {
                i.name = payload.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: EntityId) -> Result<(), String> {
            self.calls.borrow_mut().push(Call::Delete(id));
            if self.fail_writes.get() {
                return Err("HTTP 500".into());
            }
            self.items.borrow_mut().retain(|i| i.id != id);
            Ok(())
        }
    }

    struct ScriptedDialogs {
        answer: bool,
        prompts: RefCell<Vec<String>>,
        alerts: RefCell<Vec<String>>,
    }

    impl ScriptedDialogs {
        fn answering(answer: bool) -> Rc<Self> {
            Rc::new(Self {
                answer,
                prompts: RefCell::new(Vec::new()),
                alerts: RefCell::new(Vec::new()),
            })
        }
    }

    impl Dialogs for Rc<ScriptedDialogs> {
        fn confirm(&self, message: &str) -> bool {
            self.prompts.borrow_mut().push(message.to_string());
            self.answer
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    const MESSAGES: ListMessages = ListMessages {
        load_error: "Error al cargar items",
        save_error: "Error al guardar item",
        delete_error: "Error al eliminar item",
        delete_confirm: "¿Estás seguro de eliminar este item?",
    };

    type Store = Rc<RefCell<ListViewModel<Item, ItemDraft>>>;

    fn setup(
        items: Vec<Item>,
        confirm: bool,
    ) -> (
        ListController<Rc<MockApi>, Store, Rc<ScriptedDialogs>>,
        Rc<MockApi>,
        Rc<ScriptedDialogs>,
    ) {
        let api = Rc::new(MockApi::with_items(items));
        let dialogs = ScriptedDialogs::answering(confirm);
        let store: Store = Rc::new(RefCell::new(ListViewModel::new()));
        let controller = ListController::new(api.clone(), store, dialogs.clone(), MESSAGES);
        (controller, api, dialogs)
    }

    #[tokio::test]
    async fn test_load_replaces_items() {
        let (ctl, _, _) = setup(vec![item(1, "uno"), item(2, "dos")], true);
        ctl.load().await;
        let vm = ctl.store().borrow();
        assert_eq!(vm.status, LoadStatus::Ready);
        assert_eq!(vm.items.len(), 2);
    }

    #[tokio::test]
    async fn test_load_failure_is_quiet_unless_surfaced() {
        let (ctl, api, _) = setup(Vec::new(), true);
        api.fail_list.set(true);
        ctl.load().await;
        assert_eq!(ctl.store().borrow().status, LoadStatus::Ready);
        assert!(ctl.store().borrow().show_empty_state());

        let ctl = ctl.surface_load_errors();
        ctl.load().await;
        assert_eq!(ctl.store().borrow().error(), Some("Error al cargar items"));
    }

    #[tokio::test]
    async fn test_create_then_reload_contains_record() {
        let (ctl, api, _) = setup(Vec::new(), true);
        ctl.load().await;

        ctl.store().borrow_mut().toggle_create_form();
        ctl.store()
            .borrow_mut()
            .update_draft(|d| d.name = "Herramientas".into());
        assert!(ctl.submit().await);

        assert_eq!(api.mutations(), vec![Call::Create("Herramientas".into())]);
        assert_eq!(api.list_calls(), 2);
        let vm = ctl.store().borrow();
        assert_eq!(vm.form, FormState::Hidden);
        assert!(vm.items.iter().any(|i| i.name == "Herramientas"));
    }

    #[tokio::test]
    async fn test_update_sends_edited_id() {
        let (ctl, api, _) = setup(vec![item(1, "uno")], true);
        ctl.load().await;
        ctl.store().borrow_mut().edit(1);
        ctl.store().borrow_mut().update_draft(|d| d.name = "primero".into());
        assert!(ctl.submit().await);
        assert_eq!(api.mutations(), vec![Call::Update(1, "primero".into())]);
        assert_eq!(ctl.store().borrow().items[0].name, "primero");
    }

    #[tokio::test]
    async fn test_empty_required_field_sends_nothing() {
        let (ctl, api, _) = setup(Vec::new(), true);
        ctl.load().await;
        ctl.store().borrow_mut().toggle_create_form();
        assert!(!ctl.submit().await);
        assert!(api.mutations().is_empty());
        assert!(ctl.store().borrow().is_creating());
    }

    #[tokio::test]
    async fn test_edit_then_cancel_sends_nothing() {
        let (ctl, api, _) = setup(vec![item(1, "uno")], true);
        ctl.load().await;
        ctl.store().borrow_mut().edit(1);
        ctl.store().borrow_mut().cancel();
        assert!(!ctl.submit().await);
        assert!(api.mutations().is_empty());
        assert_eq!(ctl.store().borrow().items, vec![item(1, "uno")]);
    }

    #[tokio::test]
    async fn test_save_failure_alerts_and_keeps_draft() {
        let (ctl, api, dialogs) = setup(Vec::new(), true);
        ctl.load().await;
        api.fail_writes.set(true);
        ctl.store().borrow_mut().toggle_create_form();
        ctl.store().borrow_mut().update_draft(|d| d.name = "x".into());

        assert!(!ctl.submit().await);
        assert_eq!(*dialogs.alerts.borrow(), vec![MESSAGES.save_error.to_string()]);
        assert_eq!(
            ctl.store().borrow().draft().map(|d| d.name.clone()),
            Some("x".to_string())
        );
        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let (ctl, api, dialogs) = setup(vec![item(1, "uno")], false);
        ctl.load().await;
        ctl.delete(1).await;
        assert!(api.mutations().is_empty());
        assert_eq!(api.list_calls(), 1);
        assert_eq!(dialogs.prompts.borrow().len(), 1);
        assert_eq!(ctl.store().borrow().items.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_clears_detail_and_reloads() {
        let (ctl, api, _) = setup(vec![item(1, "uno"), item(2, "dos")], true);
        ctl.load().await;
        ctl.store().borrow_mut().show_detail(2);

        ctl.delete(2).await;
        assert_eq!(api.mutations(), vec![Call::Delete(2)]);
        let vm = ctl.store().borrow();
        assert_eq!(vm.detail, DetailState::Hidden);
        assert_eq!(vm.items, vec![item(1, "uno")]);
    }

    #[tokio::test]
    async fn test_delete_failure_alerts() {
        let (ctl, api, dialogs) = setup(vec![item(1, "uno")], true);
        ctl.load().await;
        api.fail_writes.set(true);
        ctl.delete(1).await;
        assert_eq!(*dialogs.alerts.borrow(), vec![MESSAGES.delete_error.to_string()]);
        assert_eq!(ctl.store().borrow().items.len(), 1);
    }

    /// Store whose page has already been torn down
    #[derive(Clone)]
    struct GoneStore;

    impl ViewModelStore for GoneStore {
        type Entity = Item;
        type Draft = ItemDraft;

        fn apply<R>(&self, _f: impl FnOnce(&mut ListViewModel<Item, ItemDraft>) -> R) -> Option<R> {
            None
        }

        fn inspect<R>(&self, _f: impl FnOnce(&ListViewModel<Item, ItemDraft>) -> R) -> Option<R> {
            None
        }
    }

    #[tokio::test]
    async fn test_late_results_are_dropped() {
        let api = Rc::new(MockApi::with_items(vec![item(1, "uno")]));
        let ctl = ListController::new(
            api.clone(),
            GoneStore,
            ScriptedDialogs::answering(true),
            MESSAGES,
        );
        ctl.load().await;
        assert!(!ctl.submit().await);
        assert_eq!(api.list_calls(), 1);
    }
}

//! Glue between form inputs and the draft held in a list view-model signal.

use contracts::domain::common::InventoryEntity;
use leptos::prelude::*;

use super::list_view_model::{FormDraft, ListViewModel};

/// Current value of one draft field, empty while the form is hidden
pub fn draft_field<E, D>(vm: RwSignal<ListViewModel<E, D>>, get: fn(&D) -> &String) -> Signal<String>
where
    E: Send + Sync + 'static,
    D: Send + Sync + 'static,
{
    Signal::derive(move || {
        vm.with(|m| m.draft().map(|d| get(d).clone()))
            .unwrap_or_default()
    })
}

/// Input handler writing one draft field
pub fn draft_setter<E, D>(vm: RwSignal<ListViewModel<E, D>>, set: fn(&mut D, String)) -> Callback<String>
where
    E: InventoryEntity + Send + Sync + 'static,
    D: FormDraft<Entity = E> + Send + Sync + 'static,
{
    Callback::new(move |value: String| vm.update(|m| m.update_draft(|d| set(d, value))))
}

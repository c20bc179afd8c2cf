use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use leptos::prelude::RwSignal;

use crate::shared::crud::RestResource;
use crate::shared::dialogs::BrowserDialogs;
use crate::shared::list_controller::{ListController, ListMessages};
use crate::shared::list_view_model::{FormDraft, ListViewModel};

pub const MESSAGES: ListMessages = ListMessages {
    load_error: "Error al cargar categorías",
    save_error: "Error al guardar categoría",
    delete_error: "Error al eliminar categoría",
    delete_confirm: "¿Estás seguro de eliminar esta categoría?",
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl FormDraft for CategoryDraft {
    type Entity = Category;
    type Payload = CategoryDto;

    fn from_entity(entity: &Category) -> Self {
        Self {
            name: entity.name.clone(),
            description: entity.description.clone().unwrap_or_default(),
        }
    }

    fn missing_required(&self) -> bool {
        self.name.is_empty()
    }

    fn to_payload(&self) -> CategoryDto {
        CategoryDto {
            name: self.name.clone(),
            description: Some(self.description.clone()).filter(|d| !d.trim().is_empty()),
        }
    }
}

pub type CategoryViewModel = ListViewModel<Category, CategoryDraft>;
pub type CategoryStore = RwSignal<CategoryViewModel>;
pub type CategoryController =
    ListController<RestResource<Category, CategoryDto>, CategoryStore, BrowserDialogs>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view_model::SubmitRequest;

    fn category(id: i32, name: &str, description: Option<&str>) -> Category {
        Category {
            id,
            name: name.into(),
            description: description.map(Into::into),
            created_at: None,
        }
    }

    #[test]
    fn test_empty_name_sends_nothing() {
        let mut vm = CategoryViewModel::new();
        vm.finish_load(Ok(Vec::new()), false);
        vm.toggle_create_form();
        vm.update_draft(|d| d.description = "Sin nombre".into());
        assert_eq!(vm.submit_request(), None);
    }

    #[test]
    fn test_empty_list_shows_prompt_until_form_opens() {
        let mut vm = CategoryViewModel::new();
        vm.finish_load(Ok(Vec::new()), false);
        assert!(vm.show_empty_state());
        vm.toggle_create_form();
        assert!(!vm.show_empty_state());
        assert!(vm.is_creating());
    }

    #[test]
    fn test_edit_prefills_draft() {
        let mut vm = CategoryViewModel::new();
        vm.finish_load(Ok(vec![category(4, "Hogar", None)]), false);
        vm.edit(4);
        assert_eq!(
            vm.draft(),
            Some(&CategoryDraft {
                name: "Hogar".into(),
                description: String::new(),
            })
        );
        vm.update_draft(|d| d.description = "Artículos para el hogar".into());
        assert_eq!(
            vm.submit_request(),
            Some(SubmitRequest::Update(
                4,
                CategoryDto {
                    name: "Hogar".into(),
                    description: Some("Artículos para el hogar".into()),
                }
            ))
        );
    }

    #[test]
    fn test_titles() {
        use crate::shared::list_view_model::{edit_title, page_title};
        assert_eq!(page_title::<Category>(), "Gestión de Categorías");
        assert_eq!(edit_title::<Category>(), "Editar Categoría");
    }

    #[test]
    fn test_blank_description_is_omitted() {
        let draft = CategoryDraft {
            name: "Deportes".into(),
            description: "  ".into(),
        };
        assert_eq!(draft.to_payload().description, None);
    }
}

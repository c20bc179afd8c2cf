pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod crud;
pub mod dialogs;
pub mod draft_binding;
pub mod icons;
pub mod list_controller;
pub mod list_view_model;
pub mod motion;
pub mod number_parse;

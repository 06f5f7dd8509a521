pub mod auth_editor;
pub mod body_editor;
pub mod kv_editor;
pub mod tab_bar;
pub mod url_bar;

//! Edit Field Focus

use todo_core::TodoId;
use wasm_bindgen::JsCast;

use super::js_error;

/// Focus and select the edit input rendered for `id`
pub fn focus_edit_input(id: TodoId) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let selector = format!("[data-id=\"{}\"] .todo-edit-input", id);
    let input = document
        .query_selector(&selector)
        .map_err(js_error)?
        .ok_or_else(|| format!("no edit input for todo {}", id))?
        .dyn_into::<web_sys::HtmlInputElement>()
        .map_err(|_| "edit field is not an input".to_string())?;
    input.focus().map_err(js_error)?;
    input.select();
    Ok(())
}

//! UI Components
//!
//! Leptos components rendering the controller's projection.

mod empty_state;
mod filter_bar;
mod list_footer;
mod new_todo_form;
mod todo_edit_row;
mod todo_list_view;
mod todo_row;

pub use empty_state::EmptyState;
pub use filter_bar::FilterBar;
pub use list_footer::ListFooter;
pub use new_todo_form::NewTodoForm;
pub use todo_edit_row::TodoEditRow;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;

/// `display` value for an element shown as `shown` or hidden
fn display(visible: bool, shown: &'static str) -> &'static str {
    if visible { shown } else { "none" }
}

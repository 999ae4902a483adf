//! Todo List View Component
//!
//! Renders the projection's rows, each as a static or an edit row.

use leptos::prelude::*;

use super::{display, EmptyState, TodoEditRow, TodoRow};
use crate::context::use_app_context;

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_app_context();
    let rows = move || ctx.projection.with(|p| p.rows().to_vec());

    view! {
        <div
            id="todoList"
            class="todo-list"
            style:display=move || display(ctx.projection.with(|p| p.list_visible()), "flex")
        >
            <For
                each=rows
                key=|row| {
                    // every displayed field, so any change re-renders the row
                    (row.todo.id, row.todo.text.clone(), row.todo.completed, row.editing)
                }
                children=move |row| {
                    if row.editing {
                        view! { <TodoEditRow todo=row.todo /> }.into_any()
                    } else {
                        view! { <TodoRow todo=row.todo /> }.into_any()
                    }
                }
            />
        </div>

        <EmptyState />
    }
}

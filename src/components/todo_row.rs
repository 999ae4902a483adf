//! Todo Row Component
//!
//! A todo in normal display: completion toggle, text, edit and delete.

use leptos::prelude::*;
use todo_core::{Intent, Todo};

use crate::context::use_app_context;

#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id;
    let completed = todo.completed;
    let (removing, set_removing) = signal(false);

    let item_class = move || {
        let mut c = String::from("todo-item");
        if completed { c.push_str(" completed"); }
        if removing.get() { c.push_str(" removing"); }
        c
    };

    let start_edit = move || ctx.dispatch(Intent::StartEdit(id));

    view! {
        <div class=item_class data-id=id.to_string()>
            <div class="todo-content">
                <button
                    class={if completed { "complete-btn completed" } else { "complete-btn" }}
                    on:click=move |_| ctx.dispatch(Intent::Toggle(id))
                >
                    {completed.then(|| view! { <span class="check-icon">"✓"</span> })}
                </button>

                <span
                    class={if completed { "todo-text completed" } else { "todo-text" }}
                    on:dblclick=move |_| start_edit()
                >
                    {todo.text}
                </span>

                <div class="todo-actions">
                    <button class="action-btn edit-btn" title="Edit" on:click=move |_| start_edit()>
                        "✎"
                    </button>
                    <button
                        class="action-btn delete-btn"
                        title="Delete"
                        on:click=move |_| {
                            if !removing.get_untracked() {
                                set_removing.set(true);
                                ctx.remove_later(id);
                            }
                        }
                    >
                        "🗑"
                    </button>
                </div>
            </div>
        </div>
    }
}

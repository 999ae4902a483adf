//! Todo Edit Row Component
//!
//! Inline editor: saves on blur and Enter, cancels on Escape.

use leptos::html;
use leptos::prelude::*;
use todo_core::{Intent, Todo};

use crate::context::use_app_context;

#[component]
pub fn TodoEditRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id;
    let completed = todo.completed;
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let save = move || {
        let text = input_ref.get_untracked().map(|input| input.value()).unwrap_or_default();
        ctx.dispatch(Intent::SaveEdit(text));
    };
    let cancel = move || ctx.dispatch(Intent::CancelEdit);

    view! {
        <div class={if completed { "todo-item completed" } else { "todo-item" }} data-id=id.to_string()>
            <div class="todo-content">
                <button
                    class={if completed { "complete-btn completed" } else { "complete-btn" }}
                    on:click=move |_| ctx.dispatch(Intent::Toggle(id))
                >
                    {completed.then(|| view! { <span class="check-icon">"✓"</span> })}
                </button>

                <input
                    type="text"
                    class="todo-edit-input"
                    node_ref=input_ref
                    prop:value=todo.text
                    on:blur=move |_| save()
                    on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => save(),
                        "Escape" => cancel(),
                        _ => {}
                    }
                />

                // mousedown would blur the input and save before the click lands
                <div class="todo-actions">
                    <button
                        class="action-btn save-btn"
                        title="Save"
                        on:mousedown=|ev: web_sys::MouseEvent| ev.prevent_default()
                        on:click=move |_| save()
                    >
                        "✓"
                    </button>
                    <button
                        class="action-btn cancel-btn"
                        title="Cancel"
                        on:mousedown=|ev: web_sys::MouseEvent| ev.prevent_default()
                        on:click=move |_| cancel()
                    >
                        "✕"
                    </button>
                </div>
            </div>
        </div>
    }
}

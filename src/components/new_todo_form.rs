//! New Todo Form Component
//!
//! Text input plus Add button. Enter in the input also adds.

use leptos::prelude::*;
use todo_core::Intent;

use crate::context::use_app_context;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let add = move || ctx.dispatch(Intent::Add(ctx.new_text.get_untracked()));

    view! {
        <div class="input-section">
            <input
                id="todoInput"
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || ctx.new_text.get()
                on:input=move |ev| ctx.set_new_text(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        add();
                    }
                }
            />
            <button id="addBtn" class="add-btn" on:click=move |_| add()>"Add"</button>
        </div>
    }
}

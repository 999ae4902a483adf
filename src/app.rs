//! Todo List Frontend App
//!
//! Builds the controller once at startup and lays out the widget.

use leptos::prelude::*;
use todo_core::{SystemClock, TodoConfig, TodoController};

use crate::commands::BrowserStore;
use crate::components::{FilterBar, ListFooter, NewTodoForm, TodoListView};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let controller = TodoController::initialize(BrowserStore::local(), SystemClock, TodoConfig::default());
    provide_context(AppContext::new(controller));

    view! {
        <div class="container">
            <header class="header">
                <h1>"Todo List"</h1>
                <p class="subtitle">"Stay organized, get things done"</p>
            </header>

            <NewTodoForm />

            <FilterBar />

            <TodoListView />

            <ListFooter />
        </div>
    }
}

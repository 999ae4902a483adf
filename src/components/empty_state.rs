//! Empty State Component

use leptos::prelude::*;

use super::display;
use crate::context::use_app_context;

/// Shown instead of the list when the current filter matches nothing
#[component]
pub fn EmptyState() -> impl IntoView {
    let ctx = use_app_context();
    let message = move || ctx.projection.with(|p| p.empty_message().map(str::to_string));

    view! {
        <div id="emptyState" class="empty-state" style:display=move || display(message().is_some(), "block")>
            <p class="empty-message">{move || message().unwrap_or_default()}</p>
        </div>
    }
}

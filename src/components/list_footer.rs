//! List Footer Component
//!
//! Clear-completed and export actions plus the footer statistics.

use leptos::prelude::*;
use todo_core::Intent;

use super::display;
use crate::context::use_app_context;

#[component]
pub fn ListFooter() -> impl IntoView {
    let ctx = use_app_context();
    let counts = move || ctx.projection.with(|p| p.counts);

    view! {
        <div class="actions">
            <button
                id="clearCompletedBtn"
                class="clear-btn"
                style:display=move || display(ctx.projection.with(|p| p.show_clear_completed), "block")
                on:click=move |_| ctx.dispatch(Intent::ClearCompleted)
            >
                "Clear Completed"
            </button>
            <button
                id="downloadBtn"
                class="download-btn"
                style:display=move || display(ctx.projection.with(|p| p.show_export), "flex")
                on:click=move |_| ctx.dispatch(Intent::Export)
            >
                "Download JSON"
            </button>
        </div>

        <footer
            id="footerStats"
            class="footer-stats"
            style:display=move || display(ctx.projection.with(|p| p.show_footer), "block")
        >
            <span>"Total: " <strong id="totalCount">{move || counts().total}</strong></span>
            <span>"Active: " <strong id="activeFooterCount">{move || counts().active}</strong></span>
            <span>"Completed: " <strong id="completedFooterCount">{move || counts().completed}</strong></span>
        </footer>
    }
}

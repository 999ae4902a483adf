//! Filter Bar Component
//!
//! One button per filter with its count. The clicked button's
//! `data-filter` token is what gets dispatched.

use leptos::prelude::*;
use todo_core::{Filter, Intent};
use wasm_bindgen::JsCast;

use crate::context::use_app_context;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="filters">
            {Filter::ALL.iter().map(|filter| {
                let filter = *filter;
                let is_active = move || ctx.projection.with(|p| p.active_filter == filter);
                let count = move || ctx.projection.with(|p| p.counts.for_filter(filter));
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        data-filter=filter.as_str()
                        on:click=move |ev: web_sys::MouseEvent| {
                            let token = ev
                                .current_target()
                                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                                .and_then(|el| el.get_attribute("data-filter"))
                                .unwrap_or_default();
                            ctx.dispatch(Intent::SetFilter(token));
                        }
                    >
                        {filter.label()}
                        " "
                        <span class="filter-count" id=format!("{}Count", filter.as_str())>{count}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

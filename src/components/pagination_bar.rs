//! Pagination Bar Component
//!
//! Prev/next controls driven by the pagination metadata the server
//! returned for the current page.

use leptos::prelude::*;

use crate::models::PaginationMeta;

#[component]
pub fn PaginationBar(
    #[prop(into)] meta: Signal<Option<PaginationMeta>>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        {move || {
            meta.get().map(|meta| {
                let page = meta.page;
                let has_previous = meta.has_previous;
                let has_next = meta.has_next;
                view! {
                    <div class="pagination-bar">
                        <button
                            disabled=!has_previous
                            on:click=move |_| on_page.run(page.saturating_sub(1))
                        >
                            "Previous"
                        </button>
                        <span class="pagination-label">
                            {format!("Page {} of {}", meta.page, meta.total_pages)}
                        </span>
                        <button disabled=!has_next on:click=move |_| on_page.run(page + 1)>
                            "Next"
                        </button>
                    </div>
                }
            })
        }}
    }
}

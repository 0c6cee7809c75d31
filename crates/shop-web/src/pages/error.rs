//! Error Page

use leptos::prelude::*;

#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <div class="error-page">
            <a href="/" class="btn">"Back to the store"</a>
        </div>
    }
}

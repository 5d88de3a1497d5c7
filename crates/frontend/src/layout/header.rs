//! TopHeader component - application top navigation bar.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <header data-zone="header" class="top-header">
            <div class="top-header__brand">
                {icon("database")}
                <span class="top-header__title">"Query Console"</span>
            </div>
            <nav class="top-header__nav">
                <A href="/">"Docs"</A>
                <A href="/blog">"Blog"</A>
                <A href="/query">"Try it"</A>
            </nav>
        </header>
    }
}

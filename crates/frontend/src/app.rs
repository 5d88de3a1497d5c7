use crate::layout::Shell;
use crate::pages::{BlogPage, DocsPage};
use crate::usecases::QueryConsole;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="page page--content">"Page not found."</div> }>
                    <Route path=path!("/") view=DocsPage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/query") view=QueryConsole />
                </Routes>
            </Shell>
        </Router>
    }
}

use crate::shared::api_utils::{api_url, get_json};
use crate::shared::icons::icon;
use contracts::system::version::VersionInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Footer() -> impl IntoView {
    let version = RwSignal::new(None::<String>);

    spawn_local(async move {
        match get_json::<VersionInfo>(&api_url("/version")).await {
            Ok(info) => {
                version.try_set(Some(info.version));
            }
            Err(e) => log::error!("Failed to fetch backend version: {}", e),
        }
    });

    let paper_url = api_url("/download/paper");
    let slides_url = api_url("/download/slides");

    view! {
        <footer data-zone="footer" class="status-bar">
            <div class="status-bar__links">
                <a href=paper_url target="_blank" rel="noopener">
                    {icon("download")}
                    " Paper"
                </a>
                <a href=slides_url target="_blank" rel="noopener">
                    {icon("download")}
                    " Slides"
                </a>
            </div>
            {move || version.get().map(|v| view! {
                <span class="status-bar__version">{format!("v{}", v)}</span>
            })}
        </footer>
    }
}

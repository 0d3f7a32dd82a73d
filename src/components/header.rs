use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="app-title">"LUME " <span class="app-title-accent">"AI"</span></h1>
            <span class="engine-badge">"LIVE ENGINE"</span>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Console"</a>
                </li>
                <li class="nav-item">
                    <a href="/settings" class="nav-link">"Settings"</a>
                </li>
            </ul>
        </header>
    }
}

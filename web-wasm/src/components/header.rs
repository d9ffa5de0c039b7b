//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header py-4">
            <nav class="d-flex justify-content-between align-items-center">
                <h1 class="h4 mb-0">"Portfolio"</h1>
                <div class="d-flex gap-3">
                    <a href="#projects">"Projects"</a>
                    <a href="#experience">"Experience"</a>
                    <a href="#contact">"Contact"</a>
                </div>
            </nav>
        </header>
    }
}

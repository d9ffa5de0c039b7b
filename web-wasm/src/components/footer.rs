//! フッターコンポーネント

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="py-4 text-center muted">
            "© " <span id="year">{year}</span>
        </footer>
    }
}
